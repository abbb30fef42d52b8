pub mod aggregate;
pub mod request;
pub mod whatsapp;

pub use aggregate::{ContactFormData, FormField};
pub use request::{CmsErrorResponse, ContactMessageDto, CreateContactMessageRequest};
pub use whatsapp::{build_whatsapp_link, generate_whatsapp_link};
