//! Contact Form UI Module
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: HTTP transport to the CMS
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::ContactForm;
pub use view_model::ContactFormViewModel;
