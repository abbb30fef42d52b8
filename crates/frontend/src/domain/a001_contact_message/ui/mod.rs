pub mod form;
pub mod page;
pub mod side_panel;

pub use page::ContactPage;
