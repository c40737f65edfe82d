pub mod contact_form;
pub mod error;
pub mod nav;

pub use contact_form::contact_form;
pub use error::html_error_response;
pub use nav::{inject_header, NavState};
