pub mod components;
pub mod layouts;
pub mod pages;
pub mod script;

// Re-exports for convenience
pub use components::{contact_form, html_error_response, inject_header, NavState};
pub use layouts::site_layout;
pub use script::site_script;
