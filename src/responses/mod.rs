pub mod assets;
pub mod html;

pub use assets::Asset;
pub use crate::errors::ResultResp;

// Normal HTML response
pub use html::{html_page, html_response, redirect_response};
