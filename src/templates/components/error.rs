use crate::errors::ServerError;
use crate::render::PageContext;
use crate::templates::components::nav::{inject_header, NavState};
use crate::templates::site_layout;
use astra::{Body, Response, ResponseBuilder};
use maud::html;

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    match err {
        ServerError::NotFound => render_error(404, "We could not find that page."),

        ServerError::BadRequest(msg) => render_error(400, &msg),

        ServerError::InternalError => render_error(500, "Internal Server Error"),
    }
}

/// Error page in the site chrome.
fn render_error(status: u16, message: &str) -> Response {
    let mut ctx = PageContext::with_slots(&[]);
    inject_header(&mut ctx, NavState::default());

    let page = site_layout(
        &ctx,
        &format!("Error {status}"),
        html! {
            main class="container narrow error-page" {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to home" } }
            }
        },
    );

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(page.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
