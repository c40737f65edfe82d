use crate::app::App;
use crate::contact::ContactForm;
use crate::errors::ServerError;
use crate::render::{DetailOutcome, PageContext, Slot};
use crate::responses::{html_page, html_response, redirect_response, ResultResp};
use crate::templates::{self, inject_header, NavState};
use astra::Request;
use std::collections::HashMap;
use std::io::Read;

/// Largest contact form body accepted.
pub const MAX_FORM_BYTES: u64 = 64 * 1024;

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    tracing::info!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/" | "/index.html") => html_response(templates::pages::home_page(&app.renderer())),
        ("GET", "/properties" | "/properties.html") => {
            html_response(templates::pages::properties_page(&app.renderer()))
        }
        ("GET", "/property" | "/property.html") => property(&req, app),
        ("GET", "/philosophy" | "/philosophy.html") => {
            html_response(templates::pages::philosophy_page())
        }
        ("GET", "/contact" | "/contact.html") => contact_form(&req),
        ("POST", "/contact" | "/contact.html") => contact_submit(&mut req, app),

        ("GET", "/static/site.css") => app.css.respond(if_none_match(&req)),
        ("GET", "/static/site.js") => app.js.respond(if_none_match(&req)),

        _ => Err(ServerError::NotFound),
    }
}

fn property(req: &Request, app: &App) -> ResultResp {
    let params = parse_query(req);

    let id = match params.get("id").map(|s| s.trim()).filter(|s| !s.is_empty()) {
        Some(id) => id,
        None => return redirect_response("/properties"),
    };

    let (outcome, page) = templates::pages::property_page(&app.renderer(), id);
    match outcome {
        DetailOutcome::NotFound => html_page(404, page),
        _ => html_page(200, page),
    }
}

fn contact_form(req: &Request) -> ResultResp {
    let params = parse_query(req);

    let mut ctx = PageContext::with_slots(&[Slot::FormStatus]);
    inject_header(&mut ctx, NavState::default());

    let form = match params.get("interest") {
        Some(interest) => ContactForm::new([("interest", interest.as_str())]),
        None => ContactForm::default(),
    };

    html_response(templates::pages::contact_page(&ctx, &form))
}

fn contact_submit(req: &mut Request, app: &App) -> ResultResp {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("Could not read form: {e}")))?;

    // A cut-off body would forward a truncated inquiry.
    if body.len() as u64 > MAX_FORM_BYTES {
        tracing::warn!(limit = MAX_FORM_BYTES, "contact form rejected: body too large");
        return Err(ServerError::BadRequest("Contact form too large".into()));
    }

    let mut form = ContactForm::from_urlencoded(&body);
    if form.fields().is_empty() {
        return Err(ServerError::BadRequest("Empty contact form".into()));
    }

    let mut ctx = PageContext::with_slots(&[Slot::FormStatus]);
    inject_header(&mut ctx, NavState::default());

    // The outcome is shown in the form status; a failed send is not an HTTP error.
    let _ = form.submit(app.api.as_ref(), &mut ctx);

    html_response(templates::pages::contact_page(&ctx, &form))
}

fn if_none_match(req: &Request) -> Option<&str> {
    req.headers()
        .get("If-None-Match")
        .and_then(|v| v.to_str().ok())
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
