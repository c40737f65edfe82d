use crate::api::{ApiError, ListingApi};
use crate::app::App;
use crate::config::SiteConfig;
use crate::domain::Listing;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::sync::{Arc, Mutex};

pub type Sent = Arc<Mutex<Vec<Vec<(String, String)>>>>;

/// In-memory stand-in for the listings API.
pub struct StubApi {
    pub all: Result<Vec<Listing>, String>,
    pub one: Result<Option<Listing>, String>,
    pub contact_online: bool,
    pub sent: Sent,
}

impl StubApi {
    pub fn with_rows(rows: Vec<Listing>) -> Self {
        Self {
            all: Ok(rows),
            one: Ok(None),
            contact_online: true,
            sent: Arc::default(),
        }
    }

    pub fn offline() -> Self {
        Self {
            all: Err("connection refused".into()),
            one: Err("connection refused".into()),
            contact_online: false,
            sent: Arc::default(),
        }
    }
}

impl ListingApi for StubApi {
    fn load_all(&self) -> Result<Vec<Listing>, ApiError> {
        self.all.clone().map_err(ApiError::Network)
    }

    fn load_one(&self, _id: &str) -> Result<Option<Listing>, ApiError> {
        self.one.clone().map_err(ApiError::Network)
    }

    fn send_contact(&self, params: &[(String, String)]) -> Result<(), ApiError> {
        self.sent.lock().unwrap().push(params.to_vec());
        if self.contact_online {
            Ok(())
        } else {
            Err(ApiError::Network("connection reset".into()))
        }
    }
}

pub fn rows(value: serde_json::Value) -> Vec<Listing> {
    serde_json::from_value(value).expect("test rows deserialize")
}

pub fn test_app(api: StubApi) -> App {
    App::new(SiteConfig::default(), Box::new(api))
}

pub fn test_app_with(config: SiteConfig, api: StubApi) -> App {
    App::new(config, Box::new(api))
}

pub fn get(uri: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = uri.parse().unwrap();
    req
}

pub fn post_form(uri: &str, form: &str) -> Request {
    let mut req = Request::new(Body::from(form.to_string()));
    *req.method_mut() = Method::POST;
    *req.uri_mut() = uri.parse().unwrap();
    req.headers_mut().insert(
        "Content-Type",
        "application/x-www-form-urlencoded".parse().unwrap(),
    );
    req
}

pub fn body_string(mut resp: Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    String::from_utf8(bytes).unwrap()
}

/// Text of every element matching `selector`.
pub fn select_text(html: &str, selector: &str) -> Vec<String> {
    let doc = scraper::Html::parse_document(html);
    let sel = scraper::Selector::parse(selector).unwrap();
    doc.select(&sel)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect()
}

/// Value of `attr` on every element matching `selector`.
pub fn select_attr(html: &str, selector: &str, attr: &str) -> Vec<String> {
    let doc = scraper::Html::parse_document(html);
    let sel = scraper::Selector::parse(selector).unwrap();
    doc.select(&sel)
        .filter_map(|el| el.value().attr(attr).map(str::to_string))
        .collect()
}
