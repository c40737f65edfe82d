// client.rs
use crate::api::{ApiError, ListingApi};
use crate::domain::Listing;
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("frey_site/", env!("CARGO_PKG_VERSION"));

/// Blocking client for the spreadsheet-backed listings endpoint.
///
/// One attempt per call, no retries and no caching. Requests have no timeout
/// unless one is configured, so a hung upstream holds the worker thread.
pub struct ApiClient {
    client: Client,
    endpoint: Url,
}

impl ApiClient {
    pub fn new(endpoint: Url, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn get_json(&self, params: &[(&str, &str)]) -> Result<Value, ApiError> {
        tracing::debug!(endpoint = %self.endpoint, ?params, "calling listings API");

        let resp = self
            .client
            .get(self.endpoint.clone())
            .query(params)
            .send()?
            .error_for_status()?;

        let text = resp.text()?;
        serde_json::from_str(&text).map_err(|e| ApiError::Malformed(e.to_string()))
    }
}

impl ListingApi for ApiClient {
    fn load_all(&self) -> Result<Vec<Listing>, ApiError> {
        let data = self.get_json(&[("action", "getAll")])?;

        let rows = match data {
            Value::Array(rows) => rows,
            other => {
                return Err(ApiError::Malformed(format!(
                    "expected an array of listings, got {}",
                    kind_of(&other)
                )))
            }
        };

        let total = rows.len();
        let listings: Vec<Listing> = rows
            .into_iter()
            .filter_map(|row| match serde_json::from_value::<Listing>(row) {
                Ok(listing) => Some(listing),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable listing row");
                    None
                }
            })
            .collect();

        tracing::debug!(total, kept = listings.len(), "listings loaded");
        Ok(listings)
    }

    fn load_one(&self, id: &str) -> Result<Option<Listing>, ApiError> {
        let data = self.get_json(&[("action", "getOne"), ("id", id)])?;

        if data.get("error").is_some() {
            return Ok(None);
        }
        if !data.is_object() {
            return Err(ApiError::Malformed(format!(
                "expected a listing object, got {}",
                kind_of(&data)
            )));
        }

        serde_json::from_value(data)
            .map(Some)
            .map_err(|e| ApiError::Malformed(e.to_string()))
    }

    fn send_contact(&self, params: &[(String, String)]) -> Result<(), ApiError> {
        // Status and body are ignored; only a failed round trip counts.
        self.client
            .get(self.endpoint.clone())
            .query(params)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(())
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
