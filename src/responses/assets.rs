// responses/assets.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use sha2::{Digest, Sha256};

/// A static asset with its strong validator, computed once at startup.
pub struct Asset {
    body: String,
    content_type: &'static str,
    etag: String,
}

impl Asset {
    pub fn new(body: String, content_type: &'static str) -> Self {
        let digest = Sha256::digest(body.as_bytes());
        let hex: String = digest.iter().take(16).map(|b| format!("{b:02x}")).collect();

        Self {
            body,
            content_type,
            etag: format!("\"{hex}\""),
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn etag(&self) -> &str {
        &self.etag
    }

    /// `304` when `if_none_match` already names this version.
    pub fn respond(&self, if_none_match: Option<&str>) -> ResultResp {
        let fresh = if_none_match
            .map(|header| {
                header
                    .split(',')
                    .any(|tag| tag.trim() == self.etag || tag.trim() == "*")
            })
            .unwrap_or(false);

        let builder = ResponseBuilder::new()
            .header("ETag", self.etag.as_str())
            .header("Cache-Control", "public, max-age=300");

        let resp = if fresh {
            builder.status(304).body(Body::empty())
        } else {
            builder
                .status(200)
                .header("Content-Type", self.content_type)
                .body(Body::from(self.body.clone()))
        };

        resp.map_err(|_| ServerError::InternalError)
    }
}
