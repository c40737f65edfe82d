use thiserror::Error;

/// Failures talking to the listings API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("API returned HTTP {0}")]
    Status(u16),
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => ApiError::Status(status.as_u16()),
            None if err.is_decode() => ApiError::Malformed(err.to_string()),
            None => ApiError::Network(err.to_string()),
        }
    }
}
