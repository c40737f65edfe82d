// config.rs
use crate::domain::PriceStyle;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const DEFAULT_API_URL: &str = "https://script.google.com/macros/s/AKfycbx0XhgtDREh_XSZ7ONwJfMlamZu_gzhdYL9FkVKzvaPfhvAk998H42R56P_JYu0Genfpg/exec";
pub const DEFAULT_CONFIG_FILE: &str = "frey.toml";

const PLACEHOLDER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="800" height="600" viewBox="0 0 800 600"><rect width="800" height="600" fill="#1a1a1a"/><text x="50%" y="50%" font-family="sans-serif" font-size="24" fill="#333" text-anchor="middle" dy=".3em">THE FREY GROUP</text></svg>"##;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

/// How the detail page finds its listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailLookup {
    /// Load the whole collection and pick by id, first listing when unknown.
    #[default]
    Collection,
    /// Ask the API for the one record; unknown ids show "Property not found".
    Single,
}

impl FromStr for DetailLookup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "collection" => Ok(DetailLookup::Collection),
            "single" => Ok(DetailLookup::Single),
            other => Err(format!("unknown detail lookup `{other}`")),
        }
    }
}

/// Everything the site needs at startup. Injected into the loader and the
/// renderers instead of living in globals.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub api_url: Url,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub placeholder_image: String,
    pub preview_count: usize,
    pub price_style: PriceStyle,
    pub detail_lookup: DetailLookup,
    pub request_timeout: Option<Duration>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            placeholder_image: default_placeholder(),
            preview_count: 3,
            price_style: PriceStyle::default(),
            detail_lookup: DetailLookup::default(),
            request_timeout: None,
        }
    }
}

/// Dark grey branded SVG, inlined so it never needs the network.
pub fn default_placeholder() -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(PLACEHOLDER_SVG))
}

// Every key optional: the file only overrides what it names.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    api_url: Option<String>,
    bind_addr: Option<String>,
    max_workers: Option<usize>,
    placeholder_image: Option<String>,
    preview_count: Option<usize>,
    price_style: Option<PriceStyle>,
    detail_lookup: Option<DetailLookup>,
    request_timeout_secs: Option<u64>,
}

impl SiteConfig {
    /// Defaults, then the config file (`FREY_CONFIG` or `./frey.toml` if it
    /// exists), then `FREY_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = SiteConfig::default();

        let path = std::env::var_os("FREY_CONFIG")
            .map(PathBuf::from)
            .or_else(|| {
                let local = PathBuf::from(DEFAULT_CONFIG_FILE);
                local.exists().then_some(local)
            });

        if let Some(path) = path {
            config.apply_file(&path)?;
        }

        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn apply_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: FileConfig = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(v) = file.api_url {
            self.api_url = parse_url("api_url", &v)?;
        }
        if let Some(v) = file.bind_addr {
            self.bind_addr = parse_value("bind_addr", &v)?;
        }
        if let Some(v) = file.max_workers {
            self.max_workers = v;
        }
        if let Some(v) = file.placeholder_image {
            self.placeholder_image = v;
        }
        if let Some(v) = file.preview_count {
            self.preview_count = v;
        }
        if let Some(v) = file.price_style {
            self.price_style = v;
        }
        if let Some(v) = file.detail_lookup {
            self.detail_lookup = v;
        }
        if let Some(v) = file.request_timeout_secs {
            self.request_timeout = Some(Duration::from_secs(v));
        }
        Ok(())
    }

    /// `lookup` is `std::env::var` in production; tests pass a map.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("FREY_API_URL") {
            self.api_url = parse_url("FREY_API_URL", &v)?;
        }
        if let Some(v) = lookup("FREY_BIND_ADDR") {
            self.bind_addr = parse_value("FREY_BIND_ADDR", &v)?;
        }
        if let Some(v) = lookup("FREY_MAX_WORKERS") {
            self.max_workers = parse_value("FREY_MAX_WORKERS", &v)?;
        }
        if let Some(v) = lookup("FREY_PLACEHOLDER_IMAGE") {
            self.placeholder_image = v;
        }
        if let Some(v) = lookup("FREY_PREVIEW_COUNT") {
            self.preview_count = parse_value("FREY_PREVIEW_COUNT", &v)?;
        }
        if let Some(v) = lookup("FREY_PRICE_STYLE") {
            self.price_style = parse_value("FREY_PRICE_STYLE", &v)?;
        }
        if let Some(v) = lookup("FREY_DETAIL_LOOKUP") {
            self.detail_lookup = parse_value("FREY_DETAIL_LOOKUP", &v)?;
        }
        if let Some(v) = lookup("FREY_REQUEST_TIMEOUT_SECS") {
            let secs: u64 = parse_value("FREY_REQUEST_TIMEOUT_SECS", &v)?;
            self.request_timeout = Some(Duration::from_secs(secs));
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_workers == 0 {
            return Err(ConfigError::Invalid {
                key: "max_workers",
                message: "must be at least 1".into(),
            });
        }
        if self.preview_count == 0 {
            return Err(ConfigError::Invalid {
                key: "preview_count",
                message: "must be at least 1".into(),
            });
        }
        if self.placeholder_image.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "placeholder_image",
                message: "must not be empty".into(),
            });
        }
        Ok(())
    }
}

fn parse_url(key: &'static str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|e| ConfigError::Invalid {
        key,
        message: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::Invalid {
            key,
            message: format!("unsupported scheme `{other}`"),
        }),
    }
}

fn parse_value<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        message: e.to_string(),
    })
}
