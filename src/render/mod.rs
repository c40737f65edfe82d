mod context;
mod detail;
mod grid;
mod images;

pub use context::{Content, PageContext, Slot, ViewContext};
pub use detail::{DetailOutcome, SITE_NAME};
pub use images::{js_string, ImageSlot};

use crate::api::ListingApi;
use crate::config::SiteConfig;

/// Turns listings into page content.
///
/// Holds the API and configuration it was built with; every entry point takes
/// the view context to write into.
pub struct Renderer<'a> {
    api: &'a dyn ListingApi,
    config: &'a SiteConfig,
}

impl<'a> Renderer<'a> {
    pub fn new(api: &'a dyn ListingApi, config: &'a SiteConfig) -> Self {
        Self { api, config }
    }

    fn price_text(&self, price: Option<i64>, on_request: &str) -> String {
        match price {
            Some(p) => self.config.price_style.format(p),
            None => on_request.to_string(),
        }
    }

    fn image(&self, src: Option<&str>) -> ImageSlot {
        ImageSlot::new(src, &self.config.placeholder_image)
    }
}
