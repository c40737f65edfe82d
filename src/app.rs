use crate::api::ListingApi;
use crate::config::SiteConfig;
use crate::render::Renderer;
use crate::responses::Asset;
use crate::templates::site_script;

const SITE_CSS: &str = include_str!("../static/site.css");

/// Everything a request handler needs, shared read-only across workers.
pub struct App {
    pub config: SiteConfig,
    pub api: Box<dyn ListingApi>,
    pub css: Asset,
    pub js: Asset,
}

impl App {
    pub fn new(config: SiteConfig, api: Box<dyn ListingApi>) -> Self {
        Self {
            config,
            api,
            css: Asset::new(SITE_CSS.to_string(), "text/css; charset=utf-8"),
            js: Asset::new(site_script(), "application/javascript; charset=utf-8"),
        }
    }

    pub fn renderer(&self) -> Renderer<'_> {
        Renderer::new(self.api.as_ref(), &self.config)
    }
}
