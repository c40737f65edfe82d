use super::{Content, Renderer, Slot, ViewContext};
use crate::domain::Listing;
use maud::{html, Markup};
use std::time::Duration;

/// Delay before the client adds `active` to freshly rendered cards.
pub const REVEAL_DELAY: Duration = Duration::from_millis(100);

pub const NO_LISTINGS: &str = "No listings available.";
pub const OFFLINE: &str = "System currently offline for maintenance.";

pub fn property_href(listing: &Listing) -> String {
    let query: String = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("id", listing.id.as_str())
        .finish();
    format!("/property?{query}")
}

impl Renderer<'_> {
    /// Home page preview: the first `preview_count` listings, backup data on
    /// any failure.
    pub fn preview_grid(&self, ctx: &mut dyn ViewContext) {
        if !ctx.contains(Slot::HomeGrid) {
            return;
        }

        let listings = self.api.load_all_or_fallback();
        let shown = listings.iter().take(self.config.preview_count);

        ctx.fill(
            Slot::HomeGrid,
            Content::Markup(html! { @for listing in shown { (listing_card(self, listing)) } }),
        );
        ctx.schedule_reveal(REVEAL_DELAY);
    }

    /// Full collection. Unlike the preview, failures are shown to the visitor.
    pub fn full_grid(&self, ctx: &mut dyn ViewContext) {
        if !ctx.contains(Slot::FullGrid) {
            return;
        }

        match self.api.load_all() {
            Ok(listings) if listings.is_empty() => {
                ctx.fill(Slot::FullGrid, Content::Markup(html! { p class="grid-message" { (NO_LISTINGS) } }));
            }
            Ok(listings) => {
                ctx.fill(
                    Slot::FullGrid,
                    Content::Markup(html! { @for listing in &listings { (listing_card(self, listing)) } }),
                );
                ctx.schedule_reveal(REVEAL_DELAY);
            }
            Err(e) => {
                tracing::error!(error = %e, "could not load listings for the collection page");
                ctx.fill(Slot::FullGrid, Content::Markup(html! { p class="grid-message" { (OFFLINE) } }));
            }
        }
    }
}

pub fn listing_card(renderer: &Renderer<'_>, listing: &Listing) -> Markup {
    let image = renderer.image(listing.cover_image());

    html! {
        a class="card reveal" href=(property_href(listing)) data-id=(listing.id) {
            div class="card-img-wrap" {
                (image.to_markup("card-img", listing.display_title()))
            }
            div class="card-meta" {
                span class="card-loc" { (listing.display_location()) }
                h3 class="card-title" { (listing.display_title()) }
                p class="card-price" { (renderer.price_text(listing.price, "Price on Request")) }
            }
        }
    }
}
