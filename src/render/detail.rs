use super::images::css_url;
use super::{Content, Renderer, Slot, ViewContext};
use crate::config::DetailLookup;
use crate::domain::{Listing, ListingId};
use maud::html;

pub const SITE_NAME: &str = "THE FREY GROUP";

/// What the detail page ended up showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailOutcome {
    Rendered(ListingId),
    NotFound,
    /// The lookup failed; the page keeps its loading skeleton.
    Unavailable,
    /// The page has no detail fields.
    Skipped,
}

impl Renderer<'_> {
    /// Detail page for `id`, using the configured lookup strategy.
    pub fn detail(&self, ctx: &mut dyn ViewContext, id: &str) -> DetailOutcome {
        if !ctx.contains(Slot::PropTitle) {
            return DetailOutcome::Skipped;
        }

        match self.config.detail_lookup {
            DetailLookup::Collection => self.detail_from_collection(ctx, id),
            DetailLookup::Single => self.detail_from_record(ctx, id),
        }
    }

    /// Picks `id` out of the whole collection. An unknown id shows the first
    /// listing instead of an error.
    pub fn detail_from_collection(&self, ctx: &mut dyn ViewContext, id: &str) -> DetailOutcome {
        let listings = self.api.load_all_or_fallback();

        let listing = match resolve(&listings, id) {
            Some(found) => found,
            None => match listings.first() {
                Some(first) => {
                    tracing::warn!(requested = id, shown = %first.id, "unknown listing id, showing first listing");
                    first
                }
                None => return DetailOutcome::NotFound,
            },
        };

        self.fill_detail(ctx, listing);
        DetailOutcome::Rendered(listing.id.clone())
    }

    /// Asks the API for the one record.
    pub fn detail_from_record(&self, ctx: &mut dyn ViewContext, id: &str) -> DetailOutcome {
        match self.api.load_one(id) {
            Ok(Some(listing)) => {
                self.fill_detail(ctx, &listing);
                DetailOutcome::Rendered(listing.id)
            }
            Ok(None) => {
                ctx.fill(
                    Slot::DetailContainer,
                    Content::Markup(html! { h1 { "Property not found" } }),
                );
                DetailOutcome::NotFound
            }
            Err(e) => {
                tracing::error!(error = %e, id, "could not load listing");
                DetailOutcome::Unavailable
            }
        }
    }

    fn fill_detail(&self, ctx: &mut dyn ViewContext, listing: &Listing) {
        let hero = self.image(listing.cover_image());

        ctx.set_document_title(format!("{} | {SITE_NAME}", listing.display_title()));

        ctx.fill(Slot::PropTitle, Content::text(listing.display_title()));
        ctx.fill(Slot::PropLoc, Content::text(listing.display_location()));
        ctx.fill(
            Slot::PropPrice,
            Content::text(self.price_text(listing.price, "Price Upon Request")),
        );
        ctx.fill(
            Slot::PropImg,
            Content::Markup(hero.to_markup("detail-img", listing.display_title())),
        );
        ctx.fill(Slot::HeroBg, Content::text(css_url(hero.src())));

        if let Some(description) = &listing.description {
            ctx.fill(Slot::PropDesc, Content::text(description.as_str()));
        }
        if let Some(specs) = &listing.specs {
            ctx.fill(Slot::PropSpecs, Content::text(specs.as_str()));
        }

        if !listing.gallery.is_empty() {
            let thumbs = listing.gallery.iter().map(|url| (url, self.image(Some(url))));
            ctx.fill(
                Slot::GalleryGrid,
                Content::Markup(html! {
                    @for (url, thumb) in thumbs {
                        a class="gallery-item" href=(url) target="_blank" rel="noopener" {
                            (thumb.to_markup("gallery-thumb", listing.display_title()))
                        }
                    }
                }),
            );
        }

        ctx.fill(Slot::Interest, Content::text(listing.inquiry_line()));
    }
}

/// Loose id match over a loaded collection.
pub fn resolve<'l>(listings: &'l [Listing], id: &str) -> Option<&'l Listing> {
    listings.iter().find(|l| l.id.loosely_matches(id))
}
