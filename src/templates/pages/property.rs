use crate::contact::ContactForm;
use crate::render::{DetailOutcome, PageContext, Renderer, Slot};
use crate::templates::{contact_form, inject_header, site_layout, NavState};
use maud::{html, Markup};

const DETAIL_SLOTS: [Slot; 11] = [
    Slot::DetailContainer,
    Slot::PropTitle,
    Slot::PropLoc,
    Slot::PropPrice,
    Slot::PropImg,
    Slot::HeroBg,
    Slot::PropDesc,
    Slot::PropSpecs,
    Slot::GalleryGrid,
    Slot::Interest,
    Slot::FormStatus,
];

pub fn property_page(renderer: &Renderer<'_>, id: &str) -> (DetailOutcome, Markup) {
    let mut ctx = PageContext::with_slots(&DETAIL_SLOTS);
    inject_header(&mut ctx, NavState::default());
    let outcome = renderer.detail(&mut ctx, id);

    let body = match &outcome {
        DetailOutcome::NotFound => html! {
            main class="container page-top" id=(Slot::DetailContainer.dom_id()) {
                (ctx.render(Slot::DetailContainer))
                p { a href="/properties" { "Back to The Collection" } }
            }
        },
        DetailOutcome::Rendered(_) => detail_body(&ctx),
        DetailOutcome::Unavailable | DetailOutcome::Skipped => skeleton(),
    };

    (outcome, site_layout(&ctx, "Property", body))
}

fn detail_body(ctx: &PageContext) -> Markup {
    let hero_style = ctx
        .text(Slot::HeroBg)
        .map(|url| format!("background-image: {url}"));

    html! {
        section class="detail-hero" id=(Slot::HeroBg.dom_id()) style=[hero_style] {
            div class="hero-inner" {
                p class="eyebrow" id=(Slot::PropLoc.dom_id()) { (ctx.render(Slot::PropLoc)) }
                h1 id=(Slot::PropTitle.dom_id()) { (ctx.render(Slot::PropTitle)) }
                p class="detail-price" id=(Slot::PropPrice.dom_id()) { (ctx.render(Slot::PropPrice)) }
            }
        }

        main class="container detail" id=(Slot::DetailContainer.dom_id()) {
            div class="detail-main" {
                div id=(Slot::PropImg.dom_id()) class="detail-img-wrap" {
                    (ctx.render(Slot::PropImg))
                }

                h2 { "About this residence" }
                p id=(Slot::PropDesc.dom_id()) class="detail-desc" { (ctx.render(Slot::PropDesc)) }

                h2 { "Specifications" }
                p id=(Slot::PropSpecs.dom_id()) class="detail-specs" { (ctx.render(Slot::PropSpecs)) }

                div id=(Slot::GalleryGrid.dom_id()) class="gallery-grid" {
                    (ctx.render(Slot::GalleryGrid))
                }
            }

            aside class="detail-contact" {
                h2 { "Arrange a Private Viewing" }
                (contact_form(&ContactForm::default(), ctx))
            }
        }
    }
}

fn skeleton() -> Markup {
    html! {
        main class="container page-top" id=(Slot::DetailContainer.dom_id()) {
            div id="skeleton-loader" class="skeleton" {
                h1 id=(Slot::PropTitle.dom_id()) { "Loading..." }
                div class="skeleton-block" {}
                div class="skeleton-line" {}
                div class="skeleton-line short" {}
            }
        }
    }
}
