// templates/pages/home.rs

use crate::render::{PageContext, Renderer, Slot};
use crate::templates::{inject_header, site_layout, NavState};
use maud::{html, Markup};

pub fn home_page(renderer: &Renderer<'_>) -> Markup {
    let mut ctx = PageContext::with_slots(&[Slot::HomeGrid]);
    inject_header(&mut ctx, NavState::default());
    renderer.preview_grid(&mut ctx);

    site_layout(
        &ctx,
        "Home",
        html! {
            section class="hero" {
                div class="hero-inner" {
                    p class="eyebrow" { "Private Real Estate" }
                    h1 { "Residences of Distinction" }
                    a href="/properties" class="btn-outline" { "View The Collection" }
                }
            }

            main class="container" {
                h2 class="section-title" { "Featured Residences" }
                div id=(Slot::HomeGrid.dom_id()) class="grid" {
                    (ctx.render(Slot::HomeGrid))
                }
                p class="center" {
                    a href="/properties" class="btn-gold" { "Explore All" }
                }
            }
        },
    )
}
