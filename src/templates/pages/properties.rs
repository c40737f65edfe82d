use crate::render::{PageContext, Renderer, Slot};
use crate::templates::{inject_header, site_layout, NavState};
use maud::{html, Markup};

pub fn properties_page(renderer: &Renderer<'_>) -> Markup {
    let mut ctx = PageContext::with_slots(&[Slot::FullGrid]);
    inject_header(&mut ctx, NavState::default());
    renderer.full_grid(&mut ctx);

    site_layout(
        &ctx,
        "The Collection",
        html! {
            main class="container page-top" {
                h1 class="section-title" { "The Collection" }
                div id=(Slot::FullGrid.dom_id()) class="grid" {
                    (ctx.render(Slot::FullGrid))
                }
            }
        },
    )
}
