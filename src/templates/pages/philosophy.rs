use crate::render::PageContext;
use crate::templates::{inject_header, site_layout, NavState};
use maud::{html, Markup};

pub fn philosophy_page() -> Markup {
    let mut ctx = PageContext::with_slots(&[]);
    inject_header(&mut ctx, NavState::default());

    site_layout(
        &ctx,
        "Philosophy",
        html! {
            main class="container narrow page-top" {
                h1 class="section-title" { "Philosophy" }
                p class="lead" {
                    "We represent a small number of exceptional homes, and we represent them personally."
                }
                p {
                    "Every residence in the collection is visited, photographed and described by the "
                    "group itself. Inquiries are answered by the agent who knows the property."
                }
                p { a href="/contact" class="btn-gold" { "Start a Conversation" } }
            }
        },
    )
}
