use crate::contact::ContactForm;
use crate::render::PageContext;
use crate::templates::{contact_form, site_layout};
use maud::{html, Markup};

/// `ctx` already carries the header and, after a submission, the status.
pub fn contact_page(ctx: &PageContext, form: &ContactForm) -> Markup {
    site_layout(
        ctx,
        "Contact",
        html! {
            main class="container narrow page-top" {
                h1 class="section-title" { "Contact" }
                p class="lead" {
                    "Tell us what you are looking for and a member of the group will be in touch."
                }
                (contact_form(form, ctx))
            }
        },
    )
}
