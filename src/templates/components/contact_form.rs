use crate::contact::ContactForm;
use crate::render::{PageContext, Slot};
use maud::{html, Markup};

/// The inquiry form shared by the contact and detail pages.
///
/// The interest line falls back to the page's pre-filled value (detail page)
/// when the submission did not carry one.
pub fn contact_form(form: &ContactForm, ctx: &PageContext) -> Markup {
    let value = |name: &str| form.field(name).unwrap_or_default().to_string();
    let interest = form
        .field("interest")
        .filter(|v| !v.is_empty())
        .or(ctx.text(Slot::Interest))
        .unwrap_or_default();

    html! {
        form class="contact-form" id="contact-form" method="post" action="/contact" data-contact-form {
            div class="form-row" {
                label for="name" { "Name" }
                input type="text" id="name" name="name" autocomplete="name" value=(value("name")) required;
            }
            div class="form-row" {
                label for="email" { "Email" }
                input type="email" id="email" name="email" autocomplete="email" value=(value("email")) required;
            }
            div class="form-row" {
                label for="phone" { "Phone" }
                input type="tel" id="phone" name="phone" autocomplete="tel" value=(value("phone"));
            }
            div class="form-row" {
                label for="interest" { "Interest" }
                input type="text" id=(Slot::Interest.dom_id()) name="interest" value=(interest);
            }
            div class="form-row" {
                label for="message" { "Message" }
                textarea id="message" name="message" rows="5" { (value("message")) }
            }

            button type="submit" class="btn-gold" disabled[form.button.disabled] {
                (form.button.label)
            }

            div id=(Slot::FormStatus.dom_id()) {
                (ctx.render(Slot::FormStatus))
            }
        }
    }
}
