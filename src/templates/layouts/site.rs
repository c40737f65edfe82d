use crate::render::{PageContext, Slot, SITE_NAME};
use chrono::Datelike;
use maud::{html, Markup, DOCTYPE};

pub fn site_layout(ctx: &PageContext, page_title: &str, content: Markup) -> Markup {
    let title = match ctx.document_title() {
        Some(t) => t.to_string(),
        None => format!("{page_title} | {SITE_NAME}"),
    };
    let reveal_ms = ctx.reveal_delay().map(|d| d.as_millis());

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="/static/site.css";
                script src="/static/site.js" defer {}
            }
            body data-reveal-delay=[reveal_ms] {
                header id=(Slot::Header.dom_id()) {
                    (ctx.render(Slot::Header))
                }
                (content)
                footer class="site-footer" {
                    p { "© " (chrono::Local::now().year()) " " (SITE_NAME) ". All rights reserved." }
                    nav {
                        a href="/properties" { "The Collection" }
                        a href="/philosophy" { "Philosophy" }
                        a href="/contact" { "Contact" }
                    }
                }
            }
        }
    }
}
