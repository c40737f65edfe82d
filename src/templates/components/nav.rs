use crate::render::{Content, Slot, ViewContext};
use maud::{html, Markup};

/// Scroll offset (px) past which the nav capsule switches to its compact look.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Presentation state of the header. The site script drives the same
/// transitions in the browser; pages render the initial state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub scrolled: bool,
    pub overlay_open: bool,
}

// Driven by the site script in the browser; the server only renders the
// initial state.
#[cfg_attr(not(test), allow(dead_code))]
impl NavState {
    pub fn on_scroll(&mut self, offset_y: f64) {
        self.scrolled = offset_y > SCROLL_THRESHOLD;
    }

    pub fn toggle_menu(&mut self) {
        self.overlay_open = !self.overlay_open;
    }
}

/// Puts the shared header at the top of the page. Only the first call per
/// page has any effect.
pub fn inject_header(ctx: &mut dyn ViewContext, state: NavState) -> bool {
    if ctx.is_filled(Slot::Header) {
        return false;
    }
    ctx.fill(Slot::Header, Content::Markup(header(state)));
    true
}

pub fn header(state: NavState) -> Markup {
    html! {
        div.nav-wrapper.scrolled[state.scrolled] {
            nav class="nav-capsule" {
                div class="nav-left" {
                    button class="menu-toggle" type="button" data-menu-toggle aria-label="Menu" aria-controls="mobileOverlay" {
                        span class="bar" {}
                        span class="bar" {}
                    }
                    div class="desktop-links" {
                        a href="/properties" { "Collection" }
                        a href="/philosophy" { "Philosophy" }
                    }
                }
                div class="nav-center" {
                    a href="/" class="logo" { "THE FREY GROUP" }
                }
                div class="nav-right" {
                    a href="/contact" aria-label="Profile" {
                        svg class="nav-icon" viewBox="0 0 24 24" {
                            path d="M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2" {}
                            circle cx="12" cy="7" r="4" {}
                        }
                    }
                }
            }
        }
        div.mobile-overlay.active[state.overlay_open] id="mobileOverlay" {
            a href="/" { "Home" }
            a href="/properties" { "The Collection" }
            a href="/philosophy" { "Philosophy" }
            a href="/contact" { "Contact" }
            button class="overlay-close" type="button" data-menu-toggle { "CLOSE" }
        }
    }
}
