use maud::{html, Markup};
use std::collections::HashMap;
use std::time::Duration;

/// Named containers a page can expose to the renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Header,
    HomeGrid,
    FullGrid,
    DetailContainer,
    PropTitle,
    PropLoc,
    PropPrice,
    PropImg,
    HeroBg,
    PropDesc,
    PropSpecs,
    GalleryGrid,
    Interest,
    FormStatus,
}

impl Slot {
    /// Element id used in the rendered HTML.
    pub fn dom_id(self) -> &'static str {
        match self {
            Slot::Header => "site-header",
            Slot::HomeGrid => "home-grid",
            Slot::FullGrid => "full-grid",
            Slot::DetailContainer => "detail-container",
            Slot::PropTitle => "prop-title",
            Slot::PropLoc => "prop-loc",
            Slot::PropPrice => "prop-price",
            Slot::PropImg => "prop-img",
            Slot::HeroBg => "hero-bg",
            Slot::PropDesc => "prop-desc",
            Slot::PropSpecs => "prop-specs",
            Slot::GalleryGrid => "gallery-grid",
            Slot::Interest => "interest",
            Slot::FormStatus => "form-status",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Content {
    Markup(Markup),
    /// Plain text; also used for attribute values such as image sources.
    Text(String),
}

impl Content {
    pub fn text(value: impl Into<String>) -> Self {
        Content::Text(value.into())
    }
}

/// Where renderers write their output.
///
/// Filling a slot the page does not have is silently dropped, so a renderer
/// never needs to check what page it is running on.
pub trait ViewContext {
    fn contains(&self, slot: Slot) -> bool;
    fn is_filled(&self, slot: Slot) -> bool;
    fn fill(&mut self, slot: Slot, content: Content);
    fn set_document_title(&mut self, title: String);
    /// Cards get the `active` class after `delay` on the client.
    fn schedule_reveal(&mut self, delay: Duration);
}

/// In-memory view context: the page templates read it back when assembling
/// the final document, and tests inspect it directly.
#[derive(Debug, Default)]
pub struct PageContext {
    slots: HashMap<Slot, Option<Content>>,
    document_title: Option<String>,
    reveal_delay: Option<Duration>,
}

impl PageContext {
    /// Every page has a header slot in addition to `slots`.
    pub fn with_slots(slots: &[Slot]) -> Self {
        let mut ctx = PageContext::default();
        ctx.slots.insert(Slot::Header, None);
        for slot in slots {
            ctx.slots.insert(*slot, None);
        }
        ctx
    }

    pub fn content(&self, slot: Slot) -> Option<&Content> {
        self.slots.get(&slot).and_then(Option::as_ref)
    }

    pub fn text(&self, slot: Slot) -> Option<&str> {
        match self.content(slot) {
            Some(Content::Text(t)) => Some(t),
            _ => None,
        }
    }

    /// Slot content as markup, empty when unfilled. Text is escaped.
    pub fn render(&self, slot: Slot) -> Markup {
        match self.content(slot) {
            Some(Content::Markup(m)) => m.clone(),
            Some(Content::Text(t)) => html! { (t) },
            None => html! {},
        }
    }

    pub fn document_title(&self) -> Option<&str> {
        self.document_title.as_deref()
    }

    pub fn reveal_delay(&self) -> Option<Duration> {
        self.reveal_delay
    }
}

impl ViewContext for PageContext {
    fn contains(&self, slot: Slot) -> bool {
        self.slots.contains_key(&slot)
    }

    fn is_filled(&self, slot: Slot) -> bool {
        self.content(slot).is_some()
    }

    fn fill(&mut self, slot: Slot, content: Content) {
        if let Some(entry) = self.slots.get_mut(&slot) {
            *entry = Some(content);
        }
    }

    fn set_document_title(&mut self, title: String) {
        self.document_title = Some(title);
    }

    fn schedule_reveal(&mut self, delay: Duration) {
        self.reveal_delay = Some(delay);
    }
}
