use maud::{html, Markup};

/// Client-side mirror of one rendered image.
///
/// The first load failure swaps in the placeholder and disarms the handler,
/// so a broken placeholder cannot trigger another swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSlot {
    src: String,
    placeholder: String,
    armed: bool,
}

impl ImageSlot {
    /// A missing source starts out on the placeholder.
    pub fn new(src: Option<&str>, placeholder: &str) -> Self {
        let src = src
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(placeholder);

        Self {
            src: src.to_string(),
            placeholder: placeholder.to_string(),
            armed: true,
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Returns whether the placeholder was swapped in. The browser runs the
    /// same swap through `onerror_attr`.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn on_error(&mut self) -> bool {
        if !self.armed {
            return false;
        }
        self.armed = false;
        self.src = self.placeholder.clone();
        true
    }

    /// The inline `onerror` attribute implementing `on_error` in the browser.
    pub fn onerror_attr(&self) -> String {
        format!("this.onerror=null;this.src={};", js_string(&self.placeholder))
    }

    pub fn to_markup(&self, class: &str, alt: &str) -> Markup {
        html! {
            img src=(self.src) class=(class) alt=(alt) loading="lazy" onerror=(self.onerror_attr());
        }
    }
}

/// Quotes `value` as a JavaScript string literal.
pub fn js_string(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

/// Quotes `value` for use inside CSS `url(...)`.
pub fn css_url(value: &str) -> String {
    format!("url({})", js_string(value))
}
