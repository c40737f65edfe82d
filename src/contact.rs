// src/contact.rs

use crate::api::{ApiError, ListingApi};
use crate::render::{Content, Slot, ViewContext};
use maud::html;

pub const SUBMIT_LABEL: &str = "SEND INQUIRY";
pub const SENDING_LABEL: &str = "SENDING...";
pub const SUCCESS_MESSAGE: &str = "Message received. We will contact you shortly.";
pub const ERROR_MESSAGE: &str = "Error sending message. Please email directly.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: String,
    pub disabled: bool,
}

impl Default for SubmitButton {
    fn default() -> Self {
        Self {
            label: SUBMIT_LABEL.to_string(),
            disabled: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Error,
}

impl StatusTone {
    pub fn class(self) -> &'static str {
        match self {
            StatusTone::Success => "form-status success",
            StatusTone::Error => "form-status error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormStatus {
    pub tone: StatusTone,
    pub message: &'static str,
}

/// Holds the button in its "sending" state; dropping it puts the original
/// label back and re-enables the button whatever happened in between.
struct SendingGuard<'a> {
    button: &'a mut SubmitButton,
    original: String,
}

impl<'a> SendingGuard<'a> {
    fn engage(button: &'a mut SubmitButton) -> Self {
        let original = std::mem::replace(&mut button.label, SENDING_LABEL.to_string());
        button.disabled = true;
        Self { button, original }
    }

    fn is_engaged(&self) -> bool {
        self.button.disabled && self.button.label == SENDING_LABEL
    }
}

impl Drop for SendingGuard<'_> {
    fn drop(&mut self) {
        self.button.disabled = false;
        self.button.label = std::mem::take(&mut self.original);
    }
}

/// Server-side state of one contact form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: Vec<(String, String)>,
    pub button: SubmitButton,
    pub status: Option<FormStatus>,
}

impl ContactForm {
    pub fn new<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .filter(|(k, _)| k != "action")
                .collect(),
            ..Self::default()
        }
    }

    /// Reads an `application/x-www-form-urlencoded` body, keeping field order.
    pub fn from_urlencoded(body: &[u8]) -> Self {
        Self::new(url::form_urlencoded::parse(body).into_owned())
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// `action=contact` followed by every field as submitted.
    pub fn query_params(&self) -> Vec<(String, String)> {
        std::iter::once(("action".to_string(), "contact".to_string()))
            .chain(self.fields.iter().cloned())
            .collect()
    }

    /// Sends the inquiry once and records the outcome. The status message is
    /// also written to the page's status slot when it has one.
    pub fn submit(
        &mut self,
        api: &dyn ListingApi,
        ctx: &mut dyn ViewContext,
    ) -> Result<(), ApiError> {
        let params = self.query_params();
        let guard = SendingGuard::engage(&mut self.button);
        debug_assert!(guard.is_engaged());

        let result = api.send_contact(&params);
        let status = match &result {
            Ok(()) => {
                for (_, value) in self.fields.iter_mut() {
                    value.clear();
                }
                tracing::info!(fields = params.len() - 1, "contact inquiry sent");
                FormStatus {
                    tone: StatusTone::Success,
                    message: SUCCESS_MESSAGE,
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "contact inquiry failed");
                FormStatus {
                    tone: StatusTone::Error,
                    message: ERROR_MESSAGE,
                }
            }
        };
        drop(guard);

        ctx.fill(
            Slot::FormStatus,
            Content::Markup(html! { p class=(status.tone.class()) { (status.message) } }),
        );
        self.status = Some(status);
        result
    }
}
