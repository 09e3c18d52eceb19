// SPDX-License-Identifier: MPL-2.0
//! Error display state sub-component.

use crate::i18n::fluent::I18n;

/// Error state pairing a user-friendly message with technical details.
///
/// The friendly text is resolved once at construction; the raw details are
/// kept for logs and diagnostics but never shown inline.
#[derive(Debug, Clone)]
pub struct State {
    /// i18n key for the friendly error message.
    friendly_key: &'static str,
    /// Translated friendly error message.
    friendly_text: String,
    /// Technical error details.
    details: String,
}

impl State {
    /// Create a new error state with the given i18n key and details.
    #[must_use]
    pub fn new(friendly_key: &'static str, details: String, i18n: &I18n) -> Self {
        Self {
            friendly_key,
            friendly_text: i18n.tr(friendly_key),
            details,
        }
    }

    /// Get the friendly error message.
    #[must_use]
    pub fn friendly_text(&self) -> &str {
        &self.friendly_text
    }

    /// Get the technical error details.
    #[must_use]
    pub fn details(&self) -> &str {
        &self.details
    }

    /// Get the i18n key.
    #[must_use]
    pub fn friendly_key(&self) -> &'static str {
        self.friendly_key
    }
}
