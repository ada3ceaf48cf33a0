//! Alert fragments for showing errors to users after an HTMX request.
//!
//! Alerts are swapped into the `#alert-container` element of the page layout
//! via the `hx-target-error` attribute.

use axum::response::Html;
use maud::{Markup, html};

/// An error message with optional details.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub message: String,
    pub details: String,
}

impl Alert {
    /// Create an error alert.
    pub fn error(message: &str, details: &str) -> Self {
        Self {
            message: message.to_owned(),
            details: details.to_owned(),
        }
    }

    fn view(&self) -> Markup {
        html! {
            div
                role="alert"
                class="flex items-start gap-3 p-4 mb-4 text-sm rounded-lg border
                    text-red-800 bg-red-50 border-red-300
                    dark:bg-gray-800 dark:text-red-400 dark:border-red-800"
            {
                div class="flex-1"
                {
                    p class="font-medium" { (self.message) }

                    @if !self.details.is_empty() {
                        span { (self.details) }
                    }
                }

                button
                    type="button"
                    aria-label="Dismiss"
                    class="bg-transparent border-none cursor-pointer"
                    onclick="this.closest('[role=alert]').remove()"
                {
                    "✕"
                }
            }
        }
    }

    /// Render the alert as an HTML fragment.
    pub fn into_html(self) -> Html<String> {
        Html(self.view().into_string())
    }
}
