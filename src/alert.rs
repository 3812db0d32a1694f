//! Alerts for displaying error messages to users.
//!
//! Alerts are rendered as HTML fragments that HTMX swaps into the
//! `#alert-container` element of the base page.

use maud::{Markup, html};

/// An error alert with a short summary and longer details.
#[derive(Debug, Clone)]
pub enum Alert {
    /// The action the user requested failed.
    Error { message: String, details: String },
}

impl Alert {
    /// Render the alert as a dismissable HTML fragment.
    pub fn into_html(self) -> Markup {
        let Alert::Error { message, details } = self;
        let container_style = "flex items-start p-4 mb-4 text-red-800 rounded-lg bg-red-50 \
            dark:bg-gray-800 dark:text-red-400";

        // Template adapted from https://flowbite.com/docs/components/alerts/
        html!(
            div class=(container_style) role="alert"
            {
                div class="ms-3 text-sm"
                {
                    span class="font-medium" { (message) }

                    @if !details.is_empty() {
                        p { (details) }
                    }
                }

                button
                    type="button"
                    class="ms-auto -mx-1.5 -my-1.5 rounded-lg p-1.5 inline-flex h-8 w-8"
                    onclick="this.closest('[role=alert]').remove()"
                    aria-label="Close"
                {
                    "×"
                }
            }
        )
    }
}
