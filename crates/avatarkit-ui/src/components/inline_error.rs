//! Inline error bubble shown under the avatar

use dioxus::prelude::*;

#[component]
pub fn InlineError(message: String) -> Element {
    rsx! {
        div { class: "inline-error", role: "alert",
            "⚠ {message}"
        }
    }
}
