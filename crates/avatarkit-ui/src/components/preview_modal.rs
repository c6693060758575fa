//! Avatar Preview Modal Component
//!
//! Confirmation dialog around a pending avatar image. Both actions are
//! locked while the upload runs; Save is also locked while the widget is
//! disabled, leaving Cancel as the only way out.

use dioxus::prelude::*;

use super::button::{Button, ButtonVariant};
use super::inline_error::InlineError;

/// Avatar Preview Modal
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     if let Some(src) = preview_src {
///         AvatarPreviewModal {
///             preview_src: src,
///             uploading: session.read().is_uploading(),
///             locked: disabled,
///             error: error_text,
///             on_cancel: move |_| cancel(),
///             on_confirm: move |_| confirm(),
///         }
///     }
/// }
/// ```
#[component]
pub fn AvatarPreviewModal(
    /// Image source for the pending avatar (data URI)
    preview_src: String,
    /// Name of the pending file
    #[props(default)]
    file_name: Option<String>,
    /// Whether the commit step is running
    #[props(default = false)]
    uploading: bool,
    /// Whether avatar changes are currently refused
    #[props(default = false)]
    locked: bool,
    /// Commit error to show above the actions
    #[props(default)]
    error: Option<String>,
    /// Called when the user discards the pending image
    on_cancel: EventHandler<()>,
    /// Called when the user keeps the pending image
    on_confirm: EventHandler<()>,
) -> Element {
    let can_save = save_enabled(uploading, locked);

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| {
                if !uploading {
                    on_cancel.call(());
                }
            },

            div {
                class: "avatar-preview-modal",
                onclick: move |e| e.stop_propagation(),

                h3 { class: "modal-title", "Preview Avatar" }

                div { class: "avatar-preview-modal__image",
                    img {
                        class: "avatar avatar--large avatar--image",
                        src: "{preview_src}",
                        alt: "Avatar preview",
                    }
                }

                if let Some(name) = file_name {
                    p { class: "avatar-preview-modal__file", "{name}" }
                }

                p { class: "modal-description",
                    "This will be your new profile picture"
                }

                if let Some(message) = error {
                    InlineError { message }
                }

                div { class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Ghost,
                        disabled: uploading,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: !can_save,
                        onclick: move |_| on_confirm.call(()),
                        if uploading {
                            span { class: "spinner" }
                            "Uploading..."
                        } else {
                            "✓ Save"
                        }
                    }
                }
            }
        }
    }
}

/// Save needs an idle dialog on an unlocked widget
fn save_enabled(uploading: bool, locked: bool) -> bool {
    !uploading && !locked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_locked_while_uploading_or_disabled() {
        assert!(save_enabled(false, false));
        assert!(!save_enabled(true, false));
        assert!(!save_enabled(false, true));
        assert!(!save_enabled(true, true));
    }
}
