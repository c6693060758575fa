//! Avatar Upload Component
//!
//! Round avatar with change/remove controls, a preview dialog, and the
//! commit step running on the tokio runtime.

use avatarkit_core::{AvatarReference, AvatarSession, CommitError};
use avatarkit_ui::{AvatarFace, AvatarPreviewModal, AvatarSize, IconButton, InlineError};
use dioxus::prelude::*;

use super::file_picker::pick_avatar_file;
use crate::context::use_avatar_context;

/// Avatar picker with preview and confirm
///
/// # Examples
///
/// ```rust
/// rsx! {
///     AvatarUpload {
///         current_avatar: avatar(),
///         display_name: "Ada Lovelace".to_string(),
///         on_avatar_change: move |new_avatar| avatar.set(new_avatar),
///         size: AvatarSize::Large,
///     }
/// }
/// ```
#[component]
pub fn AvatarUpload(
    /// Avatar currently shown; owned by the caller
    current_avatar: Option<AvatarReference>,
    /// Name for alt text and the initials fallback
    display_name: String,
    /// Called with the committed avatar, or None when removed
    on_avatar_change: EventHandler<Option<AvatarReference>>,
    #[props(default)] size: AvatarSize,
    /// Hide every control that would change the avatar
    #[props(default = false)]
    disabled: bool,
) -> Element {
    let ctx = use_avatar_context();
    let uploader = ctx.uploader.clone();

    let mut session = use_signal(move || {
        AvatarSession::new(ctx.config.clone(), ctx.registry.clone(), move |avatar| {
            on_avatar_change.call(avatar)
        })
    });

    use_effect(use_reactive((&disabled,), move |(disabled,)| {
        session.write().set_disabled(disabled);
    }));

    // Release any live preview when the widget goes away
    use_drop(move || {
        if let Ok(mut session) = session.try_write() {
            session.teardown();
        }
    });

    let preview_src = use_memo(move || session.read().preview().map(|p| p.data_uri()));

    let open_picker = move |_| {
        if disabled || session.read().is_uploading() {
            return;
        }
        spawn(async move {
            let config = session.read().config().clone();
            match pick_avatar_file(config).await {
                Ok(Some(file)) => {
                    // Rejections are kept on the session and rendered inline
                    let _ = session.write().select(file);
                }
                Ok(None) => {
                    // User cancelled
                }
                Err(e) => tracing::warn!("Avatar file picker failed: {:#}", e),
            }
        });
    };

    let cancel = move |_| {
        if let Err(e) = session.write().cancel() {
            tracing::debug!("Cancel ignored: {}", e);
        }
    };

    let confirm = move |_| {
        let request = match session.write().begin_commit() {
            Ok(request) => request,
            Err(e) => {
                // Kept on the session and shown in the dialog
                tracing::debug!("Confirm refused: {}", e);
                return;
            }
        };
        let uploader = uploader.clone();
        let generation = request.generation;

        spawn(async move {
            // The upload runs on the runtime so it outlives this widget
            let result = match tokio::spawn(async move { uploader.upload(request).await }).await {
                Ok(result) => result,
                Err(e) => Err(CommitError::Transport(format!("upload task failed: {}", e))),
            };
            session.write().finish_commit(generation, result);
        });
    };

    let remove = move |_| {
        if let Err(e) = session.write().remove() {
            tracing::debug!("Remove ignored: {}", e);
        }
    };

    let (uploading, error_text, file_name) = {
        let s = session.read();
        (
            s.is_uploading(),
            s.error().map(|e| e.to_string()),
            s.pending_file_name().map(str::to_string),
        )
    };
    let icon_style = format!("font-size: {}px", size.icon_px());
    let has_avatar = current_avatar.as_ref().is_some_and(|a| a.is_available());

    rsx! {
        div { class: "avatar-upload",
            div { class: "avatar-upload__face",
                AvatarFace {
                    avatar: current_avatar.clone(),
                    display_name: display_name.clone(),
                    size,
                }

                if !disabled {
                    IconButton {
                        class: "avatar-upload__change".to_string(),
                        label: "Change avatar".to_string(),
                        onclick: open_picker,
                        span { style: "{icon_style}", "📷" }
                    }
                }

                if has_avatar && !disabled {
                    IconButton {
                        class: "avatar-upload__remove".to_string(),
                        label: "Remove avatar".to_string(),
                        onclick: remove,
                        "×"
                    }
                }
            }

            if preview_src().is_none() {
                if let Some(message) = error_text.clone() {
                    InlineError { message }
                }
            }

            if let Some(src) = preview_src() {
                AvatarPreviewModal {
                    preview_src: src,
                    file_name,
                    uploading,
                    locked: disabled,
                    error: error_text,
                    on_cancel: cancel,
                    on_confirm: confirm,
                }
            }
        }
    }
}
