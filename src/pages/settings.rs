//! Settings Page - Profile
//!
//! Hosts the avatar widget next to the display name it falls back to, and
//! owns the committed avatar.

use avatarkit_core::AvatarReference;
use avatarkit_ui::AvatarSize;
use dioxus::prelude::*;

use crate::components::AvatarUpload;
use crate::context::get_launch_options;

/// Profile settings page
#[component]
pub fn Settings() -> Element {
    let options = use_hook(get_launch_options);

    let mut display_name = use_signal(|| options.display_name.clone());
    let mut avatar: Signal<Option<AvatarReference>> = use_signal(|| options.initial_avatar.clone());
    let mut locked = use_signal(|| options.disabled);
    let mut size = use_signal(|| options.size);

    let avatar_summary = match avatar() {
        Some(AvatarReference::Url(url)) => format!("linked from {}", url),
        Some(AvatarReference::DataUri(uri)) => format!("stored inline ({} KB)", uri.len() / 1024),
        None => "not set, showing initials".to_string(),
    };

    rsx! {
        div { class: "settings-page",
            h1 { class: "settings-title", "Profile" }

            section { class: "settings-section settings-section--avatar",
                AvatarUpload {
                    current_avatar: avatar(),
                    display_name: display_name(),
                    on_avatar_change: move |new_avatar: Option<AvatarReference>| {
                        tracing::info!(set = new_avatar.is_some(), "Profile avatar changed");
                        avatar.set(new_avatar);
                    },
                    size: size(),
                    disabled: locked(),
                }
                p { class: "settings-hint", "Avatar {avatar_summary}" }
            }

            section { class: "settings-section",
                label { class: "input-label", r#for: "display-name", "display name" }
                input {
                    id: "display-name",
                    class: "input-field",
                    r#type: "text",
                    value: "{display_name}",
                    oninput: move |e| display_name.set(e.value()),
                }

                label { class: "input-label", r#for: "avatar-size", "avatar size" }
                select {
                    id: "avatar-size",
                    class: "input-field",
                    onchange: move |e| {
                        if let Some(new_size) = AvatarSize::from_name(&e.value()) {
                            size.set(new_size);
                        }
                    },
                    option { value: "small", selected: size() == AvatarSize::Small, "Small" }
                    option { value: "medium", selected: size() == AvatarSize::Medium, "Medium" }
                    option { value: "large", selected: size() == AvatarSize::Large, "Large" }
                }

                label { class: "settings-toggle",
                    input {
                        r#type: "checkbox",
                        checked: locked(),
                        onchange: move |e| locked.set(e.checked()),
                    }
                    "Lock avatar changes"
                }
            }
        }
    }
}
