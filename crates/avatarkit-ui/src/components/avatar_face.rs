//! Avatar Face Component
//!
//! Round avatar showing the current image, or the user's initials when no
//! image is set or the image fails to load.

use avatarkit_core::AvatarReference;
use dioxus::prelude::*;

/// Avatar size variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum AvatarSize {
    /// 48px, inline in lists
    Small,
    /// 80px, default for settings
    #[default]
    Medium,
    /// 128px, profile header
    Large,
}

impl AvatarSize {
    /// CSS class sizing the avatar circle and initials text
    pub fn class(&self) -> &'static str {
        match self {
            AvatarSize::Small => "avatar--small",
            AvatarSize::Medium => "avatar--medium",
            AvatarSize::Large => "avatar--large",
        }
    }

    /// Icon size for overlay controls, in pixels
    pub fn icon_px(&self) -> u32 {
        match self {
            AvatarSize::Small => 16,
            AvatarSize::Medium => 20,
            AvatarSize::Large => 24,
        }
    }

    /// Parse "small" / "medium" / "large"
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "small" => Some(AvatarSize::Small),
            "medium" => Some(AvatarSize::Medium),
            "large" => Some(AvatarSize::Large),
            _ => None,
        }
    }
}

/// Up to two uppercase initials from a display name.
///
/// Takes the first character of the first two words.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Round avatar image with initials fallback
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     AvatarFace {
///         avatar: current_avatar(),
///         display_name: "Ada Lovelace".to_string(),
///         size: AvatarSize::Large,
///     }
/// }
/// ```
#[component]
pub fn AvatarFace(
    /// Current avatar, if any
    avatar: Option<AvatarReference>,
    /// Name used for alt text and initials
    display_name: String,
    #[props(default)] size: AvatarSize,
) -> Element {
    let mut broken_src = use_signal(|| Option::<String>::None);

    let src = avatar
        .as_ref()
        .filter(|a| a.is_available())
        .map(|a| a.src().to_string())
        .filter(|src| broken_src.read().as_deref() != Some(src.as_str()));

    let size_class = size.class();

    match src {
        Some(src) => {
            let failed = src.clone();
            rsx! {
                img {
                    class: "avatar avatar--image {size_class}",
                    src: "{src}",
                    alt: "{display_name}",
                    onerror: move |_| {
                        tracing::debug!("Avatar image failed to load; showing initials");
                        broken_src.set(Some(failed.clone()));
                    },
                }
            }
        }
        None => {
            let letters = initials(&display_name);
            rsx! {
                div {
                    class: "avatar avatar--initials {size_class}",
                    role: "img",
                    "aria-label": "{display_name}",
                    "{letters}"
                }
            }
        }
    }
}
