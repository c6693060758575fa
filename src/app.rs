use dioxus::prelude::*;

use crate::context::{get_launch_options, AvatarContext};
use crate::pages::Settings;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the avatar context.
#[component]
pub fn App() -> Element {
    use_context_provider(|| AvatarContext::new(get_launch_options().config));

    rsx! {
        style { {GLOBAL_STYLES} }
        Settings {}
    }
}
