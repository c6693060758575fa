//! Reusable UI components for the avatar widget
//!
//! Styling hooks are plain CSS classes; the desktop app ships the stylesheet.

mod avatar_face;
mod button;
mod inline_error;
mod preview_modal;

pub use avatar_face::*;
pub use button::*;
pub use inline_error::*;
pub use preview_modal::*;
