//! Avatar Kit UI Components
//!
//! Presentational Dioxus components for the profile avatar widget. They
//! render props and emit events; state lives in
//! [`avatarkit_core::AvatarSession`], owned by the hosting component.
//!
//! ## Building blocks
//!
//! - [`AvatarFace`]: the round avatar, image or initials
//! - [`AvatarPreviewModal`]: confirm/cancel dialog around a pending image
//! - [`InlineError`]: the small error bubble under the avatar
//! - [`Button`] / [`IconButton`]: shared button styles

pub mod components;

pub use components::*;
