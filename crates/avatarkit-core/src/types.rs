//! Core types for Avatar Kit

pub mod avatar;
pub mod file;

pub use avatar::AvatarReference;
pub use file::{FileSource, SelectedFile};
