//! UI Components for Avatar Kit.

pub mod avatar;

pub use avatar::AvatarUpload;
