//! Avatar selection components
//!
//! The avatar widget and the native file picker it opens.

mod avatar_upload;
mod file_picker;

pub use avatar_upload::AvatarUpload;
pub use file_picker::avatar_from_arg;
