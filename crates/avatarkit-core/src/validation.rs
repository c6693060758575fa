//! Validation gate
//!
//! Pure checks over a selected file's declared metadata. Nothing here reads
//! file contents.

use crate::config::AvatarConfig;
use crate::error::ValidationError;
use crate::types::SelectedFile;

/// Maximum avatar file size: 5 MiB
pub const DEFAULT_MAX_FILE_BYTES: u64 = 5 * 1024 * 1024;

/// Declared types must start with this to count as images
pub const IMAGE_MIME_PREFIX: &str = "image/";

/// Check a file's declared type, then its size.
///
/// The type comparison ignores ASCII case. A file exactly at the size limit
/// is accepted.
pub fn validate(file: &SelectedFile, config: &AvatarConfig) -> Result<(), ValidationError> {
    if !is_image_type(&file.mime, &config.accepted_mime_prefix) {
        return Err(ValidationError::NotAnImage {
            mime: file.mime.clone(),
        });
    }

    if file.size > config.max_file_bytes {
        return Err(ValidationError::TooLarge {
            size: file.size,
            max: config.max_file_bytes,
        });
    }

    Ok(())
}

fn is_image_type(mime: &str, prefix: &str) -> bool {
    mime.len() >= prefix.len()
        && mime
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
