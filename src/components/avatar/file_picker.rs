//! Native file picker for avatar images
//!
//! Declares a MIME type from the file extension and a size from metadata,
//! so the validation gate can judge the file before its bytes are read.
//! Admissible files are then read on the blocking pool, never more than one
//! byte past the configured limit.

use std::path::{Path, PathBuf};

use anyhow::Context;
use avatarkit_core::{validate, AvatarConfig, AvatarReference, SelectedFile, ValidationError};
use image::ImageFormat;
use rfd::FileDialog;

/// Declared type for files the image crate does not recognise
const FALLBACK_MIME: &str = "application/octet-stream";

/// Open the file dialog and describe the chosen file.
///
/// Returns `Ok(None)` when the user closes the dialog.
pub async fn pick_avatar_file(config: AvatarConfig) -> anyhow::Result<Option<SelectedFile>> {
    // Dialog and disk read are blocking, so both run in spawn_blocking
    tokio::task::spawn_blocking(move || {
        let mut dialog = FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "webp", "gif"])
            .add_filter("All files", &["*"])
            .set_title("Choose Avatar");
        if let Some(dir) = dirs::picture_dir() {
            dialog = dialog.set_directory(dir);
        }

        match dialog.pick_file() {
            Some(path) => {
                let file = selected_file_from_path(&path)?;
                Ok(Some(preload(file, &config)))
            }
            None => Ok(None),
        }
    })
    .await
    .context("File picker task failed")?
}

/// Read an admissible file into memory, capped one byte past the limit.
///
/// Files the gate rejects by metadata come back untouched. So does a file
/// that fails to read; the session then reports the read error.
pub fn preload(file: SelectedFile, config: &AvatarConfig) -> SelectedFile {
    if validate(&file, config).is_err() {
        return file;
    }
    match file.clone().into_memory(config.max_file_bytes) {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::debug!(file = %file.name, "Preloading avatar failed: {}", e);
            file
        }
    }
}

/// Describe a file on disk without reading its contents.
pub fn selected_file_from_path(path: &Path) -> anyhow::Result<SelectedFile> {
    let metadata =
        std::fs::metadata(path).with_context(|| format!("Failed to stat {:?}", path))?;
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("avatar")
        .to_string();

    Ok(SelectedFile::on_disk(
        name,
        declared_mime(path),
        metadata.len(),
        PathBuf::from(path),
    ))
}

/// MIME type implied by the file extension.
pub fn declared_mime(path: &Path) -> &'static str {
    ImageFormat::from_path(path)
        .map(|format| format.to_mime_type())
        .unwrap_or(FALLBACK_MIME)
}

/// Resolve the `--avatar` argument into a reference.
///
/// URLs are used as-is. Anything else goes through the same gate as a
/// picked file before it is inlined.
pub fn avatar_from_arg(arg: &str, config: &AvatarConfig) -> anyhow::Result<AvatarReference> {
    if arg.starts_with("http://") || arg.starts_with("https://") {
        return Ok(AvatarReference::from_url(arg));
    }

    let path = Path::new(arg);
    let file = selected_file_from_path(path)?;
    validate(&file, config).with_context(|| format!("Rejected avatar {:?}", path))?;

    let bytes = file
        .load_limited(config.max_file_bytes)
        .with_context(|| format!("Failed to read avatar {:?}", path))?;
    // The file may be larger than its metadata claimed
    let size = bytes.len() as u64;
    if size > config.max_file_bytes {
        return Err(ValidationError::TooLarge {
            size,
            max: config.max_file_bytes,
        })
        .with_context(|| format!("Rejected avatar {:?}", path));
    }

    Ok(AvatarReference::from_bytes(&file.mime, &bytes))
}
