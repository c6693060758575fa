//! Preview Registry - transient, revocable references to selected image data
//!
//! A selected file is held here while the user decides whether to keep it.
//! Each entry is owned by exactly one [`PreviewHandle`]; dropping or
//! releasing the handle revokes the entry and frees its bytes.
//!
//! # Example
//!
//! ```ignore
//! let registry = PreviewRegistry::new();
//! let handle = registry.create("image/png", bytes);
//! assert_eq!(registry.live_count(), 1);
//!
//! rsx! { img { src: "{handle.data_uri()}" } }
//!
//! drop(handle);
//! assert_eq!(registry.live_count(), 0);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use parking_lot::Mutex;
use tracing::{debug, trace};
use ulid::Ulid;

use crate::types::avatar::encode_data_uri;

/// URL scheme used for preview references
pub const PREVIEW_SCHEME: &str = "preview:";

/// Unique identifier for a live preview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreviewId(Ulid);

impl PreviewId {
    fn new() -> Self {
        Self(Ulid::new())
    }

    /// The `preview:<ulid>` URL naming this entry
    pub fn url(&self) -> String {
        format!("{}{}", PREVIEW_SCHEME, self.0)
    }
}

impl fmt::Display for PreviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shared store of live previews.
///
/// Cloning is cheap; clones see the same entries. Each entry records the
/// byte length its handle holds.
#[derive(Debug, Clone, Default)]
pub struct PreviewRegistry {
    entries: Arc<Mutex<HashMap<PreviewId, usize>>>,
}

impl PreviewRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register bytes and return the handle that owns them.
    pub fn create(&self, mime: impl Into<String>, bytes: impl Into<Bytes>) -> PreviewHandle {
        let id = PreviewId::new();
        let mime = mime.into();
        let bytes: Bytes = bytes.into();
        debug!(%id, %mime, len = bytes.len(), "Created preview");

        self.entries.lock().insert(id, bytes.len());

        PreviewHandle {
            id,
            mime,
            bytes,
            registry: self.clone(),
            released: false,
        }
    }

    /// Number of previews not yet released
    pub fn live_count(&self) -> usize {
        self.entries.lock().len()
    }

    fn revoke(&self, id: PreviewId) {
        if let Some(len) = self.entries.lock().remove(&id) {
            debug!(%id, len, "Revoked preview");
        } else {
            trace!(%id, "Preview already revoked");
        }
    }
}

/// Owning handle for one live preview.
///
/// Not `Clone`: there is exactly one owner, and the entry is revoked when
/// that owner releases or drops it.
pub struct PreviewHandle {
    id: PreviewId,
    mime: String,
    bytes: Bytes,
    registry: PreviewRegistry,
    released: bool,
}

impl PreviewHandle {
    pub fn id(&self) -> PreviewId {
        self.id
    }

    /// `preview:<ulid>` URL naming this preview in logs and commit requests
    pub fn url(&self) -> String {
        self.id.url()
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    /// Inline data URI for rendering the preview
    pub fn data_uri(&self) -> String {
        encode_data_uri(&self.mime, &self.bytes)
    }

    /// Revoke the entry now instead of waiting for drop.
    pub fn release(mut self) {
        self.revoke();
    }

    fn revoke(&mut self) {
        if !self.released {
            self.released = true;
            self.registry.revoke(self.id);
        }
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        self.revoke();
    }
}

impl fmt::Debug for PreviewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewHandle")
            .field("id", &self.id)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_drop() {
        let registry = PreviewRegistry::new();
        let handle = registry.create("image/png", vec![1, 2, 3]);
        assert_eq!(registry.live_count(), 1);

        drop(handle);
        assert_eq!(registry.live_count(), 0);
    }

    #[test]
    fn test_explicit_release() {
        let registry = PreviewRegistry::new();
        let handle = registry.create("image/png", vec![1]);
        handle.release();
        assert_eq!(registry.live_count(), 0);
    }

    #[test]
    fn test_url_names_preview() {
        let registry = PreviewRegistry::new();
        let handle = registry.create("image/jpeg", b"jpeg".to_vec());
        assert_eq!(handle.url(), format!("preview:{}", handle.id()));
        assert_eq!(handle.mime(), "image/jpeg");
    }

    #[test]
    fn test_clones_share_entries() {
        let registry = PreviewRegistry::new();
        let other = registry.clone();
        let _a = registry.create("image/png", vec![0]);
        let _b = other.create("image/png", vec![0]);
        assert_eq!(registry.live_count(), 2);
        assert_eq!(other.live_count(), 2);
    }

    #[test]
    fn test_data_uri() {
        let registry = PreviewRegistry::new();
        let handle = registry.create("image/png", b"abc".to_vec());
        assert_eq!(handle.data_uri(), "data:image/png;base64,YWJj");
    }
}
