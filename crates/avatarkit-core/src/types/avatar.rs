//! Avatar Reference Type - durable pointer to avatar image data
//!
//! Supports remote/local URLs and self-contained data URIs.

use base64::Engine;
use serde::{Deserialize, Serialize};

/// Image data for a profile avatar.
///
/// Once committed, the hosting context owns the reference. The widget keeps
/// no copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AvatarReference {
    /// URL the image can be fetched from (https://, file://, ...)
    Url(String),

    /// Base64 data URI with the image inlined
    /// Format: "data:image/png;base64,..."
    DataUri(String),
}

impl AvatarReference {
    /// Check if image data is available
    pub fn is_available(&self) -> bool {
        match self {
            AvatarReference::Url(url) => !url.is_empty(),
            AvatarReference::DataUri(uri) => !uri.is_empty(),
        }
    }

    /// Value for an `<img src>` attribute
    pub fn src(&self) -> &str {
        match self {
            AvatarReference::Url(url) => url,
            AvatarReference::DataUri(uri) => uri,
        }
    }

    /// Get a descriptive string for the reference type
    pub fn kind(&self) -> &'static str {
        match self {
            AvatarReference::Url(_) => "url",
            AvatarReference::DataUri(_) => "data-uri",
        }
    }

    /// Create from a URL
    pub fn from_url(url: impl Into<String>) -> Self {
        AvatarReference::Url(url.into())
    }

    /// Inline image bytes as a base64 data URI
    pub fn from_bytes(mime: &str, bytes: &[u8]) -> Self {
        AvatarReference::DataUri(encode_data_uri(mime, bytes))
    }
}

/// Encode bytes as `data:<mime>;base64,<payload>`.
pub(crate) fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    let payload = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{};base64,{}", mime, payload)
}
