//! Commit step collaborator
//!
//! The session hands a [`CommitRequest`] to an [`AvatarUploader`] and applies
//! whatever it returns. Swapping the uploader never changes the state machine.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;

use crate::config::AvatarConfig;
use crate::error::CommitError;
use crate::types::AvatarReference;

/// Everything an uploader needs to persist a pending avatar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRequest {
    /// Commit generation; stale results are discarded by the session
    pub generation: u64,
    /// Original file name
    pub file_name: String,
    /// Declared MIME type
    pub mime: String,
    /// Image bytes
    pub bytes: Bytes,
    /// Transient `preview:` URL of the pending image
    pub preview_url: String,
}

/// Turns a pending selection into a durable avatar reference.
#[async_trait]
pub trait AvatarUploader: Send + Sync {
    async fn upload(&self, request: CommitRequest) -> Result<AvatarReference, CommitError>;
}

/// Stand-in uploader: waits a fixed delay, then inlines the bytes.
///
/// The preview URL is not returned because the session revokes it on
/// commit; a data URI stays valid after that.
#[derive(Debug, Clone)]
pub struct SimulatedUploader {
    delay: Duration,
}

impl SimulatedUploader {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(config: &AvatarConfig) -> Self {
        Self::new(config.upload_delay())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedUploader {
    fn default() -> Self {
        Self::from_config(&AvatarConfig::default())
    }
}

#[async_trait]
impl AvatarUploader for SimulatedUploader {
    async fn upload(&self, request: CommitRequest) -> Result<AvatarReference, CommitError> {
        debug!(
            file = %request.file_name,
            preview = %request.preview_url,
            delay = ?self.delay,
            "Simulating avatar upload"
        );
        tokio::time::sleep(self.delay).await;
        Ok(AvatarReference::from_bytes(&request.mime, &request.bytes))
    }
}
