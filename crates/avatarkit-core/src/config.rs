//! Avatar widget configuration
//!
//! Limits and timings for the selection flow. Every field has a default, so
//! a partial JSON file only overrides what it names:
//!
//! ```json
//! { "max_file_bytes": 2097152, "upload_delay_ms": 500 }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::validation::{DEFAULT_MAX_FILE_BYTES, IMAGE_MIME_PREFIX};

/// Default latency of the simulated commit step.
pub const DEFAULT_UPLOAD_DELAY_MS: u64 = 1500;

/// Configuration shared by the validation gate and the commit step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarConfig {
    /// Largest accepted file, in bytes (inclusive)
    pub max_file_bytes: u64,
    /// MIME prefix a file must declare to count as an image
    pub accepted_mime_prefix: String,
    /// Delay used by the simulated uploader, in milliseconds
    pub upload_delay_ms: u64,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
            accepted_mime_prefix: IMAGE_MIME_PREFIX.to_string(),
            upload_delay_ms: DEFAULT_UPLOAD_DELAY_MS,
        }
    }
}

impl AvatarConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(?path, ?config, "Loaded avatar config");
        Ok(config)
    }

    /// Reject values that would make every file invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_file_bytes == 0 {
            return Err(ConfigError::Invalid(
                "max_file_bytes must be greater than zero".to_string(),
            ));
        }
        if self.accepted_mime_prefix.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "accepted_mime_prefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Simulated commit latency as a Duration.
    pub fn upload_delay(&self) -> Duration {
        Duration::from_millis(self.upload_delay_ms)
    }
}
