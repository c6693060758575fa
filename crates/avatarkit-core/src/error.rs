//! Error types for Avatar Kit

use thiserror::Error;

use crate::session::SelectionState;

/// Reason a selected file was refused before preview.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Declared MIME type is not in the image category
    #[error("Please select an image file")]
    NotAnImage {
        /// The declared type, possibly empty
        mime: String,
    },

    /// File is larger than the configured limit
    #[error("Image size must be less than {}MB", format_megabytes(*.max))]
    TooLarge {
        /// Declared size in bytes
        size: u64,
        /// Maximum accepted size in bytes
        max: u64,
    },
}

/// Failure reported by the upload collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommitError {
    /// The upload never reached its destination
    #[error("transport error: {0}")]
    Transport(String),

    /// The destination refused the image
    #[error("rejected: {0}")]
    Rejected(String),
}

/// Main error type for avatar session operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AvatarError {
    /// Selected file failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Commit step failed; the pending preview is kept for retry
    #[error("Failed to upload image. Please try again. ({0})")]
    Commit(#[from] CommitError),

    /// Selected file passed validation but its bytes could not be read
    #[error("Failed to read image: {0}")]
    Read(String),

    /// An upload is in flight and the request would interrupt it
    #[error("An upload is already in progress")]
    Busy,

    /// The widget is disabled and refuses mutations
    #[error("Avatar changes are disabled")]
    Disabled,

    /// The requested action has no transition from the current state
    #[error("Cannot {action} while {state}")]
    InvalidTransition {
        /// Name of the rejected action
        action: &'static str,
        /// State the session was in
        state: SelectionState,
    },
}

impl AvatarError {
    /// True for errors the user fixes by choosing another file.
    pub fn is_validation(&self) -> bool {
        matches!(self, AvatarError::Validation(_))
    }
}

/// Result type alias using AvatarError
pub type AvatarResult<T> = Result<T, AvatarError>;

/// Errors loading an [`AvatarConfig`](crate::AvatarConfig)
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for the config schema
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Config values are out of range
    #[error("Invalid config: {0}")]
    Invalid(String),
}

fn format_megabytes(bytes: u64) -> String {
    let mb = bytes as f64 / (1024.0 * 1024.0);
    if mb.fract() == 0.0 {
        format!("{}", mb as u64)
    } else {
        format!("{:.1}", mb)
    }
}
