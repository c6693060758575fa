//! Avatar Kit Core Library
//!
//! Headless avatar selection: validation, transient previews, and the
//! preview/confirm/commit state machine behind the avatar widget.
//!
//! ## Overview
//!
//! A profile settings panel lets the user pick a new avatar. The selected
//! file is checked against a [`AvatarConfig`], held as a revocable preview
//! while the user decides, and finally handed to an [`AvatarUploader`] which
//! turns it into a durable [`AvatarReference`] for the caller.
//!
//! ## Quick Start
//!
//! ```ignore
//! use avatarkit_core::{AvatarConfig, AvatarSession, PreviewRegistry, SelectedFile, SimulatedUploader};
//!
//! let config = AvatarConfig::default();
//! let uploader = SimulatedUploader::from_config(&config);
//! let mut session = AvatarSession::new(config, PreviewRegistry::new(), |avatar| {
//!     println!("avatar changed: {:?}", avatar);
//! });
//!
//! session.select(SelectedFile::from_bytes("me.png", "image/png", png_bytes))?;
//! session.confirm(&uploader).await?;
//! ```

pub mod config;
pub mod error;
pub mod preview;
pub mod session;
pub mod types;
pub mod uploader;
pub mod validation;

// Re-exports
pub use config::AvatarConfig;
pub use error::{AvatarError, AvatarResult, CommitError, ConfigError, ValidationError};
pub use preview::{PreviewHandle, PreviewId, PreviewRegistry};
pub use session::{AvatarSession, CommitOutcome, SelectionState};
pub use types::*;
pub use uploader::{AvatarUploader, CommitRequest, SimulatedUploader};
pub use validation::{validate, DEFAULT_MAX_FILE_BYTES, IMAGE_MIME_PREFIX};
