//! Avatar context provider for Avatar Kit.
//!
//! Provides the avatar config, the shared preview registry and the upload
//! collaborator to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| AvatarContext::new(config));
//!
//! // In child components
//! let ctx = use_avatar_context();
//! ```

use std::sync::Arc;

use avatarkit_core::{AvatarConfig, AvatarUploader, PreviewRegistry, SimulatedUploader};
use dioxus::prelude::*;

/// Shared uploader type for context.
///
/// Wrapped in Arc so the commit step can run it on the tokio runtime.
pub type SharedUploader = Arc<dyn AvatarUploader>;

/// Everything an avatar widget needs from its host.
#[derive(Clone)]
pub struct AvatarContext {
    pub config: AvatarConfig,
    pub registry: PreviewRegistry,
    pub uploader: SharedUploader,
}

impl AvatarContext {
    /// Context backed by the simulated uploader.
    pub fn new(config: AvatarConfig) -> Self {
        let uploader: SharedUploader = Arc::new(SimulatedUploader::from_config(&config));
        Self {
            config,
            registry: PreviewRegistry::new(),
            uploader,
        }
    }
}

/// Get the launch options parsed from the command line.
pub fn get_launch_options() -> crate::LaunchOptions {
    crate::launch_options()
}

/// Hook to access the AvatarContext from context.
pub fn use_avatar_context() -> AvatarContext {
    use_context::<AvatarContext>()
}
