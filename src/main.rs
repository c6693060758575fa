#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use avatarkit_core::{AvatarConfig, AvatarReference};
use avatarkit_ui::AvatarSize;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// Launch options, set from command line
static LAUNCH_OPTIONS: OnceLock<LaunchOptions> = OnceLock::new();

/// Everything the UI needs from the command line.
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    pub config: AvatarConfig,
    pub display_name: String,
    pub initial_avatar: Option<AvatarReference>,
    pub disabled: bool,
    pub size: AvatarSize,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            config: AvatarConfig::default(),
            display_name: "New Trader".to_string(),
            initial_avatar: None,
            disabled: false,
            size: AvatarSize::Large,
        }
    }
}

/// Get the launch options (set from command line or default)
pub fn launch_options() -> LaunchOptions {
    LAUNCH_OPTIONS.get().cloned().unwrap_or_default()
}

/// Avatar Kit - profile avatar settings
#[derive(Parser, Debug)]
#[command(name = "avatarkit-desktop")]
#[command(about = "Avatar Kit - pick, preview and save a profile avatar")]
struct Args {
    /// JSON config file (max_file_bytes, accepted_mime_prefix, upload_delay_ms)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Display name used for the initials fallback
    #[arg(short = 'n', long, default_value = "New Trader")]
    display_name: String,

    /// Initial avatar: an image file or an http(s) URL
    #[arg(short, long)]
    avatar: Option<String>,

    /// Override the simulated upload delay
    #[arg(long)]
    upload_delay_ms: Option<u64>,

    /// Override the maximum accepted file size
    #[arg(long)]
    max_file_bytes: Option<u64>,

    /// Start with avatar changes locked
    #[arg(long)]
    disabled: bool,

    /// Avatar size: small, medium or large
    #[arg(short, long, default_value = "large", value_parser = parse_size)]
    size: AvatarSize,
}

fn parse_size(value: &str) -> Result<AvatarSize, String> {
    AvatarSize::from_name(value).ok_or_else(|| format!("unknown size '{}'", value))
}

impl Args {
    fn into_options(self) -> anyhow::Result<LaunchOptions> {
        let mut config = match &self.config {
            Some(path) => AvatarConfig::load(path)
                .with_context(|| format!("Failed to load config {:?}", path))?,
            None => AvatarConfig::default(),
        };
        if let Some(delay) = self.upload_delay_ms {
            config.upload_delay_ms = delay;
        }
        if let Some(max) = self.max_file_bytes {
            config.max_file_bytes = max;
        }
        config.validate().context("Invalid avatar config")?;

        let initial_avatar = self
            .avatar
            .as_deref()
            .map(|arg| components::avatar::avatar_from_arg(arg, &config))
            .transpose()?;

        Ok(LaunchOptions {
            config,
            display_name: self.display_name,
            initial_avatar,
            disabled: self.disabled,
            size: self.size,
        })
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let options = Args::parse().into_options()?;

    tracing::info!(
        display_name = %options.display_name,
        max_file_bytes = options.config.max_file_bytes,
        upload_delay_ms = options.config.upload_delay_ms,
        "Starting Avatar Kit"
    );

    let title = format!("Avatar Kit - {}", options.display_name);
    let _ = LAUNCH_OPTIONS.set(options);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(560.0, 720.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
