//! Page components for Avatar Kit.

mod settings;

pub use settings::Settings;
