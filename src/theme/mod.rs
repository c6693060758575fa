//! Theme for Avatar Kit.

mod styles;

pub use styles::GLOBAL_STYLES;
