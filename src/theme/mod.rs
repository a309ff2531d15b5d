//! Styles for the guide reader.

mod styles;

pub use styles::GLOBAL_STYLES;
