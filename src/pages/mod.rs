//! Page components for the guide reader.

mod guide;
mod library;

pub use guide::GuideView;
pub use library::Library;
