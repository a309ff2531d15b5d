//! Reusable guide navigation components

mod outline_nav;
mod progress_bar;
mod save_toggle;
mod star_rating;

pub use outline_nav::*;
pub use progress_bar::*;
pub use save_toggle::*;
pub use star_rating::*;
