//! TUI Widgets
//!
//! Custom ratatui widgets for deckhand.

pub mod progress_bar;
pub mod slide_view;
pub mod status_bar;

pub use progress_bar::{format_percent, ProgressBar};
pub use slide_view::SlideView;
pub use status_bar::StatusBar;
