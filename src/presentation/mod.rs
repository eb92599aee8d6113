//! Presentation Layer (TUI)
//!
//! Terminal user interface: keybindings, terminal lifecycle, fullscreen
//! requests, and widgets.

pub mod fullscreen;
pub mod keybindings;
pub mod tui;
pub mod widgets;

pub use fullscreen::Fullscreen;
pub use keybindings::{Action, KeyCombination, Keybindings};
pub use tui::{init, install_panic_hook, restore, Tui};
pub use widgets::{format_percent, ProgressBar, SlideView, StatusBar};
