//! Deck Subsystem
//!
//! Presentation deck model, the navigation state machine, and deck file
//! loading.

pub mod model;
pub mod navigator;
pub mod source;

pub use model::{Deck, Slide, StepElement};
pub use navigator::Navigator;
pub use source::{load_deck, parse_deck};
