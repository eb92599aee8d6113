//! deckhand
//!
//! Terminal slide-deck presenter built around a step-reveal navigation
//! state machine:
//! - Slides advance and retreat through a fixed, pre-authored sequence
//! - "Build steps" inside a slide reveal content incrementally
//! - A progress bar tracks position in the deck
//! - Fullscreen can be toggled where the terminal supports it
//!
//! The [`domain`] layer is pure and terminal-free; [`presentation`]
//! holds keybindings and ratatui widgets; [`app`] wires both into an
//! event loop.

pub mod app;
pub mod domain;
pub mod error;
pub mod presentation;

pub use domain::deck::{load_deck, parse_deck, Deck, Navigator, Slide, StepElement};
pub use error::{DeckError, DeckhandError, Result};
