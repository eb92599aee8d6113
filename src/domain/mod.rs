//! Domain Layer
//!
//! Core presentation logic: the deck model and the navigation/reveal
//! state machine. Pure and synchronous; no terminal dependencies.

pub mod deck;
