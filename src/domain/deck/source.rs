//! Deck Source
//!
//! Loads an externally authored TOML deck file into the deck model. The
//! file is parsed once at startup; navigation never re-reads it.
//!
//! ```toml
//! [[slides]]
//! title = "Why builds matter"
//! build = 2
//!
//! [[slides.elements]]
//! text = "Always-visible intro line"
//!
//! [[slides.elements]]
//! step = 1
//! text = "First reveal"
//! ```

use crate::domain::deck::model::{Deck, Slide, StepElement};
use crate::error::{DeckError, DeckResult};
use serde::Deserialize;
use std::path::Path;

/// Top-level deck file layout
#[derive(Debug, Deserialize)]
struct DeckFile {
    #[serde(default)]
    slides: Vec<SlideSpec>,
}

/// One slide as authored
#[derive(Debug, Deserialize)]
struct SlideSpec {
    title: Option<String>,
    /// Max build step. Accepts an integer or a string; absent or
    /// non-numeric values fall back to 0.
    build: Option<toml::Value>,
    #[serde(default)]
    elements: Vec<ElementSpec>,
}

/// One content element as authored
#[derive(Debug, Deserialize)]
struct ElementSpec {
    text: String,
    /// Build step tag; absent means unconditional content (step 0)
    #[serde(default)]
    step: u32,
}

/// Coerce the authored `build` attribute to a step count.
///
/// Mirrors lenient attribute handling in the deck format: a missing,
/// negative, or non-numeric value means "no builds".
fn coerce_build(value: Option<&toml::Value>) -> u32 {
    match value {
        Some(toml::Value::Integer(n)) => u32::try_from(*n).unwrap_or(0),
        Some(toml::Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

/// Load and validate a deck file.
///
/// Fatal errors: unreadable file, unparseable TOML, empty slide list.
/// Elements tagged beyond their slide's build are unreachable content;
/// they are loaded as-is with a warning.
pub fn load_deck(path: &Path) -> DeckResult<Deck> {
    let raw = std::fs::read_to_string(path).map_err(|e| DeckError::FileRead {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let deck = parse_deck(&raw)?;

    tracing::info!(
        path = %path.display(),
        slides = deck.len(),
        "Deck loaded"
    );
    Ok(deck)
}

/// Parse deck file contents.
pub fn parse_deck(raw: &str) -> DeckResult<Deck> {
    let file: DeckFile = toml::from_str(raw).map_err(|e| DeckError::Parse(e.to_string()))?;

    let slides: Vec<Slide> = file
        .slides
        .into_iter()
        .enumerate()
        .map(|(index, spec)| {
            let max_build = coerce_build(spec.build.as_ref());
            let elements: Vec<StepElement> = spec
                .elements
                .into_iter()
                .map(|el| {
                    if el.step > max_build {
                        tracing::warn!(
                            slide = index,
                            step = el.step,
                            max_build,
                            "Element step exceeds slide build; it will never be revealed"
                        );
                    }
                    StepElement::new(el.step, el.text)
                })
                .collect();
            Slide::new(spec.title, max_build, elements)
        })
        .collect();

    Deck::from_slides(slides)
}
