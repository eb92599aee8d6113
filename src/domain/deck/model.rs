//! Deck Model
//!
//! Core data structures for a presentation deck: slides and their
//! step-tagged content elements. Shape is fixed after loading; only
//! visibility and animation flags mutate afterwards.

use crate::error::{DeckError, DeckResult};

/// A content unit inside a slide, tied to a build step number.
///
/// Step 0 elements are unconditional slide content and always visible.
/// Elements with step >= 1 become visible once the navigator reaches that
/// build step; all elements sharing a step number reveal and hide together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepElement {
    /// Build step at which this element becomes visible (0 = always)
    pub step: u32,
    /// Rendered text content
    pub text: String,
    /// Whether the element is currently shown
    pub visible: bool,
    /// True only during the reveal animation window
    pub entering: bool,
    /// Bumped on every animated reveal so a repeated reveal of the same
    /// step replays the enter animation even if the previous one is still
    /// in flight
    pub enter_seq: u64,
}

impl StepElement {
    /// Create a new element. Step 0 content starts visible, stepped
    /// content starts hidden.
    #[must_use]
    pub fn new(step: u32, text: impl Into<String>) -> Self {
        Self {
            step,
            text: text.into(),
            visible: step == 0,
            entering: false,
            enter_seq: 0,
        }
    }

    /// Show the element. An animated reveal re-triggers the enter
    /// animation; a bulk catch-up reveal does not.
    pub fn reveal(&mut self, animate: bool) {
        self.visible = true;
        if animate {
            self.entering = true;
            self.enter_seq = self.enter_seq.wrapping_add(1);
        } else {
            self.entering = false;
        }
    }

    /// Hide the element and clear its animation flag.
    pub fn hide(&mut self) {
        self.visible = false;
        self.entering = false;
    }
}

/// One top-level section of the presentation, shown exclusively while
/// active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    /// Optional slide title
    pub title: Option<String>,
    /// Maximum build step (0 = no incremental reveals)
    pub max_build: u32,
    /// Ordered content elements
    pub elements: Vec<StepElement>,
    /// Whether this is the slide currently displayed
    pub active: bool,
}

impl Slide {
    #[must_use]
    pub fn new(title: Option<String>, max_build: u32, elements: Vec<StepElement>) -> Self {
        Self {
            title,
            max_build,
            elements,
            active: false,
        }
    }

    /// Mutable access to every element tagged with the given step number.
    pub fn elements_at_mut(&mut self, step: u32) -> impl Iterator<Item = &mut StepElement> {
        self.elements.iter_mut().filter(move |e| e.step == step)
    }

    /// Hide all stepped elements and clear their animation flags.
    /// Step 0 content is untouched.
    pub fn clear_build(&mut self) {
        for element in self.elements.iter_mut().filter(|e| e.step > 0) {
            element.hide();
        }
    }

    /// Elements currently visible, in document order.
    pub fn visible_elements(&self) -> impl Iterator<Item = &StepElement> {
        self.elements.iter().filter(|e| e.visible)
    }
}

/// The full presentation: an ordered, non-empty sequence of slides.
#[derive(Debug, Clone)]
pub struct Deck {
    slides: Vec<Slide>,
}

impl Deck {
    /// Build a deck from an ordered slide sequence.
    ///
    /// An empty sequence is a fatal configuration error: the navigator
    /// cannot establish a valid initial state without at least one slide.
    pub fn from_slides(slides: Vec<Slide>) -> DeckResult<Self> {
        if slides.is_empty() {
            return Err(DeckError::EmptyDeck);
        }
        Ok(Self { slides })
    }

    /// Number of slides. Always >= 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false; a constructed deck holds at least one slide.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn slide(&self, index: usize) -> &Slide {
        &self.slides[index]
    }

    pub fn slide_mut(&mut self, index: usize) -> &mut Slide {
        &mut self.slides[index]
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slides_mut(&mut self) -> &mut [Slide] {
        &mut self.slides
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_deck_rejected() {
        assert!(matches!(
            Deck::from_slides(Vec::new()),
            Err(DeckError::EmptyDeck)
        ));
    }

    #[test]
    fn test_step_zero_starts_visible() {
        let always = StepElement::new(0, "headline");
        assert!(always.visible);

        let stepped = StepElement::new(1, "bullet");
        assert!(!stepped.visible);
    }

    #[test]
    fn test_animated_reveal_bumps_sequence() {
        let mut el = StepElement::new(2, "point");
        el.reveal(true);
        assert!(el.visible);
        assert!(el.entering);
        assert_eq!(el.enter_seq, 1);

        el.hide();
        assert!(!el.visible);
        assert!(!el.entering);

        el.reveal(true);
        assert_eq!(el.enter_seq, 2, "repeat reveal must replay the animation");
    }

    #[test]
    fn test_bulk_reveal_has_no_animation() {
        let mut el = StepElement::new(1, "point");
        el.reveal(false);
        assert!(el.visible);
        assert!(!el.entering);
        assert_eq!(el.enter_seq, 0);
    }

    #[test]
    fn test_clear_build_keeps_unconditional_content() {
        let mut slide = Slide::new(
            Some("title".into()),
            2,
            vec![
                StepElement::new(0, "intro"),
                StepElement::new(1, "first"),
                StepElement::new(2, "second"),
            ],
        );
        for el in slide.elements.iter_mut() {
            el.reveal(true);
        }
        slide.clear_build();

        assert!(slide.elements[0].visible, "step 0 content stays visible");
        assert!(!slide.elements[1].visible);
        assert!(!slide.elements[2].visible);
        assert!(!slide.elements[2].entering);
    }
}
