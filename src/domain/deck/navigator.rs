//! Presentation Navigator
//!
//! The navigation/reveal state machine. Holds the traversal state
//! (current slide index, current build step) and exposes the transition
//! operations that mutate visibility flags on the deck and feed the
//! progress indicator.
//!
//! All transitions are deterministic and total: every command either
//! produces a valid next state or is a no-op at a terminal boundary.

use crate::domain::deck::model::Deck;

/// Drives forward/backward traversal of a fixed slide sequence and the
/// nested step reveals inside each slide.
///
/// The navigator owns the deck exclusively; all mutation of visibility
/// flags goes through its operations.
#[derive(Debug)]
pub struct Navigator {
    deck: Deck,
    current_slide: usize,
    build_step: u32,
}

impl Navigator {
    /// Create a navigator over a validated deck, activating slide 0 with
    /// build step 0 and everything else hidden.
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        let mut nav = Self {
            deck,
            current_slide: 0,
            build_step: 0,
        };
        nav.jump_to(0, false);
        nav
    }

    /// Index of the active slide.
    #[must_use]
    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    /// Current build step within the active slide.
    #[must_use]
    pub fn build_step(&self) -> u32 {
        self.build_step
    }

    /// The deck, for rendering.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The active slide.
    #[must_use]
    pub fn active_slide(&self) -> &crate::domain::deck::model::Slide {
        self.deck.slide(self.current_slide)
    }

    /// Progress through the deck as a percentage in (0, 100].
    ///
    /// Derived from the slide index alone; build steps do not move the
    /// progress bar.
    #[must_use]
    pub fn progress(&self) -> f64 {
        (self.current_slide as f64 + 1.0) / self.deck.len() as f64 * 100.0
    }

    /// The "next" command.
    ///
    /// Reveals the next build step of the active slide if one remains,
    /// otherwise moves to the next slide fresh (build step 0). A no-op at
    /// the last step of the last slide.
    pub fn advance(&mut self) {
        let max_build = self.active_slide().max_build;

        if self.build_step < max_build {
            self.build_step += 1;
            let step = self.build_step;
            for element in self.deck.slide_mut(self.current_slide).elements_at_mut(step) {
                element.reveal(true);
            }
            tracing::debug!(
                slide = self.current_slide,
                step = self.build_step,
                "Revealed build step"
            );
            return;
        }

        if self.current_slide + 1 < self.deck.len() {
            self.jump_to(self.current_slide + 1, false);
        }
    }

    /// The "previous" command.
    ///
    /// Hides the current build step if one is shown, otherwise moves to
    /// the previous slide fully revealed. A no-op at (slide 0, step 0).
    pub fn retreat(&mut self) {
        if self.build_step > 0 {
            let step = self.build_step;
            for element in self.deck.slide_mut(self.current_slide).elements_at_mut(step) {
                element.hide();
            }
            self.build_step -= 1;
            tracing::debug!(
                slide = self.current_slide,
                step = self.build_step,
                "Hid build step"
            );
            return;
        }

        if self.current_slide > 0 {
            self.jump_to(self.current_slide - 1, true);
        }
    }

    /// Transition primitive shared by `advance` and `retreat`.
    ///
    /// Activates exactly the target slide, clears its build state, then
    /// either leaves it fresh (`reveal_all = false`) or bulk-reveals every
    /// step up to `max_build` without enter animations (`reveal_all =
    /// true`). Revisiting a slide backwards always shows its end state,
    /// not the build step it was last left at.
    fn jump_to(&mut self, index: usize, reveal_all: bool) {
        debug_assert!(index < self.deck.len(), "slide index out of range");

        for (i, slide) in self.deck.slides_mut().iter_mut().enumerate() {
            slide.active = i == index;
            if i != index {
                // Departed and inactive slides must not keep visible
                // steps or in-flight animation flags.
                slide.clear_build();
            }
        }
        self.current_slide = index;

        let slide = self.deck.slide_mut(index);
        slide.clear_build();

        self.build_step = if reveal_all { slide.max_build } else { 0 };
        for step in 1..=self.build_step {
            for element in slide.elements_at_mut(step) {
                element.reveal(false);
            }
        }

        tracing::debug!(
            slide = index,
            step = self.build_step,
            progress = self.progress(),
            "Activated slide"
        );
    }

    /// Clear enter-animation flags once the reveal animation window has
    /// elapsed. Driven by the event loop tick.
    pub fn settle_animations(&mut self) {
        for slide in self.deck.slides_mut() {
            for element in slide.elements.iter_mut() {
                element.entering = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::deck::model::{Slide, StepElement};

    /// Deck with the given max build per slide; each slide carries one
    /// element per build step plus one unconditional element.
    fn deck(builds: &[u32]) -> Deck {
        let slides = builds
            .iter()
            .enumerate()
            .map(|(i, &build)| {
                let mut elements = vec![StepElement::new(0, format!("slide {i} body"))];
                for step in 1..=build {
                    elements.push(StepElement::new(step, format!("slide {i} step {step}")));
                }
                Slide::new(Some(format!("Slide {i}")), build, elements)
            })
            .collect();
        Deck::from_slides(slides).unwrap()
    }

    fn state(nav: &Navigator) -> (usize, u32) {
        (nav.current_slide(), nav.build_step())
    }

    fn visible_steps(nav: &Navigator) -> Vec<u32> {
        nav.active_slide()
            .visible_elements()
            .filter(|e| e.step > 0)
            .map(|e| e.step)
            .collect()
    }

    fn assert_invariants(nav: &Navigator) {
        let active: Vec<usize> = nav
            .deck()
            .slides()
            .iter()
            .enumerate()
            .filter(|(_, s)| s.active)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(active, vec![nav.current_slide()], "exactly one active slide");

        assert!(nav.build_step() <= nav.active_slide().max_build);

        for (i, slide) in nav.deck().slides().iter().enumerate() {
            for el in slide.elements.iter().filter(|e| e.step > 0) {
                if i == nav.current_slide() {
                    assert_eq!(el.visible, el.step <= nav.build_step());
                } else {
                    assert!(!el.visible, "inactive slide element visible");
                    assert!(!el.entering, "inactive slide animation flag set");
                }
            }
        }
    }

    #[test]
    fn test_initial_state() {
        let nav = Navigator::new(deck(&[2, 1, 0]));
        assert_eq!(state(&nav), (0, 0));
        assert!(nav.deck().slide(0).active);
        assert!(visible_steps(&nav).is_empty());
        assert_invariants(&nav);
    }

    #[test]
    fn test_advance_reveals_steps_then_moves_on() {
        // Scenario A: 3 slides, builds [0, 2, 0]
        let mut nav = Navigator::new(deck(&[0, 2, 0]));

        nav.advance();
        assert_eq!(state(&nav), (1, 0));
        nav.advance();
        assert_eq!(state(&nav), (1, 1));
        assert_eq!(visible_steps(&nav), vec![1]);
        nav.advance();
        assert_eq!(state(&nav), (1, 2));
        nav.advance();
        assert_eq!(state(&nav), (2, 0));
        nav.advance();
        assert_eq!(state(&nav), (2, 0), "advance at deck end is a no-op");
        assert_invariants(&nav);
    }

    #[test]
    fn test_retreat_unwinds_steps_then_slides() {
        // Scenario B: from (1, 2) retreat three times
        let mut nav = Navigator::new(deck(&[0, 2, 0]));
        nav.advance();
        nav.advance();
        nav.advance();
        assert_eq!(state(&nav), (1, 2));

        nav.retreat();
        assert_eq!(state(&nav), (1, 1));
        assert_eq!(visible_steps(&nav), vec![1], "step 2 hidden again");

        nav.retreat();
        assert_eq!(state(&nav), (1, 0));

        nav.retreat();
        assert_eq!(state(&nav), (0, 0), "slide 0 has no steps");
        assert_invariants(&nav);
    }

    #[test]
    fn test_retreat_at_start_is_noop() {
        // Scenario C
        let mut nav = Navigator::new(deck(&[0, 1]));
        nav.retreat();
        assert_eq!(state(&nav), (0, 0));
        assert_invariants(&nav);
    }

    #[test]
    fn test_backward_entry_fully_reveals_without_animation() {
        // Scenario D: retreating onto a build=2 slide shows both steps,
        // with no animation flag on either
        let mut nav = Navigator::new(deck(&[2, 0]));
        nav.advance();
        nav.advance();
        nav.advance();
        assert_eq!(state(&nav), (1, 0));

        nav.retreat();
        assert_eq!(state(&nav), (0, 2));
        assert_eq!(visible_steps(&nav), vec![1, 2]);
        for el in nav.active_slide().elements.iter().filter(|e| e.step > 0) {
            assert!(!el.entering, "bulk reveal must not animate");
        }
        assert_invariants(&nav);
    }

    #[test]
    fn test_advancing_off_a_built_slide_hides_its_steps() {
        // Moving forward from a fully revealed slide must leave it with
        // every stepped element hidden and no animation flag set, even
        // before the next settle tick.
        let mut nav = Navigator::new(deck(&[2, 0]));
        nav.advance();
        nav.advance();
        assert_eq!(state(&nav), (0, 2));

        nav.advance();
        assert_eq!(state(&nav), (1, 0));

        let departed = nav.deck().slide(0);
        for el in departed.elements.iter().filter(|e| e.step > 0) {
            assert!(!el.visible, "departed slide element still visible");
            assert!(!el.entering, "departed slide animation flag still set");
        }
        assert_invariants(&nav);
    }

    #[test]
    fn test_boundary_idempotence() {
        let mut nav = Navigator::new(deck(&[1, 2]));

        for _ in 0..5 {
            nav.retreat();
        }
        assert_eq!(state(&nav), (0, 0));

        for _ in 0..10 {
            nav.advance();
        }
        assert_eq!(state(&nav), (1, 2));
        for _ in 0..5 {
            nav.advance();
        }
        assert_eq!(state(&nav), (1, 2));
        assert_invariants(&nav);
    }

    #[test]
    fn test_advance_retreat_round_trip() {
        // From every reachable state, advance then retreat restores the
        // (slide, step) pair and the visible element set. Animation flags
        // are allowed to differ.
        let builds = [1, 0, 3, 2];
        let total_states: u32 = builds.iter().map(|b| b + 1).sum();

        let mut nav = Navigator::new(deck(&builds));
        for _ in 0..total_states {
            let before = state(&nav);
            let visible_before = visible_steps(&nav);

            nav.advance();
            let after = state(&nav);
            nav.retreat();

            if after != before {
                assert_eq!(state(&nav), before, "retreat must undo advance");
                assert_eq!(visible_steps(&nav), visible_before);
            }
            assert_invariants(&nav);

            nav.advance();
        }
    }

    #[test]
    fn test_progress_monotonic_in_slide_index() {
        let mut nav = Navigator::new(deck(&[2, 1, 0, 3]));
        let mut last_progress = nav.progress();
        let mut last_slide = nav.current_slide();
        assert!((last_progress - 25.0).abs() < 1e-9);

        loop {
            let before = state(&nav);
            nav.advance();
            if state(&nav) == before {
                break;
            }
            if nav.current_slide() > last_slide {
                assert!(nav.progress() > last_progress);
                last_progress = nav.progress();
                last_slide = nav.current_slide();
            } else {
                assert!(
                    (nav.progress() - last_progress).abs() < 1e-9,
                    "build steps must not move progress"
                );
            }
        }
        assert!((nav.progress() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_repeat_reveal_replays_animation() {
        // Retreat then advance over the same step bumps its enter_seq
        let mut nav = Navigator::new(deck(&[1]));
        nav.advance();
        let seq_first = nav.active_slide().elements[1].enter_seq;

        nav.retreat();
        nav.advance();
        let seq_second = nav.active_slide().elements[1].enter_seq;
        assert!(seq_second > seq_first);
    }

    #[test]
    fn test_settle_animations_clears_entering() {
        let mut nav = Navigator::new(deck(&[2]));
        nav.advance();
        assert!(nav.active_slide().elements[1].entering);

        nav.settle_animations();
        assert!(!nav.active_slide().elements[1].entering);
        assert!(nav.active_slide().elements[1].visible, "still visible");
    }

    #[test]
    fn test_shared_step_numbers_reveal_together() {
        let slide = Slide::new(
            None,
            1,
            vec![
                StepElement::new(1, "a"),
                StepElement::new(1, "b"),
                StepElement::new(1, "c"),
            ],
        );
        let mut nav = Navigator::new(Deck::from_slides(vec![slide]).unwrap());

        nav.advance();
        assert!(nav.active_slide().elements.iter().all(|e| e.visible));

        nav.retreat();
        assert!(nav.active_slide().elements.iter().all(|e| !e.visible));
    }

    #[test]
    fn test_single_slide_deck() {
        let mut nav = Navigator::new(deck(&[0]));
        assert!((nav.progress() - 100.0).abs() < 1e-9);
        nav.advance();
        nav.retreat();
        assert_eq!(state(&nav), (0, 0));
    }
}
