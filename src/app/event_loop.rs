//! Main Event Loop
//!
//! Reads key events, dispatches navigation commands to the navigator,
//! and redraws the deck. Navigation runs synchronously and to completion
//! per event; the only detached work is the fullscreen request.

use crate::app::state::AppState;
use crate::domain::deck::Navigator;
use crate::error::Result;
use crate::presentation::keybindings::{Action, Keybindings};
use crate::presentation::widgets::{format_percent, ProgressBar, SlideView, StatusBar};
use crate::presentation::{Fullscreen, Tui};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Main application runner
pub struct App {
    /// Application state
    state: AppState,
    /// Navigation state machine (sole owner of the deck)
    navigator: Navigator,
    /// Key bindings
    keybindings: Keybindings,
    /// Fullscreen request driver
    fullscreen: Arc<Fullscreen>,
    /// When the most recent animated reveal happened
    last_reveal: Option<Instant>,
    /// Whether to exit
    should_quit: bool,
}

impl App {
    /// Create a new application
    #[must_use]
    pub fn new(state: AppState, navigator: Navigator) -> Self {
        let mut keybindings = Keybindings::standard();
        keybindings.apply_overrides(&state.config.ui.keybindings);

        Self {
            state,
            navigator,
            keybindings,
            fullscreen: Arc::new(Fullscreen::new()),
            last_reveal: None,
            should_quit: false,
        }
    }

    /// Run the main event loop
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        self.state.start();

        while !self.should_quit {
            self.expire_animations();

            terminal.draw(|frame| {
                render(
                    frame,
                    &self.navigator,
                    &self.keybindings,
                    self.fullscreen.is_requested(),
                );
            })?;

            self.handle_events()?;
        }

        self.state.request_shutdown();
        self.state.stop();
        Ok(())
    }

    /// Handle input events
    fn handle_events(&mut self) -> Result<()> {
        let tick = Duration::from_millis(self.state.config.ui.tick_rate_ms);
        if !event::poll(tick)? {
            return Ok(());
        }

        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    return Ok(());
                }
                if let Some(action) = self.keybindings.get_action(&key) {
                    self.dispatch(action);
                }
            }
            // ratatui re-measures on the next draw
            Event::Resize(..) => {}
            _ => {}
        }

        Ok(())
    }

    /// Dispatch a navigation command
    fn dispatch(&mut self, action: Action) {
        match action {
            Action::Next => {
                self.navigator.advance();
                self.last_reveal = Some(Instant::now());
            }
            Action::Previous => {
                self.navigator.retreat();
            }
            Action::ToggleFullscreen => {
                // Fire-and-forget: the outcome is logged, never awaited,
                // and never joined back into navigation state.
                let fullscreen = Arc::clone(&self.fullscreen);
                tokio::spawn(async move {
                    if let Err(err) = fullscreen.toggle().await {
                        tracing::warn!(error = %err, "Fullscreen request failed");
                    }
                });
            }
            Action::Quit => {
                self.should_quit = true;
            }
        }
    }

    /// Clear enter-animation flags once the reveal window has elapsed.
    fn expire_animations(&mut self) {
        if let Some(at) = self.last_reveal {
            if at.elapsed() >= Duration::from_millis(self.state.config.ui.animation_ms) {
                self.navigator.settle_animations();
                self.last_reveal = None;
            }
        }
    }
}

/// Render the full frame: slide, progress bar, status bar.
fn render(
    frame: &mut ratatui::Frame,
    navigator: &Navigator,
    keybindings: &Keybindings,
    fullscreen_requested: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Slide area
            Constraint::Length(1), // Progress bar
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_slide(frame, navigator, chunks[0]);

    frame.render_widget(ProgressBar::new(navigator.progress()), chunks[1]);

    let slide = navigator.current_slide() + 1;
    let total = navigator.deck().len();
    let message = if navigator.active_slide().max_build > 0 {
        format!(
            "Slide {slide}/{total} · Step {}/{} · {}",
            navigator.build_step(),
            navigator.active_slide().max_build,
            format_percent(navigator.progress()),
        )
    } else {
        format!(
            "Slide {slide}/{total} · {}",
            format_percent(navigator.progress())
        )
    };

    // Hints come from the live bindings so config overrides show up.
    let next_keys = keybindings.format_keys(Action::Next);
    let prev_keys = keybindings.format_keys(Action::Previous);
    let fullscreen_keys = keybindings.format_keys(Action::ToggleFullscreen);
    let quit_keys = keybindings.format_keys(Action::Quit);
    let fullscreen_label = if fullscreen_requested {
        "Windowed"
    } else {
        "Fullscreen"
    };

    let status = StatusBar::new()
        .hints(vec![
            (next_keys.as_str(), "Next"),
            (prev_keys.as_str(), "Prev"),
            (fullscreen_keys.as_str(), fullscreen_label),
            (quit_keys.as_str(), "Quit"),
        ])
        .message(&message);
    frame.render_widget(status, chunks[2]);
}

fn render_slide(frame: &mut ratatui::Frame, navigator: &Navigator, area: Rect) {
    frame.render_widget(SlideView::new(navigator.active_slide()), area);
}
