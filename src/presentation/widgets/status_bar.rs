//! Status Bar Widget
//!
//! Bottom status bar showing key binding hints and the current position
//! in the deck.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Status bar widget
pub struct StatusBar<'a> {
    /// Key binding hints
    hints: Vec<(&'a str, &'a str)>,
    /// Status message (slide/step position)
    message: Option<&'a str>,
    /// Background style
    style: Style,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar with default hints
    #[must_use]
    pub fn new() -> Self {
        Self {
            hints: vec![
                ("→/Space", "Next"),
                ("←", "Prev"),
                ("F", "Fullscreen"),
                ("Q", "Quit"),
            ],
            message: None,
            style: Style::default().bg(Color::DarkGray),
        }
    }

    /// Set custom key hints
    #[must_use]
    pub fn hints(mut self, hints: Vec<(&'a str, &'a str)>) -> Self {
        self.hints = hints;
        self
    }

    /// Set a status message
    #[must_use]
    pub fn message(mut self, message: &'a str) -> Self {
        self.message = Some(message);
        self
    }
}

impl Default for StatusBar<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        buf.set_style(area, self.style);

        let key_style = Style::default()
            .fg(Color::Black)
            .bg(Color::Gray)
            .add_modifier(Modifier::BOLD);
        let desc_style = Style::default().fg(Color::White).bg(Color::DarkGray);

        let mut spans = Vec::new();
        for (key, desc) in &self.hints {
            spans.push(Span::styled(format!("[{key}]"), key_style));
            spans.push(Span::styled(format!("{desc} "), desc_style));
        }

        if let Some(msg) = self.message {
            let hints_len: usize = spans.iter().map(|s| s.content.len()).sum();
            let remaining = (area.width as usize).saturating_sub(hints_len);
            if remaining > msg.len() + 3 {
                spans.push(Span::styled(" | ", desc_style));
                spans.push(Span::styled(
                    msg,
                    Style::default().fg(Color::Yellow).bg(Color::DarkGray),
                ));
            }
        }

        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
