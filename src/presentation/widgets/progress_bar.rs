//! Progress Bar Widget
//!
//! Deck progress indicator. Fill width tracks the slide index only;
//! build steps inside a slide do not move it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// Format a progress percentage with two-decimal-or-natural precision,
/// e.g. `"42.86%"` or `"50%"`.
#[must_use]
pub fn format_percent(percent: f64) -> String {
    if (percent - percent.round()).abs() < 1e-9 {
        format!("{percent:.0}%")
    } else {
        format!("{percent:.2}%")
    }
}

/// Horizontal progress bar with a right-aligned percentage label
pub struct ProgressBar {
    /// Progress percentage in (0, 100]
    percent: f64,
    /// Fill style
    filled: Style,
    /// Track style
    track: Style,
}

impl ProgressBar {
    #[must_use]
    pub fn new(percent: f64) -> Self {
        Self {
            percent: percent.clamp(0.0, 100.0),
            filled: Style::default().fg(Color::Cyan),
            track: Style::default().fg(Color::DarkGray),
        }
    }

    /// Set the fill style
    #[must_use]
    pub fn filled_style(mut self, style: Style) -> Self {
        self.filled = style;
        self
    }

    /// Set the track style
    #[must_use]
    pub fn track_style(mut self, style: Style) -> Self {
        self.track = style;
        self
    }
}

impl Widget for ProgressBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let label = format_percent(self.percent);
        let label_width = label.len() as u16 + 1;
        let bar_width = area.width.saturating_sub(label_width);

        let filled_cells =
            ((f64::from(bar_width) * self.percent / 100.0).round() as u16).min(bar_width);

        for x in 0..bar_width {
            let (symbol, style) = if x < filled_cells {
                ("█", self.filled)
            } else {
                ("░", self.track)
            };
            buf.set_string(area.x + x, area.y, symbol, style);
        }

        if area.width > label_width {
            buf.set_string(
                area.x + bar_width + 1,
                area.y,
                &label,
                Style::default().fg(Color::Gray),
            );
        }
    }
}
