//! Slide View Widget
//!
//! Renders the active slide: centered title plus its currently visible
//! elements in document order. Elements inside the reveal animation
//! window are highlighted so a fresh build step stands out briefly.

use crate::domain::deck::Slide;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

/// Widget for the active slide
pub struct SlideView<'a> {
    slide: &'a Slide,
    /// Style for settled content
    body: Style,
    /// Style applied while an element's enter animation is in flight
    entering: Style,
}

impl<'a> SlideView<'a> {
    #[must_use]
    pub fn new(slide: &'a Slide) -> Self {
        Self {
            slide,
            body: Style::default().fg(Color::White),
            entering: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Style for settled content
    #[must_use]
    pub fn body_style(mut self, style: Style) -> Self {
        self.body = style;
        self
    }

    /// Style for entering content
    #[must_use]
    pub fn entering_style(mut self, style: Style) -> Self {
        self.entering = style;
        self
    }

    fn centered_x(area: Rect, text: &str) -> u16 {
        let width = text.width() as u16;
        area.x + area.width.saturating_sub(width) / 2
    }
}

impl Widget for SlideView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let mut y = area.y + 1;

        if let Some(title) = &self.slide.title {
            if y < area.bottom() {
                let style = Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD);
                buf.set_string(Self::centered_x(area, title), y, title, style);
            }
            y = y.saturating_add(2);
        }

        for element in self.slide.visible_elements() {
            if y >= area.bottom() {
                break;
            }
            let style = if element.entering {
                self.entering
            } else {
                self.body
            };
            buf.set_string(area.x + 2, y, &element.text, style);
            y += 1;
        }
    }
}
