//! Loader and error line shown above the result list.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub const LOADING_TEXT: &str = "Loading...";
pub const ERROR_PREFIX: &str = "⛔️";

/// Shown while a search is in flight and no error is showing.
pub struct Loader;

impl Component for Loader {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::styled(
            LOADING_TEXT,
            Style::default().add_modifier(Modifier::ITALIC),
        );
        frame.render_widget(Paragraph::new(line), area);
    }
}

/// One-line error banner.
pub struct ErrorMessage<'a> {
    pub message: &'a str,
}

impl<'a> ErrorMessage<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl<'a> Component for ErrorMessage<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::styled(
            format!("{ERROR_PREFIX} {}", self.message),
            Style::default().fg(Color::Red),
        );
        frame.render_widget(Paragraph::new(line), area);
    }
}
