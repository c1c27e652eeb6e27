//! # SearchBox Component
//!
//! Single-line search field. The buffer is internal state; every edit emits
//! `SearchEvent::Changed` with the full new text so the parent can forward
//! it to `core::update` as the new search term.
//!
//! Editing is append-only: typing and paste add at the end, Backspace
//! removes the last char, Ctrl+U clears.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const PLACEHOLDER: &str = "Search for country...";

#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// The field now holds this text.
    Changed(String),
}

/// Search field.
///
/// # Props
///
/// - `style`: background override from the active palette
///
/// # State
///
/// - `buffer`: current text
pub struct SearchBox {
    buffer: String,
    pub style: Style,
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            style: Style::default(),
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Replace the whole buffer (used for `--query`).
    pub fn set_text(&mut self, text: &str) -> SearchEvent {
        self.buffer = single_line(text);
        SearchEvent::Changed(self.buffer.clone())
    }

    fn changed(&self) -> Option<SearchEvent> {
        Some(SearchEvent::Changed(self.buffer.clone()))
    }
}

/// Newlines and tabs from pastes become spaces; the field is one line.
fn single_line(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(ratatui::widgets::BorderType::Rounded)
            .style(self.style);

        let line = if self.buffer.is_empty() {
            Line::from(Span::styled(
                PLACEHOLDER,
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ))
        } else {
            Line::from(self.buffer.as_str())
        };

        let inner = block.inner(area);
        frame.render_widget(Paragraph::new(line).block(block), area);

        // Cursor sits after the last char, clamped to the visible width
        if inner.width > 0 && inner.height > 0 {
            let typed = self.buffer.chars().count() as u16;
            let x = inner.x + typed.min(inner.width.saturating_sub(1));
            frame.set_cursor_position((x, inner.y));
        }
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) if !c.is_control() => {
                self.buffer.push(*c);
                self.changed()
            }
            TuiEvent::Paste(text) => {
                let text = single_line(text);
                if text.is_empty() {
                    return None;
                }
                self.buffer.push_str(&text);
                self.changed()
            }
            TuiEvent::Backspace => self.buffer.pop().and_then(|_| self.changed()),
            TuiEvent::ClearInput => {
                if self.buffer.is_empty() {
                    None
                } else {
                    self.buffer.clear();
                    self.changed()
                }
            }
            _ => None,
        }
    }
}
