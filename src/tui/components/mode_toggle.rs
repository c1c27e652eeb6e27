//! # ModeToggle Component
//!
//! The light/dark switch. The knob sits left when light and moves right,
//! in the accent colour, when dark.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::theme::Appearance;

const LIGHT_GLYPH: &str = "(●  )";
const DARK_GLYPH: &str = "(  ●)";

pub struct ModeToggle {
    pub appearance: Appearance,
    /// Accent override from the active palette
    pub style: Style,
}

impl ModeToggle {
    pub fn new(appearance: Appearance, style: Style) -> Self {
        Self { appearance, style }
    }

    pub fn glyph(&self) -> &'static str {
        if self.appearance.is_dark() {
            DARK_GLYPH
        } else {
            LIGHT_GLYPH
        }
    }
}

impl Component for ModeToggle {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let row = Rect {
            y: area.y + area.height / 2,
            height: area.height.min(1),
            ..area
        };
        let toggle = Paragraph::new(self.glyph())
            .style(self.style)
            .alignment(Alignment::Center);
        frame.render_widget(toggle, row);
    }
}
