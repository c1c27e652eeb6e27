//! # NavBar Component
//!
//! Top bar: logo, search field slot, result counter, appearance toggle slot.
//!
//! ```text
//! ┌──────────┬───────────────────────────┬──────────────────┬────────┐
//! │ 🌏 Facts │ ╭ Search for country... ╮ │ Found: 3 Results │ (  ●)  │
//! └──────────┴───────────────────────────┴──────────────────┴────────┘
//! ```
//!
//! NavBar itself only paints the background, logo and counter. The search
//! field and toggle are separate components placed into the slots returned
//! by [`NavLayout::split`], which hit testing also uses.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::Component;

pub const LOGO: &str = "🌏 Facts";
/// The nav bar is one bordered search field tall.
pub const NAV_HEIGHT: u16 = 3;

const LOGO_WIDTH: u16 = 11;
const COUNT_WIDTH: u16 = 20;
const TOGGLE_WIDTH: u16 = 9;

/// Slots inside the nav bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLayout {
    pub logo: Rect,
    pub search: Rect,
    pub count: Rect,
    pub toggle: Rect,
}

impl NavLayout {
    pub fn split(area: Rect) -> Self {
        let [logo, search, count, toggle] = Layout::horizontal([
            Constraint::Length(LOGO_WIDTH),
            Constraint::Min(10),
            Constraint::Length(COUNT_WIDTH),
            Constraint::Length(TOGGLE_WIDTH),
        ])
        .areas(area);
        Self {
            logo,
            search,
            count,
            toggle,
        }
    }
}

/// Stateless top bar.
pub struct NavBar {
    /// "Found: N Results"
    pub result_count_text: String,
    /// Background override from the active palette
    pub style: Style,
}

impl NavBar {
    pub fn new(result_count_text: String, style: Style) -> Self {
        Self {
            result_count_text,
            style,
        }
    }
}

/// Vertically centre a one-line widget in a taller slot.
fn middle_row(area: Rect) -> Rect {
    let [_, row, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);
    row
}

impl Component for NavBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Block::new().style(self.style), area);

        let slots = NavLayout::split(area);

        let logo = Paragraph::new(LOGO)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(logo, middle_row(slots.logo));

        let count = Paragraph::new(self.result_count_text.as_str()).alignment(Alignment::Center);
        frame.render_widget(count, middle_row(slots.count));
    }
}
