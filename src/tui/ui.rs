use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::country_list::LayoutCache;
use crate::tui::components::country_row::FACTS_PROMPT_LINE;
use crate::tui::components::{
    CountryList, ErrorMessage, Loader, ModeToggle, NAV_HEIGHT, NavBar, NavLayout,
};

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

const KEY_HINTS: &str = "↑/↓ select · Enter facts · Ctrl+T theme · Ctrl+U clear · Esc quit";

/// Top-level screen regions, shared by drawing and hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub nav: Rect,
    /// One line for the error message, blank otherwise
    pub status: Rect,
    pub main: Rect,
    pub footer: Rect,
}

impl ScreenLayout {
    pub fn split(area: Rect) -> Self {
        use Constraint::{Length, Min};
        let [nav, status, main, footer] =
            Layout::vertical([Length(NAV_HEIGHT), Length(1), Min(0), Length(1)]).areas(area);
        Self {
            nav,
            status,
            main,
            footer,
        }
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let palette = tui.appearance.palette();
    let screen = ScreenLayout::split(frame.area());
    let slots = NavLayout::split(screen.nav);

    frame.render_widget(Block::new().style(palette.page), frame.area());

    // Nav bar, then the components that sit in its slots
    NavBar::new(app.result_count_text(), palette.nav_bar).render(frame, screen.nav);
    tui.search_box.style = palette.search;
    tui.search_box.render(frame, slots.search);
    ModeToggle::new(tui.appearance, palette.indicator).render(frame, slots.toggle);

    if let Some(message) = &app.error {
        ErrorMessage::new(message).render(frame, screen.status);
    }

    if app.shows_loader() {
        Loader.render(frame, screen.main);
    } else {
        CountryList::new(&mut tui.country_list, &app.countries, &tui.locale)
            .render(frame, screen.main);
        // The scroll view paints its own cells; put the page colours back
        restore_page_style(frame.buffer_mut(), screen.main, palette.page);
    }

    let hints = Paragraph::new(Line::styled(KEY_HINTS, Style::default().fg(Color::DarkGray)));
    frame.render_widget(hints, screen.footer);
}

/// Apply the page colours to cells that carry no colour of their own.
fn restore_page_style(buf: &mut Buffer, area: Rect, page: Style) {
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let Some(cell) = buf.cell_mut((x, y)) else {
                continue;
            };
            if let Some(fg) = page.fg
                && cell.fg == Color::Reset
            {
                cell.set_fg(fg);
            }
            if let Some(bg) = page.bg
                && cell.bg == Color::Reset
            {
                cell.set_bg(bg);
            }
        }
    }
}

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// The appearance indicator in the nav bar
    Toggle,
    /// The facts prompt line of row `n`
    FactsPrompt(usize),
    /// Anywhere else inside row `n`
    Row(usize),
}

/// Hit test: map a screen position to the toggle or a result row.
pub fn hit_test(
    column: u16,
    row: u16,
    frame_area: Rect,
    scroll_offset_y: u16,
    layout: &LayoutCache,
) -> Option<Hit> {
    let screen = ScreenLayout::split(frame_area);
    let position = Position::new(column, row);

    if NavLayout::split(screen.nav).toggle.contains(position) {
        return Some(Hit::Toggle);
    }
    if !screen.main.contains(position) {
        return None;
    }

    // Convert screen Y to content Y (accounting for scroll)
    let content_y = (row - screen.main.y).saturating_add(scroll_offset_y);
    let (index, line) = layout.row_at(content_y)?;
    if line == FACTS_PROMPT_LINE {
        Some(Hit::FactsPrompt(index))
    } else {
        Some(Hit::Row(index))
    }
}
