//! # CountryList Component
//!
//! Scrollable list of result rows.
//!
//! ## Responsibilities
//!
//! - Render one `CountryRow` per record, in service order
//! - Own each row's expansion flag, keyed by `cca3`
//! - Keep selection and scroll position in range as results change
//! - Expose row geometry for mouse hit testing
//!
//! ## Architecture
//!
//! `CountryList` is a transient component (created each frame) that wraps
//! `&'a mut CountryListState` (persistent state) and the result slice (props).
//!
//! Expansion follows the row, not the position: when a new result set
//! arrives, codes that are still present stay expanded and codes that
//! vanished are forgotten, so a country that comes back later starts
//! collapsed.

use std::collections::HashSet;

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::facts::{CountryFacts, FactsLocale};
use crate::countries::CountryRecord;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::country_row::CountryRow;
use crate::tui::event::TuiEvent;

/// Layout, selection and expansion state for the result list.
/// Must be persisted in the parent TuiState.
pub struct CountryListState {
    /// Scroll offset and view state
    pub scroll_state: ScrollViewState,
    /// Cached row heights from the last render
    pub layout: LayoutCache,
    /// Row under keyboard focus
    pub selected_index: Option<usize>,
    /// `cca3` codes of expanded rows
    pub expanded: HashSet<String>,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
    /// Codes of the result set the state was last synced with, in order
    known_codes: Vec<String>,
}

impl Default for CountryListState {
    fn default() -> Self {
        Self::new()
    }
}

impl CountryListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            layout: LayoutCache::default(),
            selected_index: None,
            expanded: HashSet::new(),
            viewport_height: 0,
            known_codes: Vec::new(),
        }
    }

    /// Reconcile with a (possibly new) result set.
    ///
    /// A no-op when the codes are unchanged. Otherwise expansion is kept
    /// only for codes still present, selection is cleared and the view
    /// scrolls back to the top.
    pub fn sync_results(&mut self, countries: &[CountryRecord]) {
        let unchanged = self.known_codes.len() == countries.len()
            && self
                .known_codes
                .iter()
                .zip(countries)
                .all(|(known, c)| *known == c.cca3);
        if unchanged {
            return;
        }

        let present: HashSet<&str> = countries.iter().map(|c| c.cca3.as_str()).collect();
        self.expanded.retain(|code| present.contains(code.as_str()));
        self.known_codes = countries.iter().map(|c| c.cca3.clone()).collect();
        self.selected_index = None;
        self.scroll_state.scroll_to_top();
    }

    pub fn is_expanded(&self, code: &str) -> bool {
        self.expanded.contains(code)
    }

    /// Flip one row's expansion. No other row is touched.
    pub fn toggle(&mut self, code: &str) {
        if !self.expanded.remove(code) {
            self.expanded.insert(code.to_string());
        }
    }

    /// Toggle the selected row, if any.
    pub fn toggle_selected(&mut self, countries: &[CountryRecord]) {
        if let Some(record) = self.selected_index.and_then(|i| countries.get(i)) {
            let code = record.cca3.clone();
            self.toggle(&code);
        }
    }

    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            self.selected_index = None;
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(i) => (i + 1).min(len - 1),
            None => 0,
        });
        self.scroll_to_selected();
    }

    pub fn select_prev(&mut self, len: usize) {
        if len == 0 {
            self.selected_index = None;
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(i) => i.saturating_sub(1),
            None => len - 1,
        });
        self.scroll_to_selected();
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.layout.total_height().saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Scroll the viewport so the selected row is fully visible.
    /// If the row is taller than the viewport, align its top edge.
    pub fn scroll_to_selected(&mut self) {
        let Some(idx) = self.selected_index else {
            return;
        };
        let Some((item_top, item_bottom)) = self.layout.row_span(idx) else {
            return;
        };
        let offset_y = self.scroll_state.offset().y;

        if item_top < offset_y {
            self.scroll_state.set_offset(Position { x: 0, y: item_top });
        } else if item_bottom > offset_y + self.viewport_height {
            let new_y = item_bottom
                .saturating_sub(self.viewport_height)
                .min(item_top);
            self.scroll_state.set_offset(Position { x: 0, y: new_y });
        }
    }
}

/// Scrollable result list.
/// Created fresh each frame with references to state and data.
pub struct CountryList<'a> {
    pub state: &'a mut CountryListState,
    pub countries: &'a [CountryRecord],
    pub locale: &'a FactsLocale,
}

impl<'a> CountryList<'a> {
    pub fn new(
        state: &'a mut CountryListState,
        countries: &'a [CountryRecord],
        locale: &'a FactsLocale,
    ) -> Self {
        Self {
            state,
            countries,
            locale,
        }
    }
}

impl<'a> Component for CountryList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.sync_results(self.countries);

        let content_width = area.width.saturating_sub(1); // -1 for scrollbar safe area

        // Facts are only derived for expanded rows
        let facts: Vec<Option<CountryFacts>> = self
            .countries
            .iter()
            .map(|c| {
                self.state
                    .is_expanded(&c.cca3)
                    .then(|| CountryFacts::from_record(c, self.locale))
            })
            .collect();

        // 1. Measure rows
        self.state.layout.heights = facts
            .iter()
            .map(|f| CountryRow::calculate_height(f.as_ref(), content_width))
            .collect();
        self.state.layout.rebuild_prefix_heights();
        let total_height = self.state.layout.total_height();

        // 2. Clamp scroll offset to prevent overscrolling past content
        self.state.viewport_height = area.height;
        self.state.clamp_scroll();

        // 3. Render rows into a ScrollView
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for (i, (record, facts)) in self.countries.iter().zip(&facts).enumerate() {
            let height = self.state.layout.heights[i];
            let row_rect = Rect::new(0, y_offset, content_width, height);
            let is_selected = self.state.selected_index == Some(i);
            scroll_view.render_widget(CountryRow::new(record, facts.as_ref(), is_selected), row_rect);
            y_offset = y_offset.saturating_add(height);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

/// Scroll events are handled on the state: the list component is rebuilt
/// every frame and can't hold on to anything.
impl EventHandler for CountryListState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => return None,
        }
        self.clamp_scroll();
        None
    }
}

/// Row heights from the last render.
#[derive(Debug, Default)]
pub struct LayoutCache {
    pub heights: Vec<u16>,
    /// `prefix_heights[i]` is the content y just below row `i`
    pub prefix_heights: Vec<u16>,
}

impl LayoutCache {
    pub fn rebuild_prefix_heights(&mut self) {
        let mut acc: u16 = 0;
        self.prefix_heights = self
            .heights
            .iter()
            .map(|h| {
                acc = acc.saturating_add(*h);
                acc
            })
            .collect();
    }

    pub fn total_height(&self) -> u16 {
        self.prefix_heights.last().copied().unwrap_or(0)
    }

    /// Content-space `[top, bottom)` of row `idx`.
    pub fn row_span(&self, idx: usize) -> Option<(u16, u16)> {
        let bottom = *self.prefix_heights.get(idx)?;
        let top = if idx == 0 { 0 } else { self.prefix_heights[idx - 1] };
        Some((top, bottom))
    }

    /// Which row contains content y, and the line within that row.
    pub fn row_at(&self, content_y: u16) -> Option<(usize, u16)> {
        let idx = self.prefix_heights.iter().position(|&bottom| content_y < bottom)?;
        let (top, _) = self.row_span(idx)?;
        Some((idx, content_y - top))
    }
}
