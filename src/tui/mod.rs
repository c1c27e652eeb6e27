//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! 1. Draw if something changed.
//! 2. Poll crossterm with a timeout, then drain every pending event.
//! 3. Drain `Action`s sent back by search tasks and feed them to `update`.
//!
//! Search tasks never touch state; they only send
//! `Action::SearchCompleted` over the channel.
//!
//! ## Redraw Strategy
//!
//! While a search is running the loop wakes every ~100ms so completions are
//! picked up promptly. Idle, it sleeps up to 500ms and only redraws on
//! events or terminal resize.

mod component;
mod components;
mod event;
mod theme;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use crossterm::style::ResetColor;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::facts::FactsLocale;
use crate::core::state::App;
use crate::countries::{CountrySource, InFlightSearch, RestCountriesClient};
use crate::tui::component::EventHandler;
use crate::tui::components::{CountryListState, SearchBox, SearchEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::theme::Appearance;
use crate::tui::ui::Hit;

/// TUI-specific presentation state (not part of core search logic)
pub struct TuiState {
    // Persistent component states
    pub search_box: SearchBox,
    pub country_list: CountryListState,
    /// Light/dark flag, starts light every run
    pub appearance: Appearance,
    pub locale: FactsLocale,
}

impl TuiState {
    pub fn new(locale: FactsLocale) -> Self {
        Self {
            search_box: SearchBox::new(),
            country_list: CountryListState::new(),
            appearance: Appearance::default(),
            locale,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        // ResetColor so quitting in dark mode leaves no overrides behind
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            ResetColor
        );
    }
}

/// Where the loop sends its side effects.
struct Runtime {
    source: Arc<dyn CountrySource>,
    inflight: InFlightSearch,
    tx: mpsc::Sender<Action>,
}

impl Runtime {
    /// Carry out an effect. Returns true when the loop should exit.
    fn apply(&mut self, effect: Effect) -> bool {
        match effect {
            Effect::None => false,
            Effect::SpawnSearch { generation, term } => {
                self.inflight
                    .start(self.source.clone(), term, generation, self.tx.clone());
                false
            }
            Effect::CancelSearch => {
                self.inflight.cancel();
                false
            }
            Effect::Quit => {
                self.inflight.cancel();
                true
            }
        }
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source: Arc<dyn CountrySource> = Arc::new(RestCountriesClient::new(
        config.base_url.clone(),
        config.timeout,
    ));
    let mut app = App::new();
    let mut tui = TuiState::new(config.locale.clone());

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let mut runtime = Runtime {
        source,
        inflight: InFlightSearch::new(),
        tx,
    };

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    if let Some(query) = &config.initial_query {
        info!("Running startup query {:?}", query);
        let SearchEvent::Changed(term) = tui.search_box.set_text(query);
        runtime.apply(update(&mut app, Action::SearchChanged(term)));
    }

    let mut needs_redraw = true; // Force first frame

    'main: loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let timeout = if app.is_loading {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => {}
                TuiEvent::Quit | TuiEvent::ForceQuit => {
                    if runtime.apply(update(&mut app, Action::Quit)) {
                        break 'main;
                    }
                }
                TuiEvent::ToggleAppearance => {
                    tui.appearance = tui.appearance.toggled();
                    debug!("Appearance now {:?}", tui.appearance);
                }
                TuiEvent::SelectPrev => tui.country_list.select_prev(app.countries.len()),
                TuiEvent::SelectNext => tui.country_list.select_next(app.countries.len()),
                TuiEvent::ToggleFacts => tui.country_list.toggle_selected(&app.countries),
                TuiEvent::ScrollUp
                | TuiEvent::ScrollDown
                | TuiEvent::ScrollPageUp
                | TuiEvent::ScrollPageDown => {
                    tui.country_list.handle_event(&event);
                }
                TuiEvent::MouseClick(column, row) => {
                    let frame_area = terminal.get_frame().area();
                    let scroll_offset = tui.country_list.scroll_state.offset().y;
                    let hit = ui::hit_test(
                        column,
                        row,
                        frame_area,
                        scroll_offset,
                        &tui.country_list.layout,
                    );
                    match hit {
                        Some(Hit::Toggle) => tui.appearance = tui.appearance.toggled(),
                        // Row geometry is stale while the loader covers the list
                        Some(Hit::FactsPrompt(index)) if !app.shows_loader() => {
                            tui.country_list.selected_index = Some(index);
                            tui.country_list.toggle_selected(&app.countries);
                        }
                        Some(Hit::Row(index)) if !app.shows_loader() => {
                            tui.country_list.selected_index = Some(index);
                        }
                        _ => {}
                    }
                }
                // Everything else is editing the search field
                _ => {
                    if let Some(SearchEvent::Changed(term)) = tui.search_box.handle_event(&event)
                    {
                        runtime.apply(update(&mut app, Action::SearchChanged(term)));
                    }
                }
            }
        }

        // Handle search completions
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if runtime.apply(update(&mut app, action)) {
                break 'main;
            }
            tui.country_list.sync_results(&app.countries);
        }
    }

    ratatui::restore();
    Ok(())
}
