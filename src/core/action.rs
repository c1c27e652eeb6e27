//! # Actions
//!
//! Everything that can happen to the search becomes an `Action`.
//! User edits the search field? That's `Action::SearchChanged(term)`.
//! Service answers? That's `Action::SearchCompleted { generation, result }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state and returns an `Effect` for the event loop to carry out.
//! No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::core::state::App;
use crate::countries::{CountryRecord, FetchError};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The search field now holds this text.
    SearchChanged(String),
    /// A search issued for `generation` finished.
    SearchCompleted {
        generation: u64,
        result: Result<Vec<CountryRecord>, FetchError>,
    },
    Quit,
}

/// Side effect requested by `update`, executed by the event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Abort whatever is in flight and search for `term`.
    SpawnSearch { generation: u64, term: String },
    /// Abort whatever is in flight; nothing replaces it.
    CancelSearch,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::SearchChanged(term) => {
            app.generation += 1;
            app.search_term = term;

            if app.search_term.chars().count() < app.min_query_len {
                app.countries.clear();
                app.error = None;
                app.is_loading = false;
                return Effect::CancelSearch;
            }

            app.is_loading = true;
            app.error = None;
            Effect::SpawnSearch {
                generation: app.generation,
                term: app.search_term.clone(),
            }
        }

        Action::SearchCompleted { generation, result } => {
            if generation != app.generation {
                debug!(
                    "Dropping stale search result (generation {}, current {})",
                    generation, app.generation
                );
                return Effect::None;
            }

            match result {
                Ok(countries) => {
                    app.countries = countries;
                    app.error = None;
                }
                Err(e) => {
                    app.countries.clear();
                    app.error = Some(e.user_message().to_string());
                }
            }
            app.is_loading = false;
            Effect::None
        }

        Action::Quit => Effect::Quit,
    }
}
