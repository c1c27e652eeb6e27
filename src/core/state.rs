//! # Application State
//!
//! Core search state for globefacts. Domain logic only, no TUI types.
//! Presentation state (row expansion, appearance, scroll) lives in `tui`.
//!
//! ```text
//! App
//! ├── search_term: String           // what the user typed
//! ├── countries: Vec<CountryRecord> // current result set
//! ├── is_loading: bool              // search in flight
//! ├── error: Option<String>         // user-facing failure text
//! ├── generation: u64               // bumped on every term change
//! └── min_query_len: usize          // shorter terms never hit the network
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::countries::CountryRecord;

/// Terms shorter than this (in chars) clear the results instead of searching.
pub const MIN_QUERY_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct App {
    pub search_term: String,
    pub countries: Vec<CountryRecord>,
    pub is_loading: bool,
    pub error: Option<String>,
    /// Generation of the current search term. Completions tagged with an
    /// older generation are stale.
    pub generation: u64,
    pub min_query_len: usize,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            search_term: String::new(),
            countries: Vec::new(),
            is_loading: false,
            error: None,
            generation: 0,
            min_query_len: MIN_QUERY_LEN,
        }
    }

    /// Text for the result counter in the nav bar.
    pub fn result_count_text(&self) -> String {
        format!("Found: {} Results", self.countries.len())
    }

    /// The loader replaces the list only while a search is running and no
    /// error is showing.
    pub fn shows_loader(&self) -> bool {
        self.is_loading && self.error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_country;

    #[test]
    fn test_app_new_defaults() {
        let app = App::new();
        assert!(app.search_term.is_empty());
        assert!(app.countries.is_empty());
        assert!(!app.is_loading);
        assert!(app.error.is_none());
        assert_eq!(app.generation, 0);
        assert_eq!(app.min_query_len, 3);
    }

    #[test]
    fn result_count_text_reads_found_n_results() {
        let mut app = App::new();
        assert_eq!(app.result_count_text(), "Found: 0 Results");
        app.countries.push(sample_country("DEU", "Germany"));
        assert_eq!(app.result_count_text(), "Found: 1 Results");
    }

    #[test]
    fn loader_hidden_when_error_present() {
        let mut app = App::new();
        app.is_loading = true;
        assert!(app.shows_loader());
        app.error = Some("boom".into());
        assert!(!app.shows_loader());
    }
}
