//! Runs searches off the UI thread and reports back as `Action`s.
//!
//! At most one search is in flight. Starting a new one aborts the previous
//! task, and every completion carries the generation it was issued for so
//! the reducer can still drop anything that slipped through before abort.

use std::sync::{Arc, mpsc};

use log::{debug, info, warn};
use tokio::task::AbortHandle;

use super::source::CountrySource;
use crate::core::action::Action;

/// Tracks the abort handle of the current search task.
#[derive(Default)]
pub struct InFlightSearch {
    handle: Option<AbortHandle>,
    generation: Option<u64>,
}

impl InFlightSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort the previous search (if any) and start one for `term`.
    pub fn start(
        &mut self,
        source: Arc<dyn CountrySource>,
        term: String,
        generation: u64,
        tx: mpsc::Sender<Action>,
    ) {
        self.cancel();
        self.handle = Some(spawn_search(source, term, generation, tx));
        self.generation = Some(generation);
    }

    /// Abort the current search, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            debug!("Aborting search for generation {:?}", self.generation);
            handle.abort();
        }
        self.generation = None;
    }

    /// Generation of the search currently tracked, if any.
    pub fn generation(&self) -> Option<u64> {
        self.generation
    }
}

fn spawn_search(
    source: Arc<dyn CountrySource>,
    term: String,
    generation: u64,
    tx: mpsc::Sender<Action>,
) -> AbortHandle {
    info!(
        "Spawning search via {} for {:?} (generation {})",
        source.name(),
        term,
        generation
    );

    let handle = tokio::spawn(async move {
        let result = source.search_by_name(&term).await;
        if tx
            .send(Action::SearchCompleted { generation, result })
            .is_err()
        {
            warn!("Failed to send search result for generation {generation}: receiver dropped");
        }
    });

    handle.abort_handle()
}
