// Data fetching: spawns one task per trending/search request. Each request
// carries a fetch id; only the most recently issued one may touch the grid.

use std::sync::Arc;

use crate::action::Action;
use crate::app::App;

/// What the grid is currently showing (or about to show).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Trending,
    Search(String),
}

impl App {
    pub fn fetch_trending(&mut self) {
        self.spawn_fetch(Request::Trending);
    }

    /// An empty or absent query means "show trending".
    pub fn search(&mut self, query: Option<&str>) {
        match query {
            None | Some("") => self.fetch_trending(),
            Some(q) => self.spawn_fetch(Request::Search(q.to_string())),
        }
    }

    pub(super) fn retry(&mut self) {
        let request = self.last_request.clone().unwrap_or(Request::Trending);
        self.spawn_fetch(request);
    }

    /// Start a fetch, superseding whatever is still in flight.
    fn spawn_fetch(&mut self, request: Request) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
        self.fetch_id += 1;
        let fetch_id = self.fetch_id;
        self.video_grid.set_loading(true);
        self.last_request = Some(request.clone());
        tracing::debug!(fetch_id, ?request, "fetch started");

        let tx = self.action_tx.clone();
        let source = Arc::clone(&self.source);
        self.in_flight = Some(tokio::spawn(async move {
            let result = match &request {
                Request::Trending => source.trending().await,
                Request::Search(q) => source.search(q).await,
            };
            match result {
                Ok(items) => tx.send(Action::VideosLoaded { fetch_id, items }).ok(),
                Err(e) => {
                    tracing::error!(fetch_id, ?request, error = %e, "video fetch failed");
                    tx.send(Action::FetchFailed { fetch_id }).ok()
                }
            };
        }));
    }

    /// Apply a finished fetch. Returns false when the result was stale.
    pub(super) fn finish_fetch(&mut self, fetch_id: u64) -> bool {
        if fetch_id != self.fetch_id {
            tracing::debug!(fetch_id, current = self.fetch_id, "dropping superseded fetch result");
            return false;
        }
        self.in_flight = None;
        self.video_grid.set_loading(false);
        true
    }
}
