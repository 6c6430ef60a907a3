// src/recommend/session.rs
use super::history::ViewHistory;
use super::scoring::Recommender;
use crate::catalog::Catalog;
use crate::config::RecommendConfig;
use crate::error::{Result, SeekerError};
use crate::search::SearchResult;

/// One user's session: owns the view history for its whole lifetime.
///
/// Selecting a resource records it before recommending, and both happen
/// under the same `&mut` borrow, so no reader can observe a half-applied
/// append.
#[derive(Debug, Clone, Default)]
pub struct Session {
    history: ViewHistory,
    config: RecommendConfig,
}

impl Session {
    #[must_use]
    pub fn new(config: RecommendConfig) -> Self {
        Self {
            history: ViewHistory::new(),
            config,
        }
    }

    /// Starts from resources the user already opened elsewhere.
    #[must_use]
    pub fn with_history(mut self, history: ViewHistory) -> Self {
        self.history = history;
        self
    }

    #[must_use]
    pub fn history(&self) -> &ViewHistory {
        &self.history
    }

    #[must_use]
    pub fn config(&self) -> &RecommendConfig {
        &self.config
    }

    /// Records `id` as opened, then recommends with the configured limit.
    ///
    /// # Errors
    /// Returns `UnknownResource` if `id` is not in the catalog; the history
    /// is left untouched in that case.
    pub fn select(&mut self, catalog: &Catalog, id: &str) -> Result<Vec<SearchResult>> {
        let limit = self.config.limit;
        self.select_with_limit(catalog, id, limit)
    }

    /// As [`Session::select`] with an explicit limit.
    ///
    /// # Errors
    /// Returns `UnknownResource` if `id` is not in the catalog.
    pub fn select_with_limit(
        &mut self,
        catalog: &Catalog,
        id: &str,
        limit: usize,
    ) -> Result<Vec<SearchResult>> {
        let focal = catalog
            .get(id)
            .ok_or_else(|| SeekerError::UnknownResource(id.to_string()))?
            .clone();
        self.history.record(id);
        Ok(Recommender::new(&self.config).recommend(&focal, catalog, &self.history, limit))
    }

    /// Ends the session, discarding its history.
    pub fn reset(&mut self) {
        self.history = ViewHistory::new();
    }
}
