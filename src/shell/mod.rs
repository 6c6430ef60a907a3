// src/shell/mod.rs
//! View Shell: transient UI state over one ranked result set.
//!
//! Holds the selected view, selected resource and comparison slots, and
//! forwards selections to the session's recommender. Ranking and layout
//! live upstream.

pub mod comparison;
pub mod timeline;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::Serialize;

use crate::catalog::{Catalog, Resource};
use crate::config::Config;
use crate::error::Result;
use crate::events::{EventKind, EventLogger};
use crate::graph::SelectionEvent;
use crate::recommend::{Session, ViewHistory};
use crate::search::{FilterContext, SearchIndex, SearchPage, SearchResult};

pub use comparison::{ComparisonSlots, MAX_COMPARED};
pub use timeline::{chronological, TimelineEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    Graph,
    Timeline,
    Comparison,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Grid => "grid",
            Self::Graph => "graph",
            Self::Timeline => "timeline",
            Self::Comparison => "comparison",
        };
        f.write_str(label)
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid" => Ok(Self::Grid),
            "graph" => Ok(Self::Graph),
            "timeline" => Ok(Self::Timeline),
            "comparison" | "compare" => Ok(Self::Comparison),
            other => Err(format!("unknown view '{other}'")),
        }
    }
}

pub struct ViewShell {
    mode: ViewMode,
    filters: FilterContext,
    page: usize,
    page_size: usize,
    selected: Option<String>,
    recommendations: Vec<SearchResult>,
    comparison: ComparisonSlots,
    session: Session,
    journal: Option<EventLogger>,
}

impl ViewShell {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            mode: ViewMode::default(),
            filters: FilterContext::new(),
            page: 1,
            page_size: config.search.page_size,
            selected: None,
            recommendations: Vec::new(),
            comparison: ComparisonSlots::new(),
            session: Session::new(config.recommend.clone()),
            journal: None,
        }
    }

    /// Attaches a session journal and records the session start.
    #[must_use]
    pub fn with_journal(mut self, journal: EventLogger) -> Self {
        journal.log(EventKind::SessionStarted);
        self.journal = Some(journal);
        self
    }

    #[must_use]
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn set_view(&mut self, mode: ViewMode) {
        if self.mode != mode {
            self.mode = mode;
            self.emit(EventKind::ViewChanged {
                view: mode.to_string(),
            });
        }
    }

    #[must_use]
    pub fn filters(&self) -> &FilterContext {
        &self.filters
    }

    /// Applies a user filter action and returns to the first page.
    pub fn update_filters(&mut self, action: impl FnOnce(&mut FilterContext)) {
        action(&mut self.filters);
        self.page = 1;
    }

    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// The current grid page.
    ///
    /// # Errors
    /// Returns an error if the filter context is malformed.
    pub fn results(&self, catalog: &Catalog) -> Result<SearchPage> {
        let index = SearchIndex::new(catalog);
        let page = index.search(&self.filters.query, &self.filters, self.page, self.page_size)?;
        self.emit(EventKind::SearchPerformed {
            query: self.filters.query.clone(),
            total: page.total,
        });
        Ok(page)
    }

    /// The full ranked set in chronological order.
    ///
    /// # Errors
    /// Returns an error if the filter context is malformed.
    pub fn timeline(&self, catalog: &Catalog) -> Result<Vec<TimelineEntry>> {
        let ranked = SearchIndex::new(catalog).ranked(&self.filters)?;
        Ok(chronological(ranked))
    }

    /// Handles a selection from any view: records it in the session
    /// history and refreshes recommendations.
    ///
    /// # Errors
    /// Returns `UnknownResource` if the id is not in the catalog.
    pub fn select(&mut self, catalog: &Catalog, id: &str) -> Result<&[SearchResult]> {
        let recommendations = self.session.select(catalog, id)?;
        self.selected = Some(id.to_string());
        self.emit(EventKind::ResourceSelected { id: id.to_string() });
        self.emit(EventKind::RecommendationsServed {
            focal: id.to_string(),
            ids: recommendations.iter().map(|r| r.id().to_string()).collect(),
        });
        self.recommendations = recommendations;
        Ok(&self.recommendations)
    }

    /// Graph click adapter for [`ViewShell::select`].
    ///
    /// # Errors
    /// Returns `UnknownResource` for nodes without a catalog record.
    pub fn on_graph_selection(
        &mut self,
        catalog: &Catalog,
        event: &SelectionEvent,
    ) -> Result<&[SearchResult]> {
        self.select(catalog, &event.resource_id)
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn recommendations(&self) -> &[SearchResult] {
        &self.recommendations
    }

    #[must_use]
    pub fn history(&self) -> &ViewHistory {
        self.session.history()
    }

    /// Adds to the comparison; a full or duplicate add changes nothing.
    pub fn add_to_comparison(&mut self, id: &str) -> bool {
        let added = self.comparison.add(id);
        if added {
            self.emit(EventKind::ComparisonChanged {
                slots: self.comparison.ids().to_vec(),
            });
        } else {
            self.emit(EventKind::ComparisonRejected { id: id.to_string() });
        }
        added
    }

    pub fn remove_from_comparison(&mut self, id: &str) -> bool {
        let removed = self.comparison.remove(id);
        if removed {
            self.emit(EventKind::ComparisonChanged {
                slots: self.comparison.ids().to_vec(),
            });
        }
        removed
    }

    #[must_use]
    pub fn comparison(&self) -> &ComparisonSlots {
        &self.comparison
    }

    #[must_use]
    pub fn compared(&self, catalog: &Catalog) -> Vec<Arc<Resource>> {
        self.comparison.resolve(catalog)
    }

    /// Discards all session state; the next selection starts a fresh history.
    pub fn end_session(&mut self) {
        self.emit(EventKind::SessionEnded {
            viewed: self.session.history().len(),
        });
        self.session.reset();
        self.selected = None;
        self.recommendations.clear();
        self.comparison.clear();
        self.filters.clear();
        self.page = 1;
    }

    fn emit(&self, kind: EventKind) {
        if let Some(journal) = &self.journal {
            journal.log(kind);
        }
    }
}
