// src/search/types.rs
use std::sync::Arc;

use serde::Serialize;

use crate::catalog::Resource;

/// A resource paired with its computed relevance. Never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub resource: Arc<Resource>,
    pub score: f64,
}

impl SearchResult {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.resource.id
    }
}

/// One page of a fully ranked result set.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    pub results: Vec<SearchResult>,
    pub total: usize,
    pub has_more: bool,
    pub page: usize,
    pub page_size: usize,
}

impl SearchPage {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(self.page_size)
    }
}
