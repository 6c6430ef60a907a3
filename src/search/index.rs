// src/search/index.rs
//! Candidate generation, ranking and pagination over a catalog snapshot.

use std::cmp::Ordering;

use rayon::prelude::*;

use super::filter::FilterContext;
use super::matcher::{matches_filters, QueryMatcher};
use super::types::{SearchPage, SearchResult};
use crate::catalog::Catalog;
use crate::error::Result;

/// A resource that passed every filter, identified by catalog position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub position: usize,
    pub score: f64,
}

/// Stateless search over a borrowed catalog. Every call is independent.
#[derive(Clone, Copy)]
pub struct SearchIndex<'a> {
    catalog: &'a Catalog,
}

impl<'a> SearchIndex<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Every resource matching the context's filters and query, in catalog order.
    ///
    /// # Errors
    /// Returns an error if the context is malformed.
    pub fn candidates(&self, filters: &FilterContext) -> Result<Vec<Candidate>> {
        filters.validate()?;
        let matcher = QueryMatcher::new(&filters.query)?;

        Ok(self
            .catalog
            .resources()
            .par_iter()
            .enumerate()
            .filter_map(|(position, resource)| {
                if !matches_filters(resource, filters) {
                    return None;
                }
                matcher
                    .score(resource)
                    .map(|score| Candidate { position, score })
            })
            .collect())
    }

    /// Size of the candidate set under `filters`.
    ///
    /// # Errors
    /// Returns an error if the context is malformed.
    pub fn count(&self, filters: &FilterContext) -> Result<usize> {
        self.candidates(filters).map(|c| c.len())
    }

    /// The complete ranked result set, before pagination.
    ///
    /// # Errors
    /// Returns an error if the context is malformed.
    pub fn ranked(&self, filters: &FilterContext) -> Result<Vec<SearchResult>> {
        let mut candidates = self.candidates(filters)?;
        candidates.sort_by(|a, b| self.compare(a, b));

        Ok(candidates
            .into_iter()
            .filter_map(|c| {
                self.catalog.resources().get(c.position).map(|r| SearchResult {
                    resource: r.clone(),
                    score: c.score,
                })
            })
            .collect())
    }

    /// Ranks, then slices out the 1-based `page`.
    ///
    /// `query` replaces the context's own query text. Page 0 is treated as
    /// page 1 and a zero page size as 1; pages past the end are empty.
    ///
    /// # Errors
    /// Returns an error if the context is malformed.
    pub fn search(
        &self,
        query: &str,
        filters: &FilterContext,
        page: usize,
        page_size: usize,
    ) -> Result<SearchPage> {
        let mut context = filters.clone();
        context.set_query(query);

        let page = page.max(1);
        let page_size = page_size.max(1);
        let ranked = self.ranked(&context)?;
        let total = ranked.len();

        let start = (page - 1).saturating_mul(page_size);
        let results: Vec<SearchResult> = ranked.into_iter().skip(start).take(page_size).collect();
        let has_more = page.saturating_mul(page_size) < total;

        tracing::debug!(query, total, page, returned = results.len(), "search");

        Ok(SearchPage {
            results,
            total,
            has_more,
            page,
            page_size,
        })
    }

    /// Score descending, verified first, then catalog order.
    fn compare(&self, a: &Candidate, b: &Candidate) -> Ordering {
        let verified = |c: &Candidate| {
            self.catalog
                .resources()
                .get(c.position)
                .is_some_and(|r| r.verified)
        };
        b.score
            .total_cmp(&a.score)
            .then_with(|| verified(b).cmp(&verified(a)))
            .then_with(|| a.position.cmp(&b.position))
    }
}
