// src/facets.rs
//! Facet Aggregator: per-value result counts for each filterable dimension.
//!
//! A dimension's counts are computed with every filter applied except that
//! dimension's own selection, so each bucket shows what toggling the value
//! would yield.

use std::collections::HashMap;

use serde::Serialize;

use crate::catalog::Resource;
use crate::error::Result;
use crate::search::{Dimension, FilterContext, SearchIndex};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetBucket {
    pub value: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    pub religions: Vec<FacetBucket>,
    pub languages: Vec<FacetBucket>,
    pub types: Vec<FacetBucket>,
    pub topics: Vec<FacetBucket>,
}

impl Facets {
    #[must_use]
    pub fn dimension(&self, dimension: Dimension) -> &[FacetBucket] {
        match dimension {
            Dimension::Religion => &self.religions,
            Dimension::Type => &self.types,
            Dimension::Language => &self.languages,
            Dimension::Topic => &self.topics,
        }
    }

    /// Count for one value, zero if the bucket was omitted.
    #[must_use]
    pub fn count(&self, dimension: Dimension, value: &str) -> usize {
        self.dimension(dimension)
            .iter()
            .find(|b| b.value == value)
            .map_or(0, |b| b.count)
    }
}

pub struct FacetAggregator<'a> {
    index: SearchIndex<'a>,
}

impl<'a> FacetAggregator<'a> {
    #[must_use]
    pub fn new(index: SearchIndex<'a>) -> Self {
        Self { index }
    }

    /// Computes all four facet lists for `filters`.
    ///
    /// # Errors
    /// Returns an error if the context is malformed.
    pub fn facets(&self, filters: &FilterContext) -> Result<Facets> {
        Ok(Facets {
            religions: self.dimension(filters, Dimension::Religion)?,
            languages: self.dimension(filters, Dimension::Language)?,
            types: self.dimension(filters, Dimension::Type)?,
            topics: self.dimension(filters, Dimension::Topic)?,
        })
    }

    /// Buckets for one dimension, ordered by count then value. Zero counts never appear.
    ///
    /// # Errors
    /// Returns an error if the context is malformed.
    pub fn dimension(&self, filters: &FilterContext, dimension: Dimension) -> Result<Vec<FacetBucket>> {
        let relaxed = filters.without(dimension);
        let candidates = self.index.candidates(&relaxed)?;
        let resources = self.index.catalog().resources();

        let mut counts: HashMap<String, usize> = HashMap::new();
        for candidate in candidates {
            let Some(resource) = resources.get(candidate.position) else {
                continue;
            };
            for value in values_of(resource, dimension) {
                *counts.entry(value).or_default() += 1;
            }
        }

        let mut buckets: Vec<FacetBucket> = counts
            .into_iter()
            .filter(|(_, count)| *count > 0)
            .map(|(value, count)| FacetBucket { value, count })
            .collect();
        buckets.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));

        tracing::debug!(%dimension, buckets = buckets.len(), "facet counts");
        Ok(buckets)
    }
}

fn values_of(resource: &Resource, dimension: Dimension) -> Vec<String> {
    let single = |s: &str| {
        if s.is_empty() {
            Vec::new()
        } else {
            vec![s.to_string()]
        }
    };
    match dimension {
        Dimension::Religion => single(&resource.religion),
        Dimension::Language => single(&resource.language),
        Dimension::Type => vec![resource.source_type.label().to_string()],
        Dimension::Topic => resource.topics.iter().cloned().collect(),
    }
}
