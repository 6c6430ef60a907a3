// src/search/matcher.rs
//! Candidate predicates: structured filters and free-text field hits.

use regex::{Regex, RegexBuilder};

use super::filter::FilterContext;
use crate::catalog::Resource;
use crate::error::Result;

const NAME_EXACT: f64 = 100.0;
const NAME_PREFIX: f64 = 60.0;
const NAME_SUBSTRING: f64 = 30.0;
const TOPIC_HIT: f64 = 10.0;
const TOPIC_CAP: f64 = 20.0;
const DESCRIPTION_HIT: f64 = 5.0;

/// Case-insensitive matcher for one query string.
pub struct QueryMatcher {
    raw: String,
    pattern: Option<Regex>,
}

impl QueryMatcher {
    /// Compiles the query. A blank query matches everything with score 0.
    ///
    /// # Errors
    /// Returns an error if the escaped pattern exceeds the regex size limit.
    pub fn new(query: &str) -> Result<Self> {
        let trimmed = query.trim();
        let pattern = if trimmed.is_empty() {
            None
        } else {
            Some(
                RegexBuilder::new(&regex::escape(trimmed))
                    .case_insensitive(true)
                    .build()?,
            )
        };
        Ok(Self {
            raw: trimmed.to_lowercase(),
            pattern,
        })
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.pattern.is_none()
    }

    /// Text relevance of `resource`, or `None` when no field matches.
    #[must_use]
    pub fn score(&self, resource: &Resource) -> Option<f64> {
        let Some(pattern) = &self.pattern else {
            return Some(0.0);
        };

        let name = self.name_score(pattern, &resource.name);
        let topics = topic_score(pattern, resource);
        let description = if pattern.is_match(&resource.description) {
            DESCRIPTION_HIT
        } else {
            0.0
        };

        let total = name + topics + description;
        (total > 0.0).then_some(total)
    }

    fn name_score(&self, pattern: &Regex, name: &str) -> f64 {
        let Some(hit) = pattern.find(name) else {
            return 0.0;
        };
        if name.trim().to_lowercase() == self.raw {
            NAME_EXACT
        } else if name[..hit.start()].trim().is_empty() {
            NAME_PREFIX
        } else {
            NAME_SUBSTRING
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn topic_score(pattern: &Regex, resource: &Resource) -> f64 {
    let hits = resource.topics.iter().filter(|t| pattern.is_match(t)).count();
    (hits as f64 * TOPIC_HIT).min(TOPIC_CAP)
}

/// True if `resource` satisfies every populated structured filter.
#[must_use]
pub fn matches_filters(resource: &Resource, filters: &FilterContext) -> bool {
    if !filters.religions.is_empty() && !filters.religions.contains(&resource.religion) {
        return false;
    }
    if !filters.types.is_empty() && !filters.types.contains(&resource.source_type) {
        return false;
    }
    if !filters.languages.is_empty() && !filters.languages.contains(&resource.language) {
        return false;
    }
    if !filters.topics.is_empty() && filters.topics.is_disjoint(&resource.topics) {
        return false;
    }
    if filters.verified.is_some_and(|v| v != resource.verified) {
        return false;
    }
    if let Some(level) = resource.difficulty {
        if !filters.difficulty.is_full() && !filters.difficulty.contains(level) {
            return false;
        }
    }
    if let Some(range) = &filters.date_range {
        match resource.primary_date() {
            Some(date) if range.contains(date) => {}
            _ => return false,
        }
    }
    true
}
