// src/shell/timeline.rs
use chrono::NaiveDate;
use serde::Serialize;

use crate::search::SearchResult;

#[derive(Debug, Clone, Serialize)]
pub struct TimelineEntry {
    pub date: Option<NaiveDate>,
    pub result: SearchResult,
}

/// Orders ranked results oldest first by primary date. Undated entries
/// go last, and equal dates keep their ranked order.
#[must_use]
pub fn chronological(results: Vec<SearchResult>) -> Vec<TimelineEntry> {
    let mut entries: Vec<TimelineEntry> = results
        .into_iter()
        .map(|result| TimelineEntry {
            date: result.resource.primary_date(),
            result,
        })
        .collect();

    entries.sort_by(|a, b| match (a.date, b.date) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    entries
}
