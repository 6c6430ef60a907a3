// src/recommend/history.rs
//! Per-session log of opened resources.

use std::collections::HashSet;

use serde::Serialize;

/// Append-only ordered set of resource ids opened during one session.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ViewHistory {
    order: Vec<String>,
    #[serde(skip)]
    seen: HashSet<String>,
}

impl ViewHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `id` unless already present. Returns true if it was new.
    pub fn record(&mut self, id: &str) -> bool {
        if !self.seen.insert(id.to_string()) {
            return false;
        }
        self.order.push(id.to_string());
        true
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    /// The `n` most recently first-opened ids, newest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &str> {
        self.order.iter().rev().take(n).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ViewHistory {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut history = Self::new();
        for id in iter {
            history.record(id.as_ref());
        }
        history
    }
}
