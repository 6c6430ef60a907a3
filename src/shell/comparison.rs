// src/shell/comparison.rs
use std::sync::Arc;

use serde::Serialize;

use crate::catalog::{Catalog, Resource};

pub const MAX_COMPARED: usize = 3;

/// Up to three resource ids shown side by side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComparisonSlots {
    ids: Vec<String>,
}

impl ComparisonSlots {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn can_add(&self) -> bool {
        self.ids.len() < MAX_COMPARED
    }

    /// Adds `id`. A duplicate or a fourth entry is a no-op returning false.
    pub fn add(&mut self, id: &str) -> bool {
        if !self.can_add() || self.contains(id) {
            return false;
        }
        self.ids.push(id.to_string());
        true
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|s| s != id);
        self.ids.len() != before
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|s| s == id)
    }

    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Resolved resources in slot order; ids no longer in the catalog are skipped.
    #[must_use]
    pub fn resolve(&self, catalog: &Catalog) -> Vec<Arc<Resource>> {
        self.ids.iter().filter_map(|id| catalog.get(id).cloned()).collect()
    }
}
