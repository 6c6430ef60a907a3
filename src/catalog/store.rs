// src/catalog/store.rs
//! The read-only in-memory catalog.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use super::types::{RelationshipKind, Resource, ResourceReference};
use crate::error::{Result, SeekerError};

/// An edge whose target id is not present in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingEdge {
    pub source: String,
    pub target: String,
    pub relationship: RelationshipKind,
}

/// Immutable snapshot of every resource and reference record.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    resources: Vec<Arc<Resource>>,
    by_id: HashMap<String, usize>,
    references: Vec<ResourceReference>,
}

impl Catalog {
    /// Builds a catalog from resources and an explicit reference projection.
    ///
    /// # Errors
    /// Returns `DuplicateId` if two resources share an id.
    pub fn new(resources: Vec<Resource>, references: Vec<ResourceReference>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(resources.len());
        for (pos, resource) in resources.iter().enumerate() {
            if by_id.insert(resource.id.clone(), pos).is_some() {
                return Err(SeekerError::DuplicateId(resource.id.clone()));
            }
        }

        let catalog = Self {
            resources: resources.into_iter().map(Arc::new).collect(),
            by_id,
            references,
        };

        let dangling = catalog.integrity_report();
        if !dangling.is_empty() {
            tracing::warn!(count = dangling.len(), "catalog contains dangling relationship edges");
        }
        tracing::debug!(resources = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Builds a catalog whose references are derived from `relatedResources`.
    ///
    /// # Errors
    /// Returns `DuplicateId` if two resources share an id.
    pub fn from_resources(resources: Vec<Resource>) -> Result<Self> {
        let references = resources.iter().map(ResourceReference::from).collect();
        Self::new(resources, references)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Arc<Resource>> {
        self.by_id.get(id).and_then(|&pos| self.resources.get(pos))
    }

    /// Insertion order of a resource; used as the final ranking tie-break.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Resource>> {
        self.resources.iter()
    }

    #[must_use]
    pub fn resources(&self) -> &[Arc<Resource>] {
        &self.resources
    }

    #[must_use]
    pub fn references(&self) -> &[ResourceReference] {
        &self.references
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Lists every relationship edge that points at a missing resource.
    #[must_use]
    pub fn integrity_report(&self) -> Vec<DanglingEdge> {
        let resource_edges = self.resources.iter().map(|r| (&r.id, &r.related_resources));
        let reference_edges = self.references.iter().map(|r| (&r.source_id, &r.related_resources));

        let mut report: Vec<DanglingEdge> = Vec::new();
        for (source, related) in resource_edges.chain(reference_edges) {
            for edge in related {
                if self.contains(&edge.id) {
                    continue;
                }
                let dangling = DanglingEdge {
                    source: source.clone(),
                    target: edge.id.clone(),
                    relationship: edge.relationship,
                };
                if !report.contains(&dangling) {
                    report.push(dangling);
                }
            }
        }
        report
    }
}
