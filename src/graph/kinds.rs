// src/graph/kinds.rs
//! Node categories and their colour table.

use serde::Serialize;

use crate::catalog::{Catalog, SourceType};

/// Colour category of a graph node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Resource(SourceType),
    /// No catalog record matched the node id.
    Unknown,
}

const PALETTE: &[(SourceType, &str)] = &[
    (SourceType::Text, "#4e79a7"),
    (SourceType::Study, "#f28e2b"),
    (SourceType::Content, "#59a14f"),
    (SourceType::Lecture, "#e15759"),
    (SourceType::Course, "#76b7b2"),
    (SourceType::Book, "#edc948"),
    (SourceType::Article, "#b07aa1"),
    (SourceType::Video, "#ff9da7"),
    (SourceType::Podcast, "#9c755f"),
];

pub const UNKNOWN_COLOR: &str = "#bab0ac";

impl NodeKind {
    /// Resolves the kind of `id` by catalog lookup, never failing.
    #[must_use]
    pub fn resolve(catalog: &Catalog, id: &str) -> Self {
        catalog
            .get(id)
            .map_or(Self::Unknown, |r| Self::Resource(r.source_type))
    }

    #[must_use]
    pub fn color(&self) -> &'static str {
        let Self::Resource(source_type) = self else {
            return UNKNOWN_COLOR;
        };
        PALETTE
            .iter()
            .find(|(t, _)| t == source_type)
            .map_or(UNKNOWN_COLOR, |(_, c)| c)
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Resource(t) => t.label(),
            Self::Unknown => "unknown",
        }
    }
}
