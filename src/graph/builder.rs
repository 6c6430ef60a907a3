// src/graph/builder.rs
//! Graph construction from reference records: node set and filtered edges.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::kinds::NodeKind;
use crate::catalog::{Catalog, RelationshipKind, ResourceReference};

/// Which relationship kinds contribute edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RelationshipFilter {
    #[default]
    All,
    Only(RelationshipKind),
}

impl RelationshipFilter {
    #[must_use]
    pub fn accepts(&self, kind: RelationshipKind) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == kind,
        }
    }
}

impl FromStr for RelationshipFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

impl fmt::Display for RelationshipFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(kind) => write!(f, "{kind}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub relationship: RelationshipKind,
}

/// Nodes and directed, typed edges derived from reference data.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RelationshipGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    /// Node ids with no catalog record.
    pub dangling: Vec<String>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

/// Builds the node set (every source and target id, once each) and the
/// edge set admitted by `filter`.
#[must_use]
pub fn build_graph(
    references: &[ResourceReference],
    catalog: &Catalog,
    filter: RelationshipFilter,
) -> RelationshipGraph {
    let mut graph = RelationshipGraph::default();

    for reference in references {
        graph.add_node(catalog, &reference.source_id, None);
        for related in &reference.related_resources {
            let fallback = (!related.name.is_empty()).then_some(related.name.as_str());
            graph.add_node(catalog, &related.id, fallback);
        }
    }

    graph.edges = collect_edges(references, filter);

    if !graph.dangling.is_empty() {
        tracing::warn!(
            missing = graph.dangling.len(),
            "graph references resources absent from the catalog"
        );
    }
    tracing::debug!(nodes = graph.nodes.len(), edges = graph.edges.len(), %filter, "graph built");
    graph
}

fn collect_edges(references: &[ResourceReference], filter: RelationshipFilter) -> Vec<GraphEdge> {
    let mut seen: HashSet<GraphEdge> = HashSet::new();
    let mut edges = Vec::new();

    for reference in references {
        for related in &reference.related_resources {
            if !filter.accepts(related.relationship) || related.id == reference.source_id {
                continue;
            }
            let edge = GraphEdge {
                source: reference.source_id.clone(),
                target: related.id.clone(),
                relationship: related.relationship,
            };
            if seen.insert(edge.clone()) {
                edges.push(edge);
            }
        }
    }
    edges
}

impl RelationshipGraph {
    /// Replaces the edge set for a new filter. Nodes are untouched.
    pub fn refilter(&mut self, references: &[ResourceReference], filter: RelationshipFilter) {
        self.edges = collect_edges(references, filter);
    }

    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    #[must_use]
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.index_of(id).and_then(|i| self.nodes.get(i))
    }

    /// Edges as node-index pairs.
    pub fn edge_indices(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges
            .iter()
            .filter_map(|e| Some((self.index_of(&e.source)?, self.index_of(&e.target)?)))
    }

    /// Ids adjacent to `id` in either direction, sorted.
    #[must_use]
    pub fn neighbors(&self, id: &str) -> Vec<String> {
        let mut result: HashSet<&str> = HashSet::new();
        for edge in &self.edges {
            if edge.source == id {
                result.insert(&edge.target);
            } else if edge.target == id {
                result.insert(&edge.source);
            }
        }
        let mut ids: Vec<String> = result.into_iter().map(str::to_string).collect();
        ids.sort();
        ids
    }

    fn add_node(&mut self, catalog: &Catalog, id: &str, fallback_label: Option<&str>) {
        if self.index.contains_key(id) {
            return;
        }
        let kind = NodeKind::resolve(catalog, id);
        let label = catalog
            .get(id)
            .map(|r| r.name.clone())
            .or_else(|| fallback_label.map(str::to_string))
            .unwrap_or_else(|| id.to_string());

        if kind == NodeKind::Unknown {
            self.dangling.push(id.to_string());
        }
        self.index.insert(id.to_string(), self.nodes.len());
        self.nodes.push(GraphNode {
            id: id.to_string(),
            label,
            kind,
        });
    }
}
