// tests/unit_graph.rs
//! Relationship graph construction and edge filtering.

mod common;

use std::collections::HashSet;

use common::{catalog, resource};
use seeker_core::catalog::{
    Catalog, RelatedResource, RelationshipKind, ResourceReference, SourceType,
};
use seeker_core::graph::{build_graph, NodeKind, RelationshipFilter};

fn reference(source: &str, targets: &[(&str, RelationshipKind)]) -> ResourceReference {
    ResourceReference {
        source_id: source.to_string(),
        source_type: SourceType::Text,
        related_resources: targets
            .iter()
            .map(|(id, relationship)| RelatedResource {
                id: (*id).to_string(),
                name: String::new(),
                relationship: *relationship,
            })
            .collect(),
    }
}

fn small_catalog() -> Catalog {
    catalog(vec![
        resource("a").name("Alpha").build(),
        resource("b").name("Beta").kind(SourceType::Study).build(),
        resource("c").name("Gamma").kind(SourceType::Video).build(),
    ])
}

#[test]
fn test_every_id_becomes_exactly_one_node() {
    let cat = small_catalog();
    let refs = vec![
        reference("a", &[("b", RelationshipKind::Commentary), ("c", RelationshipKind::Citation)]),
        reference("b", &[("a", RelationshipKind::Commentary)]),
        reference("c", &[("a", RelationshipKind::Critique)]),
    ];

    let graph = build_graph(&refs, &cat, RelationshipFilter::All);
    let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    let unique: HashSet<&str> = ids.iter().copied().collect();
    assert_eq!(ids.len(), 3);
    assert_eq!(unique.len(), 3);
}

#[test]
fn test_filter_admits_only_matching_edges() {
    let cat = small_catalog();
    let refs = vec![
        reference("a", &[("b", RelationshipKind::Commentary), ("c", RelationshipKind::Citation)]),
        reference("b", &[("c", RelationshipKind::Commentary)]),
    ];

    let graph = build_graph(
        &refs,
        &cat,
        RelationshipFilter::Only(RelationshipKind::Commentary),
    );
    assert_eq!(graph.edges.len(), 2);
    assert!(graph
        .edges
        .iter()
        .all(|e| e.relationship == RelationshipKind::Commentary));
    assert_eq!(graph.nodes.len(), 3, "filtering never removes nodes");
}

#[test]
fn test_missing_target_becomes_unknown_node() {
    let cat = small_catalog();
    let refs = vec![reference("a", &[("ghost", RelationshipKind::Related)])];

    let graph = build_graph(&refs, &cat, RelationshipFilter::All);
    let ghost = graph.node("ghost").unwrap();
    assert_eq!(ghost.kind, NodeKind::Unknown);
    assert_eq!(graph.dangling, vec!["ghost".to_string()]);
    assert_eq!(graph.edges.len(), 1);
}

#[test]
fn test_node_kind_follows_catalog_type() {
    let cat = small_catalog();
    let refs = vec![reference("a", &[("b", RelationshipKind::Supports)])];

    let graph = build_graph(&refs, &cat, RelationshipFilter::All);
    assert_eq!(
        graph.node("b").unwrap().kind,
        NodeKind::Resource(SourceType::Study)
    );
    assert_eq!(graph.node("a").unwrap().label, "Alpha");
}

#[test]
fn test_duplicate_edges_and_self_loops_are_dropped() {
    let cat = small_catalog();
    let refs = vec![
        reference("a", &[("b", RelationshipKind::Extends), ("b", RelationshipKind::Extends)]),
        reference("a", &[("a", RelationshipKind::Related)]),
    ];

    let graph = build_graph(&refs, &cat, RelationshipFilter::All);
    assert_eq!(graph.edges.len(), 1);
}

#[test]
fn test_refilter_swaps_edges_keeps_nodes() {
    let cat = small_catalog();
    let refs = vec![reference(
        "a",
        &[("b", RelationshipKind::Translation), ("c", RelationshipKind::Critique)],
    )];

    let mut graph = build_graph(&refs, &cat, RelationshipFilter::All);
    assert_eq!(graph.edges.len(), 2);

    graph.refilter(&refs, RelationshipFilter::Only(RelationshipKind::Critique));
    assert_eq!(graph.edges.len(), 1);
    assert_eq!(graph.edges[0].target, "c");
    assert_eq!(graph.nodes.len(), 3);
}

#[test]
fn test_neighbors_are_undirected() {
    let cat = small_catalog();
    let refs = vec![
        reference("a", &[("b", RelationshipKind::Related)]),
        reference("c", &[("a", RelationshipKind::Related)]),
    ];

    let graph = build_graph(&refs, &cat, RelationshipFilter::All);
    assert_eq!(graph.neighbors("a"), vec!["b".to_string(), "c".to_string()]);
    assert_eq!(graph.neighbors("b"), vec!["a".to_string()]);
}

#[test]
fn test_relationship_filter_parses() {
    assert_eq!("all".parse::<RelationshipFilter>().unwrap(), RelationshipFilter::All);
    assert_eq!(
        "commentary".parse::<RelationshipFilter>().unwrap(),
        RelationshipFilter::Only(RelationshipKind::Commentary)
    );
    assert!("nonsense".parse::<RelationshipFilter>().is_err());
}

#[test]
fn test_references_derived_from_catalog() {
    let cat = catalog(vec![
        resource("x")
            .related("y", RelationshipKind::Citation)
            .build(),
        resource("y").build(),
    ]);

    let graph = build_graph(cat.references(), &cat, RelationshipFilter::All);
    assert_eq!(graph.nodes.len(), 2);
    assert_eq!(graph.edge_indices().count(), 1);
}
