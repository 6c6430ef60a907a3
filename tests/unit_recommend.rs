// tests/unit_recommend.rs
//! Recommendation Engine: scoring, exclusion and session history.

mod common;

use common::{catalog, resource};
use seeker_core::catalog::{Catalog, RelationshipKind, SourceType};
use seeker_core::config::RecommendConfig;
use seeker_core::{Recommender, SeekerError, Session, ViewHistory};

/// A links to B (reciprocated) and C (one way); D only shares a topic with A;
/// E shares nothing and has a different type.
fn linked_corpus() -> Catalog {
    catalog(vec![
        resource("a")
            .topics(&["prayer"])
            .related("b", RelationshipKind::Commentary)
            .related("c", RelationshipKind::Citation)
            .build(),
        resource("b")
            .related("a", RelationshipKind::Commentary)
            .build(),
        resource("c").build(),
        resource("d").topics(&["prayer"]).build(),
        resource("e").kind(SourceType::Video).build(),
    ])
}

fn ids(results: &[seeker_core::SearchResult]) -> Vec<&str> {
    results.iter().map(|r| r.id()).collect()
}

#[test]
fn test_reciprocated_edge_outranks_one_way_outranks_topic_only() {
    let cat = linked_corpus();
    let config = RecommendConfig::default();
    let focal = cat.get("a").unwrap();

    let recs = Recommender::new(&config).recommend(focal, &cat, &ViewHistory::new(), 6);
    assert_eq!(ids(&recs), vec!["b", "c", "d"]);
    assert!(recs[0].score > recs[1].score);
    assert!(recs[1].score > recs[2].score);
}

#[test]
fn test_links_outrank_heavy_topic_overlap() {
    let topics = [
        "prayer", "fasting", "charity", "pilgrimage", "ethics", "law", "mysticism", "poetry",
        "ritual", "scripture",
    ];
    let cat = catalog(vec![
        resource("a")
            .religion("Islam")
            .topics(&topics)
            .related("b", RelationshipKind::Commentary)
            .related("c", RelationshipKind::Citation)
            .build(),
        resource("b")
            .kind(SourceType::Video)
            .related("a", RelationshipKind::Commentary)
            .build(),
        resource("c").kind(SourceType::Video).build(),
        resource("d").religion("Islam").topics(&topics).build(),
    ]);
    let config = RecommendConfig::default();
    let focal = cat.get("a").unwrap();

    let recs = Recommender::new(&config).recommend(focal, &cat, &ViewHistory::new(), 6);
    assert_eq!(ids(&recs), vec!["b", "c", "d"]);
    assert!(recs[2].score > recs[0].score);
}

#[test]
fn test_zero_score_candidates_are_not_recommended() {
    let cat = linked_corpus();
    let config = RecommendConfig::default();
    let focal = cat.get("a").unwrap();

    let recs = Recommender::new(&config).recommend(focal, &cat, &ViewHistory::new(), 6);
    assert!(!ids(&recs).contains(&"e"));
}

#[test]
fn test_focal_and_history_are_excluded() {
    let cat = linked_corpus();
    let config = RecommendConfig::default();
    let focal = cat.get("a").unwrap();
    let history: ViewHistory = ["a", "b"].into_iter().collect();

    let recs = Recommender::new(&config).recommend(focal, &cat, &history, 6);
    let got = ids(&recs);
    assert!(!got.contains(&"a"));
    assert!(!got.contains(&"b"));
    assert_eq!(got, vec!["c", "d"]);
}

#[test]
fn test_limit_truncates_best_first() {
    let cat = linked_corpus();
    let config = RecommendConfig::default();
    let focal = cat.get("a").unwrap();

    let recs = Recommender::new(&config).recommend(focal, &cat, &ViewHistory::new(), 2);
    assert_eq!(ids(&recs), vec!["b", "c"]);
}

#[test]
fn test_sparse_corpus_returns_fewer_than_limit() {
    let cat = catalog(vec![
        resource("only").topics(&["x"]).build(),
        resource("other").topics(&["x"]).build(),
    ]);
    let config = RecommendConfig::default();
    let focal = cat.get("only").unwrap();

    let recs = Recommender::new(&config).recommend(focal, &cat, &ViewHistory::new(), 6);
    assert_eq!(ids(&recs), vec!["other"]);
}

#[test]
fn test_incoming_only_edge_counts_for_nothing() {
    let cat = catalog(vec![
        resource("focal").kind(SourceType::Book).build(),
        resource("fan")
            .related("focal", RelationshipKind::Citation)
            .build(),
    ]);
    let config = RecommendConfig::default();
    let focal = cat.get("focal").unwrap();

    let recs = Recommender::new(&config).recommend(focal, &cat, &ViewHistory::new(), 6);
    assert!(recs.is_empty());
}

#[test]
fn test_weights_shift_the_balance() {
    let cat = linked_corpus();
    let config = RecommendConfig {
        edge_weight: 0.0,
        similarity_weight: 1.0,
        ..RecommendConfig::default()
    };
    let focal = cat.get("a").unwrap();

    let recs = Recommender::new(&config).recommend(focal, &cat, &ViewHistory::new(), 6);
    assert_eq!(recs[0].id(), "d");
}

#[test]
fn test_religion_bonus_applies_to_same_tradition() {
    let config = RecommendConfig::default();
    let recommender = Recommender::new(&config);
    let focal = resource("f").religion("Jainism").build();
    let same = resource("s").religion("Jainism").build();
    let other = resource("o").religion("Sikhism").build();

    assert!(recommender.similarity(&focal, &same) > recommender.similarity(&focal, &other));
}

#[test]
fn test_recent_views_boost_topical_neighbours() {
    let cat = catalog(vec![
        resource("viewed").topics(&["breath"]).kind(SourceType::Podcast).build(),
        resource("focal").kind(SourceType::Book).build(),
        resource("near").topics(&["breath"]).kind(SourceType::Video).build(),
        resource("far").kind(SourceType::Video).build(),
    ]);
    let config = RecommendConfig::default();
    let focal = cat.get("focal").unwrap();
    let history: ViewHistory = ["viewed"].into_iter().collect();

    let recs = Recommender::new(&config).recommend(focal, &cat, &history, 6);
    assert_eq!(ids(&recs), vec!["near"]);
}

#[test]
fn test_session_records_before_recommending() {
    let cat = linked_corpus();
    let mut session = Session::new(RecommendConfig::default());

    let first = session.select(&cat, "b").unwrap();
    assert!(session.history().contains("b"));
    assert!(!ids(&first).contains(&"b"));

    let second = session.select(&cat, "a").unwrap();
    assert_eq!(session.history().len(), 2);
    assert!(!ids(&second).contains(&"a"));
    assert!(!ids(&second).contains(&"b"));
}

#[test]
fn test_history_order_is_oldest_first() {
    let cat = linked_corpus();
    let mut session = Session::new(RecommendConfig::default());
    for id in ["c", "a", "d"] {
        session.select(&cat, id).unwrap();
    }

    let order: Vec<&str> = session.history().iter().collect();
    assert_eq!(order, vec!["c", "a", "d"]);
    let recent: Vec<&str> = session.history().recent(2).collect();
    assert_eq!(recent, vec!["d", "a"]);
}

#[test]
fn test_unknown_id_leaves_history_untouched() {
    let cat = linked_corpus();
    let mut session = Session::new(RecommendConfig::default());
    session.select(&cat, "a").unwrap();

    let err = session.select(&cat, "missing").unwrap_err();
    assert!(matches!(err, SeekerError::UnknownResource(ref id) if id == "missing"));
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_reset_clears_history() {
    let cat = linked_corpus();
    let mut session = Session::new(RecommendConfig::default());
    session.select(&cat, "a").unwrap();
    session.reset();
    assert!(session.history().is_empty());
}

#[test]
fn test_session_uses_configured_limit() {
    let cat = linked_corpus();
    let mut session = Session::new(RecommendConfig {
        limit: 1,
        ..RecommendConfig::default()
    });

    let recs = session.select(&cat, "a").unwrap();
    assert_eq!(ids(&recs), vec!["b"]);
}

#[test]
fn test_seeded_history_is_excluded() {
    let cat = linked_corpus();
    let mut session =
        Session::new(RecommendConfig::default()).with_history(["b"].into_iter().collect());

    let recs = session.select(&cat, "a").unwrap();
    assert_eq!(ids(&recs), vec!["c", "d"]);
    assert_eq!(session.history().len(), 2);
}
