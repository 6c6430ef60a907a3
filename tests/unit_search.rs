// tests/unit_search.rs
//! Search & Rank Index behaviour.

mod common;

use std::collections::HashSet;

use chrono::NaiveDate;
use common::{catalog, five_traditions, resource};
use seeker_core::catalog::SourceType;
use seeker_core::search::{DateRange, DifficultyRange, FilterContext, SearchIndex};
use seeker_core::SeekerError;

fn ids(results: &[seeker_core::SearchResult]) -> Vec<String> {
    results.iter().map(|r| r.id().to_string()).collect()
}

#[test]
fn test_religion_filter_total() {
    let cat = five_traditions();
    let index = SearchIndex::new(&cat);
    let filters = FilterContext::new().with_religion("Buddhism");

    let page = index.search("", &filters, 1, 10).unwrap();
    assert_eq!(page.total, 2);
    assert!(!page.has_more);
}

#[test]
fn test_empty_query_returns_whole_catalog_verified_first() {
    let cat = five_traditions();
    let index = SearchIndex::new(&cat);

    let page = index.search("", &FilterContext::new(), 1, 10).unwrap();
    assert_eq!(page.total, 5);
    assert_eq!(
        ids(&page.results),
        vec!["zen-mind", "dhammapada", "quran", "gita", "rumi"],
        "verified first, then insertion order"
    );
}

#[test]
fn test_name_prefix_outranks_description_match() {
    let cat = catalog(vec![
        resource("desc")
            .name("Collected Sayings")
            .description("A guide to zen koans")
            .build(),
        resource("topic").name("Koans").topics(&["zen"]).build(),
        resource("name").name("Zen Flesh, Zen Bones").build(),
    ]);
    let index = SearchIndex::new(&cat);

    let page = index.search("zen", &FilterContext::new(), 1, 10).unwrap();
    assert_eq!(page.total, 3);
    assert_eq!(page.results[0].id(), "name");
}

#[test]
fn test_verified_breaks_score_ties() {
    let cat = catalog(vec![
        resource("a").name("Sufi Path").build(),
        resource("b").name("Sufi Path").verified().build(),
    ]);
    let index = SearchIndex::new(&cat);

    let page = index.search("sufi path", &FilterContext::new(), 1, 10).unwrap();
    assert_eq!(ids(&page.results), vec!["b", "a"]);
}

#[test]
fn test_zero_field_hits_excluded_regardless_of_filters() {
    let cat = five_traditions();
    let index = SearchIndex::new(&cat);
    let filters = FilterContext::new().with_religion("Islam");

    let page = index.search("sufi", &filters, 1, 10).unwrap();
    assert_eq!(ids(&page.results), vec!["rumi"]);
}

#[test]
fn test_query_matches_case_insensitively() {
    let cat = five_traditions();
    let index = SearchIndex::new(&cat);

    let page = index.search("GITA", &FilterContext::new(), 1, 10).unwrap();
    assert_eq!(ids(&page.results), vec!["gita"]);
}

#[test]
fn test_topics_filter_is_any_of() {
    let cat = five_traditions();
    let index = SearchIndex::new(&cat);
    let filters = FilterContext::new().with_topic("poetry").with_topic("duty");

    let page = index.search("", &filters, 1, 10).unwrap();
    let got: HashSet<String> = ids(&page.results).into_iter().collect();
    assert_eq!(got, HashSet::from(["rumi".to_string(), "gita".to_string()]));
}

#[test]
fn test_filters_combine_across_dimensions() {
    let cat = five_traditions();
    let index = SearchIndex::new(&cat);
    let filters = FilterContext::new()
        .with_religion("Buddhism")
        .with_type(SourceType::Book);

    let page = index.search("", &filters, 1, 10).unwrap();
    assert_eq!(ids(&page.results), vec!["zen-mind"]);
}

#[test]
fn test_verified_toggle_is_exact_match() {
    let cat = five_traditions();
    let index = SearchIndex::new(&cat);

    let mut only_unverified = FilterContext::new();
    only_unverified.set_verified(Some(false));
    assert_eq!(index.count(&only_unverified).unwrap(), 4);

    let mut only_verified = FilterContext::new();
    only_verified.set_verified(Some(true));
    assert_eq!(index.count(&only_verified).unwrap(), 1);
}

#[test]
fn test_difficulty_range_excludes_out_of_range_only() {
    let cat = catalog(vec![
        resource("easy").difficulty(1).build(),
        resource("hard").difficulty(5).build(),
        resource("unrated").build(),
    ]);
    let index = SearchIndex::new(&cat);
    let mut filters = FilterContext::new();
    filters.difficulty = DifficultyRange { min: 0, max: 3 };

    let page = index.search("", &filters, 1, 10).unwrap();
    assert_eq!(ids(&page.results), vec!["easy", "unrated"]);
}

#[test]
fn test_unfiltered_search_keeps_off_scale_difficulty() {
    let cat = catalog(vec![
        resource("x").build(),
        resource("y").difficulty(7).build(),
    ]);
    let index = SearchIndex::new(&cat);

    let page = index.search("", &FilterContext::new(), 1, 10).unwrap();
    assert_eq!(page.total, cat.len());

    let mut narrowed = FilterContext::new();
    narrowed.difficulty = DifficultyRange { min: 0, max: 3 };
    assert_eq!(index.count(&narrowed).unwrap(), 1);
}

#[test]
fn test_date_range_requires_a_dated_resource() {
    let cat = catalog(vec![
        resource("old").study(1990).build(),
        resource("new").study(2020).build(),
        resource("undated").build(),
    ]);
    let index = SearchIndex::new(&cat);
    let mut filters = FilterContext::new();
    filters.date_range = Some(DateRange {
        from: NaiveDate::from_ymd_opt(2000, 1, 1),
        to: None,
    });

    let page = index.search("", &filters, 1, 10).unwrap();
    assert_eq!(ids(&page.results), vec!["new"]);
}

#[test]
fn test_malformed_filter_is_rejected() {
    let cat = five_traditions();
    let index = SearchIndex::new(&cat);
    let mut filters = FilterContext::new();
    filters.difficulty = DifficultyRange { min: 4, max: 1 };

    let err = index.search("", &filters, 1, 10).unwrap_err();
    assert!(matches!(err, SeekerError::InvalidFilter(_)));
}

#[test]
fn test_search_is_idempotent() {
    let cat = five_traditions();
    let index = SearchIndex::new(&cat);
    let filters = FilterContext::new().with_topic("mind");

    let first = index.search("mind", &filters, 1, 2).unwrap();
    let second = index.search("mind", &filters, 1, 2).unwrap();
    assert_eq!(ids(&first.results), ids(&second.results));
    assert_eq!(first.total, second.total);
    assert_eq!(first.has_more, second.has_more);
}

#[test]
fn test_pagination_reproduces_full_ranking() {
    let cat = five_traditions();
    let index = SearchIndex::new(&cat);
    let filters = FilterContext::new();
    let full = ids(&index.ranked(&filters).unwrap());

    let page_size = 2;
    let first = index.search("", &filters, 1, page_size).unwrap();
    let pages = first.page_count();
    assert_eq!(pages, 3);

    let mut stitched = Vec::new();
    for p in 1..=pages {
        let page = index.search("", &filters, p, page_size).unwrap();
        assert_eq!(page.has_more, p < pages);
        stitched.extend(ids(&page.results));
    }
    assert_eq!(stitched, full);
    let unique: HashSet<&String> = stitched.iter().collect();
    assert_eq!(unique.len(), stitched.len());
}

#[test]
fn test_page_past_end_is_empty_with_correct_total() {
    let cat = five_traditions();
    let index = SearchIndex::new(&cat);

    let page = index.search("", &FilterContext::new(), 9, 2).unwrap();
    assert!(page.results.is_empty());
    assert_eq!(page.total, 5);
    assert!(!page.has_more);
}

#[test]
fn test_page_zero_and_size_zero_are_clamped() {
    let cat = five_traditions();
    let index = SearchIndex::new(&cat);

    let page = index.search("", &FilterContext::new(), 0, 0).unwrap();
    assert_eq!(page.page, 1);
    assert_eq!(page.page_size, 1);
    assert_eq!(page.results.len(), 1);
    assert!(page.has_more);
}

#[test]
fn test_query_argument_overrides_context_query() {
    let cat = five_traditions();
    let index = SearchIndex::new(&cat);
    let filters = FilterContext::new().with_query("quran");

    let page = index.search("gita", &filters, 1, 10).unwrap();
    assert_eq!(ids(&page.results), vec!["gita"]);
}

#[test]
fn test_empty_catalog_yields_empty_page() {
    let cat = catalog(Vec::new());
    let index = SearchIndex::new(&cat);

    let page = index.search("anything", &FilterContext::new(), 1, 10).unwrap();
    assert!(page.is_empty());
    assert!(!page.has_more);
}
