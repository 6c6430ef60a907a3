// src/recommend/scoring.rs
//! Combined edge + similarity + recency scoring.

use std::cmp::Ordering;

use super::history::ViewHistory;
use crate::catalog::{Catalog, Resource};
use crate::config::RecommendConfig;
use crate::search::SearchResult;

/// Ranks unseen resources related to a focal resource.
pub struct Recommender<'a> {
    config: &'a RecommendConfig,
}

impl<'a> Recommender<'a> {
    #[must_use]
    pub fn new(config: &'a RecommendConfig) -> Self {
        Self { config }
    }

    /// Up to `limit` recommendations for `focal`, never including `focal`
    /// itself or anything in `history`. Sparse corpora yield fewer.
    #[must_use]
    pub fn recommend(
        &self,
        focal: &Resource,
        corpus: &Catalog,
        history: &ViewHistory,
        limit: usize,
    ) -> Vec<SearchResult> {
        let mut scored: Vec<Ranked> = corpus
            .iter()
            .enumerate()
            .filter(|(_, r)| r.id != focal.id && !history.contains(&r.id))
            .filter_map(|(position, r)| {
                let score = self.score(focal, r, corpus, history);
                (score > 0.0).then(|| Ranked {
                    tier: self.edge_tier(focal, r),
                    position,
                    result: SearchResult {
                        resource: r.clone(),
                        score,
                    },
                })
            })
            .collect();

        scored.sort_by(rank_order);
        scored.truncate(limit);

        tracing::debug!(focal = %focal.id, returned = scored.len(), "recommendations");
        scored.into_iter().map(|r| r.result).collect()
    }

    /// Combined score of `candidate` relative to `focal`.
    #[must_use]
    pub fn score(
        &self,
        focal: &Resource,
        candidate: &Resource,
        corpus: &Catalog,
        history: &ViewHistory,
    ) -> f64 {
        let c = self.config;
        c.edge_weight * self.edge_score(focal, candidate)
            + c.similarity_weight * self.similarity(focal, candidate)
            + self.recency_score(focal, candidate, corpus, history)
    }

    /// Explicit signal: focal links to candidate, scaled by reciprocity.
    #[must_use]
    pub fn edge_score(&self, focal: &Resource, candidate: &Resource) -> f64 {
        if !focal.links_to(&candidate.id) {
            return 0.0;
        }
        let factor = if candidate.links_to(&focal.id) {
            self.config.reciprocal_factor
        } else {
            self.config.one_way_factor
        };
        self.config.link_score * factor
    }

    /// Ordering class of the explicit link: 2 reciprocated, 1 one-way,
    /// 0 none. Linked candidates always rank above unlinked ones unless
    /// `edge_weight` switches the explicit signal off.
    #[must_use]
    pub fn edge_tier(&self, focal: &Resource, candidate: &Resource) -> u8 {
        if self.config.edge_weight <= 0.0 || !focal.links_to(&candidate.id) {
            0
        } else if candidate.links_to(&focal.id) {
            2
        } else {
            1
        }
    }

    /// Implicit signal: shared topics plus same-religion and same-type bonuses.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn similarity(&self, focal: &Resource, candidate: &Resource) -> f64 {
        let shared = focal.topics.intersection(&candidate.topics).count() as f64;
        let mut score = shared * self.config.topic_weight;
        if !focal.religion.is_empty() && focal.religion == candidate.religion {
            score += self.config.religion_bonus;
        }
        if focal.source_type == candidate.source_type {
            score += self.config.type_bonus;
        }
        score
    }

    /// Topic overlap with recently viewed resources, fading with age.
    #[allow(clippy::cast_precision_loss)]
    fn recency_score(
        &self,
        focal: &Resource,
        candidate: &Resource,
        corpus: &Catalog,
        history: &ViewHistory,
    ) -> f64 {
        let window = self.config.recency_window;
        if window == 0 || self.config.recency_weight == 0.0 {
            return 0.0;
        }

        history
            .recent(window)
            .enumerate()
            .filter(|(_, id)| *id != focal.id)
            .filter_map(|(age, id)| corpus.get(id).map(|viewed| (age, viewed)))
            .map(|(age, viewed)| {
                let shared = viewed.topics.intersection(&candidate.topics).count() as f64;
                let fade = 1.0 - age as f64 / window as f64;
                shared * self.config.recency_weight * fade
            })
            .sum()
    }
}

struct Ranked {
    tier: u8,
    position: usize,
    result: SearchResult,
}

/// Edge tier, then score descending, verified first, then catalog order.
fn rank_order(a: &Ranked, b: &Ranked) -> Ordering {
    b.tier
        .cmp(&a.tier)
        .then_with(|| b.result.score.total_cmp(&a.result.score))
        .then_with(|| b.result.resource.verified.cmp(&a.result.resource.verified))
        .then_with(|| a.position.cmp(&b.position))
}
