// src/search/filter.rs
//! The user's current search constraints.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::SourceType;
use crate::error::{Result, SeekerError};

pub const MAX_DIFFICULTY: u8 = 5;

/// A filterable, facet-counted dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Religion,
    Type,
    Language,
    Topic,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [Self::Religion, Self::Type, Self::Language, Self::Topic];
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Religion => "religion",
            Self::Type => "type",
            Self::Language => "language",
            Self::Topic => "topic",
        };
        f.write_str(label)
    }
}

/// Inclusive difficulty bounds on the 0..=5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyRange {
    pub min: u8,
    pub max: u8,
}

impl Default for DifficultyRange {
    fn default() -> Self {
        Self { min: 0, max: MAX_DIFFICULTY }
    }
}

impl DifficultyRange {
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.min == 0 && self.max >= MAX_DIFFICULTY
    }

    #[must_use]
    pub fn contains(&self, level: u8) -> bool {
        (self.min..=self.max).contains(&level)
    }
}

/// Inclusive date bounds; either end may be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.map_or(true, |f| date >= f) && self.to.map_or(true, |t| date <= t)
    }
}

/// Query text plus structured filters.
///
/// Multi-select dimensions match when the resource has at least one of
/// the selected values; an empty selection means "no constraint".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterContext {
    pub query: String,
    pub religions: BTreeSet<String>,
    pub types: BTreeSet<SourceType>,
    pub languages: BTreeSet<String>,
    pub topics: BTreeSet<String>,
    pub verified: Option<bool>,
    pub difficulty: DifficultyRange,
    pub date_range: Option<DateRange>,
}

impl FilterContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    #[must_use]
    pub fn with_religion(mut self, religion: impl Into<String>) -> Self {
        self.religions.insert(religion.into());
        self
    }

    #[must_use]
    pub fn with_type(mut self, source_type: SourceType) -> Self {
        self.types.insert(source_type);
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.languages.insert(language.into());
        self
    }

    #[must_use]
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topics.insert(topic.into());
        self
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_verified(&mut self, verified: Option<bool>) {
        self.verified = verified;
    }

    pub fn toggle_religion(&mut self, value: &str) {
        toggle(&mut self.religions, value.to_string());
    }

    pub fn toggle_type(&mut self, value: SourceType) {
        toggle(&mut self.types, value);
    }

    pub fn toggle_language(&mut self, value: &str) {
        toggle(&mut self.languages, value.to_string());
    }

    pub fn toggle_topic(&mut self, value: &str) {
        toggle(&mut self.topics, value.to_string());
    }

    /// Resets every constraint, including the query.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Copy of this context with one dimension's selection removed.
    #[must_use]
    pub fn without(&self, dimension: Dimension) -> Self {
        let mut copy = self.clone();
        match dimension {
            Dimension::Religion => copy.religions.clear(),
            Dimension::Type => copy.types.clear(),
            Dimension::Language => copy.languages.clear(),
            Dimension::Topic => copy.topics.clear(),
        }
        copy
    }

    /// True when neither the query nor any filter constrains the catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty()
            && self.religions.is_empty()
            && self.types.is_empty()
            && self.languages.is_empty()
            && self.topics.is_empty()
            && self.verified.is_none()
            && self.difficulty.is_full()
            && self.date_range.is_none()
    }

    /// Rejects contexts no resource could ever satisfy by construction.
    ///
    /// # Errors
    /// Returns `InvalidFilter` for reversed or out-of-scale ranges.
    pub fn validate(&self) -> Result<()> {
        let d = self.difficulty;
        if d.max > MAX_DIFFICULTY {
            return Err(SeekerError::InvalidFilter(format!(
                "difficulty max {} exceeds {MAX_DIFFICULTY}",
                d.max
            )));
        }
        if d.min > d.max {
            return Err(SeekerError::InvalidFilter(format!(
                "difficulty range {}..{} is reversed",
                d.min, d.max
            )));
        }
        if let Some(DateRange { from: Some(from), to: Some(to) }) = self.date_range {
            if from > to {
                return Err(SeekerError::InvalidFilter(format!(
                    "date range {from}..{to} is reversed"
                )));
            }
        }
        Ok(())
    }
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}
