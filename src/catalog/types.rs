// src/catalog/types.rs
//! Catalog record types as they appear in the catalog JSON.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// The fixed set of resource kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Text,
    Study,
    Content,
    Lecture,
    Course,
    Book,
    Article,
    Video,
    Podcast,
    #[serde(other)]
    Other,
}

impl SourceType {
    pub const ALL: [SourceType; 10] = [
        Self::Text,
        Self::Study,
        Self::Content,
        Self::Lecture,
        Self::Course,
        Self::Book,
        Self::Article,
        Self::Video,
        Self::Podcast,
        Self::Other,
    ];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Study => "study",
            Self::Content => "content",
            Self::Lecture => "lecture",
            Self::Course => "course",
            Self::Book => "book",
            Self::Article => "article",
            Self::Video => "video",
            Self::Podcast => "podcast",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.label() == wanted)
            .ok_or_else(|| format!("unknown source type '{s}'"))
    }
}

/// How one resource relates to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipKind {
    Commentary,
    Translation,
    Citation,
    Critique,
    Supports,
    Extends,
    Related,
    #[serde(other)]
    Other,
}

impl RelationshipKind {
    pub const ALL: [RelationshipKind; 8] = [
        Self::Commentary,
        Self::Translation,
        Self::Citation,
        Self::Critique,
        Self::Supports,
        Self::Extends,
        Self::Related,
        Self::Other,
    ];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Commentary => "commentary",
            Self::Translation => "translation",
            Self::Citation => "citation",
            Self::Critique => "critique",
            Self::Supports => "supports",
            Self::Extends => "extends",
            Self::Related => "related",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RelationshipKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.label() == wanted)
            .ok_or_else(|| format!("unknown relationship kind '{s}'"))
    }
}

/// A peer-reviewed study attached to a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScientificStudy {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub findings: String,
    #[serde(default)]
    pub published_date: Option<NaiveDate>,
}

impl ScientificStudy {
    /// Full publication date if known, else January 1st of `year`.
    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        self.published_date
            .or_else(|| self.year.and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1)))
    }
}

/// An outgoing association to another resource, by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedResource {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(alias = "relationshipType", default = "default_relationship")]
    pub relationship: RelationshipKind,
}

fn default_relationship() -> RelationshipKind {
    RelationshipKind::Related
}

/// A single external reference item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "sourceType", alias = "type")]
    pub source_type: SourceType,
    #[serde(default)]
    pub religion: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub topics: BTreeSet<String>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub scientific_studies: Vec<ScientificStudy>,
    #[serde(default)]
    pub related_resources: Vec<RelatedResource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<u8>,
}

impl Resource {
    /// Most recent dated study attached to this resource.
    #[must_use]
    pub fn primary_date(&self) -> Option<NaiveDate> {
        self.scientific_studies.iter().filter_map(ScientificStudy::date).max()
    }

    #[must_use]
    pub fn primary_year(&self) -> Option<i32> {
        self.primary_date().map(|d| d.year())
    }

    /// True if this resource lists `id` among its related resources.
    #[must_use]
    pub fn links_to(&self, id: &str) -> bool {
        self.related_resources.iter().any(|r| r.id == id)
    }

    /// Verification source, honoured only when the resource is verified.
    #[must_use]
    pub fn verified_by(&self) -> Option<&str> {
        if self.verified {
            self.verification_source.as_deref()
        } else {
            None
        }
    }
}

/// The edge projection of a resource used for graph construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceReference {
    pub source_id: String,
    pub source_type: SourceType,
    #[serde(default)]
    pub related_resources: Vec<RelatedResource>,
}

impl From<&Resource> for ResourceReference {
    fn from(resource: &Resource) -> Self {
        Self {
            source_id: resource.id.clone(),
            source_type: resource.source_type,
            related_resources: resource.related_resources.clone(),
        }
    }
}
