// tests/common/mod.rs
//! Shared catalog fixtures.
#![allow(dead_code)]

use std::collections::BTreeSet;

use chrono::NaiveDate;
use seeker_core::catalog::{
    Catalog, RelatedResource, RelationshipKind, Resource, ScientificStudy, SourceType,
};

pub struct ResourceBuilder {
    inner: Resource,
}

pub fn resource(id: &str) -> ResourceBuilder {
    ResourceBuilder {
        inner: Resource {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            source_type: SourceType::Text,
            religion: String::new(),
            language: "English".to_string(),
            topics: BTreeSet::new(),
            verified: false,
            verification_source: None,
            organization: None,
            url: format!("https://example.org/{id}"),
            scientific_studies: Vec::new(),
            related_resources: Vec::new(),
            difficulty: None,
        },
    }
}

impl ResourceBuilder {
    pub fn name(mut self, name: &str) -> Self {
        self.inner.name = name.to_string();
        self
    }

    pub fn description(mut self, text: &str) -> Self {
        self.inner.description = text.to_string();
        self
    }

    pub fn religion(mut self, religion: &str) -> Self {
        self.inner.religion = religion.to_string();
        self
    }

    pub fn language(mut self, language: &str) -> Self {
        self.inner.language = language.to_string();
        self
    }

    pub fn kind(mut self, kind: SourceType) -> Self {
        self.inner.source_type = kind;
        self
    }

    pub fn topics(mut self, topics: &[&str]) -> Self {
        self.inner.topics = topics.iter().map(|t| (*t).to_string()).collect();
        self
    }

    pub fn verified(mut self) -> Self {
        self.inner.verified = true;
        self.inner.verification_source = Some("Test Registry".to_string());
        self
    }

    pub fn related(mut self, id: &str, relationship: RelationshipKind) -> Self {
        self.inner.related_resources.push(RelatedResource {
            id: id.to_string(),
            name: String::new(),
            relationship,
        });
        self
    }

    pub fn difficulty(mut self, level: u8) -> Self {
        self.inner.difficulty = Some(level);
        self
    }

    pub fn study(mut self, year: i32) -> Self {
        self.inner.scientific_studies.push(ScientificStudy {
            title: format!("Study {year}"),
            url: "https://example.org/study".to_string(),
            year: Some(year),
            findings: String::new(),
            published_date: NaiveDate::from_ymd_opt(year, 6, 1),
        });
        self
    }

    pub fn build(self) -> Resource {
        self.inner
    }
}

pub fn catalog(resources: Vec<Resource>) -> Catalog {
    Catalog::from_resources(resources).expect("fixture ids are unique")
}

/// Five resources: two Buddhist (one verified), two Islamic, one Hindu.
pub fn five_traditions() -> Catalog {
    catalog(vec![
        resource("dhammapada")
            .name("Dhammapada")
            .religion("Buddhism")
            .language("Pali")
            .topics(&["ethics", "mind"])
            .build(),
        resource("quran")
            .name("The Quran")
            .religion("Islam")
            .language("Arabic")
            .topics(&["scripture", "law"])
            .build(),
        resource("zen-mind")
            .name("Zen Mind, Beginner's Mind")
            .religion("Buddhism")
            .kind(SourceType::Book)
            .topics(&["meditation", "mind"])
            .verified()
            .build(),
        resource("gita")
            .name("Bhagavad Gita")
            .religion("Hinduism")
            .language("Sanskrit")
            .topics(&["ethics", "duty"])
            .build(),
        resource("rumi")
            .name("Masnavi")
            .description("Sufi poetry on divine love")
            .religion("Islam")
            .language("Persian")
            .kind(SourceType::Content)
            .topics(&["mysticism", "poetry"])
            .build(),
    ])
}
