use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::catalog::SourceType;
use crate::graph::RelationshipFilter;
use crate::search::{DateRange, DifficultyRange, FilterContext, MAX_DIFFICULTY};

#[derive(Parser)]
#[command(name = "seeker", version, about = "Search, filter and explore a reference-resource catalog")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Catalog JSON file, or a directory of JSON files
    #[arg(long, short = 'C', global = true, default_value = "catalog.json")]
    pub catalog: PathBuf,
    /// Config file (defaults to ./seeker.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    #[arg(long, short, global = true)]
    pub verbose: bool,
    /// Append session events to .seeker/events.jsonl
    #[arg(long, global = true)]
    pub journal: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ranked, paginated search
    Search {
        #[command(flatten)]
        filters: FilterArgs,
        #[arg(long, default_value = "1")]
        page: usize,
        #[arg(long)]
        page_size: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Per-value counts for each filter dimension
    Facets {
        #[command(flatten)]
        filters: FilterArgs,
        #[arg(long)]
        json: bool,
    },
    /// Related, unseen resources for a focal resource
    Recommend {
        #[arg(value_name = "ID")]
        id: String,
        /// Ids already viewed this session, oldest first
        #[arg(long, value_name = "ID")]
        seen: Vec<String>,
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Build and lay out the relationship graph
    Graph {
        /// "all" or a relationship kind
        #[arg(long, default_value = "all")]
        relationship: RelationshipFilter,
        #[arg(long, default_value = "600")]
        max_steps: usize,
        /// Write an SVG snapshot here
        #[arg(long, value_name = "FILE")]
        svg: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Matching resources in chronological order
    Timeline {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Side-by-side view of up to three resources
    Compare {
        #[arg(value_name = "ID", required = true)]
        ids: Vec<String>,
    },
    /// Report dangling relationship edges
    Check,
}

#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Free-text query over name, description and topics
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,
    #[arg(long)]
    pub religion: Vec<String>,
    #[arg(long = "type", value_name = "TYPE")]
    pub types: Vec<SourceType>,
    #[arg(long)]
    pub language: Vec<String>,
    #[arg(long)]
    pub topic: Vec<String>,
    /// Only verified resources
    #[arg(long, conflicts_with = "unverified")]
    pub verified: bool,
    /// Only unverified resources
    #[arg(long)]
    pub unverified: bool,
    #[arg(long, default_value = "0")]
    pub min_difficulty: u8,
    #[arg(long, default_value_t = MAX_DIFFICULTY)]
    pub max_difficulty: u8,
    /// Earliest study date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,
    /// Latest study date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,
}

impl FilterArgs {
    #[must_use]
    pub fn to_context(&self) -> FilterContext {
        let verified = match (self.verified, self.unverified) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        };
        let date_range = (self.from.is_some() || self.to.is_some()).then_some(DateRange {
            from: self.from,
            to: self.to,
        });

        FilterContext {
            query: self.query.clone().unwrap_or_default(),
            religions: self.religion.iter().cloned().collect(),
            types: self.types.iter().copied().collect(),
            languages: self.language.iter().cloned().collect(),
            topics: self.topic.iter().cloned().collect(),
            verified,
            difficulty: DifficultyRange {
                min: self.min_difficulty,
                max: self.max_difficulty,
            },
            date_range,
        }
    }
}
