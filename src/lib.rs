//! Resource discovery engine: faceted search and ranking, view-history
//! driven recommendations, and an interactive force-directed relationship
//! graph over a read-only catalog of reference resources.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod exit;
pub mod facets;
pub mod graph;
pub mod logging;
pub mod recommend;
pub mod search;
pub mod shell;

pub use catalog::{Catalog, Resource, ResourceReference};
pub use error::{Result, SeekerError};
pub use facets::{FacetAggregator, Facets};
pub use recommend::{Recommender, Session, ViewHistory};
pub use search::{FilterContext, SearchIndex, SearchPage, SearchResult};
