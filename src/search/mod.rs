// src/search/mod.rs
//! Search & Rank Index: free-text query plus structured filters into a
//! ranked, paginated result set.

pub mod filter;
pub mod index;
pub mod matcher;
pub mod types;

pub use filter::{DateRange, DifficultyRange, Dimension, FilterContext, MAX_DIFFICULTY};
pub use index::{Candidate, SearchIndex};
pub use matcher::QueryMatcher;
pub use types::{SearchPage, SearchResult};
