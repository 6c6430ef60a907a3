// src/recommend/mod.rs
//! Recommendation Engine: related-but-unseen resources for a focal resource.

pub mod history;
pub mod scoring;
pub mod session;

pub use history::ViewHistory;
pub use scoring::Recommender;
pub use session::Session;
