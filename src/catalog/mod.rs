// src/catalog/mod.rs
//! Catalog Store: the read-only resource records the engine consumes.

pub mod load;
pub mod store;
pub mod types;

pub use load::{from_json_str, load_path};
pub use store::{Catalog, DanglingEdge};
pub use types::{
    RelatedResource, RelationshipKind, Resource, ResourceReference, ScientificStudy, SourceType,
};
