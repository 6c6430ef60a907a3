// src/graph/mod.rs
//! Relationship Graph Builder & Layout.

pub mod builder;
pub mod geometry;
pub mod kinds;
pub mod layout;
pub mod paths;
pub mod render;
pub mod view;
pub mod viewport;

pub use builder::{build_graph, GraphEdge, GraphNode, RelationshipFilter, RelationshipGraph};
pub use geometry::Vec2;
pub use kinds::NodeKind;
pub use layout::{Simulation, StepOutcome};
pub use paths::EdgePath;
pub use view::{GraphView, SelectionEvent};
pub use viewport::Viewport;
