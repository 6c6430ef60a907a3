// src/graph/view.rs
//! Interactive graph: graph data, running layout and view transform together.

use serde::Serialize;

use super::builder::{build_graph, GraphEdge, RelationshipFilter, RelationshipGraph};
use super::geometry::Vec2;
use super::layout::{Simulation, StepOutcome};
use super::paths::EdgePath;
use super::viewport::Viewport;
use crate::catalog::{Catalog, ResourceReference};
use crate::config::{LayoutConfig, ViewportConfig};

/// Fired when a node is clicked; consumed by the view shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionEvent {
    pub resource_id: String,
}

pub struct GraphView {
    graph: RelationshipGraph,
    simulation: Simulation,
    viewport: Viewport,
    references: Vec<ResourceReference>,
    filter: RelationshipFilter,
    node_radius: f64,
    dragging: Option<String>,
}

impl GraphView {
    /// Builds the graph from the catalog's references and seeds the layout.
    #[must_use]
    pub fn new(
        catalog: &Catalog,
        filter: RelationshipFilter,
        layout: LayoutConfig,
        viewport: &ViewportConfig,
    ) -> Self {
        let references = catalog.references().to_vec();
        let graph = build_graph(&references, catalog, filter);
        let node_radius = layout.collision_radius.max(1.0);
        Self {
            simulation: Simulation::new(&graph, layout),
            graph,
            viewport: Viewport::new(viewport),
            references,
            filter,
            node_radius,
            dragging: None,
        }
    }

    #[must_use]
    pub fn graph(&self) -> &RelationshipGraph {
        &self.graph
    }

    #[must_use]
    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn filter(&self) -> RelationshipFilter {
        self.filter
    }

    #[must_use]
    pub fn node_radius(&self) -> f64 {
        self.node_radius
    }

    /// Rebuilds the edge set and re-stabilizes, keeping node positions.
    pub fn set_filter(&mut self, filter: RelationshipFilter) {
        if filter == self.filter {
            return;
        }
        self.filter = filter;
        self.graph.refilter(&self.references, filter);
        self.simulation.sync(&self.graph);
    }

    /// One animation frame.
    pub fn tick(&mut self) -> StepOutcome {
        self.simulation.step()
    }

    /// Graph hidden: stop stepping, keep positions.
    pub fn hide(&mut self) {
        self.dragging = None;
        self.simulation.stop();
    }

    pub fn show(&mut self) {
        self.simulation.resume();
    }

    pub fn pan(&mut self, delta: Vec2) {
        self.viewport.pan(delta);
    }

    pub fn zoom_at(&mut self, factor: f64, focus: Vec2) {
        self.viewport.zoom_at(factor, focus);
    }

    /// The topmost node under a screen point.
    #[must_use]
    pub fn node_at(&self, screen: Vec2) -> Option<&str> {
        let world = self.viewport.to_world(screen);
        self.simulation
            .nodes()
            .iter()
            .rev()
            .find(|n| n.position.distance(world) <= self.node_radius)
            .map(|n| n.id.as_str())
    }

    #[must_use]
    pub fn click(&self, screen: Vec2) -> Option<SelectionEvent> {
        self.node_at(screen).map(|id| SelectionEvent {
            resource_id: id.to_string(),
        })
    }

    /// Starts dragging the node under `screen`, if any.
    pub fn pointer_down(&mut self, screen: Vec2) -> bool {
        let Some(id) = self.node_at(screen).map(str::to_string) else {
            return false;
        };
        if self.simulation.drag_start(&id) {
            self.dragging = Some(id);
            return true;
        }
        false
    }

    pub fn pointer_move(&mut self, screen: Vec2) {
        if let Some(id) = &self.dragging {
            let world = self.viewport.to_world(screen);
            self.simulation.drag_to(id, world);
        }
    }

    pub fn pointer_up(&mut self) {
        if let Some(id) = self.dragging.take() {
            self.simulation.drag_end(&id);
        }
    }

    #[must_use]
    pub fn dragging(&self) -> Option<&str> {
        self.dragging.as_deref()
    }

    /// Curved paths for every edge whose endpoints have positions.
    #[must_use]
    pub fn edge_paths(&self) -> Vec<(&GraphEdge, EdgePath)> {
        self.graph
            .edges
            .iter()
            .filter_map(|e| {
                let from = self.simulation.position(&e.source)?;
                let to = self.simulation.position(&e.target)?;
                Some((e, EdgePath::between(from, to, self.node_radius)))
            })
            .collect()
    }
}
