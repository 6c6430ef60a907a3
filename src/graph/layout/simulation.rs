// src/graph/layout/simulation.rs
//! Incrementally stepped force simulation over an arena of node records.

use std::collections::{HashMap, HashSet, VecDeque};

use serde::Serialize;

use super::forces::{self, Link};
use super::seed::seed_position;
use crate::config::LayoutConfig;
use crate::graph::builder::RelationshipGraph;
use crate::graph::geometry::Vec2;

/// Simulated state of one node. `pinned` overrides the forces while set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimNode {
    pub id: String,
    pub position: Vec2,
    pub velocity: Vec2,
    pub pinned: Option<Vec2>,
    #[serde(skip)]
    seed: Vec2,
}

impl SimNode {
    #[must_use]
    pub fn new(id: String, position: Vec2) -> Self {
        Self {
            id,
            position,
            velocity: Vec2::ZERO,
            pinned: None,
            seed: position,
        }
    }
}

/// What a single [`Simulation::step`] call did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// Forces were applied; carries the resulting kinetic energy.
    Moved { energy: f64 },
    /// Cooled down; nothing to do until reheated.
    Idle,
    /// Halted by [`Simulation::stop`].
    Stopped,
}

pub struct Simulation {
    nodes: Vec<SimNode>,
    index: HashMap<String, usize>,
    adjacency: Vec<Vec<usize>>,
    links: Vec<Link>,
    alpha: f64,
    alpha_target: f64,
    running: bool,
    cooled: bool,
    /// Nodes allowed to move while a local reheat is in effect.
    hot: Option<HashSet<usize>>,
    steps: usize,
    config: LayoutConfig,
}

impl Simulation {
    /// Seeds every graph node and starts hot (alpha 1).
    #[must_use]
    pub fn new(graph: &RelationshipGraph, config: LayoutConfig) -> Self {
        let center = center_of(&config);
        let nodes = graph
            .nodes
            .iter()
            .map(|n| SimNode::new(n.id.clone(), seed_position(&n.id, center, config.initial_radius)))
            .collect();

        let mut sim = Self {
            nodes,
            index: HashMap::new(),
            adjacency: Vec::new(),
            links: Vec::new(),
            alpha: 1.0,
            alpha_target: 0.0,
            running: true,
            cooled: false,
            hot: None,
            steps: 0,
            config,
        };
        sim.rebuild_topology(graph);
        sim
    }

    /// Adopts a rebuilt graph: known nodes keep their positions, new nodes
    /// are seeded, missing ones dropped, and the whole layout re-stabilizes.
    pub fn sync(&mut self, graph: &RelationshipGraph) {
        let center = center_of(&self.config);
        let radius = self.config.initial_radius;
        let mut previous: HashMap<String, SimNode> =
            self.nodes.drain(..).map(|n| (n.id.clone(), n)).collect();

        self.nodes = graph
            .nodes
            .iter()
            .map(|n| {
                previous
                    .remove(&n.id)
                    .unwrap_or_else(|| SimNode::new(n.id.clone(), seed_position(&n.id, center, radius)))
            })
            .collect();

        self.rebuild_topology(graph);
        self.restart();
    }

    /// Advances one tick. Cheap enough to call once per animation frame.
    pub fn step(&mut self) -> StepOutcome {
        if !self.running {
            return StepOutcome::Stopped;
        }
        if self.cooled {
            return StepOutcome::Idle;
        }

        self.alpha += (self.alpha_target - self.alpha) * self.config.alpha_decay;
        self.apply_forces();
        self.integrate();
        self.recover_non_finite();
        self.steps += 1;

        let energy = self.kinetic_energy();
        let settled = self.alpha < self.config.alpha_min
            || (self.alpha_target == 0.0 && energy < self.config.energy_threshold);
        if settled {
            self.cool();
        }
        StepOutcome::Moved { energy }
    }

    /// Steps until cool or `max_steps` is reached. Returns steps taken.
    pub fn run_until_cool(&mut self, max_steps: usize) -> usize {
        let mut taken = 0;
        while taken < max_steps {
            match self.step() {
                StepOutcome::Moved { .. } => taken += 1,
                StepOutcome::Idle | StepOutcome::Stopped => break,
            }
        }
        taken
    }

    /// Pins `id` where it is and reheats its neighbourhood.
    /// Returns false for an unknown id.
    pub fn drag_start(&mut self, id: &str) -> bool {
        let Some(i) = self.index.get(id).copied() else {
            return false;
        };
        let node = &mut self.nodes[i];
        node.pinned = Some(node.position);
        node.velocity = Vec2::ZERO;
        self.reheat_around(i);
        true
    }

    /// Moves a dragged node. The pin follows the pointer.
    pub fn drag_to(&mut self, id: &str, position: Vec2) -> bool {
        let Some(i) = self.index.get(id).copied() else {
            return false;
        };
        if !position.is_finite() {
            return false;
        }
        let node = &mut self.nodes[i];
        node.pinned = Some(position);
        node.position = position;
        self.cooled = false;
        true
    }

    /// Releases the pin; the neighbourhood then cools on its own.
    pub fn drag_end(&mut self, id: &str) -> bool {
        let Some(i) = self.index.get(id).copied() else {
            return false;
        };
        self.nodes[i].pinned = None;
        if self.nodes.iter().all(|n| n.pinned.is_none()) {
            self.alpha_target = 0.0;
        }
        true
    }

    /// Halts stepping; positions are kept.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Resumes stepping after [`Simulation::stop`].
    pub fn resume(&mut self) {
        self.running = true;
    }

    /// Global reheat: every node moves again from `restart_alpha`.
    pub fn restart(&mut self) {
        self.hot = None;
        self.alpha = self.alpha.max(self.config.restart_alpha);
        self.cooled = false;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn is_cool(&self) -> bool {
        self.cooled
    }

    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    #[must_use]
    pub fn nodes(&self) -> &[SimNode] {
        &self.nodes
    }

    #[must_use]
    pub fn position(&self, id: &str) -> Option<Vec2> {
        self.index.get(id).and_then(|&i| self.nodes.get(i)).map(|n| n.position)
    }

    #[must_use]
    pub fn positions(&self) -> Vec<(String, Vec2)> {
        self.nodes.iter().map(|n| (n.id.clone(), n.position)).collect()
    }

    #[must_use]
    pub fn kinetic_energy(&self) -> f64 {
        self.nodes.iter().map(|n| n.velocity.length_squared()).sum()
    }

    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    fn rebuild_topology(&mut self, graph: &RelationshipGraph) {
        self.index = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.id.clone(), i))
            .collect();

        let pairs: Vec<(usize, usize)> = graph
            .edges
            .iter()
            .filter_map(|e| Some((*self.index.get(&e.source)?, *self.index.get(&e.target)?)))
            .collect();

        self.adjacency = vec![Vec::new(); self.nodes.len()];
        for &(s, t) in &pairs {
            self.adjacency[s].push(t);
            self.adjacency[t].push(s);
        }
        self.links = Link::build(&pairs, self.nodes.len());
    }

    fn apply_forces(&mut self) {
        let c = &self.config;
        let alpha = self.alpha;
        forces::many_body(&mut self.nodes, c.charge_strength, alpha);
        forces::springs(&mut self.nodes, &self.links, c.link_distance, alpha);
        forces::centering(&mut self.nodes, center_of(c), c.center_strength, alpha);
        forces::collide(&mut self.nodes, c.collision_radius);
    }

    fn integrate(&mut self) {
        let damping = 1.0 - self.config.velocity_decay;
        for (i, node) in self.nodes.iter_mut().enumerate() {
            if let Some(pin) = node.pinned {
                node.position = pin;
                node.velocity = Vec2::ZERO;
                continue;
            }
            let frozen = self.hot.as_ref().is_some_and(|hot| !hot.contains(&i));
            if frozen {
                node.velocity = Vec2::ZERO;
                continue;
            }
            node.velocity = node.velocity * damping;
            node.position += node.velocity;
        }
    }

    fn recover_non_finite(&mut self) {
        for node in &mut self.nodes {
            if node.position.is_finite() && node.velocity.is_finite() {
                continue;
            }
            tracing::warn!(id = %node.id, "non-finite layout position, reseeding node");
            node.position = node.seed;
            node.velocity = Vec2::ZERO;
        }
    }

    fn cool(&mut self) {
        self.cooled = true;
        self.hot = None;
        for node in &mut self.nodes {
            node.velocity = Vec2::ZERO;
        }
        tracing::debug!(steps = self.steps, alpha = self.alpha, "layout cooled");
    }

    /// Local reheat: only nodes within `reheat_depth` hops of `origin` move.
    fn reheat_around(&mut self, origin: usize) {
        let region = self.neighbourhood(origin, self.config.reheat_depth);
        if self.cooled || self.hot.is_some() {
            self.hot.get_or_insert_with(HashSet::new).extend(region);
        }
        self.alpha_target = self.config.reheat_alpha;
        self.alpha = self.alpha.max(self.config.reheat_alpha);
        self.cooled = false;
    }

    fn neighbourhood(&self, origin: usize, depth: usize) -> HashSet<usize> {
        let mut seen = HashSet::from([origin]);
        let mut queue = VecDeque::from([(origin, 0usize)]);
        while let Some((node, d)) = queue.pop_front() {
            if d == depth {
                continue;
            }
            for &next in self.adjacency.get(node).into_iter().flatten() {
                if seen.insert(next) {
                    queue.push_back((next, d + 1));
                }
            }
        }
        seen
    }
}

fn center_of(config: &LayoutConfig) -> Vec2 {
    Vec2::new(config.width / 2.0, config.height / 2.0)
}
