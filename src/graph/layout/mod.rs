// src/graph/layout/mod.rs
//! Force-directed layout: repulsion, springs, centering and collision,
//! stepped cooperatively until it cools.

pub mod forces;
pub mod seed;
pub mod simulation;

pub use seed::seed_position;
pub use simulation::{SimNode, Simulation, StepOutcome};
