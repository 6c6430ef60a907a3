// src/graph/layout/seed.rs
//! Deterministic starting positions derived from node ids.

use sha2::{Digest, Sha256};

use crate::graph::geometry::Vec2;

/// Stable point inside a disc of `radius` around `center`, chosen by
/// hashing `id`. Equal ids always land on the same spot.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn seed_position(id: &str, center: Vec2, radius: f64) -> Vec2 {
    let digest = Sha256::digest(id.as_bytes());
    let mut angle_bytes = [0u8; 8];
    let mut dist_bytes = [0u8; 8];
    angle_bytes.copy_from_slice(&digest[..8]);
    dist_bytes.copy_from_slice(&digest[8..16]);

    let angle = unit(u64::from_le_bytes(angle_bytes)) * std::f64::consts::TAU;
    // sqrt keeps the points uniform over the disc area
    let dist = unit(u64::from_le_bytes(dist_bytes)).sqrt() * radius;

    center + Vec2::new(angle.cos(), angle.sin()) * dist
}

#[allow(clippy::cast_precision_loss)]
fn unit(bits: u64) -> f64 {
    (bits >> 11) as f64 / (1u64 << 53) as f64
}
