// src/graph/paths.rs
//! Curved directed edge geometry with arrowheads.
//!
//! The control point is offset to the left of the travel direction, so
//! A->B and B->A bow to opposite sides and never coincide.

use serde::Serialize;

use super::geometry::Vec2;

const CURVATURE: f64 = 0.2;
const ARROW_LENGTH: f64 = 8.0;
const ARROW_HALF_WIDTH: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgePath {
    pub start: Vec2,
    pub control: Vec2,
    pub end: Vec2,
    /// Tip, left barb, right barb.
    pub arrow: [Vec2; 3],
}

impl EdgePath {
    /// Quadratic curve from `from` to `to`, trimmed by `node_radius` at both ends.
    #[must_use]
    pub fn between(from: Vec2, to: Vec2, node_radius: f64) -> Self {
        let chord = to - from;
        let length = chord.length();
        let control = from.lerp(to, 0.5) + chord.perp() * CURVATURE;

        let start = from + (control - from).normalized() * node_radius.min(length / 2.0);
        let end = to + (control - to).normalized() * node_radius.min(length / 2.0);

        let heading = (end - control).normalized();
        let base = end - heading * ARROW_LENGTH;
        let side = heading.perp() * ARROW_HALF_WIDTH;

        Self {
            start,
            control,
            end,
            arrow: [end, base + side, base - side],
        }
    }

    /// SVG path data for the curve.
    #[must_use]
    pub fn to_svg_d(&self) -> String {
        format!(
            "M{:.2},{:.2} Q{:.2},{:.2} {:.2},{:.2}",
            self.start.x, self.start.y, self.control.x, self.control.y, self.end.x, self.end.y
        )
    }

    /// SVG polygon points for the arrowhead.
    #[must_use]
    pub fn arrow_points(&self) -> String {
        self.arrow
            .iter()
            .map(|p| format!("{:.2},{:.2}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
