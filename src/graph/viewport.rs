// src/graph/viewport.rs
//! Pan/zoom view transform. Never touches simulated positions.

use serde::Serialize;

use super::geometry::Vec2;
use crate::config::ViewportConfig;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    scale: f64,
    translate: Vec2,
    min_scale: f64,
    max_scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(&ViewportConfig::default())
    }
}

impl Viewport {
    #[must_use]
    pub fn new(config: &ViewportConfig) -> Self {
        Self {
            scale: 1.0_f64.clamp(config.min_scale, config.max_scale),
            translate: Vec2::ZERO,
            min_scale: config.min_scale,
            max_scale: config.max_scale,
        }
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn translate(&self) -> Vec2 {
        self.translate
    }

    /// Shifts the view by a screen-space delta.
    pub fn pan(&mut self, delta: Vec2) {
        if delta.is_finite() {
            self.translate += delta;
        }
    }

    /// Multiplies the scale by `factor` (clamped), keeping the world point
    /// under `focus` (screen space) fixed on screen.
    pub fn zoom_at(&mut self, factor: f64, focus: Vec2) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        let anchor = self.to_world(focus);
        self.scale = (self.scale * factor).clamp(self.min_scale, self.max_scale);
        self.translate = focus - anchor * self.scale;
    }

    pub fn reset(&mut self) {
        self.scale = 1.0_f64.clamp(self.min_scale, self.max_scale);
        self.translate = Vec2::ZERO;
    }

    #[must_use]
    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        world * self.scale + self.translate
    }

    #[must_use]
    pub fn to_world(&self, screen: Vec2) -> Vec2 {
        (screen - self.translate) * (1.0 / self.scale)
    }
}
