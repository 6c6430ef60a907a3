// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::io::CONFIG_FILE;
pub use self::types::{
    Config, LayoutConfig, RecommendConfig, SearchConfig, SeekerToml, ViewportConfig,
};

use std::path::Path;

use crate::error::{Result, SeekerError};

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new config and applies `seeker.toml` from the working directory.
    ///
    /// # Errors
    /// Returns error if the file exists but is malformed or invalid.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Creates a new config and applies the TOML file at `path`, if present.
    ///
    /// # Errors
    /// Returns error if the file exists but is malformed or invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = Self::new();
        io::load_toml_config(&mut config, path)?;
        config.validate()?;
        Ok(config)
    }

    /// Applies TOML content on top of the current settings.
    ///
    /// # Errors
    /// Returns error on malformed TOML.
    pub fn parse_toml(&mut self, content: &str) -> Result<()> {
        io::parse_toml(self, content)
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns `InvalidConfig` naming the first offending setting.
    pub fn validate(&self) -> Result<()> {
        let bad = |msg: &str| Err(SeekerError::InvalidConfig(msg.to_string()));
        let layout = &self.layout;
        let view = &self.viewport;

        if self.search.page_size == 0 {
            return bad("search.page_size must be at least 1");
        }
        if layout.width <= 0.0 || layout.height <= 0.0 {
            return bad("layout width and height must be positive");
        }
        if !(0.0..1.0).contains(&layout.alpha_decay) || layout.alpha_decay == 0.0 {
            return bad("layout.alpha_decay must be in (0, 1)");
        }
        if !(0.0..1.0).contains(&layout.velocity_decay) {
            return bad("layout.velocity_decay must be in [0, 1)");
        }
        if layout.collision_radius < 0.0 || layout.link_distance <= 0.0 {
            return bad("layout distances must be positive");
        }
        let positive = |x: f64| x.is_finite() && x > 0.0;
        if !positive(layout.alpha_min) || layout.alpha_min >= 1.0 {
            return bad("layout.alpha_min must be in (0, 1)");
        }
        if !positive(layout.energy_threshold) || !positive(layout.reheat_alpha) {
            return bad("layout.energy_threshold and layout.reheat_alpha must be positive");
        }
        let rec = &self.recommend;
        let weights = [
            rec.edge_weight,
            rec.similarity_weight,
            rec.link_score,
            rec.reciprocal_factor,
            rec.one_way_factor,
            rec.topic_weight,
            rec.religion_bonus,
            rec.type_bonus,
            rec.recency_weight,
        ];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return bad("recommend weights must be finite and non-negative");
        }
        if view.min_scale <= 0.0 || view.min_scale > view.max_scale {
            return bad("viewport.min_scale must be positive and not above max_scale");
        }
        Ok(())
    }

    /// Saves the current configuration to `path`.
    ///
    /// # Errors
    /// Returns error if file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        io::save_to_file(self, path)
    }
}
