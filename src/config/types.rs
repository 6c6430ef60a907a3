use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { page_size: default_page_size() }
    }
}

/// Weights for the recommendation score.
///
/// `combined = edge_weight * explicit + similarity_weight * implicit + recency`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendConfig {
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default = "default_one")]
    pub edge_weight: f64,
    #[serde(default = "default_one")]
    pub similarity_weight: f64,
    /// Base score of a candidate the focal resource links to.
    #[serde(default = "default_link_score")]
    pub link_score: f64,
    #[serde(default = "default_one")]
    pub reciprocal_factor: f64,
    #[serde(default = "default_one_way")]
    pub one_way_factor: f64,
    #[serde(default = "default_one")]
    pub topic_weight: f64,
    #[serde(default = "default_religion_bonus")]
    pub religion_bonus: f64,
    #[serde(default = "default_type_bonus")]
    pub type_bonus: f64,
    #[serde(default = "default_recency_weight")]
    pub recency_weight: f64,
    #[serde(default = "default_recency_window")]
    pub recency_window: usize,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            edge_weight: default_one(),
            similarity_weight: default_one(),
            link_score: default_link_score(),
            reciprocal_factor: default_one(),
            one_way_factor: default_one_way(),
            topic_weight: default_one(),
            religion_bonus: default_religion_bonus(),
            type_bonus: default_type_bonus(),
            recency_weight: default_recency_weight(),
            recency_window: default_recency_window(),
        }
    }
}

/// Force simulation parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default = "default_link_distance")]
    pub link_distance: f64,
    /// Negative values repel.
    #[serde(default = "default_charge")]
    pub charge_strength: f64,
    #[serde(default = "default_center_strength")]
    pub center_strength: f64,
    #[serde(default = "default_collision_radius")]
    pub collision_radius: f64,
    #[serde(default = "default_alpha_min")]
    pub alpha_min: f64,
    #[serde(default = "default_alpha_decay")]
    pub alpha_decay: f64,
    #[serde(default = "default_velocity_decay")]
    pub velocity_decay: f64,
    #[serde(default = "default_energy_threshold")]
    pub energy_threshold: f64,
    #[serde(default = "default_reheat_alpha")]
    pub reheat_alpha: f64,
    #[serde(default = "default_restart_alpha")]
    pub restart_alpha: f64,
    #[serde(default = "default_reheat_depth")]
    pub reheat_depth: usize,
    #[serde(default = "default_initial_radius")]
    pub initial_radius: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            link_distance: default_link_distance(),
            charge_strength: default_charge(),
            center_strength: default_center_strength(),
            collision_radius: default_collision_radius(),
            alpha_min: default_alpha_min(),
            alpha_decay: default_alpha_decay(),
            velocity_decay: default_velocity_decay(),
            energy_threshold: default_energy_threshold(),
            reheat_alpha: default_reheat_alpha(),
            restart_alpha: default_restart_alpha(),
            reheat_depth: default_reheat_depth(),
            initial_radius: default_initial_radius(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewportConfig {
    #[serde(default = "default_min_scale")]
    pub min_scale: f64,
    #[serde(default = "default_max_scale")]
    pub max_scale: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            min_scale: default_min_scale(),
            max_scale: default_max_scale(),
        }
    }
}

const fn default_page_size() -> usize { 12 }
const fn default_limit() -> usize { 6 }
const fn default_one() -> f64 { 1.0 }
const fn default_link_score() -> f64 { 10.0 }
const fn default_one_way() -> f64 { 0.5 }
const fn default_religion_bonus() -> f64 { 1.5 }
const fn default_type_bonus() -> f64 { 0.5 }
const fn default_recency_weight() -> f64 { 0.25 }
const fn default_recency_window() -> usize { 5 }

const fn default_width() -> f64 { 960.0 }
const fn default_height() -> f64 { 600.0 }
const fn default_link_distance() -> f64 { 90.0 }
const fn default_charge() -> f64 { -240.0 }
const fn default_center_strength() -> f64 { 0.05 }
const fn default_collision_radius() -> f64 { 18.0 }
const fn default_alpha_min() -> f64 { 0.001 }
// Matches a 300-step cool-down from alpha 1.0 to alpha_min.
const fn default_alpha_decay() -> f64 { 0.0228 }
const fn default_velocity_decay() -> f64 { 0.4 }
const fn default_energy_threshold() -> f64 { 0.01 }
const fn default_reheat_alpha() -> f64 { 0.3 }
const fn default_restart_alpha() -> f64 { 0.6 }
const fn default_reheat_depth() -> usize { 1 }
const fn default_initial_radius() -> f64 { 120.0 }

const fn default_min_scale() -> f64 { 0.5 }
const fn default_max_scale() -> f64 { 2.0 }

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SeekerToml {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub recommend: RecommendConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub viewport: ViewportConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub search: SearchConfig,
    pub recommend: RecommendConfig,
    pub layout: LayoutConfig,
    pub viewport: ViewportConfig,
}
