//! Configuration file sections.

use serde::{Deserialize, Serialize};

use super::defaults;

/// World extents and lattice settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorldSection {
    /// World width in world units.
    #[serde(default = "defaults::world_width")]
    pub width: f32,

    /// World height in world units.
    #[serde(default = "defaults::world_height")]
    pub height: f32,

    /// Lattice resolution.
    #[serde(default = "defaults::cell_size")]
    pub cell_size: f32,

    /// Clearance kept from obstacles and boundaries.
    #[serde(default = "defaults::safety_margin")]
    pub safety_margin: f32,
}

impl Default for WorldSection {
    fn default() -> Self {
        Self {
            width: defaults::world_width(),
            height: defaults::world_height(),
            cell_size: defaults::cell_size(),
            safety_margin: defaults::safety_margin(),
        }
    }
}

/// A* search settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlannerSection {
    /// Cost multiplier for diagonal moves.
    #[serde(default = "defaults::diagonal_cost")]
    pub diagonal_cost: f32,

    /// Maximum node expansions per query.
    #[serde(default = "defaults::max_iterations")]
    pub max_iterations: usize,
}

impl Default for PlannerSection {
    fn default() -> Self {
        Self {
            diagonal_cost: defaults::diagonal_cost(),
            max_iterations: defaults::max_iterations(),
        }
    }
}

/// Waypoint simplification settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SmoothingSection {
    /// Run the line-of-sight pass on found paths.
    #[serde(default = "defaults::enabled")]
    pub enabled: bool,

    /// Interpolation steps per line-of-sight check.
    #[serde(default = "defaults::los_samples")]
    pub los_samples: usize,
}

impl Default for SmoothingSection {
    fn default() -> Self {
        Self {
            enabled: defaults::enabled(),
            los_samples: defaults::los_samples(),
        }
    }
}

/// Path follower settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FollowerSection {
    /// Advance per frame in world units.
    #[serde(default = "defaults::speed")]
    pub speed: f32,

    /// Distance at which a target counts as reached.
    #[serde(default = "defaults::arrival_threshold")]
    pub arrival_threshold: f32,
}

impl Default for FollowerSection {
    fn default() -> Self {
        Self {
            speed: defaults::speed(),
            arrival_threshold: defaults::arrival_threshold(),
        }
    }
}
