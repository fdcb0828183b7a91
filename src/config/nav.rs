//! Top-level configuration and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::planning::PlannerConfig;
use crate::world::World;

use super::error::ConfigLoadError;
use super::sections::{FollowerSection, PlannerSection, SmoothingSection, WorldSection};

/// Full navigation configuration loaded from YAML.
///
/// Every section and field is optional in the file; missing values fall back
/// to the documented defaults.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct NavConfig {
    /// World extents and lattice settings.
    #[serde(default)]
    pub world: WorldSection,

    /// A* search settings.
    #[serde(default)]
    pub planner: PlannerSection,

    /// Waypoint simplification settings.
    #[serde(default)]
    pub smoothing: SmoothingSection,

    /// Path follower settings.
    #[serde(default)]
    pub follower: FollowerSection,
}

impl NavConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from the default config path (configs/nav.yaml), falling back to
    /// defaults when the file does not exist.
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/nav.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Build an empty world from the world section.
    pub fn to_world(&self) -> World {
        World::with_margin(
            self.world.width,
            self.world.height,
            self.world.cell_size,
            self.world.safety_margin,
        )
    }

    /// Build a planner configuration from the planner and smoothing sections.
    pub fn to_planner_config(&self) -> PlannerConfig {
        PlannerConfig {
            diagonal_cost: self.planner.diagonal_cost,
            max_iterations: self.planner.max_iterations,
            simplify: self.smoothing.enabled,
            los_samples: self.smoothing.los_samples,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NavConfig::default();
        assert_eq!(config.world.width, 800.0);
        assert_eq!(config.world.cell_size, 20.0);
        assert_eq!(config.planner.max_iterations, 10_000);
        assert_eq!(config.follower.speed, 3.0);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = NavConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed = NavConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed.world.safety_margin, config.world.safety_margin);
        assert_eq!(parsed.smoothing.los_samples, config.smoothing.los_samples);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = NavConfig::from_yaml("planner:\n  max_iterations: 500\n").unwrap();
        assert_eq!(config.planner.max_iterations, 500);
        // Untouched sections and fields keep their defaults
        assert_eq!(config.planner.diagonal_cost, 1.414);
        assert_eq!(config.world.width, 800.0);
        assert!(config.smoothing.enabled);
    }

    #[test]
    fn test_bad_yaml_is_a_parse_error() {
        let err = NavConfig::from_yaml("planner: [not a map").unwrap_err();
        assert!(matches!(err, ConfigLoadError::Parse(_)));
    }

    #[test]
    fn test_conversions() {
        let config = NavConfig::from_yaml("world:\n  safety_margin: 5.0\n").unwrap();

        let world = config.to_world();
        assert_eq!(world.margin(), 5.0);
        assert!(world.obstacles().is_empty());

        let planner = config.to_planner_config();
        assert_eq!(planner.max_iterations, 10_000);
        assert!(planner.simplify);
    }
}
