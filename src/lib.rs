//! # Marga-Nav: Grid Path Planning for 2D Worlds
//!
//! A path planning library for agents moving on a continuous 2D plane with
//! rectangular obstacles. A continuous world is discretized onto a fixed
//! lattice, an 8-connected A* search finds a cell route, and a line-of-sight
//! pass collapses the staircase into the few waypoints that matter.
//!
//! ## Quick Start
//!
//! ```rust
//! use marga_nav::core::WorldPoint;
//! use marga_nav::{planning, World};
//!
//! let mut world = World::new(800.0, 600.0, 20.0);
//! world.add_obstacle(350.0, 60.0, 40.0, 300.0);
//!
//! let start = WorldPoint::new(100.0, 100.0);
//! let goal = WorldPoint::new(650.0, 100.0);
//!
//! match planning::find_path(&world, start, goal) {
//!     Some(path) => println!("{} waypoints, {:.1} units", path.points.len(), path.length),
//!     None => println!("no route within budget"),
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: coordinate types ([`core::WorldPoint`], [`core::Cell`])
//! - [`world`]: obstacle geometry and the point-validity oracle
//! - [`grid`]: continuous ↔ lattice mapping and the cell occupancy oracle
//! - [`planning`]: A* search and waypoint simplification
//! - [`follower`]: frame-stepped consumption of planned paths
//! - [`config`]: YAML configuration
//!
//! ## Design notes
//!
//! Queries are synchronous and self-contained: one call runs to completion
//! under a fixed expansion budget, and planners borrow the world read-only,
//! so independent queries may run concurrently as long as nothing mutates
//! the obstacle set meanwhile. "No path" is an ordinary result (`None`),
//! never an error; a query whose endpoints are outside the world or inside
//! an obstacle is allowed to run and simply exhausts.

pub mod config;
pub mod core;
pub mod follower;
pub mod grid;
pub mod planning;
pub mod world;

pub use config::{ConfigLoadError, NavConfig};
pub use follower::{FollowState, PathFollower};
pub use grid::GridAdapter;
pub use planning::{AStarPlanner, PlannerConfig};
pub use world::{Obstacle, World, DEFAULT_MARGIN};

use crate::core::WorldPoint;

/// A planned path through the world.
///
/// Waypoints run from start to goal inclusive; the path is immutable once
/// returned by the planner.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    /// Waypoints along the path.
    pub points: Vec<WorldPoint>,
    /// Total polyline length in world units.
    pub length: f32,
}

impl Path {
    /// Create a new empty path.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            length: 0.0,
        }
    }

    /// Check if the path has no waypoints.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Default for Path {
    fn default() -> Self {
        Self::new()
    }
}
