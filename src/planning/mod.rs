//! Path planning over the world lattice.
//!
//! The planner snaps continuous start and goal positions onto the grid, runs
//! an 8-connected A* search against the cell occupancy oracle, converts the
//! resulting cells back to their continuous centers, and collapses redundant
//! waypoints with a line-of-sight pass.
//!
//! ```rust
//! use marga_nav::core::WorldPoint;
//! use marga_nav::planning::{AStarPlanner, PlannerConfig};
//! use marga_nav::World;
//!
//! let world = World::simple_course();
//! let planner = AStarPlanner::new(&world, PlannerConfig::default());
//!
//! match planner.find_path(WorldPoint::new(100.0, 100.0), WorldPoint::new(650.0, 450.0)) {
//!     Some(path) => println!("{} waypoints, {:.1} units", path.points.len(), path.length),
//!     None => println!("no route"),
//! }
//! ```
//!
//! "No route" is a normal result, not an error; see
//! [`AStarPlanner::find_path`].

mod planner;
mod simplify;
mod types;

pub use planner::AStarPlanner;
pub use simplify::{line_is_clear, path_length, simplify_path};
pub use types::{PlannerConfig, DIAGONAL_COST, LOS_SAMPLES, MAX_ITERATIONS};

use crate::core::WorldPoint;
use crate::world::World;
use crate::Path;

/// Quick path query with default configuration.
pub fn find_path(world: &World, start: WorldPoint, goal: WorldPoint) -> Option<Path> {
    AStarPlanner::with_defaults(world).find_path(start, goal)
}

/// Check whether any route exists with default configuration.
pub fn path_exists(world: &World, start: WorldPoint, goal: WorldPoint) -> bool {
    find_path(world, start, goal).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_path_convenience() {
        let world = World::open_course();

        let path = find_path(
            &world,
            WorldPoint::new(100.0, 100.0),
            WorldPoint::new(650.0, 450.0),
        );
        assert!(path.is_some());
        assert!(path_exists(
            &world,
            WorldPoint::new(100.0, 100.0),
            WorldPoint::new(650.0, 450.0)
        ));
    }
}
