//! World model: rectangular obstacles and the point-validity oracle.
//!
//! The [`World`] owns the obstacle geometry and is the single point of truth
//! for "is this position usable". Everything else (the grid adapter, the
//! planner, the simplification pass) answers collision questions through it.

use serde::{Deserialize, Serialize};

use crate::core::WorldPoint;

/// Default clearance kept between the agent and obstacle edges or world
/// boundaries, in world units. The search treats positions as dimensionless
/// points; the margin keeps the agent's body clear of edges.
pub const DEFAULT_MARGIN: f32 = 15.0;

/// Axis-aligned rectangular obstacle, anchored at its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Obstacle {
    /// Create a new obstacle rectangle.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// True if `point` lies inside this rectangle inflated by `margin` on
    /// every side.
    #[inline]
    pub fn blocks(&self, point: WorldPoint, margin: f32) -> bool {
        point.x >= self.x - margin
            && point.x <= self.x + self.width + margin
            && point.y >= self.y - margin
            && point.y <= self.y + self.height + margin
    }
}

/// 2D world with continuous extents, a lattice resolution, and a set of
/// rectangular obstacles.
#[derive(Clone, Debug)]
pub struct World {
    /// World width in world units.
    width: f32,
    /// World height in world units.
    height: f32,
    /// Lattice resolution (side length of one grid cell).
    cell_size: f32,
    /// Clearance applied by the default validity oracle.
    margin: f32,
    /// Obstacle rectangles, scanned linearly by the validity oracle.
    obstacles: Vec<Obstacle>,
}

impl World {
    /// Create an empty world with the default safety margin.
    pub fn new(width: f32, height: f32, cell_size: f32) -> Self {
        Self::with_margin(width, height, cell_size, DEFAULT_MARGIN)
    }

    /// Create an empty world with an explicit safety margin.
    pub fn with_margin(width: f32, height: f32, cell_size: f32, margin: f32) -> Self {
        Self {
            width,
            height,
            cell_size,
            margin,
            obstacles: Vec::new(),
        }
    }

    /// World width in world units.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// World height in world units.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Lattice resolution.
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Clearance applied by [`World::is_position_clear`].
    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// Obstacle rectangles.
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Add an obstacle rectangle.
    pub fn add_obstacle(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.obstacles.push(Obstacle::new(x, y, width, height));
    }

    // =========================================================================
    // Validity oracle
    // =========================================================================

    /// Check a position against world boundaries and obstacles with an
    /// explicit clearance.
    ///
    /// False if `point` falls within `margin` of any world boundary, or
    /// within `margin` of any obstacle rectangle.
    pub fn is_position_valid(&self, point: WorldPoint, margin: f32) -> bool {
        if point.x < margin
            || point.x >= self.width - margin
            || point.y < margin
            || point.y >= self.height - margin
        {
            return false;
        }

        self.obstacles.iter().all(|o| !o.blocks(point, margin))
    }

    /// Check a position with the world's configured margin.
    ///
    /// This is the occupancy oracle the grid adapter and the simplification
    /// pass consult.
    #[inline]
    pub fn is_position_clear(&self, point: WorldPoint) -> bool {
        self.is_position_valid(point, self.margin)
    }

    // =========================================================================
    // Scenario layouts
    // =========================================================================

    /// 800x600 course with two obstacles leaving wide corridors.
    pub fn simple_course() -> Self {
        let mut world = World::new(800.0, 600.0, 20.0);
        world.add_obstacle(300.0, 200.0, 200.0, 30.0);
        world.add_obstacle(400.0, 350.0, 30.0, 150.0);
        world
    }

    /// 800x600 maze-like course with interlocking walls.
    pub fn maze_course() -> Self {
        let mut world = World::new(800.0, 600.0, 20.0);
        world.add_obstacle(150.0, 100.0, 500.0, 30.0);
        world.add_obstacle(150.0, 100.0, 30.0, 200.0);
        world.add_obstacle(150.0, 270.0, 350.0, 30.0);
        world.add_obstacle(470.0, 130.0, 30.0, 170.0);
        world.add_obstacle(470.0, 300.0, 180.0, 30.0);
        world.add_obstacle(620.0, 130.0, 30.0, 200.0);
        world.add_obstacle(300.0, 400.0, 350.0, 30.0);
        world
    }

    /// 800x600 mostly-open course with a single central block.
    pub fn open_course() -> Self {
        let mut world = World::new(800.0, 600.0, 20.0);
        world.add_obstacle(350.0, 250.0, 100.0, 100.0);
        world
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obstacle_blocks_with_margin() {
        let o = Obstacle::new(100.0, 100.0, 50.0, 50.0);

        assert!(o.blocks(WorldPoint::new(125.0, 125.0), 0.0)); // inside
        assert!(!o.blocks(WorldPoint::new(160.0, 125.0), 0.0)); // right of it
        assert!(o.blocks(WorldPoint::new(160.0, 125.0), 15.0)); // inside inflation
        assert!(!o.blocks(WorldPoint::new(170.0, 125.0), 15.0));
    }

    #[test]
    fn test_boundary_margin() {
        let world = World::new(800.0, 600.0, 20.0);

        assert!(world.is_position_valid(WorldPoint::new(400.0, 300.0), 15.0));
        assert!(!world.is_position_valid(WorldPoint::new(10.0, 300.0), 15.0));
        assert!(!world.is_position_valid(WorldPoint::new(790.0, 300.0), 15.0));
        assert!(!world.is_position_valid(WorldPoint::new(400.0, 590.0), 15.0));
    }

    #[test]
    fn test_obstacle_clearance() {
        let mut world = World::new(800.0, 600.0, 20.0);
        world.add_obstacle(300.0, 200.0, 200.0, 30.0);

        // Inside the rectangle
        assert!(!world.is_position_clear(WorldPoint::new(400.0, 215.0)));
        // Within the default 15-unit clearance above the top edge
        assert!(!world.is_position_clear(WorldPoint::new(400.0, 190.0)));
        // Clear of the inflated rectangle
        assert!(world.is_position_clear(WorldPoint::new(400.0, 180.0)));
    }

    #[test]
    fn test_scenario_courses() {
        assert_eq!(World::simple_course().obstacles().len(), 2);
        assert_eq!(World::maze_course().obstacles().len(), 7);
        assert_eq!(World::open_course().obstacles().len(), 1);

        // All courses share the same extents and resolution
        for world in [
            World::simple_course(),
            World::maze_course(),
            World::open_course(),
        ] {
            assert_eq!(world.width(), 800.0);
            assert_eq!(world.height(), 600.0);
            assert_eq!(world.cell_size(), 20.0);
        }
    }
}
