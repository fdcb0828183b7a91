//! Continuous-to-lattice mapping and the cell occupancy oracle.
//!
//! The adapter is a leaf component: it holds no state beyond the resolution
//! it reads from the [`World`], and every cell-validity decision it makes is
//! derived from the world's point oracle evaluated at the cell center.

use crate::core::{Cell, WorldPoint};
use crate::world::World;

/// Maps continuous world coordinates onto the search lattice and back.
#[derive(Clone, Copy, Debug)]
pub struct GridAdapter<'a> {
    world: &'a World,
}

impl<'a> GridAdapter<'a> {
    /// Create an adapter over a world.
    pub fn new(world: &'a World) -> Self {
        Self { world }
    }

    /// Lattice resolution (side length of one cell).
    #[inline]
    pub fn resolution(&self) -> f32 {
        self.world.cell_size()
    }

    /// Number of lattice columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        (self.world.width() / self.resolution()) as i32
    }

    /// Number of lattice rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        (self.world.height() / self.resolution()) as i32
    }

    /// Snap a continuous point to its containing cell.
    ///
    /// Total for finite input; points outside the world map to out-of-bounds
    /// cells, which the planner rejects separately via [`GridAdapter::contains`].
    #[inline]
    pub fn to_cell(&self, point: WorldPoint) -> Cell {
        Cell::new(
            (point.x / self.resolution()).floor() as i32,
            (point.y / self.resolution()).floor() as i32,
        )
    }

    /// The continuous center of a cell.
    ///
    /// Every accepted cell maps to its center, so the sample handed to the
    /// validity oracle is always well inside the cell.
    #[inline]
    pub fn cell_center(&self, cell: Cell) -> WorldPoint {
        let res = self.resolution();
        WorldPoint::new(
            cell.x as f32 * res + res / 2.0,
            cell.y as f32 * res + res / 2.0,
        )
    }

    /// Bounds test against `[0, cols) x [0, rows)`.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.cols() && cell.y >= 0 && cell.y < self.rows()
    }

    /// Occupancy oracle: the cell is in bounds and its center passes the
    /// world's validity check at the configured margin.
    #[inline]
    pub fn is_cell_free(&self, cell: Cell) -> bool {
        self.contains(cell) && self.world.is_position_clear(self.cell_center(cell))
    }
}
