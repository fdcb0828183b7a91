//! A* search over the world lattice.

use log::{debug, trace};
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::core::{Cell, WorldPoint};
use crate::grid::GridAdapter;
use crate::world::World;
use crate::Path;

use super::simplify::{path_length, simplify_path};
use super::types::{OpenEntry, PlannerConfig, SearchNode};

/// 8-connected A* planner.
///
/// Each query is self-contained: the planner borrows the world read-only and
/// keeps no state between queries, so independent planners can run
/// concurrently over the same world.
pub struct AStarPlanner<'a> {
    world: &'a World,
    config: PlannerConfig,
}

impl<'a> AStarPlanner<'a> {
    /// Create a planner over a world.
    pub fn new(world: &'a World, config: PlannerConfig) -> Self {
        Self { world, config }
    }

    /// Create with default configuration.
    pub fn with_defaults(world: &'a World) -> Self {
        Self::new(world, PlannerConfig::default())
    }

    /// Find a simplified world-space path from `start` to `goal`.
    ///
    /// Returns `None` when no route exists within the expansion budget. That
    /// is a normal outcome, not an error: callers decide whether to try a
    /// different target or report infeasibility. Out-of-range endpoints are
    /// not rejected up front; the search simply fails to expand past them.
    pub fn find_path(&self, start: WorldPoint, goal: WorldPoint) -> Option<Path> {
        let grid = GridAdapter::new(self.world);
        let cells = self.search(&grid, grid.to_cell(start), grid.to_cell(goal))?;

        let raw: Vec<WorldPoint> = cells.iter().map(|c| grid.cell_center(*c)).collect();
        let points = if self.config.simplify {
            simplify_path(self.world, &raw, self.config.los_samples)
        } else {
            raw
        };
        let length = path_length(&points);

        Some(Path { points, length })
    }

    /// Find the raw lattice path, before simplification.
    ///
    /// Consecutive cells always differ by one of the 8 neighbor offsets.
    pub fn find_cell_path(&self, start: WorldPoint, goal: WorldPoint) -> Option<Vec<Cell>> {
        let grid = GridAdapter::new(self.world);
        self.search(&grid, grid.to_cell(start), grid.to_cell(goal))
    }

    /// Run the search between two cells.
    fn search(&self, grid: &GridAdapter, start: Cell, goal: Cell) -> Option<Vec<Cell>> {
        trace!(
            "[astar] query: start=({},{}) goal=({},{})",
            start.x,
            start.y,
            goal.x,
            goal.y
        );

        // Arena of generated nodes; parent indices form a tree rooted at the
        // start node.
        let mut arena: Vec<SearchNode> = Vec::new();
        let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
        let mut closed: HashSet<Cell> = HashSet::new();
        // Best g per cell pushed to the open set; turns the membership scan
        // into an O(1) lookup with identical accept/reject semantics.
        let mut best_g: HashMap<Cell, f32> = HashMap::new();

        // The start cell is pushed unchecked: a query may begin at an edge or
        // blocked cell and will naturally exhaust if nothing is expandable.
        arena.push(SearchNode {
            cell: start,
            g: 0.0,
            parent: None,
        });
        open.push(OpenEntry {
            f: heuristic(start, goal),
            node: 0,
        });
        best_g.insert(start, 0.0);

        let mut iterations = 0usize;

        while let Some(entry) = open.pop() {
            iterations += 1;
            if iterations > self.config.max_iterations {
                debug!(
                    "[astar] expansion budget exhausted after {} iterations",
                    self.config.max_iterations
                );
                return None;
            }

            let (cell, g) = {
                let node = &arena[entry.node];
                (node.cell, node.g)
            };

            // Stale duplicate of a cell expanded earlier via a cheaper
            // entry. Closed cells are never reopened, even if a cheaper
            // route shows up later.
            if !closed.insert(cell) {
                continue;
            }

            if cell == goal {
                let cells = reconstruct(&arena, entry.node);
                trace!(
                    "[astar] found: {} cells, cost={:.2}, expanded={}",
                    cells.len(),
                    g,
                    iterations
                );
                return Some(cells);
            }

            for (i, neighbor) in cell.neighbors_8().into_iter().enumerate() {
                if closed.contains(&neighbor) {
                    continue;
                }
                if !grid.is_cell_free(neighbor) {
                    continue;
                }

                // Cardinals cost 1, diagonals sqrt(2)-ish, so the move
                // pricing matches the Euclidean heuristic.
                let step = if i >= 4 { self.config.diagonal_cost } else { 1.0 };
                let tentative = g + step;

                // Keep only strict improvements over the best open entry
                // known for this cell.
                let known = best_g.get(&neighbor).copied().unwrap_or(f32::INFINITY);
                if tentative >= known {
                    continue;
                }
                best_g.insert(neighbor, tentative);

                arena.push(SearchNode {
                    cell: neighbor,
                    g: tentative,
                    parent: Some(entry.node),
                });
                open.push(OpenEntry {
                    f: tentative + heuristic(neighbor, goal),
                    node: arena.len() - 1,
                });
            }
        }

        debug!("[astar] open set exhausted after {} expansions", iterations);
        None
    }
}

/// Euclidean cell distance to the goal.
#[inline]
fn heuristic(from: Cell, to: Cell) -> f32 {
    from.euclidean_distance(&to)
}

/// Walk parent indices back to the root and reverse into start-to-goal order.
fn reconstruct(arena: &[SearchNode], goal_idx: usize) -> Vec<Cell> {
    let mut cells = Vec::new();
    let mut current = Some(goal_idx);

    while let Some(idx) = current {
        let node = &arena[idx];
        cells.push(node.cell);
        current = node.parent;
    }

    cells.reverse();
    cells
}
