//! Planner configuration and search bookkeeping types.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::core::Cell;

/// Cost of a diagonal lattice step, priced against the Euclidean heuristic.
pub const DIAGONAL_COST: f32 = 1.414;

/// Expansion budget per query; an infinite-loop guard, not a tuning knob.
pub const MAX_ITERATIONS: usize = 10_000;

/// Interpolation steps per line-of-sight check during simplification.
pub const LOS_SAMPLES: usize = 10;

/// A* planner configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Cost multiplier for diagonal moves.
    pub diagonal_cost: f32,
    /// Maximum node expansions before giving up. Kept as a step count, not a
    /// wall-clock timeout, so the same inputs always produce the same result.
    pub max_iterations: usize,
    /// Run the line-of-sight simplification pass on found paths.
    pub simplify: bool,
    /// Interpolation steps per line-of-sight check.
    pub los_samples: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            diagonal_cost: DIAGONAL_COST,
            max_iterations: MAX_ITERATIONS,
            simplify: true,
            los_samples: LOS_SAMPLES,
        }
    }
}

/// One generated node in the search arena.
///
/// `parent` is the arena index of the node that generated this one; the
/// indices form a tree rooted at the start node and are dropped with the
/// arena once a path has been reconstructed.
#[derive(Clone, Copy, Debug)]
pub(super) struct SearchNode {
    pub cell: Cell,
    pub g: f32,
    pub parent: Option<usize>,
}

/// Open-set heap entry: total cost plus the arena index it refers to.
#[derive(Clone, Copy, Debug)]
pub(super) struct OpenEntry {
    pub f: f32,
    pub node: usize,
}

impl Eq for OpenEntry {}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.node == other.node
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior; equal costs pop in
        // arena insertion order to keep queries deterministic.
        other
            .f
            .partial_cmp(&self.f)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn test_open_entry_pops_smallest_f() {
        let mut heap = BinaryHeap::new();
        heap.push(OpenEntry { f: 3.0, node: 0 });
        heap.push(OpenEntry { f: 1.0, node: 1 });
        heap.push(OpenEntry { f: 2.0, node: 2 });

        assert_eq!(heap.pop().map(|e| e.node), Some(1));
        assert_eq!(heap.pop().map(|e| e.node), Some(2));
        assert_eq!(heap.pop().map(|e| e.node), Some(0));
    }

    #[test]
    fn test_open_entry_ties_break_by_insertion() {
        let mut heap = BinaryHeap::new();
        heap.push(OpenEntry { f: 1.0, node: 7 });
        heap.push(OpenEntry { f: 1.0, node: 2 });
        heap.push(OpenEntry { f: 1.0, node: 5 });

        assert_eq!(heap.pop().map(|e| e.node), Some(2));
        assert_eq!(heap.pop().map(|e| e.node), Some(5));
        assert_eq!(heap.pop().map(|e| e.node), Some(7));
    }

    #[test]
    fn test_default_config() {
        let config = PlannerConfig::default();
        assert_eq!(config.diagonal_cost, 1.414);
        assert_eq!(config.max_iterations, 10_000);
        assert!(config.simplify);
        assert_eq!(config.los_samples, 10);
    }
}
