//! Line-of-sight waypoint simplification.
//!
//! A* paths over the lattice are staircases of cell centers. The
//! simplification pass removes every waypoint that the agent can skip by
//! walking a straight line to a later one, leaving only the corners that
//! matter. It is a single left-to-right greedy pass, not a globally optimal
//! shortcut minimizer; it is fast and strictly improves on the raw path.

use crate::core::WorldPoint;
use crate::world::World;

/// Remove redundant waypoints by straight-line visibility.
///
/// Keeps `path[0]`; each interior point is dropped when the segment from the
/// last kept point to its successor is clear; the final point is always
/// kept. Endpoints are never moved, and a waypoint is never dropped if doing
/// so would put the connecting segment through an obstacle.
pub fn simplify_path(world: &World, path: &[WorldPoint], samples: usize) -> Vec<WorldPoint> {
    if path.len() <= 2 {
        return path.to_vec();
    }

    let mut kept = vec![path[0]];

    for i in 1..path.len() - 1 {
        let anchor = *kept.last().unwrap();
        if !line_is_clear(world, anchor, path[i + 1], samples) {
            kept.push(path[i]);
        }
    }

    kept.push(*path.last().unwrap());
    kept
}

/// Check a straight segment against the validity oracle.
///
/// Samples `samples + 1` evenly spaced points from `from` to `to` inclusive,
/// each checked with the world's configured margin - the same clearance the
/// search itself uses.
pub fn line_is_clear(world: &World, from: WorldPoint, to: WorldPoint, samples: usize) -> bool {
    let samples = samples.max(1);

    for i in 0..=samples {
        let t = i as f32 / samples as f32;
        if !world.is_position_clear(from.lerp(&to, t)) {
            return false;
        }
    }

    true
}

/// Total polyline length in world units.
pub fn path_length(points: &[WorldPoint]) -> f32 {
    points.windows(2).map(|w| w[0].distance(&w[1])).sum()
}
