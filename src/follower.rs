//! Frame-stepped path following.
//!
//! The follower consumes a planned [`Path`] one frame at a time: each call to
//! [`PathFollower::step`] advances the position by at most `speed` world
//! units toward the current waypoint, snapping onto it when close enough and
//! moving the cursor forward. It only ever reads the path it was given.

use crate::core::WorldPoint;
use crate::Path;

/// Default advance per frame, in world units.
pub const DEFAULT_SPEED: f32 = 3.0;

/// Default distance at which a target counts as reached.
pub const ARRIVAL_THRESHOLD: f32 = 30.0;

/// Outcome of one follower frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FollowState {
    /// Still en route to the final waypoint.
    Moving,
    /// The final waypoint has been reached (or there was no path to follow).
    Finished,
}

/// Walks an agent along a waypoint path.
#[derive(Clone, Debug)]
pub struct PathFollower {
    /// Position the follower was created at; restored by [`PathFollower::reset`].
    home: WorldPoint,
    position: WorldPoint,
    waypoints: Vec<WorldPoint>,
    next_waypoint: usize,
    speed: f32,
}

impl PathFollower {
    /// Create a follower at a starting position.
    pub fn new(start: WorldPoint, speed: f32) -> Self {
        Self {
            home: start,
            position: start,
            waypoints: Vec::new(),
            next_waypoint: 0,
            speed,
        }
    }

    /// Create a follower with the default speed.
    pub fn with_default_speed(start: WorldPoint) -> Self {
        Self::new(start, DEFAULT_SPEED)
    }

    /// Current position.
    pub fn position(&self) -> WorldPoint {
        self.position
    }

    /// Advance per frame.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Adopt a new path and restart the waypoint cursor.
    pub fn set_path(&mut self, path: &Path) {
        self.waypoints = path.points.clone();
        self.next_waypoint = 0;
    }

    /// True when every waypoint has been consumed.
    pub fn is_finished(&self) -> bool {
        self.next_waypoint >= self.waypoints.len()
    }

    /// Advance one frame along the path.
    ///
    /// Moves `speed` units toward the current waypoint; when the remaining
    /// distance is below `speed` the position snaps onto the waypoint and
    /// the cursor advances.
    pub fn step(&mut self) -> FollowState {
        if self.is_finished() {
            return FollowState::Finished;
        }

        let target = self.waypoints[self.next_waypoint];
        let distance = self.position.distance(&target);

        if distance < self.speed {
            self.position = target;
            self.next_waypoint += 1;
        } else {
            let direction = (target - self.position) * (1.0 / distance);
            self.position = self.position + direction * self.speed;
        }

        if self.is_finished() {
            FollowState::Finished
        } else {
            FollowState::Moving
        }
    }

    /// True when the follower is within `threshold` of `target`.
    pub fn has_reached(&self, target: WorldPoint, threshold: f32) -> bool {
        self.position.distance(&target) < threshold
    }

    /// Return to the starting position and drop the current path.
    pub fn reset(&mut self) {
        self.position = self.home;
        self.waypoints.clear();
        self.next_waypoint = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_path(points: &[(f32, f32)]) -> Path {
        let pts: Vec<WorldPoint> = points.iter().map(|(x, y)| WorldPoint::new(*x, *y)).collect();
        let length = crate::planning::path_length(&pts);
        Path {
            points: pts,
            length,
        }
    }

    #[test]
    fn test_empty_path_is_finished() {
        let mut follower = PathFollower::with_default_speed(WorldPoint::new(100.0, 100.0));
        assert!(follower.is_finished());
        assert_eq!(follower.step(), FollowState::Finished);
        assert_eq!(follower.position(), WorldPoint::new(100.0, 100.0));
    }

    #[test]
    fn test_walks_straight_segment() {
        let mut follower = PathFollower::new(WorldPoint::new(0.0, 0.0), 3.0);
        follower.set_path(&make_path(&[(30.0, 0.0)]));

        // 30 units at 3 per frame: 10 approach frames land exactly on the
        // waypoint, one more snaps the cursor past it
        for _ in 0..10 {
            assert_eq!(follower.step(), FollowState::Moving);
        }
        assert_eq!(follower.step(), FollowState::Finished);
        assert_eq!(follower.position(), WorldPoint::new(30.0, 0.0));
    }

    #[test]
    fn test_snaps_onto_waypoints() {
        let mut follower = PathFollower::new(WorldPoint::new(0.0, 0.0), 3.0);
        follower.set_path(&make_path(&[(4.0, 0.0), (4.0, 4.0)]));

        follower.step(); // 3.0 toward the first waypoint
        assert_eq!(follower.position(), WorldPoint::new(3.0, 0.0));
        follower.step(); // remaining 1.0 < speed: snap
        assert_eq!(follower.position(), WorldPoint::new(4.0, 0.0));

        // Now heading to the second waypoint
        assert_eq!(follower.step(), FollowState::Moving);
        let state = follower.step();
        assert_eq!(state, FollowState::Finished);
        assert_eq!(follower.position(), WorldPoint::new(4.0, 4.0));
    }

    #[test]
    fn test_has_reached_threshold() {
        let follower = PathFollower::with_default_speed(WorldPoint::new(100.0, 100.0));

        assert!(follower.has_reached(WorldPoint::new(120.0, 100.0), ARRIVAL_THRESHOLD));
        assert!(!follower.has_reached(WorldPoint::new(140.0, 100.0), ARRIVAL_THRESHOLD));
    }

    #[test]
    fn test_reset_restores_home() {
        let mut follower = PathFollower::new(WorldPoint::new(10.0, 10.0), 3.0);
        follower.set_path(&make_path(&[(40.0, 10.0)]));

        while follower.step() == FollowState::Moving {}
        assert_eq!(follower.position(), WorldPoint::new(40.0, 10.0));

        follower.reset();
        assert_eq!(follower.position(), WorldPoint::new(10.0, 10.0));
        assert!(follower.is_finished());
    }
}
