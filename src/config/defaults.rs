//! Default value functions for serde deserialization.

pub fn world_width() -> f32 {
    800.0
}

pub fn world_height() -> f32 {
    600.0
}

pub fn cell_size() -> f32 {
    20.0
}

pub fn safety_margin() -> f32 {
    crate::world::DEFAULT_MARGIN
}

pub fn diagonal_cost() -> f32 {
    crate::planning::DIAGONAL_COST
}

pub fn max_iterations() -> usize {
    crate::planning::MAX_ITERATIONS
}

pub fn enabled() -> bool {
    true
}

pub fn los_samples() -> usize {
    crate::planning::LOS_SAMPLES
}

pub fn speed() -> f32 {
    crate::follower::DEFAULT_SPEED
}

pub fn arrival_threshold() -> f32 {
    crate::follower::ARRIVAL_THRESHOLD
}
