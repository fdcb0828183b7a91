//! YAML-backed configuration.
//!
//! All settings live in one file with optional sections; anything missing
//! falls back to the documented defaults, so an empty file (or no file at
//! all) yields a fully working setup.

mod defaults;
mod error;
mod nav;
mod sections;

pub use error::ConfigLoadError;
pub use nav::NavConfig;
pub use sections::{FollowerSection, PlannerSection, SmoothingSection, WorldSection};
