// src/map/mod.rs

pub mod document;
pub mod event;
pub mod loader;

pub use document::{MapDocument, TILE_LAYERS};
pub use event::{build_goal_event, Action, Appearance, EventSpec, Trigger, GOAL_TAG};
pub use loader::{MazeMapLoader, GENERATED_MAP_ID};

use thiserror::Error;

/// Failures from the map-loading path. Session transitions never fail;
/// malformed ids and broken invariants all surface here.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("map {0} not found")]
    NotFound(i32),
    #[error("generated maze of size {size} produced no goal candidates")]
    NoGoalCandidates { size: usize },
}
