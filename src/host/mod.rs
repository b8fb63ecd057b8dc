// src/host/mod.rs
//
// Narrow interfaces onto the host engine. The maze core only ever talks to
// the engine through these traits; `memory` provides in-process
// implementations for the demo binary and tests.

pub mod memory;

pub use memory::{MemoryEvents, MemoryMapLoader, MemoryPlayer, MemoryScene};

use crate::map::{EventSpec, MapDocument, MapError};

/// Which presentation the host is currently running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneKind {
    /// Normal top-down map exploration.
    Map,
    /// First-person maze presentation.
    Maze,
}

/// Screen transition style for a player transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeType {
    Black,
    White,
    None,
}

/// A player location as the host tracks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerPosition {
    pub map_id: i32,
    pub x: i32,
    pub y: i32,
    pub facing: i32,
}

/// Scene switching.
pub trait SceneHost {
    fn switch_scene(&mut self, scene: SceneKind);
    fn current_scene(&self) -> SceneKind;
}

/// Player position store.
pub trait PlayerStore {
    fn position(&self) -> PlayerPosition;
    fn reserve_transfer(&mut self, map_id: i32, x: i32, y: i32, facing: i32, fade: FadeType);
}

/// Map data store. `load_map(GENERATED_MAP_ID)` is the signal to generate
/// a maze instead of loading persisted data; see `map::MazeMapLoader`.
pub trait MapLoader {
    fn load_map(&mut self, map_id: i32) -> Result<MapDocument, MapError>;
}

/// Access to the current map's event list, used to find the goal template
/// (the first event the host has flagged as locked, i.e. the one engaging
/// the player).
pub trait EventContext {
    fn invoking_event(&self) -> Option<EventSpec>;
}
