// src/config.rs

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Tile configuration for generated maps. The defaults match a stock
/// dungeon tileset; hosts override them to fit their own asset sheets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    /// Tile id written to walkable positions.
    pub gen_floor: i32,
    /// Tile id written to wall positions.
    pub gen_wall: i32,
    /// Tileset id recorded on generated map documents.
    pub gen_tileset_id: i32,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            gen_floor: 2860,
            gen_wall: 6335,
            gen_tileset_id: 3,
        }
    }
}

impl MazeConfig {
    /// Parses a config from JSON. Missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Runtime generation settings shared between the session controller and
/// the map loader. The controller writes the requested size on entry; the
/// loader reads it back when the sentinel map id comes through. Cloning
/// shares the underlying slot.
#[derive(Debug, Clone, Default)]
pub struct GenSettings {
    size: Arc<RwLock<usize>>,
}

impl GenSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> usize {
        *self.size.read()
    }

    pub fn set_size(&self, size: usize) {
        *self.size.write() = size;
    }
}
