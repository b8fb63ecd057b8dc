// src/map/document.rs

use crate::config::MazeConfig;
use crate::map::EventSpec;
use crate::maze::{GeneratedMaze, GridPos};

/// Number of tile layers in a map document. Generated mazes only populate
/// layer 0; the rest stay zeroed for the host's renderer to ignore.
pub const TILE_LAYERS: usize = 6;

/// An in-memory map ready for the host's persistence and render layers.
///
/// Tile data is stored layer-major: `data[layer * width * height + x + y *
/// width]`. Events are indexed from 1 with slot 0 left empty, matching the
/// host engine's convention that event id 0 is reserved.
#[derive(Debug, Clone)]
pub struct MapDocument {
    pub width: usize,
    pub height: usize,
    pub tileset_id: i32,
    pub scroll_type: i32,
    pub data: Vec<i32>,
    pub events: Vec<Option<EventSpec>>,
}

impl MapDocument {
    /// An empty map with zeroed tile layers and no events.
    pub fn new(width: usize, height: usize, tileset_id: i32) -> Self {
        Self {
            width,
            height,
            tileset_id,
            scroll_type: 0,
            data: vec![0; TILE_LAYERS * width * height],
            events: vec![None],
        }
    }

    /// Assembles a map document from a generated maze: floor and wall tile
    /// ids come from `config`, and `goal` (already positioned by the
    /// caller) becomes event 1.
    pub fn from_maze(maze: &GeneratedMaze, goal: EventSpec, config: &MazeConfig) -> Self {
        let mut doc = Self::new(maze.grid.width(), maze.grid.height(), config.gen_tileset_id);
        for y in 0..doc.height {
            for x in 0..doc.width {
                let tile = if maze.grid.is_passable(x, y) {
                    config.gen_floor
                } else {
                    config.gen_wall
                };
                doc.data[x + y * doc.width] = tile;
            }
        }
        doc.events.push(Some(goal));
        doc
    }

    /// Ground-layer tile id at `(x, y)`.
    pub fn tile(&self, x: usize, y: usize) -> i32 {
        self.data[x + y * self.width]
    }

    /// The goal event, if this is a generated maze map.
    pub fn goal_event(&self) -> Option<&EventSpec> {
        self.events
            .iter()
            .flatten()
            .find(|event| event.is_goal())
    }

    /// Position of the goal event in grid coordinates.
    pub fn goal_position(&self) -> Option<GridPos> {
        self.goal_event()
            .map(|event| GridPos::new(event.x as usize, event.y as usize))
    }
}
