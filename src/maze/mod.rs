// src/maze/mod.rs

mod generator;

pub use generator::{generate, GeneratedMaze};

/// A position on the doubled-resolution maze grid (or, halved, on the
/// logical cell grid used during generation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub x: usize,
    pub y: usize,
}

impl GridPos {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// A square maze at doubled resolution: a maze generated from `n x n`
/// logical cells occupies `2n x 2n` grid tiles. `true` means passable,
/// `false` means wall. Stored row-major as `x + y * width`, the same
/// layout the map document uses for its tile layers.
#[derive(Debug, Clone)]
pub struct MazeGrid {
    width: usize,
    height: usize,
    passable: Vec<bool>,
}

impl MazeGrid {
    /// Creates an all-wall grid for a maze of `size` logical cells per side.
    pub fn new(size: usize) -> Self {
        let width = size * 2;
        let height = size * 2;
        Self {
            width,
            height,
            passable: vec![false; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// True if `(x, y)` is in bounds and not a wall.
    pub fn is_passable(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.passable[x + y * self.width]
    }

    pub(crate) fn carve(&mut self, x: usize, y: usize) {
        self.passable[x + y * self.width] = true;
    }

    /// All passable positions, in row-major order.
    pub fn passable_positions(&self) -> impl Iterator<Item = GridPos> + '_ {
        let width = self.width;
        self.passable
            .iter()
            .enumerate()
            .filter(|(_, &p)| p)
            .map(move |(idx, _)| GridPos::new(idx % width, idx / width))
    }
}
