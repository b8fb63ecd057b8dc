// src/maze/generator.rs
//
// Randomized depth-first maze generation (recursive backtracker with an
// explicit stack) over an n x n logical cell grid, emitted at doubled
// resolution so walls occupy real tiles.

use log::debug;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::maze::{GridPos, MazeGrid};

/// The result of one generation run.
#[derive(Debug, Clone)]
pub struct GeneratedMaze {
    /// Passability grid, `2n x 2n`.
    pub grid: MazeGrid,
    /// The tile the player starts on, always passable.
    pub entrance: GridPos,
    /// Passable tiles eligible for goal placement. Cells sharing a row or
    /// column with the entrance are excluded, so a goal is never placed on
    /// the entrance itself.
    pub goal_candidates: Vec<GridPos>,
    /// Number of logical cells reached by the carving walk. The carved
    /// passages form a spanning tree over these cells.
    pub visited_cells: usize,
}

/// Generates a random maze of `size` logical cells per side.
///
/// The walk starts at the central cell `(size/2, size/2)` and only ever
/// carves between strictly interior cells, so a one-cell-thick wall border
/// survives around the maze. Callers are expected to clamp `size >= 4`;
/// this function does not re-check it.
///
/// Carving a passage marks the current cell's grid tile and the shared
/// mid-edge tile passable. The visited count never reaches the full
/// `size * size` because border cells are unreachable by construction;
/// the walk ends when the backtrack stack runs dry.
pub fn generate<R: Rng + ?Sized>(size: usize, rng: &mut R) -> GeneratedMaze {
    let mut visited = vec![vec![false; size]; size];
    let mut grid = MazeGrid::new(size);

    // Keep the initial position, for the player's sake.
    let entrance = GridPos::new((size / 2) * 2, (size / 2) * 2);

    let mut current = (size / 2, size / 2);
    visited[current.0][current.1] = true;
    let mut unvisited = size * size - 1;

    let mut stack: Vec<(usize, usize)> = Vec::new();

    loop {
        let (cx, cy) = current;
        // `current` is always strictly interior, so the subtractions below
        // cannot underflow.
        let neighbours: Vec<(usize, usize)> = [
            (cx - 1, cy),
            (cx + 1, cy),
            (cx, cy - 1),
            (cx, cy + 1),
        ]
        .into_iter()
        .filter(|&(x, y)| x > 0 && x < size - 1 && y > 0 && y < size - 1 && !visited[x][y])
        .collect();

        if let Some(&next) = neighbours.choose(rng) {
            stack.push(current);
            // Open the current cell and the wall shared with the neighbour.
            grid.carve(2 * cx, 2 * cy);
            grid.carve(cx + next.0, cy + next.1);
            visited[next.0][next.1] = true;
            unvisited -= 1;
            current = next;
        } else if let Some(prev) = stack.pop() {
            current = prev;
        } else {
            // Border cells are never visited, so `unvisited` stays positive;
            // an empty stack is the normal way out.
            break;
        }

        if unvisited == 0 {
            break;
        }
    }

    let visited_cells = size * size - unvisited;

    let goal_candidates: Vec<GridPos> = grid
        .passable_positions()
        .filter(|pos| pos.x != entrance.x && pos.y != entrance.y)
        .collect();

    debug!(
        "generated {}x{} maze: {} cells carved, {} goal candidates",
        grid.width(),
        grid.height(),
        visited_cells,
        goal_candidates.len()
    );

    GeneratedMaze {
        grid,
        entrance,
        goal_candidates,
        visited_cells,
    }
}
