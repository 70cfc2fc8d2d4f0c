//! # Game State
//!
//! Core game state shared between tasks. Domain types only, nothing
//! terminal-specific lives here.
//!
//! ```text
//! World
//! ├── grid: Grid                // wall map, immutable after generation
//! └── player: Mutex<Position>   // written by the movement resolver,
//!                               // read by the renderer
//! ```
//!
//! The movement resolver is the sole writer of the player position; the
//! renderer only ever takes snapshots. A single mutex is enough.

use std::sync::Mutex;

use crate::core::grid::Grid;

/// A grid cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell one step in the given direction.
    pub fn step(self, delta: Delta) -> Self {
        let (dx, dy) = delta.vector();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// One of the four unit movement vectors. Produced per keypress,
/// consumed once by the movement resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delta {
    Left,
    Right,
    Up,
    Down,
}

impl Delta {
    pub fn vector(self) -> (i32, i32) {
        match self {
            Delta::Left => (-1, 0),
            Delta::Right => (1, 0),
            Delta::Up => (0, -1),
            Delta::Down => (0, 1),
        }
    }
}

/// The shared game world, handed to each task behind an `Arc`.
pub struct World {
    pub grid: Grid,
    player: Mutex<Position>,
}

impl World {
    pub fn new(grid: Grid, spawn: Position) -> Self {
        Self {
            grid,
            player: Mutex::new(spawn),
        }
    }

    /// Snapshot of the current player position.
    pub fn player(&self) -> Position {
        *self.player.lock().expect("player position lock poisoned")
    }

    pub fn set_player(&self, pos: Position) {
        *self.player.lock().expect("player position lock poisoned") = pos;
    }
}
