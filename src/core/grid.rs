//! # Maze Grid
//!
//! The static wall map: a fixed 32x24 boolean grid where `true` means
//! wall and `false` means open floor. The border ring is always wall;
//! interior cells are wall with probability 1/2. The grid is generated
//! once at startup and never mutated afterwards, so it can be shared
//! across tasks without a lock.
//!
//! Generation is deterministic per seed (`StdRng::seed_from_u64`), which
//! makes `--seed` replays and tests reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::state::Position;

pub const WIDTH: i32 = 32;
pub const HEIGHT: i32 = 24;

const W: usize = WIDTH as usize;
const H: usize = HEIGHT as usize;

/// Immutable wall map. Indexed internally as `cells[y][x]`.
pub struct Grid {
    cells: [[bool; W]; H],
}

impl Grid {
    /// Generate a maze and the player spawn position.
    ///
    /// Cells are visited in reverse row-major order (y descending, x
    /// descending within a row); the last open interior cell visited
    /// becomes the spawn. That is a byproduct of the scan order rather
    /// than a spawn-point algorithm, and it is kept as-is. The (1, 1)
    /// fallback only matters if every interior cell rolls wall.
    pub fn generate(seed: u64) -> (Grid, Position) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut cells = [[false; W]; H];
        let mut spawn = Position::new(1, 1);

        for y in (0..H).rev() {
            for x in (0..W).rev() {
                let border = x == 0 || x == W - 1 || y == 0 || y == H - 1;
                let wall = border || rng.gen_bool(0.5);
                cells[y][x] = wall;
                if !border && !wall {
                    spawn = Position::new(x as i32, y as i32);
                }
            }
        }

        (Grid { cells }, spawn)
    }

    /// True if (x, y) is inside the grid.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        (0..WIDTH).contains(&x) && (0..HEIGHT).contains(&y)
    }

    /// True if (x, y) is a wall cell. Out-of-bounds counts as not-a-wall,
    /// which is exactly the neighbor rule the glyph mask wants.
    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        self.contains(x, y) && self.cells[y as usize][x as usize]
    }

    #[cfg(test)]
    pub(crate) fn from_cells(cells: [[bool; W]; H]) -> Grid {
        Grid { cells }
    }
}

/// Time-derived seed for unseeded runs (sub-second nanos, matching the
/// "new maze every launch" feel).
pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| u64::from(d.subsec_nanos()))
        .unwrap_or(0)
}
