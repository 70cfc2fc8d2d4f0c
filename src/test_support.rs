//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::grid::{Grid, HEIGHT, WIDTH};
use crate::core::state::{Position, World};

const W: usize = WIDTH as usize;
const H: usize = HEIGHT as usize;

/// Wall everywhere except a 3x3 open room covering x in 1..=3,
/// y in 1..=3. The room's concrete walk scenarios live in
/// `core::movement` tests.
pub fn walled_room() -> Grid {
    let mut cells = [[true; W]; H];
    for row in cells.iter_mut().take(4).skip(1) {
        for cell in row.iter_mut().take(4).skip(1) {
            *cell = false;
        }
    }
    Grid::from_cells(cells)
}

/// Open interior with the usual border ring, plus one isolated wall
/// cell at (5, 5) with no wall neighbors.
pub fn isolated_wall() -> Grid {
    let mut cells = [[false; W]; H];
    for x in 0..W {
        cells[0][x] = true;
        cells[H - 1][x] = true;
    }
    for row in cells.iter_mut() {
        row[0] = true;
        row[W - 1] = true;
    }
    cells[5][5] = true;
    Grid::from_cells(cells)
}

/// A world in the walled room with the player at the top-left open cell.
pub fn room_world() -> World {
    World::new(walled_room(), Position::new(1, 1))
}
