//! # Wall Glyphs
//!
//! Maps each wall cell's 4-bit neighbor connectivity mask to a
//! box-drawing character. The mapping is a pure function of the mask:
//! the same mask always yields the same glyph regardless of where the
//! cell sits.

use crate::core::grid::Grid;

pub const RIGHT: u8 = 1;
pub const LEFT: u8 = 2;
pub const DOWN: u8 = 4;
pub const UP: u8 = 8;

/// Connectivity mask for the cell at (x, y): one bit per wall neighbor
/// in the four cardinal directions. Out-of-bounds is not a neighbor.
pub fn neighbor_mask(grid: &Grid, x: i32, y: i32) -> u8 {
    let mut mask = 0;
    if grid.is_wall(x - 1, y) {
        mask |= LEFT;
    }
    if grid.is_wall(x + 1, y) {
        mask |= RIGHT;
    }
    if grid.is_wall(x, y - 1) {
        mask |= UP;
    }
    if grid.is_wall(x, y + 1) {
        mask |= DOWN;
    }
    mask
}

/// Box-drawing glyph for a wall cell with the given connectivity mask.
/// An isolated wall (mask 0) falls through to the default `═`.
pub fn wall_glyph(mask: u8) -> char {
    const UP_DOWN: u8 = UP | DOWN;
    const LEFT_RIGHT: u8 = LEFT | RIGHT;
    const RIGHT_DOWN: u8 = RIGHT | DOWN;
    const RIGHT_UP: u8 = RIGHT | UP;
    const LEFT_DOWN: u8 = LEFT | DOWN;
    const LEFT_UP: u8 = LEFT | UP;
    const UP_DOWN_RIGHT: u8 = UP | DOWN | RIGHT;
    const UP_DOWN_LEFT: u8 = UP | DOWN | LEFT;
    const UP_LEFT_RIGHT: u8 = UP | LEFT | RIGHT;
    const DOWN_LEFT_RIGHT: u8 = DOWN | LEFT | RIGHT;
    const ALL: u8 = UP | DOWN | LEFT | RIGHT;

    match mask {
        UP | DOWN | UP_DOWN => '║',
        LEFT | RIGHT | LEFT_RIGHT => '═',
        RIGHT_DOWN => '╔',
        RIGHT_UP => '╚',
        LEFT_DOWN => '╗',
        LEFT_UP => '╝',
        UP_DOWN_RIGHT => '╠',
        UP_DOWN_LEFT => '╣',
        UP_LEFT_RIGHT => '╩',
        DOWN_LEFT_RIGHT => '╦',
        ALL => '╬',
        _ => '═',
    }
}
