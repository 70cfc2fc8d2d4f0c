//! # Renderer
//!
//! Full-screen redraw on a fixed cadence: clear, compose a frame from
//! the wall map and the player snapshot, write it, sleep. The sleep
//! runs after the draw, so the period is a fixed delay between frame
//! starts rather than a fixed frame rate — a slow draw stretches the
//! cycle instead of being compensated for.
//!
//! Frame composition is a pure function so the glyph layout can be
//! tested without a terminal.

use log::info;
use std::io::{Write, stdout};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use tokio::sync::mpsc;

use crate::core::error::GameError;
use crate::core::glyph::{neighbor_mask, wall_glyph};
use crate::core::grid::{Grid, HEIGHT, WIDTH};
use crate::core::state::{Position, World};

/// Render the whole grid plus the player into a string, row-major,
/// one newline-terminated line per row. Wall cells get their
/// connectivity glyph, the player cell gets the player glyph, open
/// cells a space.
pub fn compose_frame(grid: &Grid, player: Position, player_glyph: char) -> String {
    let mut frame = String::with_capacity(((WIDTH + 1) * HEIGHT) as usize * 3);
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            if grid.is_wall(x, y) {
                frame.push(wall_glyph(neighbor_mask(grid, x, y)));
            } else if player.x == x && player.y == y {
                frame.push(player_glyph);
            } else {
                frame.push(' ');
            }
        }
        frame.push('\n');
    }
    frame
}

fn draw_frame(world: &World, player_glyph: char) -> std::io::Result<()> {
    let frame = compose_frame(&world.grid, world.player(), player_glyph);
    let mut out = stdout();
    queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
    // Raw mode leaves '\n' as a bare line feed; the carriage return has
    // to be explicit.
    queue!(out, Print(frame.replace('\n', "\r\n")))?;
    out.flush()
}

/// Task loop: redraw every `tick` until shutdown. A write failure is
/// fatal and reported once.
pub async fn run_renderer(
    world: Arc<World>,
    tick: Duration,
    player_glyph: char,
    fatal: mpsc::Sender<GameError>,
    shutdown: Arc<AtomicBool>,
) {
    loop {
        if shutdown.load(Ordering::Relaxed) {
            info!("Renderer shutting down");
            return;
        }
        if let Err(e) = draw_frame(&world, player_glyph) {
            let _ = fatal.send(GameError::Render(e)).await;
            return;
        }
        tokio::time::sleep(tick).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{isolated_wall, walled_room};

    fn char_at(frame: &str, x: i32, y: i32) -> char {
        // Rows are WIDTH glyphs plus the newline
        let idx = (y * (WIDTH + 1) + x) as usize;
        frame.chars().nth(idx).expect("frame too short")
    }

    #[test]
    fn test_frame_shape() {
        let (grid, spawn) = Grid::generate(3);
        let frame = compose_frame(&grid, spawn, '☺');
        let lines: Vec<&str> = frame.lines().collect();
        assert_eq!(lines.len(), HEIGHT as usize);
        for line in lines {
            assert_eq!(line.chars().count(), WIDTH as usize);
        }
        assert!(frame.ends_with('\n'));
    }

    #[test]
    fn test_player_glyph_appears_exactly_once() {
        let (grid, spawn) = Grid::generate(3);
        let frame = compose_frame(&grid, spawn, '☺');
        assert_eq!(frame.chars().filter(|&c| c == '☺').count(), 1);
        assert_eq!(char_at(&frame, spawn.x, spawn.y), '☺');
    }

    #[test]
    fn test_border_corners() {
        // Corner masks are the same for every generated grid: the
        // border ring guarantees the neighbor pattern.
        let (grid, spawn) = Grid::generate(7);
        let frame = compose_frame(&grid, spawn, '☺');
        assert_eq!(char_at(&frame, 0, 0), '╔');
        assert_eq!(char_at(&frame, WIDTH - 1, 0), '╗');
        assert_eq!(char_at(&frame, 0, HEIGHT - 1), '╚');
        assert_eq!(char_at(&frame, WIDTH - 1, HEIGHT - 1), '╝');
    }

    #[test]
    fn test_open_room_renders_spaces_and_player() {
        let grid = walled_room();
        let frame = compose_frame(&grid, Position::new(2, 2), '☺');
        assert_eq!(char_at(&frame, 1, 1), ' ');
        assert_eq!(char_at(&frame, 3, 3), ' ');
        assert_eq!(char_at(&frame, 2, 2), '☺');
        // Solid region away from the room is fully connected
        assert_eq!(char_at(&frame, 10, 10), '╬');
    }

    #[test]
    fn test_isolated_wall_renders_default_glyph() {
        let grid = isolated_wall();
        let frame = compose_frame(&grid, Position::new(1, 1), '☺');
        assert_eq!(char_at(&frame, 5, 5), '═');
    }

    #[test]
    fn test_custom_player_glyph() {
        let grid = walled_room();
        let frame = compose_frame(&grid, Position::new(1, 1), '@');
        assert_eq!(char_at(&frame, 1, 1), '@');
        assert!(!frame.contains('☺'));
    }
}
