//! # Terminal Adapter
//!
//! The crossterm-specific layer. Owns the raw-mode guard, spawns the
//! three game tasks, and waits for an interrupt.
//!
//! This is the only module that knows about crossterm. Task wiring:
//!
//! ```text
//! input reader ──(mpsc capacity 1)──▶ movement resolver ──▶ World.player
//!                                                              ▲
//! renderer ◀── fixed 100ms delay ── reads World.grid + player ─┘
//! ```
//!
//! The delta channel deliberately has capacity 1: at most one pending,
//! unconsumed keypress at a time, with the reader blocking until the
//! resolver catches up.
//!
//! Shutdown is coordinated: any task's fatal error, a Ctrl-C key (raw
//! mode swallows the OS signal), or an externally delivered interrupt
//! all land in one `select!`, after which the raw-mode guard is dropped
//! (restoring the terminal) before the farewell line is printed.

pub mod input;
pub mod render;

use log::{error, info};
use std::io::stdout;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use tokio::sync::mpsc;

use crate::core::config::ResolvedConfig;
use crate::core::error::GameError;
use crate::core::grid::{self, Grid, HEIGHT, WIDTH};
use crate::core::movement;
use crate::core::state::World;

/// RAII guard for raw mode + alternate screen + hidden cursor.
/// Restoration happens in `Drop`, so the terminal comes back even when
/// we exit on a fatal error.
struct RawModeGuard;

impl RawModeGuard {
    fn new() -> std::io::Result<Self> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, Hide)?;
        info!("Raw mode enabled (alternate screen, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Generate the world, run the game until interrupted, restore the
/// terminal, say goodbye.
pub async fn run(config: ResolvedConfig) -> Result<(), GameError> {
    let seed = config.seed.unwrap_or_else(grid::time_seed);
    info!("Generating {}x{} maze (seed={})", WIDTH, HEIGHT, seed);
    let (maze, spawn) = Grid::generate(seed);
    info!("Player spawns at ({}, {})", spawn.x, spawn.y);
    let world = Arc::new(World::new(maze, spawn));

    let guard = RawModeGuard::new().map_err(GameError::Terminal)?;

    // Single-slot handoff between the input reader and the resolver
    let (delta_tx, delta_rx) = mpsc::channel(1);
    // First fatal error from any task wins
    let (fatal_tx, mut fatal_rx) = mpsc::channel::<GameError>(1);
    // Ctrl-C arrives as a key event while raw mode is on
    let (quit_tx, mut quit_rx) = mpsc::channel::<()>(1);
    // Tells the blocking reader and the renderer to stand down on exit
    let shutdown = Arc::new(AtomicBool::new(false));

    input::spawn_reader(delta_tx, quit_tx, fatal_tx.clone(), shutdown.clone());
    tokio::spawn(movement::run_resolver(world.clone(), delta_rx));
    tokio::spawn(render::run_renderer(
        world.clone(),
        config.tick,
        config.player_glyph,
        fatal_tx,
        shutdown.clone(),
    ));

    let result = tokio::select! {
        biased;
        Some(e) = fatal_rx.recv() => {
            error!("Fatal: {}", e);
            Err(e)
        }
        Some(()) = quit_rx.recv() => {
            info!("Ctrl-C pressed");
            Ok(())
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupt signal received");
            Ok(())
        }
    };

    shutdown.store(true, Ordering::Relaxed);
    drop(guard);
    println!("Done!");
    result
}
