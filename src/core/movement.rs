//! # Movement Resolver
//!
//! Consumes movement deltas and applies them to the player position.
//! A move into a wall or off the grid is not an error, it is simply a
//! no-op — the delta is dropped and the position stays put. This is the
//! sole writer of the player position.

use log::{debug, info};
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::core::grid::Grid;
use crate::core::state::{Delta, Position, World};

/// Where a delta takes the player: the candidate cell if it is in
/// bounds and open, otherwise the unchanged position.
pub fn resolve(grid: &Grid, pos: Position, delta: Delta) -> Position {
    let candidate = pos.step(delta);
    if grid.contains(candidate.x, candidate.y) && !grid.is_wall(candidate.x, candidate.y) {
        candidate
    } else {
        pos
    }
}

/// Task loop: drain the delta channel until it closes, committing each
/// accepted move to the shared world.
pub async fn run_resolver(world: Arc<World>, mut deltas: mpsc::Receiver<Delta>) {
    while let Some(delta) = deltas.recv().await {
        let before = world.player();
        let after = resolve(&world.grid, before, delta);
        if after == before {
            debug!("move {:?} from ({}, {}) blocked", delta, before.x, before.y);
        } else {
            world.set_player(after);
            debug!("player moved to ({}, {})", after.x, after.y);
        }
    }
    info!("Delta channel closed, movement resolver exiting");
}
