//! # Core Game Logic
//!
//! Everything that defines the game without touching a terminal: the
//! wall map, the shared world state, movement resolution, the glyph
//! table, configuration, and the error taxonomy. The `tui` module is
//! the only place that knows about crossterm.
//!
//! ## Modules
//!
//! - [`grid`]: maze generation and the immutable wall map
//! - [`state`]: `Position`, `Delta`, and the shared `World`
//! - [`movement`]: the sole writer of the player position
//! - [`glyph`]: neighbor-mask → box-drawing character
//! - [`config`]: layered settings (defaults → file → env → CLI)
//! - [`error`]: fatal environment errors

pub mod config;
pub mod error;
pub mod glyph;
pub mod grid;
pub mod movement;
pub mod state;
