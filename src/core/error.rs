//! # Error Types
//!
//! The game's only real errors are environment failures: the terminal
//! refusing raw mode, a failed read from the keyboard, or a failed
//! write of a frame. All of them are fatal — the process reports a
//! diagnostic and exits. Rejected moves are not errors and never
//! surface here.

use std::fmt;
use std::io;

#[derive(Debug)]
pub enum GameError {
    /// Entering or restoring terminal modes failed.
    Terminal(io::Error),
    /// Reading keyboard input failed.
    Input(io::Error),
    /// Writing a frame to the screen failed.
    Render(io::Error),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Terminal(e) => write!(f, "terminal mode error: {e}"),
            GameError::Input(e) => write!(f, "input read error: {e}"),
            GameError::Render(e) => write!(f, "render write error: {e}"),
        }
    }
}

impl std::error::Error for GameError {}
