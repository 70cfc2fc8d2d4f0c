//! # Input Reader
//!
//! Blocking keyboard loop. Translates WASD into movement deltas and
//! publishes them on the single-slot delta channel; every other key is
//! silently dropped. Runs on a blocking thread because crossterm's
//! `event::read` blocks.
//!
//! The poll-then-read shape keeps the thread responsive to the shutdown
//! flag — a thread parked forever in `read()` would stall runtime
//! teardown.

use log::{debug, info};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::core::error::GameError;
use crate::core::state::Delta;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// What a keypress means to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Move(Delta),
    Quit,
}

/// Decode a key event. `None` means the key is not part of the game and
/// gets discarded.
pub fn decode_key(key: &KeyEvent) -> Option<KeyAction> {
    match (key.modifiers, key.code) {
        // Raw mode eats the OS interrupt, so Ctrl-C shows up here
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(KeyAction::Quit),
        (_, KeyCode::Char(c)) => match c.to_ascii_lowercase() {
            'a' => Some(KeyAction::Move(Delta::Left)),
            'd' => Some(KeyAction::Move(Delta::Right)),
            'w' => Some(KeyAction::Move(Delta::Up)),
            's' => Some(KeyAction::Move(Delta::Down)),
            _ => None,
        },
        _ => None,
    }
}

/// Spawn the reader on a blocking thread. Deltas go out over `deltas`
/// (capacity 1 — `blocking_send` stalls until the resolver has taken
/// the previous one), Ctrl-C goes out over `quit`, and a read failure
/// is reported on `fatal` before the thread exits.
pub fn spawn_reader(
    deltas: mpsc::Sender<Delta>,
    quit: mpsc::Sender<()>,
    fatal: mpsc::Sender<GameError>,
    shutdown: Arc<AtomicBool>,
) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        loop {
            if shutdown.load(Ordering::Relaxed) {
                info!("Input reader shutting down");
                return;
            }
            match event::poll(POLL_INTERVAL) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(e) => {
                    let _ = fatal.blocking_send(GameError::Input(e));
                    return;
                }
            }
            let ev = match event::read() {
                Ok(ev) => ev,
                Err(e) => {
                    let _ = fatal.blocking_send(GameError::Input(e));
                    return;
                }
            };
            let Event::Key(key) = ev else { continue };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match decode_key(&key) {
                Some(KeyAction::Quit) => {
                    let _ = quit.blocking_send(());
                    return;
                }
                Some(KeyAction::Move(delta)) => {
                    debug!("Key {:?} -> {:?}", key.code, delta);
                    // Channel closes when the resolver is gone; nothing
                    // left to do but exit.
                    if deltas.blocking_send(delta).is_err() {
                        return;
                    }
                }
                None => {} // unrecognized keys are silently dropped
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_wasd_maps_to_deltas() {
        let cases = [
            ('a', Delta::Left),
            ('d', Delta::Right),
            ('w', Delta::Up),
            ('s', Delta::Down),
        ];
        for (c, delta) in cases {
            assert_eq!(
                decode_key(&key(KeyCode::Char(c), KeyModifiers::NONE)),
                Some(KeyAction::Move(delta)),
                "key {c}"
            );
        }
    }

    #[test]
    fn test_uppercase_keys_also_move() {
        assert_eq!(
            decode_key(&key(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(KeyAction::Move(Delta::Left))
        );
        assert_eq!(
            decode_key(&key(KeyCode::Char('W'), KeyModifiers::SHIFT)),
            Some(KeyAction::Move(Delta::Up))
        );
    }

    #[test]
    fn test_unrecognized_keys_produce_nothing() {
        assert_eq!(decode_key(&key(KeyCode::Char('q'), KeyModifiers::NONE)), None);
        assert_eq!(decode_key(&key(KeyCode::Char('x'), KeyModifiers::NONE)), None);
        assert_eq!(decode_key(&key(KeyCode::Enter, KeyModifiers::NONE)), None);
        assert_eq!(decode_key(&key(KeyCode::Up, KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        assert_eq!(
            decode_key(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(KeyAction::Quit)
        );
        // Plain 'c' is just an unrecognized key
        assert_eq!(decode_key(&key(KeyCode::Char('c'), KeyModifiers::NONE)), None);
    }
}
