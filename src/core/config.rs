//! # Configuration
//!
//! Centralizes the few tunable settings with a clear override
//! hierarchy: defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.mazewalk/config.toml`. If missing on first run,
//! a commented-out default is generated so users can discover the
//! options. Grid dimensions are deliberately not configurable; they are
//! fixed constants of the game.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MazeConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub tick_ms: Option<u64>,
    pub seed: Option<u64>,
    pub player_glyph: Option<char>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TICK_MS: u64 = 100;
pub const DEFAULT_PLAYER_GLYPH: char = '☺';

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Delay between frame starts.
    pub tick: Duration,
    /// Maze seed; `None` means derive one from the current time.
    pub seed: Option<u64>,
    pub player_glyph: char,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.mazewalk/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".mazewalk").join("config.toml"))
}

/// Load config from `~/.mazewalk/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `MazeConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<MazeConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(MazeConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(MazeConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: MazeConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Mazewalk Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# tick_ms = 100        # Delay between frame starts, in milliseconds
# seed = 12345         # Fixed maze seed (omit for a new maze each run)
# player_glyph = "☺"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file →
/// env vars → CLI.
///
/// `cli_seed` and `cli_tick_ms` come from CLI flags (None = not given).
pub fn resolve(config: &MazeConfig, cli_seed: Option<u64>, cli_tick_ms: Option<u64>) -> ResolvedConfig {
    // Tick: CLI → env → config → default
    let tick_ms = cli_tick_ms
        .or_else(|| parse_env_u64("MAZEWALK_TICK_MS"))
        .or(config.general.tick_ms)
        .unwrap_or(DEFAULT_TICK_MS);

    // Seed: CLI → env → config → None (time-derived at world creation)
    let seed = cli_seed
        .or_else(|| parse_env_u64("MAZEWALK_SEED"))
        .or(config.general.seed);

    ResolvedConfig {
        tick: Duration::from_millis(tick_ms),
        seed,
        player_glyph: config.general.player_glyph.unwrap_or(DEFAULT_PLAYER_GLYPH),
    }
}

fn parse_env_u64(name: &str) -> Option<u64> {
    let raw = std::env::var(name).ok()?;
    match raw.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("Ignoring {} = {:?}: not a valid integer", name, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = MazeConfig::default();
        assert!(config.general.tick_ms.is_none());
        assert!(config.general.seed.is_none());
        assert!(config.general.player_glyph.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = MazeConfig::default();
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.tick, Duration::from_millis(DEFAULT_TICK_MS));
        assert_eq!(resolved.seed, None);
        assert_eq!(resolved.player_glyph, DEFAULT_PLAYER_GLYPH);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = MazeConfig {
            general: GeneralConfig {
                tick_ms: Some(50),
                seed: Some(99),
                player_glyph: Some('@'),
            },
        };
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.tick, Duration::from_millis(50));
        assert_eq!(resolved.seed, Some(99));
        assert_eq!(resolved.player_glyph, '@');
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = MazeConfig {
            general: GeneralConfig {
                tick_ms: Some(50),
                seed: Some(99),
                player_glyph: None,
            },
        };
        let resolved = resolve(&config, Some(7), Some(250));
        assert_eq!(resolved.seed, Some(7));
        assert_eq!(resolved.tick, Duration::from_millis(250));
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
tick_ms = 80
seed = 424242
player_glyph = "@"
"#;
        let config: MazeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.tick_ms, Some(80));
        assert_eq!(config.general.seed, Some(424242));
        assert_eq!(config.general.player_glyph, Some('@'));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[general]
tick_ms = 200
"#;
        let config: MazeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.tick_ms, Some(200));
        assert!(config.general.seed.is_none());
        assert!(config.general.player_glyph.is_none());
    }

    #[test]
    fn test_empty_toml_parses() {
        let config: MazeConfig = toml::from_str("").unwrap();
        assert!(config.general.tick_ms.is_none());
    }
}
