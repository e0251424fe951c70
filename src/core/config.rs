//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.zoetrope/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

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
pub struct ZoetropeConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ticker: TickerConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default deck file shown when no path is passed on the command line.
    pub deck: Option<String>,
    /// Transition debounce window in milliseconds.
    pub transition_ms: Option<u64>,
    /// Minimum horizontal drag (terminal cells) that counts as a swipe.
    pub swipe_threshold: Option<i32>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TickerConfig {
    /// Whether the ticker rotates on its own at startup.
    pub auto_advance: Option<bool>,
    /// Auto-advance interval in milliseconds.
    pub auto_advance_ms: Option<u64>,
    /// Delay before auto-advance resumes after a user interaction.
    pub resume_delay_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TRANSITION_MS: u64 = 500;
pub const DEFAULT_SWIPE_THRESHOLD: i32 = 6;
pub const DEFAULT_AUTO_ADVANCE_MS: u64 = 3000;
pub const DEFAULT_RESUME_DELAY_MS: u64 = 10000;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub deck_path: Option<PathBuf>,
    pub transition: Duration,
    pub swipe_threshold: i32,
    pub auto_advance: bool,
    pub auto_advance_interval: Duration,
    pub resume_delay: Duration,
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

/// Returns the path to `~/.zoetrope/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".zoetrope").join("config.toml"))
}

/// Load config from `~/.zoetrope/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ZoetropeConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ZoetropeConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ZoetropeConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ZoetropeConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: ZoetropeConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Zoetrope Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# deck = "~/decks/talk.toml"   # Deck shown when no path is given
# transition_ms = 500          # Debounce window after a slide change
# swipe_threshold = 6          # Cells of horizontal drag to count as a swipe

# [ticker]
# auto_advance = true
# auto_advance_ms = 3000       # Rotation interval
# resume_delay_ms = 10000      # Pause length after a user interaction
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

/// Resolve the final config by collapsing: defaults → config file → env vars
/// → CLI.
///
/// `cli_deck` is the positional deck path from the command line (None = not
/// specified); `cli_no_auto` disables ticker auto-advance regardless of the
/// config file.
pub fn resolve(
    config: &ZoetropeConfig,
    cli_deck: Option<&str>,
    cli_no_auto: bool,
) -> ResolvedConfig {
    // Deck path: CLI → env → config → none (built-in demo deck)
    let deck_path = cli_deck
        .map(|s| s.to_string())
        .or_else(|| std::env::var("ZOETROPE_DECK").ok())
        .or_else(|| config.general.deck.clone())
        .map(PathBuf::from);

    // Auto-advance: CLI flag wins, then config, then on by default
    let auto_advance = if cli_no_auto {
        false
    } else {
        config.ticker.auto_advance.unwrap_or(true)
    };

    ResolvedConfig {
        deck_path,
        transition: Duration::from_millis(
            config.general.transition_ms.unwrap_or(DEFAULT_TRANSITION_MS),
        ),
        swipe_threshold: config
            .general
            .swipe_threshold
            .unwrap_or(DEFAULT_SWIPE_THRESHOLD),
        auto_advance,
        auto_advance_interval: Duration::from_millis(
            config.ticker.auto_advance_ms.unwrap_or(DEFAULT_AUTO_ADVANCE_MS),
        ),
        resume_delay: Duration::from_millis(
            config.ticker.resume_delay_ms.unwrap_or(DEFAULT_RESUME_DELAY_MS),
        ),
    }
}
