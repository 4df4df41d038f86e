//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.etch/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct EtchConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_topic: Option<String>,
    pub generator: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AnimationConfig {
    /// Milliseconds between revealed art characters.
    pub art_tick_ms: Option<u64>,
    /// Milliseconds between revealed caption characters.
    pub caption_tick_ms: Option<u64>,
    /// Milliseconds between streamed description chunks (gallery generator).
    pub stream_delay_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub cursor_glyph: Option<char>,
    pub placeholder_glyph: Option<char>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TOPIC: &str = "rust";
pub const DEFAULT_GENERATOR: &str = "gallery";
pub const DEFAULT_ART_TICK_MS: u64 = 5;
/// Deliberately 3x slower than the art tick so prose reads comfortably.
pub const DEFAULT_CAPTION_TICK_MS: u64 = 15;
pub const DEFAULT_STREAM_DELAY_MS: u64 = 40;
pub const DEFAULT_CURSOR_GLYPH: char = '|';
pub const DEFAULT_PLACEHOLDER_GLYPH: char = '*';

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub topic: String,
    pub generator: String,
    pub art_tick_ms: u64,
    pub caption_tick_ms: u64,
    pub stream_delay_ms: u64,
    pub cursor_glyph: char,
    pub placeholder_glyph: char,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve(&EtchConfig::default(), None, None)
    }
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

/// Returns the path to `~/.etch/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".etch").join("config.toml"))
}

/// Load config from `~/.etch/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `EtchConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<EtchConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(EtchConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(EtchConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: EtchConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Etch Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_topic = "rust"
# generator = "gallery"              # "gallery" or "instant"

# [animation]
# art_tick_ms = 5                    # reveal speed of the art body
# caption_tick_ms = 15               # slower, so the caption reads comfortably
# stream_delay_ms = 40               # pause between streamed description chunks

# [display]
# cursor_glyph = "|"
# placeholder_glyph = "*"
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

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_topic` and `cli_generator` are from CLI flags (None = not specified).
pub fn resolve(
    config: &EtchConfig,
    cli_topic: Option<&str>,
    cli_generator: Option<&str>,
) -> ResolvedConfig {
    // Topic: CLI → env → config → default
    let topic = cli_topic
        .map(|s| s.to_string())
        .or_else(|| std::env::var("ETCH_TOPIC").ok())
        .or_else(|| config.general.default_topic.clone())
        .unwrap_or_else(|| DEFAULT_TOPIC.to_string());

    // Generator: CLI → env → config → default
    let generator = cli_generator
        .map(|s| s.to_string())
        .or_else(|| std::env::var("ETCH_GENERATOR").ok())
        .or_else(|| config.general.generator.clone())
        .unwrap_or_else(|| DEFAULT_GENERATOR.to_string());

    ResolvedConfig {
        topic,
        generator,
        art_tick_ms: config.animation.art_tick_ms.unwrap_or(DEFAULT_ART_TICK_MS),
        caption_tick_ms: config
            .animation
            .caption_tick_ms
            .unwrap_or(DEFAULT_CAPTION_TICK_MS),
        stream_delay_ms: config
            .animation
            .stream_delay_ms
            .unwrap_or(DEFAULT_STREAM_DELAY_MS),
        cursor_glyph: config.display.cursor_glyph.unwrap_or(DEFAULT_CURSOR_GLYPH),
        placeholder_glyph: config
            .display
            .placeholder_glyph
            .unwrap_or(DEFAULT_PLACEHOLDER_GLYPH),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = EtchConfig::default();
        assert!(config.general.default_topic.is_none());
        assert!(config.animation.art_tick_ms.is_none());
        assert!(config.display.cursor_glyph.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = EtchConfig::default();
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.topic, DEFAULT_TOPIC);
        assert_eq!(resolved.generator, DEFAULT_GENERATOR);
        assert_eq!(resolved.art_tick_ms, DEFAULT_ART_TICK_MS);
        assert_eq!(resolved.caption_tick_ms, DEFAULT_CAPTION_TICK_MS);
        assert_eq!(resolved.cursor_glyph, '|');
        assert_eq!(resolved.placeholder_glyph, '*');
    }

    #[test]
    fn test_caption_tick_is_slower_than_art_tick() {
        assert_eq!(DEFAULT_CAPTION_TICK_MS, DEFAULT_ART_TICK_MS * 3);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = EtchConfig {
            general: GeneralConfig {
                default_topic: Some("moon".to_string()),
                generator: Some("instant".to_string()),
            },
            animation: AnimationConfig {
                art_tick_ms: Some(2),
                caption_tick_ms: Some(20),
                stream_delay_ms: Some(10),
            },
            display: DisplayConfig {
                cursor_glyph: Some('_'),
                placeholder_glyph: Some('·'),
            },
        };
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.topic, "moon");
        assert_eq!(resolved.generator, "instant");
        assert_eq!(resolved.art_tick_ms, 2);
        assert_eq!(resolved.caption_tick_ms, 20);
        assert_eq!(resolved.stream_delay_ms, 10);
        assert_eq!(resolved.cursor_glyph, '_');
        assert_eq!(resolved.placeholder_glyph, '·');
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = EtchConfig {
            general: GeneralConfig {
                default_topic: Some("moon".to_string()),
                generator: Some("gallery".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some("fox"), Some("instant"));
        assert_eq!(resolved.topic, "fox");
        assert_eq!(resolved.generator, "instant");
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[animation]
art_tick_ms = 1
"#;
        let config: EtchConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.animation.art_tick_ms, Some(1));
        assert!(config.animation.caption_tick_ms.is_none());
        assert!(config.general.default_topic.is_none());
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
default_topic = "fox"
generator = "instant"

[animation]
art_tick_ms = 3
caption_tick_ms = 9

[display]
cursor_glyph = "_"
"#;
        let config: EtchConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.default_topic.as_deref(), Some("fox"));
        assert_eq!(config.general.generator.as_deref(), Some("instant"));
        assert_eq!(config.animation.art_tick_ms, Some(3));
        assert_eq!(config.animation.caption_tick_ms, Some(9));
        assert_eq!(config.display.cursor_glyph, Some('_'));
        assert_eq!(config.display.placeholder_glyph, None);
    }
}
