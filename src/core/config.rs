//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.lectern/config.toml`. If missing on first run, a
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
pub struct LecternConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub appearance: AppearanceConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// 1-indexed topic to open on, as a presenter would count them.
    pub start_topic: Option<usize>,
    pub show_welcome: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AppearanceConfig {
    /// A syntect theme name for code slides.
    pub code_theme: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_CODE_THEME: &str = "base16-ocean.dark";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// 0-indexed starting topic, already converted from the 1-indexed
    /// user-facing value. None means topic 0.
    pub start_topic: Option<usize>,
    pub show_welcome: bool,
    pub code_theme: String,
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

/// Returns the path to `~/.lectern/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".lectern").join("config.toml"))
}

/// Load config from `~/.lectern/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `LecternConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<LecternConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(LecternConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(LecternConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: LecternConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Lectern Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_topic = 1          # 1-indexed topic to open on
# show_welcome = true      # false skips the welcome screen

# [appearance]
# code_theme = "base16-ocean.dark"   # syntect theme for code slides
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
/// `cli_topic` is the 1-indexed `--topic` flag and `cli_no_welcome` the
/// `--no-welcome` flag (false = not specified).
pub fn resolve(
    config: &LecternConfig,
    cli_topic: Option<usize>,
    cli_no_welcome: bool,
) -> ResolvedConfig {
    // Start topic: CLI → env → config (all 1-indexed, collapsed to 0-indexed)
    let start_topic = cli_topic
        .or_else(|| {
            std::env::var("LECTERN_START_TOPIC")
                .ok()
                .and_then(|s| s.parse().ok())
        })
        .or(config.general.start_topic)
        .filter(|&t| t > 0)
        .map(|t| t - 1);

    // Welcome screen: CLI flag wins, then env, then config, then on
    let show_welcome = if cli_no_welcome {
        false
    } else {
        std::env::var("LECTERN_SHOW_WELCOME")
            .ok()
            .and_then(|s| s.parse().ok())
            .or(config.general.show_welcome)
            .unwrap_or(true)
    };

    // Code theme: env → config → default
    let code_theme = std::env::var("LECTERN_CODE_THEME")
        .ok()
        .or_else(|| config.appearance.code_theme.clone())
        .unwrap_or_else(|| DEFAULT_CODE_THEME.to_string());

    ResolvedConfig {
        start_topic,
        show_welcome,
        code_theme,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = LecternConfig::default();
        assert!(config.general.start_topic.is_none());
        assert!(config.general.show_welcome.is_none());
        assert!(config.appearance.code_theme.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = LecternConfig::default();
        let resolved = resolve(&config, None, false);
        assert_eq!(resolved.start_topic, None);
        assert!(resolved.show_welcome);
        assert_eq!(resolved.code_theme, DEFAULT_CODE_THEME);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = LecternConfig {
            general: GeneralConfig {
                start_topic: Some(3),
                show_welcome: Some(false),
            },
            appearance: AppearanceConfig {
                code_theme: Some("InspiredGitHub".to_string()),
            },
        };
        let resolved = resolve(&config, None, false);
        assert_eq!(resolved.start_topic, Some(2));
        assert!(!resolved.show_welcome);
        assert_eq!(resolved.code_theme, "InspiredGitHub");
    }

    #[test]
    fn test_resolve_cli_topic_wins() {
        let config = LecternConfig {
            general: GeneralConfig {
                start_topic: Some(5),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some(2), false);
        assert_eq!(resolved.start_topic, Some(1));
    }

    #[test]
    fn test_resolve_no_welcome_flag_wins() {
        let config = LecternConfig {
            general: GeneralConfig {
                show_welcome: Some(true),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, None, true);
        assert!(!resolved.show_welcome);
    }

    #[test]
    fn test_resolve_rejects_zero_topic() {
        // Topics are 1-indexed at the surface; 0 is not a topic.
        let config = LecternConfig::default();
        let resolved = resolve(&config, Some(0), false);
        assert_eq!(resolved.start_topic, None);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
start_topic = 4
show_welcome = false

[appearance]
code_theme = "Solarized (dark)"
"#;
        let config: LecternConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.start_topic, Some(4));
        assert_eq!(config.general.show_welcome, Some(false));
        assert_eq!(
            config.appearance.code_theme.as_deref(),
            Some("Solarized (dark)")
        );
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[general]
start_topic = 2
"#;
        let config: LecternConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.start_topic, Some(2));
        assert!(config.general.show_welcome.is_none());
        assert!(config.appearance.code_theme.is_none());
    }
}
