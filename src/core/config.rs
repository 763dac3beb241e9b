//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.eduapp/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::plan::Plan;
use crate::core::player::DEFAULT_DURATION_SECS;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct EduConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub player: PlayerConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_plan: Option<Plan>,
    pub catalog_file: Option<String>,
    pub auto_login: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PlayerConfig {
    pub duration_secs: Option<u32>,
    pub tick_ms: Option<u64>,
    pub skip_secs: Option<u32>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TICK_MS: u64 = 1000;
pub const DEFAULT_SKIP_SECS: u32 = 10;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub plan: Plan,
    pub catalog_file: Option<PathBuf>,
    pub auto_login: bool,
    pub playback_duration: u32,
    pub tick_ms: u64,
    pub skip_secs: u32,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve_with_env(&EduConfig::default(), &CliOverrides::default(), |_| None)
    }
}

/// Values given on the command line. `None` / `false` means "not given".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub plan: Option<Plan>,
    pub login: bool,
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

/// Returns the path to `~/.eduapp/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".eduapp").join("config.toml"))
}

/// Load config from `~/.eduapp/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `EduConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<EduConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(EduConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(EduConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<EduConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: EduConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# EduApp Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_plan = "free"              # "free", "pro" or "pro-plus" (or EDUAPP_PLAN)
# catalog_file = "catalog.json"      # Relative to ~/.eduapp/ (or EDUAPP_CATALOG)
# auto_login = false                 # Skip the login screen

# [player]
# duration_secs = 300                # Length of the simulated lesson video
# tick_ms = 1000                     # Real time per simulated second
# skip_secs = 10                     # Seek step for ←/→
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &EduConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], with the environment supplied by the caller.
pub fn resolve_with_env(
    config: &EduConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Plan: CLI → env → config → default
    let env_plan = env("EDUAPP_PLAN").and_then(|raw| match raw.parse::<Plan>() {
        Ok(plan) => Some(plan),
        Err(e) => {
            warn!("Ignoring EDUAPP_PLAN: {}", e);
            None
        }
    });
    let plan = cli
        .plan
        .or(env_plan)
        .or(config.general.default_plan)
        .unwrap_or_default();

    // Catalog file: env → config (relative paths are under ~/.eduapp/)
    let catalog_file = env("EDUAPP_CATALOG")
        .map(PathBuf::from)
        .or_else(|| {
            config.general.catalog_file.as_ref().map(|file| {
                let path = PathBuf::from(file);
                if path.is_absolute() {
                    path
                } else {
                    dirs::home_dir()
                        .map(|h| h.join(".eduapp").join(&path))
                        .unwrap_or(path)
                }
            })
        });

    ResolvedConfig {
        plan,
        catalog_file,
        auto_login: cli.login || config.general.auto_login.unwrap_or(false),
        playback_duration: config
            .player
            .duration_secs
            .unwrap_or(DEFAULT_DURATION_SECS),
        tick_ms: config.player.tick_ms.unwrap_or(DEFAULT_TICK_MS).max(1),
        skip_secs: config.player.skip_secs.unwrap_or(DEFAULT_SKIP_SECS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = EduConfig::default();
        assert!(config.general.default_plan.is_none());
        assert!(config.player.tick_ms.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&EduConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.plan, Plan::Free);
        assert_eq!(resolved.playback_duration, DEFAULT_DURATION_SECS);
        assert_eq!(resolved.tick_ms, DEFAULT_TICK_MS);
        assert_eq!(resolved.skip_secs, DEFAULT_SKIP_SECS);
        assert!(resolved.catalog_file.is_none());
        assert!(!resolved.auto_login);
    }

    #[test]
    fn test_resolve_precedence_cli_env_config() {
        let config = EduConfig {
            general: GeneralConfig {
                default_plan: Some(Plan::Pro),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = |key: &str| (key == "EDUAPP_PLAN").then(|| "pro-plus".to_string());

        let from_config = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(from_config.plan, Plan::Pro);

        let from_env = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(from_env.plan, Plan::ProPlus);

        let cli = CliOverrides {
            plan: Some(Plan::Free),
            login: false,
        };
        assert_eq!(resolve_with_env(&config, &cli, env).plan, Plan::Free);
    }

    #[test]
    fn test_invalid_env_plan_falls_through() {
        let config = EduConfig {
            general: GeneralConfig {
                default_plan: Some(Plan::Pro),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = |key: &str| (key == "EDUAPP_PLAN").then(|| "platinum".to_string());
        assert_eq!(
            resolve_with_env(&config, &CliOverrides::default(), env).plan,
            Plan::Pro
        );
    }

    #[test]
    fn test_env_catalog_wins_over_config() {
        let config = EduConfig {
            general: GeneralConfig {
                catalog_file: Some("/srv/catalog.json".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.catalog_file, Some(PathBuf::from("/srv/catalog.json")));

        let env = |key: &str| (key == "EDUAPP_CATALOG").then(|| "/tmp/other.json".to_string());
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.catalog_file, Some(PathBuf::from("/tmp/other.json")));
    }

    #[test]
    fn test_cli_login_or_config_auto_login() {
        let mut config = EduConfig::default();
        let cli = CliOverrides {
            plan: None,
            login: true,
        };
        assert!(resolve_with_env(&config, &cli, no_env).auto_login);

        config.general.auto_login = Some(true);
        assert!(resolve_with_env(&config, &CliOverrides::default(), no_env).auto_login);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
default_plan = "pro-plus"
catalog_file = "custom.json"
auto_login = true

[player]
duration_secs = 120
tick_ms = 250
skip_secs = 15
"#;
        let config: EduConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.default_plan, Some(Plan::ProPlus));
        assert_eq!(config.general.catalog_file.as_deref(), Some("custom.json"));
        assert_eq!(config.player.duration_secs, Some(120));
        assert_eq!(config.player.tick_ms, Some(250));
        assert_eq!(config.player.skip_secs, Some(15));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[player]
tick_ms = 500
"#;
        let config: EduConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.player.tick_ms, Some(500));
        assert!(config.general.default_plan.is_none());
        assert!(config.player.duration_secs.is_none());
    }

    #[test]
    fn test_unknown_plan_in_toml_is_parse_error() {
        let toml_str = r#"
[general]
default_plan = "gold"
"#;
        assert!(toml::from_str::<EduConfig>(toml_str).is_err());
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general]\ndefault_plan = \"pro\"\n").unwrap();
        let config = load_config_from(&path).unwrap();
        assert_eq!(config.general.default_plan, Some(Plan::Pro));

        fs::write(&path, "[general\n").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_generate_default_config_is_all_comments() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        generate_default_config(&path);
        let config = load_config_from(&path).unwrap();
        assert!(config.general.default_plan.is_none());
    }
}
