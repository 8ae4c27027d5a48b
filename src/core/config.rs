//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → CLI flags.
//!
//! Config lives at `~/.tuido/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! A malformed file degrades to defaults with a logged warning; bad
//! configuration never prevents the session from starting.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::store::TaskStore;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TuidoConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Tasks file path; absolute, or relative to `~/.tuido/`.
    pub tasks_file: Option<String>,
    /// Require a second `d` press to remove the selected task.
    pub confirm_remove: Option<bool>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub tasks_file: PathBuf,
    pub confirm_remove: bool,
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

/// Returns the path to `~/.tuido/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".tuido").join("config.toml"))
}

/// Load config from `~/.tuido/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TuidoConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<TuidoConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(TuidoConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(TuidoConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: TuidoConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// `load_config` with the failure mode flattened: a broken config file is
/// worth a warning, never a refused session.
pub fn load_or_default() -> TuidoConfig {
    load_config().unwrap_or_else(|e| {
        warn!("Ignoring config file: {e}");
        TuidoConfig::default()
    })
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# tuido configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults, then this file, then CLI flags.

# [general]
# tasks_file = "tasks.json"     # absolute, or relative to ~/.tuido/
# confirm_remove = false        # press d twice to remove a task
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

/// Resolve the final config by collapsing: defaults → config file → CLI.
///
/// `cli_store` comes from the `--store` flag (None = not specified).
pub fn resolve(config: &TuidoConfig, cli_store: Option<&Path>) -> ResolvedConfig {
    // Tasks file: CLI → config → default
    let tasks_file = cli_store
        .map(Path::to_path_buf)
        .unwrap_or_else(|| resolve_tasks_file(config));

    ResolvedConfig {
        tasks_file,
        confirm_remove: config.general.confirm_remove.unwrap_or(false),
    }
}

/// Resolves the configured tasks file: absolute paths stand, relative
/// paths anchor to `~/.tuido/` (or the working directory when there is
/// no home to anchor to).
fn resolve_tasks_file(config: &TuidoConfig) -> PathBuf {
    match &config.general.tasks_file {
        Some(configured) => {
            let path = PathBuf::from(configured);
            if path.is_absolute() {
                path
            } else if let Some(home) = dirs::home_dir() {
                home.join(".tuido").join(path)
            } else {
                warn!("Could not determine home directory, using {} as-is", configured);
                path
            }
        }
        None => TaskStore::default_path(),
    }
}
