//! Settings resolution.
//!
//! Precedence, lowest to highest: built-in defaults, the JSON config file,
//! environment variables, command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::store::{JsonFileStorage, LoadPolicy};

const APP_NAME: &str = "magic-bag";
const CONFIG_FILE: &str = "config.json";
const DATA_FILE: &str = "items.json";

pub const FILE_ENV: &str = "MAGIC_BAG_FILE";
pub const STRICT_ENV: &str = "MAGIC_BAG_STRICT";

/// Contents of the optional config file. Every field may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FileConfig {
    /// Location of the item file.
    pub data_file: Option<PathBuf>,
    /// Refuse to load an unreadable item file instead of starting empty.
    #[serde(default)]
    pub strict: bool,
}

impl FileConfig {
    /// Load from the user's config directory.
    /// Returns defaults if the file doesn't exist or fails to parse.
    pub fn load() -> Self {
        match get_config_path().and_then(|path| Self::try_load(&path)) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {:#}", e);
                Self::default()
            }
        }
    }

    pub fn try_load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config = serde_json::from_str(&content).context("Failed to parse config file")?;

        Ok(config)
    }
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_file: PathBuf,
    pub policy: LoadPolicy,
}

/// Command-line overrides. `None`/`false` means "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub data_file: Option<PathBuf>,
    pub strict: bool,
}

impl Settings {
    /// Resolve from the config file, the process environment and `overrides`.
    pub fn resolve(overrides: Overrides) -> Self {
        Self::resolve_from(FileConfig::load(), |key| std::env::var(key).ok(), overrides)
    }

    /// Resolution with every source injected.
    pub fn resolve_from(
        file: FileConfig,
        env: impl Fn(&str) -> Option<String>,
        overrides: Overrides,
    ) -> Self {
        let data_file = overrides
            .data_file
            .or_else(|| env(FILE_ENV).filter(|v| !v.is_empty()).map(PathBuf::from))
            .or(file.data_file)
            .unwrap_or_else(default_data_file);

        let strict = overrides
            .strict
            .then_some(true)
            .or_else(|| env(STRICT_ENV).and_then(|v| parse_flag(&v)))
            .unwrap_or(file.strict);

        Self {
            data_file,
            policy: if strict {
                LoadPolicy::Strict
            } else {
                LoadPolicy::Lenient
            },
        }
    }

    pub fn storage(&self) -> JsonFileStorage {
        JsonFileStorage::new(&self.data_file).with_policy(self.policy)
    }
}

/// `None` for values that are neither on nor off, which then fall through to
/// the config file.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// `<data dir>/magic-bag/items.json`, or `./items.json` when the platform has
/// no data directory.
pub fn default_data_file() -> PathBuf {
    match directories::ProjectDirs::from("", "", APP_NAME) {
        Some(dirs) => dirs.data_dir().join(DATA_FILE),
        None => PathBuf::from(DATA_FILE),
    }
}

fn get_config_path() -> Result<PathBuf> {
    let mut path =
        dirs::config_dir().ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    path.push(APP_NAME);
    path.push(CONFIG_FILE);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::resolve_from(FileConfig::default(), no_env, Overrides::default());
        assert_eq!(settings.data_file, default_data_file());
        assert_eq!(settings.policy, LoadPolicy::Lenient);
    }

    #[test]
    fn test_precedence() {
        let file = FileConfig {
            data_file: Some(PathBuf::from("/from/config.json")),
            strict: false,
        };
        let env = |key: &str| match key {
            FILE_ENV => Some("/from/env.json".to_string()),
            _ => None,
        };

        let settings = Settings::resolve_from(file.clone(), env, Overrides::default());
        assert_eq!(settings.data_file, PathBuf::from("/from/env.json"));

        let settings = Settings::resolve_from(
            file,
            env,
            Overrides {
                data_file: Some(PathBuf::from("/from/flag.json")),
                strict: false,
            },
        );
        assert_eq!(settings.data_file, PathBuf::from("/from/flag.json"));
    }

    #[test]
    fn test_strict_from_env() {
        let env = |key: &str| (key == STRICT_ENV).then(|| "TRUE".to_string());
        let settings = Settings::resolve_from(FileConfig::default(), env, Overrides::default());
        assert_eq!(settings.policy, LoadPolicy::Strict);
    }

    #[test]
    fn test_env_can_turn_off_strict_from_config_file() {
        let file = FileConfig {
            data_file: None,
            strict: true,
        };
        let env = |key: &str| (key == STRICT_ENV).then(|| "0".to_string());

        let settings = Settings::resolve_from(file.clone(), env, Overrides::default());
        assert_eq!(settings.policy, LoadPolicy::Lenient);

        let settings = Settings::resolve_from(
            file,
            env,
            Overrides {
                data_file: None,
                strict: true,
            },
        );
        assert_eq!(settings.policy, LoadPolicy::Strict);
    }

    #[test]
    fn test_unrecognized_strict_env_falls_through() {
        let file = FileConfig {
            data_file: None,
            strict: true,
        };
        let env = |key: &str| (key == STRICT_ENV).then(|| "maybe".to_string());

        let settings = Settings::resolve_from(file, env, Overrides::default());
        assert_eq!(settings.policy, LoadPolicy::Strict);
    }

    #[test]
    fn test_config_file_parsing() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "data_file": "/tmp/bag.json", "strict": true }"#)
            .expect("Failed to write config");

        let config = FileConfig::try_load(&path).expect("Failed to load config");
        assert_eq!(config.data_file, Some(PathBuf::from("/tmp/bag.json")));
        assert!(config.strict);
    }

    #[test]
    fn test_missing_config_file_is_default() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = FileConfig::try_load(&dir.path().join("absent.json")).expect("Load failed");
        assert_eq!(config, FileConfig::default());
    }
}
