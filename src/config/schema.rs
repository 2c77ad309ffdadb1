use std::path::PathBuf;

use serde::Deserialize;

use super::load::default_data_dir;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/tapedeck/config.toml` or `~/.config/tapedeck/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TAPEDECK__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Directory the file backend keeps its JSON documents in.
    ///
    /// When unset, falls back to `$XDG_DATA_HOME/tapedeck` or
    /// `~/.local/share/tapedeck`.
    pub data_dir: Option<PathBuf>,
}

impl StorageSettings {
    /// The directory to store data in, configured or XDG default.
    pub fn data_dir(&self) -> Option<PathBuf> {
        self.data_dir.clone().or_else(default_data_dir)
    }
}
