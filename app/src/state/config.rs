//! Configuration loading and persistence.
//!
//! Handles the TOML config file (~/.config/shotplan/config.toml). Missing
//! keys fall back to defaults so the file stays hand-editable.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use shotplan::{ShotModel, UnitSystem};

/// Top-level persisted config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotplanConfig {
    #[serde(default)]
    pub default_units: UnitSystem,
    /// Course file to load hole layouts from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<PathBuf>,
    #[serde(default)]
    pub model: ShotModel,
    #[serde(default)]
    pub webserver: WebserverSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebserverSection {
    pub bind: String,
}

impl Default for WebserverSection {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3030".into(),
        }
    }
}

impl Default for ShotplanConfig {
    fn default() -> Self {
        Self {
            default_units: UnitSystem::default(),
            course: None,
            model: ShotModel::default(),
            webserver: WebserverSection::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Persistence I/O
// ---------------------------------------------------------------------------

/// Returns `~/.config/shotplan/config.toml`.
pub fn default_config_path() -> PathBuf {
    let dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("shotplan");
    dir.join("config.toml")
}

/// Load persisted config from disk. If the file does not exist, creates it
/// with all-defaults and returns that. Unreadable or malformed files are
/// logged and replaced by defaults in memory (the file is left alone). An
/// out-of-range `[model]` section falls back to the default model only.
pub fn load(path: &Path) -> ShotplanConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<ShotplanConfig>(&contents) {
            Ok(mut config) => {
                tracing::info!("loaded config from {}", path.display());
                if let Err(e) = config.model.validate() {
                    tracing::warn!("ignoring [model] in {}: {e}", path.display());
                    config.model = ShotModel::default();
                }
                config
            }
            Err(e) => {
                tracing::warn!("failed to parse {}: {e}", path.display());
                ShotplanConfig::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            let defaults = ShotplanConfig::default();
            tracing::info!("no config file found, creating {}", path.display());
            save_to(path, &defaults);
            defaults
        }
        Err(e) => {
            tracing::warn!("failed to read {}: {e}", path.display());
            ShotplanConfig::default()
        }
    }
}

/// Write config to a specific path. Creates parent dirs if needed. Never panics.
pub fn save_to(path: &Path, config: &ShotplanConfig) {
    if let Some(dir) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(dir) {
            tracing::warn!("failed to create config dir {}: {e}", dir.display());
            return;
        }
    }
    match toml::to_string_pretty(config) {
        Ok(contents) => {
            if let Err(e) = std::fs::write(path, contents) {
                tracing::warn!("failed to write {}: {e}", path.display());
            }
        }
        Err(e) => {
            tracing::warn!("failed to serialize config: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = load(&path);
        assert_eq!(config, ShotplanConfig::default());
        assert!(path.exists());

        let reloaded = load(&path);
        assert_eq!(reloaded, config);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "default_units = \"metric\"\ncourse = \"/tmp/links.toml\"\n\n[model]\nclamp_carry = true\n",
        )
        .unwrap();

        let config = load(&path);
        assert_eq!(config.default_units, UnitSystem::Metric);
        assert_eq!(config.course, Some(PathBuf::from("/tmp/links.toml")));
        assert!(config.model.clamp_carry);
        assert_eq!(config.model.wind_carry_coeff, 1.8);
        assert_eq!(config.webserver.bind, "127.0.0.1:3030");
    }

    #[test]
    fn malformed_file_falls_back_without_overwriting() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "default_units = 42").unwrap();

        assert_eq!(load(&path), ShotplanConfig::default());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "default_units = 42");
    }

    #[test]
    fn invalid_model_section_falls_back_to_default_model() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "default_units = \"metric\"\n\n[model]\nwind_carry_coeff = nan\n",
        )
        .unwrap();

        let config = load(&path);
        assert_eq!(config.model, ShotModel::default());
        assert_eq!(config.default_units, UnitSystem::Metric);
    }
}
