//! Application settings - persisted user preferences.
//!
//! Settings are loaded from disk at startup and saved when changed.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::state::search::SPECIES;

/// Application settings.
///
/// Serialized to TOML and stored in the user's config directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the analysis service.
    pub api_base_url: String,

    /// Download URL of the coordinate archive.
    pub coordinate_base_url: String,

    /// Species preselected in the gene search.
    pub default_species: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: pse_api::DEFAULT_BASE_URL.to_string(),
            coordinate_base_url: pse_api::DEFAULT_ARCHIVE_URL.to_string(),
            default_species: SPECIES[0].to_string(),
        }
    }
}

impl Settings {
    /// Load settings from the default path.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from a specific path.
    pub fn load_from(path: &PathBuf) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Save settings to the default path.
    pub fn save(&self) -> Result<(), String> {
        self.save_to(&Self::config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {e}"))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {e}"))?;

        std::fs::write(path, content).map_err(|e| format!("Failed to write settings: {e}"))
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "ProteinStructureExplorer", "PSE")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_local_service() {
        let settings = Settings::default();
        assert_eq!(settings.api_base_url, "http://localhost:8080/api");
        assert_eq!(settings.default_species, "human");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let settings = Settings::load_from(&PathBuf::from("/nonexistent/settings.toml"));
        assert_eq!(settings.api_base_url, Settings::default().api_base_url);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let settings: Settings =
            toml::from_str(r#"api_base_url = "http://analysis.internal/api""#).unwrap();
        assert_eq!(settings.api_base_url, "http://analysis.internal/api");
        assert_eq!(
            settings.coordinate_base_url,
            "https://files.rcsb.org/download"
        );
    }
}
