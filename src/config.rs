/// Runtime configuration
///
/// Defaults, then an optional JSON file in the user's config directory,
/// then environment variables.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{PortfolioError, Result};

pub const ASSETS_ROOT_VAR: &str = "WOL_ASSETS_ROOT";
pub const SPOTIFY_URL_VAR: &str = "WOL_SPOTIFY_ARTIST_URL";

pub const DEFAULT_SPOTIFY_ARTIST_URL: &str =
    "https://open.spotify.com/artist/74vcDvkBngSQyEXeNRXYpB";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Folder holding the asset directories
    pub assets_root: PathBuf,
    /// Brand asset folders under `assets_root`, merged in order
    pub brand_dirs: Vec<String>,
    /// Freelance/personal asset folders under `assets_root`
    pub freelance_dirs: Vec<String>,
    pub spotify_artist_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assets_root: PathBuf::from("assets"),
            // "branding" is the folder's former name
            brand_dirs: vec!["The Wol Collective".to_string(), "branding".to_string()],
            freelance_dirs: vec!["FreelancePersonalProjects".to_string()],
            spotify_artist_url: DEFAULT_SPOTIFY_ARTIST_URL.to_string(),
        }
    }
}

/// Shape of the optional config file; every field may be omitted
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    assets_root: Option<PathBuf>,
    brand_dirs: Option<Vec<String>>,
    freelance_dirs: Option<Vec<String>>,
    spotify_artist_url: Option<String>,
}

impl Config {
    /// Location of the config file
    /// - Linux: ~/.config/wol-portfolio/config.json
    /// - macOS: ~/Library/Application Support/wol-portfolio/config.json
    /// - Windows: %APPDATA%\wol-portfolio\config.json
    pub fn file_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("wol-portfolio");
        path.push("config.json");
        Some(path)
    }

    /// Load the full configuration; a broken file falls back to defaults
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Some(path) = Self::file_path() {
            if let Err(e) = config.apply_file(&path) {
                log::warn!("Ignoring config file {}: {}", path.display(), e);
            }
        }

        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Overlay values from a JSON file, if it exists
    pub fn apply_file(&mut self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Ok(());
        }

        let text = std::fs::read_to_string(path)?;
        let file: ConfigFile = serde_json::from_str(&text)
            .map_err(|e| PortfolioError::Config(format!("{}: {}", path.display(), e)))?;

        if let Some(root) = file.assets_root {
            self.assets_root = root;
        }
        if let Some(dirs) = file.brand_dirs {
            self.brand_dirs = dirs;
        }
        if let Some(dirs) = file.freelance_dirs {
            self.freelance_dirs = dirs;
        }
        if let Some(url) = file.spotify_artist_url {
            self.spotify_artist_url = url;
        }

        log::info!("Loaded config from {}", path.display());
        Ok(())
    }

    /// Overlay environment variables; empty values are ignored
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(root) = non_empty(ASSETS_ROOT_VAR) {
            self.assets_root = PathBuf::from(root);
        }
        if let Some(url) = non_empty(SPOTIFY_URL_VAR) {
            self.spotify_artist_url = url;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.brand_dirs, vec!["The Wol Collective", "branding"]);
        assert_eq!(config.spotify_artist_url, DEFAULT_SPOTIFY_ARTIST_URL);
    }

    #[test]
    fn test_env_overrides_and_skips_empty() {
        let vars: HashMap<&str, &str> =
            [(ASSETS_ROOT_VAR, "/srv/art"), (SPOTIFY_URL_VAR, "  ")].into_iter().collect();

        let mut config = Config::default();
        config.apply_env(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.assets_root, PathBuf::from("/srv/art"));
        assert_eq!(config.spotify_artist_url, DEFAULT_SPOTIFY_ARTIST_URL);
    }

    #[test]
    fn test_file_overlay() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(
            &path,
            r#"{ "freelance_dirs": ["Commissions"], "spotify_artist_url": "https://open.spotify.com/artist/XYZ" }"#,
        )
        .unwrap();

        let mut config = Config::default();
        config.apply_file(&path).unwrap();

        assert_eq!(config.freelance_dirs, vec!["Commissions"]);
        assert_eq!(config.spotify_artist_url, "https://open.spotify.com/artist/XYZ");
        assert_eq!(config.brand_dirs, Config::default().brand_dirs);
    }

    #[test]
    fn test_missing_file_is_fine() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        assert!(config.apply_file(&tmp.path().join("absent.json")).is_ok());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = Config::default().apply_file(&path).unwrap_err();
        assert!(matches!(err, PortfolioError::Config(_)));
    }
}
