use crate::config::Config;
use crate::error::{AssetBrowserError, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "KONOFAN_ASSETS_CONFIG";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Get the default config directory path
    pub fn config_dir() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(path);
            return path.parent().map(|p| p.to_path_buf());
        }

        ProjectDirs::from("", "", "konofan-assets").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }

        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Load config from the default location, or return default if not found
    pub fn load() -> Result<Config> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load config from an explicit file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(config: &Config, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(config)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Initialize config file with defaults
    pub fn init(path: Option<&Path>) -> Result<PathBuf> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path()
                .ok_or_else(|| AssetBrowserError::Config("Cannot determine config path".into()))?,
        };

        if path.exists() {
            return Err(AssetBrowserError::Config(format!(
                "Config file already exists at {}",
                path.display()
            )));
        }

        Self::save(&Config::default(), &path)?;
        Ok(path)
    }
}
