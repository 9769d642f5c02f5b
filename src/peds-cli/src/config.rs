//! Configuration management for peds CLI

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Listing read by `build` when nothing else is configured
pub const DEFAULT_LISTING: &str = "src/game/rdr/data/PedModels.hpp";

/// Catalog path used when nothing else is configured
pub const DEFAULT_CATALOG: &str = "rdr2_ped_database.xml";

#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    pub listing: Option<PathBuf>,
    pub catalog: Option<PathBuf>,
    pub game: Option<String>,
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("peds");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a file, or the defaults if it doesn't exist
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        toml::from_str(&contents).context("Failed to parse config file")
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, contents)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        Ok(())
    }

    /// Listing path: explicit argument, then config, then the default
    pub fn listing_path(&self, arg: Option<PathBuf>) -> PathBuf {
        arg.or_else(|| self.listing.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LISTING))
    }

    /// Catalog path: explicit argument, then config, then the default
    pub fn catalog_path(&self, arg: Option<PathBuf>) -> PathBuf {
        arg.or_else(|| self.catalog.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG))
    }

    pub fn game(&self) -> &str {
        self.game.as_deref().unwrap_or(peds::DEFAULT_GAME)
    }
}
