//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up peds CLI defaults.

use crate::config::Config;
use anyhow::Result;
use std::path::PathBuf;

/// Handle the configure command
///
/// # Arguments
/// * `listing` - Default model listing path
/// * `catalog` - Default catalog path
/// * `game` - Game tag written to new catalogs
/// * `show` - If true, show current configuration
pub fn handle(
    listing: Option<PathBuf>,
    catalog: Option<PathBuf>,
    game: Option<String>,
    show: bool,
) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config);
        return Ok(());
    }

    if apply(&mut config, listing, catalog, game) {
        config.save()?;
        show_config(&config);
    } else {
        show_usage();
    }

    Ok(())
}

/// Apply any given settings, returning whether anything changed
fn apply(
    config: &mut Config,
    listing: Option<PathBuf>,
    catalog: Option<PathBuf>,
    game: Option<String>,
) -> bool {
    let changed = listing.is_some() || catalog.is_some() || game.is_some();

    if listing.is_some() {
        config.listing = listing;
    }
    if catalog.is_some() {
        config.catalog = catalog;
    }
    if game.is_some() {
        config.game = game;
    }

    changed
}

fn show_config(config: &Config) {
    println!("Listing: {}", config.listing_path(None).display());
    println!("Catalog: {}", config.catalog_path(None).display());
    println!("Game:    {}", config.game());

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

fn show_usage() {
    println!("Usage: peds configure --listing PedModels.hpp --catalog peds.xml --game RDR2");
    println!("   or: peds configure --show");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_usage_does_not_panic() {
        show_usage();
    }

    #[test]
    fn test_apply_only_overrides_given_values() {
        let mut config = Config {
            listing: Some(PathBuf::from("old.hpp")),
            catalog: Some(PathBuf::from("old.xml")),
            game: None,
        };

        assert!(apply(&mut config, None, Some(PathBuf::from("new.xml")), None));
        assert_eq!(config.listing, Some(PathBuf::from("old.hpp")));
        assert_eq!(config.catalog, Some(PathBuf::from("new.xml")));

        assert!(!apply(&mut config, None, None, None));
    }
}
