//! Build command handler
//!
//! Extracts peds from a model listing and writes a fresh catalog.

use crate::config::Config;
use anyhow::{Context, Result};
use peds::{builder, document, listing, Catalog, ListingSource, ReferenceTables, DEFAULT_VERSION};
use std::path::{Path, PathBuf};

pub fn handle(
    config: &Config,
    listing: Option<PathBuf>,
    output: Option<PathBuf>,
    with_curated: bool,
) -> Result<()> {
    let listing_path = config.listing_path(listing);
    let output = config.catalog_path(output);

    let (catalog, source) = build(&listing_path, &output, config.game(), with_curated)?;

    if source == ListingSource::Fallback {
        println!("Listing {} unavailable, used built-in list", listing_path.display());
    }
    println!("Wrote {}", output.display());
    super::print_category_counts(&catalog);

    Ok(())
}

/// Build a catalog from the listing at `listing_path` and save it to `output`
pub fn build(
    listing_path: &Path,
    output: &Path,
    game: &str,
    with_curated: bool,
) -> Result<(Catalog, ListingSource)> {
    let tables = ReferenceTables::builtin();
    let (entries, source) = listing::read_listing_or_fallback(Some(listing_path));

    let mut catalog = Catalog::with_tags(DEFAULT_VERSION, game);
    catalog
        .merge(builder::entries_from_listing(tables, &entries))
        .context("Failed to add listing entries")?;

    if with_curated {
        let report = catalog
            .merge(builder::all_curated_entries(tables))
            .context("Failed to add curated entries")?;
        tracing::info!("Added {} curated peds", report.total_added());
    }

    document::save(&catalog, output)
        .with_context(|| format!("Failed to write catalog to {}", output.display()))?;

    Ok((catalog, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use peds::Category;
    use std::fs;

    const LISTING: &str = r#"
static const std::vector<std::pair<Hash, const char*>> g_PedModels = {
    {"A_C_Horse_Gang_Lenny"_J, "A_C_Horse_Gang_Lenny"},
    {"CS_dutch"_J, "CS_dutch"},
    {"A_C_Deer_01"_J, "A_C_Deer_01"},
};
"#;

    #[test]
    fn test_build_from_listing() {
        let dir = tempfile::tempdir().unwrap();
        let listing_path = dir.path().join("PedModels.hpp");
        let output = dir.path().join("out").join("peds.xml");
        fs::write(&listing_path, LISTING).unwrap();

        let (catalog, source) = build(&listing_path, &output, "RDR2", false).unwrap();
        assert_eq!(source, ListingSource::File);
        assert_eq!(catalog.total_count(), 3);
        assert_eq!(catalog.count(Category::Horse), 1);
        assert_eq!(catalog.get("CS_dutch").unwrap().display_name, "Dutch van der Linde");

        let saved = document::load(&output).unwrap();
        assert_eq!(saved, catalog);
    }

    #[test]
    fn test_build_falls_back_when_listing_missing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("peds.xml");

        let (catalog, source) =
            build(&dir.path().join("missing.hpp"), &output, "RDR2", false).unwrap();
        assert_eq!(source, ListingSource::Fallback);
        assert_eq!(catalog.total_count(), listing::fallback_listing().len());
    }

    #[test]
    fn test_build_with_curated_and_game_tag() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("peds.xml");

        let (catalog, _) =
            build(&dir.path().join("missing.hpp"), &output, "RDR2-Online", true).unwrap();
        assert_eq!(catalog.game(), "RDR2-Online");
        assert!(catalog.contains("A_C_Bear_01_Legendary"));
        assert!(catalog.count(Category::Fish) > 0);
    }
}
