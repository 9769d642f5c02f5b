//! Enhance command handler
//!
//! Merges each curated reference set into an existing catalog.

use crate::config::Config;
use anyhow::{Context, Result};
use peds::{builder, document, Catalog, ReferenceTables};
use std::path::{Path, PathBuf};

pub fn handle(config: &Config, input: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let input = config.catalog_path(input);
    let output = output.unwrap_or_else(|| input.clone());

    let (catalog, added) = enhance(&input, &output)?;

    for (label, count) in &added {
        println!("Added {} {}", count, label);
    }
    println!("Wrote {}", output.display());
    super::print_category_counts(&catalog);

    Ok(())
}

/// Load `input` (or start empty), merge every curated set, save to `output`.
///
/// Returns the resulting catalog and the number of entries each set added.
pub fn enhance(input: &Path, output: &Path) -> Result<(Catalog, Vec<(&'static str, usize)>)> {
    let tables = ReferenceTables::builtin();
    let mut catalog = document::load_or_new(input)
        .with_context(|| format!("Failed to read catalog {}", input.display()))?;

    let mut added = Vec::new();
    for (set, _) in tables.curated() {
        let report = catalog
            .merge(builder::curated_entries(tables, set))
            .with_context(|| format!("Failed to merge {}", set.label()))?;
        tracing::debug!("{}: {} added, {} skipped", set.label(), report.total_added(), report.skipped);
        added.push((set.label(), report.total_added()));
    }

    document::save(&catalog, output)
        .with_context(|| format!("Failed to write catalog to {}", output.display()))?;

    Ok((catalog, added))
}
