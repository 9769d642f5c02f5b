//! Stats command handler

use crate::cli::OutputFormat;
use crate::config::Config;
use anyhow::{Context, Result};
use peds::{document, Catalog, CatalogEntry, Category};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
pub struct CatalogSummary<'a> {
    pub version: &'a str,
    pub game: &'a str,
    pub total: usize,
    pub categories: BTreeMap<&'static str, usize>,
    pub legendary: usize,
}

pub fn summarize(catalog: &Catalog) -> CatalogSummary<'_> {
    CatalogSummary {
        version: catalog.version(),
        game: catalog.game(),
        total: catalog.total_count(),
        categories: Category::ALL
            .iter()
            .map(|c| (c.element_name(), catalog.count(*c)))
            .collect(),
        legendary: catalog.iter().filter(|e| e.kind.is_legendary()).count(),
    }
}

/// JSON for `--entries`: the whole catalog, or one category's entries
pub fn entries_json(catalog: &Catalog, category: Option<Category>) -> Result<String> {
    let json = match category {
        Some(c) => serde_json::to_string_pretty(catalog.entries(c))?,
        None => serde_json::to_string_pretty(catalog)?,
    };
    Ok(json)
}

fn selected<'a>(catalog: &'a Catalog, category: Option<Category>) -> Vec<&'a CatalogEntry> {
    match category {
        Some(c) => catalog.entries(c).iter().collect(),
        None => catalog.iter().collect(),
    }
}

pub fn handle(
    config: &Config,
    catalog: Option<PathBuf>,
    entries: bool,
    category: Option<Category>,
    format: OutputFormat,
) -> Result<()> {
    let path = config.catalog_path(catalog);
    let catalog = document::load(&path)
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;
    let list_entries = entries || category.is_some();

    match format {
        OutputFormat::Json if list_entries => {
            println!("{}", entries_json(&catalog, category)?);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summarize(&catalog))?);
        }
        OutputFormat::Text => {
            let summary = summarize(&catalog);
            println!("{} (version {}, game {})", path.display(), summary.version, summary.game);
            super::print_category_counts(&catalog);
            println!("  {:<18} {}", "Legendary", summary.legendary);

            if list_entries {
                println!();
                for e in selected(&catalog, category) {
                    println!(
                        "{:<36} {:<16} {:<9} {}",
                        e.identifier,
                        e.category.to_string(),
                        e.kind.to_string(),
                        e.display_name
                    );
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use peds::Kind;

    fn sample() -> Catalog {
        let mut catalog = Catalog::with_tags("2.0", "RDR2");
        catalog
            .merge([
                CatalogEntry::new("A_C_Deer_01", "White-tailed Deer", Category::Animal, Kind::Regular),
                CatalogEntry::new(
                    "A_C_FishBluegill_01_Legendary",
                    "Legendary Bluegill",
                    Category::Fish,
                    Kind::Legendary,
                ),
            ])
            .unwrap();
        catalog
    }

    #[test]
    fn test_summarize() {
        let catalog = sample();
        let summary = summarize(&catalog);
        assert_eq!(summary.version, "2.0");
        assert_eq!(summary.total, 2);
        assert_eq!(summary.legendary, 1);
        assert_eq!(summary.categories["Fish"], 1);
        assert_eq!(summary.categories["Horses"], 0);
    }

    #[test]
    fn test_full_catalog_json() {
        let json: serde_json::Value =
            serde_json::from_str(&entries_json(&sample(), None).unwrap()).unwrap();

        assert_eq!(json["game"], "RDR2");
        assert_eq!(json["total"], 2);
        assert_eq!(json["counts"]["fish"], 1);
        assert_eq!(json["categories"]["animal"][0]["identifier"], "A_C_Deer_01");
        assert_eq!(json["categories"]["fish"][0]["kind"], "legendary");
    }

    #[test]
    fn test_category_entries_json() {
        let category: Category = "fish".parse().unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&entries_json(&sample(), Some(category)).unwrap()).unwrap();

        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["display_name"], "Legendary Bluegill");
    }

    #[test]
    fn test_selected_filters_by_category() {
        let catalog = sample();
        assert_eq!(selected(&catalog, None).len(), 2);
        assert_eq!(selected(&catalog, Some(Category::Horse)).len(), 0);
    }
}
