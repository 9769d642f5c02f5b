//! # peds
//!
//! Categorized catalog of game ped (character and creature) models.
//!
//! This library provides functionality to:
//! - Classify raw model identifiers into Human, Animal, Horse, Fish and
//!   LegendaryAnimal categories with a regular/legendary rarity tag
//! - Derive readable display names from model identifiers
//! - Merge new entries into an existing catalog without duplicates
//! - Read and write the catalog XML document
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use peds::{builder, document, ReferenceTables};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let path = Path::new("rdr2_ped_database.xml");
//! let tables = ReferenceTables::builtin();
//!
//! let mut catalog = document::load_or_new(path)?;
//! let report = catalog.merge(builder::all_curated_entries(tables))?;
//! println!("Added {} peds, {} total", report.total_added(), catalog.total_count());
//!
//! document::save(&catalog, path)?;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod catalog;
pub mod category;
pub mod classify;
pub mod document;
pub mod listing;
pub mod names;
pub mod reference;

// Re-export commonly used items
#[doc(inline)]
pub use catalog::{Catalog, CatalogEntry, CatalogError, MergeReport, DEFAULT_GAME, DEFAULT_VERSION};
#[doc(inline)]
pub use category::{Category, Kind, ParseError};
#[doc(inline)]
pub use classify::{classify, classify_with, Classification, Rule, RULES};
#[doc(inline)]
pub use document::DocumentError;
#[doc(inline)]
pub use listing::{ListingEntry, ListingSource};
#[doc(inline)]
pub use names::{derive_name, derive_name_with, humanize};
#[doc(inline)]
pub use reference::{CuratedSet, KnownPed, ReferenceTables, REFERENCE_VERSION};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legendary_fish_scenario() {
        let id = "A_C_FishBluegill_01_Legendary";
        assert_eq!(classify(id, None).pair(), (Category::Fish, Kind::Legendary));
        assert_eq!(derive_name(id), "Legendary Bluegill");
    }

    #[test]
    fn test_story_character_scenario() {
        assert_eq!(classify("CS_dutch", None).category, Category::Human);
        assert_eq!(derive_name("CS_dutch"), "Dutch van der Linde");
    }

    #[test]
    fn test_horse_scenario() {
        assert_eq!(classify("A_C_Horse_Gang_Lenny", None).category, Category::Horse);
    }

    #[test]
    fn test_existing_legendary_not_readded() {
        let mut catalog = Catalog::new();
        let bear = || {
            CatalogEntry::new(
                "A_C_Bear_01_Legendary",
                "Legendary Bharati Grizzly Bear",
                Category::LegendaryAnimal,
                Kind::Legendary,
            )
        };
        catalog.merge([bear()]).unwrap();
        let before = catalog.clone();

        let report = catalog.merge([bear()]).unwrap();
        assert_eq!(report.total_added(), 0);
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_full_pipeline() {
        let tables = ReferenceTables::builtin();
        let listing = listing::fallback_listing();

        let mut catalog = Catalog::new();
        catalog.merge(builder::entries_from_listing(tables, &listing)).unwrap();
        catalog.merge(builder::all_curated_entries(tables)).unwrap();

        let parsed = document::from_xml(&document::to_xml(&catalog).unwrap()).unwrap();
        assert_eq!(parsed, catalog);
        assert_eq!(
            parsed.count(Category::Horse),
            2,
            "both gang horses from the fallback list"
        );
        assert_eq!(parsed.get("Player_Zero").unwrap().display_name, "Arthur Morgan");
    }
}
