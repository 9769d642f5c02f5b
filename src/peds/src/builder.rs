//! Turning raw identifiers into candidate catalog entries

use crate::catalog::CatalogEntry;
use crate::listing::ListingEntry;
use crate::reference::{CuratedSet, ReferenceTables};

/// Candidate entries for listing pairs, sorted by identifier.
///
/// The curated table decides the display name when it knows the model.
/// Otherwise a label that differs from the identifier is used as-is, and
/// anything else gets a derived name.
pub fn entries_from_listing(tables: &ReferenceTables, listing: &[ListingEntry]) -> Vec<CatalogEntry> {
    let mut sorted: Vec<&ListingEntry> = listing.iter().collect();
    sorted.sort_by(|a, b| a.identifier.cmp(&b.identifier));

    sorted
        .into_iter()
        .map(|item| {
            let curated: Option<&str> = tables.curated_name(&item.identifier);
            match curated.or_else(|| item.distinct_label()) {
                Some(name) => CatalogEntry::named(tables, &item.identifier, name),
                None => CatalogEntry::from_identifier(tables, &item.identifier),
            }
        })
        .collect()
}

/// Candidate entries for one curated set, in table order
pub fn curated_entries(tables: &ReferenceTables, set: CuratedSet) -> Vec<CatalogEntry> {
    tables
        .set(set)
        .iter()
        .map(|ped| CatalogEntry::named(tables, ped.model, ped.name))
        .collect()
}

/// Candidate entries for every curated set
pub fn all_curated_entries(tables: &ReferenceTables) -> Vec<CatalogEntry> {
    tables
        .curated()
        .flat_map(|(set, _)| curated_entries(tables, set))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::category::{Category, Kind};
    use crate::listing::parse_listing;

    #[test]
    fn test_listing_entries_sorted_and_named() {
        let tables = ReferenceTables::builtin();
        let listing = vec![
            ListingEntry::new("Player_Zero", "Player_Zero"),
            ListingEntry::new("A_C_Horse_Gang_Lenny", "Lenny's Horse"),
            ListingEntry::new("A_C_Deer_01", "Some Deer"),
        ];

        let entries = entries_from_listing(tables, &listing);
        let ids: Vec<_> = entries.iter().map(|e| e.identifier.as_str()).collect();
        assert_eq!(ids, vec!["A_C_Deer_01", "A_C_Horse_Gang_Lenny", "Player_Zero"]);

        // Curated name wins over the label
        assert_eq!(entries[0].display_name, "White-tailed Deer");
        // Distinct label is kept
        assert_eq!(entries[1].display_name, "Lenny's Horse");
        assert_eq!(entries[1].category, Category::Horse);
        // Label equal to the identifier falls through to derivation
        assert_eq!(entries[2].display_name, "Arthur Morgan");
        assert_eq!(entries[2].category, Category::Human);
    }

    #[test]
    fn test_bare_prefix_in_listing_still_merges() {
        let tables = ReferenceTables::builtin();
        let listing = parse_listing(r#"{"CS_dutch"_J, "CS_dutch"}, {"A_C_"_J, "A_C_"}"#);

        let entries = entries_from_listing(tables, &listing);
        assert!(entries.iter().all(|e| !e.display_name.is_empty()));

        let mut catalog = Catalog::new();
        let report = catalog.merge(entries).unwrap();
        assert_eq!(report.total_added(), 2);
        assert_eq!(catalog.get("A_C_").unwrap().display_name, "A C");
        assert_eq!(catalog.get("CS_dutch").unwrap().display_name, "Dutch van der Linde");
    }

    #[test]
    fn test_curated_sets_land_in_expected_categories() {
        let tables = ReferenceTables::builtin();

        for entry in curated_entries(tables, CuratedSet::LegendaryAnimals) {
            assert_eq!(entry.category, Category::LegendaryAnimal, "{}", entry.identifier);
            assert_eq!(entry.kind, Kind::Legendary);
        }
        for entry in curated_entries(tables, CuratedSet::Fish) {
            assert_eq!((entry.category, entry.kind), (Category::Fish, Kind::Regular));
        }
        for entry in curated_entries(tables, CuratedSet::LegendaryFish) {
            assert_eq!((entry.category, entry.kind), (Category::Fish, Kind::Legendary));
        }
        for entry in curated_entries(tables, CuratedSet::Animals) {
            assert_eq!(
                (entry.category, entry.kind),
                (Category::Animal, Kind::Regular),
                "{}",
                entry.identifier
            );
        }
    }

    #[test]
    fn test_all_curated_entries_count() {
        let tables = ReferenceTables::builtin();
        let expected: usize = tables.curated().map(|(_, peds)| peds.len()).sum();
        assert_eq!(all_curated_entries(tables).len(), expected);
    }
}
