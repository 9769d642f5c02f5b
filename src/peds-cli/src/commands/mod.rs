//! Command handlers for peds CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod build;
pub mod classify;
pub mod configure;
pub mod enhance;
pub mod stats;

use peds::{Catalog, Category};

/// Per-category counts, one line each, in document order
pub fn category_lines(catalog: &Catalog) -> Vec<String> {
    Category::ALL
        .iter()
        .map(|c| format!("  {:<18} {}", c.element_name(), catalog.count(*c)))
        .collect()
}

pub fn print_category_counts(catalog: &Catalog) {
    for line in category_lines(catalog) {
        println!("{}", line);
    }
    println!("  {:<18} {}", "Total", catalog.total_count());
}

#[cfg(test)]
mod tests {
    use super::*;
    use peds::{CatalogEntry, Kind};

    #[test]
    fn test_category_lines_cover_every_category() {
        let mut catalog = Catalog::new();
        catalog
            .merge([CatalogEntry::new(
                "A_C_Deer_01",
                "White-tailed Deer",
                Category::Animal,
                Kind::Regular,
            )])
            .unwrap();

        let lines = category_lines(&catalog);
        assert_eq!(lines.len(), Category::ALL.len());
        assert!(lines.iter().any(|l| l.contains("Animals") && l.ends_with(" 1")));
        assert!(lines.iter().any(|l| l.contains("Horses") && l.ends_with(" 0")));
    }
}
