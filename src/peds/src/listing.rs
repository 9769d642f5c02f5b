//! Source listing extraction
//!
//! Model listings are C++ headers with one initializer per ped:
//!
//! ```text
//! {"CS_dutch"_J, "CS_dutch"},
//! ```
//!
//! The first string is the model identifier, the second a label. Anything
//! else in the file is ignored.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::io;
use std::path::Path;

use crate::reference::FALLBACK_PEDS;

static ENTRY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\{"([^"]+)"_J,\s*"([^"]+)"\}"#).expect("static listing pattern")
});

/// One `(identifier, label)` pair from a listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub identifier: String,
    pub label: String,
}

impl ListingEntry {
    pub fn new(identifier: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            label: label.into(),
        }
    }

    /// The label, when it says something the identifier does not
    pub fn distinct_label(&self) -> Option<&str> {
        let label = self.label.trim();
        (!label.is_empty() && label != self.identifier).then_some(label)
    }
}

/// Where a set of listing entries came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingSource {
    File,
    Fallback,
}

/// Extract every entry matching the listing pattern
pub fn parse_listing(text: &str) -> Vec<ListingEntry> {
    ENTRY_PATTERN
        .captures_iter(text)
        .map(|cap| ListingEntry::new(&cap[1], &cap[2]))
        .collect()
}

pub fn read_listing(path: &Path) -> io::Result<Vec<ListingEntry>> {
    let text = fs::read_to_string(path)?;
    Ok(parse_listing(&text))
}

/// Built-in identifiers used when no listing can be read
pub fn fallback_listing() -> Vec<ListingEntry> {
    FALLBACK_PEDS
        .iter()
        .map(|id| ListingEntry::new(*id, *id))
        .collect()
}

/// Read a listing, falling back to the built-in identifiers if it cannot be
/// read. Never fails.
pub fn read_listing_or_fallback(path: Option<&Path>) -> (Vec<ListingEntry>, ListingSource) {
    let Some(path) = path else {
        tracing::info!("No listing given, using {} built-in peds", FALLBACK_PEDS.len());
        return (fallback_listing(), ListingSource::Fallback);
    };

    match read_listing(path) {
        Ok(entries) => {
            tracing::info!("Found {} peds in {}", entries.len(), path.display());
            (entries, ListingSource::File)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::info!("{} not found, using fallback list", path.display());
            (fallback_listing(), ListingSource::Fallback)
        }
        Err(e) => {
            tracing::warn!("Could not read {}: {}, using fallback list", path.display(), e);
            (fallback_listing(), ListingSource::Fallback)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = r#"
#pragma once
namespace YimMenu::Data
{
	inline const std::vector<std::pair<joaat_t, const char*>> g_PedModels = {
		{"A_C_Cougar_03"_J, "A_C_Cougar_03"},
		{"CS_dutch"_J,   "CS_dutch"},
		{"A_C_Horse_Gang_Lenny"_J, "Lenny's Horse"},
		// {"commented"_J} is not a full entry
	};
}
"#;

    #[test]
    fn test_parse_listing() {
        let entries = parse_listing(HEADER);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], ListingEntry::new("A_C_Cougar_03", "A_C_Cougar_03"));
        assert_eq!(entries[1].identifier, "CS_dutch");
        assert_eq!(entries[2].label, "Lenny's Horse");
    }

    #[test]
    fn test_distinct_label() {
        assert_eq!(ListingEntry::new("CS_dutch", "CS_dutch").distinct_label(), None);
        assert_eq!(ListingEntry::new("CS_dutch", " ").distinct_label(), None);
        assert_eq!(
            ListingEntry::new("A_C_Horse_Gang_Lenny", "Lenny's Horse").distinct_label(),
            Some("Lenny's Horse")
        );
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        assert!(parse_listing("").is_empty());
        assert!(parse_listing("no entries here").is_empty());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let temp_dir = tempfile::tempdir().unwrap();
        let (entries, source) =
            read_listing_or_fallback(Some(&temp_dir.path().join("PedModels.hpp")));
        assert_eq!(source, ListingSource::Fallback);
        assert_eq!(entries.len(), FALLBACK_PEDS.len());
    }

    #[test]
    fn test_reads_listing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("PedModels.hpp");
        fs::write(&path, HEADER).unwrap();

        let (entries, source) = read_listing_or_fallback(Some(&path));
        assert_eq!(source, ListingSource::File);
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn test_no_path_uses_fallback() {
        let (entries, source) = read_listing_or_fallback(None);
        assert_eq!(source, ListingSource::Fallback);
        assert!(entries.iter().any(|e| e.identifier == "Player_Zero"));
    }
}
