//! In-memory ped catalog and the merge operation.
//!
//! A [`Catalog`] partitions entries by [`Category`] and keeps derived counts.
//! Counts are never adjusted incrementally; every mutation ends with a full
//! recount from the entry lists.

use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

use crate::category::{Category, Kind};
use crate::classify::classify_with;
use crate::names::derive_name_with;
use crate::reference::ReferenceTables;

/// Schema version written to new catalogs
pub const DEFAULT_VERSION: &str = "1.0";

/// Game tag written to new catalogs
pub const DEFAULT_GAME: &str = "RDR2";

/// Error type for catalog operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Malformed entry #{index} ({identifier:?}): {reason}")]
    MalformedEntry {
        index: usize,
        identifier: String,
        reason: &'static str,
    },
}

/// A single classified ped
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub identifier: String,
    pub display_name: String,
    pub category: Category,
    pub kind: Kind,
}

impl CatalogEntry {
    pub fn new(
        identifier: impl Into<String>,
        display_name: impl Into<String>,
        category: Category,
        kind: Kind,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            display_name: display_name.into(),
            category,
            kind,
        }
    }

    /// Build an entry for a raw identifier, deriving the name and category
    pub fn from_identifier(tables: &ReferenceTables, identifier: &str) -> Self {
        let display_name = derive_name_with(tables, identifier);
        Self::named(tables, identifier, display_name)
    }

    /// Build an entry with a known display name, classifying it from both
    /// the identifier and the name
    pub fn named(
        tables: &ReferenceTables,
        identifier: &str,
        display_name: impl Into<String>,
    ) -> Self {
        let display_name = display_name.into();
        let class = classify_with(tables, identifier, Some(display_name.as_str()));
        Self::new(identifier, display_name, class.category, class.kind)
    }

    fn validate(&self, index: usize) -> Result<(), CatalogError> {
        let reason = if self.identifier.trim().is_empty() {
            "missing identifier"
        } else if self.display_name.trim().is_empty() {
            "missing display name"
        } else {
            return Ok(());
        };

        Err(CatalogError::MalformedEntry {
            index,
            identifier: self.identifier.clone(),
            reason,
        })
    }
}

/// Per-category counts of entries a merge actually added
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    pub added: BTreeMap<Category, usize>,
    /// Candidates skipped because their identifier was already present
    pub skipped: usize,
}

impl MergeReport {
    pub fn added(&self, category: Category) -> usize {
        self.added.get(&category).copied().unwrap_or(0)
    }

    pub fn total_added(&self) -> usize {
        self.added.values().sum()
    }
}

/// Categorized ped catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    version: String,
    game: String,
    categories: BTreeMap<Category, Vec<CatalogEntry>>,
    counts: BTreeMap<Category, usize>,
    total: usize,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Empty catalog with the default version and game tags
    pub fn new() -> Self {
        Self::with_tags(DEFAULT_VERSION, DEFAULT_GAME)
    }

    pub fn with_tags(version: impl Into<String>, game: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            game: game.into(),
            categories: Category::ALL.into_iter().map(|c| (c, Vec::new())).collect(),
            counts: Category::ALL.into_iter().map(|c| (c, 0)).collect(),
            total: 0,
        }
    }

    /// Rebuild a catalog from previously stored entries.
    ///
    /// Stored counts are not trusted and are recomputed. A repeated
    /// identifier keeps its first occurrence; later copies are dropped.
    pub fn from_entries(
        version: impl Into<String>,
        game: impl Into<String>,
        entries: impl IntoIterator<Item = CatalogEntry>,
    ) -> Self {
        let mut catalog = Self::with_tags(version, game);
        let mut seen = HashSet::new();

        for entry in entries {
            if !seen.insert(entry.identifier.clone()) {
                tracing::warn!(
                    "Dropping duplicate model {} from {}",
                    entry.identifier,
                    entry.category.element_name()
                );
                continue;
            }
            catalog.push(entry);
        }

        catalog.recount();
        catalog
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn game(&self) -> &str {
        &self.game
    }

    /// Entries of one category in insertion order
    pub fn entries(&self, category: Category) -> &[CatalogEntry] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All entries, category by category
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.categories.values().flatten()
    }

    pub fn get(&self, identifier: &str) -> Option<&CatalogEntry> {
        self.iter().find(|e| e.identifier == identifier)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.get(identifier).is_some()
    }

    pub fn count(&self, category: Category) -> usize {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    pub fn total_count(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Append every candidate whose identifier is not already present.
    ///
    /// The batch is validated up front: a single malformed entry rejects the
    /// whole batch and leaves the catalog untouched. Duplicates, whether
    /// against the catalog or earlier in the same batch, are skipped.
    pub fn merge(
        &mut self,
        candidates: impl IntoIterator<Item = CatalogEntry>,
    ) -> Result<MergeReport, CatalogError> {
        let candidates: Vec<CatalogEntry> = candidates.into_iter().collect();
        for (index, entry) in candidates.iter().enumerate() {
            entry.validate(index)?;
        }

        let mut existing: HashSet<String> = self.iter().map(|e| e.identifier.clone()).collect();
        let mut report = MergeReport::default();

        for entry in candidates {
            if existing.contains(&entry.identifier) {
                tracing::debug!("Skipping existing model {}", entry.identifier);
                report.skipped += 1;
                continue;
            }

            existing.insert(entry.identifier.clone());
            *report.added.entry(entry.category).or_insert(0) += 1;
            self.push(entry);
        }

        self.recount();
        Ok(report)
    }

    fn push(&mut self, entry: CatalogEntry) {
        self.categories.entry(entry.category).or_default().push(entry);
    }

    fn recount(&mut self) {
        self.counts = self
            .categories
            .iter()
            .map(|(category, entries)| (*category, entries.len()))
            .collect();
        self.total = self.counts.values().sum();
    }
}
