//! Ped classification
//!
//! Classification is an ordered decision list. Each [`Rule`] pairs a
//! predicate with the category and kind it assigns; the first rule whose
//! predicate holds wins, and anything left over is a regular human. The list
//! is public so callers (and tests) can audit precedence rule by rule.
//!
//! The category is decided by species domain first and rarity second: a
//! legendary fish is `Fish` with kind `Legendary`, never `LegendaryAnimal`.

use crate::category::{Category, Kind};
use crate::reference::ReferenceTables;

/// Inputs a rule predicate can look at
#[derive(Debug, Clone)]
pub struct Subject<'a> {
    pub identifier: &'a str,
    pub name: Option<&'a str>,
    pub tables: &'a ReferenceTables,
    lower_identifier: String,
    lower_name: Option<String>,
}

impl<'a> Subject<'a> {
    pub fn new(identifier: &'a str, name: Option<&'a str>, tables: &'a ReferenceTables) -> Self {
        Self {
            identifier,
            name,
            tables,
            lower_identifier: identifier.to_lowercase(),
            lower_name: name.map(str::to_lowercase),
        }
    }

    /// Case-insensitive substring check against identifier or name
    pub fn mentions(&self, needle: &str) -> bool {
        self.lower_identifier.contains(needle)
            || self.lower_name.as_deref().is_some_and(|n| n.contains(needle))
    }

    pub fn is_legendary(&self) -> bool {
        self.tables.is_legendary_animal(self.identifier) || self.mentions("legendary")
    }

    pub fn is_fish(&self) -> bool {
        self.mentions("fish") || self.tables.is_known_fish(self.identifier)
    }

    pub fn is_horse(&self) -> bool {
        self.lower_identifier.contains("horse")
    }

    pub fn is_animal(&self) -> bool {
        self.tables.has_animal_prefix(self.identifier)
            || self.tables.has_animal_keyword(&self.lower_identifier)
    }

    pub fn is_rare(&self) -> bool {
        self.mentions("rare") || self.mentions("unique")
    }

    pub fn is_story_character(&self) -> bool {
        self.tables.has_story_prefix(self.identifier) || self.lower_identifier.contains("player")
    }
}

/// One entry of the decision list
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub predicate: fn(&Subject<'_>) -> bool,
    pub category: Category,
    pub kind: Kind,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("category", &self.category)
            .field("kind", &self.kind)
            .finish()
    }
}

/// Decision list in precedence order
pub const RULES: &[Rule] = &[
    Rule {
        name: "legendary_fish",
        predicate: |s| s.is_fish() && s.is_legendary(),
        category: Category::Fish,
        kind: Kind::Legendary,
    },
    Rule {
        name: "legendary_animal",
        predicate: |s| s.is_legendary(),
        category: Category::LegendaryAnimal,
        kind: Kind::Legendary,
    },
    Rule {
        name: "fish",
        predicate: |s| s.is_fish(),
        category: Category::Fish,
        kind: Kind::Regular,
    },
    Rule {
        name: "horse",
        predicate: |s| s.is_horse(),
        category: Category::Horse,
        kind: Kind::Regular,
    },
    Rule {
        name: "rare_animal",
        predicate: |s| s.is_animal() && s.is_rare(),
        category: Category::Animal,
        kind: Kind::Legendary,
    },
    Rule {
        name: "animal",
        predicate: |s| s.is_animal(),
        category: Category::Animal,
        kind: Kind::Regular,
    },
    Rule {
        name: "story_character",
        predicate: |s| s.is_story_character(),
        category: Category::Human,
        kind: Kind::Regular,
    },
];

/// Name reported when no rule matched
pub const DEFAULT_RULE: &str = "default";

/// Outcome of classifying one identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub category: Category,
    pub kind: Kind,
    /// Name of the rule that decided the outcome
    pub rule: &'static str,
}

impl Classification {
    pub fn pair(&self) -> (Category, Kind) {
        (self.category, self.kind)
    }
}

/// Classify with the bundled reference tables
pub fn classify(identifier: &str, name: Option<&str>) -> Classification {
    classify_with(ReferenceTables::builtin(), identifier, name)
}

/// Classify against a specific set of reference tables. Never fails: input
/// no rule recognises is a regular human.
pub fn classify_with(
    tables: &ReferenceTables,
    identifier: &str,
    name: Option<&str>,
) -> Classification {
    let subject = Subject::new(identifier, name, tables);

    RULES
        .iter()
        .find(|rule| (rule.predicate)(&subject))
        .map(|rule| Classification {
            category: rule.category,
            kind: rule.kind,
            rule: rule.name,
        })
        .unwrap_or(Classification {
            category: Category::Human,
            kind: Kind::Regular,
            rule: DEFAULT_RULE,
        })
}
