//! Reference data for ped models
//!
//! Hardcoded tables shared by the classifier and the name deriver: curated
//! model→display-name sets, name prefixes, species keywords and story
//! character overrides. Everything is bundled into a [`ReferenceTables`]
//! value so callers can substitute their own tables in one place.

mod creatures;
mod fish;
mod humans;
mod prefixes;

pub use creatures::{ANIMAL_KEYWORDS, COMMON_ANIMALS, LEGENDARY_ANIMALS};
pub use fish::{FISH, LEGENDARY_FISH};
pub use humans::{SpecialName, FALLBACK_PEDS, SPECIAL_NAMES};
pub use prefixes::{ANIMAL_PREFIXES, NAME_PREFIXES, STORY_PREFIXES};

/// Version of the bundled reference tables
pub const REFERENCE_VERSION: &str = "1.0";

/// A model with a curated display name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownPed {
    pub model: &'static str,
    pub name: &'static str,
}

impl KnownPed {
    pub const fn new(model: &'static str, name: &'static str) -> Self {
        Self { model, name }
    }
}

/// Curated sets merged by the enhance pass, in merge order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CuratedSet {
    LegendaryAnimals,
    Fish,
    LegendaryFish,
    Animals,
}

impl CuratedSet {
    pub fn label(&self) -> &'static str {
        match self {
            Self::LegendaryAnimals => "Legendary Animals",
            Self::Fish => "Fish",
            Self::LegendaryFish => "Legendary Fish",
            Self::Animals => "Regular Animals",
        }
    }
}

/// Complete set of tables consumed by classification and naming
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    pub version: &'static str,
    pub legendary_animals: &'static [KnownPed],
    pub fish: &'static [KnownPed],
    pub legendary_fish: &'static [KnownPed],
    pub animals: &'static [KnownPed],
    pub animal_keywords: &'static [&'static str],
    pub animal_prefixes: &'static [&'static str],
    pub story_prefixes: &'static [&'static str],
    pub name_prefixes: &'static [&'static str],
    pub special_names: &'static [SpecialName],
}

static BUILTIN: ReferenceTables = ReferenceTables {
    version: REFERENCE_VERSION,
    legendary_animals: LEGENDARY_ANIMALS,
    fish: FISH,
    legendary_fish: LEGENDARY_FISH,
    animals: COMMON_ANIMALS,
    animal_keywords: ANIMAL_KEYWORDS,
    animal_prefixes: ANIMAL_PREFIXES,
    story_prefixes: STORY_PREFIXES,
    name_prefixes: NAME_PREFIXES,
    special_names: SPECIAL_NAMES,
};

impl ReferenceTables {
    /// The tables bundled with this crate
    pub fn builtin() -> &'static ReferenceTables {
        &BUILTIN
    }

    pub fn set(&self, set: CuratedSet) -> &'static [KnownPed] {
        match set {
            CuratedSet::LegendaryAnimals => self.legendary_animals,
            CuratedSet::Fish => self.fish,
            CuratedSet::LegendaryFish => self.legendary_fish,
            CuratedSet::Animals => self.animals,
        }
    }

    /// All curated sets in merge order
    pub fn curated(&self) -> impl Iterator<Item = (CuratedSet, &'static [KnownPed])> + '_ {
        [
            CuratedSet::LegendaryAnimals,
            CuratedSet::Fish,
            CuratedSet::LegendaryFish,
            CuratedSet::Animals,
        ]
        .into_iter()
        .map(|set| (set, self.set(set)))
    }

    /// Curated display name for a model, searching every set
    pub fn curated_name(&self, model: &str) -> Option<&'static str> {
        self.curated()
            .flat_map(|(_, peds)| peds.iter())
            .find(|p| p.model == model)
            .map(|p| p.name)
    }

    pub fn is_legendary_animal(&self, model: &str) -> bool {
        self.legendary_animals.iter().any(|p| p.model == model)
    }

    /// Whether the model is listed in either fish set
    pub fn is_known_fish(&self, model: &str) -> bool {
        self.fish
            .iter()
            .chain(self.legendary_fish)
            .any(|p| p.model == model)
    }

    pub fn has_animal_prefix(&self, model: &str) -> bool {
        self.animal_prefixes.iter().any(|p| model.starts_with(p))
    }

    pub fn has_story_prefix(&self, model: &str) -> bool {
        self.story_prefixes.iter().any(|p| model.starts_with(p))
    }

    /// Whether the lowercased text contains any species keyword
    pub fn has_animal_keyword(&self, lower: &str) -> bool {
        self.animal_keywords.iter().any(|k| lower.contains(k))
    }

    /// First special name whose key appears in the (already lowercased) text
    pub fn special_name(&self, lower: &str) -> Option<&'static str> {
        self.special_names
            .iter()
            .find(|s| lower.contains(s.key))
            .map(|s| s.name)
    }

    /// Strip the first matching name prefix, if any
    pub fn strip_name_prefix<'a>(&self, model: &'a str) -> &'a str {
        self.name_prefixes
            .iter()
            .find_map(|p| model.strip_prefix(p))
            .unwrap_or(model)
    }
}

impl Default for ReferenceTables {
    fn default() -> Self {
        BUILTIN.clone()
    }
}
