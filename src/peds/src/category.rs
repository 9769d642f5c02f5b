//! Catalog categories and rarity kinds.
//!
//! A ped belongs to exactly one [`Category`]. The [`Kind`] tag is orthogonal:
//! a legendary fish stays in the Fish category and only its kind changes.

use serde::Serialize;

/// Error parsing a category or kind from its textual form
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown kind: {0}")]
    UnknownKind(String),
}

/// Top-level partition of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Human,
    Animal,
    Horse,
    Fish,
    LegendaryAnimal,
}

impl Category {
    /// All categories in document order
    pub const ALL: [Category; 5] = [
        Category::Human,
        Category::Animal,
        Category::Horse,
        Category::Fish,
        Category::LegendaryAnimal,
    ];

    /// Element name used for this category in the catalog document
    pub fn element_name(&self) -> &'static str {
        match self {
            Self::Human => "Humans",
            Self::Animal => "Animals",
            Self::Horse => "Horses",
            Self::Fish => "Fish",
            Self::LegendaryAnimal => "LegendaryAnimals",
        }
    }

    /// Look up a category by its document element name
    pub fn from_element_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.element_name() == name)
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Human => "Human NPCs, story characters, and player models",
            Self::Animal => "Wildlife and domestic animals",
            Self::Horse => "Horse breeds and variants",
            Self::Fish => "Fish species for fishing",
            Self::LegendaryAnimal => "Rare legendary animal variants",
        }
    }

    /// Whether a legendary entry in this category is tagged with `rarity`
    /// instead of `type` in the document
    pub fn uses_rarity_tag(&self) -> bool {
        matches!(self, Self::Animal)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Animal => write!(f, "animal"),
            Self::Horse => write!(f, "horse"),
            Self::Fish => write!(f, "fish"),
            Self::LegendaryAnimal => write!(f, "legendary_animal"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "human" | "humans" => Ok(Self::Human),
            "animal" | "animals" => Ok(Self::Animal),
            "horse" | "horses" => Ok(Self::Horse),
            "fish" => Ok(Self::Fish),
            "legendary_animal" | "legendary_animals" | "legendaryanimals" => {
                Ok(Self::LegendaryAnimal)
            }
            _ => Err(ParseError::UnknownCategory(s.to_string())),
        }
    }
}

/// Rarity tag, independent of category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    #[default]
    Regular,
    Legendary,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Legendary => "legendary",
        }
    }

    pub fn is_legendary(&self) -> bool {
        matches!(self, Self::Legendary)
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Kind {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regular" => Ok(Self::Regular),
            "legendary" => Ok(Self::Legendary),
            _ => Err(ParseError::UnknownKind(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_names_roundtrip() {
        for category in Category::ALL {
            assert_eq!(
                Category::from_element_name(category.element_name()),
                Some(category)
            );
        }
        assert_eq!(Category::from_element_name("Vehicles"), None);
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("Horses".parse::<Category>(), Ok(Category::Horse));
        assert_eq!(
            "legendary_animal".parse::<Category>(),
            Ok(Category::LegendaryAnimal)
        );
        assert!("boats".parse::<Category>().is_err());
    }

    #[test]
    fn test_kind_parse_and_display() {
        assert_eq!("legendary".parse::<Kind>(), Ok(Kind::Legendary));
        assert_eq!(Kind::Regular.to_string(), "regular");
        assert_eq!(
            "epic".parse::<Kind>(),
            Err(ParseError::UnknownKind("epic".to_string()))
        );
    }

    #[test]
    fn test_only_animals_use_rarity_tag() {
        let tagged: Vec<_> = Category::ALL
            .into_iter()
            .filter(|c| c.uses_rarity_tag())
            .collect();
        assert_eq!(tagged, vec![Category::Animal]);
    }
}
