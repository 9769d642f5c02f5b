//! Display name derivation
//!
//! The curated table is authoritative. Anything not in it is humanized:
//! one known prefix is stripped, separators become spaces, every word is
//! capitalized, and the result is checked against the story character
//! overrides (`CS_dutch` → "Dutch" → "Dutch van der Linde").

use crate::reference::ReferenceTables;

/// Derive a display name with the bundled reference tables
pub fn derive_name(identifier: &str) -> String {
    derive_name_with(ReferenceTables::builtin(), identifier)
}

pub fn derive_name_with(tables: &ReferenceTables, identifier: &str) -> String {
    if let Some(name) = tables.curated_name(identifier) {
        return name.to_string();
    }

    let mut humanized = humanize(tables.strip_name_prefix(identifier));
    if humanized.is_empty() {
        // bare prefix such as `CS_`
        humanized = humanize(identifier);
    }
    if humanized.is_empty() {
        return identifier.to_string();
    }

    match tables.special_name(&humanized.to_lowercase()) {
        Some(name) => name.to_string(),
        None => humanized,
    }
}

/// Turn `ARMTOWNFOLK_01` into `Armtownfolk 01`
pub fn humanize(raw: &str) -> String {
    raw.replace('_', " ")
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{KnownPed, ReferenceTables};

    #[test]
    fn test_curated_name_is_verbatim() {
        assert_eq!(
            derive_name("A_C_FishBluegill_01_Legendary"),
            "Legendary Bluegill"
        );
        assert_eq!(derive_name("MP_A_C_Beaver_01"), "Legendary Knight Moose");
    }

    #[test]
    fn test_story_character_override() {
        assert_eq!(derive_name("CS_dutch"), "Dutch van der Linde");
        assert_eq!(derive_name("CS_abigailroberts"), "Abigail Roberts");
        assert_eq!(derive_name("CS_johnmarston"), "John Marston");
        assert_eq!(derive_name("Player_Zero"), "Arthur Morgan");
        assert_eq!(derive_name("Player_Three"), "John Marston");
    }

    #[test]
    fn test_humanized_fallback() {
        assert_eq!(derive_name("A_C_Horse_Gang_Lenny"), "Horse Gang Lenny");
        assert_eq!(derive_name("A_F_M_ArmTownfolk_02"), "Armtownfolk 02");
        assert_eq!(derive_name("A_M_M_ASBMINER_01"), "Asbminer 01");
        assert_eq!(derive_name("A_C_Cougar_03"), "Cougar 03");
    }

    #[test]
    fn test_only_first_prefix_is_stripped() {
        // CS_ matches first; the remaining A_C_ is kept as words
        assert_eq!(derive_name("CS_A_C_Thing"), "A C Thing");
    }

    #[test]
    fn test_bare_prefix_keeps_a_name() {
        assert_eq!(derive_name("CS_"), "Cs");
        assert_eq!(derive_name("A_C_"), "A C");
        assert_eq!(derive_name("MP_"), "Mp");
        assert_eq!(derive_name("_"), "_");
        assert_eq!(derive_name("__"), "__");
    }

    #[test]
    fn test_humanize_collapses_separators() {
        assert_eq!(humanize("__double__under_"), "Double Under");
        assert_eq!(humanize(""), "");
        assert_eq!(humanize("mIxEd_CASE"), "Mixed Case");
    }

    #[test]
    fn test_curated_table_beats_heuristics() {
        const CUSTOM: &[KnownPed] = &[KnownPed::new("CS_dutch", "Dutch (Custom)")];
        let tables = ReferenceTables {
            animals: CUSTOM,
            ..ReferenceTables::default()
        };
        assert_eq!(derive_name_with(&tables, "CS_dutch"), "Dutch (Custom)");
    }

    #[test]
    fn test_deterministic() {
        for id in ["CS_dutch", "A_C_Deer_01", "S_M_M_Unknown_07", ""] {
            assert_eq!(derive_name(id), derive_name(id));
        }
    }
}
