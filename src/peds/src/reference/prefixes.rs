//! Model name prefixes
//!
//! Ped models follow `<class>_<gender>_<age>_` naming: `A_C_` is an ambient
//! creature, `CS_` a cutscene character, `A_M_M_` an ambient adult male, and
//! so on.

/// Prefixes marking non-human creature models
pub const ANIMAL_PREFIXES: &[&str] = &["A_C_", "MP_A_C_"];

/// Prefixes marking story/cutscene characters
pub const STORY_PREFIXES: &[&str] = &["CS_"];

/// Prefixes stripped when humanizing a model name, most specific first.
/// Only the first match is removed.
pub const NAME_PREFIXES: &[&str] = &[
    "MP_A_C_", "CS_", "A_C_", "A_F_M_", "A_M_M_", "A_M_O_", "A_F_O_", "A_M_Y_", "A_F_Y_",
    "G_M_M_", "G_M_O_", "G_M_Y_", "G_F_M_", "S_M_M_", "S_M_Y_", "S_F_M_", "U_M_M_", "U_M_O_",
    "U_F_M_", "RE_", "MP_",
];
