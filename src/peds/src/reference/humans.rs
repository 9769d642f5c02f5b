//! Story characters and player models

/// Display name override applied after humanization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialName {
    /// Lowercase fragment searched for in the humanized name
    pub key: &'static str,
    pub name: &'static str,
}

/// Overrides for concatenated story character names. Checked in order, the
/// first key found in the humanized name wins.
pub const SPECIAL_NAMES: &[SpecialName] = &[
    SpecialName { key: "abigailroberts", name: "Abigail Roberts" },
    SpecialName { key: "dutch", name: "Dutch van der Linde" },
    SpecialName { key: "johnmarston", name: "John Marston" },
    SpecialName { key: "player zero", name: "Arthur Morgan" },
    SpecialName { key: "player three", name: "John Marston" },
    SpecialName { key: "micahbell", name: "Micah Bell" },
    SpecialName { key: "charlessmith", name: "Charles Smith" },
    SpecialName { key: "javierescuella", name: "Javier Escuella" },
    SpecialName { key: "hoseamatthews", name: "Hosea Matthews" },
    SpecialName { key: "billwilliamson", name: "Bill Williamson" },
    SpecialName { key: "sadieadler", name: "Sadie Adler" },
    SpecialName { key: "josiahtrelawny", name: "Josiah Trelawny" },
    SpecialName { key: "susangrimshaw", name: "Susan Grimshaw" },
];

/// Identifiers used when no source listing is available
pub const FALLBACK_PEDS: &[&str] = &[
    "A_C_Cougar_03",
    "A_C_Horse_Gang_Lenny",
    "A_C_Horse_Gang_Sadie_EndlessSummer",
    "CS_abigailroberts",
    "CS_dutch",
    "CS_johnmarston",
    "Player_Zero",
    "Player_Three",
];
