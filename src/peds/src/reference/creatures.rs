//! Animal and legendary animal reference sets

use super::KnownPed;

/// Legendary animals, story mode followed by the online variants
pub const LEGENDARY_ANIMALS: &[KnownPed] = &[
    KnownPed::new("A_C_Bear_01_Legendary", "Legendary Bharati Grizzly Bear"),
    KnownPed::new("A_C_Bison_01_Legendary", "Legendary Tatanka Bison"),
    KnownPed::new("A_C_Bison_01_White", "Legendary White Bison"),
    KnownPed::new("A_C_Buck_01_Legendary", "Legendary Buck"),
    KnownPed::new("A_C_Cougar_01_Legendary", "Legendary Cougar"),
    KnownPed::new("A_C_Elk_01_Legendary", "Legendary Elk"),
    KnownPed::new("A_C_Fox_01_Legendary", "Legendary Fox"),
    KnownPed::new("A_C_Moose_01_Legendary", "Legendary Moose"),
    KnownPed::new("A_C_Panther_01_Legendary", "Legendary Panther"),
    KnownPed::new("A_C_Wolf_01_Legendary", "Legendary Wolf"),
    KnownPed::new("A_C_Beaver_01_Legendary", "Legendary Beaver"),
    KnownPed::new("A_C_Boar_01_Legendary", "Legendary Boar"),
    KnownPed::new("A_C_Ram_01_Legendary", "Legendary Bighorn Ram"),
    KnownPed::new("A_C_Pronghorn_01_Legendary", "Legendary Pronghorn"),
    KnownPed::new("A_C_Alligator_01_Legendary", "Legendary Alligator"),
    KnownPed::new("A_C_Coyote_01_Legendary", "Legendary Coyote"),
    // Online
    KnownPed::new("MP_A_C_Alligator_01", "Legendary Sun Gator"),
    KnownPed::new("MP_A_C_Bear_01", "Legendary Ridgeback Spirit Bear"),
    KnownPed::new("MP_A_C_Beaver_01", "Legendary Knight Moose"),
    KnownPed::new("MP_A_C_Boar_01", "Legendary Wakpa Boar"),
    KnownPed::new("MP_A_C_Buck_01", "Legendary Onyx Wolf"),
    KnownPed::new("MP_A_C_Cougar_01", "Legendary Shadow Buck"),
    KnownPed::new("MP_A_C_Coyote_01", "Legendary Emerald Wolf"),
    KnownPed::new("MP_A_C_Elk_01", "Legendary Marble Fox"),
    KnownPed::new("MP_A_C_Fox_01", "Legendary Cross Fox"),
    KnownPed::new("MP_A_C_Moose_01", "Legendary Midnight Paw Coyote"),
    KnownPed::new("MP_A_C_Panther_01", "Legendary Ghost Panther"),
    KnownPed::new("MP_A_C_Wolf_01", "Legendary Moonstone Wolf"),
];

/// Common wildlife and domestic animals
pub const COMMON_ANIMALS: &[KnownPed] = &[
    KnownPed::new("A_C_Deer_01", "White-tailed Deer"),
    KnownPed::new("A_C_Bear_01", "American Black Bear"),
    KnownPed::new("A_C_Wolf_01", "Gray Wolf"),
    KnownPed::new("A_C_Cougar_01", "Cougar"),
    KnownPed::new("A_C_Elk_01", "American Elk"),
    KnownPed::new("A_C_Bison_01", "American Bison"),
    KnownPed::new("A_C_Fox_01", "Red Fox"),
    KnownPed::new("A_C_Rabbit_01", "Cottontail Rabbit"),
    KnownPed::new("A_C_Squirrel_01", "Fox Squirrel"),
    KnownPed::new("A_C_Rat_01", "Brown Rat"),
    KnownPed::new("A_C_Beaver_01", "North American Beaver"),
    KnownPed::new("A_C_Boar_01", "Wild Boar"),
    KnownPed::new("A_C_Ram_01", "Bighorn Sheep"),
    KnownPed::new("A_C_Pronghorn_01", "Pronghorn Antelope"),
    KnownPed::new("A_C_Alligator_01", "American Alligator"),
    KnownPed::new("A_C_Coyote_01", "Coyote"),
    KnownPed::new("A_C_Panther_01", "Florida Panther"),
    KnownPed::new("A_C_Moose_01", "Moose"),
    KnownPed::new("A_C_Duck_01", "Mallard Duck"),
    KnownPed::new("A_C_Eagle_01", "Bald Eagle"),
    KnownPed::new("A_C_Hawk_01", "Red-tailed Hawk"),
    KnownPed::new("A_C_Owl_01", "Great Horned Owl"),
    KnownPed::new("A_C_Turkey_01", "Wild Turkey"),
    KnownPed::new("A_C_Chicken_01", "Chicken"),
    KnownPed::new("A_C_Pig_01", "Domestic Pig"),
    KnownPed::new("A_C_Cow_01", "Cattle"),
    KnownPed::new("A_C_Bull_01", "Bull"),
    KnownPed::new("A_C_Sheep_01", "Domestic Sheep"),
    KnownPed::new("A_C_Goat_01", "Goat"),
    KnownPed::new("A_C_Dog_01", "Domestic Dog"),
    KnownPed::new("A_C_Cat_01", "Domestic Cat"),
];

/// Species keywords that mark an identifier as an animal even without a
/// creature prefix. Matched as lowercase substrings.
pub const ANIMAL_KEYWORDS: &[&str] = &[
    "bear", "wolf", "cougar", "deer", "elk", "bison", "buffalo", "fox", "rabbit", "squirrel",
    "rat", "bird", "eagle", "hawk", "owl", "duck", "goose", "turkey", "chicken", "pig", "cow",
    "bull", "sheep", "goat", "dog", "cat", "alligator", "snake", "turtle", "frog", "beaver",
    "otter", "skunk", "raccoon", "opossum", "bat", "boar", "ram", "pronghorn", "moose", "coyote",
    "panther", "jaguar",
];
