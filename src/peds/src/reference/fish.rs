//! Fish species, regular and legendary

use super::KnownPed;

pub const FISH: &[KnownPed] = &[
    KnownPed::new("A_C_FishBluegill_01_MS", "Bluegill"),
    KnownPed::new("A_C_FishBullHeadCat_01_MS", "Bullhead Catfish"),
    KnownPed::new("A_C_FishChainPickerel_01_MS", "Chain Pickerel"),
    KnownPed::new("A_C_FishChannelCatfish_01_MS", "Channel Catfish"),
    KnownPed::new("A_C_FishLakeSturgeon_01_MS", "Lake Sturgeon"),
    KnownPed::new("A_C_FishLargemouthBass_01_MS", "Largemouth Bass"),
    KnownPed::new("A_C_FishMuskie_01_MS", "Muskie"),
    KnownPed::new("A_C_FishNorthernPike_01_MS", "Northern Pike"),
    KnownPed::new("A_C_FishPerch_01_MS", "Perch"),
    KnownPed::new("A_C_FishRedfin_01_MS", "Redfin Pickerel"),
    KnownPed::new("A_C_FishRockBass_01_MS", "Rock Bass"),
    KnownPed::new("A_C_FishSalmon_01_MS", "Sockeye Salmon"),
    KnownPed::new("A_C_FishSmallmouthBass_01_MS", "Smallmouth Bass"),
    KnownPed::new("A_C_FishSteelheadTrout_01_MS", "Steelhead Trout"),
    KnownPed::new("A_C_FishRainbowTrout_01_MS", "Rainbow Trout"),
];

pub const LEGENDARY_FISH: &[KnownPed] = &[
    KnownPed::new("A_C_FishBluegill_01_Legendary", "Legendary Bluegill"),
    KnownPed::new("A_C_FishBullHeadCat_01_Legendary", "Legendary Bullhead Catfish"),
    KnownPed::new("A_C_FishChainPickerel_01_Legendary", "Legendary Chain Pickerel"),
    KnownPed::new("A_C_FishChannelCatfish_01_Legendary", "Legendary Channel Catfish"),
    KnownPed::new("A_C_FishLakeSturgeon_01_Legendary", "Legendary Lake Sturgeon"),
    KnownPed::new("A_C_FishLargemouthBass_01_Legendary", "Legendary Largemouth Bass"),
    KnownPed::new("A_C_FishMuskie_01_Legendary", "Legendary Muskie"),
    KnownPed::new("A_C_FishNorthernPike_01_Legendary", "Legendary Northern Pike"),
    KnownPed::new("A_C_FishPerch_01_Legendary", "Legendary Perch"),
    KnownPed::new("A_C_FishRedfin_01_Legendary", "Legendary Redfin Pickerel"),
    KnownPed::new("A_C_FishRockBass_01_Legendary", "Legendary Rock Bass"),
    KnownPed::new("A_C_FishSalmon_01_Legendary", "Legendary Sockeye Salmon"),
    KnownPed::new("A_C_FishSmallmouthBass_01_Legendary", "Legendary Smallmouth Bass"),
];
