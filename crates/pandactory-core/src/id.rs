//! Identifier types for catalog entries and game-state entities.
//!
//! Closed sets (biomes, expedition tiers, power cell tiers, skill
//! branches) are enums with a stable snake_case JSON form. Open,
//! catalog-keyed sets (resources, foods, automation types, skills,
//! achievements) are string newtypes so save documents stay readable
//! and old identifiers can be remapped or dropped during migration.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id! {
    /// Identifies a resource (raw, intermediate, or final product).
    ResourceId
}
string_id! {
    /// Identifies a food item in the global food pool.
    FoodId
}
string_id! {
    /// Identifies an automation template in the catalog.
    AutomationTypeId
}
string_id! {
    /// Identifies a node in the prestige skill tree.
    SkillId
}
string_id! {
    /// Identifies an achievement definition.
    AchievementId
}

/// Identifies an automation instance within a biome. Allocated from the
/// monotone `next_automation_id` counter in game state, never reused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct AutomationId(pub u64);

/// The six biomes, declared in discovery-progression order.
///
/// The declaration order doubles as the deterministic iteration order
/// for cross-biome resource draining, so tick results never depend on
/// hash-map ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiomeId {
    LushForest,
    MistyLake,
    AridDesert,
    FrozenTundra,
    VolcanicIsle,
    CrystalCaverns,
}

impl BiomeId {
    /// All biomes, in progression order.
    pub const ALL: [BiomeId; 6] = [
        BiomeId::LushForest,
        BiomeId::MistyLake,
        BiomeId::AridDesert,
        BiomeId::FrozenTundra,
        BiomeId::VolcanicIsle,
        BiomeId::CrystalCaverns,
    ];

    /// The next biome in the fixed linear discovery progression, or
    /// `None` for the terminal biome.
    pub fn next_in_progression(self) -> Option<BiomeId> {
        match self {
            BiomeId::LushForest => Some(BiomeId::MistyLake),
            BiomeId::MistyLake => Some(BiomeId::AridDesert),
            BiomeId::AridDesert => Some(BiomeId::FrozenTundra),
            BiomeId::FrozenTundra => Some(BiomeId::VolcanicIsle),
            BiomeId::VolcanicIsle => Some(BiomeId::CrystalCaverns),
            BiomeId::CrystalCaverns => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BiomeId::LushForest => "lush_forest",
            BiomeId::MistyLake => "misty_lake",
            BiomeId::AridDesert => "arid_desert",
            BiomeId::FrozenTundra => "frozen_tundra",
            BiomeId::VolcanicIsle => "volcanic_isle",
            BiomeId::CrystalCaverns => "crystal_caverns",
        }
    }
}

impl fmt::Display for BiomeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expedition tiers, shortest to longest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpeditionTier {
    QuickDash,
    QuickScout,
    StandardExpedition,
    DeepExploration,
    EpicJourney,
}

impl ExpeditionTier {
    pub const ALL: [ExpeditionTier; 5] = [
        ExpeditionTier::QuickDash,
        ExpeditionTier::QuickScout,
        ExpeditionTier::StandardExpedition,
        ExpeditionTier::DeepExploration,
        ExpeditionTier::EpicJourney,
    ];
}

/// Power cell ranks, lowest to highest bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerCellTier {
    Green,
    Blue,
    Orange,
}

impl PowerCellTier {
    pub const ALL: [PowerCellTier; 3] = [
        PowerCellTier::Green,
        PowerCellTier::Blue,
        PowerCellTier::Orange,
    ];
}

/// Branches of the prestige skill tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillBranch {
    Production,
    Economy,
    Expedition,
    PowerCells,
}
