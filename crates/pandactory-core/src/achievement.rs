//! Achievement conditions as tagged data, evaluated by a single
//! interpreter over the current state.
//!
//! Definitions carry a [`Condition`] value instead of code, so the
//! full achievement list lives in the data crate and serializes
//! cleanly for tooling.

use crate::catalog::{Catalog, ResourceCategory};
use crate::id::{
    AchievementId, BiomeId, ExpeditionTier, FoodId, PowerCellTier, ResourceId, SkillBranch,
};
use crate::state::GameState;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Stock a spaceship part needs before it counts as completed.
pub const SPACESHIP_PART_AMOUNT: f64 = 100.0;

/// An unlock condition. Evaluated against the whole game state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Condition {
    /// Lifetime resources gathered by hand or automation.
    LifetimeGathered { amount: f64 },
    /// Automations built, lifetime or currently standing.
    AutomationsBuilt { count: u32 },
    /// Upgrades purchased, lifetime or implied by current levels.
    UpgradesPurchased { count: u32 },
    /// Any single automation at this level or above.
    MaxAutomationLevel { level: u32 },
    /// Every one of `count` automations standing at `level` or above.
    AllAutomationsAtLevel { level: u32, count: u32 },
    /// Automations standing in one biome.
    AutomationsInOneBiome { count: u32 },
    /// Power cells installed at once, optionally of one tier.
    InstalledCells {
        #[serde(default)]
        tier: Option<PowerCellTier>,
        count: u32,
    },
    /// Expeditions completed across all tiers.
    ExpeditionsCompleted { count: u32 },
    /// Expeditions completed of one tier.
    ExpeditionsOfTier { tier: ExpeditionTier, count: u32 },
    /// Biomes discovered.
    BiomesDiscovered { count: u32 },
    /// Every primary and discoverable resource of one biome found,
    /// plus an optional food tied to the biome.
    BiomeFullyCharted {
        biome: BiomeId,
        #[serde(default)]
        food: Option<FoodId>,
    },
    /// Every raw resource in the world found.
    AllRawResourcesDiscovered,
    /// Distinct foods known.
    FoodsDiscovered { count: u32 },
    /// Distinct resources known, produced goods included.
    ResourcesDiscovered { count: u32 },
    /// At least `amount` of every catalog resource and food at once.
    StockOfEverything { amount: f64 },
    /// At least `amount` of any single resource.
    SingleResourceStock { amount: f64 },
    /// Spaceship parts (final products) completed to the standard
    /// amount.
    SpaceshipParts { completed: u32 },
    /// Prestige resets performed.
    Prestiges { count: u32 },
    /// Cosmic bamboo shards held; only counted after the first
    /// prestige so the counter stays hidden before then.
    ShardsHeld { amount: f64 },
    /// Skill nodes unlocked.
    SkillsUnlocked { count: u32 },
    /// Every node of one skill branch unlocked.
    SkillBranchComplete { branch: SkillBranch },
    /// Every achievement except this one unlocked.
    AllOtherAchievements,
}

/// Every resource id the player knows: biome discoveries plus goods
/// produced by automations.
fn all_discovered_resources(state: &GameState) -> BTreeSet<&ResourceId> {
    let mut known: BTreeSet<&ResourceId> = state
        .biomes
        .values()
        .flat_map(|b| b.discovered_resources.iter())
        .collect();
    known.extend(state.discovered_produced_resources.iter());
    known
}

/// Every food id the player knows: produced foods plus the primary
/// foods of discovered biomes.
fn all_discovered_foods<'a>(catalog: &'a Catalog, state: &'a GameState) -> BTreeSet<&'a FoodId> {
    let mut known: BTreeSet<&FoodId> = state.discovered_produced_foods.iter().collect();
    for biome in BiomeId::ALL {
        if state.biome(biome).discovered {
            known.extend(catalog.biome(biome).primary_foods.iter());
        }
    }
    known
}

/// Evaluate one condition against the state.
pub fn evaluate(catalog: &Catalog, state: &GameState, condition: &Condition) -> bool {
    match condition {
        Condition::LifetimeGathered { amount } => {
            state.lifetime_stats.total_resources_gathered >= *amount
        }
        Condition::AutomationsBuilt { count } => {
            let standing: u32 = state.biomes.values().map(|b| b.automations.len() as u32).sum();
            state.lifetime_stats.total_automations_built.max(standing) >= *count
        }
        Condition::UpgradesPurchased { count } => {
            let implied: u32 = state
                .biomes
                .values()
                .flat_map(|b| b.automations.values())
                .map(|a| a.level.saturating_sub(1))
                .sum();
            state.lifetime_stats.total_upgrades_purchased.max(implied) >= *count
        }
        Condition::MaxAutomationLevel { level } => state
            .biomes
            .values()
            .flat_map(|b| b.automations.values())
            .any(|a| a.level >= *level),
        Condition::AllAutomationsAtLevel { level, count } => {
            let at_level = state
                .biomes
                .values()
                .flat_map(|b| b.automations.values())
                .filter(|a| a.level >= *level)
                .count() as u32;
            at_level >= *count
        }
        Condition::AutomationsInOneBiome { count } => state
            .biomes
            .values()
            .any(|b| b.automations.len() as u32 >= *count),
        Condition::InstalledCells { tier, count } => {
            let installed = state
                .biomes
                .values()
                .flat_map(|b| b.automations.values())
                .filter_map(|a| a.power_cell.as_ref())
                .filter(|c| tier.is_none_or(|t| c.tier == t))
                .count() as u32;
            installed >= *count
        }
        Condition::ExpeditionsCompleted { count } => {
            state
                .lifetime_stats
                .total_expeditions_completed
                .max(state.expedition_count)
                >= *count
        }
        Condition::ExpeditionsOfTier { tier, count } => {
            state
                .lifetime_stats
                .expeditions_by_tier
                .get(tier)
                .copied()
                .unwrap_or(0)
                >= *count
        }
        Condition::BiomesDiscovered { count } => {
            state.biomes.values().filter(|b| b.discovered).count() as u32 >= *count
        }
        Condition::BiomeFullyCharted { biome, food } => {
            let def = catalog.biome(*biome);
            let known = all_discovered_resources(state);
            let resources_done = def
                .primary_resources
                .iter()
                .chain(def.discoverable_resources.iter())
                .all(|r| known.contains(r));
            let food_done = match food {
                Some(f) => all_discovered_foods(catalog, state).contains(f),
                None => true,
            };
            resources_done && food_done
        }
        Condition::AllRawResourcesDiscovered => {
            let known = all_discovered_resources(state);
            catalog
                .resources()
                .filter(|r| r.category == ResourceCategory::Raw)
                .all(|r| known.contains(&r.id))
        }
        Condition::FoodsDiscovered { count } => {
            all_discovered_foods(catalog, state).len() as u32 >= *count
        }
        Condition::ResourcesDiscovered { count } => {
            all_discovered_resources(state).len() as u32 >= *count
        }
        Condition::StockOfEverything { amount } => {
            catalog
                .resources()
                .all(|r| state.global_stock(&r.id) >= *amount)
                && catalog
                    .foods()
                    .all(|f| state.food.get(&f.id).copied().unwrap_or(0.0) >= *amount)
        }
        Condition::SingleResourceStock { amount } => state
            .biomes
            .values()
            .flat_map(|b| b.resources.values())
            .any(|stock| *stock >= *amount),
        Condition::SpaceshipParts { completed } => {
            let done = catalog
                .resources()
                .filter(|r| r.category == ResourceCategory::Final)
                .filter(|r| state.global_stock(&r.id).floor() >= SPACESHIP_PART_AMOUNT)
                .count() as u32;
            done >= *completed
        }
        Condition::Prestiges { count } => state.prestige.total_prestiges >= *count,
        Condition::ShardsHeld { amount } => {
            state.prestige.total_prestiges >= 1 && state.prestige.cosmic_bamboo_shards >= *amount
        }
        Condition::SkillsUnlocked { count } => {
            state.prestige.unlocked_skills.len() as u32 >= *count
        }
        Condition::SkillBranchComplete { branch } => catalog
            .skills()
            .filter(|s| s.branch == *branch)
            .all(|s| state.prestige.unlocked_skills.contains(&s.id)),
        Condition::AllOtherAchievements => {
            let total = catalog.achievement_count();
            total > 0 && state.achievements.unlocked.len() >= total - 1
        }
    }
}

/// Ids of achievements whose conditions now hold but are not yet
/// unlocked. The reducer turns these into unlock actions.
pub fn check_achievements(catalog: &Catalog, state: &GameState) -> Vec<AchievementId> {
    catalog
        .achievements()
        .filter(|def| !state.achievements.unlocked.contains(&def.id))
        .filter(|def| evaluate(catalog, state, &def.condition))
        .map(|def| def.id.clone())
        .collect()
}

/// True once every achievement is unlocked; gates the mastery bonus.
pub fn mastery_unlocked(catalog: &Catalog, state: &GameState) -> bool {
    let total = catalog.achievement_count();
    total > 0 && state.achievements.unlocked.len() >= total
}
