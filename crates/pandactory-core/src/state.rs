//! The full game-state tree.
//!
//! The state is the save document: it serializes directly to the JSON
//! layout described in the save format (camelCase field names). A
//! transition never mutates a previous state in place; the reducer
//! clones and returns a new tree.

use crate::catalog::Catalog;
use crate::id::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Quantities below this are treated as zero for gating purposes.
/// Production/consumption deltas may leave slightly negative values
/// behind due to floating point.
pub const STOCK_EPSILON: f64 = 1e-9;

/// Where the panda currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PandaStatus {
    #[default]
    Home,
    Expedition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    pub name: String,
    pub current_biome: BiomeId,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            name: "Dr. Redd Pawston III".to_string(),
            current_biome: BiomeId::LushForest,
        }
    }
}

/// An installed or pocketed power cell. Lives either in the global
/// inventory or on exactly one automation, never both.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerCell {
    pub tier: PowerCellTier,
    /// Additive production bonus (0.50 = +50%).
    pub bonus: f64,
}

/// A built automation instance. Destroyed only by a prestige reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Automation {
    #[serde(rename = "type")]
    pub type_id: AutomationTypeId,
    /// Level >= 1; increases monotonically via upgrades.
    pub level: u32,
    #[serde(default)]
    pub power_cell: Option<PowerCell>,
    #[serde(default)]
    pub paused: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BiomeState {
    #[serde(default)]
    pub resources: BTreeMap<ResourceId, f64>,
    #[serde(default)]
    pub automations: BTreeMap<AutomationId, Automation>,
    #[serde(default)]
    pub discovered: bool,
    #[serde(default)]
    pub activated: bool,
    #[serde(default)]
    pub discovered_resources: BTreeSet<ResourceId>,
}

impl BiomeState {
    /// Stock of one resource, epsilon-clamped to zero.
    pub fn stock(&self, resource: &ResourceId) -> f64 {
        let amount = self.resources.get(resource).copied().unwrap_or(0.0);
        if amount < STOCK_EPSILON { 0.0 } else { amount }
    }
}

/// An in-flight expedition. Present only while the panda is away.
/// Completion is a pure predicate of wall-clock time; there is no
/// stored "completed" transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpeditionState {
    pub tier: ExpeditionTier,
    pub start_time_ms: u64,
    pub duration_ms: u64,
    #[serde(default)]
    pub food_consumed: Vec<(FoodId, f64)>,
    #[serde(default)]
    pub collected_at: Option<u64>,
}

impl ExpeditionState {
    /// True once the timer has naturally run out.
    pub fn is_complete(&self, now_ms: u64) -> bool {
        now_ms >= self.start_time_ms + self.duration_ms
    }

    /// Fraction of the duration elapsed, clamped to [0, 1].
    pub fn progress(&self, now_ms: u64) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = now_ms.saturating_sub(self.start_time_ms) as f64;
        (elapsed / self.duration_ms as f64).min(1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PandaState {
    #[serde(default)]
    pub status: PandaStatus,
    #[serde(default)]
    pub expedition: Option<ExpeditionState>,
}

/// Prestige progression. Survives the prestige reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PrestigeState {
    #[serde(default)]
    pub cosmic_bamboo_shards: f64,
    #[serde(default)]
    pub total_prestiges: u32,
    #[serde(default)]
    pub unlocked_skills: BTreeSet<SkillId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AchievementState {
    #[serde(default)]
    pub unlocked: BTreeSet<AchievementId>,
    /// Queue for unlock notifications, acknowledged one at a time.
    #[serde(default)]
    pub pending: Vec<AchievementId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LifetimeStats {
    #[serde(default)]
    pub total_resources_gathered: f64,
    #[serde(default)]
    pub total_automations_built: u32,
    #[serde(default)]
    pub total_upgrades_purchased: u32,
    #[serde(default)]
    pub total_expeditions_completed: u32,
    #[serde(default)]
    pub expeditions_by_tier: BTreeMap<ExpeditionTier, u32>,
}

/// The whole game state. Also the persisted save document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    #[serde(default)]
    pub player: PlayerState,
    #[serde(default)]
    pub panda: PandaState,
    #[serde(default)]
    pub biomes: BTreeMap<BiomeId, BiomeState>,
    /// Global food pool, shared across biomes.
    #[serde(default)]
    pub food: BTreeMap<FoodId, f64>,
    #[serde(default)]
    pub power_cell_inventory: Vec<PowerCell>,
    #[serde(default)]
    pub unlocked_biomes: Vec<BiomeId>,
    #[serde(default)]
    pub expedition_count: u32,
    /// Hidden counter raising biome-discovery odds after misses.
    #[serde(default)]
    pub expedition_pity_counter: u32,
    /// Hidden counter tracked for power-cell drops (save-format field;
    /// not consulted by the reward roll).
    #[serde(default)]
    pub power_cell_pity_counter: u32,
    /// Intermediate resources discovered through production.
    #[serde(default)]
    pub discovered_produced_resources: BTreeSet<ResourceId>,
    /// Queue of produced resources awaiting a discovery popup.
    #[serde(default)]
    pub pending_resource_discoveries: Vec<ResourceId>,
    #[serde(default)]
    pub discovered_produced_foods: BTreeSet<FoodId>,
    #[serde(default)]
    pub pending_food_discoveries: Vec<FoodId>,
    #[serde(default)]
    pub prestige: PrestigeState,
    #[serde(default)]
    pub achievements: AchievementState,
    #[serde(default)]
    pub lifetime_stats: LifetimeStats,
    #[serde(default)]
    pub last_tick: u64,
    #[serde(default)]
    pub last_save: u64,
    #[serde(default)]
    pub game_start_time: u64,
    #[serde(default)]
    pub version: String,
    /// Monotone allocator for automation instance ids. Never reused.
    #[serde(default)]
    pub next_automation_id: u64,
}

impl GameState {
    /// A fresh game: only the forest discovered and activated, its
    /// primary resources known, empty pools everywhere.
    pub fn initial(catalog: &Catalog, now_ms: u64) -> Self {
        let mut biomes = BTreeMap::new();
        for biome in BiomeId::ALL {
            let def = catalog.biome(biome);
            let starting = biome == BiomeId::LushForest;
            biomes.insert(
                biome,
                BiomeState {
                    resources: BTreeMap::new(),
                    automations: BTreeMap::new(),
                    discovered: starting,
                    activated: starting,
                    discovered_resources: if starting {
                        def.primary_resources.iter().cloned().collect()
                    } else {
                        BTreeSet::new()
                    },
                },
            );
        }

        let food = catalog.foods().map(|f| (f.id.clone(), 0.0)).collect();

        Self {
            player: PlayerState::default(),
            panda: PandaState::default(),
            biomes,
            food,
            power_cell_inventory: Vec::new(),
            unlocked_biomes: vec![BiomeId::LushForest],
            expedition_count: 0,
            expedition_pity_counter: 0,
            power_cell_pity_counter: 0,
            discovered_produced_resources: BTreeSet::new(),
            pending_resource_discoveries: Vec::new(),
            discovered_produced_foods: BTreeSet::new(),
            pending_food_discoveries: Vec::new(),
            prestige: PrestigeState::default(),
            achievements: AchievementState::default(),
            lifetime_stats: LifetimeStats::default(),
            last_tick: now_ms,
            last_save: now_ms,
            game_start_time: now_ms,
            version: crate::save::SAVE_VERSION.to_string(),
            next_automation_id: 1,
        }
    }

    pub fn biome(&self, id: BiomeId) -> &BiomeState {
        // All six biomes exist from `initial`; migration backfills them.
        &self.biomes[&id]
    }

    pub fn biome_mut(&mut self, id: BiomeId) -> &mut BiomeState {
        self.biomes.entry(id).or_default()
    }

    /// Count of automations of one type in one biome (for build caps).
    pub fn instances_of(&self, biome: BiomeId, type_id: &AutomationTypeId) -> u32 {
        self.biome(biome)
            .automations
            .values()
            .filter(|a| &a.type_id == type_id)
            .count() as u32
    }

    /// Total stock of a resource across every biome, epsilon-clamped.
    pub fn global_stock(&self, resource: &ResourceId) -> f64 {
        self.biomes.values().map(|b| b.stock(resource)).sum()
    }

    /// Merged view of all biome pools, for global afford checks.
    pub fn global_resource_pool(&self) -> BTreeMap<ResourceId, f64> {
        let mut pool = BTreeMap::new();
        for biome in self.biomes.values() {
            for (id, amount) in &biome.resources {
                *pool.entry(id.clone()).or_insert(0.0) += amount.max(0.0);
            }
        }
        pool
    }

    /// Power cells installed on automations across all biomes.
    pub fn installed_cell_count(&self) -> u32 {
        self.biomes
            .values()
            .flat_map(|b| b.automations.values())
            .filter(|a| a.power_cell.is_some())
            .count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::mini_catalog;

    #[test]
    fn initial_state_shape() {
        let catalog = mini_catalog();
        let state = GameState::initial(&catalog, 1_000);
        assert_eq!(state.biomes.len(), 6);
        assert!(state.biome(BiomeId::LushForest).activated);
        assert!(state.biome(BiomeId::LushForest).discovered);
        assert!(!state.biome(BiomeId::MistyLake).discovered);
        assert_eq!(state.unlocked_biomes, vec![BiomeId::LushForest]);
        assert!(
            state
                .biome(BiomeId::LushForest)
                .discovered_resources
                .contains("wood")
        );
        assert_eq!(state.last_tick, 1_000);
        assert_eq!(state.next_automation_id, 1);
    }

    #[test]
    fn stock_clamps_small_values_to_zero() {
        let mut biome = BiomeState::default();
        biome.resources.insert(ResourceId::new("wood"), 1e-12);
        assert_eq!(biome.stock(&ResourceId::new("wood")), 0.0);
        biome.resources.insert(ResourceId::new("wood"), 2.5);
        assert_eq!(biome.stock(&ResourceId::new("wood")), 2.5);
    }

    #[test]
    fn expedition_completion_is_a_pure_predicate() {
        let exp = ExpeditionState {
            tier: ExpeditionTier::QuickDash,
            start_time_ms: 1_000,
            duration_ms: 600_000,
            food_consumed: vec![],
            collected_at: None,
        };
        // Deterministic regardless of how often it is polled.
        for _ in 0..3 {
            assert!(!exp.is_complete(600_999));
            assert!(exp.is_complete(601_000));
            assert!(exp.is_complete(601_001));
        }
        assert!((exp.progress(301_000) - 0.5).abs() < 1e-12);
        assert_eq!(exp.progress(10_000_000), 1.0);
    }

    #[test]
    fn global_pool_merges_biomes() {
        let catalog = mini_catalog();
        let mut state = GameState::initial(&catalog, 0);
        state
            .biome_mut(BiomeId::LushForest)
            .resources
            .insert(ResourceId::new("wood"), 3.0);
        state
            .biome_mut(BiomeId::MistyLake)
            .resources
            .insert(ResourceId::new("wood"), 4.0);
        assert_eq!(state.global_stock(&ResourceId::new("wood")), 7.0);
        let pool = state.global_resource_pool();
        assert_eq!(pool.get("wood"), Some(&7.0));
    }

    #[test]
    fn save_document_round_trips() {
        let catalog = mini_catalog();
        let state = GameState::initial(&catalog, 42);
        let json = serde_json::to_string(&state).unwrap();
        // camelCase layout on the wire.
        assert!(json.contains("\"powerCellInventory\""));
        assert!(json.contains("\"unlockedBiomes\""));
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
