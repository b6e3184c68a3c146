//! Expedition reward rolls.
//!
//! Rolling is separated from state transitions: the session rolls a
//! [`ExpeditionRewards`] bundle with its RNG, then dispatches it
//! through the reducer. Roll order is fixed (resources, power cell,
//! biome, resource discoveries) so a seeded RNG replays identically.

use crate::calc;
use crate::catalog::Catalog;
use crate::id::{BiomeId, ExpeditionTier, PowerCellTier, ResourceId};
use crate::rng::SimRng;
use crate::state::{ExpeditionState, PowerCell};
use std::collections::BTreeMap;

/// Bonus for letting the timer run out instead of recalling.
pub const COMPLETION_BONUS: f64 = 0.20;

/// Bonus for collecting only after natural completion.
pub const PATIENCE_BONUS: f64 = 0.15;

/// Bonus per full 30 minutes the rewards sat uncollected.
pub const OVERTIME_STEP: f64 = 0.05;
pub const OVERTIME_STEP_MINUTES: f64 = 30.0;
pub const OVERTIME_CAP: f64 = 0.50;

/// Hidden biome-discovery bonus per failed attempt.
pub const PITY_STEP: f64 = 0.05;
pub const PITY_CAP: f64 = 0.50;

/// Everything the reward roll needs from the current state.
#[derive(Debug, Clone)]
pub struct RewardContext {
    pub tier: ExpeditionTier,
    /// Biome the expedition explored.
    pub biome: BiomeId,
    pub unlocked_biomes: Vec<BiomeId>,
    /// Summed additive bonus: patience, overtime, and reward skills.
    pub bonus: f64,
    /// False when the panda was recalled early.
    pub completed: bool,
    /// Timer fraction reached; scales rewards on a recall.
    pub progress: f64,
    pub pity_counter: u32,
    /// Multiplier on the power-cell drop chance from skills.
    pub drop_bonus: f64,
    /// Discoverable resources of `biome` not yet found anywhere.
    pub undiscovered: Vec<ResourceId>,
}

/// The rolled reward bundle, applied atomically by the reducer.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpeditionRewards {
    pub resources: BTreeMap<ResourceId, f64>,
    pub power_cells: Vec<PowerCell>,
    pub new_biome: Option<BiomeId>,
    pub new_resources: Vec<ResourceId>,
}

/// Patience and overtime bonus at collection time. Zero before the
/// timer has run out.
pub fn collection_bonus(expedition: &ExpeditionState, now_ms: u64) -> f64 {
    let completion = expedition.start_time_ms + expedition.duration_ms;
    if now_ms < completion {
        return 0.0;
    }
    let overtime_minutes = (now_ms - completion) as f64 / 60_000.0;
    let slots = (overtime_minutes / OVERTIME_STEP_MINUTES).floor();
    PATIENCE_BONUS + (slots * OVERTIME_STEP).min(OVERTIME_CAP)
}

/// Roll the full reward bundle for a collected or recalled expedition.
pub fn roll_rewards(catalog: &Catalog, ctx: &RewardContext, rng: &mut SimRng) -> ExpeditionRewards {
    let config = catalog.expedition_tier(ctx.tier);
    let completion_bonus = if ctx.completed { COMPLETION_BONUS } else { 0.0 };
    let progress_multiplier = if ctx.completed { 1.0 } else { ctx.progress.clamp(0.0, 1.0) };
    let total = config.resource_multiplier
        * (1.0 + ctx.bonus + completion_bonus)
        * calc::biome_scale(ctx.unlocked_biomes.len() as u32)
        * progress_multiplier;

    let mut rewards = ExpeditionRewards::default();

    // Base haul: every primary resource of the explored biome.
    for resource in &catalog.biome(ctx.biome).primary_resources {
        let amount = (rng.range_f64(20.0, 50.0) * total).floor();
        rewards.resources.insert(resource.clone(), amount);
    }

    // Power cells and discoveries only come home with a finished run.
    if ctx.completed {
        let cell_chance = config.power_cell_chance * (1.0 + ctx.drop_bonus);
        if rng.chance(cell_chance) {
            let weights: Vec<f64> = PowerCellTier::ALL
                .iter()
                .map(|t| catalog.power_cell(*t).drop_weight)
                .collect();
            let tier = PowerCellTier::ALL[rng.weighted_index(&weights)];
            rewards.power_cells.push(PowerCell {
                tier,
                bonus: catalog.power_cell(tier).bonus,
            });
        }

        let pity_bonus = (ctx.pity_counter as f64 * PITY_STEP).min(PITY_CAP);
        if rng.chance(config.biome_discovery_chance + pity_bonus) {
            if let Some(next) = ctx.biome.next_in_progression() {
                if !ctx.unlocked_biomes.contains(&next) {
                    rewards.new_biome = Some(next);
                }
            }
        }
    }

    // A run that also found a biome brings back fewer resource finds.
    let max_new = if rewards.new_biome.is_some() { 2 } else { 3 };
    let mut candidates = ctx.undiscovered.clone();
    rng.shuffle(&mut candidates);
    for resource in candidates {
        if rewards.new_resources.len() >= max_new {
            break;
        }
        if rng.chance(config.resource_discovery_chance) {
            // A discovery comes with a small starter stash.
            let amount = ((rng.range_f64(3.0, 9.0)).floor() * total).floor();
            *rewards.resources.entry(resource.clone()).or_insert(0.0) += amount;
            rewards.new_resources.push(resource);
        }
    }

    rewards
}
