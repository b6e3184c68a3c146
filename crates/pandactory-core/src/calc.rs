//! Pure numeric formulas: production rates, cost curves, expedition
//! provisioning. No state mutation beyond the cross-biome drain helper.

use crate::catalog::{AutomationDef, Catalog, ExpeditionTierDef, ResourceCost};
use crate::id::{BiomeId, FoodId, ResourceId};
use crate::state::GameState;
use std::collections::BTreeMap;

/// Geometric growth of production rate per automation level.
pub const LEVEL_GROWTH: f64 = 1.25;

/// Production bonus granted by unlocking every achievement.
pub const MASTERY_PRODUCTION_BONUS: f64 = 2.0;

/// Cost reduction granted by unlocking every achievement.
pub const MASTERY_COST_REDUCTION: f64 = 0.5;

// ============================================================================
// Production
// ============================================================================

/// Nominal output-rate multiplier for an automation at `level`.
///
/// `production_bonus` is the summed additive bonus from skills and
/// mastery; `cell_bonus` the effective bonus of an installed power
/// cell (0.0 when none). Does not include the efficiency factor.
pub fn production_rate(
    def: &AutomationDef,
    level: u32,
    production_bonus: f64,
    cell_bonus: f64,
) -> f64 {
    def.base_rate
        * LEVEL_GROWTH.powi(level as i32)
        * (1.0 + production_bonus)
        * (1.0 + cell_bonus)
}

// ============================================================================
// Costs
// ============================================================================

/// Apply an additive cost reduction to one amount, rounding up so a
/// cost line never reaches zero from reductions alone.
fn reduced(amount: f64, reduction: f64) -> f64 {
    (amount * (1.0 - reduction.clamp(0.0, 1.0))).ceil()
}

/// Cost to build a new instance of `def`.
pub fn build_cost(def: &AutomationDef, reduction: f64) -> Vec<ResourceCost> {
    def.base_cost
        .iter()
        .map(|c| ResourceCost {
            resource: c.resource.clone(),
            amount: reduced(c.amount, reduction),
        })
        .collect()
}

/// Cost to raise an automation from `level` to `level + 1`.
///
/// Each cost line grows geometrically with the automation's own
/// cost multiplier.
pub fn level_up_cost(def: &AutomationDef, level: u32, reduction: f64) -> Vec<ResourceCost> {
    def.base_cost
        .iter()
        .map(|c| ResourceCost {
            resource: c.resource.clone(),
            amount: reduced(c.amount * def.cost_multiplier.powi(level as i32), reduction),
        })
        .collect()
}

/// True when the pool covers every cost line.
pub fn can_afford(pool: &BTreeMap<ResourceId, f64>, costs: &[ResourceCost]) -> bool {
    costs
        .iter()
        .all(|c| pool.get(&c.resource).copied().unwrap_or(0.0) >= c.amount)
}

/// Drain `costs` from biome pools in progression order: earlier biomes
/// are emptied before later ones are touched. Call only after an
/// afford check against [`GameState::global_resource_pool`].
pub fn deduct_across_biomes(state: &mut GameState, costs: &[ResourceCost]) {
    for cost in costs {
        let mut remaining = cost.amount;
        for biome in BiomeId::ALL {
            if remaining <= 0.0 {
                break;
            }
            let biome_state = state.biome_mut(biome);
            let stock = biome_state.stock(&cost.resource);
            if stock <= 0.0 {
                continue;
            }
            let take = stock.min(remaining);
            biome_state
                .resources
                .insert(cost.resource.clone(), stock - take);
            remaining -= take;
        }
    }
}

// ============================================================================
// Expedition provisioning
// ============================================================================

/// Wall-clock duration of an expedition after time-reduction skills.
pub fn effective_duration_ms(tier: &ExpeditionTierDef, time_reduction: f64) -> u64 {
    (tier.duration_minutes * 60_000.0 * (1.0 - time_reduction.clamp(0.0, 1.0))) as u64
}

/// Reward and food-cost scaling per unlocked biome.
pub const BIOME_SCALE_BASE: f64 = 4.0;

/// Progression scale shared by expedition food costs and rewards:
/// quadruples per biome beyond the first.
pub fn biome_scale(unlocked_biome_count: u32) -> f64 {
    BIOME_SCALE_BASE.powi(unlocked_biome_count.saturating_sub(1) as i32)
}

/// Nutrition required to launch: base cost scaled by progression,
/// then discounted by food-reduction skills.
pub fn effective_food_cost(
    tier: &ExpeditionTierDef,
    unlocked_biome_count: u32,
    food_reduction: f64,
) -> f64 {
    tier.food_cost * biome_scale(unlocked_biome_count) * (1.0 - food_reduction.clamp(0.0, 1.0))
}

/// Total nutrition points available in the food pool.
pub fn total_nutrition(catalog: &Catalog, food: &BTreeMap<FoodId, f64>) -> f64 {
    food.iter()
        .filter_map(|(id, amount)| {
            let def = catalog.food(id)?;
            Some(def.nutrition * amount.max(0.0))
        })
        .sum()
}

/// Pick food to cover `required` nutrition, spending the richest food
/// first so cheap fillers survive for later expeditions. Fractional
/// units are allowed. Returns `None` when the pool falls short.
pub fn select_food(
    catalog: &Catalog,
    food: &BTreeMap<FoodId, f64>,
    required: f64,
) -> Option<Vec<(FoodId, f64)>> {
    if required <= 0.0 {
        return Some(Vec::new());
    }
    let mut by_nutrition: Vec<(&FoodId, f64, f64)> = food
        .iter()
        .filter_map(|(id, amount)| {
            let def = catalog.food(id)?;
            (*amount > 0.0 && def.nutrition > 0.0).then_some((id, def.nutrition, *amount))
        })
        .collect();
    by_nutrition.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut remaining = required;
    let mut plan = Vec::new();
    for (id, nutrition, available) in by_nutrition {
        if remaining <= 0.0 {
            break;
        }
        let units = (remaining / nutrition).min(available);
        plan.push((id.clone(), units));
        remaining -= units * nutrition;
    }
    (remaining <= 1e-9).then_some(plan)
}
