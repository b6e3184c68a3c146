//! The production tick.
//!
//! One call to [`advance`] moves the factory forward by a wall-clock
//! delta: every running automation is gated on current stock, drains
//! its inputs across biomes, and deposits output into its own biome's
//! pool. Biomes are processed in progression order and automations in
//! ascending instance id, so a tick is fully deterministic.

use crate::allocation;
use crate::bonus::BonusContext;
use crate::calc;
use crate::catalog::{Catalog, ResourceCategory, ResourceCost};
use crate::id::{AutomationId, BiomeId, FoodId, ResourceId};
use crate::state::{GameState, PandaStatus, STOCK_EPSILON};
use std::collections::BTreeMap;

/// Threshold a produced stock must reach before the discovery fires.
const DISCOVERY_THRESHOLD: f64 = 1.0;

/// What one tick produced and newly discovered.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TickOutcome {
    pub produced_resources: BTreeMap<ResourceId, f64>,
    pub produced_food: BTreeMap<FoodId, f64>,
    pub discovered_resources: Vec<ResourceId>,
    pub discovered_foods: Vec<FoodId>,
}

impl TickOutcome {
    pub fn is_empty(&self) -> bool {
        self.produced_resources.is_empty()
            && self.produced_food.is_empty()
            && self.discovered_resources.is_empty()
            && self.discovered_foods.is_empty()
    }
}

/// Run all automations for `delta_seconds` of elapsed time.
///
/// `rate_multiplier` scales output only; input demand stays at nominal
/// catalog rates. Online ticks pass 1.0, offline replay passes the
/// reduced offline rate. While the panda is away on an expedition the
/// factory is fully idle and this is a no-op.
pub fn advance(
    catalog: &Catalog,
    state: &mut GameState,
    delta_seconds: f64,
    rate_multiplier: f64,
) -> TickOutcome {
    let mut outcome = TickOutcome::default();
    if delta_seconds <= 0.0 || state.panda.status == PandaStatus::Expedition {
        return outcome;
    }
    let delta_minutes = delta_seconds / 60.0;
    let ctx = BonusContext::from_state(catalog, state);

    for biome in BiomeId::ALL {
        if !state.biome(biome).activated {
            continue;
        }
        let ids: Vec<AutomationId> = state.biome(biome).automations.keys().copied().collect();
        for id in ids {
            let automation = state.biome(biome).automations[&id].clone();
            if automation.paused {
                continue;
            }
            let Some(def) = catalog.automation(&automation.type_id) else {
                continue;
            };

            // Inputs are all-or-nothing: a single short input skips the
            // whole automation for this tick.
            let mut demands = Vec::with_capacity(def.consumes.len());
            let mut starved = false;
            for flow in &def.consumes {
                let needed = flow.amount_per_minute * delta_minutes;
                if state.global_stock(&flow.resource) + STOCK_EPSILON < needed {
                    starved = true;
                    break;
                }
                demands.push(ResourceCost {
                    resource: flow.resource.clone(),
                    amount: needed,
                });
            }
            if starved {
                continue;
            }

            let throughput = allocation::automation_rate(catalog, &ctx, &automation)
                * allocation::automation_efficiency(catalog, state, &ctx, &automation)
                * rate_multiplier;

            calc::deduct_across_biomes(state, &demands);

            for flow in &def.produces {
                let amount = flow.amount_per_minute * throughput * delta_minutes;
                if amount <= 0.0 {
                    continue;
                }
                *state
                    .biome_mut(biome)
                    .resources
                    .entry(flow.resource.clone())
                    .or_insert(0.0) += amount;
                *outcome
                    .produced_resources
                    .entry(flow.resource.clone())
                    .or_insert(0.0) += amount;
            }
            for flow in &def.produces_food {
                let amount = flow.amount_per_minute * throughput * delta_minutes;
                if amount <= 0.0 {
                    continue;
                }
                *state.food.entry(flow.food.clone()).or_insert(0.0) += amount;
                *outcome
                    .produced_food
                    .entry(flow.food.clone())
                    .or_insert(0.0) += amount;
            }
        }
    }

    for amount in outcome.produced_resources.values() {
        state.lifetime_stats.total_resources_gathered += amount;
    }

    queue_discoveries(catalog, state, &mut outcome);
    outcome
}

/// Queue discovery popups for produced goods whose stock first crossed
/// the threshold. Raw resources come from expeditions, never from here.
fn queue_discoveries(catalog: &Catalog, state: &mut GameState, outcome: &mut TickOutcome) {
    let produced: Vec<ResourceId> = outcome.produced_resources.keys().cloned().collect();
    for resource in produced {
        let Some(def) = catalog.resource(&resource) else {
            continue;
        };
        if def.category == ResourceCategory::Raw {
            continue;
        }
        if state.global_stock(&resource) < DISCOVERY_THRESHOLD {
            continue;
        }
        if state.discovered_produced_resources.contains(&resource)
            || state.pending_resource_discoveries.contains(&resource)
        {
            continue;
        }
        state.discovered_produced_resources.insert(resource.clone());
        state.pending_resource_discoveries.push(resource.clone());
        outcome.discovered_resources.push(resource);
    }

    let produced_food: Vec<FoodId> = outcome.produced_food.keys().cloned().collect();
    for food in produced_food {
        let Some(def) = catalog.food(&food) else {
            continue;
        };
        if def.primary {
            continue;
        }
        if state.food.get(&food).copied().unwrap_or(0.0) < DISCOVERY_THRESHOLD {
            continue;
        }
        if state.discovered_produced_foods.contains(&food)
            || state.pending_food_discoveries.contains(&food)
        {
            continue;
        }
        state.discovered_produced_foods.insert(food.clone());
        state.pending_food_discoveries.push(food.clone());
        outcome.discovered_foods.push(food);
    }
}
