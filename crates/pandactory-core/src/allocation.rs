//! Rate resolution: how fast each automation actually runs given the
//! global supply of its inputs.
//!
//! Efficiency is a throughput ratio, not a stock check. An automation
//! consuming faster than the factory produces its input is throttled to
//! the producers' pace; whether stock exists right now is the engine's
//! concern, not the resolver's.

use crate::bonus::BonusContext;
use crate::calc;
use crate::catalog::Catalog;
use crate::id::{BiomeId, FoodId, ResourceId};
use crate::state::{Automation, GameState};
use std::collections::BTreeMap;

/// Per-minute flow totals for display.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RateSummary {
    /// Actual output, throttled by efficiency, non-paused only.
    pub production: BTreeMap<ResourceId, f64>,
    /// Nominal input demand of every built automation, paused included.
    pub consumption: BTreeMap<ResourceId, f64>,
    pub food_production: BTreeMap<FoodId, f64>,
}

/// Nominal rate multiplier of one automation instance: level curve,
/// skill bonuses, and its installed cell. No efficiency.
pub fn automation_rate(catalog: &Catalog, ctx: &BonusContext, automation: &Automation) -> f64 {
    let Some(def) = catalog.automation(&automation.type_id) else {
        return 0.0;
    };
    let cell_bonus = automation
        .power_cell
        .as_ref()
        .map(|c| ctx.effective_cell_bonus(c))
        .unwrap_or(0.0);
    calc::production_rate(def, automation.level, ctx.production, cell_bonus)
}

/// Total nominal output of `resource` per minute across every running
/// automation in every activated biome.
pub fn global_production_rate(
    catalog: &Catalog,
    state: &GameState,
    ctx: &BonusContext,
    resource: &ResourceId,
) -> f64 {
    let mut total = 0.0;
    for biome in BiomeId::ALL {
        let biome_state = state.biome(biome);
        if !biome_state.activated {
            continue;
        }
        for automation in biome_state.automations.values() {
            if automation.paused {
                continue;
            }
            let Some(def) = catalog.automation(&automation.type_id) else {
                continue;
            };
            for flow in &def.produces {
                if &flow.resource == resource {
                    total += flow.amount_per_minute * automation_rate(catalog, ctx, automation);
                }
            }
        }
    }
    total
}

/// Supply-limited efficiency in [0, 1].
///
/// For each input, demand is `amount_per_minute` scaled by this
/// automation's nominal rate; efficiency is the worst ratio of global
/// supply to that demand. Gatherers have no inputs and run at 1.0.
pub fn automation_efficiency(
    catalog: &Catalog,
    state: &GameState,
    ctx: &BonusContext,
    automation: &Automation,
) -> f64 {
    let Some(def) = catalog.automation(&automation.type_id) else {
        return 0.0;
    };
    if def.is_gatherer() {
        return 1.0;
    }
    let rate = automation_rate(catalog, ctx, automation);
    let mut efficiency: f64 = 1.0;
    for flow in &def.consumes {
        let needed = flow.amount_per_minute * rate;
        if needed <= 0.0 {
            continue;
        }
        let supply = global_production_rate(catalog, state, ctx, &flow.resource);
        efficiency = efficiency.min(supply / needed);
    }
    efficiency.clamp(0.0, 1.0)
}

/// Flow summary for one biome.
pub fn biome_rates(
    catalog: &Catalog,
    state: &GameState,
    ctx: &BonusContext,
    biome: BiomeId,
) -> RateSummary {
    let mut summary = RateSummary::default();
    for automation in state.biome(biome).automations.values() {
        let Some(def) = catalog.automation(&automation.type_id) else {
            continue;
        };
        // Consumption is reported at nominal catalog rates even for
        // paused automations, matching the build-planning view.
        for flow in &def.consumes {
            *summary
                .consumption
                .entry(flow.resource.clone())
                .or_insert(0.0) += flow.amount_per_minute;
        }
        if automation.paused {
            continue;
        }
        let throughput = automation_rate(catalog, ctx, automation)
            * automation_efficiency(catalog, state, ctx, automation);
        for flow in &def.produces {
            *summary
                .production
                .entry(flow.resource.clone())
                .or_insert(0.0) += flow.amount_per_minute * throughput;
        }
        for flow in &def.produces_food {
            *summary
                .food_production
                .entry(flow.food.clone())
                .or_insert(0.0) += flow.amount_per_minute * throughput;
        }
    }
    summary
}

/// Flow summary across all activated biomes.
pub fn global_rates(catalog: &Catalog, state: &GameState, ctx: &BonusContext) -> RateSummary {
    let mut summary = RateSummary::default();
    for biome in BiomeId::ALL {
        if !state.biome(biome).activated {
            continue;
        }
        let biome_summary = biome_rates(catalog, state, ctx, biome);
        for (id, rate) in biome_summary.production {
            *summary.production.entry(id).or_insert(0.0) += rate;
        }
        for (id, rate) in biome_summary.consumption {
            *summary.consumption.entry(id).or_insert(0.0) += rate;
        }
        for (id, rate) in biome_summary.food_production {
            *summary.food_production.entry(id).or_insert(0.0) += rate;
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::{AutomationId, AutomationTypeId};
    use crate::test_utils::{add_automation, mini_catalog};

    #[test]
    fn gatherers_always_run_at_full_efficiency() {
        let catalog = mini_catalog();
        let mut state = GameState::initial(&catalog, 0);
        let id = add_automation(&mut state, BiomeId::LushForest, "logger", 1);
        let ctx = BonusContext::from_state(&catalog, &state);
        let automation = state.biome(BiomeId::LushForest).automations[&id].clone();
        assert_eq!(
            automation_efficiency(&catalog, &state, &ctx, &automation),
            1.0
        );
    }

    #[test]
    fn processor_without_producers_is_starved() {
        let catalog = mini_catalog();
        let mut state = GameState::initial(&catalog, 0);
        let id = add_automation(&mut state, BiomeId::LushForest, "saw_mill", 1);
        let ctx = BonusContext::from_state(&catalog, &state);
        let automation = state.biome(BiomeId::LushForest).automations[&id].clone();
        assert_eq!(
            automation_efficiency(&catalog, &state, &ctx, &automation),
            0.0
        );
    }

    #[test]
    fn efficiency_is_supply_over_demand() {
        let catalog = mini_catalog();
        let mut state = GameState::initial(&catalog, 0);
        // logger at level 1: 6 wood/min * 1.25 = 7.5/min supply.
        add_automation(&mut state, BiomeId::LushForest, "logger", 1);
        // saw_mill at level 1 demands 4 * 1.25 = 5/min; supply covers it.
        let mill = add_automation(&mut state, BiomeId::LushForest, "saw_mill", 1);
        let ctx = BonusContext::from_state(&catalog, &state);
        let automation = state.biome(BiomeId::LushForest).automations[&mill].clone();
        assert_eq!(
            automation_efficiency(&catalog, &state, &ctx, &automation),
            1.0
        );

        // Level 3 demand: 4 * 1.25^3 = 7.8125/min; supply still 7.5.
        state
            .biome_mut(BiomeId::LushForest)
            .automations
            .get_mut(&mill)
            .unwrap()
            .level = 3;
        let automation = state.biome(BiomeId::LushForest).automations[&mill].clone();
        let efficiency = automation_efficiency(&catalog, &state, &ctx, &automation);
        assert!((efficiency - 7.5 / 7.8125).abs() < 1e-12);
    }

    #[test]
    fn supply_crosses_biome_boundaries() {
        let catalog = mini_catalog();
        let mut state = GameState::initial(&catalog, 0);
        state.biome_mut(BiomeId::MistyLake).activated = true;
        add_automation(&mut state, BiomeId::MistyLake, "logger", 1);
        let mill = add_automation(&mut state, BiomeId::LushForest, "saw_mill", 1);
        let ctx = BonusContext::from_state(&catalog, &state);
        let automation = state.biome(BiomeId::LushForest).automations[&mill].clone();
        assert_eq!(
            automation_efficiency(&catalog, &state, &ctx, &automation),
            1.0
        );
    }

    #[test]
    fn deactivated_biomes_do_not_supply() {
        let catalog = mini_catalog();
        let mut state = GameState::initial(&catalog, 0);
        // Logger in a discovered-but-not-activated biome contributes nothing.
        state.biome_mut(BiomeId::MistyLake).discovered = true;
        add_automation(&mut state, BiomeId::MistyLake, "logger", 1);
        let mill = add_automation(&mut state, BiomeId::LushForest, "saw_mill", 1);
        let ctx = BonusContext::from_state(&catalog, &state);
        let automation = state.biome(BiomeId::LushForest).automations[&mill].clone();
        assert_eq!(
            automation_efficiency(&catalog, &state, &ctx, &automation),
            0.0
        );
    }

    #[test]
    fn paused_producers_do_not_supply() {
        let catalog = mini_catalog();
        let mut state = GameState::initial(&catalog, 0);
        let logger = add_automation(&mut state, BiomeId::LushForest, "logger", 1);
        let mill = add_automation(&mut state, BiomeId::LushForest, "saw_mill", 1);
        state
            .biome_mut(BiomeId::LushForest)
            .automations
            .get_mut(&logger)
            .unwrap()
            .paused = true;
        let ctx = BonusContext::from_state(&catalog, &state);
        let automation = state.biome(BiomeId::LushForest).automations[&mill].clone();
        assert_eq!(
            automation_efficiency(&catalog, &state, &ctx, &automation),
            0.0
        );
    }

    #[test]
    fn summary_consumption_counts_paused_at_nominal_rates() {
        let catalog = mini_catalog();
        let mut state = GameState::initial(&catalog, 0);
        add_automation(&mut state, BiomeId::LushForest, "logger", 1);
        let mill = add_automation(&mut state, BiomeId::LushForest, "saw_mill", 1);
        state
            .biome_mut(BiomeId::LushForest)
            .automations
            .get_mut(&mill)
            .unwrap()
            .paused = true;
        let ctx = BonusContext::from_state(&catalog, &state);
        let summary = biome_rates(&catalog, &state, &ctx, BiomeId::LushForest);
        // Paused mill produces nothing but its demand still shows.
        assert_eq!(summary.consumption.get("wood"), Some(&4.0));
        assert!(summary.production.get("planks").is_none());
        // Logger output unaffected: 6 * 1.25.
        assert!((summary.production["wood"] - 7.5).abs() < 1e-12);
    }

    #[test]
    fn unknown_automation_type_is_a_noop() {
        let catalog = mini_catalog();
        let mut state = GameState::initial(&catalog, 0);
        state.biome_mut(BiomeId::LushForest).automations.insert(
            AutomationId(99),
            Automation {
                type_id: AutomationTypeId::new("retired_gadget"),
                level: 5,
                power_cell: None,
                paused: false,
            },
        );
        let ctx = BonusContext::from_state(&catalog, &state);
        let summary = biome_rates(&catalog, &state, &ctx, BiomeId::LushForest);
        assert!(summary.production.is_empty());
        assert!(summary.consumption.is_empty());
    }
}
