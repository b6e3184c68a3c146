//! Property-based tests for the simulation core.
//!
//! Uses proptest to generate random factories, levels, and time
//! spans, then verifies the numeric invariants the engine promises.

use pandactory_core::allocation::{automation_efficiency, automation_rate};
use pandactory_core::bonus::BonusContext;
use pandactory_core::calc;
use pandactory_core::engine;
use pandactory_core::expedition::collection_bonus;
use pandactory_core::id::*;
use pandactory_core::offline::{self, MAX_OFFLINE_SECONDS};
use pandactory_core::rng::SimRng;
use pandactory_core::state::{ExpeditionState, GameState};
use pandactory_core::test_utils::{add_automation, mini_catalog};
use proptest::prelude::*;

// ===========================================================================
// Generators
// ===========================================================================

/// A forest factory with random counts of loggers, saw mills, and
/// berry pickers at random levels, plus a random wood stock.
fn arb_factory() -> impl Strategy<Value = GameState> {
    (
        proptest::collection::vec((0..3u8, 1..20u32), 0..8),
        0.0..500.0f64,
    )
        .prop_map(|(builds, wood)| {
            let catalog = mini_catalog();
            let mut state = GameState::initial(&catalog, 0);
            for (kind, level) in builds {
                let type_id = match kind {
                    0 => "logger",
                    1 => "saw_mill",
                    _ => "berry_picker",
                };
                add_automation(&mut state, BiomeId::LushForest, type_id, level);
            }
            state
                .biome_mut(BiomeId::LushForest)
                .resources
                .insert(ResourceId::new("wood"), wood);
            state
        })
}

fn finished_expedition(start_time_ms: u64, duration_ms: u64) -> ExpeditionState {
    ExpeditionState {
        tier: ExpeditionTier::QuickDash,
        start_time_ms,
        duration_ms,
        food_consumed: vec![],
        collected_at: None,
    }
}

// ===========================================================================
// Properties
// ===========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// Efficiency is clamped to [0, 1] and gatherers always run at 1.
    #[test]
    fn efficiency_is_always_clamped(state in arb_factory()) {
        let catalog = mini_catalog();
        let ctx = BonusContext::from_state(&catalog, &state);
        for automation in state.biome(BiomeId::LushForest).automations.values() {
            let eff = automation_efficiency(&catalog, &state, &ctx, automation);
            prop_assert!((0.0..=1.0).contains(&eff));
            let def = catalog.automation(&automation.type_id).unwrap();
            if def.is_gatherer() {
                prop_assert_eq!(eff, 1.0);
            }
        }
    }

    /// The per-level rate multiplier grows strictly with level.
    #[test]
    fn production_rate_grows_with_level(state in arb_factory()) {
        let catalog = mini_catalog();
        let ctx = BonusContext::from_state(&catalog, &state);
        for automation in state.biome(BiomeId::LushForest).automations.values() {
            let mut upgraded = automation.clone();
            upgraded.level += 1;
            prop_assert!(
                automation_rate(&catalog, &ctx, &upgraded)
                    > automation_rate(&catalog, &ctx, automation)
            );
        }
    }

    /// Upgrade cost lines never decrease with level, at any reduction.
    #[test]
    fn upgrade_costs_never_decrease(level in 0..60u32, reduction in 0.0..0.9f64) {
        let catalog = mini_catalog();
        let def = catalog.automation(&AutomationTypeId::new("saw_mill")).unwrap();
        let now = calc::level_up_cost(def, level, reduction);
        let next = calc::level_up_cost(def, level + 1, reduction);
        for (a, b) in now.iter().zip(&next) {
            prop_assert!(b.amount >= a.amount);
        }
    }

    /// Ticking never drives any stock negative.
    #[test]
    fn stocks_never_go_negative(
        mut state in arb_factory(),
        deltas in proptest::collection::vec(0.1..120.0f64, 1..10),
    ) {
        let catalog = mini_catalog();
        for delta in deltas {
            engine::advance(&catalog, &mut state, delta, 1.0);
        }
        for biome in state.biomes.values() {
            for (resource, amount) in &biome.resources {
                prop_assert!(*amount >= -1e-9, "{resource} went negative: {amount}");
            }
        }
    }

    /// Offline replay simulates at most the elapsed time, capped at
    /// eight hours, and always stamps the clock.
    #[test]
    fn offline_simulation_respects_the_cap(
        mut state in arb_factory(),
        gap_ms in 0u64..(20 * 3600 * 1000),
    ) {
        let catalog = mini_catalog();
        let progress = offline::apply_offline_progress(&catalog, &mut state, gap_ms);
        prop_assert_eq!(state.last_tick, gap_ms);
        if let Some(progress) = progress {
            prop_assert!(progress.simulated_seconds <= progress.elapsed_seconds);
            prop_assert!(progress.simulated_seconds <= MAX_OFFLINE_SECONDS);
        } else {
            prop_assert!(gap_ms < 60_000);
        }
    }

    /// The patience/overtime bonus is 0 before completion and within
    /// [0.15, 0.65] after.
    #[test]
    fn collection_bonus_is_bounded(
        duration_ms in 1_000u64..10_000_000,
        after_ms in 0u64..100_000_000,
    ) {
        let expedition = finished_expedition(0, duration_ms);
        let bonus = collection_bonus(&expedition, after_ms);
        if after_ms < duration_ms {
            prop_assert_eq!(bonus, 0.0);
        } else {
            prop_assert!((0.15..=0.65).contains(&bonus));
        }
    }

    /// Weighted rolls are reproducible from the seed.
    #[test]
    fn weighted_rolls_are_deterministic(seed in any::<u64>()) {
        let weights = [70.0, 25.0, 5.0];
        let mut a = SimRng::new(seed);
        let mut b = SimRng::new(seed);
        for _ in 0..32 {
            let draw = a.weighted_index(&weights);
            prop_assert_eq!(draw, b.weighted_index(&weights));
            prop_assert!(draw < weights.len());
        }
    }
}
