//! Offline replay against the shipping catalog: the replay must match
//! ticking the same span live at the offline rate, and the cap and
//! grace rules must hold.

use pandactory_core::engine;
use pandactory_core::id::{BiomeId, ResourceId};
use pandactory_core::offline::{
    self, MAX_OFFLINE_SECONDS, OFFLINE_CHUNK_SECONDS, OFFLINE_RATE_MULTIPLIER,
};
use pandactory_core::state::GameState;
use pandactory_core::test_utils::add_automation;

fn factory_state(catalog: &pandactory_core::catalog::Catalog) -> GameState {
    let mut state = GameState::initial(catalog, 0);
    add_automation(&mut state, BiomeId::LushForest, "logger", 2);
    add_automation(&mut state, BiomeId::LushForest, "quarry", 1);
    state
}

#[test]
fn replay_matches_live_ticking_at_offline_rate() {
    let catalog = pandactory_data::standard_catalog().unwrap();
    let offline_state = &mut factory_state(&catalog);
    let live_state = &mut factory_state(&catalog);

    // Five minutes away, replayed in one call.
    let progress = offline::apply_offline_progress(&catalog, offline_state, 300_000).unwrap();
    assert_eq!(progress.simulated_seconds, 300.0);

    // The same five minutes ticked live in replay-sized chunks.
    let chunks = (300.0 / OFFLINE_CHUNK_SECONDS) as u32;
    for _ in 0..chunks {
        engine::advance(
            &catalog,
            live_state,
            OFFLINE_CHUNK_SECONDS,
            OFFLINE_RATE_MULTIPLIER,
        );
    }
    live_state.last_tick = offline_state.last_tick;

    assert_eq!(offline_state, live_state);
    let wood = offline_state
        .biome(BiomeId::LushForest)
        .stock(&ResourceId::new("wood"));
    // Logger at level 2: 6/min * 1.25^2 = 9.375/min, five minutes at
    // the 0.2 offline rate.
    assert!((wood - 9.375).abs() < 1e-9);
}

#[test]
fn short_absences_are_absorbed() {
    let catalog = pandactory_data::standard_catalog().unwrap();
    let state = &mut factory_state(&catalog);

    let progress = offline::apply_offline_progress(&catalog, state, 59_000);
    assert!(progress.is_none());
    // The clock still moves so the next live tick sees no gap.
    assert_eq!(state.last_tick, 59_000);
    assert_eq!(
        state.biome(BiomeId::LushForest).stock(&ResourceId::new("wood")),
        0.0
    );
}

#[test]
fn absence_is_capped_at_eight_hours() {
    let catalog = pandactory_data::standard_catalog().unwrap();
    let state = &mut factory_state(&catalog);

    let ten_hours_ms = 10 * 3600 * 1000;
    let progress = offline::apply_offline_progress(&catalog, state, ten_hours_ms).unwrap();
    assert_eq!(progress.elapsed_seconds, 36_000.0);
    assert_eq!(progress.simulated_seconds, MAX_OFFLINE_SECONDS);
}

#[test]
fn replay_reports_what_it_produced() {
    let catalog = pandactory_data::standard_catalog().unwrap();
    let state = &mut factory_state(&catalog);

    let progress = offline::apply_offline_progress(&catalog, state, 600_000).unwrap();
    let wood = progress
        .produced_resources
        .get(&ResourceId::new("wood"))
        .copied()
        .unwrap_or(0.0);
    assert!(wood > 0.0);
    // The report matches the stock delta exactly.
    assert_eq!(
        wood,
        state.biome(BiomeId::LushForest).stock(&ResourceId::new("wood"))
    );
}
