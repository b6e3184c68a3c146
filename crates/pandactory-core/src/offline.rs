//! Offline catch-up: replaying elapsed wall-clock time through the
//! same tick pipeline the live loop uses, in fixed chunks, at a
//! reduced production rate.

use crate::catalog::Catalog;
use crate::engine::{self, TickOutcome};
use crate::id::{FoodId, ResourceId};
use crate::state::{GameState, PandaStatus};
use std::collections::BTreeMap;

/// Offline production runs at a fifth of the live rate.
pub const OFFLINE_RATE_MULTIPLIER: f64 = 0.20;

/// Absences longer than this are truncated.
pub const MAX_OFFLINE_SECONDS: f64 = 8.0 * 3600.0;

/// Absences shorter than this are absorbed into the next live tick.
pub const MIN_OFFLINE_SECONDS: f64 = 60.0;

/// Replay chunk size. Keeping chunks at the live tick scale makes the
/// replay arithmetic identical to running the same ticks online.
pub const OFFLINE_CHUNK_SECONDS: f64 = 60.0;

/// Summary of an offline replay, for the welcome-back report.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OfflineProgress {
    /// Real seconds the player was away.
    pub elapsed_seconds: f64,
    /// Seconds actually simulated after the cap.
    pub simulated_seconds: f64,
    pub produced_resources: BTreeMap<ResourceId, f64>,
    pub produced_food: BTreeMap<FoodId, f64>,
}

impl OfflineProgress {
    fn absorb(&mut self, outcome: TickOutcome) {
        for (id, amount) in outcome.produced_resources {
            *self.produced_resources.entry(id).or_insert(0.0) += amount;
        }
        for (id, amount) in outcome.produced_food {
            *self.produced_food.entry(id).or_insert(0.0) += amount;
        }
    }
}

/// Catch the state up from `state.last_tick` to `now_ms`.
///
/// Returns `None` when there is nothing to report: the absence was
/// under a minute, or the panda was away on an expedition (the factory
/// is idle then; only the clock advances). Always leaves `last_tick`
/// at `now_ms`.
pub fn apply_offline_progress(
    catalog: &Catalog,
    state: &mut GameState,
    now_ms: u64,
) -> Option<OfflineProgress> {
    let elapsed_seconds = now_ms.saturating_sub(state.last_tick) as f64 / 1000.0;
    state.last_tick = now_ms;

    if elapsed_seconds < MIN_OFFLINE_SECONDS {
        return None;
    }
    if state.panda.status == PandaStatus::Expedition {
        log::info!(
            "skipping offline replay of {elapsed_seconds:.0}s: panda is on an expedition"
        );
        return None;
    }

    let simulated_seconds = elapsed_seconds.min(MAX_OFFLINE_SECONDS);
    let mut progress = OfflineProgress {
        elapsed_seconds,
        simulated_seconds,
        ..Default::default()
    };

    let mut remaining = simulated_seconds;
    while remaining > 0.0 {
        let chunk = remaining.min(OFFLINE_CHUNK_SECONDS);
        progress.absorb(engine::advance(
            catalog,
            state,
            chunk,
            OFFLINE_RATE_MULTIPLIER,
        ));
        remaining -= chunk;
    }

    log::info!(
        "offline replay: {simulated_seconds:.0}s of {elapsed_seconds:.0}s away, {} resources produced",
        progress.produced_resources.len()
    );
    Some(progress)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::BiomeId;
    use crate::state::ExpeditionState;
    use crate::test_utils::{add_automation, mini_catalog};

    fn farm_state(catalog: &Catalog, start_ms: u64) -> GameState {
        let mut state = GameState::initial(catalog, start_ms);
        add_automation(&mut state, BiomeId::LushForest, "logger", 1);
        state
    }

    #[test]
    fn short_absence_is_skipped_but_clock_advances() {
        let catalog = mini_catalog();
        let mut state = farm_state(&catalog, 0);
        let result = apply_offline_progress(&catalog, &mut state, 59_000);
        assert!(result.is_none());
        assert_eq!(state.last_tick, 59_000);
        assert_eq!(state.global_stock(&ResourceId::new("wood")), 0.0);
    }

    #[test]
    fn replay_runs_at_reduced_rate() {
        let catalog = mini_catalog();
        let mut state = farm_state(&catalog, 0);
        // 10 minutes away: 6/min * 1.25 * 0.2 * 10.
        let progress = apply_offline_progress(&catalog, &mut state, 600_000).unwrap();
        let wood = state.global_stock(&ResourceId::new("wood"));
        assert!((wood - 15.0).abs() < 1e-6);
        assert!((progress.produced_resources["wood"] - 15.0).abs() < 1e-6);
        assert_eq!(progress.elapsed_seconds, 600.0);
        assert_eq!(progress.simulated_seconds, 600.0);
    }

    #[test]
    fn absence_is_capped_at_eight_hours() {
        let catalog = mini_catalog();
        let mut state = farm_state(&catalog, 0);
        let day_ms = 24 * 3600 * 1000;
        let progress = apply_offline_progress(&catalog, &mut state, day_ms).unwrap();
        assert_eq!(progress.elapsed_seconds, 86_400.0);
        assert_eq!(progress.simulated_seconds, MAX_OFFLINE_SECONDS);
        let wood = state.global_stock(&ResourceId::new("wood"));
        let expected = 6.0 * 1.25 * OFFLINE_RATE_MULTIPLIER * (MAX_OFFLINE_SECONDS / 60.0);
        assert!((wood - expected).abs() < 1e-6);
    }

    #[test]
    fn replay_matches_explicit_chunked_ticks() {
        let catalog = mini_catalog();
        let mut replayed = farm_state(&catalog, 0);
        let mut manual = replayed.clone();

        // 2.5 minutes: two full chunks plus a 30s partial.
        apply_offline_progress(&catalog, &mut replayed, 150_000);
        for chunk in [60.0, 60.0, 30.0] {
            engine::advance(&catalog, &mut manual, chunk, OFFLINE_RATE_MULTIPLIER);
        }
        manual.last_tick = 150_000;
        assert_eq!(replayed, manual);
    }

    #[test]
    fn expedition_absence_only_advances_the_clock() {
        let catalog = mini_catalog();
        let mut state = farm_state(&catalog, 0);
        state.panda.status = PandaStatus::Expedition;
        state.panda.expedition = Some(ExpeditionState {
            tier: crate::id::ExpeditionTier::QuickScout,
            start_time_ms: 0,
            duration_ms: 1_800_000,
            food_consumed: vec![],
            collected_at: None,
        });
        let result = apply_offline_progress(&catalog, &mut state, 600_000);
        assert!(result.is_none());
        assert_eq!(state.last_tick, 600_000);
        assert_eq!(state.global_stock(&ResourceId::new("wood")), 0.0);
    }
}
