//! A running game: state plus clock, RNG, and storage.
//!
//! [`GameSession`] owns the live [`GameState`] and drives everything a
//! frontend needs: the tick loop, reward rolls, autosaving, and the
//! offline replay on load. Anything worth showing the player is queued
//! as a [`SessionEvent`]. The reducer stays pure; this is the only
//! place where wall-clock time and randomness enter.

use crate::bonus::BonusContext;
use crate::calc;
use crate::catalog::Catalog;
use crate::expedition::{self, ExpeditionRewards, RewardContext};
use crate::id::{AchievementId, ExpeditionTier, FoodId, ResourceId};
use crate::offline::{self, OfflineProgress};
use crate::persist::{self, SaveStore, StoreError, TimeSource};
use crate::reducer::{self, Action};
use crate::rng::SimRng;
use crate::save::{self, SaveError};
use crate::state::GameState;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Time between autosaves.
pub const AUTOSAVE_INTERVAL_MS: u64 = 5_000;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Save(#[from] SaveError),
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The panda is home, or the expedition is not in the right phase.
    #[error("no expedition to {0}")]
    NoExpedition(&'static str),
    /// The food pool cannot cover the launch cost.
    #[error("not enough food for expedition")]
    NotEnoughFood,
}

/// Something a presentation layer should surface. Queued as the
/// session runs and drained with [`GameSession::drain_events`].
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// The welcome-back report after an absence was replayed.
    OfflineReplay(OfflineProgress),
    ResourceDiscovered(ResourceId),
    FoodDiscovered(FoodId),
    AchievementUnlocked(AchievementId),
    ExpeditionCollected(ExpeditionRewards),
    ExpeditionRecalled(ExpeditionRewards),
    Saved,
}

/// One player's running game.
pub struct GameSession<S, T> {
    catalog: Arc<Catalog>,
    state: GameState,
    rng: SimRng,
    store: S,
    clock: T,
    last_autosave_ms: u64,
    in_tick: bool,
    events: Vec<SessionEvent>,
}

impl<S: SaveStore, T: TimeSource> GameSession<S, T> {
    /// Start a session: load the save (falling back to a fresh game on
    /// a corrupt document), then replay offline time. The returned
    /// progress is the welcome-back report, when there is one.
    pub fn start(
        catalog: Arc<Catalog>,
        mut store: S,
        clock: T,
        seed: u64,
    ) -> Result<(Self, Option<OfflineProgress>), SessionError> {
        let now = clock.now_ms();
        let mut state = match store.load()? {
            Some(raw) => match save::decode(&catalog, &raw) {
                Ok(state) => state,
                Err(err) => {
                    log::warn!("discarding unreadable save: {err}");
                    GameState::initial(&catalog, now)
                }
            },
            None => GameState::initial(&catalog, now),
        };
        let progress = offline::apply_offline_progress(&catalog, &mut state, now);

        let mut events = Vec::new();
        if let Some(progress) = &progress {
            events.push(SessionEvent::OfflineReplay(progress.clone()));
        }
        Ok((
            Self {
                catalog,
                state,
                rng: SimRng::new(seed),
                store,
                clock,
                last_autosave_ms: now,
                in_tick: false,
                events,
            },
            progress,
        ))
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn clock(&self) -> &T {
        &self.clock
    }

    /// Take everything queued since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Apply one action at the current wall-clock time.
    pub fn dispatch(&mut self, action: &Action) {
        let now = self.clock.now_ms();
        let next = reducer::reduce(&self.catalog, &self.state, action, now);
        self.queue_pending_events(&next);
        self.state = next;
    }

    /// Turn queue entries the action just added into events. Compares
    /// against the previous state so acknowledged entries never
    /// re-fire.
    fn queue_pending_events(&mut self, next: &GameState) {
        for resource in &next.pending_resource_discoveries {
            if !self.state.pending_resource_discoveries.contains(resource) {
                self.events
                    .push(SessionEvent::ResourceDiscovered(resource.clone()));
            }
        }
        for food in &next.pending_food_discoveries {
            if !self.state.pending_food_discoveries.contains(food) {
                self.events.push(SessionEvent::FoodDiscovered(food.clone()));
            }
        }
        for achievement in &next.achievements.pending {
            if !self.state.achievements.pending.contains(achievement) {
                self.events
                    .push(SessionEvent::AchievementUnlocked(achievement.clone()));
            }
        }
    }

    /// One pass of the live loop: advance the factory by the elapsed
    /// time and autosave when due. Re-entrant calls are dropped so an
    /// overlapping timer callback cannot double-apply a delta.
    pub fn tick_once(&mut self) -> Result<(), SessionError> {
        if self.in_tick {
            log::warn!("tick skipped: previous tick still running");
            return Ok(());
        }
        self.in_tick = true;
        let result = self.tick_inner();
        self.in_tick = false;
        result
    }

    fn tick_inner(&mut self) -> Result<(), SessionError> {
        let now = self.clock.now_ms();
        let delta_seconds = now.saturating_sub(self.state.last_tick) as f64 / 1000.0;
        self.state = reducer::reduce(
            &self.catalog,
            &self.state,
            &Action::Tick { delta_seconds },
            now,
        );
        if now.saturating_sub(self.last_autosave_ms) >= AUTOSAVE_INTERVAL_MS {
            self.save()?;
        }
        Ok(())
    }

    /// Provision and launch an expedition, picking food automatically
    /// (richest first).
    pub fn start_expedition(&mut self, tier: ExpeditionTier) -> Result<(), SessionError> {
        let ctx = BonusContext::from_state(&self.catalog, &self.state);
        let config = self.catalog.expedition_tier(tier);
        let required = calc::effective_food_cost(
            config,
            self.state.unlocked_biomes.len() as u32,
            ctx.expedition_food_reduction,
        );
        let plan = calc::select_food(&self.catalog, &self.state.food, required)
            .ok_or(SessionError::NotEnoughFood)?;
        self.dispatch(&Action::StartExpedition { tier, food: plan });
        Ok(())
    }

    /// Roll and bank the rewards of a finished expedition.
    pub fn collect_expedition(&mut self) -> Result<ExpeditionRewards, SessionError> {
        let now = self.clock.now_ms();
        let expedition = self
            .state
            .panda
            .expedition
            .clone()
            .ok_or(SessionError::NoExpedition("collect"))?;
        if !expedition.is_complete(now) {
            return Err(SessionError::NoExpedition("collect"));
        }
        let ctx = self.reward_context(expedition.tier, true, 1.0, now);
        let rewards = expedition::roll_rewards(&self.catalog, &ctx, &mut self.rng);
        self.events
            .push(SessionEvent::ExpeditionCollected(rewards.clone()));
        self.dispatch(&Action::CollectExpedition {
            rewards: rewards.clone(),
        });
        Ok(rewards)
    }

    /// Recall a running expedition for partial, progress-scaled
    /// rewards. Power cells and discoveries are forfeited.
    pub fn recall_expedition(&mut self) -> Result<ExpeditionRewards, SessionError> {
        let now = self.clock.now_ms();
        let expedition = self
            .state
            .panda
            .expedition
            .clone()
            .ok_or(SessionError::NoExpedition("recall"))?;
        if expedition.is_complete(now) {
            return Err(SessionError::NoExpedition("recall"));
        }
        let progress = expedition.progress(now);
        let ctx = self.reward_context(expedition.tier, false, progress, now);
        let rewards = expedition::roll_rewards(&self.catalog, &ctx, &mut self.rng);
        self.events
            .push(SessionEvent::ExpeditionRecalled(rewards.clone()));
        self.dispatch(&Action::RecallExpedition {
            rewards: rewards.clone(),
        });
        Ok(rewards)
    }

    fn reward_context(
        &self,
        tier: ExpeditionTier,
        completed: bool,
        progress: f64,
        now_ms: u64,
    ) -> RewardContext {
        let ctx = BonusContext::from_state(&self.catalog, &self.state);
        let biome = self.state.player.current_biome;

        let known: BTreeSet<&ResourceId> = self
            .state
            .biomes
            .values()
            .flat_map(|b| b.discovered_resources.iter())
            .chain(self.state.discovered_produced_resources.iter())
            .collect();
        let undiscovered: Vec<ResourceId> = self
            .catalog
            .biome(biome)
            .discoverable_resources
            .iter()
            .filter(|r| !known.contains(*r))
            .cloned()
            .collect();

        let collection = self
            .state
            .panda
            .expedition
            .as_ref()
            .map(|e| expedition::collection_bonus(e, now_ms))
            .unwrap_or(0.0);

        RewardContext {
            tier,
            biome,
            unlocked_biomes: self.state.unlocked_biomes.clone(),
            bonus: collection + ctx.expedition_resource_bonus,
            completed,
            progress,
            pity_counter: self.state.expedition_pity_counter,
            drop_bonus: ctx.power_cell_drop_bonus,
            undiscovered,
        }
    }

    /// Write the current state to storage and stamp the save time.
    pub fn save(&mut self) -> Result<(), SessionError> {
        let document = save::encode(&self.state)?;
        persist::save_with_retry(&mut self.store, &document)?;
        self.dispatch(&Action::MarkSaved);
        self.last_autosave_ms = self.clock.now_ms();
        self.events.push(SessionEvent::Saved);
        Ok(())
    }

    /// Final save on the way out.
    pub fn shutdown(mut self) -> Result<(), SessionError> {
        self.save()
    }
}
