//! Pandactory Core -- the simulation engine for a panda-run factory
//! idle game.
//!
//! The crate is the headless game: a frontend renders state and
//! dispatches actions, but every rule lives here.
//!
//! # Architecture
//!
//! - [`catalog::Catalog`] -- Immutable game data (resources, foods,
//!   automations, biomes, expedition tiers, power cells, skills,
//!   achievements), assembled through a validating builder and frozen
//!   at startup.
//! - [`state::GameState`] -- The full mutable game tree. Also the save
//!   document: it serializes straight to the on-disk JSON layout.
//! - [`reducer::Action`] / [`reducer::reduce`] -- Every transition is
//!   an action applied to a snapshot, returning the next state.
//!   Invalid actions are no-ops; achievements are re-checked after
//!   every action.
//! - [`engine::advance`] -- The production tick: stock-gated input
//!   consumption, cross-biome draining in progression order,
//!   supply-throttled output.
//! - [`offline::apply_offline_progress`] -- Replays absences through
//!   the same tick pipeline in fixed chunks at a reduced rate.
//! - [`expedition::roll_rewards`] -- Seeded reward rolls, separated
//!   from the state transition so outcomes are replayable.
//! - [`session::GameSession`] -- Ties state, clock, RNG, and storage
//!   into a running game with autosave.
//!
//! # Determinism
//!
//! Ticks iterate biomes in [`id::BiomeId::ALL`] order and automations
//! by ascending instance id; reward rolls consume a [`rng::SimRng`]
//! in a fixed order. Given the same seed and action sequence, two
//! sessions produce identical states.

pub mod achievement;
pub mod allocation;
pub mod bonus;
pub mod calc;
pub mod catalog;
pub mod debug;
pub mod engine;
pub mod expedition;
pub mod id;
pub mod offline;
pub mod persist;
pub mod reducer;
pub mod rng;
pub mod save;
pub mod session;
pub mod state;
pub mod visibility;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
