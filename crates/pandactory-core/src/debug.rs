//! Developer commands for poking a running game.
//!
//! Commands enter through an explicit [`DebugConsole`] rather than
//! hidden globals. Grants bypass the normal cost validation on
//! purpose, but every command shares the reducer's clone-and-return
//! shape and its post-action achievement check, so callers never see
//! a half-applied state. Unknown ids are logged and ignored.

use crate::catalog::Catalog;
use crate::id::{BiomeId, FoodId, ResourceId};
use crate::reducer;
use crate::state::{GameState, PowerCell};

#[derive(Debug, Clone, PartialEq)]
pub enum DebugCommand {
    AddResource {
        biome: BiomeId,
        resource: ResourceId,
        amount: f64,
    },
    AddFood {
        food: FoodId,
        amount: f64,
    },
    GrantPowerCell {
        cell: PowerCell,
    },
    GrantShards {
        amount: f64,
    },
    /// Backdate the running expedition so it is collectable now.
    FinishExpedition,
    /// Dump the current state as a pretty-printed save document.
    Snapshot,
    /// Wipe everything, prestige progression included.
    Reset,
}

/// The entry point for debug commands. Holds the catalog so callers
/// only pass state and command.
pub struct DebugConsole<'a> {
    catalog: &'a Catalog,
}

impl<'a> DebugConsole<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Run one command, returning the next state and any textual
    /// output. Only [`DebugCommand::Snapshot`] produces output, and it
    /// leaves the state untouched.
    pub fn run(
        &self,
        state: &GameState,
        command: &DebugCommand,
        now_ms: u64,
    ) -> (GameState, Option<String>) {
        if matches!(command, DebugCommand::Snapshot) {
            let dump = match serde_json::to_string_pretty(state) {
                Ok(dump) => dump,
                Err(err) => format!("snapshot failed: {err}"),
            };
            return (state.clone(), Some(dump));
        }
        let mut next = state.clone();
        apply(self.catalog, &mut next, command, now_ms);
        reducer::settle_achievements(self.catalog, &mut next);
        (next, None)
    }
}

fn apply(catalog: &Catalog, state: &mut GameState, command: &DebugCommand, now_ms: u64) {
    match command {
        DebugCommand::AddResource {
            biome,
            resource,
            amount,
        } => {
            if catalog.resource(resource).is_none() {
                log::warn!("debug grant ignored: unknown resource '{resource}'");
                return;
            }
            *state
                .biome_mut(*biome)
                .resources
                .entry(resource.clone())
                .or_insert(0.0) += amount;
            state
                .biome_mut(*biome)
                .discovered_resources
                .insert(resource.clone());
        }
        DebugCommand::AddFood { food, amount } => {
            if catalog.food(food).is_none() {
                log::warn!("debug grant ignored: unknown food '{food}'");
                return;
            }
            *state.food.entry(food.clone()).or_insert(0.0) += amount;
        }
        DebugCommand::GrantPowerCell { cell } => {
            state.power_cell_inventory.push(*cell);
        }
        DebugCommand::GrantShards { amount } => {
            state.prestige.cosmic_bamboo_shards += amount;
        }
        DebugCommand::FinishExpedition => {
            if let Some(expedition) = state.panda.expedition.as_mut() {
                expedition.start_time_ms = now_ms.saturating_sub(expedition.duration_ms);
            } else {
                log::warn!("debug finish ignored: no expedition running");
            }
        }
        DebugCommand::Snapshot => {}
        DebugCommand::Reset => {
            *state = GameState::initial(catalog, now_ms);
        }
    }
}
