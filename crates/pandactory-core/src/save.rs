//! Save encoding, decoding, and forward migration.
//!
//! Saves are JSON documents of [`GameState`]. Unknown fields from
//! older builds are dropped by serde; missing fields take their
//! defaults. After decoding, an ordered chain of named migration
//! steps repairs whatever the defaults cannot: renamed ids, retired
//! catalog entries, and derived collections that older saves never
//! stored.

use crate::catalog::Catalog;
use crate::id::{AutomationId, BiomeId, FoodId, ResourceId};
use crate::state::GameState;

/// Version written into every save.
pub const SAVE_VERSION: &str = "1.2.0";

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("malformed save document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Serialize a state to its JSON save form.
pub fn encode(state: &GameState) -> Result<String, SaveError> {
    Ok(serde_json::to_string(state)?)
}

/// Decode a save document and migrate it to the current version.
pub fn decode(catalog: &Catalog, raw: &str) -> Result<GameState, SaveError> {
    let mut state: GameState = serde_json::from_str(raw)?;
    migrate(catalog, &mut state);
    Ok(state)
}

type MigrationFn = fn(&Catalog, &mut GameState);

/// The migration chain, oldest repair first. Every step is
/// idempotent, so current-version saves pass through unchanged.
const MIGRATIONS: &[(&str, MigrationFn)] = &[
    ("backfill-biome-entries", backfill_biome_entries),
    ("rename-cactus-fruit", rename_cactus_fruit),
    ("drop-retired-ids", drop_retired_ids),
    ("rederive-primary-discoveries", rederive_primary_discoveries),
    ("rebuild-unlocked-biomes", rebuild_unlocked_biomes),
    ("backfill-automation-ids", backfill_automation_ids),
];

/// Run the full chain and stamp the current version.
pub fn migrate(catalog: &Catalog, state: &mut GameState) {
    for (name, step) in MIGRATIONS {
        step(catalog, state);
        log::debug!("migration step applied: {name}");
    }
    if state.version != SAVE_VERSION {
        log::info!(
            "migrated save from version '{}' to '{SAVE_VERSION}'",
            state.version
        );
        state.version = SAVE_VERSION.to_string();
    }
}

/// Saves from before a biome shipped have no entry for it.
fn backfill_biome_entries(_catalog: &Catalog, state: &mut GameState) {
    for biome in BiomeId::ALL {
        state.biomes.entry(biome).or_default();
    }
}

/// cactus_fruit became cactus_juice in 1.1.
fn rename_cactus_fruit(_catalog: &Catalog, state: &mut GameState) {
    let old = FoodId::new("cactus_fruit");
    let new = FoodId::new("cactus_juice");
    if let Some(amount) = state.food.remove(&old) {
        *state.food.entry(new.clone()).or_insert(0.0) += amount;
    }
    if state.discovered_produced_foods.remove(&old) {
        state.discovered_produced_foods.insert(new.clone());
    }
    for pending in &mut state.pending_food_discoveries {
        if *pending == old {
            *pending = new.clone();
        }
    }
}

/// Drop identifiers the current catalog no longer knows: stale stock
/// entries, discoveries, pending popups, automations of retired types,
/// and skills cut from the tree.
fn drop_retired_ids(catalog: &Catalog, state: &mut GameState) {
    let known_resource = |id: &ResourceId| catalog.resource(id).is_some();
    let known_food = |id: &FoodId| catalog.food(id).is_some();

    for biome in state.biomes.values_mut() {
        biome.resources.retain(|id, _| known_resource(id));
        biome.discovered_resources.retain(known_resource);
        biome
            .automations
            .retain(|_, a| catalog.automation(&a.type_id).is_some());
    }
    state.food.retain(|id, _| known_food(id));
    state.discovered_produced_resources.retain(known_resource);
    state.pending_resource_discoveries.retain(known_resource);
    state.discovered_produced_foods.retain(known_food);
    state.pending_food_discoveries.retain(known_food);
    state
        .prestige
        .unlocked_skills
        .retain(|id| catalog.skill(id).is_some());
    state
        .achievements
        .unlocked
        .retain(|id| catalog.achievement(id).is_some());
    state
        .achievements
        .pending
        .retain(|id| catalog.achievement(id).is_some());
}

/// Activated biomes always know their primary resources; older saves
/// missed this for biomes activated before the rule existed.
fn rederive_primary_discoveries(catalog: &Catalog, state: &mut GameState) {
    for biome in BiomeId::ALL {
        if state.biome(biome).activated {
            let primaries = catalog.biome(biome).primary_resources.clone();
            state
                .biome_mut(biome)
                .discovered_resources
                .extend(primaries);
        }
    }
}

/// unlockedBiomes was added after the discovered flags; rebuild it
/// when the flags know more than the list.
fn rebuild_unlocked_biomes(_catalog: &Catalog, state: &mut GameState) {
    let from_flags: Vec<BiomeId> = BiomeId::ALL
        .into_iter()
        .filter(|b| state.biome(*b).discovered)
        .collect();
    if from_flags.len() > state.unlocked_biomes.len() {
        state.unlocked_biomes = from_flags;
    }
    if state.unlocked_biomes.is_empty() {
        state.unlocked_biomes.push(BiomeId::LushForest);
    }
}

/// Keep the id allocator ahead of every existing automation.
fn backfill_automation_ids(_catalog: &Catalog, state: &mut GameState) {
    let max_id = state
        .biomes
        .values()
        .flat_map(|b| b.automations.keys())
        .map(|AutomationId(id)| *id)
        .max()
        .unwrap_or(0);
    if state.next_automation_id <= max_id {
        state.next_automation_id = max_id + 1;
    }
    if state.next_automation_id == 0 {
        state.next_automation_id = 1;
    }
}
