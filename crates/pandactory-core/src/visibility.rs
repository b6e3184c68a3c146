//! Progressive reveal of automations.
//!
//! An automation only shows up in a biome's build list once the player
//! knows every resource it touches: raw inputs, raw outputs, and build
//! costs must be discovered, intermediate inputs and costs must have
//! been produced at least once.

use crate::catalog::{AutomationDef, Catalog, ResourceCategory};
use crate::id::{AutomationTypeId, BiomeId, ResourceId};
use crate::state::GameState;
use std::collections::BTreeSet;

fn resource_known(
    catalog: &Catalog,
    discovered: &BTreeSet<&ResourceId>,
    produced: &BTreeSet<ResourceId>,
    resource: &ResourceId,
) -> bool {
    match catalog.resource(resource).map(|r| r.category) {
        Some(ResourceCategory::Raw) => discovered.contains(resource),
        Some(ResourceCategory::Intermediate) => produced.contains(resource),
        // Final products never gate visibility.
        Some(ResourceCategory::Final) => true,
        None => false,
    }
}

/// True when every resource the automation touches is known.
pub fn can_see_automation(catalog: &Catalog, state: &GameState, def: &AutomationDef) -> bool {
    let discovered: BTreeSet<&ResourceId> = state
        .biomes
        .values()
        .flat_map(|b| b.discovered_resources.iter())
        .collect();
    let produced = &state.discovered_produced_resources;

    let inputs_known = def
        .consumes
        .iter()
        .map(|f| &f.resource)
        .chain(def.base_cost.iter().map(|c| &c.resource))
        .all(|r| resource_known(catalog, &discovered, produced, r));

    // Outputs never hide a machine that would produce something new;
    // only a raw output the player has not found yet gates it.
    let outputs_known = def.produces.iter().all(|f| {
        match catalog.resource(&f.resource).map(|r| r.category) {
            Some(ResourceCategory::Raw) => discovered.contains(&f.resource),
            Some(_) => true,
            None => false,
        }
    });

    inputs_known && outputs_known
}

/// The buildable automations of one biome that the player can see,
/// in the biome's catalog order.
pub fn visible_automations<'a>(
    catalog: &'a Catalog,
    state: &GameState,
    biome: BiomeId,
) -> Vec<&'a AutomationTypeId> {
    catalog
        .biome(biome)
        .automations
        .iter()
        .filter(|id| {
            catalog
                .automation(id)
                .is_some_and(|def| can_see_automation(catalog, state, def))
        })
        .collect()
}
