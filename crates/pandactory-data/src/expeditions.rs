//! The five expedition tiers. Food costs are in nutrition points,
//! not food items.

use pandactory_core::catalog::{CatalogBuilder, ExpeditionTierDef};
use pandactory_core::id::ExpeditionTier;

#[allow(clippy::too_many_arguments)]
fn def(
    id: ExpeditionTier,
    name: &str,
    duration_minutes: f64,
    food_cost: f64,
    resource_multiplier: f64,
    power_cell_chance: f64,
    biome_discovery_chance: f64,
    resource_discovery_chance: f64,
) -> ExpeditionTierDef {
    ExpeditionTierDef {
        id,
        name: name.to_string(),
        duration_minutes,
        food_cost,
        resource_multiplier,
        power_cell_chance,
        biome_discovery_chance,
        resource_discovery_chance,
    }
}

pub(crate) fn register(b: &mut CatalogBuilder) {
    b.expedition_tier(def(
        ExpeditionTier::QuickDash,
        "Swift Forage",
        10.0,
        500.0,
        0.5,
        0.05,
        0.03,
        0.10,
    ))
    .expedition_tier(def(
        ExpeditionTier::QuickScout,
        "Local Expedition",
        30.0,
        1_500.0,
        1.0,
        0.10,
        0.10,
        0.20,
    ))
    .expedition_tier(def(
        ExpeditionTier::StandardExpedition,
        "Standard Expedition",
        60.0,
        3_500.0,
        1.5,
        0.15,
        0.20,
        0.30,
    ))
    .expedition_tier(def(
        ExpeditionTier::DeepExploration,
        "Deep Exploration",
        120.0,
        8_000.0,
        2.5,
        0.25,
        0.35,
        0.45,
    ))
    .expedition_tier(def(
        ExpeditionTier::EpicJourney,
        "Epic Journey",
        240.0,
        18_000.0,
        4.0,
        0.35,
        0.50,
        0.60,
    ));
}
