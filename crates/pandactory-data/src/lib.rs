//! The shipping game content: every resource, food, automation, biome,
//! expedition tier, power cell, skill, and achievement, assembled into
//! a frozen [`Catalog`].
//!
//! The content lives in code rather than data files so the compiler
//! checks ids at the call sites and the catalog builder checks the
//! cross-references at startup. Tuning notes worth knowing:
//!
//! - Gatherers and food producers upgrade at 1.15x, basic processors
//!   at 1.25x, advanced processors and final assemblers at 1.35x.
//! - Every automation is limited to one instance per biome; the 59
//!   build slots across the six biomes are the whole factory.
//! - The seven spaceship parts are the Final resources; stockpiling
//!   100 of each is the win condition tracked by the milestone
//!   achievements.

use pandactory_core::catalog::{Catalog, CatalogBuilder, CatalogError};

mod achievements;
mod automations;
mod biomes;
mod expeditions;
mod foods;
mod power_cells;
mod resources;
mod skills;

/// Build the full game catalog.
///
/// Fails only if the content itself is inconsistent, which the tests
/// in this crate guard against.
pub fn standard_catalog() -> Result<Catalog, CatalogError> {
    let mut b = CatalogBuilder::new();
    resources::register(&mut b);
    foods::register(&mut b);
    automations::register(&mut b);
    biomes::register(&mut b);
    expeditions::register(&mut b);
    power_cells::register(&mut b);
    skills::register(&mut b);
    achievements::register(&mut b);
    b.build()
}
