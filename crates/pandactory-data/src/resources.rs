//! Every resource in the game: 22 raw materials spread across the six
//! biomes, 27 intermediates in four rough tiers, and the 7 spaceship
//! parts.

use pandactory_core::catalog::{CatalogBuilder, ResourceCategory, ResourceDef};
use pandactory_core::id::ResourceId;

fn def(id: &str, name: &str, category: ResourceCategory) -> ResourceDef {
    ResourceDef {
        id: ResourceId::new(id),
        name: name.to_string(),
        category,
    }
}

pub(crate) fn register(b: &mut CatalogBuilder) {
    use ResourceCategory::*;

    // Raw materials, biome by biome.
    b.resource(def("wood", "Wood", Raw))
        .resource(def("stone", "Stone", Raw))
        .resource(def("rubber_sap", "Rubber Sap", Raw))
        .resource(def("nitrogen_nodules", "Nitrogen Nodules", Raw))
        .resource(def("fresh_water", "Fresh Water", Raw))
        .resource(def("fish", "Fish", Raw))
        .resource(def("clay", "Clay", Raw))
        .resource(def("quartz_sand", "Quartz Sand", Raw))
        .resource(def("crude_oil", "Crude Oil", Raw))
        .resource(def("cactus", "Cactus", Raw))
        .resource(def("sulfur", "Sulfur", Raw))
        .resource(def("ice", "Ice", Raw))
        .resource(def("rutile_ore", "Rutile Ore", Raw))
        .resource(def("iron_ore", "Iron Ore", Raw))
        .resource(def("arctic_moss", "Arctic Moss", Raw))
        .resource(def("nickel_cobalt_ore", "Nickel-Cobalt Ore", Raw))
        .resource(def("obsidian", "Obsidian", Raw))
        .resource(def("geothermal_energy", "Geothermal Energy", Raw))
        .resource(def("lithium_crystals", "Lithium Crystals", Raw))
        .resource(def("copper_ore", "Copper Ore", Raw))
        .resource(def("phosphorus", "Phosphorus", Raw))
        .resource(def("quartz_crystals", "Quartz Crystals", Raw));

    // Tier 1 intermediates.
    b.resource(def("planks", "Planks", Intermediate))
        .resource(def("stone_bricks", "Stone Bricks", Intermediate))
        .resource(def("charcoal", "Charcoal", Intermediate))
        .resource(def("clean_water", "Clean Water", Intermediate))
        .resource(def("rubber", "Rubber", Intermediate))
        .resource(def("ceramics", "Ceramics", Intermediate));

    // Tier 2 intermediates.
    b.resource(def("glass", "Glass", Intermediate))
        .resource(def("iron_ingots", "Iron Ingots", Intermediate))
        .resource(def("aluminum_ingots", "Aluminum Ingots", Intermediate))
        .resource(def("obsidian_tools", "Obsidian Tools", Intermediate))
        .resource(def("vulcanized_rubber", "Vulcanized Rubber", Intermediate))
        .resource(def("copper_wire", "Copper Wire", Intermediate))
        .resource(def("refined_alloy", "Refined Alloy", Intermediate))
        .resource(def("hydrogen", "Hydrogen", Intermediate))
        .resource(def("oxygen", "Oxygen", Intermediate))
        .resource(def("kerosene", "Kerosene", Intermediate))
        .resource(def("ammonia", "Ammonia", Intermediate))
        .resource(def("silicon_ingot", "Silicon Ingot", Intermediate))
        .resource(def("precision_quartz", "Precision Quartz", Intermediate))
        .resource(def("aluminum_frame", "Aluminum Frame", Intermediate));

    // Tier 3 intermediates.
    b.resource(def("liquid_oxygen", "Liquid Oxygen", Intermediate))
        .resource(def("doped_silicon", "Doped Silicon", Intermediate))
        .resource(def("graphite", "Graphite", Intermediate))
        .resource(def("hydrazine", "Hydrazine", Intermediate))
        .resource(def("insulation", "Insulation", Intermediate));

    // Tier 4 intermediates.
    b.resource(def("battery_cells", "Battery Cells", Intermediate))
        .resource(def("solar_cells", "Solar Cells", Intermediate));

    // The spaceship parts.
    b.resource(def("microchips", "Microchips", Final))
        .resource(def("rocket_fuel", "Rocket Fuel", Final))
        .resource(def("thrusters", "Thrusters", Final))
        .resource(def("oxygen_tanks", "Oxygen Tanks", Final))
        .resource(def("batteries", "Batteries", Final))
        .resource(def("solar_arrays", "Solar Arrays", Final))
        .resource(def("titanium_hull", "Titanium Hull", Final));
}
