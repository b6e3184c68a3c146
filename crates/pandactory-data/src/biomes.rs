//! The six biomes in progression order, each with its starting
//! resources, expedition discoveries, and buildable automations.

use pandactory_core::catalog::{BiomeDef, CatalogBuilder};
use pandactory_core::id::{AutomationTypeId, BiomeId, FoodId, ResourceId};

fn def(
    id: BiomeId,
    name: &str,
    primary: &[&str],
    primary_foods: &[&str],
    discoverable: &[&str],
    automations: &[&str],
) -> BiomeDef {
    BiomeDef {
        id,
        name: name.to_string(),
        primary_resources: primary.iter().map(|r| ResourceId::new(*r)).collect(),
        primary_foods: primary_foods.iter().map(|f| FoodId::new(*f)).collect(),
        discoverable_resources: discoverable.iter().map(|r| ResourceId::new(*r)).collect(),
        automations: automations
            .iter()
            .map(|a| AutomationTypeId::new(*a))
            .collect(),
    }
}

pub(crate) fn register(b: &mut CatalogBuilder) {
    b.biome(def(
        BiomeId::LushForest,
        "Lush Forest",
        &["wood", "stone"],
        &["berries"],
        &["rubber_sap", "nitrogen_nodules"],
        &[
            "logger",
            "quarry",
            "berry_picker",
            "nitrogen_collector",
            "rubber_tapper",
            "saw_mill",
            "stone_cutter",
            "rubber_processor",
            "charcoal_kiln",
            "graphitizer",
        ],
    ))
    .biome(def(
        BiomeId::MistyLake,
        "Misty Lake",
        &["fresh_water", "fish"],
        &[],
        &["clay"],
        &[
            "water_collector",
            "water_purifier",
            "fish_trap",
            "clay_digger",
            "kiln",
            "smokehouse",
            "electrolyzer",
            "aluminum_smelter",
        ],
    ))
    .biome(def(
        BiomeId::AridDesert,
        "Arid Desert",
        &["quartz_sand", "cactus"],
        &[],
        &["crude_oil", "sulfur"],
        &[
            "sand_collector",
            "oil_pump",
            "cactus_farm",
            "glass_furnace",
            "distillation_unit",
            "cactus_press",
            "chemical_plant",
            "fuel_depot",
            "silicon_processor",
            "hydrazine_plant",
        ],
    ))
    .biome(def(
        BiomeId::FrozenTundra,
        "Frozen Tundra",
        &["ice", "iron_ore"],
        &[],
        &["rutile_ore", "arctic_moss"],
        &[
            "ice_harvester",
            "rutile_miner",
            "iron_miner",
            "moss_collector",
            "smelter",
            "greenhouse",
            "frame_mill",
            "lox_plant",
            "hull_assembly",
            "insulation_plant",
        ],
    ))
    .biome(def(
        BiomeId::VolcanicIsle,
        "Volcanic Isle",
        &["obsidian", "geothermal_energy"],
        &[],
        &["nickel_cobalt_ore", "sulfur"],
        &[
            "nickel_cobalt_miner",
            "obsidian_collector",
            "geothermal_tap",
            "sulfur_collector",
            "refinery",
            "obsidian_forge",
            "vulcanizer",
            "thruster_plant",
        ],
    ))
    .biome(def(
        BiomeId::CrystalCaverns,
        "Crystal Caverns",
        &["lithium_crystals", "copper_ore"],
        &[],
        &["phosphorus", "quartz_crystals"],
        &[
            "lithium_miner",
            "copper_miner",
            "phosphorus_collector",
            "quartz_miner",
            "wire_mill",
            "precision_cutter",
            "doping_plant",
            "lithography_lab",
            "battery_factory",
            "battery_assembly",
            "pv_plant",
            "solar_array_assembly",
            "tank_filling_station",
        ],
    ));
}
