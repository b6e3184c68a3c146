//! All 49 automation types.
//!
//! Cost multiplier tuning: gatherers and food producers 1.15, basic
//! processors 1.25, advanced processors and final assemblers 1.35,
//! with a couple of deliberate outliers (insulation plant 1.2,
//! hydrazine plant 1.3). Every automation is capped at one instance
//! per biome.

use pandactory_core::catalog::{
    AutomationCategory, AutomationDef, CatalogBuilder, FoodFlow, ResourceCost, ResourceFlow,
};
use pandactory_core::id::{AutomationTypeId, FoodId, ResourceId};

fn costs(list: &[(&str, f64)]) -> Vec<ResourceCost> {
    list.iter()
        .map(|(r, amount)| ResourceCost {
            resource: ResourceId::new(*r),
            amount: *amount,
        })
        .collect()
}

fn flows(list: &[(&str, f64)]) -> Vec<ResourceFlow> {
    list.iter()
        .map(|(r, amount)| ResourceFlow {
            resource: ResourceId::new(*r),
            amount_per_minute: *amount,
        })
        .collect()
}

fn def(
    id: &str,
    name: &str,
    category: AutomationCategory,
    base_cost: &[(&str, f64)],
    consumes: &[(&str, f64)],
    produces: &[(&str, f64)],
    cost_multiplier: f64,
) -> AutomationDef {
    AutomationDef {
        id: AutomationTypeId::new(id),
        name: name.to_string(),
        category,
        base_cost: costs(base_cost),
        base_rate: 1.0,
        consumes: flows(consumes),
        produces: flows(produces),
        produces_food: vec![],
        cost_multiplier,
        max_per_biome: Some(1),
    }
}

fn food_producer(
    id: &str,
    name: &str,
    base_cost: &[(&str, f64)],
    consumes: &[(&str, f64)],
    food: &str,
    food_per_minute: f64,
) -> AutomationDef {
    AutomationDef {
        produces_food: vec![FoodFlow {
            food: FoodId::new(food),
            amount_per_minute: food_per_minute,
        }],
        ..def(
            id,
            name,
            AutomationCategory::FoodProducer,
            base_cost,
            consumes,
            &[],
            1.15,
        )
    }
}

pub(crate) fn register(b: &mut CatalogBuilder) {
    use AutomationCategory::*;

    // Lush Forest.
    b.automation(def(
        "logger",
        "Logger",
        Gatherer,
        &[("wood", 5.0), ("stone", 3.0)],
        &[],
        &[("wood", 6.0)],
        1.15,
    ))
    .automation(def(
        "quarry",
        "Quarry",
        Gatherer,
        &[("wood", 5.0), ("stone", 3.0)],
        &[],
        &[("stone", 6.0)],
        1.15,
    ))
    .automation(food_producer(
        "berry_picker",
        "Berry Picker",
        &[("wood", 3.0)],
        &[],
        "berries",
        6.0,
    ))
    .automation(def(
        "nitrogen_collector",
        "Nitrogen Collector",
        Gatherer,
        &[("wood", 8.0), ("stone", 5.0)],
        &[],
        &[("nitrogen_nodules", 3.0)],
        1.15,
    ))
    .automation(def(
        "rubber_tapper",
        "Rubber Tapper",
        Gatherer,
        &[("wood", 10.0), ("stone", 5.0)],
        &[],
        &[("rubber_sap", 3.0)],
        1.15,
    ))
    .automation(def(
        "saw_mill",
        "Sawmill",
        Processor,
        &[("wood", 15.0), ("stone", 10.0)],
        &[("wood", 4.0)],
        &[("planks", 2.0)],
        1.25,
    ))
    .automation(def(
        "stone_cutter",
        "Stone Cutter",
        Processor,
        &[("stone", 15.0), ("wood", 10.0)],
        &[("stone", 4.0)],
        &[("stone_bricks", 2.0)],
        1.25,
    ))
    .automation(def(
        "rubber_processor",
        "Rubber Processor",
        Processor,
        &[("wood", 20.0), ("stone", 15.0)],
        &[("rubber_sap", 3.0)],
        &[("rubber", 2.0)],
        1.25,
    ))
    .automation(def(
        "charcoal_kiln",
        "Charcoal Kiln",
        Processor,
        &[("wood", 25.0), ("stone_bricks", 10.0)],
        &[("wood", 5.0)],
        &[("charcoal", 3.0)],
        1.25,
    ));

    // Misty Lake.
    b.automation(def(
        "water_collector",
        "Water Collector",
        Gatherer,
        &[("wood", 10.0), ("stone", 8.0)],
        &[],
        &[("fresh_water", 4.0)],
        1.15,
    ))
    .automation(def(
        "water_purifier",
        "Water Purifier",
        Processor,
        &[("stone_bricks", 20.0), ("planks", 15.0)],
        &[("fresh_water", 3.0)],
        &[("clean_water", 2.0)],
        1.25,
    ))
    .automation(def(
        "fish_trap",
        "Fish Trap",
        Gatherer,
        &[("wood", 10.0), ("rubber", 5.0)],
        &[],
        &[("fish", 3.0)],
        1.15,
    ))
    .automation(def(
        "clay_digger",
        "Clay Digger",
        Gatherer,
        &[("wood", 8.0), ("stone", 6.0)],
        &[],
        &[("clay", 3.0)],
        1.15,
    ))
    .automation(def(
        "kiln",
        "Kiln",
        Processor,
        &[("stone_bricks", 30.0), ("clay", 20.0)],
        &[("clay", 4.0), ("charcoal", 2.0)],
        &[("ceramics", 3.0)],
        1.35,
    ))
    .automation(food_producer(
        "smokehouse",
        "Smokehouse",
        &[("planks", 25.0), ("stone_bricks", 20.0)],
        &[("fish", 3.0), ("charcoal", 2.0)],
        "smoked_fish",
        3.0,
    ));

    // Arid Desert.
    b.automation(def(
        "sand_collector",
        "Sand Collector",
        Gatherer,
        &[("planks", 15.0), ("rubber", 10.0)],
        &[],
        &[("quartz_sand", 4.0)],
        1.15,
    ))
    .automation(def(
        "oil_pump",
        "Oil Pump",
        Gatherer,
        &[("stone_bricks", 30.0), ("ceramics", 15.0)],
        &[],
        &[("crude_oil", 3.0)],
        1.15,
    ))
    .automation(def(
        "cactus_farm",
        "Cactus Farm",
        Gatherer,
        &[("wood", 20.0), ("clean_water", 10.0)],
        &[],
        &[("cactus", 3.0)],
        1.15,
    ))
    .automation(def(
        "glass_furnace",
        "Glass Furnace",
        Processor,
        &[("stone_bricks", 40.0), ("ceramics", 25.0)],
        &[("quartz_sand", 5.0), ("charcoal", 3.0)],
        &[("glass", 3.0)],
        1.35,
    ))
    .automation(def(
        "distillation_unit",
        "Distillation Unit",
        Processor,
        &[("ceramics", 30.0), ("glass", 20.0)],
        &[("crude_oil", 4.0)],
        &[("kerosene", 2.0)],
        1.35,
    ))
    .automation(food_producer(
        "cactus_press",
        "Cactus Press",
        &[("planks", 20.0), ("rubber", 15.0)],
        &[("cactus", 3.0)],
        "cactus_juice",
        3.0,
    ));

    // Frozen Tundra.
    b.automation(def(
        "ice_harvester",
        "Ice Harvester",
        Gatherer,
        &[("planks", 25.0), ("rubber", 15.0)],
        &[],
        &[("ice", 5.0)],
        1.15,
    ))
    .automation(def(
        "rutile_miner",
        "Rutile Miner",
        Gatherer,
        &[("stone_bricks", 40.0), ("glass", 20.0)],
        &[],
        &[("rutile_ore", 3.0)],
        1.15,
    ))
    .automation(def(
        "iron_miner",
        "Iron Miner",
        Gatherer,
        &[("stone_bricks", 35.0), ("planks", 25.0)],
        &[],
        &[("iron_ore", 4.0)],
        1.15,
    ))
    .automation(def(
        "moss_collector",
        "Moss Collector",
        Gatherer,
        &[("wood", 15.0), ("glass", 10.0)],
        &[],
        &[("arctic_moss", 4.0)],
        1.15,
    ))
    .automation(def(
        "smelter",
        "Smelter",
        Processor,
        &[("stone_bricks", 50.0), ("ceramics", 30.0)],
        &[("iron_ore", 4.0), ("charcoal", 3.0)],
        &[("iron_ingots", 2.0)],
        1.35,
    ))
    .automation(food_producer(
        "greenhouse",
        "Greenhouse",
        &[("glass", 30.0), ("planks", 25.0)],
        &[("arctic_moss", 2.0), ("clean_water", 2.0)],
        "greenhouse_veggies",
        3.6,
    ));

    // Volcanic Isle.
    b.automation(def(
        "nickel_cobalt_miner",
        "Nickel-Cobalt Miner",
        Gatherer,
        &[("stone_bricks", 60.0), ("iron_ingots", 20.0)],
        &[],
        &[("nickel_cobalt_ore", 3.0)],
        1.15,
    ))
    .automation(def(
        "obsidian_collector",
        "Obsidian Collector",
        Gatherer,
        &[("ceramics", 40.0), ("glass", 25.0)],
        &[],
        &[("obsidian", 4.0)],
        1.15,
    ))
    .automation(def(
        "geothermal_tap",
        "Geothermal Tap",
        Gatherer,
        &[("iron_ingots", 30.0), ("ceramics", 40.0)],
        &[],
        &[("geothermal_energy", 6.0)],
        1.15,
    ))
    .automation(def(
        "sulfur_collector",
        "Sulfur Collector",
        Gatherer,
        &[("ceramics", 30.0), ("iron_ingots", 20.0)],
        &[],
        &[("sulfur", 4.0)],
        1.15,
    ))
    .automation(def(
        "refinery",
        "Refinery",
        Processor,
        &[("iron_ingots", 40.0), ("glass", 30.0)],
        &[("nickel_cobalt_ore", 3.0), ("geothermal_energy", 2.0)],
        &[("refined_alloy", 2.0)],
        1.35,
    ))
    .automation(def(
        "obsidian_forge",
        "Obsidian Forge",
        Processor,
        &[("obsidian", 30.0), ("iron_ingots", 25.0)],
        &[("obsidian", 5.0), ("geothermal_energy", 3.0)],
        &[("obsidian_tools", 2.0)],
        1.35,
    ));

    // Crystal Caverns.
    b.automation(def(
        "lithium_miner",
        "Lithium Miner",
        Gatherer,
        &[("refined_alloy", 20.0), ("obsidian_tools", 10.0)],
        &[],
        &[("lithium_crystals", 3.0)],
        1.15,
    ))
    .automation(def(
        "copper_miner",
        "Copper Miner",
        Gatherer,
        &[("iron_ingots", 35.0), ("glass", 20.0)],
        &[],
        &[("copper_ore", 4.0)],
        1.15,
    ))
    .automation(def(
        "phosphorus_collector",
        "Phosphorus Collector",
        Gatherer,
        &[("glass", 30.0), ("ceramics", 25.0)],
        &[],
        &[("phosphorus", 3.0)],
        1.15,
    ))
    .automation(def(
        "quartz_miner",
        "Quartz Miner",
        Gatherer,
        &[("obsidian_tools", 15.0), ("refined_alloy", 15.0)],
        &[],
        &[("quartz_crystals", 3.0)],
        1.15,
    ));

    // Advanced processors shared between biomes.
    b.automation(def(
        "electrolyzer",
        "Electrolyzer",
        Processor,
        &[("iron_ingots", 30.0), ("glass", 25.0), ("rubber", 20.0)],
        &[("clean_water", 4.0), ("geothermal_energy", 2.0)],
        &[("hydrogen", 2.0), ("oxygen", 1.0)],
        1.35,
    ))
    .automation(def(
        "vulcanizer",
        "Vulcanizer",
        Processor,
        &[("ceramics", 35.0), ("iron_ingots", 25.0)],
        &[("rubber", 3.0), ("sulfur", 2.0), ("charcoal", 2.0)],
        &[("vulcanized_rubber", 2.0)],
        1.35,
    ))
    .automation(def(
        "wire_mill",
        "Wire Mill",
        Processor,
        &[("iron_ingots", 30.0), ("stone_bricks", 25.0)],
        &[("copper_ore", 3.0)],
        &[("copper_wire", 2.0)],
        1.25,
    ))
    .automation(def(
        "frame_mill",
        "Frame Mill",
        Processor,
        &[("iron_ingots", 40.0), ("glass", 30.0)],
        &[("aluminum_ingots", 3.0)],
        &[("aluminum_frame", 2.0)],
        1.25,
    ))
    .automation(def(
        "chemical_plant",
        "Chemical Plant",
        Processor,
        &[("ceramics", 40.0), ("iron_ingots", 35.0), ("glass", 25.0)],
        &[("nitrogen_nodules", 3.0), ("hydrogen", 3.0)],
        &[("ammonia", 2.0)],
        1.35,
    ))
    .automation(def(
        "graphitizer",
        "Graphitizer",
        Processor,
        &[("ceramics", 50.0), ("iron_ingots", 40.0)],
        &[("charcoal", 5.0), ("geothermal_energy", 3.0)],
        &[("graphite", 2.0)],
        1.35,
    ))
    .automation(def(
        "precision_cutter",
        "Precision Cutter",
        Processor,
        &[("obsidian_tools", 20.0), ("glass", 40.0)],
        &[("quartz_crystals", 3.0), ("obsidian_tools", 1.0)],
        &[("precision_quartz", 2.0)],
        1.35,
    ))
    .automation(def(
        "doping_plant",
        "Doping Plant",
        Processor,
        &[("glass", 50.0), ("refined_alloy", 30.0)],
        &[("silicon_ingot", 2.0), ("phosphorus", 1.0)],
        &[("doped_silicon", 2.0)],
        1.35,
    ))
    .automation(def(
        "lox_plant",
        "LOX Plant",
        Processor,
        &[("iron_ingots", 50.0), ("glass", 40.0), ("rubber", 30.0)],
        &[("oxygen", 4.0), ("ice", 3.0)],
        &[("liquid_oxygen", 2.0)],
        1.35,
    ))
    .automation(def(
        "lithography_lab",
        "Lithography Lab",
        Processor,
        &[
            ("precision_quartz", 20.0),
            ("refined_alloy", 40.0),
            ("glass", 50.0),
        ],
        &[
            ("doped_silicon", 2.0),
            ("precision_quartz", 1.0),
            ("copper_wire", 2.0),
        ],
        &[("microchips", 1.0)],
        1.35,
    ))
    .automation(def(
        "battery_factory",
        "Battery Factory",
        Processor,
        &[("refined_alloy", 35.0), ("glass", 30.0)],
        &[
            ("lithium_crystals", 2.0),
            ("graphite", 2.0),
            ("copper_wire", 2.0),
        ],
        &[("battery_cells", 2.0)],
        1.35,
    ))
    .automation(def(
        "pv_plant",
        "PV Plant",
        Processor,
        &[("glass", 50.0), ("refined_alloy", 40.0)],
        &[("doped_silicon", 2.0), ("copper_wire", 2.0), ("glass", 3.0)],
        &[("solar_cells", 2.0)],
        1.35,
    ));

    // These run faster than the 1.0 baseline.
    b.automation(AutomationDef {
        base_rate: 2.0,
        ..def(
            "silicon_processor",
            "Silicon Processor",
            Processor,
            &[
                ("stone_bricks", 40.0),
                ("iron_ingots", 25.0),
                ("copper_wire", 15.0),
            ],
            &[("quartz_sand", 4.0)],
            &[("silicon_ingot", 1.0)],
            1.25,
        )
    })
    .automation(AutomationDef {
        base_rate: 2.0,
        ..def(
            "aluminum_smelter",
            "Aluminum Smelter",
            Processor,
            &[
                ("stone_bricks", 50.0),
                ("iron_ingots", 30.0),
                ("graphite", 20.0),
            ],
            &[("clay", 5.0)],
            &[("aluminum_ingots", 1.0)],
            1.25,
        )
    })
    .automation(AutomationDef {
        base_rate: 3.0,
        ..def(
            "insulation_plant",
            "Insulation Plant",
            Processor,
            &[
                ("planks", 30.0),
                ("stone_bricks", 25.0),
                ("iron_ingots", 15.0),
            ],
            &[("vulcanized_rubber", 2.0), ("arctic_moss", 3.0)],
            &[("insulation", 1.0)],
            1.2,
        )
    })
    .automation(def(
        "hydrazine_plant",
        "Hydrazine Plant",
        Processor,
        &[
            ("stone_bricks", 60.0),
            ("iron_ingots", 40.0),
            ("glass", 30.0),
        ],
        &[("ammonia", 3.0), ("hydrogen", 2.0)],
        &[("hydrazine", 1.0)],
        1.3,
    ));

    // Final assemblers for the spaceship parts.
    b.automation(def(
        "fuel_depot",
        "Fuel Depot",
        FinalAssembler,
        &[
            ("iron_ingots", 60.0),
            ("ceramics", 50.0),
            ("vulcanized_rubber", 30.0),
        ],
        &[("kerosene", 3.0), ("liquid_oxygen", 2.0)],
        &[("rocket_fuel", 1.0)],
        1.35,
    ))
    .automation(def(
        "thruster_plant",
        "Thruster Plant",
        FinalAssembler,
        &[
            ("refined_alloy", 50.0),
            ("ceramics", 40.0),
            ("obsidian_tools", 20.0),
        ],
        &[
            ("refined_alloy", 4.0),
            ("iron_ingots", 3.0),
            ("vulcanized_rubber", 2.0),
        ],
        &[("thrusters", 1.0)],
        1.35,
    ))
    .automation(def(
        "tank_filling_station",
        "Tank Filling Station",
        FinalAssembler,
        &[
            ("iron_ingots", 50.0),
            ("glass", 40.0),
            ("vulcanized_rubber", 25.0),
        ],
        &[
            ("liquid_oxygen", 3.0),
            ("iron_ingots", 2.0),
            ("vulcanized_rubber", 1.0),
        ],
        &[("oxygen_tanks", 1.0)],
        1.35,
    ))
    .automation(def(
        "hull_assembly",
        "Hull Assembly",
        FinalAssembler,
        &[("refined_alloy", 60.0), ("obsidian_tools", 30.0)],
        &[
            ("refined_alloy", 5.0),
            ("vulcanized_rubber", 3.0),
            ("iron_ingots", 3.0),
        ],
        &[("titanium_hull", 1.0)],
        1.35,
    ))
    .automation(def(
        "solar_array_assembly",
        "Solar Array Assembly",
        FinalAssembler,
        &[
            ("aluminum_frame", 30.0),
            ("glass", 50.0),
            ("copper_wire", 40.0),
        ],
        &[
            ("solar_cells", 4.0),
            ("aluminum_frame", 2.0),
            ("copper_wire", 3.0),
        ],
        &[("solar_arrays", 1.0)],
        1.35,
    ))
    .automation(def(
        "battery_assembly",
        "Battery Assembly",
        FinalAssembler,
        &[
            ("refined_alloy", 50.0),
            ("copper_wire", 30.0),
            ("insulation", 20.0),
        ],
        &[("battery_cells", 4.0), ("copper_wire", 2.0)],
        &[("batteries", 1.0)],
        1.35,
    ));
}
