//! Shared fixtures: a small but complete catalog with a real
//! production chain, and helpers for wiring up states.
//!
//! The mini catalog covers two populated biomes (forest and lake),
//! one gatherer-processor-assembler chain, all five expedition tiers
//! at live tuning, and a skill node per branch effect, so unit tests
//! exercise every code path without hauling in the full data crate.

use crate::achievement::Condition;
use crate::catalog::{
    AutomationCategory, AutomationDef, BiomeDef, Catalog, CatalogBuilder, ExpeditionTierDef,
    FoodDef, FoodFlow, PowerCellDef, ResourceCategory, ResourceCost, ResourceDef, ResourceFlow,
    SkillDef, SkillEffect,
};
use crate::id::*;
use crate::state::{Automation, GameState};

fn resource(id: &str, name: &str, category: ResourceCategory) -> ResourceDef {
    ResourceDef {
        id: ResourceId::new(id),
        name: name.to_string(),
        category,
    }
}

fn food(id: &str, name: &str, nutrition: f64, primary: bool) -> FoodDef {
    FoodDef {
        id: FoodId::new(id),
        name: name.to_string(),
        nutrition,
        primary,
    }
}

fn cost(resource: &str, amount: f64) -> ResourceCost {
    ResourceCost {
        resource: ResourceId::new(resource),
        amount,
    }
}

fn flow(resource: &str, amount_per_minute: f64) -> ResourceFlow {
    ResourceFlow {
        resource: ResourceId::new(resource),
        amount_per_minute,
    }
}

fn tier(
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

fn skill(
    id: &str,
    name: &str,
    cost: f64,
    branch: SkillBranch,
    tier: u32,
    requires: &[&str],
    effect: SkillEffect,
) -> SkillDef {
    SkillDef {
        id: SkillId::new(id),
        name: name.to_string(),
        cost,
        branch,
        tier,
        requires: requires.iter().map(|r| SkillId::new(*r)).collect(),
        effect,
    }
}

fn achievement(id: &str, name: &str, hidden: bool, condition: Condition) -> crate::catalog::AchievementDef {
    crate::catalog::AchievementDef {
        id: AchievementId::new(id),
        name: name.to_string(),
        hidden,
        condition,
    }
}

/// A builder preloaded with the mini catalog, for tests that want to
/// add a deliberately broken entry before `build()`.
pub fn mini_catalog_builder() -> CatalogBuilder {
    let mut b = CatalogBuilder::new();

    b.resource(resource("wood", "Wood", ResourceCategory::Raw))
        .resource(resource("stone", "Stone", ResourceCategory::Raw))
        .resource(resource("amber", "Amber", ResourceCategory::Raw))
        .resource(resource("resin", "Resin", ResourceCategory::Raw))
        .resource(resource("planks", "Planks", ResourceCategory::Intermediate))
        .resource(resource("panda_rover", "Panda Rover", ResourceCategory::Final));

    b.food(food("berries", "Berries", 3.0, true))
        .food(food("cactus_juice", "Cactus Juice", 8.0, false))
        .food(food("smoked_fish", "Smoked Fish", 15.0, false));

    b.automation(AutomationDef {
        id: AutomationTypeId::new("logger"),
        name: "Logger".to_string(),
        category: AutomationCategory::Gatherer,
        base_cost: vec![cost("wood", 10.0)],
        base_rate: 1.0,
        consumes: vec![],
        produces: vec![flow("wood", 6.0)],
        produces_food: vec![],
        cost_multiplier: 1.15,
        max_per_biome: None,
    })
    .automation(AutomationDef {
        id: AutomationTypeId::new("saw_mill"),
        name: "Saw Mill".to_string(),
        category: AutomationCategory::Processor,
        base_cost: vec![cost("wood", 25.0)],
        base_rate: 1.0,
        consumes: vec![flow("wood", 4.0)],
        produces: vec![flow("planks", 2.0)],
        produces_food: vec![],
        cost_multiplier: 1.25,
        max_per_biome: None,
    })
    .automation(AutomationDef {
        id: AutomationTypeId::new("berry_picker"),
        name: "Berry Picker".to_string(),
        category: AutomationCategory::FoodProducer,
        base_cost: vec![cost("wood", 15.0)],
        base_rate: 1.0,
        consumes: vec![],
        produces: vec![],
        produces_food: vec![FoodFlow {
            food: FoodId::new("berries"),
            amount_per_minute: 3.0,
        }],
        cost_multiplier: 1.15,
        max_per_biome: None,
    })
    .automation(AutomationDef {
        id: AutomationTypeId::new("plank_press"),
        name: "Plank Press".to_string(),
        category: AutomationCategory::FinalAssembler,
        base_cost: vec![cost("planks", 50.0)],
        base_rate: 1.0,
        consumes: vec![flow("planks", 1.0)],
        produces: vec![flow("panda_rover", 0.1)],
        produces_food: vec![],
        cost_multiplier: 1.35,
        max_per_biome: Some(1),
    });

    b.biome(BiomeDef {
        id: BiomeId::LushForest,
        name: "Lush Forest".to_string(),
        primary_resources: vec![ResourceId::new("wood")],
        primary_foods: vec![FoodId::new("berries")],
        discoverable_resources: vec![ResourceId::new("amber"), ResourceId::new("resin")],
        automations: vec![
            AutomationTypeId::new("logger"),
            AutomationTypeId::new("saw_mill"),
            AutomationTypeId::new("berry_picker"),
            AutomationTypeId::new("plank_press"),
        ],
    })
    .biome(BiomeDef {
        id: BiomeId::MistyLake,
        name: "Misty Lake".to_string(),
        primary_resources: vec![ResourceId::new("stone")],
        primary_foods: vec![],
        discoverable_resources: vec![],
        automations: vec![
            AutomationTypeId::new("logger"),
            AutomationTypeId::new("saw_mill"),
        ],
    });
    // The remaining biomes exist but carry no content; the builder
    // requires all six.
    for (id, name) in [
        (BiomeId::AridDesert, "Arid Desert"),
        (BiomeId::FrozenTundra, "Frozen Tundra"),
        (BiomeId::VolcanicIsle, "Volcanic Isle"),
        (BiomeId::CrystalCaverns, "Crystal Caverns"),
    ] {
        b.biome(BiomeDef {
            id,
            name: name.to_string(),
            primary_resources: vec![],
            primary_foods: vec![],
            discoverable_resources: vec![],
            automations: vec![],
        });
    }

    b.expedition_tier(tier(
        ExpeditionTier::QuickDash,
        "Quick Dash",
        10.0,
        500.0,
        0.5,
        0.05,
        0.03,
        0.10,
    ))
    .expedition_tier(tier(
        ExpeditionTier::QuickScout,
        "Quick Scout",
        30.0,
        1_500.0,
        1.0,
        0.10,
        0.10,
        0.20,
    ))
    .expedition_tier(tier(
        ExpeditionTier::StandardExpedition,
        "Standard Expedition",
        60.0,
        3_500.0,
        1.5,
        0.15,
        0.20,
        0.30,
    ))
    .expedition_tier(tier(
        ExpeditionTier::DeepExploration,
        "Deep Exploration",
        120.0,
        8_000.0,
        2.5,
        0.25,
        0.35,
        0.45,
    ))
    .expedition_tier(tier(
        ExpeditionTier::EpicJourney,
        "Epic Journey",
        240.0,
        18_000.0,
        4.0,
        0.35,
        0.50,
        0.60,
    ));

    b.power_cell(PowerCellDef {
        tier: PowerCellTier::Green,
        name: "Green Cell".to_string(),
        bonus: 0.50,
        drop_weight: 70.0,
    })
    .power_cell(PowerCellDef {
        tier: PowerCellTier::Blue,
        name: "Blue Cell".to_string(),
        bonus: 1.0,
        drop_weight: 25.0,
    })
    .power_cell(PowerCellDef {
        tier: PowerCellTier::Orange,
        name: "Orange Cell".to_string(),
        bonus: 2.0,
        drop_weight: 5.0,
    });

    use SkillBranch::*;
    use SkillEffect::*;
    b.skill(skill("prod_1", "Swift Paws", 1.0, Production, 1, &[], ProductionSpeed(0.05)))
        .skill(skill("prod_2", "Swifter Paws", 2.0, Production, 2, &["prod_1"], ProductionSpeed(0.10)))
        .skill(skill("prod_3", "Blur of Fur", 3.0, Production, 3, &["prod_2"], ProductionSpeed(0.15)))
        .skill(skill("prod_4", "Panda Overdrive", 5.0, Production, 4, &["prod_3"], ProductionSpeed(0.20)))
        .skill(skill("econ_1", "Thrifty", 2.0, Economy, 1, &[], AllCostReduction(0.05)))
        .skill(skill("econ_2", "Bulk Buyer", 3.0, Economy, 2, &["econ_1"], BuildCostReduction(0.10)))
        .skill(skill("econ_3", "Tune-Up", 3.0, Economy, 2, &["econ_1"], UpgradeCostReduction(0.10)))
        .skill(skill("exp_1", "Light Packer", 2.0, Expedition, 1, &[], ExpeditionTimeReduction(0.15)))
        .skill(skill("exp_2", "Forager", 3.0, Expedition, 2, &["exp_1"], ExpeditionFoodReduction(0.20)))
        .skill(skill("exp_3", "Keen Eye", 4.0, Expedition, 3, &["exp_2"], ExpeditionResourceBonus(0.25)))
        .skill(skill("exp_4", "Trailblazer", 6.0, Expedition, 4, &["exp_3"], InstantFirstBiome))
        .skill(skill("cell_1", "Conductive Fur", 2.0, PowerCells, 1, &[], PowerCellEffectiveness(0.10)))
        .skill(skill("cell_2", "Resonant Core", 3.0, PowerCells, 2, &["cell_1"], PowerCellResonance(0.03)))
        .skill(skill("cell_3", "Cell Magnet", 4.0, PowerCells, 3, &["cell_2"], PowerCellDropBonus(0.25)));

    b.achievement(achievement(
        "first_gather",
        "First Pawful",
        false,
        Condition::LifetimeGathered { amount: 1.0 },
    ))
    .achievement(achievement(
        "busy_builder",
        "Busy Builder",
        false,
        Condition::AutomationsBuilt { count: 5 },
    ))
    .achievement(achievement(
        "first_steps_out",
        "First Steps Out",
        false,
        Condition::ExpeditionsCompleted { count: 1 },
    ))
    .achievement(achievement(
        "twin_lands",
        "Twin Lands",
        false,
        Condition::BiomesDiscovered { count: 2 },
    ))
    .achievement(achievement(
        "wood_hoarder",
        "Wood Hoarder",
        true,
        Condition::SingleResourceStock { amount: 10_000.0 },
    ))
    .achievement(achievement(
        "grand_master",
        "Grand Master",
        true,
        Condition::AllOtherAchievements,
    ));

    b
}

/// The frozen mini catalog.
pub fn mini_catalog() -> Catalog {
    mini_catalog_builder()
        .build()
        .expect("mini catalog is internally consistent")
}

/// Insert an automation directly, allocating its id from the state's
/// counter the way a build action would.
pub fn add_automation(
    state: &mut GameState,
    biome: BiomeId,
    type_id: &str,
    level: u32,
) -> AutomationId {
    let id = AutomationId(state.next_automation_id);
    state.next_automation_id += 1;
    state.biome_mut(biome).automations.insert(
        id,
        Automation {
            type_id: AutomationTypeId::new(type_id),
            level,
            power_cell: None,
            paused: false,
        },
    );
    id
}
