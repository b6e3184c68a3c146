//! All 67 achievements as data; the interpreter lives in the core
//! crate. Crash and shard achievements stay hidden so prestige is a
//! surprise the first time around.

use pandactory_core::achievement::Condition;
use pandactory_core::catalog::{AchievementDef, CatalogBuilder};
use pandactory_core::id::{
    AchievementId, BiomeId, ExpeditionTier, FoodId, PowerCellTier, SkillBranch,
};

fn def(id: &str, name: &str, condition: Condition) -> AchievementDef {
    AchievementDef {
        id: AchievementId::new(id),
        name: name.to_string(),
        hidden: false,
        condition,
    }
}

fn hidden(id: &str, name: &str, condition: Condition) -> AchievementDef {
    AchievementDef {
        hidden: true,
        ..def(id, name, condition)
    }
}

fn charted(id: &str, name: &str, biome: BiomeId, food: Option<&str>) -> AchievementDef {
    def(
        id,
        name,
        Condition::BiomeFullyCharted {
            biome,
            food: food.map(FoodId::new),
        },
    )
}

pub(crate) fn register(b: &mut CatalogBuilder) {
    use Condition::*;

    // Gathering.
    b.achievement(def("first_gather", "First Steps", LifetimeGathered { amount: 1.0 }))
        .achievement(def("gather_1k", "Getting Started", LifetimeGathered { amount: 10_000.0 }))
        .achievement(def("gather_100k", "Resource Collector", LifetimeGathered { amount: 1_000_000.0 }))
        .achievement(def("gather_1m", "Hoarder", LifetimeGathered { amount: 10_000_000.0 }))
        .achievement(def("gather_10m", "Resource Tycoon", LifetimeGathered { amount: 100_000_000.0 }))
        .achievement(def("gather_100m", "Infinity Collector", LifetimeGathered { amount: 1_000_000_000.0 }))
        .achievement(def("material_master", "Material Master", AllRawResourcesDiscovered))
        .achievement(def("culinary_explorer", "Culinary Explorer", FoodsDiscovered { count: 4 }))
        .achievement(def("full_catalog", "Full Catalog", ResourcesDiscovered { count: 50 }))
        .achievement(def("self_sufficient", "Self-Sufficient", StockOfEverything { amount: 1_000.0 }));

    // Automation.
    b.achievement(def("first_automation", "Automation Begins", AutomationsBuilt { count: 1 }))
        .achievement(def("automation_5", "Factory Floor", AutomationsBuilt { count: 5 }))
        .achievement(def("automation_10", "Industrial Revolution", AutomationsBuilt { count: 10 }))
        .achievement(def("automation_25", "Mass Production", AutomationsBuilt { count: 25 }))
        .achievement(def("automation_50", "Automation Empire", AutomationsBuilt { count: 50 }))
        .achievement(def("all_automations", "Factory Planet", AutomationsBuilt { count: 59 }))
        .achievement(def("first_production", "First Production", AutomationsBuilt { count: 1 }))
        .achievement(def("first_upgrade", "Upgraded", UpgradesPurchased { count: 1 }))
        .achievement(def("single_upgrade_50", "Optimizer", MaxAutomationLevel { level: 50 }))
        .achievement(def("single_upgrade_100", "Efficiency Expert", MaxAutomationLevel { level: 100 }))
        .achievement(def("single_upgrade_200", "Upgrade Master", MaxAutomationLevel { level: 200 }))
        .achievement(def("biome_specialist", "Biome Specialist", AutomationsInOneBiome { count: 10 }))
        .achievement(hidden(
            "all_automations_100",
            "Centennial Factory",
            AllAutomationsAtLevel { level: 100, count: 59 },
        ));

    // Power cells.
    b.achievement(def("power_cell_installed", "Powered Up", InstalledCells { tier: None, count: 1 }))
        .achievement(def(
            "green_energy_5",
            "Green Energy",
            InstalledCells { tier: Some(PowerCellTier::Green), count: 1 },
        ))
        .achievement(def(
            "blue_power",
            "Blue Power",
            InstalledCells { tier: Some(PowerCellTier::Blue), count: 1 },
        ))
        .achievement(def(
            "orange_surge",
            "Orange Surge",
            InstalledCells { tier: Some(PowerCellTier::Orange), count: 1 },
        ))
        .achievement(def("power_cells_10", "Fully Charged", InstalledCells { tier: None, count: 10 }))
        .achievement(def("power_cells_20", "Power Grid", InstalledCells { tier: None, count: 20 }))
        .achievement(def("maximum_power", "Maximum Power", InstalledCells { tier: None, count: 59 }));

    // Expeditions.
    b.achievement(def("first_expedition", "Explorer", ExpeditionsCompleted { count: 1 }))
        .achievement(def("expedition_10", "Seasoned Explorer", ExpeditionsCompleted { count: 10 }))
        .achievement(def("expedition_50", "Veteran Explorer", ExpeditionsCompleted { count: 50 }))
        .achievement(def("expedition_100", "Legendary Explorer", ExpeditionsCompleted { count: 100 }))
        .achievement(def("expedition_500", "Marathon Explorer", ExpeditionsCompleted { count: 500 }))
        .achievement(def(
            "swift_forage_25",
            "Speed Runner",
            ExpeditionsOfTier { tier: ExpeditionTier::QuickDash, count: 25 },
        ))
        .achievement(def(
            "quick_scout_25",
            "Scout Master",
            ExpeditionsOfTier { tier: ExpeditionTier::QuickScout, count: 25 },
        ))
        .achievement(def(
            "standard_expedition_25",
            "Standard Bearer",
            ExpeditionsOfTier { tier: ExpeditionTier::StandardExpedition, count: 25 },
        ))
        .achievement(def(
            "deep_exploration_10",
            "Deep Diver",
            ExpeditionsOfTier { tier: ExpeditionTier::DeepExploration, count: 25 },
        ))
        .achievement(def(
            "epic_journey_5",
            "Epic Journeyer",
            ExpeditionsOfTier { tier: ExpeditionTier::EpicJourney, count: 25 },
        ));

    // Biomes.
    b.achievement(def("world_domination", "World Domination", BiomesDiscovered { count: 6 }))
        .achievement(charted("forest_resources", "Forest Forager", BiomeId::LushForest, Some("berries")))
        .achievement(charted("lake_resources", "Lake Surveyor", BiomeId::MistyLake, Some("smoked_fish")))
        .achievement(charted("desert_resources", "Desert Prospector", BiomeId::AridDesert, Some("cactus_juice")))
        .achievement(charted("tundra_resources", "Tundra Tracker", BiomeId::FrozenTundra, Some("greenhouse_veggies")))
        .achievement(charted("volcano_resources", "Volcano Venture", BiomeId::VolcanicIsle, None))
        .achievement(charted("caverns_resources", "Cavern Cartographer", BiomeId::CrystalCaverns, None));

    // Crashes and shards.
    b.achievement(hidden("first_crash", "Crash Landing", Prestiges { count: 1 }))
        .achievement(hidden("crash_3", "Repeat Offender", Prestiges { count: 3 }))
        .achievement(hidden("crash_5", "Frequent Crasher", Prestiges { count: 5 }))
        .achievement(hidden("crash_10", "Professional Crasher", Prestiges { count: 10 }))
        .achievement(hidden("crash_25", "Crash Connoisseur", Prestiges { count: 25 }))
        .achievement(hidden("cosmic_bamboo_10", "Cosmic Collector", ShardsHeld { amount: 10.0 }))
        .achievement(hidden("cosmic_bamboo_50", "Cosmic Hoarder", ShardsHeld { amount: 50.0 }))
        .achievement(hidden("cosmic_bamboo_100", "Cosmic Master", ShardsHeld { amount: 100.0 }));

    // Skills.
    b.achievement(def("first_skill", "Skill Unlocked", SkillsUnlocked { count: 1 }))
        .achievement(def(
            "production_branch",
            "Production Pro",
            SkillBranchComplete { branch: SkillBranch::Production },
        ))
        .achievement(def(
            "economy_branch",
            "Economy Expert",
            SkillBranchComplete { branch: SkillBranch::Economy },
        ))
        .achievement(def(
            "expedition_branch",
            "Expedition Elite",
            SkillBranchComplete { branch: SkillBranch::Expedition },
        ))
        .achievement(def(
            "power_cells_branch",
            "Power Master",
            SkillBranchComplete { branch: SkillBranch::PowerCells },
        ))
        .achievement(hidden("all_skills", "Skill Savant", SkillsUnlocked { count: 16 }));

    // Milestones.
    b.achievement(def("spaceship_started", "Liftoff Prep", SpaceshipParts { completed: 1 }))
        .achievement(def("spaceship_halfway", "Halfway There", SpaceshipParts { completed: 4 }))
        .achievement(def("spaceship_complete", "Ready for Launch", SpaceshipParts { completed: 7 }));

    // Secrets.
    b.achievement(hidden(
        "hoarder_deluxe",
        "Hoarder Deluxe",
        SingleResourceStock { amount: 100_000_000_000_000.0 },
    ))
    .achievement(hidden(
        "perfectionist",
        "Perfectionist",
        InstalledCells { tier: Some(PowerCellTier::Orange), count: 59 },
    ))
    .achievement(hidden("completionist", "Completionist", AllOtherAchievements));
}
