//! The prestige skill tree: four branches of four nodes, each a
//! straight chain, paid in cosmic bamboo shards.

use pandactory_core::catalog::{CatalogBuilder, SkillDef, SkillEffect};
use pandactory_core::id::{SkillBranch, SkillId};

fn def(
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

pub(crate) fn register(b: &mut CatalogBuilder) {
    use SkillBranch::*;
    use SkillEffect::*;

    b.skill(def("prod_1", "Nimble Paws", 1.0, Production, 1, &[], ProductionSpeed(0.05)))
        .skill(def("prod_2", "Muscle Memory", 2.0, Production, 2, &["prod_1"], ProductionSpeed(0.10)))
        .skill(def("prod_3", "Factory Savant", 3.0, Production, 3, &["prod_2"], ProductionSpeed(0.15)))
        .skill(def("prod_4", "Time Lord (Sort Of)", 5.0, Production, 4, &["prod_3"], ProductionSpeed(0.20)));

    b.skill(def("econ_1", "Shrewd Negotiator", 1.0, Economy, 1, &[], BuildCostReduction(0.05)))
        .skill(def("econ_2", "Bulk Buyer", 2.0, Economy, 2, &["econ_1"], UpgradeCostReduction(0.10)))
        .skill(def("econ_3", "Cosmic Coupons", 3.0, Economy, 3, &["econ_2"], AllCostReduction(0.15)))
        .skill(def("econ_4", "Infinite Discount", 5.0, Economy, 4, &["econ_3"], AllCostReduction(0.20)));

    b.skill(def("exp_1", "Restless Paws", 1.0, Expedition, 1, &[], ExpeditionTimeReduction(0.15)))
        .skill(def("exp_2", "Light Packer", 2.0, Expedition, 2, &["exp_1"], ExpeditionFoodReduction(0.20)))
        .skill(def("exp_3", "Lucky Snout", 3.0, Expedition, 3, &["exp_2"], ExpeditionResourceBonus(0.25)))
        .skill(def("exp_4", "Deja Vu Explorer", 5.0, Expedition, 4, &["exp_3"], InstantFirstBiome));

    b.skill(def("cell_1", "Gentle Touch", 1.0, PowerCells, 1, &[], PowerCellEffectiveness(0.10)))
        .skill(def("cell_2", "Cell Resonance", 2.0, PowerCells, 2, &["cell_1"], PowerCellResonance(0.03)))
        .skill(def("cell_3", "Power Cell Magnet", 3.0, PowerCells, 3, &["cell_2"], PowerCellDropBonus(0.50)))
        .skill(def("cell_4", "Overcharge Protocol", 5.0, PowerCells, 4, &["cell_3"], PowerCellEffectiveness(0.25)));
}
