//! The static configuration catalog: resources, foods, automations,
//! biomes, expedition tiers, power cells, skills, and achievements.
//!
//! Built once at startup through [`CatalogBuilder`] and frozen; every
//! cross-reference is validated at [`CatalogBuilder::build`] time so
//! the engine can treat lookups that fail at runtime as no-ops for
//! partially-migrated saves rather than as config bugs.

use crate::achievement::Condition;
use crate::id::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a resource participates in progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceCategory {
    /// Gathered directly; discovered via biome activation or expeditions.
    Raw,
    /// Produced by automations; discovered the first time one is produced.
    Intermediate,
    /// Spaceship parts and other end-of-chain products.
    Final,
}

/// A resource definition.
#[derive(Debug, Clone)]
pub struct ResourceDef {
    pub id: ResourceId,
    pub name: String,
    pub category: ResourceCategory,
}

/// A food definition. Food lives in a single global pool, not per biome.
#[derive(Debug, Clone)]
pub struct FoodDef {
    pub id: FoodId,
    pub name: String,
    /// Nutrition points per unit, used when provisioning expeditions.
    pub nutrition: f64,
    /// Primary foods (berries) are available from the start and never
    /// enter the discovery queue.
    pub primary: bool,
}

/// One line of a build or upgrade cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceCost {
    pub resource: ResourceId,
    pub amount: f64,
}

/// A per-minute resource flow (input or output) at rate multiplier 1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceFlow {
    pub resource: ResourceId,
    pub amount_per_minute: f64,
}

/// A per-minute food output at rate multiplier 1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodFlow {
    pub food: FoodId,
    pub amount_per_minute: f64,
}

/// Balance category of an automation; determines upgrade cost growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutomationCategory {
    Gatherer,
    FoodProducer,
    Processor,
    AdvancedProcessor,
    FinalAssembler,
}

/// An automation template.
///
/// An automation with no `consumes` entries is a gatherer and always
/// runs at efficiency 1.0.
#[derive(Debug, Clone)]
pub struct AutomationDef {
    pub id: AutomationTypeId,
    pub name: String,
    pub category: AutomationCategory,
    pub base_cost: Vec<ResourceCost>,
    /// Base production-rate multiplier before level scaling.
    pub base_rate: f64,
    pub consumes: Vec<ResourceFlow>,
    pub produces: Vec<ResourceFlow>,
    pub produces_food: Vec<FoodFlow>,
    /// Geometric growth factor for upgrade costs (typically 1.15-1.35).
    pub cost_multiplier: f64,
    /// Cap on instances of this automation per biome, if any.
    pub max_per_biome: Option<u32>,
}

impl AutomationDef {
    /// Gatherers have no inputs and always run at 100% efficiency.
    pub fn is_gatherer(&self) -> bool {
        self.consumes.is_empty()
    }
}

/// A biome definition.
#[derive(Debug, Clone)]
pub struct BiomeDef {
    pub id: BiomeId,
    pub name: String,
    /// Raw resources visible as soon as the biome is activated.
    pub primary_resources: Vec<ResourceId>,
    /// Foods that can be hand-gathered here from the start.
    pub primary_foods: Vec<FoodId>,
    /// Raw resources found only via expeditions in this biome.
    pub discoverable_resources: Vec<ResourceId>,
    /// Automation templates buildable in this biome.
    pub automations: Vec<AutomationTypeId>,
}

/// An expedition tier definition.
#[derive(Debug, Clone)]
pub struct ExpeditionTierDef {
    pub id: ExpeditionTier,
    pub name: String,
    pub duration_minutes: f64,
    /// Nutrition points required to launch.
    pub food_cost: f64,
    pub resource_multiplier: f64,
    pub power_cell_chance: f64,
    pub biome_discovery_chance: f64,
    /// Chance per undiscovered resource in the current biome.
    pub resource_discovery_chance: f64,
}

/// A power cell rank definition.
#[derive(Debug, Clone)]
pub struct PowerCellDef {
    pub tier: PowerCellTier,
    pub name: String,
    /// Additive production bonus (0.50 = +50%).
    pub bonus: f64,
    /// Weight for the tier roll when a cell drops.
    pub drop_weight: f64,
}

/// Effect granted by a skill-tree node. Tagged data, no closures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillEffect {
    ProductionSpeed(f64),
    BuildCostReduction(f64),
    UpgradeCostReduction(f64),
    AllCostReduction(f64),
    ExpeditionTimeReduction(f64),
    ExpeditionFoodReduction(f64),
    ExpeditionResourceBonus(f64),
    InstantFirstBiome,
    PowerCellEffectiveness(f64),
    PowerCellResonance(f64),
    PowerCellDropBonus(f64),
}

/// Discriminant for summing skill effects of one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillEffectKind {
    ProductionSpeed,
    BuildCostReduction,
    UpgradeCostReduction,
    AllCostReduction,
    ExpeditionTimeReduction,
    ExpeditionFoodReduction,
    ExpeditionResourceBonus,
    InstantFirstBiome,
    PowerCellEffectiveness,
    PowerCellResonance,
    PowerCellDropBonus,
}

impl SkillEffect {
    pub fn kind(&self) -> SkillEffectKind {
        match self {
            SkillEffect::ProductionSpeed(_) => SkillEffectKind::ProductionSpeed,
            SkillEffect::BuildCostReduction(_) => SkillEffectKind::BuildCostReduction,
            SkillEffect::UpgradeCostReduction(_) => SkillEffectKind::UpgradeCostReduction,
            SkillEffect::AllCostReduction(_) => SkillEffectKind::AllCostReduction,
            SkillEffect::ExpeditionTimeReduction(_) => SkillEffectKind::ExpeditionTimeReduction,
            SkillEffect::ExpeditionFoodReduction(_) => SkillEffectKind::ExpeditionFoodReduction,
            SkillEffect::ExpeditionResourceBonus(_) => SkillEffectKind::ExpeditionResourceBonus,
            SkillEffect::InstantFirstBiome => SkillEffectKind::InstantFirstBiome,
            SkillEffect::PowerCellEffectiveness(_) => SkillEffectKind::PowerCellEffectiveness,
            SkillEffect::PowerCellResonance(_) => SkillEffectKind::PowerCellResonance,
            SkillEffect::PowerCellDropBonus(_) => SkillEffectKind::PowerCellDropBonus,
        }
    }

    /// Numeric magnitude of the effect; flag effects report 0.
    pub fn magnitude(&self) -> f64 {
        match *self {
            SkillEffect::ProductionSpeed(v)
            | SkillEffect::BuildCostReduction(v)
            | SkillEffect::UpgradeCostReduction(v)
            | SkillEffect::AllCostReduction(v)
            | SkillEffect::ExpeditionTimeReduction(v)
            | SkillEffect::ExpeditionFoodReduction(v)
            | SkillEffect::ExpeditionResourceBonus(v)
            | SkillEffect::PowerCellEffectiveness(v)
            | SkillEffect::PowerCellResonance(v)
            | SkillEffect::PowerCellDropBonus(v) => v,
            SkillEffect::InstantFirstBiome => 0.0,
        }
    }
}

/// A node in the prestige skill tree.
#[derive(Debug, Clone)]
pub struct SkillDef {
    pub id: SkillId,
    pub name: String,
    /// Cost in cosmic bamboo shards.
    pub cost: f64,
    pub branch: SkillBranch,
    pub tier: u32,
    pub requires: Vec<SkillId>,
    pub effect: SkillEffect,
}

/// An achievement definition with a tagged-data unlock condition.
#[derive(Debug, Clone)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: String,
    pub hidden: bool,
    pub condition: Condition,
}

/// Errors raised while assembling a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate id: {0}")]
    Duplicate(String),
    #[error("{context} references unknown resource '{resource}'")]
    UnknownResource { context: String, resource: ResourceId },
    #[error("{context} references unknown food '{food}'")]
    UnknownFood { context: String, food: FoodId },
    #[error("biome '{biome}' references unknown automation '{automation}'")]
    UnknownAutomation {
        biome: BiomeId,
        automation: AutomationTypeId,
    },
    #[error("skill '{skill}' requires unknown skill '{requirement}'")]
    UnknownSkill { skill: SkillId, requirement: SkillId },
    #[error("missing expedition tier {0:?}")]
    MissingExpeditionTier(ExpeditionTier),
    #[error("missing power cell tier {0:?}")]
    MissingPowerCellTier(PowerCellTier),
    #[error("missing biome {0}")]
    MissingBiome(BiomeId),
}

/// Builder for constructing an immutable [`Catalog`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    resources: BTreeMap<ResourceId, ResourceDef>,
    foods: BTreeMap<FoodId, FoodDef>,
    automations: BTreeMap<AutomationTypeId, AutomationDef>,
    biomes: BTreeMap<BiomeId, BiomeDef>,
    expedition_tiers: BTreeMap<ExpeditionTier, ExpeditionTierDef>,
    power_cells: BTreeMap<PowerCellTier, PowerCellDef>,
    skills: BTreeMap<SkillId, SkillDef>,
    achievements: BTreeMap<AchievementId, AchievementDef>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resource(&mut self, def: ResourceDef) -> &mut Self {
        self.resources.insert(def.id.clone(), def);
        self
    }

    pub fn food(&mut self, def: FoodDef) -> &mut Self {
        self.foods.insert(def.id.clone(), def);
        self
    }

    pub fn automation(&mut self, def: AutomationDef) -> &mut Self {
        self.automations.insert(def.id.clone(), def);
        self
    }

    pub fn biome(&mut self, def: BiomeDef) -> &mut Self {
        self.biomes.insert(def.id, def);
        self
    }

    pub fn expedition_tier(&mut self, def: ExpeditionTierDef) -> &mut Self {
        self.expedition_tiers.insert(def.id, def);
        self
    }

    pub fn power_cell(&mut self, def: PowerCellDef) -> &mut Self {
        self.power_cells.insert(def.tier, def);
        self
    }

    pub fn skill(&mut self, def: SkillDef) -> &mut Self {
        self.skills.insert(def.id.clone(), def);
        self
    }

    pub fn achievement(&mut self, def: AchievementDef) -> &mut Self {
        self.achievements.insert(def.id.clone(), def);
        self
    }

    /// Validate every cross-reference and freeze the catalog.
    pub fn build(self) -> Result<Catalog, CatalogError> {
        for def in self.automations.values() {
            let context = format!("automation '{}'", def.id);
            for cost in &def.base_cost {
                self.check_resource(&context, &cost.resource)?;
            }
            for flow in def.consumes.iter().chain(def.produces.iter()) {
                self.check_resource(&context, &flow.resource)?;
            }
            for flow in &def.produces_food {
                if !self.foods.contains_key(&flow.food) {
                    return Err(CatalogError::UnknownFood {
                        context: context.clone(),
                        food: flow.food.clone(),
                    });
                }
            }
        }

        for biome in BiomeId::ALL {
            let Some(def) = self.biomes.get(&biome) else {
                return Err(CatalogError::MissingBiome(biome));
            };
            let context = format!("biome '{biome}'");
            for r in def
                .primary_resources
                .iter()
                .chain(def.discoverable_resources.iter())
            {
                self.check_resource(&context, r)?;
            }
            for f in &def.primary_foods {
                if !self.foods.contains_key(f) {
                    return Err(CatalogError::UnknownFood {
                        context: context.clone(),
                        food: f.clone(),
                    });
                }
            }
            for a in &def.automations {
                if !self.automations.contains_key(a) {
                    return Err(CatalogError::UnknownAutomation {
                        biome,
                        automation: a.clone(),
                    });
                }
            }
        }

        for tier in ExpeditionTier::ALL {
            if !self.expedition_tiers.contains_key(&tier) {
                return Err(CatalogError::MissingExpeditionTier(tier));
            }
        }
        for tier in PowerCellTier::ALL {
            if !self.power_cells.contains_key(&tier) {
                return Err(CatalogError::MissingPowerCellTier(tier));
            }
        }

        for skill in self.skills.values() {
            for req in &skill.requires {
                if !self.skills.contains_key(req) {
                    return Err(CatalogError::UnknownSkill {
                        skill: skill.id.clone(),
                        requirement: req.clone(),
                    });
                }
            }
        }

        Ok(Catalog {
            resources: self.resources,
            foods: self.foods,
            automations: self.automations,
            biomes: self.biomes,
            expedition_tiers: self.expedition_tiers,
            power_cells: self.power_cells,
            skills: self.skills,
            achievements: self.achievements,
        })
    }

    fn check_resource(&self, context: &str, resource: &ResourceId) -> Result<(), CatalogError> {
        if self.resources.contains_key(resource) {
            Ok(())
        } else {
            Err(CatalogError::UnknownResource {
                context: context.to_string(),
                resource: resource.clone(),
            })
        }
    }
}

/// Immutable catalog. Frozen after build; thread-safe to share.
#[derive(Debug)]
pub struct Catalog {
    resources: BTreeMap<ResourceId, ResourceDef>,
    foods: BTreeMap<FoodId, FoodDef>,
    automations: BTreeMap<AutomationTypeId, AutomationDef>,
    biomes: BTreeMap<BiomeId, BiomeDef>,
    expedition_tiers: BTreeMap<ExpeditionTier, ExpeditionTierDef>,
    power_cells: BTreeMap<PowerCellTier, PowerCellDef>,
    skills: BTreeMap<SkillId, SkillDef>,
    achievements: BTreeMap<AchievementId, AchievementDef>,
}

impl Catalog {
    pub fn resource(&self, id: &ResourceId) -> Option<&ResourceDef> {
        self.resources.get(id)
    }

    pub fn food(&self, id: &FoodId) -> Option<&FoodDef> {
        self.foods.get(id)
    }

    pub fn automation(&self, id: &AutomationTypeId) -> Option<&AutomationDef> {
        self.automations.get(id)
    }

    pub fn biome(&self, id: BiomeId) -> &BiomeDef {
        // Presence of all six biomes is validated at build time.
        &self.biomes[&id]
    }

    pub fn expedition_tier(&self, id: ExpeditionTier) -> &ExpeditionTierDef {
        &self.expedition_tiers[&id]
    }

    pub fn power_cell(&self, tier: PowerCellTier) -> &PowerCellDef {
        &self.power_cells[&tier]
    }

    pub fn skill(&self, id: &SkillId) -> Option<&SkillDef> {
        self.skills.get(id)
    }

    pub fn achievement(&self, id: &AchievementId) -> Option<&AchievementDef> {
        self.achievements.get(id)
    }

    pub fn resources(&self) -> impl Iterator<Item = &ResourceDef> {
        self.resources.values()
    }

    pub fn foods(&self) -> impl Iterator<Item = &FoodDef> {
        self.foods.values()
    }

    pub fn automations(&self) -> impl Iterator<Item = &AutomationDef> {
        self.automations.values()
    }

    pub fn skills(&self) -> impl Iterator<Item = &SkillDef> {
        self.skills.values()
    }

    pub fn achievements(&self) -> impl Iterator<Item = &AchievementDef> {
        self.achievements.values()
    }

    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    pub fn automation_count(&self) -> usize {
        self.automations.len()
    }

    pub fn achievement_count(&self) -> usize {
        self.achievements.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::mini_catalog;

    #[test]
    fn mini_catalog_builds() {
        let catalog = mini_catalog();
        assert!(catalog.resource_count() > 0);
        assert!(catalog.automation_count() > 0);
        // All six biomes present even if only two have content.
        for biome in BiomeId::ALL {
            let _ = catalog.biome(biome);
        }
    }

    #[test]
    fn unknown_resource_in_automation_fails() {
        let mut b = crate::test_utils::mini_catalog_builder();
        b.automation(AutomationDef {
            id: AutomationTypeId::new("bad_mill"),
            name: "Bad Mill".into(),
            category: AutomationCategory::Processor,
            base_cost: vec![],
            base_rate: 1.0,
            consumes: vec![ResourceFlow {
                resource: ResourceId::new("no_such_resource"),
                amount_per_minute: 1.0,
            }],
            produces: vec![],
            produces_food: vec![],
            cost_multiplier: 1.25,
            max_per_biome: None,
        });
        let err = b.build().unwrap_err();
        assert!(matches!(err, CatalogError::UnknownResource { .. }));
    }

    #[test]
    fn unknown_automation_in_biome_fails() {
        let mut b = crate::test_utils::mini_catalog_builder();
        b.biome(BiomeDef {
            id: BiomeId::LushForest,
            name: "Lush Forest".into(),
            primary_resources: vec![ResourceId::new("wood")],
            primary_foods: vec![],
            discoverable_resources: vec![],
            automations: vec![AutomationTypeId::new("ghost")],
        });
        let err = b.build().unwrap_err();
        assert!(matches!(err, CatalogError::UnknownAutomation { .. }));
    }

    #[test]
    fn missing_expedition_tier_fails() {
        // A builder without any tiers cannot build.
        let b = CatalogBuilder::new();
        let err = b.build().unwrap_err();
        // Biomes are checked first.
        assert!(matches!(err, CatalogError::MissingBiome(_)));
    }

    #[test]
    fn skill_with_unknown_prerequisite_fails() {
        let mut b = crate::test_utils::mini_catalog_builder();
        b.skill(SkillDef {
            id: SkillId::new("orphan"),
            name: "Orphan".into(),
            cost: 1.0,
            branch: SkillBranch::Production,
            tier: 2,
            requires: vec![SkillId::new("missing_parent")],
            effect: SkillEffect::ProductionSpeed(0.05),
        });
        let err = b.build().unwrap_err();
        assert!(matches!(err, CatalogError::UnknownSkill { .. }));
    }

    #[test]
    fn gatherer_detection() {
        let catalog = mini_catalog();
        let logger = catalog
            .automation(&AutomationTypeId::new("logger"))
            .unwrap();
        assert!(logger.is_gatherer());
        let saw_mill = catalog
            .automation(&AutomationTypeId::new("saw_mill"))
            .unwrap();
        assert!(!saw_mill.is_gatherer());
    }
}
