//! Aggregation of skill-tree and power-cell bonuses.
//!
//! The reducer and engine never read skill definitions directly; they
//! go through [`BonusContext`], which snapshots every derived bonus
//! once per operation.

use crate::catalog::{Catalog, SkillEffectKind};
use crate::id::SkillId;
use crate::state::{GameState, PowerCell};
use std::collections::BTreeSet;

/// Sum the magnitudes of all unlocked skill effects of one kind.
pub fn skill_bonus(catalog: &Catalog, unlocked: &BTreeSet<SkillId>, kind: SkillEffectKind) -> f64 {
    unlocked
        .iter()
        .filter_map(|id| catalog.skill(id))
        .filter(|def| def.effect.kind() == kind)
        .map(|def| def.effect.magnitude())
        .sum()
}

/// True when any unlocked skill carries an effect of this kind.
/// Used for flag effects that have no magnitude.
pub fn has_skill_effect(
    catalog: &Catalog,
    unlocked: &BTreeSet<SkillId>,
    kind: SkillEffectKind,
) -> bool {
    unlocked
        .iter()
        .filter_map(|id| catalog.skill(id))
        .any(|def| def.effect.kind() == kind)
}

/// All derived bonuses for one state snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BonusContext {
    /// Additive production bonus from skills plus mastery.
    pub production: f64,
    pub build_cost_reduction: f64,
    pub upgrade_cost_reduction: f64,
    pub expedition_time_reduction: f64,
    pub expedition_food_reduction: f64,
    pub expedition_resource_bonus: f64,
    pub power_cell_effectiveness: f64,
    pub power_cell_resonance: f64,
    pub power_cell_drop_bonus: f64,
    /// Count of cells installed anywhere, feeding resonance.
    pub installed_cells: u32,
}

impl BonusContext {
    pub fn from_state(catalog: &Catalog, state: &GameState) -> Self {
        let skills = &state.prestige.unlocked_skills;
        let all_reduction = skill_bonus(catalog, skills, SkillEffectKind::AllCostReduction);
        let mastery = crate::achievement::mastery_unlocked(catalog, state);
        Self {
            production: skill_bonus(catalog, skills, SkillEffectKind::ProductionSpeed)
                + if mastery {
                    crate::calc::MASTERY_PRODUCTION_BONUS
                } else {
                    0.0
                },
            build_cost_reduction: skill_bonus(catalog, skills, SkillEffectKind::BuildCostReduction)
                + all_reduction
                + if mastery {
                    crate::calc::MASTERY_COST_REDUCTION
                } else {
                    0.0
                },
            upgrade_cost_reduction: skill_bonus(
                catalog,
                skills,
                SkillEffectKind::UpgradeCostReduction,
            ) + all_reduction
                + if mastery {
                    crate::calc::MASTERY_COST_REDUCTION
                } else {
                    0.0
                },
            expedition_time_reduction: skill_bonus(
                catalog,
                skills,
                SkillEffectKind::ExpeditionTimeReduction,
            ),
            expedition_food_reduction: skill_bonus(
                catalog,
                skills,
                SkillEffectKind::ExpeditionFoodReduction,
            ),
            expedition_resource_bonus: skill_bonus(
                catalog,
                skills,
                SkillEffectKind::ExpeditionResourceBonus,
            ),
            power_cell_effectiveness: skill_bonus(
                catalog,
                skills,
                SkillEffectKind::PowerCellEffectiveness,
            ),
            power_cell_resonance: skill_bonus(catalog, skills, SkillEffectKind::PowerCellResonance),
            power_cell_drop_bonus: skill_bonus(catalog, skills, SkillEffectKind::PowerCellDropBonus),
            installed_cells: state.installed_cell_count(),
        }
    }

    /// Production bonus contributed by one installed cell.
    ///
    /// Effectiveness scales the cell's own bonus; resonance adds a
    /// further factor per cell installed anywhere in the factory.
    pub fn effective_cell_bonus(&self, cell: &PowerCell) -> f64 {
        cell.bonus
            * (1.0 + self.power_cell_effectiveness)
            * (1.0 + self.power_cell_resonance * self.installed_cells as f64)
    }
}
