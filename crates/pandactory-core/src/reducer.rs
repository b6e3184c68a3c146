//! The state reducer: every game transition is an [`Action`] applied
//! to an immutable snapshot, returning the next state.
//!
//! Invalid actions (unknown ids, unaffordable costs, wrong panda
//! status) are no-ops that return the state unchanged, so a stale UI
//! or a replayed action log can never corrupt a save. Achievement
//! conditions are re-checked after every action.

use crate::achievement;
use crate::bonus::BonusContext;
use crate::calc;
use crate::catalog::Catalog;
use crate::engine;
use crate::expedition::ExpeditionRewards;
use crate::id::*;
use crate::state::{Automation, ExpeditionState, GameState, PandaStatus};
use serde::{Deserialize, Serialize};

/// A game transition. Serializable so action logs can be replayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Hand-gather (or grant) a resource into a biome pool.
    Gather {
        biome: BiomeId,
        resource: ResourceId,
        amount: f64,
    },
    /// Hand-gather (or grant) food into the global pool.
    GatherFood { food: FoodId, amount: f64 },
    Build {
        biome: BiomeId,
        automation_type: AutomationTypeId,
    },
    Upgrade {
        biome: BiomeId,
        automation: AutomationId,
    },
    TogglePause {
        biome: BiomeId,
        automation: AutomationId,
    },
    /// Install the inventory cell at `cell_index` onto an automation.
    InstallPowerCell {
        biome: BiomeId,
        automation: AutomationId,
        cell_index: usize,
    },
    RemovePowerCell {
        biome: BiomeId,
        automation: AutomationId,
    },
    SwitchBiome { biome: BiomeId },
    UnlockBiome { biome: BiomeId },
    ActivateBiome { biome: BiomeId },
    StartExpedition {
        tier: ExpeditionTier,
        food: Vec<(FoodId, f64)>,
    },
    /// Bank a finished expedition's rolled rewards.
    CollectExpedition { rewards: ExpeditionRewards },
    /// Abort a running expedition, keeping partial rewards.
    RecallExpedition { rewards: ExpeditionRewards },
    UnlockSkill { skill: SkillId },
    /// Crash the ship: reset everything except prestige progression.
    Prestige { shards_earned: f64 },
    /// Run the factory for a wall-clock delta.
    Tick { delta_seconds: f64 },
    /// Queue a discovery popup; a no-op once the resource is known.
    QueueResourceDiscovery { resource: ResourceId },
    AcknowledgeResourceDiscovery { resource: ResourceId },
    QueueFoodDiscovery { food: FoodId },
    AcknowledgeFoodDiscovery { food: FoodId },
    /// Grant an achievement directly, bypassing its condition.
    UnlockAchievement { achievement: AchievementId },
    AcknowledgeAchievement { achievement: AchievementId },
    MarkSaved,
    /// Replace the whole state with a decoded save document.
    Load { state: Box<GameState> },
    Reset,
}

/// Apply one action. `now_ms` is the wall clock at dispatch time;
/// passing it in keeps the reducer pure and testable.
pub fn reduce(catalog: &Catalog, state: &GameState, action: &Action, now_ms: u64) -> GameState {
    let mut next = state.clone();
    apply(catalog, &mut next, action, now_ms);

    // Unlocks are permanent, so checking after every action is safe
    // even for actions that change nothing.
    settle_achievements(catalog, &mut next);
    next
}

/// Unlock and queue every achievement whose condition now holds.
pub(crate) fn settle_achievements(catalog: &Catalog, state: &mut GameState) {
    for id in achievement::check_achievements(catalog, state) {
        state.achievements.unlocked.insert(id.clone());
        state.achievements.pending.push(id);
    }
}

fn apply(catalog: &Catalog, state: &mut GameState, action: &Action, now_ms: u64) {
    match action {
        Action::Gather {
            biome,
            resource,
            amount,
        } => {
            if catalog.resource(resource).is_none() {
                log::warn!("gather ignored: unknown resource '{resource}'");
                return;
            }
            let biome_state = state.biome_mut(*biome);
            let stock = biome_state.resources.entry(resource.clone()).or_insert(0.0);
            *stock = (*stock + amount).max(0.0);
            if *amount > 0.0 {
                biome_state.discovered_resources.insert(resource.clone());
                state.lifetime_stats.total_resources_gathered += amount;
            }
        }

        Action::GatherFood { food, amount } => {
            if catalog.food(food).is_none() {
                log::warn!("gather ignored: unknown food '{food}'");
                return;
            }
            let stock = state.food.entry(food.clone()).or_insert(0.0);
            *stock = (*stock + amount).max(0.0);
        }

        Action::Build {
            biome,
            automation_type,
        } => {
            if state.panda.status == PandaStatus::Expedition {
                return;
            }
            let Some(def) = catalog.automation(automation_type) else {
                log::warn!("build ignored: unknown automation '{automation_type}'");
                return;
            };
            if !state.biome(*biome).activated {
                return;
            }
            if !catalog.biome(*biome).automations.contains(automation_type) {
                return;
            }
            if let Some(cap) = def.max_per_biome {
                if state.instances_of(*biome, automation_type) >= cap {
                    return;
                }
            }
            let ctx = BonusContext::from_state(catalog, state);
            let cost = calc::build_cost(def, ctx.build_cost_reduction);
            if !calc::can_afford(&state.global_resource_pool(), &cost) {
                return;
            }
            calc::deduct_across_biomes(state, &cost);

            let id = AutomationId(state.next_automation_id);
            state.next_automation_id += 1;
            state.biome_mut(*biome).automations.insert(
                id,
                Automation {
                    type_id: automation_type.clone(),
                    level: 1,
                    power_cell: None,
                    paused: false,
                },
            );
            state.lifetime_stats.total_automations_built += 1;
        }

        Action::Upgrade { biome, automation } => {
            if state.panda.status == PandaStatus::Expedition {
                return;
            }
            let Some(existing) = state.biome(*biome).automations.get(automation) else {
                return;
            };
            let Some(def) = catalog.automation(&existing.type_id) else {
                return;
            };
            let level = existing.level;
            let ctx = BonusContext::from_state(catalog, state);
            let cost = calc::level_up_cost(def, level, ctx.upgrade_cost_reduction);
            if !calc::can_afford(&state.global_resource_pool(), &cost) {
                return;
            }
            calc::deduct_across_biomes(state, &cost);
            if let Some(a) = state.biome_mut(*biome).automations.get_mut(automation) {
                a.level += 1;
            }
            state.lifetime_stats.total_upgrades_purchased += 1;
        }

        Action::TogglePause { biome, automation } => {
            if let Some(a) = state.biome_mut(*biome).automations.get_mut(automation) {
                a.paused = !a.paused;
            }
        }

        Action::InstallPowerCell {
            biome,
            automation,
            cell_index,
        } => {
            if *cell_index >= state.power_cell_inventory.len() {
                return;
            }
            let Some(a) = state.biome(*biome).automations.get(automation) else {
                return;
            };
            if a.power_cell.is_some() {
                return;
            }
            let cell = state.power_cell_inventory.remove(*cell_index);
            if let Some(a) = state.biome_mut(*biome).automations.get_mut(automation) {
                a.power_cell = Some(cell);
            }
        }

        Action::RemovePowerCell { biome, automation } => {
            let removed = state
                .biome_mut(*biome)
                .automations
                .get_mut(automation)
                .and_then(|a| a.power_cell.take());
            if let Some(cell) = removed {
                state.power_cell_inventory.push(cell);
            }
        }

        Action::SwitchBiome { biome } => {
            if state.biome(*biome).discovered {
                state.player.current_biome = *biome;
            }
        }

        Action::UnlockBiome { biome } => {
            state.biome_mut(*biome).discovered = true;
            if !state.unlocked_biomes.contains(biome) {
                state.unlocked_biomes.push(*biome);
            }
        }

        Action::ActivateBiome { biome } => {
            if !state.biome(*biome).discovered {
                return;
            }
            let primaries = catalog.biome(*biome).primary_resources.clone();
            let biome_state = state.biome_mut(*biome);
            biome_state.activated = true;
            biome_state.discovered_resources.extend(primaries);
        }

        Action::StartExpedition { tier, food } => {
            if state.panda.status == PandaStatus::Expedition {
                return;
            }
            let ctx = BonusContext::from_state(catalog, state);
            let config = catalog.expedition_tier(*tier);
            let required = calc::effective_food_cost(
                config,
                state.unlocked_biomes.len() as u32,
                ctx.expedition_food_reduction,
            );
            let packed: f64 = food
                .iter()
                .filter_map(|(id, amount)| {
                    catalog.food(id).map(|def| def.nutrition * amount.max(0.0))
                })
                .sum();
            if packed + 1e-9 < required {
                return;
            }
            for (id, amount) in food {
                let stock = state.food.get(id).copied().unwrap_or(0.0);
                if stock + 1e-9 < *amount {
                    return;
                }
            }
            for (id, amount) in food {
                let stock = state.food.entry(id.clone()).or_insert(0.0);
                *stock = (*stock - amount).max(0.0);
            }
            state.panda.status = PandaStatus::Expedition;
            state.panda.expedition = Some(ExpeditionState {
                tier: *tier,
                start_time_ms: now_ms,
                duration_ms: calc::effective_duration_ms(config, ctx.expedition_time_reduction),
                food_consumed: food.clone(),
                collected_at: None,
            });
            state.expedition_count += 1;
        }

        Action::CollectExpedition { rewards } => {
            let Some(expedition) = state.panda.expedition.clone() else {
                return;
            };
            if !expedition.is_complete(now_ms) {
                return;
            }
            apply_reward_resources(catalog, state, rewards);
            state.power_cell_inventory.extend(rewards.power_cells.iter().copied());

            if let Some(new_biome) = rewards.new_biome {
                state.biome_mut(new_biome).discovered = true;
                if !state.unlocked_biomes.contains(&new_biome) {
                    state.unlocked_biomes.push(new_biome);
                }
                state.expedition_pity_counter = 0;
            } else if (state.unlocked_biomes.len() as u32) < BiomeId::ALL.len() as u32 {
                state.expedition_pity_counter += 1;
            }

            let current = state.player.current_biome;
            state
                .biome_mut(current)
                .discovered_resources
                .extend(rewards.new_resources.iter().cloned());

            state.lifetime_stats.total_expeditions_completed += 1;
            *state
                .lifetime_stats
                .expeditions_by_tier
                .entry(expedition.tier)
                .or_insert(0) += 1;

            state.panda.status = PandaStatus::Home;
            state.panda.expedition = None;
        }

        Action::RecallExpedition { rewards } => {
            let Some(expedition) = state.panda.expedition.clone() else {
                return;
            };
            if expedition.is_complete(now_ms) {
                // Finished runs must go through collection.
                return;
            }
            apply_reward_resources(catalog, state, rewards);
            state.panda.status = PandaStatus::Home;
            state.panda.expedition = None;
        }

        Action::UnlockSkill { skill } => {
            let Some(def) = catalog.skill(skill) else {
                log::warn!("unlock ignored: unknown skill '{skill}'");
                return;
            };
            let unlocked = &state.prestige.unlocked_skills;
            if unlocked.contains(skill) {
                return;
            }
            if !def.requires.iter().all(|req| unlocked.contains(req)) {
                return;
            }
            if state.prestige.cosmic_bamboo_shards < def.cost {
                return;
            }
            state.prestige.cosmic_bamboo_shards -= def.cost;
            state.prestige.unlocked_skills.insert(skill.clone());
        }

        Action::Prestige { shards_earned } => {
            let prestige = state.prestige.clone();
            *state = GameState::initial(catalog, now_ms);
            state.prestige.cosmic_bamboo_shards =
                prestige.cosmic_bamboo_shards + shards_earned.max(0.0);
            state.prestige.total_prestiges = prestige.total_prestiges + 1;
            state.prestige.unlocked_skills = prestige.unlocked_skills;
        }

        Action::Tick { delta_seconds } => {
            engine::advance(catalog, state, *delta_seconds, 1.0);
            state.last_tick = now_ms;
        }

        Action::QueueResourceDiscovery { resource } => {
            if catalog.resource(resource).is_none() {
                log::warn!("queue ignored: unknown resource '{resource}'");
                return;
            }
            if state.discovered_produced_resources.contains(resource)
                || state.pending_resource_discoveries.contains(resource)
            {
                return;
            }
            state.discovered_produced_resources.insert(resource.clone());
            state.pending_resource_discoveries.push(resource.clone());
        }

        Action::AcknowledgeResourceDiscovery { resource } => {
            state.discovered_produced_resources.insert(resource.clone());
            state.pending_resource_discoveries.retain(|r| r != resource);
        }

        Action::QueueFoodDiscovery { food } => {
            if catalog.food(food).is_none() {
                log::warn!("queue ignored: unknown food '{food}'");
                return;
            }
            if state.discovered_produced_foods.contains(food)
                || state.pending_food_discoveries.contains(food)
            {
                return;
            }
            state.discovered_produced_foods.insert(food.clone());
            state.pending_food_discoveries.push(food.clone());
        }

        Action::AcknowledgeFoodDiscovery { food } => {
            state.discovered_produced_foods.insert(food.clone());
            state.pending_food_discoveries.retain(|f| f != food);
        }

        Action::UnlockAchievement { achievement } => {
            if catalog.achievement(achievement).is_none() {
                log::warn!("unlock ignored: unknown achievement '{achievement}'");
                return;
            }
            if state.achievements.unlocked.contains(achievement) {
                return;
            }
            state.achievements.unlocked.insert(achievement.clone());
            state.achievements.pending.push(achievement.clone());
        }

        Action::AcknowledgeAchievement { achievement } => {
            state.achievements.pending.retain(|a| a != achievement);
        }

        Action::MarkSaved => {
            state.last_save = now_ms;
            state.last_tick = now_ms;
        }

        Action::Load { state: loaded } => {
            *state = loaded.as_ref().clone();
        }

        Action::Reset => {
            *state = GameState::initial(catalog, now_ms);
        }
    }
}

/// Deposit rolled reward amounts: resources into the current biome,
/// anything the catalog knows as food into the global pool.
fn apply_reward_resources(catalog: &Catalog, state: &mut GameState, rewards: &ExpeditionRewards) {
    let current = state.player.current_biome;
    for (resource, amount) in &rewards.resources {
        if catalog.resource(resource).is_some() {
            *state
                .biome_mut(current)
                .resources
                .entry(resource.clone())
                .or_insert(0.0) += amount;
        } else if catalog.food(&FoodId::new(resource.as_str())).is_some() {
            *state
                .food
                .entry(FoodId::new(resource.as_str()))
                .or_insert(0.0) += amount;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PowerCell;
    use crate::test_utils::{add_automation, mini_catalog};

    fn wood() -> ResourceId {
        ResourceId::new("wood")
    }

    #[test]
    fn gather_adds_stock_and_discovers() {
        let catalog = mini_catalog();
        let state = GameState::initial(&catalog, 0);
        let next = reduce(
            &catalog,
            &state,
            &Action::Gather {
                biome: BiomeId::LushForest,
                resource: wood(),
                amount: 5.0,
            },
            0,
        );
        assert_eq!(next.biome(BiomeId::LushForest).stock(&wood()), 5.0);
        assert_eq!(next.lifetime_stats.total_resources_gathered, 5.0);
        // The original state is untouched.
        assert_eq!(state.biome(BiomeId::LushForest).stock(&wood()), 0.0);
    }

    #[test]
    fn gather_unlocks_first_achievement() {
        let catalog = mini_catalog();
        let state = GameState::initial(&catalog, 0);
        let next = reduce(
            &catalog,
            &state,
            &Action::Gather {
                biome: BiomeId::LushForest,
                resource: wood(),
                amount: 1.0,
            },
            0,
        );
        assert!(next
            .achievements
            .unlocked
            .contains(&AchievementId::new("first_gather")));
        assert_eq!(
            next.achievements.pending,
            vec![AchievementId::new("first_gather")]
        );
    }

    #[test]
    fn build_deducts_cost_and_allocates_stable_id() {
        let catalog = mini_catalog();
        let mut state = GameState::initial(&catalog, 0);
        state
            .biome_mut(BiomeId::LushForest)
            .resources
            .insert(wood(), 25.0);
        let action = Action::Build {
            biome: BiomeId::LushForest,
            automation_type: AutomationTypeId::new("logger"),
        };
        let next = reduce(&catalog, &state, &action, 0);
        // logger costs 10 wood.
        assert_eq!(next.biome(BiomeId::LushForest).stock(&wood()), 15.0);
        assert!(next
            .biome(BiomeId::LushForest)
            .automations
            .contains_key(&AutomationId(1)));
        assert_eq!(next.next_automation_id, 2);
        assert_eq!(next.lifetime_stats.total_automations_built, 1);

        // Too poor for a second one after another build.
        let third = reduce(&catalog, &next, &action, 0);
        let fourth = reduce(&catalog, &third, &action, 0);
        assert_eq!(fourth.biome(BiomeId::LushForest).automations.len(), 2);
    }

    #[test]
    fn build_is_locked_during_expeditions() {
        let catalog = mini_catalog();
        let mut state = GameState::initial(&catalog, 0);
        state
            .biome_mut(BiomeId::LushForest)
            .resources
            .insert(wood(), 100.0);
        state.panda.status = PandaStatus::Expedition;
        let next = reduce(
            &catalog,
            &state,
            &Action::Build {
                biome: BiomeId::LushForest,
                automation_type: AutomationTypeId::new("logger"),
            },
            0,
        );
        assert!(next.biome(BiomeId::LushForest).automations.is_empty());
        assert_eq!(next.biome(BiomeId::LushForest).stock(&wood()), 100.0);
    }

    #[test]
    fn upgrade_costs_grow_with_level() {
        let catalog = mini_catalog();
        let mut state = GameState::initial(&catalog, 0);
        let id = add_automation(&mut state, BiomeId::LushForest, "logger", 1);
        state
            .biome_mut(BiomeId::LushForest)
            .resources
            .insert(wood(), 12.0);
        let action = Action::Upgrade {
            biome: BiomeId::LushForest,
            automation: id,
        };
        // Level 1 -> 2 costs ceil(10 * 1.15) = 12.
        let next = reduce(&catalog, &state, &action, 0);
        assert_eq!(next.biome(BiomeId::LushForest).automations[&id].level, 2);
        assert_eq!(next.biome(BiomeId::LushForest).stock(&wood()), 0.0);
        assert_eq!(next.lifetime_stats.total_upgrades_purchased, 1);
        // Broke now: upgrade is a no-op.
        let again = reduce(&catalog, &next, &action, 0);
        assert_eq!(again.biome(BiomeId::LushForest).automations[&id].level, 2);
    }

    #[test]
    fn power_cell_moves_between_inventory_and_automation() {
        let catalog = mini_catalog();
        let mut state = GameState::initial(&catalog, 0);
        let id = add_automation(&mut state, BiomeId::LushForest, "logger", 1);
        state.power_cell_inventory.push(PowerCell {
            tier: PowerCellTier::Green,
            bonus: 0.50,
        });
        let installed = reduce(
            &catalog,
            &state,
            &Action::InstallPowerCell {
                biome: BiomeId::LushForest,
                automation: id,
                cell_index: 0,
            },
            0,
        );
        assert!(installed.power_cell_inventory.is_empty());
        assert!(installed.biome(BiomeId::LushForest).automations[&id]
            .power_cell
            .is_some());

        // A second install on the same automation is rejected.
        let mut with_spare = installed.clone();
        with_spare.power_cell_inventory.push(PowerCell {
            tier: PowerCellTier::Blue,
            bonus: 1.0,
        });
        let rejected = reduce(
            &catalog,
            &with_spare,
            &Action::InstallPowerCell {
                biome: BiomeId::LushForest,
                automation: id,
                cell_index: 0,
            },
            0,
        );
        assert_eq!(rejected.power_cell_inventory.len(), 1);

        let removed = reduce(
            &catalog,
            &installed,
            &Action::RemovePowerCell {
                biome: BiomeId::LushForest,
                automation: id,
            },
            0,
        );
        assert_eq!(removed.power_cell_inventory.len(), 1);
        assert_eq!(removed.power_cell_inventory[0].tier, PowerCellTier::Green);
    }

    #[test]
    fn expedition_lifecycle() {
        let catalog = mini_catalog();
        let mut state = GameState::initial(&catalog, 0);
        state.food.insert(FoodId::new("berries"), 1_000.0);

        // QuickDash needs 500 nutrition; 200 berries carry 600.
        let started = reduce(
            &catalog,
            &state,
            &Action::StartExpedition {
                tier: ExpeditionTier::QuickDash,
                food: vec![(FoodId::new("berries"), 200.0)],
            },
            1_000,
        );
        assert_eq!(started.panda.status, PandaStatus::Expedition);
        assert_eq!(started.food.get("berries"), Some(&800.0));
        assert_eq!(started.expedition_count, 1);
        let expedition = started.panda.expedition.clone().unwrap();
        assert_eq!(expedition.duration_ms, 600_000);

        // Collecting early is a no-op.
        let mut rewards = ExpeditionRewards::default();
        rewards.resources.insert(wood(), 30.0);
        let early = reduce(
            &catalog,
            &started,
            &Action::CollectExpedition {
                rewards: rewards.clone(),
            },
            300_000,
        );
        assert_eq!(early.panda.status, PandaStatus::Expedition);

        // After completion the rewards land in the current biome.
        let collected = reduce(
            &catalog,
            &started,
            &Action::CollectExpedition {
                rewards: rewards.clone(),
            },
            700_000,
        );
        assert_eq!(collected.panda.status, PandaStatus::Home);
        assert!(collected.panda.expedition.is_none());
        assert_eq!(collected.biome(BiomeId::LushForest).stock(&wood()), 30.0);
        assert_eq!(collected.lifetime_stats.total_expeditions_completed, 1);
        assert_eq!(
            collected
                .lifetime_stats
                .expeditions_by_tier
                .get(&ExpeditionTier::QuickDash),
            Some(&1)
        );
        // No biome found: pity rises.
        assert_eq!(collected.expedition_pity_counter, 1);
    }

    #[test]
    fn start_without_enough_food_is_rejected() {
        let catalog = mini_catalog();
        let mut state = GameState::initial(&catalog, 0);
        state.food.insert(FoodId::new("berries"), 10.0);
        let next = reduce(
            &catalog,
            &state,
            &Action::StartExpedition {
                tier: ExpeditionTier::QuickDash,
                food: vec![(FoodId::new("berries"), 10.0)],
            },
            0,
        );
        assert_eq!(next.panda.status, PandaStatus::Home);
        assert_eq!(next.food.get("berries"), Some(&10.0));
    }

    #[test]
    fn biome_discovery_resets_pity_and_unlocks() {
        let catalog = mini_catalog();
        let mut state = GameState::initial(&catalog, 0);
        state.expedition_pity_counter = 7;
        state.panda.status = PandaStatus::Expedition;
        state.panda.expedition = Some(ExpeditionState {
            tier: ExpeditionTier::QuickScout,
            start_time_ms: 0,
            duration_ms: 1_000,
            food_consumed: vec![],
            collected_at: None,
        });
        let rewards = ExpeditionRewards {
            new_biome: Some(BiomeId::MistyLake),
            ..Default::default()
        };
        let next = reduce(&catalog, &state, &Action::CollectExpedition { rewards }, 2_000);
        assert!(next.biome(BiomeId::MistyLake).discovered);
        assert_eq!(
            next.unlocked_biomes,
            vec![BiomeId::LushForest, BiomeId::MistyLake]
        );
        assert_eq!(next.expedition_pity_counter, 0);
    }

    #[test]
    fn recall_keeps_partial_rewards_but_no_completion_credit() {
        let catalog = mini_catalog();
        let mut state = GameState::initial(&catalog, 0);
        state.panda.status = PandaStatus::Expedition;
        state.panda.expedition = Some(ExpeditionState {
            tier: ExpeditionTier::QuickScout,
            start_time_ms: 0,
            duration_ms: 1_800_000,
            food_consumed: vec![],
            collected_at: None,
        });
        let mut rewards = ExpeditionRewards::default();
        rewards.resources.insert(wood(), 12.0);
        let next = reduce(
            &catalog,
            &state,
            &Action::RecallExpedition { rewards },
            900_000,
        );
        assert_eq!(next.panda.status, PandaStatus::Home);
        assert_eq!(next.biome(BiomeId::LushForest).stock(&wood()), 12.0);
        assert_eq!(next.lifetime_stats.total_expeditions_completed, 0);
        assert_eq!(next.expedition_pity_counter, 0);
    }

    #[test]
    fn activate_biome_reveals_primaries() {
        let catalog = mini_catalog();
        let mut state = GameState::initial(&catalog, 0);
        // Not discovered yet: activation refused.
        let refused = reduce(
            &catalog,
            &state,
            &Action::ActivateBiome {
                biome: BiomeId::MistyLake,
            },
            0,
        );
        assert!(!refused.biome(BiomeId::MistyLake).activated);

        state.biome_mut(BiomeId::MistyLake).discovered = true;
        let next = reduce(
            &catalog,
            &state,
            &Action::ActivateBiome {
                biome: BiomeId::MistyLake,
            },
            0,
        );
        assert!(next.biome(BiomeId::MistyLake).activated);
        assert!(next
            .biome(BiomeId::MistyLake)
            .discovered_resources
            .contains("stone"));
    }

    #[test]
    fn skill_unlock_enforces_prerequisites_and_cost() {
        let catalog = mini_catalog();
        let mut state = GameState::initial(&catalog, 0);
        state.prestige.cosmic_bamboo_shards = 10.0;

        // prod_2 requires prod_1.
        let blocked = reduce(
            &catalog,
            &state,
            &Action::UnlockSkill {
                skill: SkillId::new("prod_2"),
            },
            0,
        );
        assert!(!blocked.prestige.unlocked_skills.contains("prod_2"));

        let first = reduce(
            &catalog,
            &state,
            &Action::UnlockSkill {
                skill: SkillId::new("prod_1"),
            },
            0,
        );
        assert!(first.prestige.unlocked_skills.contains("prod_1"));
        assert_eq!(first.prestige.cosmic_bamboo_shards, 9.0);

        let second = reduce(
            &catalog,
            &first,
            &Action::UnlockSkill {
                skill: SkillId::new("prod_2"),
            },
            0,
        );
        assert!(second.prestige.unlocked_skills.contains("prod_2"));
    }

    #[test]
    fn prestige_resets_everything_but_prestige_data() {
        let catalog = mini_catalog();
        let mut state = GameState::initial(&catalog, 0);
        add_automation(&mut state, BiomeId::LushForest, "logger", 10);
        state.biome_mut(BiomeId::LushForest).resources.insert(wood(), 9_999.0);
        state.prestige.cosmic_bamboo_shards = 5.0;
        state.prestige.total_prestiges = 1;
        state.prestige.unlocked_skills.insert(SkillId::new("prod_1"));
        state
            .achievements
            .unlocked
            .insert(AchievementId::new("first_gather"));

        let next = reduce(
            &catalog,
            &state,
            &Action::Prestige { shards_earned: 3.0 },
            50_000,
        );
        assert_eq!(next.prestige.cosmic_bamboo_shards, 8.0);
        assert_eq!(next.prestige.total_prestiges, 2);
        assert!(next.prestige.unlocked_skills.contains("prod_1"));
        assert!(next.biome(BiomeId::LushForest).automations.is_empty());
        assert_eq!(next.biome(BiomeId::LushForest).stock(&wood()), 0.0);
        assert!(!next
            .achievements
            .unlocked
            .contains(&AchievementId::new("first_gather")));
        assert_eq!(next.game_start_time, 50_000);
    }

    #[test]
    fn tick_action_advances_factory_and_clock() {
        let catalog = mini_catalog();
        let mut state = GameState::initial(&catalog, 0);
        add_automation(&mut state, BiomeId::LushForest, "logger", 1);
        let next = reduce(
            &catalog,
            &state,
            &Action::Tick { delta_seconds: 60.0 },
            60_000,
        );
        assert!((next.biome(BiomeId::LushForest).stock(&wood()) - 7.5).abs() < 1e-9);
        assert_eq!(next.last_tick, 60_000);
    }

    #[test]
    fn discovery_acknowledgements_drain_queues() {
        let catalog = mini_catalog();
        let mut state = GameState::initial(&catalog, 0);
        state
            .pending_resource_discoveries
            .push(ResourceId::new("planks"));
        let next = reduce(
            &catalog,
            &state,
            &Action::AcknowledgeResourceDiscovery {
                resource: ResourceId::new("planks"),
            },
            0,
        );
        assert!(next.pending_resource_discoveries.is_empty());
        assert!(next
            .discovered_produced_resources
            .contains(&ResourceId::new("planks")));
    }

    #[test]
    fn manual_queue_deduplicates_against_known_discoveries() {
        let catalog = mini_catalog();
        let state = GameState::initial(&catalog, 0);
        let queue = Action::QueueResourceDiscovery {
            resource: ResourceId::new("planks"),
        };
        let next = reduce(&catalog, &state, &queue, 0);
        assert_eq!(
            next.pending_resource_discoveries,
            vec![ResourceId::new("planks")]
        );
        // Queuing again while pending changes nothing.
        let again = reduce(&catalog, &next, &queue, 0);
        assert_eq!(again.pending_resource_discoveries.len(), 1);

        // Once acknowledged, the resource is known for good.
        let acked = reduce(
            &catalog,
            &again,
            &Action::AcknowledgeResourceDiscovery {
                resource: ResourceId::new("planks"),
            },
            0,
        );
        let requeued = reduce(&catalog, &acked, &queue, 0);
        assert!(requeued.pending_resource_discoveries.is_empty());

        // Unknown ids are ignored.
        let bogus = reduce(
            &catalog,
            &state,
            &Action::QueueResourceDiscovery {
                resource: ResourceId::new("unobtanium"),
            },
            0,
        );
        assert!(bogus.pending_resource_discoveries.is_empty());
    }

    #[test]
    fn manual_unlock_is_idempotent() {
        let catalog = mini_catalog();
        let state = GameState::initial(&catalog, 0);
        let unlock = Action::UnlockAchievement {
            achievement: AchievementId::new("twin_lands"),
        };
        let next = reduce(&catalog, &state, &unlock, 0);
        assert!(next
            .achievements
            .unlocked
            .contains(&AchievementId::new("twin_lands")));
        assert_eq!(
            next.achievements.pending,
            vec![AchievementId::new("twin_lands")]
        );
        let again = reduce(&catalog, &next, &unlock, 0);
        assert_eq!(again.achievements.pending.len(), 1);

        let bogus = reduce(
            &catalog,
            &state,
            &Action::UnlockAchievement {
                achievement: AchievementId::new("nonexistent"),
            },
            0,
        );
        assert!(bogus.achievements.unlocked.is_empty());
    }

    #[test]
    fn load_replaces_the_state_and_rechecks_achievements() {
        let catalog = mini_catalog();
        let state = GameState::initial(&catalog, 0);
        let mut document = GameState::initial(&catalog, 0);
        document
            .biome_mut(BiomeId::LushForest)
            .resources
            .insert(wood(), 42.0);
        document.lifetime_stats.total_resources_gathered = 42.0;

        let next = reduce(
            &catalog,
            &state,
            &Action::Load {
                state: Box::new(document),
            },
            9_000,
        );
        assert_eq!(next.biome(BiomeId::LushForest).stock(&wood()), 42.0);
        // Conditions already met by the loaded document unlock at once.
        assert!(next
            .achievements
            .unlocked
            .contains(&AchievementId::new("first_gather")));
    }

    #[test]
    fn actions_roundtrip_through_serde() {
        let action = Action::StartExpedition {
            tier: ExpeditionTier::DeepExploration,
            food: vec![(FoodId::new("berries"), 12.0)],
        };
        let json = serde_json::to_string(&action).unwrap();
        assert!(json.contains("\"type\":\"start_expedition\""));
        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(back, action);
    }
}
