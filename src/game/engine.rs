//! The game engine: sole owner and writer of [`GameState`].
//!
//! Each entry point runs one pipeline synchronously, publishes the resulting
//! events, and returns a typed result. Rejected operations leave the state
//! untouched.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::events::{EventBus, EventSubscriber, GameEvent};
use super::game_state::GameState;
use crate::character::player::Player;
use crate::character::progression::apply_outcome;
use crate::combat::logic::resolve_with_log;
use crate::combat::types::{BattleOutcome, CombatRound, Monster};
use crate::config::GameConfig;
use crate::error::Rejection;
use crate::items::shop::purchase;
use crate::quests::logic::{complete_quest, create_quest, find_pending_quest, pending_quests};
use crate::quests::types::Quest;

/// Everything that happened when a quest was completed.
#[derive(Debug, Clone, PartialEq)]
pub struct BattleReport {
    pub quest: Quest,
    pub monster: Monster,
    pub outcome: BattleOutcome,
    pub rounds: Vec<CombatRound>,
    pub player: Player,
    pub level_ups: u32,
}

pub struct GameEngine<R: Rng = StdRng> {
    state: GameState,
    bus: EventBus,
    rng: R,
}

impl GameEngine<StdRng> {
    /// Engine seeded from `config.seed` when set.
    pub fn from_config(state: GameState, config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(state, rng)
    }
}

impl<R: Rng> GameEngine<R> {
    pub fn with_rng(state: GameState, rng: R) -> Self {
        Self {
            state,
            bus: EventBus::new(),
            rng,
        }
    }

    pub fn subscribe<S: EventSubscriber + 'static>(&mut self, subscriber: S) {
        self.bus.subscribe(subscriber);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn player(&self) -> &Player {
        self.state.player()
    }

    pub fn pending_quests(&self) -> Vec<&Quest> {
        pending_quests(self.state.quests()).collect()
    }

    /// Installs a loaded state, replacing the current one.
    pub fn load_state(&mut self, state: GameState) {
        self.state = state;
        tracing::debug!(quests = self.state.quests().len(), "state loaded");
        self.bus.publish(&GameEvent::StateLoaded);
    }

    /// Creates a quest bound to a random monster.
    pub fn on_quest_added(&mut self, title: &str, description: &str) -> Result<Quest, Rejection> {
        let quest = create_quest(
            title,
            description,
            self.state.monsters(),
            Utc::now().timestamp(),
            &mut self.rng,
        )
        .inspect_err(|e| tracing::warn!("quest not created: {}", e))?;

        tracing::info!(quest_id = %quest.id, monster = %quest.monster_id, "quest added");
        self.state.push_quest(quest.clone());
        self.bus.publish(&GameEvent::QuestAdded {
            quest: quest.clone(),
        });
        Ok(quest)
    }

    /// Completes a quest, fights its monster once, and applies the outcome.
    pub fn on_quest_completed(&mut self, quest_id: &str) -> Result<BattleReport, Rejection> {
        let monster = self
            .lookup_quest_monster(quest_id)
            .inspect_err(|e| tracing::warn!("quest completion rejected: {}", e))?;

        let quest = complete_quest(self.state.quests_mut(), quest_id, Utc::now().timestamp())?;

        let before = self.state.player().clone();
        let (outcome, rounds) = resolve_with_log(&before, &monster);
        let player = apply_outcome(&before, &outcome);
        let level_ups = player.level - before.level;
        self.state.set_player(player.clone());

        tracing::debug!(
            rounds = outcome.rounds,
            remaining_hp = outcome.remaining_hp,
            "battle resolved"
        );
        tracing::info!(quest_id, monster = %monster.name, "{}", outcome.summary());

        self.bus.publish(&GameEvent::BattleResolved {
            quest_id: quest_id.to_string(),
            monster_name: monster.name.clone(),
            result: outcome.result,
            xp_gain: outcome.xp_gain,
            gold_gain: outcome.gold_gain,
            hp_loss: outcome.hp_loss,
            player: player.clone(),
        });
        if level_ups > 0 {
            tracing::info!(level = player.level, "level up");
            self.bus.publish(&GameEvent::LeveledUp {
                level: player.level,
                max_hp: player.max_hp,
            });
        }

        Ok(BattleReport {
            quest,
            monster,
            outcome,
            rounds,
            player,
            level_ups,
        })
    }

    /// Buys one item from the shop catalog.
    pub fn on_purchase_requested(&mut self, item_id: &str) -> Result<Player, Rejection> {
        let result = self
            .state
            .find_item(item_id)
            .ok_or_else(|| Rejection::UnknownItem(item_id.to_string()))
            .and_then(|item| purchase(self.state.player(), item, None));

        match result {
            Ok(player) => {
                tracing::info!(item_id, gold = player.gold, hp = player.hp, "purchase completed");
                self.state.set_player(player.clone());
                self.bus.publish(&GameEvent::PurchaseCompleted {
                    item_id: item_id.to_string(),
                    player: player.clone(),
                });
                Ok(player)
            }
            Err(reason) => {
                tracing::warn!(item_id, "purchase rejected: {}", reason);
                self.bus.publish(&GameEvent::PurchaseRejected {
                    item_id: item_id.to_string(),
                    reason: reason.clone(),
                });
                Err(reason)
            }
        }
    }

    fn lookup_quest_monster(&self, quest_id: &str) -> Result<Monster, Rejection> {
        let quest = find_pending_quest(self.state.quests(), quest_id)?;
        self.state
            .find_monster(&quest.monster_id)
            .cloned()
            .ok_or_else(|| Rejection::UnknownMonster(quest.monster_id.clone()))
    }
}
