use serde::{Deserialize, Serialize};

use crate::character::player::Player;
use crate::character::progression::xp_for_next_level;
use crate::combat::types::{default_monsters, Monster};
use crate::error::{Result, StoreError};
use crate::items::types::{default_items, Item};
use crate::quests::types::Quest;

/// The single persisted record: quests, catalogs and the player.
///
/// Fields are read through accessors; only the engine writes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    #[serde(default)]
    tasks: Vec<Quest>,
    #[serde(default = "default_monsters")]
    monsters: Vec<Monster>,
    #[serde(default)]
    player: Player,
    #[serde(default = "default_items")]
    items: Vec<Item>,
}

impl GameState {
    /// Fresh state with the default catalogs and a new player.
    pub fn new() -> Self {
        Self::with_catalogs(default_monsters(), default_items())
    }

    pub fn with_catalogs(monsters: Vec<Monster>, items: Vec<Item>) -> Self {
        Self {
            tasks: Vec::new(),
            monsters,
            player: Player::new(),
            items,
        }
    }

    /// Replaces the starting player. Intended for seeding a new game.
    pub fn with_player(mut self, player: Player) -> Self {
        self.player = player;
        self
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn quests(&self) -> &[Quest] {
        &self.tasks
    }

    pub fn monsters(&self) -> &[Monster] {
        &self.monsters
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn find_monster(&self, id: &str) -> Option<&Monster> {
        self.monsters.iter().find(|m| m.id == id)
    }

    pub fn find_item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Checks the player and monster invariants of a loaded record.
    pub fn validate(&self) -> Result<()> {
        let p = &self.player;
        if p.level == 0 {
            return Err(invalid("player level must be at least 1"));
        }
        if p.max_hp == 0 {
            return Err(invalid("player maxHp must be positive"));
        }
        if p.hp > p.max_hp {
            return Err(invalid(format!(
                "player hp {} exceeds maxHp {}",
                p.hp, p.max_hp
            )));
        }
        if p.xp >= xp_for_next_level(p.level) {
            return Err(invalid(format!(
                "player xp {} reaches the level {} threshold",
                p.xp, p.level
            )));
        }
        if let Some(monster) = self.monsters.iter().find(|m| m.hp == 0) {
            return Err(invalid(format!("monster {} has no hp", monster.id)));
        }
        Ok(())
    }

    pub(crate) fn set_player(&mut self, player: Player) {
        self.player = player;
    }

    pub(crate) fn push_quest(&mut self, quest: Quest) {
        self.tasks.push(quest);
    }

    pub(crate) fn quests_mut(&mut self) -> &mut [Quest] {
        &mut self.tasks
    }
}

fn invalid(reason: impl Into<String>) -> StoreError {
    StoreError::InvalidState(reason.into())
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_state() {
        let state = GameState::new();
        assert!(state.quests().is_empty());
        assert_eq!(state.monsters().len(), 3);
        assert_eq!(state.items().len(), 2);
        assert_eq!(state.player(), &Player::new());
    }

    #[test]
    fn test_lookups() {
        let state = GameState::new();
        assert_eq!(state.find_monster("m3").map(|m| m.name.as_str()), Some("Bandit"));
        assert_eq!(state.find_item("p2").map(|i| i.price), Some(25));
        assert!(state.find_monster("m9").is_none());
    }

    #[test]
    fn test_loads_original_blob_layout() {
        let json = r#"{
            "tasks": [],
            "monsters": [{"id":"m1","name":"Goblin","hp":50,"attack":8,"defense":3,"xpReward":20,"goldReward":10}],
            "player": {"level":2,"xp":40,"gold":7,"hp":88,"maxHp":120},
            "items": [{"id":"p1","name":"Minor Potion","type":"potion","effect":{"hpRestore":20},"price":10}]
        }"#;
        let state: GameState = serde_json::from_str(json).unwrap();

        assert_eq!(state.player().level, 2);
        assert_eq!(state.player().max_hp, 120);
        assert_eq!(state.monsters().len(), 1);
        assert_eq!(state.items()[0].effect.hp_restore, 20);
    }

    #[test]
    fn test_new_state_is_valid() {
        assert!(GameState::new().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_broken_player() {
        let cases = [
            Player {
                level: 0,
                ..Player::new()
            },
            Player {
                hp: 0,
                max_hp: 0,
                ..Player::new()
            },
            Player {
                hp: 150,
                ..Player::new()
            },
            Player {
                xp: 100,
                ..Player::new()
            },
        ];
        for player in cases {
            let state = GameState::new().with_player(player.clone());
            let err = state.validate().unwrap_err();
            assert!(
                matches!(err, StoreError::InvalidState(_)),
                "{:?} should be rejected",
                player
            );
        }
    }

    #[test]
    fn test_validate_rejects_zero_hp_monster() {
        let ghost = Monster::new("g", "Ghost", 0, 1, 1, 1, 1);
        let state = GameState::with_catalogs(vec![ghost], default_items());
        assert!(matches!(
            state.validate(),
            Err(StoreError::InvalidState(_))
        ));
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let state: GameState = serde_json::from_str("{}").unwrap();
        assert_eq!(state, GameState::new());
    }
}
