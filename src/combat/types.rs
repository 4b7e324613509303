use serde::{Deserialize, Serialize};
use std::fmt;

/// A monster template from the catalog. Never mutated by combat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Monster {
    pub id: String,
    pub name: String,
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub xp_reward: u64,
    pub gold_reward: u32,
}

impl Monster {
    pub fn new(
        id: &str,
        name: &str,
        hp: u32,
        attack: u32,
        defense: u32,
        xp_reward: u64,
        gold_reward: u32,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            hp,
            attack,
            defense,
            xp_reward,
            gold_reward,
        }
    }
}

/// The starting monster catalog.
pub fn default_monsters() -> Vec<Monster> {
    vec![
        Monster::new("m1", "Goblin", 50, 8, 3, 20, 10),
        Monster::new("m2", "Wolf", 60, 10, 4, 30, 15),
        Monster::new("m3", "Bandit", 80, 12, 6, 50, 25),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BattleResult {
    Win,
    Lose,
}

impl BattleResult {
    pub fn name(&self) -> &'static str {
        match self {
            BattleResult::Win => "win",
            BattleResult::Lose => "lose",
        }
    }
}

impl fmt::Display for BattleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of one resolved battle. Consumed once by the progression ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleOutcome {
    pub result: BattleResult,
    pub xp_gain: u64,
    pub gold_gain: u32,
    pub hp_loss: u32,
    /// Player HP when the battle ended (never negative).
    pub remaining_hp: u32,
    pub rounds: u32,
}

impl BattleOutcome {
    pub fn is_win(&self) -> bool {
        self.result == BattleResult::Win
    }

    /// Battle log line, e.g. `WIN: +20 XP, +10g, -21 HP`.
    pub fn summary(&self) -> String {
        format!(
            "{}: +{} XP, +{}g, -{} HP",
            self.result.name().to_uppercase(),
            self.xp_gain,
            self.gold_gain,
            self.hp_loss
        )
    }
}

/// One exchange of blows. `damage_taken` is 0 when the monster fell first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombatRound {
    pub round: u32,
    pub damage_dealt: u32,
    pub damage_taken: u32,
    pub player_hp: u32,
    pub monster_hp: u32,
}
