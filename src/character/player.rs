use serde::{Deserialize, Serialize};

use crate::game::constants::*;

/// The player's persistent stats.
///
/// `hp` never exceeds `max_hp`, and after leveling `xp` is always below the
/// current level's threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub level: u32,
    pub xp: u64,
    pub gold: u32,
    pub hp: u32,
    pub max_hp: u32,
}

impl Player {
    pub fn new() -> Self {
        Self {
            level: STARTING_LEVEL,
            xp: 0,
            gold: STARTING_GOLD,
            hp: STARTING_HP,
            max_hp: STARTING_HP,
        }
    }

    /// Attack power derived from level.
    pub fn attack(&self) -> u32 {
        self.level.saturating_mul(ATTACK_PER_LEVEL)
    }

    /// Defense derived from level.
    pub fn defense(&self) -> u32 {
        self.level.saturating_mul(DEFENSE_PER_LEVEL)
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Restores HP, discarding anything above `max_hp`.
    pub fn heal(&mut self, amount: u32) {
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
