//! Deterministic turn-based combat resolution.
//!
//! The player always strikes first. Every hit deals at least
//! [`MIN_DAMAGE_PER_HIT`], so each round makes progress and the fight ends.

use super::types::{BattleOutcome, BattleResult, CombatRound, Monster};
use crate::character::player::Player;
use crate::game::constants::MIN_DAMAGE_PER_HIT;

/// Damage one hit deals after defense, floored at [`MIN_DAMAGE_PER_HIT`].
pub fn calculate_damage(attack: u32, defense: u32) -> u32 {
    attack.saturating_sub(defense).max(MIN_DAMAGE_PER_HIT)
}

/// Upper bound on rounds before the monster falls.
pub fn max_rounds(player: &Player, monster: &Monster) -> u32 {
    monster
        .hp
        .div_ceil(calculate_damage(player.attack(), monster.defense))
}

/// Resolves a battle without touching either side.
pub fn resolve(player: &Player, monster: &Monster) -> BattleOutcome {
    resolve_with_log(player, monster).0
}

/// Resolves a battle and returns the per-round log alongside the outcome.
///
/// A player who enters at 0 HP loses immediately with no rounds fought.
pub fn resolve_with_log(player: &Player, monster: &Monster) -> (BattleOutcome, Vec<CombatRound>) {
    let dealt = calculate_damage(player.attack(), monster.defense);
    let taken = calculate_damage(monster.attack, player.defense());

    let mut player_hp = player.hp;
    let mut monster_hp = monster.hp;
    let mut rounds = Vec::new();

    while player_hp > 0 && monster_hp > 0 {
        monster_hp = monster_hp.saturating_sub(dealt);

        let damage_taken = if monster_hp > 0 {
            player_hp = player_hp.saturating_sub(taken);
            taken
        } else {
            0
        };

        rounds.push(CombatRound {
            round: rounds.len() as u32 + 1,
            damage_dealt: dealt,
            damage_taken,
            player_hp,
            monster_hp,
        });
    }

    let result = if player_hp > 0 {
        BattleResult::Win
    } else {
        BattleResult::Lose
    };

    let (xp_gain, gold_gain) = match result {
        BattleResult::Win => (monster.xp_reward, monster.gold_reward),
        BattleResult::Lose => (0, 0),
    };

    let outcome = BattleOutcome {
        result,
        xp_gain,
        gold_gain,
        hp_loss: player.hp - player_hp,
        remaining_hp: player_hp,
        rounds: rounds.len() as u32,
    };

    (outcome, rounds)
}
