//! Applies battle outcomes to the player and processes level-ups.

use super::player::Player;
use crate::combat::types::BattleOutcome;
use crate::game::constants::{MAX_HP_PER_LEVEL, XP_PER_LEVEL};

/// XP required to advance past `level`.
pub fn xp_for_next_level(level: u32) -> u64 {
    level as u64 * XP_PER_LEVEL
}

/// Total XP needed to climb `count` levels starting at `level`.
fn xp_for_levels(level: u32, count: u32) -> u128 {
    let (level, count) = (level as u128, count as u128);
    (count * level + count * count.saturating_sub(1) / 2) * XP_PER_LEVEL as u128
}

/// Number of consecutive level-ups `xp` pays for starting at `level`.
///
/// Solves `50k² + (100L - 50)k <= xp` for the largest `k`, then corrects the
/// float estimate against the exact integer cost.
fn affordable_levels(level: u32, xp: u64) -> u32 {
    let a = XP_PER_LEVEL as f64 / 2.0;
    let b = level as f64 * XP_PER_LEVEL as f64 - a;
    let estimate = ((b * b + 4.0 * a * xp as f64).sqrt() - b) / (2.0 * a);

    let max = u32::MAX - level;
    let mut count = (estimate.max(0.0) as u64).min(max as u64) as u32;
    while count > 0 && xp_for_levels(level, count) > xp as u128 {
        count -= 1;
    }
    while count < max && xp_for_levels(level, count + 1) <= xp as u128 {
        count += 1;
    }
    count
}

/// Adds XP and processes every level-up it pays for.
///
/// Each level-up raises max HP and fully heals. Overflow XP carries into the
/// next threshold, so a single large award can span several levels. XP
/// saturates at `u64::MAX`. Returns the number of level-ups.
pub fn apply_xp(player: &mut Player, xp_gain: u64) -> u32 {
    player.xp = player.xp.saturating_add(xp_gain);

    let levelups = affordable_levels(player.level, player.xp);
    if levelups > 0 {
        player.xp -= xp_for_levels(player.level, levelups) as u64;
        player.level += levelups;
        player.max_hp = player
            .max_hp
            .saturating_add(levelups.saturating_mul(MAX_HP_PER_LEVEL));
        player.hp = player.max_hp;
    }

    levelups
}

/// Returns the player snapshot after applying `outcome`.
pub fn apply_outcome(player: &Player, outcome: &BattleOutcome) -> Player {
    let mut next = player.clone();
    next.gold = next.gold.saturating_add(outcome.gold_gain);
    next.take_damage(outcome.hp_loss);
    apply_xp(&mut next, outcome.xp_gain);
    next
}
