//! Potion purchases against the player's gold.

use super::types::{Item, ItemType};
use crate::character::player::Player;
use crate::error::Rejection;

/// Buys `item` and returns the updated player.
///
/// `price_override` replaces the catalog price when present. On rejection the
/// player is untouched.
pub fn purchase(
    player: &Player,
    item: &Item,
    price_override: Option<u32>,
) -> Result<Player, Rejection> {
    let price = price_override.unwrap_or(item.price);
    if player.gold < price {
        return Err(Rejection::InsufficientFunds {
            price,
            gold: player.gold,
        });
    }

    let mut next = player.clone();
    next.gold -= price;
    match item.item_type {
        ItemType::Potion => next.heal(item.effect.hp_restore),
    }
    Ok(next)
}
