use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Potion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemEffect {
    #[serde(default)]
    pub hp_restore: u32,
}

/// A shop catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub effect: ItemEffect,
    pub price: u32,
}

impl Item {
    pub fn potion(id: &str, name: &str, hp_restore: u32, price: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            item_type: ItemType::Potion,
            effect: ItemEffect { hp_restore },
            price,
        }
    }
}

/// The starting shop catalog.
pub fn default_items() -> Vec<Item> {
    vec![
        Item::potion("p1", "Minor Potion", 20, 10),
        Item::potion("p2", "Major Potion", 50, 25),
    ]
}
