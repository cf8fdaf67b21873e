//! Item vocabulary: categories, effects, stacks, loot entries

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Keyed table of item definitions supplied by the world layer.
pub type ItemDatabase = HashMap<String, Item>;

/// Item categories
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ItemCategory {
    Weapon,
    Armor,
    /// Usable from the inventory (and during battle).
    Consumable,
    Material,
    Key,
}

/// What a consumable does when used.
///
/// One variant per effect kind; `use_item`/`apply_effect` match exhaustively
/// so adding a variant is a compile-time-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ItemEffect {
    /// Restore up to this much HP, clamped at max.
    HealHp(u32),
    /// Restore up to this much MP, clamped at max.
    HealMp(u32),
    /// Clears the poison status. Status simulation lives outside the core;
    /// only the outcome message is produced here.
    CurePoison,
}

/// Static definition of an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: ItemCategory,
    pub stackable: bool,
    pub effect: Option<ItemEffect>,
}

impl Item {
    pub fn is_consumable(&self) -> bool {
        self.category == ItemCategory::Consumable
    }
}

/// One inventory slot: an item plus how many units the slot holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    pub item: Item,
    pub quantity: u32,
}

impl ItemStack {
    pub fn new(item: Item, quantity: u32) -> Self {
        Self { item, quantity }
    }

    /// Slot identity (the item id; stacks may share one across slots).
    pub fn id(&self) -> &str {
        &self.item.id
    }
}

/// One row of a monster's drop table, rolled independently of its siblings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LootEntry {
    pub item_id: String,
    /// Drop probability in `[0, 1]`.
    pub drop_rate: f64,
}
