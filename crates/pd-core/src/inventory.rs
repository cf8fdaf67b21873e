//! Slot-bounded, stack-aware inventory
//!
//! Pure functions over an immutable-in, new-copy-out slot list. The holder
//! (save/profile layer) owns the canonical `Vec<ItemStack>` and persists
//! whatever these functions hand back. Gameplay failures (item missing,
//! wrong category, inventory full) are plain result fields, never errors.

use crate::item::{Item, ItemCategory, ItemDatabase, ItemEffect, ItemStack, LootEntry};
use crate::rng::RandomSource;

/// Maximum number of occupied slots.
pub const MAX_INVENTORY_SLOTS: usize = 20;

/// Maximum units a single stackable slot holds.
pub const MAX_STACK_SIZE: u32 = 99;

/// Outcome of [`add_item`]. Partial fills are first-class: check
/// `remaining_quantity`, not just `success`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddItemOutcome {
    /// True when at least one unit was added.
    pub success: bool,
    pub added_quantity: u32,
    /// Units that did not fit.
    pub remaining_quantity: u32,
    pub message: String,
}

/// Outcome of [`remove_item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveItemOutcome {
    /// True when a matching slot existed.
    pub success: bool,
    /// Actual units removed; may be less than requested.
    pub removed_quantity: u32,
}

/// Outcome of [`use_item`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UseItemOutcome {
    pub success: bool,
    pub effect: Option<ItemEffect>,
    pub message: String,
}

/// Numeric result of applying an item effect to hp/mp pools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectOutcome {
    pub hp: u32,
    pub mp: u32,
    pub message: String,
}

/// Add `quantity` units of `item`, best effort.
///
/// Stackables first top up an existing same-id stack, then spill into new
/// slots of up to [`MAX_STACK_SIZE`]. Non-stackables always get their own
/// slot holding one unit. Slot creation stops at [`MAX_INVENTORY_SLOTS`].
pub fn add_item(
    inventory: &[ItemStack],
    item: &Item,
    quantity: u32,
) -> (Vec<ItemStack>, AddItemOutcome) {
    let mut updated = inventory.to_vec();
    let mut remaining = quantity;
    let mut added = 0;

    if item.stackable {
        if let Some(existing) = updated.iter_mut().find(|stack| stack.id() == item.id) {
            let space = MAX_STACK_SIZE.saturating_sub(existing.quantity);
            let to_add = space.min(remaining);
            existing.quantity += to_add;
            added += to_add;
            remaining -= to_add;
        }
    }

    while remaining > 0 && updated.len() < MAX_INVENTORY_SLOTS {
        let to_add = if item.stackable {
            MAX_STACK_SIZE.min(remaining)
        } else {
            1
        };
        updated.push(ItemStack::new(item.clone(), to_add));
        added += to_add;
        remaining -= to_add;

        // Non-stackables only ever add a single unit per call.
        if !item.stackable {
            remaining = 0;
        }
    }

    let success = added > 0;
    let message = if success && remaining > 0 {
        format!("Obtained {} x{} (inventory full)", item.name, added)
    } else if success {
        format!("Obtained {} x{}", item.name, added)
    } else {
        "Inventory is full.".to_string()
    };

    (
        updated,
        AddItemOutcome {
            success,
            added_quantity: added,
            remaining_quantity: remaining,
            message,
        },
    )
}

/// Remove up to `quantity` units from the first slot matching `item_id`.
///
/// Only one slot is drained even when the same id is split across several
/// stacks; the slot is deleted when it empties.
pub fn remove_item(
    inventory: &[ItemStack],
    item_id: &str,
    quantity: u32,
) -> (Vec<ItemStack>, RemoveItemOutcome) {
    let Some(index) = inventory.iter().position(|stack| stack.id() == item_id) else {
        return (
            inventory.to_vec(),
            RemoveItemOutcome {
                success: false,
                removed_quantity: 0,
            },
        );
    };

    let mut updated = inventory.to_vec();
    let to_remove = updated[index].quantity.min(quantity);
    updated[index].quantity -= to_remove;

    if updated[index].quantity == 0 {
        updated.remove(index);
    }

    (
        updated,
        RemoveItemOutcome {
            success: true,
            removed_quantity: to_remove,
        },
    )
}

/// Consume one unit of a consumable and surface its effect.
///
/// Fails (as a result value) when the item is absent or not a consumable;
/// the returned inventory is an unchanged copy in that case.
pub fn use_item(inventory: &[ItemStack], item_id: &str) -> (Vec<ItemStack>, UseItemOutcome) {
    let Some(stack) = inventory.iter().find(|stack| stack.id() == item_id) else {
        return (
            inventory.to_vec(),
            UseItemOutcome {
                success: false,
                effect: None,
                message: "Item not found.".to_string(),
            },
        );
    };

    if !stack.item.is_consumable() {
        return (
            inventory.to_vec(),
            UseItemOutcome {
                success: false,
                effect: None,
                message: "That item cannot be used.".to_string(),
            },
        );
    }

    let effect = stack.item.effect;
    let message = format!("Used {}.", stack.item.name);
    let (updated, _) = remove_item(inventory, item_id, 1);

    (
        updated,
        UseItemOutcome {
            success: true,
            effect,
            message,
        },
    )
}

/// First slot holding `item_id`, if any.
pub fn get_item<'a>(inventory: &'a [ItemStack], item_id: &str) -> Option<&'a ItemStack> {
    inventory.iter().find(|stack| stack.id() == item_id)
}

/// Total units of `item_id` across every stack.
pub fn get_item_count(inventory: &[ItemStack], item_id: &str) -> u32 {
    inventory
        .iter()
        .filter(|stack| stack.id() == item_id)
        .map(|stack| stack.quantity)
        .sum()
}

/// Whether every slot is occupied.
pub fn is_full(inventory: &[ItemStack]) -> bool {
    inventory.len() >= MAX_INVENTORY_SLOTS
}

/// Unoccupied slot count.
pub fn available_slots(inventory: &[ItemStack]) -> usize {
    MAX_INVENTORY_SLOTS.saturating_sub(inventory.len())
}

/// Slots of a given category.
pub fn filter_by_category(inventory: &[ItemStack], category: ItemCategory) -> Vec<ItemStack> {
    inventory
        .iter()
        .filter(|stack| stack.item.category == category)
        .cloned()
        .collect()
}

/// Slots usable during battle.
pub fn consumables(inventory: &[ItemStack]) -> Vec<ItemStack> {
    filter_by_category(inventory, ItemCategory::Consumable)
}

/// Apply an item effect to hp/mp pools, clamping at the maximums.
///
/// Heal messages report the amount actually restored. `CurePoison` leaves
/// the numbers alone; the status system lives outside the core.
pub fn apply_effect(
    effect: ItemEffect,
    current_hp: u32,
    max_hp: u32,
    current_mp: u32,
    max_mp: u32,
) -> EffectOutcome {
    match effect {
        ItemEffect::HealHp(value) => {
            let healed = value.min(max_hp.saturating_sub(current_hp));
            EffectOutcome {
                hp: current_hp + healed,
                mp: current_mp,
                message: format!("Restored {} HP.", healed),
            }
        }
        ItemEffect::HealMp(value) => {
            let restored = value.min(max_mp.saturating_sub(current_mp));
            EffectOutcome {
                hp: current_hp,
                mp: current_mp + restored,
                message: format!("Restored {} MP.", restored),
            }
        }
        ItemEffect::CurePoison => EffectOutcome {
            hp: current_hp,
            mp: current_mp,
            message: "The poison wore off.".to_string(),
        },
    }
}

/// Roll a defeated monster's drop table.
///
/// Each entry rolls independently (`draw < drop_rate`); several entries can
/// drop from one kill. Entries whose id is missing from the database are
/// skipped. One unit per successful entry.
pub fn roll_loot(
    rng: &mut impl RandomSource,
    loot_table: &[LootEntry],
    item_database: &ItemDatabase,
) -> Vec<ItemStack> {
    let mut drops = Vec::new();

    for entry in loot_table {
        if rng.chance(entry.drop_rate) {
            if let Some(item) = item_database.get(&entry.item_id) {
                drops.push(ItemStack::new(item.clone(), 1));
            }
        }
    }

    drops
}
