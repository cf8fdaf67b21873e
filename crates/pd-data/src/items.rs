//! Item definitions
//!
//! Shop stock, loot drops, and starting gear all resolve against this table.

use pd_core::{Item, ItemCategory, ItemDatabase, ItemEffect};

fn item(
    id: &str,
    name: &str,
    description: &str,
    category: ItemCategory,
    stackable: bool,
    effect: Option<ItemEffect>,
) -> Item {
    Item {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category,
        stackable,
        effect,
    }
}

/// All item definitions, keyed by id.
pub fn item_database() -> ItemDatabase {
    let mut database = ItemDatabase::new();
    for definition in [
        item(
            "herb",
            "Herb",
            "A bitter leaf that restores 30 HP.",
            ItemCategory::Consumable,
            true,
            Some(ItemEffect::HealHp(30)),
        ),
        item(
            "mana_herb",
            "Mana Herb",
            "A fragrant leaf that restores 20 MP.",
            ItemCategory::Consumable,
            true,
            Some(ItemEffect::HealMp(20)),
        ),
        item(
            "antidote",
            "Antidote",
            "Neutralizes poison.",
            ItemCategory::Consumable,
            true,
            Some(ItemEffect::CurePoison),
        ),
        item(
            "bronze_sword",
            "Bronze Sword",
            "A plain, reliable blade.",
            ItemCategory::Weapon,
            false,
            None,
        ),
        item(
            "leather_armor",
            "Leather Armor",
            "Sturdy enough for the grasslands.",
            ItemCategory::Armor,
            false,
            None,
        ),
    ] {
        database.insert(definition.id.clone(), definition);
    }
    database
}

/// Look up a single item by id.
pub fn get_item(id: &str) -> Option<Item> {
    item_database().remove(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(get_item("herb").unwrap().name, "Herb");
        assert!(get_item("excalibur").is_none());
    }

    #[test]
    fn test_consumables_carry_effects() {
        for definition in item_database().values() {
            if definition.category == ItemCategory::Consumable {
                assert!(
                    definition.effect.is_some(),
                    "{} is consumable but has no effect",
                    definition.id
                );
            } else {
                assert!(definition.effect.is_none());
            }
        }
    }

    #[test]
    fn test_equipment_does_not_stack() {
        for definition in item_database().values() {
            if matches!(
                definition.category,
                ItemCategory::Weapon | ItemCategory::Armor
            ) {
                assert!(!definition.stackable, "{} should not stack", definition.id);
            }
        }
    }
}
