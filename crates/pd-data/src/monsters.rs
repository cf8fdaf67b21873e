//! Monster definitions and drop tables
//!
//! The world scene loads this table once and hands it to
//! `pd_core::encounter::check_encounter`; drop tables go to
//! `pd_core::inventory::roll_loot` on victory.

use pd_core::{LootEntry, MonsterTable, MonsterTemplate};

fn template(
    id: &str,
    name: &str,
    hp: u32,
    attack_min: u32,
    attack_max: u32,
    defense: u32,
    exp: u32,
    gold: u32,
) -> MonsterTemplate {
    MonsterTemplate {
        id: id.to_string(),
        name: name.to_string(),
        hp,
        attack_min,
        attack_max,
        defense,
        exp,
        gold,
    }
}

/// All monster templates, keyed by id.
pub fn monster_table() -> MonsterTable {
    let mut table = MonsterTable::new();
    for monster in [
        template("slime", "Slime", 30, 3, 6, 2, 10, 5),
        template("goblin", "Goblin", 50, 8, 12, 4, 20, 15),
        template("bat", "Cave Bat", 22, 4, 7, 1, 12, 8),
    ] {
        table.insert(monster.id.clone(), monster);
    }
    table
}

/// Look up a single template by id.
pub fn get_monster(id: &str) -> Option<MonsterTemplate> {
    monster_table().remove(id)
}

/// Drop table for a monster id. Unknown ids drop nothing.
pub fn loot_table_for(id: &str) -> Vec<LootEntry> {
    let entry = |item_id: &str, drop_rate: f64| LootEntry {
        item_id: item_id.to_string(),
        drop_rate,
    };

    match id {
        "slime" => vec![entry("herb", 0.3)],
        "goblin" => vec![entry("herb", 0.2), entry("bronze_sword", 0.05)],
        "bat" => vec![entry("antidote", 0.15), entry("mana_herb", 0.1)],
        _ => Vec::new(),
    }
}
