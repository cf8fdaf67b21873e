//! pd-data: Static game data for a tile RPG
//!
//! Contains monster templates, item definitions, and drop tables consumed by
//! the `pd-core` rules through their table parameters.

pub mod items;
pub mod monsters;

pub use items::{get_item, item_database};
pub use monsters::{get_monster, loot_table_for, monster_table};

#[cfg(test)]
mod tests {
    use super::*;
    use pd_core::{EncounterConfig, ScriptedRng, check_encounter, roll_loot};

    #[test]
    fn test_default_encounter_resolves_against_data() {
        let table = monster_table();
        let mut rng = ScriptedRng::new(vec![0.05, 0.0]);
        let outcome = check_encounter(&mut rng, &table, Some(&EncounterConfig::default()));
        assert!(outcome.triggered);
        assert_eq!(outcome.monster.unwrap().id, "slime");
    }

    #[test]
    fn test_slime_loot_rolls_against_database() {
        let database = item_database();
        let mut rng = ScriptedRng::new(vec![0.0]);
        let drops = roll_loot(&mut rng, &loot_table_for("slime"), &database);
        assert_eq!(drops.len(), 1);
        assert_eq!(drops[0].item.id, "herb");
    }
}
