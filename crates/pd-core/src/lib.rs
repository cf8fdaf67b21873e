//! pd-core: Battle and progression rules for a tile RPG
//!
//! This crate contains the turn-based combat, leveling, inventory, and
//! random-encounter rules with no engine or I/O dependencies. It is designed
//! to be pure and testable: every function is synchronous, every randomized
//! rule draws through an injectable [`rng::RandomSource`], and all gameplay
//! "failures" (item missing, inventory full, no encounter) are plain result
//! values the orchestrating scene code can branch on.
//!
//! Rendering, tilemaps, input, and save files live in the presentation and
//! persistence layers; they call in here with plain data and read plain
//! results back.

pub mod combat;
pub mod encounter;
pub mod health;
pub mod inventory;
pub mod item;
pub mod level;
pub mod monster;
pub mod rng;

pub use combat::{BattleRewards, BattleStats, calculate_damage, calculate_rewards, try_escape};
pub use encounter::{
    DEFAULT_ENCOUNTER_RATE, EncounterConfig, EncounterOutcome, check_encounter,
    encounter_rate_with, select_random_monster,
};
pub use health::{DamageOutcome, HealOutcome, Health, HealthError, HealthSnapshot};
pub use inventory::{
    AddItemOutcome, EffectOutcome, MAX_INVENTORY_SLOTS, MAX_STACK_SIZE, RemoveItemOutcome,
    UseItemOutcome, add_item, apply_effect, available_slots, consumables, filter_by_category,
    get_item, get_item_count, is_full, remove_item, roll_loot, use_item,
};
pub use item::{Item, ItemCategory, ItemDatabase, ItemEffect, ItemStack, LootEntry};
pub use level::{
    ExperienceOutcome, LevelUp, MAX_LEVEL, PlayerStats, add_experience, can_level_up,
    exp_for_next_level, exp_progress, process_level_up,
};
pub use monster::{MonsterStats, MonsterTable, MonsterTemplate};
pub use rng::{GameRng, RandomSource, ScriptedRng};
