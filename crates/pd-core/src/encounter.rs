//! Random wild-monster encounters
//!
//! Called by the world layer once per player step onto encounter-eligible
//! terrain (the terrain check itself lives with the tilemap, not here).

use serde::{Deserialize, Serialize};

use crate::monster::{MonsterTable, MonsterTemplate};
use crate::rng::RandomSource;

/// Default chance of an encounter per qualifying step.
pub const DEFAULT_ENCOUNTER_RATE: f64 = 0.1;

/// Per-area encounter tuning, supplied per call by the world layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterConfig {
    /// Trigger probability in `[0, 1]`.
    pub encounter_rate: f64,
    /// Candidate monster ids, drawn uniformly.
    pub possible_monsters: Vec<String>,
}

impl Default for EncounterConfig {
    fn default() -> Self {
        Self {
            encounter_rate: DEFAULT_ENCOUNTER_RATE,
            possible_monsters: vec!["slime".to_string()],
        }
    }
}

/// Result of an encounter check.
///
/// `triggered` with no monster is a valid terminal outcome (the roll
/// succeeded but the candidate list was empty or named an unknown id);
/// callers treat it as "no encounter materialized".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterOutcome {
    pub triggered: bool,
    pub monster: Option<MonsterTemplate>,
}

/// Roll for a wild encounter; on trigger, pick which monster appears.
pub fn check_encounter(
    rng: &mut impl RandomSource,
    monsters: &MonsterTable,
    config: Option<&EncounterConfig>,
) -> EncounterOutcome {
    let default_config;
    let config = match config {
        Some(config) => config,
        None => {
            default_config = EncounterConfig::default();
            &default_config
        }
    };

    if !rng.chance(config.encounter_rate) {
        return EncounterOutcome {
            triggered: false,
            monster: None,
        };
    }

    EncounterOutcome {
        triggered: true,
        monster: select_random_monster(rng, &config.possible_monsters, monsters),
    }
}

/// Uniform pick from the candidate list.
///
/// None for an empty list or an id absent from the table.
pub fn select_random_monster(
    rng: &mut impl RandomSource,
    possible_monsters: &[String],
    monsters: &MonsterTable,
) -> Option<MonsterTemplate> {
    if possible_monsters.is_empty() {
        return None;
    }
    let id = &possible_monsters[rng.pick_index(possible_monsters.len())];
    monsters.get(id).cloned()
}

/// Base rate plus terrain/item modifiers, clamped to `[0, 1]`.
pub fn encounter_rate_with(base_rate: f64, modifier: f64) -> f64 {
    (base_rate + modifier).clamp(0.0, 1.0)
}
