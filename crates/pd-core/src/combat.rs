//! Turn-based combat arithmetic
//!
//! Stateless, one function call per action. The battle orchestrator owns the
//! turn loop and both combatants' stat copies; it calls in here for the
//! numbers and applies the results itself.

use serde::{Deserialize, Serialize};

use crate::level::PlayerStats;
use crate::monster::MonsterTemplate;
use crate::rng::RandomSource;

/// Experience and gold granted for a defeated monster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleRewards {
    pub exp: u32,
    pub gold: u32,
}

/// Player-side battle snapshot, copied from [`PlayerStats`] at battle start.
///
/// The persistent stats stay untouched during the fight; the orchestrator
/// merges surviving hp/mp back when the battle ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleStats {
    pub hp: u32,
    pub max_hp: u32,
    pub mp: u32,
    pub max_mp: u32,
    pub attack: u32,
    pub defense: u32,
}

impl From<&PlayerStats> for BattleStats {
    fn from(stats: &PlayerStats) -> Self {
        Self {
            hp: stats.hp,
            max_hp: stats.max_hp,
            mp: stats.mp,
            max_mp: stats.max_mp,
            attack: stats.attack,
            defense: stats.defense,
        }
    }
}

/// Roll one attack's damage.
///
/// Attack power is integer-uniform in `[attack_min, attack_max]`; the
/// defender soaks half their defense (integer division). Minimum damage is
/// always 1, however lopsided the defense.
pub fn calculate_damage(
    rng: &mut impl RandomSource,
    attack_min: u32,
    attack_max: u32,
    defender_defense: u32,
) -> u32 {
    let attack_power = rng.roll_range(attack_min, attack_max);
    attack_power.saturating_sub(defender_defense / 2).max(1)
}

/// Roll an escape attempt: flat 50%, no stat modifier.
pub fn try_escape(rng: &mut impl RandomSource) -> bool {
    rng.chance(0.5)
}

/// Rewards for defeating a monster: a direct passthrough of its template.
pub fn calculate_rewards(monster: &MonsterTemplate) -> BattleRewards {
    BattleRewards {
        exp: monster.exp,
        gold: monster.gold,
    }
}
