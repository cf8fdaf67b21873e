//! Experience accumulation and table-driven level growth
//!
//! Thresholds are cumulative-from-level: `EXP_TABLE[level - 1]` is the exp a
//! character at `level` must bank to advance. Stat growth per level is flat.

use serde::{Deserialize, Serialize};

/// Highest reachable level; experience keeps accumulating past it but no
/// further growth occurs.
pub const MAX_LEVEL: u32 = 10;

/// Exp required to advance from level `i + 1` to `i + 2`.
const EXP_TABLE: [u32; (MAX_LEVEL - 1) as usize] =
    [100, 200, 350, 550, 800, 1100, 1500, 2000, 2600];

/// Flat stat growth per level gained.
const HP_GROWTH: u32 = 10;
const MP_GROWTH: u32 = 5;
const ATTACK_GROWTH: u32 = 2;
const DEFENSE_GROWTH: u32 = 1;

/// Persistent player progression stats.
///
/// Owned by the save/profile layer; mutated only through [`add_experience`]
/// (which copies rather than mutating in place).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub level: u32,
    /// Exp banked toward the next level; unbounded at [`MAX_LEVEL`].
    pub exp: u32,
    pub hp: u32,
    pub max_hp: u32,
    pub mp: u32,
    pub max_mp: u32,
    pub attack: u32,
    pub defense: u32,
}

impl PlayerStats {
    /// Starting stats for a new game.
    pub fn new_game() -> Self {
        Self {
            level: 1,
            exp: 0,
            hp: 100,
            max_hp: 100,
            mp: 50,
            max_mp: 50,
            attack: 10,
            defense: 5,
        }
    }
}

/// Stat deltas for one level gained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUp {
    pub new_level: u32,
    pub hp_increase: u32,
    pub mp_increase: u32,
    pub attack_increase: u32,
    pub defense_increase: u32,
}

/// Result of granting experience: the updated stats and how many levels were
/// gained in this call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceOutcome {
    pub stats: PlayerStats,
    pub level_ups: u32,
}

/// Exp needed to advance from `level`, or None at/after [`MAX_LEVEL`].
pub fn exp_for_next_level(level: u32) -> Option<u32> {
    if level == 0 || level >= MAX_LEVEL {
        return None;
    }
    Some(EXP_TABLE[(level - 1) as usize])
}

/// Whether `exp` banked at `level` is enough to advance.
pub fn can_level_up(level: u32, exp: u32) -> bool {
    exp_for_next_level(level).is_some_and(|required| exp >= required)
}

/// Deltas for advancing one level, or None if not eligible.
pub fn process_level_up(level: u32, exp: u32) -> Option<LevelUp> {
    if !can_level_up(level, exp) {
        return None;
    }
    Some(LevelUp {
        new_level: level + 1,
        hp_increase: HP_GROWTH,
        mp_increase: MP_GROWTH,
        attack_increase: ATTACK_GROWTH,
        defense_increase: DEFENSE_GROWTH,
    })
}

/// Grant experience and resolve every pending level-up in one call.
///
/// Each level consumes its threshold from the banked exp, applies the flat
/// growth, and fully restores hp/mp to the new maximums. Stops at
/// [`MAX_LEVEL`]; residual exp is kept, not discarded. The input stats are
/// left untouched.
pub fn add_experience(stats: &PlayerStats, exp_gain: u32) -> ExperienceOutcome {
    let mut updated = stats.clone();
    updated.exp = updated.exp.saturating_add(exp_gain);
    let mut level_ups = 0;

    while let Some(level_up) = process_level_up(updated.level, updated.exp) {
        // can_level_up already checked exp >= required
        let required = exp_for_next_level(updated.level).unwrap_or(0);

        updated.exp -= required;
        updated.level = level_up.new_level;
        updated.max_hp += level_up.hp_increase;
        updated.max_mp += level_up.mp_increase;
        updated.attack += level_up.attack_increase;
        updated.defense += level_up.defense_increase;

        // Level-up fully restores both pools.
        updated.hp = updated.max_hp;
        updated.mp = updated.max_mp;

        level_ups += 1;
    }

    ExperienceOutcome {
        stats: updated,
        level_ups,
    }
}

/// Fraction of progress toward the next level, 1.0 at max level.
pub fn exp_progress(level: u32, exp: u32) -> f64 {
    match exp_for_next_level(level) {
        Some(required) => (f64::from(exp) / f64::from(required)).min(1.0),
        None => 1.0,
    }
}
