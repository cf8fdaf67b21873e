//! Monster templates and battle-time stat bundles
//!
//! Templates are static data keyed by id (loaded by the world layer, see
//! `pd-data`); a [`MonsterStats`] instance is copied from a template when a
//! battle starts and discarded when it ends.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Keyed table of monster templates supplied by the world layer.
pub type MonsterTable = HashMap<String, MonsterTemplate>;

/// Static definition of a monster species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterTemplate {
    pub id: String,
    pub name: String,
    /// Starting (and maximum) hit points.
    pub hp: u32,
    pub attack_min: u32,
    pub attack_max: u32,
    pub defense: u32,
    /// Experience awarded on defeat.
    pub exp: u32,
    /// Gold awarded on defeat.
    pub gold: u32,
}

impl MonsterTemplate {
    /// Copy the template into a mutable battle instance at full health.
    pub fn spawn(&self) -> MonsterStats {
        MonsterStats {
            id: self.id.clone(),
            name: self.name.clone(),
            hp: self.hp,
            max_hp: self.hp,
            attack_min: self.attack_min,
            attack_max: self.attack_max,
            defense: self.defense,
            exp: self.exp,
            gold: self.gold,
        }
    }
}

/// Per-battle monster state, owned by the battle orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterStats {
    pub id: String,
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
    pub attack_min: u32,
    pub attack_max: u32,
    pub defense: u32,
    pub exp: u32,
    pub gold: u32,
}

impl MonsterStats {
    pub const fn is_dead(&self) -> bool {
        self.hp == 0
    }
}
