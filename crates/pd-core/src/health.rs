//! Bounded health pool with damage/heal accounting
//!
//! Generic clamped life counter, independent of any specific entity. Both
//! player and monster HP follow these semantics; battle orchestrators either
//! hold a [`Health`] per combatant or mirror its clamping on their own stat
//! copies.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Construction and mutation errors for [`Health`].
///
/// These indicate a logic bug in the caller and should surface loudly during
/// development rather than be clamped away.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HealthError {
    #[error("max health must be positive")]
    ZeroMaxHealth,
}

/// Result of applying damage to a health pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageOutcome {
    /// Damage actually applied, capped at the health remaining before the hit.
    pub damage: u32,
    /// Health after the hit.
    pub new_health: u32,
    /// True when the hit reduced health to zero.
    pub is_dead: bool,
    /// Portion of the hit wasted past zero health.
    pub overkill: u32,
}

/// Result of healing a health pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealOutcome {
    /// Amount actually restored, capped at missing health.
    pub healed: u32,
    /// Health after the heal.
    pub new_health: u32,
    /// Portion of the heal wasted past full health.
    pub overheal: u32,
}

/// Plain snapshot of a health pool, for save data and UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthSnapshot {
    pub current: u32,
    pub max: u32,
    pub is_dead: bool,
}

/// Clamped health pool: `0 <= current <= max`, `max > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    current: u32,
    max: u32,
}

impl Health {
    /// Create a pool at full health.
    pub fn new(max: u32) -> Result<Self, HealthError> {
        Self::with_current(max, max)
    }

    /// Create a pool with an explicit starting value, clamped to `[0, max]`.
    pub fn with_current(max: u32, current: u32) -> Result<Self, HealthError> {
        if max == 0 {
            return Err(HealthError::ZeroMaxHealth);
        }
        Ok(Self {
            current: current.min(max),
            max,
        })
    }

    /// Current health value
    pub const fn current(&self) -> u32 {
        self.current
    }

    /// Maximum health value
    pub const fn max(&self) -> u32 {
        self.max
    }

    /// Health fraction in `[0, 1]`.
    pub fn percent(&self) -> f64 {
        f64::from(self.current) / f64::from(self.max)
    }

    /// Check if dead (health is zero)
    pub const fn is_dead(&self) -> bool {
        self.current == 0
    }

    /// Check if at full health
    pub const fn is_full(&self) -> bool {
        self.current >= self.max
    }

    /// Apply damage, clamping at zero.
    pub fn take_damage(&mut self, amount: u32) -> DamageOutcome {
        let before = self.current;
        let damage = amount.min(before);
        self.current = before - damage;

        DamageOutcome {
            damage,
            new_health: self.current,
            is_dead: self.current == 0,
            overkill: amount - damage,
        }
    }

    /// Restore health, clamping at max.
    pub fn heal(&mut self, amount: u32) -> HealOutcome {
        let missing = self.max - self.current;
        let healed = amount.min(missing);
        self.current += healed;

        HealOutcome {
            healed,
            new_health: self.current,
            overheal: amount - healed,
        }
    }

    /// Set health directly, clamped to `[0, max]`.
    pub fn set_health(&mut self, value: u32) {
        self.current = value.min(self.max);
    }

    /// Change the maximum.
    ///
    /// With `rescale_current`, current health keeps its fraction of the old
    /// max (`round(old_percent * new_max)`); otherwise it is only clamped to
    /// the new max.
    pub fn set_max_health(&mut self, new_max: u32, rescale_current: bool) -> Result<(), HealthError> {
        if new_max == 0 {
            return Err(HealthError::ZeroMaxHealth);
        }

        if rescale_current {
            let ratio = self.percent();
            self.current = (ratio * f64::from(new_max)).round() as u32;
        }
        self.max = new_max;
        self.current = self.current.min(self.max);
        Ok(())
    }

    /// Reset to full health.
    pub fn reset(&mut self) {
        self.current = self.max;
    }

    /// Plain-data snapshot for persistence.
    pub fn snapshot(&self) -> HealthSnapshot {
        HealthSnapshot {
            current: self.current,
            max: self.max,
            is_dead: self.is_dead(),
        }
    }

    /// Rebuild a pool from a snapshot.
    pub fn from_snapshot(snapshot: &HealthSnapshot) -> Result<Self, HealthError> {
        Self::with_current(snapshot.max, snapshot.current)
    }
}
