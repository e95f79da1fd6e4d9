//! Live combat participants.

use crate::world::{EnemyKind, EnemyTemplate};

/// A live combat participant spawned from an [`EnemyTemplate`].
///
/// Health starts at the template maximum and only ever decreases; it clamps
/// at 0 and stays there. The instance is discarded when combat ends.
#[derive(Clone, Debug, PartialEq)]
pub struct EnemyInstance {
    pub kind: EnemyKind,
    pub name: String,
    health: u32,
    pub max_health: u32,
    /// Inclusive damage bounds.
    pub damage_range: (u32, u32),
    /// Probability in [0, 1] that this enemy's attack lands.
    pub hit_chance: f64,
    pub description: String,
}

impl EnemyInstance {
    /// Spawn a fresh instance at full health.
    pub fn from_template(kind: EnemyKind, template: &EnemyTemplate) -> Self {
        Self {
            kind,
            name: template.name.clone(),
            health: template.max_health,
            max_health: template.max_health,
            damage_range: template.damage_range,
            hit_chance: template.hit_chance,
            description: template.description.clone(),
        }
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    /// Apply damage and report whether the enemy is now defeated.
    pub fn take_damage(&mut self, damage: u32) -> bool {
        self.health = self.health.saturating_sub(damage);
        self.is_defeated()
    }
}

/// Transient state for one active fight.
///
/// Exists only while combat is running; the engine drops it on win, loss, or
/// successful flee. Invariant: `shield_active` exactly when
/// `shield_rounds > 0`.
#[derive(Clone, Debug, PartialEq)]
pub struct CombatSession {
    pub enemy: EnemyInstance,
    pub shield_active: bool,
    pub shield_rounds: u32,
}

impl CombatSession {
    pub fn new(enemy: EnemyInstance) -> Self {
        Self {
            enemy,
            shield_active: false,
            shield_rounds: 0,
        }
    }
}
