//! Structured results of a combat round.

use crate::command::Spell;

/// Why a spell cast produced no effect.
///
/// These are recoverable input rejections: no mana is spent and nothing else
/// changes, but the round still advances to the enemy's turn. The `Display`
/// text is the narrative line shown to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SpellFailure {
    #[error("Only wizards can cast spells!")]
    NotWizard,

    #[error("Not enough mana to cast {spell}!")]
    InsufficientMana { spell: Spell },

    #[error("Unknown spell!")]
    UnknownSpell,
}

/// One narrative beat of a combat round, in resolution order.
#[derive(Clone, Debug, PartialEq)]
pub enum CombatEvent {
    PlayerHit { enemy: String, damage: u32 },
    PlayerMissed,
    FireballCast { damage: u32 },
    ShieldRaised { rounds: u32 },
    Healed { amount: u32 },
    SpellFailed(SpellFailure),
    FleeFailed,
    Fled { enemy: String },
    ShieldFaded,
    EnemyHit { enemy: String, damage: u32 },
    EnemyMissed { enemy: String },
    EnemyDefeated { enemy: String },
    PlayerDefeated { enemy: String },
}

/// How a round left the fight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Both sides still standing; combat continues.
    Continue,
    /// The player's action brought the enemy to 0 health.
    EnemyDefeated,
    /// The enemy's counter-attack brought the player to 0 health.
    PlayerDefeated,
    /// The player escaped before the enemy could act.
    Fled,
}

/// Everything a resolved round reports back to the engine.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundResult {
    pub outcome: RoundOutcome,
    pub events: Vec<CombatEvent>,
}

impl RoundResult {
    pub fn combat_ended(&self) -> bool {
        self.outcome != RoundOutcome::Continue
    }
}
