//! The round resolver.

use crate::command::Spell;
use crate::rng::{RngOracle, compute_seed};
use crate::state::{PlayerClass, PlayerState};

use super::result::{CombatEvent, RoundOutcome, RoundResult, SpellFailure};
use super::session::CombatSession;

/// Base chance for a player attack to land, in percent.
const BASE_ATTACK_HIT_PERCENT: u32 = 50;

/// Base chance for a flee attempt to succeed, in percent.
const BASE_FLEE_PERCENT: u32 = 50;

/// Inclusive bounds of an unscaled player attack.
const ATTACK_DAMAGE_RANGE: (u32, u32) = (1, 8);

/// Inclusive fireball damage bounds.
const FIREBALL_DAMAGE_RANGE: (u32, u32) = (8, 12);

/// Inclusive heal amount bounds.
const HEAL_RANGE: (u32, u32) = (5, 10);

/// Rounds a fresh shield lasts.
const SHIELD_ROUNDS: u32 = 3;

/// Per-roll seed contexts; one command can draw several independent rolls.
mod roll {
    pub const PLAYER_HIT: u32 = 0;
    pub const PLAYER_DAMAGE: u32 = 1;
    pub const SPELL_AMOUNT: u32 = 2;
    pub const FLEE: u32 = 3;
    pub const ENEMY_HIT: u32 = 4;
    pub const ENEMY_DAMAGE: u32 = 5;
}

/// The player's decision for one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CombatAction {
    Attack,
    Cast(Spell),
    /// `cast` with an unrecognized spell name: rejected, but the round still
    /// advances to the enemy's turn.
    CastUnknown,
    Flee,
    /// Input that named no combat action; the player forfeits their half of
    /// the round and the enemy still acts.
    Pass,
}

/// Convert a probability in [0, 1] to a d100 threshold.
fn percent(chance: f64) -> u32 {
    (chance * 100.0).round() as u32
}

/// Scale a damage bound by 1.2, flooring (integer-only).
fn scale_bound(bound: u32) -> u32 {
    bound * 12 / 10
}

/// Resolve one combat round.
///
/// Order is fixed: player action, then, if the enemy survived and the player
/// did not escape, the enemy's counter-attack, then the outcome check. Enemy
/// defeat and player defeat are therefore mutually exclusive within a round.
///
/// Per-roll seeds derive from `(game_seed, nonce, context)`; the caller
/// advances `nonce` once per dispatched command.
pub fn resolve_round(
    session: &mut CombatSession,
    player: &mut PlayerState,
    action: CombatAction,
    rng: &dyn RngOracle,
    game_seed: u64,
    nonce: u64,
) -> RoundResult {
    let seed = |context: u32| compute_seed(game_seed, nonce, context);
    let mut events = Vec::new();
    let mut enemy_defeated = false;

    match action {
        CombatAction::Attack => {
            let threshold = BASE_ATTACK_HIT_PERCENT + player.class.hit_bonus_percent();
            if rng.roll_d100(seed(roll::PLAYER_HIT)) <= threshold {
                let (mut min, mut max) = ATTACK_DAMAGE_RANGE;
                if player.class.scales_attack_damage() {
                    min = scale_bound(min);
                    max = scale_bound(max);
                }
                let damage = rng.range(seed(roll::PLAYER_DAMAGE), min, max);
                enemy_defeated = session.enemy.take_damage(damage);
                events.push(CombatEvent::PlayerHit {
                    enemy: session.enemy.name.clone(),
                    damage,
                });
            } else {
                events.push(CombatEvent::PlayerMissed);
            }
        }

        CombatAction::Cast(spell) => {
            enemy_defeated = cast_spell(session, player, spell, rng, seed(roll::SPELL_AMOUNT), &mut events);
        }

        CombatAction::CastUnknown => {
            events.push(CombatEvent::SpellFailed(SpellFailure::UnknownSpell));
        }

        CombatAction::Flee => {
            let threshold = BASE_FLEE_PERCENT + player.class.flee_bonus_percent();
            if rng.roll_d100(seed(roll::FLEE)) <= threshold {
                events.push(CombatEvent::Fled {
                    enemy: session.enemy.name.clone(),
                });
                // Escape happens before any counter-attack.
                return RoundResult {
                    outcome: RoundOutcome::Fled,
                    events,
                };
            }
            events.push(CombatEvent::FleeFailed);
        }

        CombatAction::Pass => {}
    }

    if enemy_defeated {
        events.push(CombatEvent::EnemyDefeated {
            enemy: session.enemy.name.clone(),
        });
        return RoundResult {
            outcome: RoundOutcome::EnemyDefeated,
            events,
        };
    }

    let outcome = enemy_turn(session, player, rng, &seed, &mut events);

    debug_assert_eq!(
        session.shield_active,
        session.shield_rounds > 0,
        "shield flag must track remaining rounds"
    );

    RoundResult { outcome, events }
}

/// Resolve a spell cast. Returns whether the enemy was defeated by it.
///
/// Failures (wrong class, unknown spell, too little mana) spend nothing and
/// change nothing; they only add a narrative event, and the caller still
/// lets the enemy act.
fn cast_spell(
    session: &mut CombatSession,
    player: &mut PlayerState,
    spell: Spell,
    rng: &dyn RngOracle,
    amount_seed: u64,
    events: &mut Vec<CombatEvent>,
) -> bool {
    if player.class != PlayerClass::Wizard {
        events.push(CombatEvent::SpellFailed(SpellFailure::NotWizard));
        return false;
    }

    if !player.spend_mana(spell.mana_cost()) {
        events.push(CombatEvent::SpellFailed(SpellFailure::InsufficientMana {
            spell,
        }));
        return false;
    }

    match spell {
        Spell::Fireball => {
            let (min, max) = FIREBALL_DAMAGE_RANGE;
            let damage = rng.range(amount_seed, min, max);
            events.push(CombatEvent::FireballCast { damage });
            session.enemy.take_damage(damage)
        }
        Spell::Shield => {
            session.shield_active = true;
            session.shield_rounds = SHIELD_ROUNDS;
            events.push(CombatEvent::ShieldRaised {
                rounds: SHIELD_ROUNDS,
            });
            false
        }
        Spell::Heal => {
            let (min, max) = HEAL_RANGE;
            let amount = rng.range(amount_seed, min, max);
            player.heal(amount);
            events.push(CombatEvent::Healed { amount });
            false
        }
    }
}

/// The enemy's half of the round.
fn enemy_turn(
    session: &mut CombatSession,
    player: &mut PlayerState,
    rng: &dyn RngOracle,
    seed: &dyn Fn(u32) -> u64,
    events: &mut Vec<CombatEvent>,
) -> RoundOutcome {
    let enemy = &session.enemy;

    if rng.roll_d100(seed(roll::ENEMY_HIT)) > percent(enemy.hit_chance) {
        events.push(CombatEvent::EnemyMissed {
            enemy: enemy.name.clone(),
        });
        return RoundOutcome::Continue;
    }

    let (min, max) = enemy.damage_range;
    let mut damage = rng.range(seed(roll::ENEMY_DAMAGE), min, max);

    // The shield halves landed damage (floor) and decays only when it
    // actually absorbs a hit.
    if session.shield_active {
        damage /= 2;
        session.shield_rounds -= 1;
        if session.shield_rounds == 0 {
            session.shield_active = false;
            events.push(CombatEvent::ShieldFaded);
        }
    }

    let health = player.apply_damage(damage);
    events.push(CombatEvent::EnemyHit {
        enemy: session.enemy.name.clone(),
        damage,
    });

    if health == 0 {
        events.push(CombatEvent::PlayerDefeated {
            enemy: session.enemy.name.clone(),
        });
        return RoundOutcome::PlayerDefeated;
    }

    RoundOutcome::Continue
}
