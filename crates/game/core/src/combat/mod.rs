//! Round-based combat resolution.
//!
//! [`resolve_round`] advances exactly one round: the player's action, then
//! (when combat is still live) the enemy's counter-attack, then the outcome.
//! The ordering is load-bearing: a defeated enemy never gets a turn, and a
//! successful flee ends combat before any counter-attack lands.
//!
//! Resolution mutates only the [`CombatSession`] and the player it is given;
//! what the outcome means for the wider game (clearing rooms, recording
//! defeats, ending the session) is the engine's job.

mod result;
mod round;
mod session;

pub use result::{CombatEvent, RoundOutcome, RoundResult, SpellFailure};
pub use round::{CombatAction, resolve_round};
pub use session::{CombatSession, EnemyInstance};
