//! Deterministic game logic for the dungeon crawler.
//!
//! `depths-core` defines the canonical rules: the room graph and enemy
//! catalog ([`world`]), the round-based combat resolver ([`combat`]), and the
//! state machine that owns a session ([`engine`]). All state mutation flows
//! through [`engine::Game::dispatch`]; clients parse input into [`Command`]s
//! at the boundary and render the resulting [`Event`] stream. The crate does
//! no I/O and draws all randomness through the injectable [`rng::RngOracle`].
pub mod combat;
pub mod command;
pub mod engine;
pub mod rng;
pub mod state;
pub mod world;

pub use combat::{
    CombatAction, CombatEvent, CombatSession, EnemyInstance, RoundOutcome, RoundResult,
    SpellFailure, resolve_round,
};
pub use command::{Command, Direction, Spell};
pub use engine::{Event, Game, GameMode};
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use state::{DefeatedEnemySet, PlayerClass, PlayerState};
pub use world::{EnemyKind, EnemySpawn, EnemyTemplate, Npc, Room, RoomId, World, WorldError};
