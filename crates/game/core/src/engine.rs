//! The game state machine.
//!
//! [`Game`] is the authoritative reducer for session state. It owns the
//! world, the player, the defeated-enemy record, and the combat session when
//! one exists; every mutation flows through [`Game::dispatch`], which routes
//! a parsed [`Command`] by mode and reports what happened as a stream of
//! [`Event`]s for the client to render.

use crate::combat::{
    CombatAction, CombatEvent, CombatSession, EnemyInstance, RoundOutcome, resolve_round,
};
use crate::command::{Command, Direction};
use crate::rng::RngOracle;
use crate::state::{DefeatedEnemySet, PlayerState};
use crate::world::{Room, RoomId, World, WorldError};

/// Mode of the state machine. `GameOver` and `Quit` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    Exploring,
    InCombat,
    GameOver,
    Quit,
}

/// One observable effect of a dispatched command.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// The player entered a new room.
    Moved { to: RoomId },
    /// The current room has no exit in that direction; nothing changed.
    BlockedExit { direction: Direction },
    /// A live enemy guards the room just entered; combat has begun.
    CombatStarted { enemy: String, description: String },
    /// One narrative beat of a combat round.
    Combat(CombatEvent),
    /// The debug overlay was switched.
    DebugToggled { enabled: bool },
    /// Input made no sense in the current mode; nothing changed.
    UnknownCommand,
}

/// An owned game session: world, player, progress, and the active combat
/// session when there is one.
///
/// Invariants: at most one combat session exists, exactly when the mode is
/// [`GameMode::InCombat`]; a room's enemy spawn survives only until its
/// `(room, kind)` pair lands in the defeated record.
#[derive(Debug)]
pub struct Game {
    world: World,
    player: PlayerState,
    defeated: DefeatedEnemySet,
    session: Option<CombatSession>,
    mode: GameMode,
    seed: u64,
    nonce: u64,
}

impl Game {
    /// Start a session.
    ///
    /// # Errors
    ///
    /// Fails if the player's starting room is not in the world.
    pub fn new(world: World, player: PlayerState, seed: u64) -> Result<Self, WorldError> {
        world.room(&player.current_room)?;
        Ok(Self {
            world,
            player,
            defeated: DefeatedEnemySet::new(),
            session: None,
            mode: GameMode::Exploring,
            seed,
            nonce: 0,
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn session(&self) -> Option<&CombatSession> {
        self.session.as_ref()
    }

    pub fn defeated(&self) -> &DefeatedEnemySet {
        &self.defeated
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Whether the main loop should keep accepting commands.
    pub fn running(&self) -> bool {
        !matches!(self.mode, GameMode::GameOver | GameMode::Quit)
    }

    /// The room the player is standing in.
    pub fn current_room(&self) -> Result<&Room, WorldError> {
        self.world.room(&self.player.current_room)
    }

    /// Execute one parsed command against the current mode.
    ///
    /// Commands dispatched in a terminal mode are ignored.
    pub fn dispatch(
        &mut self,
        command: Command,
        rng: &dyn RngOracle,
    ) -> Result<Vec<Event>, WorldError> {
        // One nonce per command keeps every roll of a session derivable from
        // the seed and the command index alone.
        self.nonce += 1;

        match self.mode {
            GameMode::Exploring => self.dispatch_exploring(command),
            GameMode::InCombat => self.dispatch_combat(command, rng),
            GameMode::GameOver | GameMode::Quit => Ok(Vec::new()),
        }
    }

    fn dispatch_exploring(&mut self, command: Command) -> Result<Vec<Event>, WorldError> {
        match command {
            Command::Move(direction) => {
                let (_, events) = self.move_player(direction)?;
                Ok(events)
            }
            Command::ToggleDebug => Ok(vec![self.toggle_debug()]),
            Command::Quit => {
                self.mode = GameMode::Quit;
                Ok(Vec::new())
            }
            Command::Attack
            | Command::Cast(_)
            | Command::CastUnknown
            | Command::Flee
            | Command::Unknown => Ok(vec![Event::UnknownCommand]),
        }
    }

    fn dispatch_combat(
        &mut self,
        command: Command,
        rng: &dyn RngOracle,
    ) -> Result<Vec<Event>, WorldError> {
        let mut events = Vec::new();

        // Quit and the debug toggle stay available without ending combat.
        let action = match command {
            Command::ToggleDebug => return Ok(vec![self.toggle_debug()]),
            Command::Quit => {
                self.mode = GameMode::Quit;
                return Ok(Vec::new());
            }
            Command::Attack => CombatAction::Attack,
            Command::Cast(spell) => CombatAction::Cast(spell),
            Command::CastUnknown => CombatAction::CastUnknown,
            Command::Flee => CombatAction::Flee,
            Command::Move(_) | Command::Unknown => {
                events.push(Event::UnknownCommand);
                CombatAction::Pass
            }
        };

        let Some(session) = self.session.as_mut() else {
            // Mode and session are kept in lockstep by this type; nothing to
            // fight means nothing to do.
            return Ok(events);
        };

        let result = resolve_round(session, &mut self.player, action, rng, self.seed, self.nonce);
        let enemy_kind = session.enemy.kind.clone();
        events.extend(result.events.into_iter().map(Event::Combat));

        match result.outcome {
            RoundOutcome::Continue => {}
            RoundOutcome::EnemyDefeated => {
                self.session = None;
                self.mode = GameMode::Exploring;
                self.player.enemies_defeated += 1;
                let room = self.player.current_room.clone();
                self.world.clear_enemy(&room)?;
                self.defeated.record(room, enemy_kind);
            }
            RoundOutcome::PlayerDefeated => {
                self.session = None;
                self.mode = GameMode::GameOver;
            }
            RoundOutcome::Fled => {
                self.session = None;
                self.mode = GameMode::Exploring;
            }
        }

        Ok(events)
    }

    /// Move through an exit if one exists in `direction`.
    ///
    /// Returns whether the player moved. On success the step counter
    /// advances and the destination's arrival side effects run: an enemy
    /// recorded as defeated is cleared from the room before it is exposed,
    /// and a live enemy starts combat immediately.
    pub fn move_player(&mut self, direction: Direction) -> Result<(bool, Vec<Event>), WorldError> {
        let current = self.world.room(&self.player.current_room)?;
        let Some(target) = current.exits.get(&direction).cloned() else {
            return Ok((false, vec![Event::BlockedExit { direction }]));
        };

        self.player.current_room = target.clone();
        self.player.steps_taken += 1;
        let mut events = vec![Event::Moved { to: target.clone() }];

        if let Some(spawn) = self.world.room(&target)?.enemy.clone() {
            if self.defeated.is_cleared(&target, &spawn.kind) {
                self.world.clear_enemy(&target)?;
            } else {
                let template = self.world.enemy_template(&spawn.kind)?;
                let enemy = EnemyInstance::from_template(spawn.kind, template);
                events.push(Event::CombatStarted {
                    enemy: enemy.name.clone(),
                    description: enemy.description.clone(),
                });
                self.session = Some(CombatSession::new(enemy));
                self.mode = GameMode::InCombat;
            }
        }

        Ok((true, events))
    }

    fn toggle_debug(&mut self) -> Event {
        self.player.debug_mode = !self.player.debug_mode;
        Event::DebugToggled {
            enabled: self.player.debug_mode,
        }
    }
}
