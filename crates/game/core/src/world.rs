//! Static world data: the room graph and the enemy catalog.
//!
//! A [`World`] is built once from already-parsed catalog data and validated
//! up front: every exit must lead to a known room and every enemy spawn must
//! reference a known template. After that the only mutations are the ones
//! gameplay needs, clearing a room's enemy and nothing else, so a `&World`
//! held anywhere always observes the same graph the engine does.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::command::Direction;

/// Identifier of a room in the catalog (e.g. `"entry"`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoomId(String);

impl RoomId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Key of an enemy template in the catalog (e.g. `"goblin"`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EnemyKind(String);

impl EnemyKind {
    pub fn new(kind: impl Into<String>) -> Self {
        Self(kind.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EnemyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Spawn record attached to a room: which template guards it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnemySpawn {
    pub kind: EnemyKind,
}

/// Non-hostile character standing in a room.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Npc {
    pub name: String,
}

/// A node in the navigable room graph.
///
/// Immutable after load except for `enemy`, which [`World::clear_enemy`]
/// drops permanently once the guarding enemy is defeated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub title: String,
    pub description: String,
    pub dark: bool,
    pub items: Vec<String>,
    /// Exits keyed by direction; `BTreeMap` keeps display order stable.
    pub exits: BTreeMap<Direction, RoomId>,
    pub enemy: Option<EnemySpawn>,
    pub npc: Option<Npc>,
}

/// Immutable catalog entry an [`EnemyInstance`](crate::combat::EnemyInstance)
/// is spawned from.
#[derive(Clone, Debug, PartialEq)]
pub struct EnemyTemplate {
    pub name: String,
    pub max_health: u32,
    /// Inclusive damage bounds.
    pub damage_range: (u32, u32),
    pub description: String,
    /// Probability in [0, 1] that an attack lands.
    pub hit_chance: f64,
}

impl EnemyTemplate {
    /// Catalog default when `hit_chance` is absent.
    pub const DEFAULT_HIT_CHANCE: f64 = 0.3;
}

/// World construction and lookup failures.
///
/// Construction errors are fatal at startup; lookup errors indicate corrupt
/// state and should never occur for a validated world.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum WorldError {
    #[error("unknown room `{0}`")]
    UnknownRoom(RoomId),

    #[error("unknown enemy type `{0}`")]
    UnknownEnemyType(EnemyKind),

    #[error("room `{room}` exit {direction} leads to unknown room `{target}`")]
    DanglingExit {
        room: RoomId,
        direction: Direction,
        target: RoomId,
    },

    #[error("room `{room}` spawns unknown enemy type `{kind}`")]
    UnknownSpawn { room: RoomId, kind: EnemyKind },

    #[error("enemy type `{kind}` has zero health")]
    ZeroHealth { kind: EnemyKind },

    #[error("enemy type `{kind}` has inverted damage range [{min}, {max}]")]
    InvertedDamageRange {
        kind: EnemyKind,
        min: u32,
        max: u32,
    },

    #[error("enemy type `{kind}` hit chance {value} is outside [0, 1]")]
    HitChanceOutOfRange { kind: EnemyKind, value: f64 },
}

/// The room graph plus the enemy catalog, validated at construction.
#[derive(Clone, Debug)]
pub struct World {
    rooms: HashMap<RoomId, Room>,
    enemies: HashMap<EnemyKind, EnemyTemplate>,
}

impl World {
    /// Build a world from already-parsed catalog data.
    ///
    /// # Errors
    ///
    /// Returns the first graph or catalog defect found: a dangling exit, a
    /// spawn referencing an unknown template, or a malformed template.
    pub fn new(
        rooms: impl IntoIterator<Item = Room>,
        enemies: impl IntoIterator<Item = (EnemyKind, EnemyTemplate)>,
    ) -> Result<Self, WorldError> {
        let world = Self {
            rooms: rooms.into_iter().map(|r| (r.id.clone(), r)).collect(),
            enemies: enemies.into_iter().collect(),
        };
        world.validate()?;
        Ok(world)
    }

    fn validate(&self) -> Result<(), WorldError> {
        for (kind, template) in &self.enemies {
            if template.max_health == 0 {
                return Err(WorldError::ZeroHealth { kind: kind.clone() });
            }
            let (min, max) = template.damage_range;
            if min > max {
                return Err(WorldError::InvertedDamageRange {
                    kind: kind.clone(),
                    min,
                    max,
                });
            }
            if !(0.0..=1.0).contains(&template.hit_chance) {
                return Err(WorldError::HitChanceOutOfRange {
                    kind: kind.clone(),
                    value: template.hit_chance,
                });
            }
        }

        for room in self.rooms.values() {
            for (&direction, target) in &room.exits {
                if !self.rooms.contains_key(target) {
                    return Err(WorldError::DanglingExit {
                        room: room.id.clone(),
                        direction,
                        target: target.clone(),
                    });
                }
            }
            if let Some(spawn) = &room.enemy {
                if !self.enemies.contains_key(&spawn.kind) {
                    return Err(WorldError::UnknownSpawn {
                        room: room.id.clone(),
                        kind: spawn.kind.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Look up a room by id.
    pub fn room(&self, id: &RoomId) -> Result<&Room, WorldError> {
        self.rooms
            .get(id)
            .ok_or_else(|| WorldError::UnknownRoom(id.clone()))
    }

    /// Look up an enemy template by kind.
    pub fn enemy_template(&self, kind: &EnemyKind) -> Result<&EnemyTemplate, WorldError> {
        self.enemies
            .get(kind)
            .ok_or_else(|| WorldError::UnknownEnemyType(kind.clone()))
    }

    /// Permanently remove a room's enemy spawn (after defeat, or when the
    /// defeated-enemy record says it was cleared in an earlier visit).
    pub fn clear_enemy(&mut self, id: &RoomId) -> Result<(), WorldError> {
        let room = self
            .rooms
            .get_mut(id)
            .ok_or_else(|| WorldError::UnknownRoom(id.clone()))?;
        room.enemy = None;
        Ok(())
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! Small hand-built worlds shared by engine and combat tests.

    use super::*;

    pub(crate) fn goblin_template() -> EnemyTemplate {
        EnemyTemplate {
            name: "Test Goblin".into(),
            max_health: 10,
            damage_range: (1, 4),
            description: "A small but fierce goblin".into(),
            hit_chance: EnemyTemplate::DEFAULT_HIT_CHANCE,
        }
    }

    pub(crate) fn room(id: &str) -> Room {
        Room {
            id: RoomId::new(id),
            title: format!("Room {id}"),
            description: String::new(),
            dark: false,
            items: Vec::new(),
            exits: BTreeMap::new(),
            enemy: None,
            npc: None,
        }
    }

    /// `entry --north--> corridor`, corridor guarded by a goblin.
    pub(crate) fn two_room_world() -> World {
        let mut entry = room("entry");
        entry
            .exits
            .insert(Direction::North, RoomId::new("corridor"));

        let mut corridor = room("corridor");
        corridor.exits.insert(Direction::South, RoomId::new("entry"));
        corridor.enemy = Some(EnemySpawn {
            kind: EnemyKind::new("goblin"),
        });

        World::new(
            [entry, corridor],
            [(EnemyKind::new("goblin"), goblin_template())],
        )
        .unwrap()
    }
}
