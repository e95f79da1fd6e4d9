//! Room catalog loader.
//!
//! Loads the room graph from a JSON file keyed by room id. Exit directions
//! are parsed into the core [`Direction`] enum here, at the boundary.

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use depths_core::{Direction, EnemySpawn, EnemyKind, Npc, Room, RoomId};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

/// Room record as it appears in `rooms.json`.
#[derive(Debug, Clone, Deserialize)]
struct RoomSpec {
    title: String,
    description: String,
    #[serde(default)]
    exits: HashMap<String, String>,
    #[serde(default)]
    dark: bool,
    #[serde(default)]
    items: Vec<String>,
    #[serde(default)]
    enemy: Option<EnemySpawnSpec>,
    #[serde(default)]
    npc: Option<NpcSpec>,
}

#[derive(Debug, Clone, Deserialize)]
struct EnemySpawnSpec {
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Clone, Deserialize)]
struct NpcSpec {
    name: String,
}

/// Loader for the room catalog.
pub struct RoomsLoader;

impl RoomsLoader {
    /// Load and convert the room catalog.
    ///
    /// Fails on unreadable files, malformed JSON, or an exit keyed by
    /// something that is not a compass direction. Graph-level validation
    /// (dangling exits, unknown spawns) happens in `World::new`.
    pub fn load(path: &Path) -> LoadResult<Vec<Room>> {
        let content = read_file(path)?;
        let specs: HashMap<String, RoomSpec> = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse room catalog {}", path.display()))?;

        specs
            .into_iter()
            .map(|(id, spec)| Self::convert(id, spec))
            .collect()
    }

    fn convert(id: String, spec: RoomSpec) -> LoadResult<Room> {
        let mut exits = std::collections::BTreeMap::new();
        for (direction, target) in spec.exits {
            let direction = Direction::from_str(&direction).map_err(|_| {
                anyhow::anyhow!("room `{id}` has exit in unknown direction `{direction}`")
            })?;
            exits.insert(direction, RoomId::new(target));
        }

        Ok(Room {
            id: RoomId::new(id),
            title: spec.title,
            description: spec.description,
            dark: spec.dark,
            items: spec.items,
            exits,
            enemy: spec.enemy.map(|e| EnemySpawn {
                kind: EnemyKind::new(e.kind),
            }),
            npc: spec.npc.map(|n| Npc { name: n.name }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_exit_direction_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rooms.json");
        std::fs::write(
            &path,
            r#"{
                "entry": {
                    "title": "Entry Hall",
                    "description": "A crumbling stone hall",
                    "exits": {"up": "attic"}
                }
            }"#,
        )
        .unwrap();

        let error = RoomsLoader::load(&path).unwrap_err();
        assert!(error.to_string().contains("unknown direction"));
    }

    #[test]
    fn optional_fields_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rooms.json");
        std::fs::write(
            &path,
            r#"{
                "cell": {
                    "title": "Holding Cell",
                    "description": "Four damp walls"
                }
            }"#,
        )
        .unwrap();

        let rooms = RoomsLoader::load(&path).unwrap();
        let cell = &rooms[0];
        assert!(!cell.dark);
        assert!(cell.items.is_empty());
        assert!(cell.exits.is_empty());
        assert!(cell.enemy.is_none());
        assert!(cell.npc.is_none());
    }

    #[test]
    fn missing_required_field_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rooms.json");
        std::fs::write(&path, r#"{"entry": {"title": "Entry Hall"}}"#).unwrap();

        assert!(RoomsLoader::load(&path).is_err());
    }
}
