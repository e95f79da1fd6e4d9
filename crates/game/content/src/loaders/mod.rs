//! Catalog loaders for reading game data from files.

pub mod enemies;
pub mod rooms;

pub use enemies::EnemyLoader;
pub use rooms::RoomsLoader;

use std::path::Path;

use anyhow::Context;
use depths_core::World;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Room catalog file name inside the data directory.
pub const ROOMS_FILE: &str = "rooms.json";

/// Enemy catalog file name inside the data directory.
pub const ENEMIES_FILE: &str = "enemies.json";

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read file {}", path.display()))
}

/// Load both catalogs from `data_dir` and build a validated world.
pub fn load_world(data_dir: &Path) -> LoadResult<World> {
    let rooms = RoomsLoader::load(&data_dir.join(ROOMS_FILE))?;
    let enemies = EnemyLoader::load(&data_dir.join(ENEMIES_FILE))?;

    World::new(rooms, enemies).context("world catalogs failed validation")
}

#[cfg(test)]
mod tests {
    use super::*;
    use depths_core::{Direction, EnemyKind, RoomId};

    fn write_catalogs(rooms: &str, enemies: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(ROOMS_FILE), rooms).unwrap();
        std::fs::write(dir.path().join(ENEMIES_FILE), enemies).unwrap();
        dir
    }

    const ROOMS: &str = r#"{
        "entry": {
            "title": "Entry Hall",
            "description": "A crumbling stone hall",
            "exits": {"north": "corridor"},
            "dark": false,
            "items": [],
            "enemy": null,
            "npc": null
        },
        "corridor": {
            "title": "Dark Corridor",
            "description": "A narrow corridor",
            "exits": {"south": "entry"},
            "dark": true,
            "items": ["Torch"],
            "enemy": {"type": "goblin"},
            "npc": null
        }
    }"#;

    const ENEMIES: &str = r#"{
        "goblin": {
            "name": "Goblin",
            "health": 10,
            "damage_range": [1, 4],
            "description": "A small but fierce goblin"
        }
    }"#;

    #[test]
    fn loads_a_valid_world() {
        let dir = write_catalogs(ROOMS, ENEMIES);
        let world = load_world(dir.path()).unwrap();

        assert_eq!(world.room_count(), 2);

        let corridor = world.room(&RoomId::new("corridor")).unwrap();
        assert_eq!(corridor.title, "Dark Corridor");
        assert!(corridor.dark);
        assert_eq!(corridor.items, vec!["Torch".to_string()]);
        assert_eq!(
            corridor.exits.get(&Direction::South),
            Some(&RoomId::new("entry"))
        );
        assert_eq!(
            corridor.enemy.as_ref().map(|s| s.kind.clone()),
            Some(EnemyKind::new("goblin"))
        );
    }

    #[test]
    fn hit_chance_defaults_when_absent() {
        let dir = write_catalogs(ROOMS, ENEMIES);
        let world = load_world(dir.path()).unwrap();

        let goblin = world.enemy_template(&EnemyKind::new("goblin")).unwrap();
        assert_eq!(goblin.hit_chance, 0.3);
        assert_eq!(goblin.max_health, 10);
        assert_eq!(goblin.damage_range, (1, 4));
    }

    #[test]
    fn missing_catalog_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_world(dir.path()).is_err());
    }

    #[test]
    fn dangling_exit_is_fatal() {
        let rooms = r#"{
            "entry": {
                "title": "Entry Hall",
                "description": "A crumbling stone hall",
                "exits": {"north": "missing"}
            }
        }"#;
        let dir = write_catalogs(rooms, ENEMIES);
        let error = load_world(dir.path()).unwrap_err();
        assert!(format!("{error:#}").contains("unknown room"));
    }

    #[test]
    fn spawn_referencing_unknown_template_is_fatal() {
        let rooms = r#"{
            "entry": {
                "title": "Entry Hall",
                "description": "A crumbling stone hall",
                "enemy": {"type": "dragon"}
            }
        }"#;
        let dir = write_catalogs(rooms, ENEMIES);
        let error = load_world(dir.path()).unwrap_err();
        assert!(format!("{error:#}").contains("dragon"));
    }
}
