//! Enemy catalog loader.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use depths_core::{EnemyKind, EnemyTemplate};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

/// Enemy record as it appears in `enemies.json`.
#[derive(Debug, Clone, Deserialize)]
struct EnemySpec {
    name: String,
    health: u32,
    /// Inclusive [min, max] damage bounds.
    damage_range: (u32, u32),
    description: String,
    /// Probability in [0, 1]; defaults to 0.3 when absent.
    hit_chance: Option<f64>,
}

/// Loader for the enemy catalog.
pub struct EnemyLoader;

impl EnemyLoader {
    /// Load and convert the enemy catalog.
    ///
    /// Value-level validation (positive health, ordered range, bounded hit
    /// chance) happens in `World::new`.
    pub fn load(path: &Path) -> LoadResult<Vec<(EnemyKind, EnemyTemplate)>> {
        let content = read_file(path)?;
        let specs: HashMap<String, EnemySpec> = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse enemy catalog {}", path.display()))?;

        Ok(specs
            .into_iter()
            .map(|(kind, spec)| {
                (
                    EnemyKind::new(kind),
                    EnemyTemplate {
                        name: spec.name,
                        max_health: spec.health,
                        damage_range: spec.damage_range,
                        description: spec.description,
                        hit_chance: spec
                            .hit_chance
                            .unwrap_or(EnemyTemplate::DEFAULT_HIT_CHANCE),
                    },
                )
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_hit_chance_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("enemies.json");
        std::fs::write(
            &path,
            r#"{
                "skeleton": {
                    "name": "Skeleton Guard",
                    "health": 14,
                    "damage_range": [2, 5],
                    "description": "Bones held together by spite",
                    "hit_chance": 0.4
                }
            }"#,
        )
        .unwrap();

        let enemies = EnemyLoader::load(&path).unwrap();
        let (kind, template) = &enemies[0];
        assert_eq!(kind, &EnemyKind::new("skeleton"));
        assert_eq!(template.hit_chance, 0.4);
        assert_eq!(template.max_health, 14);
    }

    #[test]
    fn malformed_catalog_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("enemies.json");
        std::fs::write(&path, r#"{"goblin": {"name": "Goblin"}}"#).unwrap();

        assert!(EnemyLoader::load(&path).is_err());
    }
}
