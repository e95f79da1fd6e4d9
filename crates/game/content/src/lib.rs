//! Data-driven content definitions and loaders.
//!
//! This crate reads the JSON catalogs (room graph, enemy templates) and
//! builds a validated [`depths_core::World`]. Catalog files use loader-local
//! serde types which are converted into core types, so the core crate stays
//! serialization-free. Any missing file, parse failure, or graph defect is a
//! fatal startup error surfaced with file context.

pub mod loaders;

pub use loaders::{EnemyLoader, LoadResult, RoomsLoader, load_world};
