//! Client configuration from the environment.

use std::path::PathBuf;

use anyhow::{Context, Result};

/// Environment-driven settings, loaded once at startup.
///
/// Variables (all optional):
/// - `DEPTHS_SEED` — session seed for deterministic replay
/// - `DEPTHS_DATA_DIR` — catalog directory (default `data`)
/// - `DEPTHS_LOG_DIR` — log directory (default `logs`)
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub seed: Option<u64>,
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl CliConfig {
    pub fn from_env() -> Result<Self> {
        let seed = match std::env::var("DEPTHS_SEED") {
            Ok(raw) => Some(
                raw.parse::<u64>()
                    .with_context(|| format!("DEPTHS_SEED must be an integer, got `{raw}`"))?,
            ),
            Err(_) => None,
        };

        let data_dir = std::env::var("DEPTHS_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));

        let log_dir = std::env::var("DEPTHS_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("logs"));

        Ok(Self {
            seed,
            data_dir,
            log_dir,
        })
    }
}
