use std::time::Duration;

use anyhow::{Context, Result};

use crate::drafts::Autosaver;

/// Runtime configuration loaded from environment variables. Everything has
/// a default; the embedding shell overrides what it needs.
#[derive(Debug, Clone)]
pub struct Config {
    /// How often in-progress application forms are snapshotted.
    pub autosave_interval: Duration,
    /// Cap on postings fetched for a discovery surface.
    pub max_results: usize,
    pub rust_log: String,
}

const DEFAULT_MAX_RESULTS: usize = 100;

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let autosave_secs = std::env::var("AUTOSAVE_INTERVAL_SECS")
            .unwrap_or_else(|_| Autosaver::DEFAULT_INTERVAL.as_secs().to_string())
            .parse::<u64>()
            .context("AUTOSAVE_INTERVAL_SECS must be a whole number of seconds")?;
        let max_results = std::env::var("MAX_RESULTS")
            .unwrap_or_else(|_| DEFAULT_MAX_RESULTS.to_string())
            .parse::<usize>()
            .context("MAX_RESULTS must be a positive integer")?;

        Ok(Config {
            autosave_interval: Duration::from_secs(autosave_secs),
            max_results,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            autosave_interval: Autosaver::DEFAULT_INTERVAL,
            max_results: DEFAULT_MAX_RESULTS,
            rust_log: "info".to_string(),
        }
    }
}
