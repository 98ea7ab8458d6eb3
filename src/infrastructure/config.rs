//! Application configuration

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::domain::value_objects::SessionSettings;

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// JSON world blueprint to play instead of the built-in castle
    pub world_file: Option<PathBuf>,

    /// Pause before showing the result of an action in the console
    pub action_delay: Duration,

    pub session: SessionSettings,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let world_file = env::var("CASTLE_WORLD_FILE")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let delay_ms: u64 = env::var("CASTLE_ACTION_DELAY_MS")
            .unwrap_or_else(|_| "0".to_string())
            .parse()
            .context("CASTLE_ACTION_DELAY_MS must be a whole number of milliseconds")?;

        Ok(Self {
            world_file,
            action_delay: Duration::from_millis(delay_ms),
            session: SessionSettings::from_env(),
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            world_file: None,
            action_delay: Duration::ZERO,
            session: SessionSettings::default(),
        }
    }
}
