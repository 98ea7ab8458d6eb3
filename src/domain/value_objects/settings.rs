//! Session settings value object

use serde::{Deserialize, Serialize};

/// Tunables for a game session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionSettings {
    /// Number of journal events kept per session; older events are trimmed
    pub max_journal_length: usize,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            max_journal_length: 64,
        }
    }
}

impl SessionSettings {
    /// Load from environment variables, using defaults for missing values
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_journal_length: env_or("CASTLE_MAX_JOURNAL", defaults.max_journal_length),
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}
