//! Session configuration from environment variables.
//!
//! - `BOWLING_PLAYERS`: players seated at the start of each game (default 2, 1..=8)
//! - `BOWLING_SEED`: seed for random pin fall (default 1)
//! - `BOWLING_LOG`: tracing filter directive (default `info`)
//! - `BOWLING_LOG_PATH`: log file; the interactive binary only logs when set

use std::env;

/// Default players seated when a game starts.
pub const DEFAULT_PLAYERS: u8 = 2;

/// Upper bound for `BOWLING_PLAYERS`.
pub const MAX_PLAYERS: u8 = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub players: u8,
    pub seed: u32,
    pub log_filter: String,
    pub log_path: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            players: DEFAULT_PLAYERS,
            seed: 1,
            log_filter: "info".to_string(),
            log_path: None,
        }
    }
}

impl SessionConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from an arbitrary key lookup. Unparseable values fall back to
    /// the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let players = non_empty("BOWLING_PLAYERS")
            .and_then(|s| s.parse::<u8>().ok())
            .map(|n| n.clamp(1, MAX_PLAYERS))
            .unwrap_or(defaults.players);

        let seed = non_empty("BOWLING_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.seed);

        let log_filter = non_empty("BOWLING_LOG").unwrap_or(defaults.log_filter);
        let log_path = non_empty("BOWLING_LOG_PATH");

        Self {
            players,
            seed,
            log_filter,
            log_path,
        }
    }
}
