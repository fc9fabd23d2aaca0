//! Server-wide configuration, loadable from JSON.

use std::path::Path;

use owngame_room::RoomConfig;
use serde::{Deserialize, Serialize};

use crate::OwngameError;

/// Default `tracing` filter when neither the config nor `RUST_LOG` set one.
pub const DEFAULT_LOG_FILTER: &str = "owngame=info,owngame_room=info,owngame_store=info";

/// Top-level configuration for a process hosting rooms.
///
/// Every field has a default, so `{}` is a valid config file:
///
/// ```json
/// {
///   "rooms": { "max_participants": 3 },
///   "log_filter": "owngame_room=debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Settings applied to every created room.
    pub rooms: RoomConfig,
    /// `tracing-subscriber` filter directives, e.g. `owngame_room=debug`.
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            rooms: RoomConfig::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ServerConfig {
    /// Parses a config from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, OwngameError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, OwngameError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&contents)?;
        tracing::debug!(path = %path.as_ref().display(), "configuration loaded");
        Ok(config)
    }
}
