//! Room configuration.

use serde::{Deserialize, Serialize};

/// Default number of participant slots per room.
pub const DEFAULT_MAX_PARTICIPANTS: usize = 3;

/// Configuration applied to every room a [`RoomService`](crate::RoomService)
/// creates.
///
/// The host slot is separate from the participant slots, so a room holds
/// at most `max_participants + 1` players (one host plus
/// `max_participants` participants). Observers are not counted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomConfig {
    /// Maximum participants allowed in a room, not counting the host.
    pub max_participants: usize,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            max_participants: DEFAULT_MAX_PARTICIPANTS,
        }
    }
}
