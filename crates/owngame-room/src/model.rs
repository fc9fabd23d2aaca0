//! Room data: metadata, membership, roles, and the create request.
//!
//! Two records describe a room, both keyed by the room's name:
//!
//! - [`RoomMeta`]: what the room *is* (name, password, capacity).
//!   Written once at creation, never changed.
//! - [`MembershipRecord`]: who is *in* it (host, participants,
//!   observers). Created lazily when the first player becomes host.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RoomCreateRequest
// ---------------------------------------------------------------------------

/// A request to create a room, as handed over by the request layer.
///
/// The request layer is responsible for validating it; the room layer only
/// enforces that the name is not taken.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct RoomCreateRequest {
    /// Unique room name.
    pub name: String,
    /// Password players must present before joining.
    pub password: String,
}

impl RoomCreateRequest {
    pub fn new(name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for RoomCreateRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoomCreateRequest")
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .finish()
    }
}

// ---------------------------------------------------------------------------
// RoomMeta
// ---------------------------------------------------------------------------

/// Immutable metadata of a created room.
///
/// The password never leaves the process through serialization or `Debug`
/// output, so the type is serialize-only.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct RoomMeta {
    /// Unique room name; also the key of the room's membership record.
    pub name: String,
    /// Password set at creation.
    #[serde(skip)]
    pub password: String,
    /// Participant slots, not counting the host.
    pub max_participants: usize,
}

impl fmt::Debug for RoomMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoomMeta")
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .field("max_participants", &self.max_participants)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// MembershipRecord
// ---------------------------------------------------------------------------

/// Live occupancy of a room.
///
/// Invariants, upheld by [`MembershipRegistry`](crate::MembershipRegistry):
/// - `host` is assigned at most once and never overwritten.
/// - `participants.len()` never exceeds the room's `max_participants`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipRecord {
    /// The host's identity. Empty means unassigned.
    pub host: String,
    /// Participants in the order they were admitted.
    pub participants: Vec<String>,
    /// Observers in the order they were admitted. Unbounded.
    pub observers: Vec<String>,
}

impl MembershipRecord {
    /// Creates a record whose host is `host` and with no one else in it.
    pub fn with_host(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }

    /// Returns `true` if the host slot is taken.
    pub fn has_host(&self) -> bool {
        !self.host.is_empty()
    }

    /// Number of players holding a slot: the host (if any) plus participants.
    pub fn occupancy(&self) -> usize {
        usize::from(self.has_host()) + self.participants.len()
    }

    /// Returns `true` if `identity` is the host, a participant, or an observer.
    pub fn contains(&self, identity: &str) -> bool {
        self.host == identity
            || self.participants.iter().any(|p| p == identity)
            || self.observers.iter().any(|o| o == identity)
    }
}

// ---------------------------------------------------------------------------
// PlayerRole
// ---------------------------------------------------------------------------

/// The role a player was given when entering a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerRole {
    /// First player in; runs the game.
    Host,
    /// Admitted after the host, up to the room's capacity.
    Participant,
    /// Watches the room without taking a slot.
    Observer,
}

impl fmt::Display for PlayerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Host => write!(f, "Host"),
            Self::Participant => write!(f, "Participant"),
            Self::Observer => write!(f, "Observer"),
        }
    }
}

// ---------------------------------------------------------------------------
// RoomInfo
// ---------------------------------------------------------------------------

/// A password-free snapshot of a room, suitable for listings and logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomInfo {
    /// The room's name.
    pub name: String,
    /// Participant slots, not counting the host.
    pub max_participants: usize,
    /// The host, once assigned.
    pub host: Option<String>,
    /// Number of admitted participants.
    pub participant_count: usize,
    /// Number of admitted observers.
    pub observer_count: usize,
}

impl RoomInfo {
    pub(crate) fn from_parts(meta: &RoomMeta, members: Option<&MembershipRecord>) -> Self {
        Self {
            name: meta.name.clone(),
            max_participants: meta.max_participants,
            host: members.filter(|m| m.has_host()).map(|m| m.host.clone()),
            participant_count: members.map_or(0, |m| m.participants.len()),
            observer_count: members.map_or(0, |m| m.observers.len()),
        }
    }

    /// Returns `true` if every participant slot is taken.
    pub fn is_full(&self) -> bool {
        self.participant_count >= self.max_participants
    }
}
