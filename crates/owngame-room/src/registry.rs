//! Typed registries over [`KeyedStore`].
//!
//! Each registry owns one store specialised to one record type, so there
//! is no shared untyped map and no downcasting at call sites. All
//! mutation of membership goes through [`KeyedStore::alter`]; the
//! capacity and host checks live inside the transition closures, where
//! they run under the key's lock.

use owngame_store::KeyedStore;

use crate::{MembershipRecord, RoomMeta};

// ---------------------------------------------------------------------------
// RoomRegistry
// ---------------------------------------------------------------------------

/// Stores [`RoomMeta`] by room name. Each name can be registered once.
#[derive(Debug, Default)]
pub struct RoomRegistry {
    rooms: KeyedStore<RoomMeta>,
}

impl RoomRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            rooms: KeyedStore::new(),
        }
    }

    /// Registers a room. Returns `false` if the name is already taken.
    pub fn put_room_meta(&self, meta: RoomMeta) -> bool {
        let name = meta.name.clone();
        self.rooms.put(&name, meta)
    }

    /// Returns a snapshot of the room's metadata.
    pub fn get_room_meta(&self, name: &str) -> Option<RoomMeta> {
        self.rooms.get(name)
    }

    /// Lists the names of all registered rooms, in no particular order.
    pub fn room_names(&self) -> Vec<String> {
        self.rooms.keys()
    }

    /// Returns the number of registered rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Returns `true` if no room has been registered.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

// ---------------------------------------------------------------------------
// MembershipRegistry
// ---------------------------------------------------------------------------

/// Stores a [`MembershipRecord`] per room name.
///
/// Records are created by the first successful [`put_host`](Self::put_host)
/// and are never removed. Nothing here checks that the room's metadata
/// exists; [`RoomService`](crate::RoomService) does that before calling in.
#[derive(Debug, Default)]
pub struct MembershipRegistry {
    members: KeyedStore<MembershipRecord>,
}

impl MembershipRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            members: KeyedStore::new(),
        }
    }

    /// Tries to make `identity` the host of `room`.
    ///
    /// Succeeds if the room has no record yet (one is created) or its
    /// record has an empty host slot. Fails if a host is already set.
    pub fn put_host(&self, room: &str, identity: &str) -> bool {
        self.members.alter(room, |current| match current {
            None => Some(MembershipRecord::with_host(identity)),
            Some(record) if record.has_host() => None,
            Some(record) => {
                let mut next = record.clone();
                next.host = identity.to_owned();
                Some(next)
            }
        })
    }

    /// Tries to append `identity` to the participants of `meta`'s room.
    ///
    /// Fails if the room has no record yet (no host) or all
    /// `meta.max_participants` slots are taken.
    pub fn add_participant(&self, meta: &RoomMeta, identity: &str) -> bool {
        self.members.alter(&meta.name, |current| {
            let record = current?;
            if record.participants.len() >= meta.max_participants {
                return None;
            }
            let mut next = record.clone();
            next.participants.push(identity.to_owned());
            Some(next)
        })
    }

    /// Tries to append `identity` to the observers of `room`.
    ///
    /// Fails only if the room has no record yet.
    ///
    /// Each call clones the whole record, observer list included, so
    /// admitting `n` observers to one room costs O(n²) copying in total.
    pub fn add_observer(&self, room: &str, identity: &str) -> bool {
        self.members.alter(room, |current| {
            let mut next = current?.clone();
            next.observers.push(identity.to_owned());
            Some(next)
        })
    }

    /// Returns a snapshot of the room's membership, if anyone has joined.
    pub fn get_membership(&self, room: &str) -> Option<MembershipRecord> {
        self.members.get(room)
    }
}
