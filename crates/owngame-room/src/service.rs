//! Room service: create rooms, check passwords, and hand out roles.
//!
//! This is the entry point for room operations from the request layer.
//! It owns nothing itself; both registries are injected so several
//! services (or tests) can share or isolate them as needed.

use std::sync::Arc;

use crate::{
    MembershipRecord, MembershipRegistry, PlayerRole, RoomConfig, RoomCreateRequest, RoomError,
    RoomInfo, RoomMeta, RoomRegistry,
};

/// Implements the room-join protocol on top of the two registries.
///
/// Per room, membership moves through:
///
/// ```text
/// Unassigned ──(first join)──→ HostAssigned ──(max_participants joins)──→ Full
/// ```
///
/// - **Unassigned**: room exists, nobody has joined yet.
/// - **HostAssigned**: the first joiner became host; later joiners become
///   participants.
/// - **Full**: every participant slot is taken; joins fail. Observers can
///   still enter.
///
/// Cheap to clone; clones share the same registries.
#[derive(Debug, Clone)]
pub struct RoomService {
    config: RoomConfig,
    rooms: Arc<RoomRegistry>,
    members: Arc<MembershipRegistry>,
}

impl RoomService {
    /// Creates a service over existing registries.
    pub fn new(
        config: RoomConfig,
        rooms: Arc<RoomRegistry>,
        members: Arc<MembershipRegistry>,
    ) -> Self {
        Self {
            config,
            rooms,
            members,
        }
    }

    /// Creates a service with fresh, empty registries.
    pub fn with_config(config: RoomConfig) -> Self {
        Self::new(
            config,
            Arc::new(RoomRegistry::new()),
            Arc::new(MembershipRegistry::new()),
        )
    }

    /// Returns the configuration applied to new rooms.
    pub fn config(&self) -> &RoomConfig {
        &self.config
    }

    /// Creates a room named `request.name`.
    ///
    /// `room_token` is the creator's opaque handle; it is only recorded in
    /// the log.
    ///
    /// # Errors
    /// [`RoomError::AlreadyExists`] if the name is taken.
    pub fn create_room(
        &self,
        request: &RoomCreateRequest,
        room_token: &str,
    ) -> Result<(), RoomError> {
        let meta = RoomMeta {
            name: request.name.clone(),
            password: request.password.clone(),
            max_participants: self.config.max_participants,
        };

        if !self.rooms.put_room_meta(meta) {
            tracing::debug!(room = %request.name, "room creation rejected, name taken");
            return Err(RoomError::AlreadyExists(request.name.clone()));
        }

        tracing::info!(
            room = %request.name,
            creator = %room_token,
            max_participants = self.config.max_participants,
            "room created"
        );
        Ok(())
    }

    /// Checks `password` against the one the room was created with.
    ///
    /// # Errors
    /// - [`RoomError::NotFound`] if the room doesn't exist (checked first).
    /// - [`RoomError::PasswordMismatch`] if the passwords differ.
    pub fn check_password(&self, room: &str, password: &str) -> Result<(), RoomError> {
        let meta = self.room_meta(room)?;
        if meta.password != password {
            tracing::debug!(%room, "password mismatch");
            return Err(RoomError::PasswordMismatch(room.to_owned()));
        }
        Ok(())
    }

    /// Joins `identity` to `room` and returns the role it was given.
    ///
    /// The first caller to win the host slot becomes [`PlayerRole::Host`].
    /// Everyone else tries for a participant slot. The host slot is not
    /// counted against `max_participants`.
    ///
    /// # Errors
    /// - [`RoomError::NotFound`] if the room doesn't exist.
    /// - [`RoomError::JoinFailed`] if neither slot could be taken.
    pub fn join_room(&self, room: &str, identity: &str) -> Result<PlayerRole, RoomError> {
        let meta = self.room_meta(room)?;

        if self.members.put_host(room, identity) {
            tracing::info!(%room, player = %identity, "host assigned");
            return Ok(PlayerRole::Host);
        }

        if self.members.add_participant(&meta, identity) {
            tracing::info!(%room, player = %identity, "participant joined");
            return Ok(PlayerRole::Participant);
        }

        tracing::debug!(
            %room,
            player = %identity,
            max_participants = meta.max_participants,
            "join rejected, room full"
        );
        Err(RoomError::JoinFailed(room.to_owned()))
    }

    /// Adds `identity` to the room's observers.
    ///
    /// Observers do not take a slot, but can only enter once a host exists.
    ///
    /// # Errors
    /// - [`RoomError::NotFound`] if the room doesn't exist.
    /// - [`RoomError::JoinFailed`] if no host has joined yet.
    pub fn observe_room(&self, room: &str, identity: &str) -> Result<PlayerRole, RoomError> {
        self.room_meta(room)?;

        if !self.members.add_observer(room, identity) {
            tracing::debug!(%room, player = %identity, "observe rejected, no host yet");
            return Err(RoomError::JoinFailed(room.to_owned()));
        }

        tracing::info!(%room, player = %identity, "observer joined");
        Ok(PlayerRole::Observer)
    }

    /// Returns a password-free snapshot of the room.
    ///
    /// # Errors
    /// [`RoomError::NotFound`] if the room doesn't exist.
    pub fn room_info(&self, room: &str) -> Result<RoomInfo, RoomError> {
        let meta = self.room_meta(room)?;
        let members = self.members.get_membership(room);
        Ok(RoomInfo::from_parts(&meta, members.as_ref()))
    }

    /// Returns a snapshot of the room's membership, if anyone has joined.
    pub fn membership(&self, room: &str) -> Option<MembershipRecord> {
        self.members.get_membership(room)
    }

    /// Lists snapshots of every room, in no particular order.
    pub fn list_rooms(&self) -> Vec<RoomInfo> {
        self.rooms
            .room_names()
            .iter()
            .filter_map(|name| self.room_info(name).ok())
            .collect()
    }

    fn room_meta(&self, room: &str) -> Result<RoomMeta, RoomError> {
        self.rooms
            .get_room_meta(room)
            .ok_or_else(|| RoomError::NotFound(room.to_owned()))
    }
}

impl Default for RoomService {
    fn default() -> Self {
        Self::with_config(RoomConfig::default())
    }
}
