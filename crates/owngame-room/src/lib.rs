//! Room state management for Owngame.
//!
//! Rooms are created once by name, protected by a password, and filled by
//! a join protocol: the first joiner becomes host, the next
//! `max_participants` joiners become participants, and anyone after that
//! is turned away. All state is held in memory by two typed registries
//! built on [`owngame_store::KeyedStore`].
//!
//! # Key types
//!
//! - [`RoomService`]: create / check password / join / observe
//! - [`RoomRegistry`]: room metadata, one entry per name
//! - [`MembershipRegistry`]: host, participants, and observers per room
//! - [`RoomConfig`]: capacity applied to new rooms
//! - [`RoomError`]: what can go wrong

mod config;
mod error;
mod model;
mod registry;
mod service;

pub use config::{DEFAULT_MAX_PARTICIPANTS, RoomConfig};
pub use error::RoomError;
pub use model::{MembershipRecord, PlayerRole, RoomCreateRequest, RoomInfo, RoomMeta};
pub use registry::{MembershipRegistry, RoomRegistry};
pub use service::RoomService;
