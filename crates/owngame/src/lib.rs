//! # Owngame
//!
//! In-memory game room state for Owngame servers.
//!
//! The request layer (HTTP handlers, WebSocket sessions, ...) calls into a
//! [`RoomService`] to create password-protected rooms and join players to
//! them. The first joiner becomes host, the next `max_participants`
//! become participants, and everyone after that is rejected. All state
//! lives in process memory and is safe to share across threads.
//!
//! ## Quick Start
//!
//! ```rust
//! use owngame::prelude::*;
//!
//! let service = RoomService::with_config(RoomConfig::default());
//! service.create_room(&RoomCreateRequest::new("A", "p"), "creator")?;
//! service.check_password("A", "p")?;
//! assert_eq!(service.join_room("A", "alice")?, PlayerRole::Host);
//! assert_eq!(service.join_room("A", "bob")?, PlayerRole::Participant);
//! # Ok::<(), OwngameError>(())
//! ```

mod config;
mod error;
mod telemetry;

pub use config::{DEFAULT_LOG_FILTER, ServerConfig};
pub use error::OwngameError;
pub use telemetry::init_tracing;

pub use owngame_room::{
    DEFAULT_MAX_PARTICIPANTS, MembershipRecord, MembershipRegistry, PlayerRole, RoomConfig,
    RoomCreateRequest, RoomError, RoomInfo, RoomMeta, RoomRegistry, RoomService,
};
pub use owngame_store::KeyedStore;

/// Everything a request layer usually needs, in one import.
pub mod prelude {
    pub use crate::{
        OwngameError, PlayerRole, RoomConfig, RoomCreateRequest, RoomError, RoomInfo,
        RoomService, ServerConfig, init_tracing,
    };
}
