//! Error types for the room layer.

/// Errors that can occur during room operations.
///
/// Every variant carries the room name it refers to. None of them carry
/// a password: a mismatch only says *which* room rejected the attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoomError {
    /// No room with this name has been created.
    #[error("room {0} not found")]
    NotFound(String),

    /// A room with this name already exists.
    #[error("room {0} already exists")]
    AlreadyExists(String),

    /// The supplied password differs from the one set at creation.
    #[error("password validation for room {0} failed")]
    PasswordMismatch(String),

    /// Neither the host slot nor a participant slot could be taken.
    /// The host may already be assigned and the room full, or the room
    /// may have no host yet for an observer to watch.
    #[error("failed to join the room {0}")]
    JoinFailed(String),
}
