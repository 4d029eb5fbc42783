/// Core error types for SoundHaven
use thiserror::Error;

use crate::types::TrackUri;

/// Result type alias using `SessionError`
pub type Result<T> = std::result::Result<T, SessionError>;

/// Error reported by a collaborator (backend or playback surface).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollaboratorError {
    /// Credentials missing, expired or rejected
    #[error("Unauthorized")]
    Unauthorized,

    /// Requested resource does not exist
    #[error("Not found")]
    NotFound,

    /// Any other failure (network, non-2xx status, malformed body)
    #[error("{0}")]
    Failed(String),
}

impl CollaboratorError {
    /// Create a generic failure
    pub fn failed(msg: impl Into<String>) -> Self {
        Self::Failed(msg.into())
    }
}

/// Error type for session operations.
///
/// Mirrors the client taxonomy: auth failures send the user back to login,
/// load failures leave stale state in place, mutation failures leave the
/// affected control actionable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Refresh or login failed; the user is logged out
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Cards or discovery log could not be fetched
    #[error("Load error: {0}")]
    Load(String),

    /// Playlist or discovery log write failed
    #[error("Mutation error: {0}")]
    Mutation(String),

    /// Card index outside the daily set
    #[error("Card index {index} out of range (daily set has {len} cards)")]
    InvalidIndex { index: usize, len: usize },

    /// No card is open and no explicit target was given
    #[error("No card is open")]
    NothingOpen,

    /// Target track is not part of today's set
    #[error("Track is not in today's set: {0}")]
    UnknownTrack(TrackUri),

    /// Track was already added to the playlist
    #[error("Track already added: {0}")]
    AlreadyAdded(TrackUri),

    /// No daily set has been loaded yet
    #[error("Session not loaded")]
    NotLoaded,
}

impl SessionError {
    /// Classify a collaborator failure raised while loading
    pub fn load(err: CollaboratorError) -> Self {
        match err {
            CollaboratorError::Unauthorized => Self::Auth(err.to_string()),
            other => Self::Load(other.to_string()),
        }
    }

    /// Classify a collaborator failure raised while mutating
    pub fn mutation(err: CollaboratorError) -> Self {
        match err {
            CollaboratorError::Unauthorized => Self::Auth(err.to_string()),
            other => Self::Mutation(other.to_string()),
        }
    }

    /// Whether this error means the user should be sent back to login
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_classifies_as_auth() {
        assert!(SessionError::load(CollaboratorError::Unauthorized).is_auth());
        assert!(SessionError::mutation(CollaboratorError::Unauthorized).is_auth());
    }

    #[test]
    fn test_failures_keep_their_kind() {
        let err = SessionError::load(CollaboratorError::failed("HTTP 500"));
        assert_eq!(err, SessionError::Load("HTTP 500".to_string()));

        let err = SessionError::mutation(CollaboratorError::NotFound);
        assert_eq!(err, SessionError::Mutation("Not found".to_string()));
    }
}
