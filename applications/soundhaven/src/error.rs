/// Application error types
use soundhaven_client::ClientError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("State file error: {0}")]
    State(String),

    #[error("Not logged in (run `soundhaven login`)")]
    NotLoggedIn,

    #[error("Finish the onboarding guide first (run `soundhaven guide`)")]
    GuideNotFinished,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    #[error("Session error: {0}")]
    Session(#[from] soundhaven_core::SessionError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Whether the backend rejected the stored token
    pub fn is_auth(&self) -> bool {
        match self {
            AppError::Client(err) => matches!(err, ClientError::AuthRequired),
            AppError::Session(err) => err.is_auth(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soundhaven_core::{CollaboratorError, SessionError};

    #[test]
    fn test_auth_failures_are_recognized() {
        assert!(AppError::Client(ClientError::AuthRequired).is_auth());
        assert!(AppError::Session(SessionError::load(CollaboratorError::Unauthorized)).is_auth());
        assert!(!AppError::Session(SessionError::NothingOpen).is_auth());
        assert!(!AppError::Client(ClientError::NotFound("x".into())).is_auth());
        assert!(!AppError::NotLoggedIn.is_auth());
    }
}
