/// ID types for SoundHaven entities
use serde::{Deserialize, Serialize};
use std::fmt;

/// User identifier as issued by the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Create a new user ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Streaming-service track URI (e.g. `spotify:track:...`).
///
/// This is the identity of a card.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackUri(String);

impl TrackUri {
    /// Create a new track URI
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TrackUri {
    fn from(uri: &str) -> Self {
        Self::new(uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_serialize_transparently() {
        let uri = TrackUri::new("spotify:track:abc");
        assert_eq!(
            serde_json::to_string(&uri).unwrap(),
            "\"spotify:track:abc\""
        );

        let user: UserId = serde_json::from_str("\"u-42\"").unwrap();
        assert_eq!(user.as_str(), "u-42");
        assert_eq!(user.to_string(), "u-42");
    }
}
