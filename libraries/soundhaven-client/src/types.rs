//! Types for SoundHaven API requests and responses.

use serde::{Deserialize, Serialize};

/// Default base URL of the playback control API
pub const DEFAULT_PLAYER_API_URL: &str = "https://api.spotify.com";

/// Configuration for connecting to the SoundHaven backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend (e.g., "https://soundhaven.example.com")
    pub url: String,
    /// Base URL of the playback control API
    pub player_url: String,
    /// Current access token (if authenticated)
    pub access_token: Option<String>,
}

impl ClientConfig {
    /// Create a new config with just the backend URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            player_url: DEFAULT_PLAYER_API_URL.to_string(),
            access_token: None,
        }
    }

    /// Use a different playback control API (e.g., a local mock).
    pub fn with_player_url(mut self, player_url: impl Into<String>) -> Self {
        self.player_url = player_url.into();
        self
    }

    /// Start with an access token already known.
    pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }
}

// =============================================================================
// Authentication Types
// =============================================================================

/// Response from `GET /api/auth/refresh`.
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

// =============================================================================
// Playlist Types
// =============================================================================

/// Request body for `POST /api/playlist/add`.
#[derive(Debug, Serialize)]
pub struct AddTrackRequest<'a> {
    pub uri: &'a str,
}

/// Response from `GET /api/playlist/exists`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistExists {
    pub exists: bool,
}

// =============================================================================
// Player Types
// =============================================================================

/// Request body for `PUT /v1/me/player`.
#[derive(Debug, Serialize)]
pub struct TransferRequest<'a> {
    pub device_ids: [&'a str; 1],
    pub play: bool,
}

/// Request body for `PUT /v1/me/player/play` when starting a new track.
#[derive(Debug, Serialize)]
pub struct PlayRequest<'a> {
    pub uris: [&'a str; 1],
}
