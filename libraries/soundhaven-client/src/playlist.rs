//! Managed playlist endpoints.

use crate::error::{ClientError, Result};
use crate::response;
use crate::types::{AddTrackRequest, PlaylistExists};
use reqwest::Client;
use soundhaven_core::TrackUri;
use tracing::{debug, info};

/// Playlist client for the SoundHaven backend.
pub struct PlaylistClient<'a> {
    http: &'a Client,
    base_url: &'a str,
    access_token: &'a str,
}

impl<'a> PlaylistClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str, access_token: &'a str) -> Self {
        Self {
            http,
            base_url,
            access_token,
        }
    }

    /// Create the user's SoundHaven playlist.
    pub async fn create(&self) -> Result<()> {
        let url = format!("{}/api/playlist/create", self.base_url);
        debug!(url = %url, "Creating playlist");

        let response = self
            .http
            .post(&url)
            .bearer_auth(self.access_token)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        response::check(response).await?;
        info!("Playlist created");
        Ok(())
    }

    /// Whether the user's SoundHaven playlist exists.
    pub async fn exists(&self) -> Result<bool> {
        let url = format!("{}/api/playlist/exists", self.base_url);
        debug!(url = %url, "Checking playlist");

        let response = self
            .http
            .get(&url)
            .bearer_auth(self.access_token)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        let body: PlaylistExists = response::json(response, "playlist status").await?;
        Ok(body.exists)
    }

    /// Append a track to the playlist.
    pub async fn add(&self, uri: &TrackUri) -> Result<()> {
        let url = format!("{}/api/playlist/add", self.base_url);
        debug!(url = %url, track_uri = %uri, "Adding track to playlist");

        let response = self
            .http
            .post(&url)
            .bearer_auth(self.access_token)
            .json(&AddTrackRequest { uri: uri.as_str() })
            .send()
            .await
            .map_err(ClientError::from_send)?;

        response::check(response).await?;
        Ok(())
    }
}
