//! Playback control API.
//!
//! Executes the commands decided by `soundhaven_core::PlayerState`.

use crate::error::{ClientError, Result};
use crate::response;
use crate::types::{PlayRequest, TransferRequest};
use reqwest::Client;
use soundhaven_core::PlayerCommand;
use tracing::debug;

/// Client for the streaming service's player endpoints.
pub struct PlayerClient<'a> {
    http: &'a Client,
    base_url: &'a str,
    access_token: &'a str,
}

impl<'a> PlayerClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str, access_token: &'a str) -> Self {
        Self {
            http,
            base_url,
            access_token,
        }
    }

    /// Send one command.
    pub async fn execute(&self, command: &PlayerCommand) -> Result<()> {
        debug!(command = ?command, "Sending player command");

        let request = match command {
            PlayerCommand::Transfer { device_id } => self
                .http
                .put(format!("{}/v1/me/player", self.base_url))
                .json(&TransferRequest {
                    device_ids: [device_id.as_str()],
                    play: true,
                }),
            PlayerCommand::Resume { device_id } => self
                .http
                .put(format!("{}/v1/me/player/play", self.base_url))
                .query(&[("device_id", device_id.as_str())]),
            PlayerCommand::Play { device_id, uri } => self
                .http
                .put(format!("{}/v1/me/player/play", self.base_url))
                .query(&[("device_id", device_id.as_str())])
                .json(&PlayRequest {
                    uris: [uri.as_str()],
                }),
            PlayerCommand::Pause { device_id } => self
                .http
                .put(format!("{}/v1/me/player/pause", self.base_url))
                .query(&[("device_id", device_id.as_str())]),
        };

        let response = request
            .bearer_auth(self.access_token)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        response::check(response).await?;
        Ok(())
    }

    /// Send commands in order, stopping at the first failure.
    pub async fn execute_all(&self, commands: &[PlayerCommand]) -> Result<()> {
        for command in commands {
            self.execute(command).await?;
        }
        Ok(())
    }
}
