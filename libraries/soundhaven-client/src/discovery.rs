//! Discovery log endpoints.

use crate::error::{ClientError, Result};
use crate::response;
use reqwest::Client;
use soundhaven_core::{DiscoveryChoice, DiscoveryLogEntry, MarkAsAdded, TodayDiscovery, UserId};
use tracing::debug;

/// Discovery log client for the SoundHaven backend.
pub struct DiscoveryClient<'a> {
    http: &'a Client,
    base_url: &'a str,
    access_token: &'a str,
}

impl<'a> DiscoveryClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str, access_token: &'a str) -> Self {
        Self {
            http,
            base_url,
            access_token,
        }
    }

    /// The choice persisted for today, `None` if the user has not chosen yet.
    pub async fn today(&self, user_id: &UserId) -> Result<Option<TodayDiscovery>> {
        let url = format!("{}/api/discovery/today", self.base_url);
        debug!(url = %url, user_id = %user_id, "Fetching today's discovery");

        let response = self
            .http
            .get(&url)
            .query(&[("userId", user_id.as_str())])
            .bearer_auth(self.access_token)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        match response::json(response, "today's discovery").await {
            Ok(today) => Ok(Some(today)),
            Err(ClientError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Every logged discovery of a user.
    pub async fn all(&self, user_id: &UserId) -> Result<Vec<DiscoveryLogEntry>> {
        let url = format!("{}/api/discovery/all", self.base_url);
        debug!(url = %url, user_id = %user_id, "Fetching discovery log");

        let response = self
            .http
            .get(&url)
            .query(&[("userId", user_id.as_str())])
            .bearer_auth(self.access_token)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        let entries: Vec<DiscoveryLogEntry> = response::json(response, "discovery log").await?;
        debug!(entries = entries.len(), "Fetched discovery log");
        Ok(entries)
    }

    /// Persist a committed choice.
    pub async fn save(&self, choice: &DiscoveryChoice) -> Result<()> {
        let url = format!("{}/api/discovery", self.base_url);
        debug!(url = %url, track_uri = %choice.track_uri, "Saving discovery");

        let response = self
            .http
            .post(&url)
            .bearer_auth(self.access_token)
            .json(choice)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        response::check(response).await?;
        Ok(())
    }

    /// Flag a logged choice as added to the playlist.
    pub async fn mark_as_added(&self, request: &MarkAsAdded) -> Result<()> {
        let url = format!("{}/api/discovery/mark-as-added", self.base_url);
        debug!(url = %url, track_uri = %request.track_uri, "Marking discovery as added");

        let response = self
            .http
            .post(&url)
            .bearer_auth(self.access_token)
            .json(request)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        response::check(response).await?;
        Ok(())
    }
}
