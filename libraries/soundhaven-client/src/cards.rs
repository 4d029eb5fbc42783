//! Card endpoints.

use crate::error::{ClientError, Result};
use crate::response;
use reqwest::Client;
use soundhaven_core::{Card, UserId};
use tracing::debug;

/// Card client for the SoundHaven backend.
pub struct CardsClient<'a> {
    http: &'a Client,
    base_url: &'a str,
    access_token: &'a str,
}

impl<'a> CardsClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str, access_token: &'a str) -> Self {
        Self {
            http,
            base_url,
            access_token,
        }
    }

    /// Today's card set for a user.
    pub async fn daily(&self, user_id: &UserId) -> Result<Vec<Card>> {
        let url = format!("{}/api/cards/daily", self.base_url);
        debug!(url = %url, user_id = %user_id, "Fetching daily cards");

        let response = self
            .http
            .get(&url)
            .query(&[("userId", user_id.as_str())])
            .bearer_auth(self.access_token)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        let cards: Vec<Card> = response::json(response, "daily cards").await?;
        debug!(count = cards.len(), "Fetched daily cards");
        Ok(cards)
    }

    /// The full card catalog, used to render past discoveries.
    pub async fn catalog(&self) -> Result<Vec<Card>> {
        let url = format!("{}/api/cards", self.base_url);
        debug!(url = %url, "Fetching card catalog");

        let response = self
            .http
            .get(&url)
            .bearer_auth(self.access_token)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        response::json(response, "card catalog").await
    }
}
