//! Main SoundHaven client.

use crate::auth::AuthClient;
use crate::cards::CardsClient;
use crate::discovery::DiscoveryClient;
use crate::error::{ClientError, Result};
use crate::player::PlayerClient;
use crate::playlist::PlaylistClient;
use crate::types::ClientConfig;
use async_trait::async_trait;
use reqwest::Client;
use soundhaven_core::{
    Card, CollaboratorError, DailyCardsApi, DiscoveryChoice, MarkAsAdded, TodayDiscovery,
    TrackUri, UserId, UserProfile,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Client for the SoundHaven backend.
///
/// Holds the HTTP client (with a cookie store for the refresh cookie) and
/// the current access token. Authenticated calls go through an
/// [`ApiHandle`] obtained from [`SoundHavenClient::api`].
///
/// # Example
///
/// ```ignore
/// use soundhaven_client::{ClientConfig, SoundHavenClient};
///
/// let client = SoundHavenClient::new(ClientConfig::new("https://soundhaven.example.com"))?;
/// client.refresh().await?;
///
/// let api = client.api().await?;
/// let me = api.me().await?;
/// let cards = api.cards().daily(&me.user_id).await?;
/// ```
pub struct SoundHavenClient {
    http: Client,
    config: Arc<RwLock<ClientConfig>>,
}

impl SoundHavenClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let normalized_config = ClientConfig {
            url: normalize_url(&config.url)?,
            player_url: normalize_url(&config.player_url)?,
            access_token: config.access_token,
        };

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .cookie_store(true)
            .user_agent(format!("SoundHaven/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self {
            http,
            config: Arc::new(RwLock::new(normalized_config)),
        })
    }

    /// Get the backend URL.
    pub async fn url(&self) -> String {
        self.config.read().await.url.clone()
    }

    /// Check if the client has an access token.
    pub async fn is_authenticated(&self) -> bool {
        self.config.read().await.access_token.is_some()
    }

    /// Get the current access token.
    pub async fn access_token(&self) -> Option<String> {
        self.config.read().await.access_token.clone()
    }

    /// Set the access token directly (e.g., from a login callback).
    pub async fn set_access_token(&self, access_token: String) {
        self.config.write().await.access_token = Some(access_token);
    }

    /// Drop the access token locally.
    pub async fn clear_access_token(&self) {
        self.config.write().await.access_token = None;
    }

    /// URL that starts the OAuth login.
    pub async fn login_url(&self) -> String {
        let url = self.url().await;
        AuthClient::new(&self.http, &url).login_url()
    }

    /// Obtain a new access token from the refresh cookie.
    ///
    /// On success the token is stored for subsequent requests.
    pub async fn refresh(&self) -> Result<String> {
        let url = self.url().await;

        let response = AuthClient::new(&self.http, &url).refresh().await?;
        self.set_access_token(response.access_token.clone()).await;

        Ok(response.access_token)
    }

    /// End the session on the server.
    ///
    /// The local token is cleared whether or not the server call succeeds.
    pub async fn logout(&self) -> Result<()> {
        let url = self.url().await;

        let result = AuthClient::new(&self.http, &url).logout().await;
        self.clear_access_token().await;
        info!("Logged out");

        result
    }

    /// Get a handle for authenticated operations.
    ///
    /// Returns an error if not authenticated.
    pub async fn api(&self) -> Result<ApiHandle> {
        let config = self.config.read().await;
        let access_token = config
            .access_token
            .clone()
            .ok_or(ClientError::AuthRequired)?;

        Ok(ApiHandle {
            http: self.http.clone(),
            url: config.url.clone(),
            player_url: config.player_url.clone(),
            access_token,
        })
    }
}

fn normalize_url(url: &str) -> Result<String> {
    if url.is_empty() {
        return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
    }

    let url = url.trim_end_matches('/').to_string();
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ClientError::InvalidUrl(
            "URL must start with http:// or https://".into(),
        ));
    }

    Ok(url)
}

/// Authenticated access to the backend and the player API.
///
/// Captures the token at creation; obtain a new handle after the token
/// changes.
#[derive(Clone)]
pub struct ApiHandle {
    http: Client,
    url: String,
    player_url: String,
    access_token: String,
}

impl ApiHandle {
    pub fn cards(&self) -> CardsClient<'_> {
        CardsClient::new(&self.http, &self.url, &self.access_token)
    }

    pub fn discovery(&self) -> DiscoveryClient<'_> {
        DiscoveryClient::new(&self.http, &self.url, &self.access_token)
    }

    pub fn playlist(&self) -> PlaylistClient<'_> {
        PlaylistClient::new(&self.http, &self.url, &self.access_token)
    }

    pub fn player(&self) -> PlayerClient<'_> {
        PlayerClient::new(&self.http, &self.player_url, &self.access_token)
    }

    /// Profile of the logged-in user.
    pub async fn me(&self) -> Result<UserProfile> {
        AuthClient::new(&self.http, &self.url)
            .me(&self.access_token)
            .await
    }
}

#[async_trait]
impl DailyCardsApi for ApiHandle {
    async fn daily_cards(
        &self,
        user_id: &UserId,
    ) -> std::result::Result<Vec<Card>, CollaboratorError> {
        Ok(self.cards().daily(user_id).await?)
    }

    async fn today_discovery(
        &self,
        user_id: &UserId,
    ) -> std::result::Result<Option<TodayDiscovery>, CollaboratorError> {
        Ok(self.discovery().today(user_id).await?)
    }

    async fn save_discovery(
        &self,
        choice: &DiscoveryChoice,
    ) -> std::result::Result<(), CollaboratorError> {
        Ok(self.discovery().save(choice).await?)
    }

    async fn mark_as_added(
        &self,
        request: &MarkAsAdded,
    ) -> std::result::Result<(), CollaboratorError> {
        Ok(self.discovery().mark_as_added(request).await?)
    }

    async fn add_to_playlist(&self, uri: &TrackUri) -> std::result::Result<(), CollaboratorError> {
        debug!(track_uri = %uri, "Adding track via collaborator");
        Ok(self.playlist().add(uri).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation() {
        // Valid URLs
        assert!(SoundHavenClient::new(ClientConfig::new("https://example.com")).is_ok());
        assert!(SoundHavenClient::new(ClientConfig::new("http://localhost:8080")).is_ok());

        // Invalid URLs
        assert!(SoundHavenClient::new(ClientConfig::new("")).is_err());
        assert!(SoundHavenClient::new(ClientConfig::new("not-a-url")).is_err());
        assert!(SoundHavenClient::new(
            ClientConfig::new("https://example.com").with_player_url("ftp://player")
        )
        .is_err());
    }

    #[test]
    fn test_url_normalization() {
        let client =
            SoundHavenClient::new(ClientConfig::new("https://example.com//")).expect("valid url");

        let url = tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(client.url());
        assert_eq!(url, "https://example.com");
    }
}
