//! Authentication endpoints of the SoundHaven backend.
//!
//! Login itself is a browser redirect to the OAuth provider; the backend
//! keeps the refresh token in an HTTP-only cookie, so refresh and logout
//! only need the cookie store.

use crate::error::{ClientError, Result};
use crate::response;
use crate::types::RefreshResponse;
use reqwest::Client;
use soundhaven_core::UserProfile;
use tracing::{debug, info, warn};

/// Authentication client for the SoundHaven backend.
pub struct AuthClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> AuthClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// URL to send the user to for OAuth login.
    pub fn login_url(&self) -> String {
        format!("{}/api/auth/login", self.base_url)
    }

    /// Exchange the refresh cookie for a fresh access token.
    pub async fn refresh(&self) -> Result<RefreshResponse> {
        let url = format!("{}/api/auth/refresh", self.base_url);
        debug!(url = %url, "Refreshing access token");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        match response::json::<RefreshResponse>(response, "refresh response").await {
            Ok(refresh) => {
                debug!("Token refresh successful");
                Ok(refresh)
            }
            Err(e) => {
                warn!(error = %e, "Token refresh failed");
                Err(e)
            }
        }
    }

    /// Clear the session cookie on the backend.
    pub async fn logout(&self) -> Result<()> {
        let url = format!("{}/api/auth/logout", self.base_url);
        debug!(url = %url, "Logging out");

        let response = self
            .http
            .post(&url)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        response::check(response).await?;
        info!("Logged out on server");
        Ok(())
    }

    /// Get the profile behind an access token.
    pub async fn me(&self, access_token: &str) -> Result<UserProfile> {
        let url = format!("{}/api/me", self.base_url);
        debug!(url = %url, "Getting current user");

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        response::json(response, "user profile").await
    }
}
