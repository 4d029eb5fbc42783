//! Auth session lifecycle.
//!
//! An `AuthSession` is acquired once at startup and released on logout.
//! Consumers receive it (or an [`ApiHandle`] derived from it) explicitly.

use crate::client::{ApiHandle, SoundHavenClient};
use crate::error::Result;
use tracing::{debug, info, warn};
use url::Url;

/// Name of the query parameter the backend appends after OAuth login
const ACCESS_TOKEN_PARAM: &str = "access_token";

/// Extract the access token from a login callback URL.
///
/// Accepts absolute URLs and bare paths such as `/cards?access_token=...`.
pub fn token_from_callback(callback: &str) -> Option<String> {
    let parsed = Url::parse(callback).or_else(|_| {
        Url::parse("http://localhost")
            .and_then(|base| base.join(callback))
    });

    let url = parsed.ok()?;
    url.query_pairs()
        .find(|(key, _)| key == ACCESS_TOKEN_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|token| !token.is_empty())
}

/// An acquired (possibly logged-out) session with the backend
pub struct AuthSession {
    client: SoundHavenClient,
}

impl AuthSession {
    /// Bootstrap the session.
    ///
    /// The token comes from the callback URL if one carries it, otherwise
    /// from the client's configuration, otherwise from the refresh cookie.
    /// A failed refresh leaves the session logged out; it is not an error.
    pub async fn start(client: SoundHavenClient, callback_url: Option<&str>) -> Self {
        if let Some(token) = callback_url.and_then(token_from_callback) {
            info!("Using access token from login callback");
            client.set_access_token(token).await;
            return Self { client };
        }

        if client.is_authenticated().await {
            debug!("Using configured access token");
            return Self { client };
        }

        match client.refresh().await {
            Ok(_) => info!("Session restored from refresh cookie"),
            Err(e) => {
                warn!(error = %e, "Not authenticated");
                client.clear_access_token().await;
            }
        }

        Self { client }
    }

    pub fn client(&self) -> &SoundHavenClient {
        &self.client
    }

    pub async fn is_authenticated(&self) -> bool {
        self.client.is_authenticated().await
    }

    /// Handle for authenticated calls; fails when logged out.
    pub async fn api(&self) -> Result<ApiHandle> {
        self.client.api().await
    }

    /// Release the session: log out on the server and drop the token.
    ///
    /// Returns the client so a new session can be started with it.
    pub async fn end(self) -> SoundHavenClient {
        if let Err(e) = self.client.logout().await {
            warn!(error = %e, "Server logout failed, token dropped locally");
        }
        self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_from_absolute_callback() {
        assert_eq!(
            token_from_callback("https://app.example.com/cards?access_token=abc123&x=1"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_token_from_relative_callback() {
        assert_eq!(
            token_from_callback("/?access_token=tok%2Fen"),
            Some("tok/en".to_string())
        );
    }

    #[test]
    fn test_no_token() {
        assert_eq!(token_from_callback("https://app.example.com/cards"), None);
        assert_eq!(token_from_callback("/?access_token="), None);
    }
}
