//! SoundHaven Client
//!
//! HTTP client library for the SoundHaven backend and the streaming
//! service's playback API.
//!
//! # Features
//!
//! - **Authentication**: login URL, cookie-based token refresh, logout
//! - **Cards**: today's daily set and the full catalog
//! - **Discovery log**: today's choice, history, persist, mark as added
//! - **Playlist**: create, existence check, add track
//! - **Player**: transfer, play, resume and pause commands
//!
//! `ApiHandle` implements `soundhaven_core::DailyCardsApi`, so it plugs
//! straight into a `SessionController`.
//!
//! # Example
//!
//! ```ignore
//! use soundhaven_client::{AuthSession, ClientConfig, SoundHavenClient};
//! use soundhaven_core::SessionController;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SoundHavenClient::new(ClientConfig::new("https://soundhaven.example.com"))?;
//!     let session = AuthSession::start(client, None).await;
//!
//!     let api = session.api().await?;
//!     let me = api.me().await?;
//!
//!     let mut controller = SessionController::new(api, me.user_id, chrono::Utc::now());
//!     controller.load_daily().await?;
//!     controller.select_card(0).await?;
//!
//!     Ok(())
//! }
//! ```

mod auth;
mod cards;
mod client;
mod discovery;
mod error;
mod player;
mod playlist;
mod response;
mod session;
mod types;

// Re-export main types
pub use client::{ApiHandle, SoundHavenClient};
pub use error::{ClientError, Result};
pub use session::{token_from_callback, AuthSession};
pub use types::{ClientConfig, RefreshResponse, DEFAULT_PLAYER_API_URL};

// Re-export sub-clients for direct use if needed
pub use auth::AuthClient;
pub use cards::CardsClient;
pub use discovery::DiscoveryClient;
pub use player::PlayerClient;
pub use playlist::PlaylistClient;
