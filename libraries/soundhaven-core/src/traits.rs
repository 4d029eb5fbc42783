/// Collaborator seam for the daily card session
use async_trait::async_trait;

use crate::error::CollaboratorError;
use crate::types::{Card, DiscoveryChoice, MarkAsAdded, TodayDiscovery, TrackUri, UserId};

/// Backend operations the daily session depends on.
///
/// Implemented by the HTTP client; tests provide in-memory fakes.
#[async_trait]
pub trait DailyCardsApi: Send + Sync {
    /// Today's fixed-size card set for the user
    async fn daily_cards(&self, user_id: &UserId) -> Result<Vec<Card>, CollaboratorError>;

    /// The choice already persisted for today, if any
    ///
    /// # Errors
    /// Implementations may report "no choice yet" either as `Ok(None)` or as
    /// `CollaboratorError::NotFound`; callers treat both the same.
    async fn today_discovery(
        &self,
        user_id: &UserId,
    ) -> Result<Option<TodayDiscovery>, CollaboratorError>;

    /// Persist a committed choice to the discovery log
    async fn save_discovery(&self, choice: &DiscoveryChoice) -> Result<(), CollaboratorError>;

    /// Flag a logged choice as added to the playlist
    async fn mark_as_added(&self, request: &MarkAsAdded) -> Result<(), CollaboratorError>;

    /// Add a track to the managed playlist
    async fn add_to_playlist(&self, uri: &TrackUri) -> Result<(), CollaboratorError>;
}
