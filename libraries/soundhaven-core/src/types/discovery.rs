/// Discovery log types
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Card, TrackUri, UserId};

/// A persisted record of a card the user chose.
///
/// One entry exists per (user, day, track) choice. `added` flips to true
/// once the track lands in the user's playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryLogEntry {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub user_id: Option<UserId>,
    pub card_title: String,
    pub track_uri: TrackUri,
    #[serde(default)]
    pub added: bool,
    pub created_at: DateTime<Utc>,
}

/// The choice already persisted for today (`GET /api/discovery/today`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayDiscovery {
    pub track_uri: TrackUri,
    #[serde(default)]
    pub added: bool,
}

impl TodayDiscovery {
    pub fn new(track_uri: impl Into<String>) -> Self {
        Self {
            track_uri: TrackUri::new(track_uri),
            added: false,
        }
    }
}

/// Request body for `POST /api/discovery`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryChoice {
    pub user_id: UserId,
    pub card_title: String,
    pub track_uri: TrackUri,
    pub added: bool,
}

impl DiscoveryChoice {
    /// A freshly committed choice, not yet in the playlist
    pub fn committed(user_id: UserId, card: &Card) -> Self {
        Self {
            user_id,
            card_title: card.title.clone(),
            track_uri: card.track_uri.clone(),
            added: false,
        }
    }
}

/// Request body for `POST /api/discovery/mark-as-added`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkAsAdded {
    pub user_id: UserId,
    pub track_uri: TrackUri,
}
