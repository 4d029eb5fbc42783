/// Card type
use serde::{Deserialize, Serialize};

use super::TrackUri;

/// A face-down card hiding one track.
///
/// The backend uses short field names (`img`, `uri`, `cover`); the long
/// names are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Artwork shown on the card front
    #[serde(rename = "img", alias = "imageUri", default)]
    pub image_uri: String,
    pub title: String,
    pub artist: String,
    /// Identity of the card
    #[serde(rename = "uri", alias = "trackUri")]
    pub track_uri: TrackUri,
    /// Album cover shown once flipped
    #[serde(rename = "cover", alias = "coverImageUri", default)]
    pub cover_image_uri: String,
    #[serde(default)]
    pub description: String,
}

impl Card {
    /// Create a card with just the fields needed to identify and label it
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        track_uri: impl Into<String>,
    ) -> Self {
        Self {
            image_uri: String::new(),
            title: title.into(),
            artist: artist.into(),
            track_uri: TrackUri::new(track_uri),
            cover_image_uri: String::new(),
            description: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_shape() {
        let json = serde_json::json!({
            "img": "/cards/1.png",
            "title": "Song",
            "artist": "Band",
            "uri": "spotify:track:1",
            "cover": "https://i.scdn.co/image/1",
            "description": "A hidden gem"
        });

        let card: Card = serde_json::from_value(json).unwrap();
        assert_eq!(card.image_uri, "/cards/1.png");
        assert_eq!(card.track_uri.as_str(), "spotify:track:1");
        assert_eq!(card.cover_image_uri, "https://i.scdn.co/image/1");
    }

    #[test]
    fn test_deserialize_long_names() {
        let json = serde_json::json!({
            "imageUri": "/cards/2.png",
            "title": "Song",
            "artist": "Band",
            "trackUri": "spotify:track:2",
            "coverImageUri": "cover.png"
        });

        let card: Card = serde_json::from_value(json).unwrap();
        assert_eq!(card.track_uri.as_str(), "spotify:track:2");
        assert_eq!(card.cover_image_uri, "cover.png");
        assert!(card.description.is_empty());
    }
}
