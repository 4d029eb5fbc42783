//! Playback state
//!
//! Tracks what the external player reports and decides which control
//! commands a play/pause click should issue. The commands themselves are
//! executed by the client crate.

use serde::{Deserialize, Serialize};

use crate::types::TrackUri;

/// Notification from the playback surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// The player registered as a playback device
    Ready { device_id: String },
    /// The device went away
    NotReady { device_id: String },
    /// Playback state changed
    StateChanged {
        paused: bool,
        current_uri: Option<TrackUri>,
    },
}

/// Control command to send to the playback API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerCommand {
    /// Make this device the active one and start playing
    Transfer { device_id: String },
    /// Continue the current track
    Resume { device_id: String },
    /// Start a different track
    Play { device_id: String, uri: TrackUri },
    /// Pause playback
    Pause { device_id: String },
}

/// Last known state of the external player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    device_id: Option<String>,
    is_paused: bool,
    current_uri: Option<TrackUri>,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            device_id: None,
            is_paused: true,
            current_uri: None,
        }
    }
}

impl PlayerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: PlayerEvent) {
        match event {
            PlayerEvent::Ready { device_id } => {
                tracing::debug!(device_id = %device_id, "Player ready");
                self.device_id = Some(device_id);
            }
            PlayerEvent::NotReady { device_id } => {
                tracing::warn!(device_id = %device_id, "Player lost its device");
                self.device_id = None;
            }
            PlayerEvent::StateChanged {
                paused,
                current_uri,
            } => {
                self.is_paused = paused;
                self.current_uri = current_uri;
            }
        }
    }

    pub fn device_id(&self) -> Option<&str> {
        self.device_id.as_deref()
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn current_uri(&self) -> Option<&TrackUri> {
        self.current_uri.as_ref()
    }

    /// Commands for a play/pause click on the card showing `uri`.
    ///
    /// While playing, any click pauses. While paused, the same track resumes
    /// and a different track starts from the beginning. Without a device
    /// nothing is sent.
    pub fn toggle(&self, uri: &TrackUri) -> Vec<PlayerCommand> {
        let Some(device_id) = self.device_id.clone() else {
            return Vec::new();
        };

        if !self.is_paused {
            return vec![PlayerCommand::Pause { device_id }];
        }

        let transfer = PlayerCommand::Transfer {
            device_id: device_id.clone(),
        };

        if self.current_uri.as_ref() == Some(uri) {
            vec![transfer, PlayerCommand::Resume { device_id }]
        } else {
            vec![
                transfer,
                PlayerCommand::Play {
                    device_id,
                    uri: uri.clone(),
                },
            ]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready() -> PlayerState {
        let mut player = PlayerState::new();
        player.apply(PlayerEvent::Ready {
            device_id: "dev-1".to_string(),
        });
        player
    }

    #[test]
    fn test_no_device_no_commands() {
        let player = PlayerState::new();
        assert!(player.is_paused());
        assert!(player.toggle(&TrackUri::new("spotify:track:1")).is_empty());
    }

    #[test]
    fn test_paused_new_track_plays() {
        let player = ready();
        let uri = TrackUri::new("spotify:track:1");

        assert_eq!(
            player.toggle(&uri),
            vec![
                PlayerCommand::Transfer {
                    device_id: "dev-1".to_string()
                },
                PlayerCommand::Play {
                    device_id: "dev-1".to_string(),
                    uri
                },
            ]
        );
    }

    #[test]
    fn test_paused_same_track_resumes() {
        let mut player = ready();
        let uri = TrackUri::new("spotify:track:1");
        player.apply(PlayerEvent::StateChanged {
            paused: true,
            current_uri: Some(uri.clone()),
        });

        let commands = player.toggle(&uri);
        assert_eq!(
            commands.last(),
            Some(&PlayerCommand::Resume {
                device_id: "dev-1".to_string()
            })
        );
    }

    #[test]
    fn test_playing_pauses_regardless_of_track() {
        let mut player = ready();
        player.apply(PlayerEvent::StateChanged {
            paused: false,
            current_uri: Some(TrackUri::new("spotify:track:1")),
        });

        assert_eq!(
            player.toggle(&TrackUri::new("spotify:track:2")),
            vec![PlayerCommand::Pause {
                device_id: "dev-1".to_string()
            }]
        );
    }

    #[test]
    fn test_not_ready_drops_device() {
        let mut player = ready();
        player.apply(PlayerEvent::NotReady {
            device_id: "dev-1".to_string(),
        });
        assert!(player.device_id().is_none());
    }
}
