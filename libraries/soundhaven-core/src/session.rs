//! Daily card session
//!
//! Owns today's cards, the one card the user committed to, which card (if
//! any) is open in the detail view, and the tracks already added to the
//! playlist. All transitions go through [`DailySession::update`], which
//! returns the side effects the caller must perform.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::error::{Result, SessionError};
use crate::types::{Card, TodayDiscovery, TrackUri};

/// Number of cards offered per day
pub const DAILY_SET_SIZE: usize = 3;

/// Input to the session reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Today's set and the persisted choice (if any) arrived
    Loaded {
        cards: Vec<Card>,
        today: Option<TodayDiscovery>,
    },
    /// The user clicked the card at this position
    CardClicked(usize),
    /// The detail view was dismissed
    CloseRequested,
    /// Add the open card, or an explicit track of today's set, to the playlist
    AddRequested(Option<TrackUri>),
    /// The playlist accepted the track
    AddSucceeded(TrackUri),
    /// The playlist call failed
    AddFailed(TrackUri),
}

/// Side effect requested by the reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEffect {
    /// Write the committed card to the discovery log (`added = false`)
    PersistChoice(Card),
    /// Add the track to the managed playlist
    AddToPlaylist(TrackUri),
    /// Flag the discovery log entry as added
    MarkAsAdded(TrackUri),
}

/// Per-card state derived from the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardState {
    /// Nothing committed yet; the card may be chosen
    Selectable,
    /// Another card was committed today
    Locked,
    /// Chosen today, detail view closed
    Committed,
    /// Chosen today, detail view open
    Open,
}

/// State of the current day's card selection
#[derive(Debug, Clone, Default)]
pub struct DailySession {
    cards: Vec<Card>,
    chosen_index: Option<usize>,
    open_index: Option<usize>,
    committed: bool,
    added_track_uris: HashSet<TrackUri>,
    loaded: bool,
}

impl DailySession {
    /// Create an empty, unloaded session
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an event and return the effects to perform.
    ///
    /// Clicking a locked card is a silent no-op. Errors leave the state
    /// untouched.
    pub fn update(&mut self, event: SessionEvent) -> Result<Vec<SessionEffect>> {
        match event {
            SessionEvent::Loaded { cards, today } => {
                self.load(cards, today);
                Ok(Vec::new())
            }
            SessionEvent::CardClicked(index) => self.select(index),
            SessionEvent::CloseRequested => {
                self.open_index = None;
                Ok(Vec::new())
            }
            SessionEvent::AddRequested(target) => self.request_add(target),
            SessionEvent::AddSucceeded(uri) => {
                debug!(track_uri = %uri, "Track added to playlist");
                self.added_track_uris.insert(uri.clone());
                Ok(vec![SessionEffect::MarkAsAdded(uri)])
            }
            SessionEvent::AddFailed(uri) => {
                debug!(track_uri = %uri, "Add failed, leaving control actionable");
                Ok(Vec::new())
            }
        }
    }

    fn load(&mut self, cards: Vec<Card>, today: Option<TodayDiscovery>) {
        if cards.len() != DAILY_SET_SIZE {
            warn!(
                count = cards.len(),
                expected = DAILY_SET_SIZE,
                "Daily set has unexpected size"
            );
        }

        self.open_index = None;
        self.added_track_uris.clear();

        match today {
            Some(today) => {
                self.chosen_index = cards.iter().position(|c| c.track_uri == today.track_uri);
                if self.chosen_index.is_none() {
                    warn!(
                        track_uri = %today.track_uri,
                        "Today's choice is not in the daily set, locking all cards"
                    );
                }
                self.committed = true;
                if today.added {
                    self.added_track_uris.insert(today.track_uri);
                }
            }
            None => {
                self.chosen_index = None;
                self.committed = false;
            }
        }

        self.cards = cards;
        self.loaded = true;
    }

    fn select(&mut self, index: usize) -> Result<Vec<SessionEffect>> {
        if !self.loaded {
            return Err(SessionError::NotLoaded);
        }
        if index >= self.cards.len() {
            return Err(SessionError::InvalidIndex {
                index,
                len: self.cards.len(),
            });
        }

        if self.committed {
            if self.chosen_index == Some(index) {
                self.open_index = Some(index);
            } else {
                debug!(index, "Ignoring click on locked card");
            }
            return Ok(Vec::new());
        }

        self.chosen_index = Some(index);
        self.open_index = Some(index);
        self.committed = true;

        Ok(vec![SessionEffect::PersistChoice(self.cards[index].clone())])
    }

    fn request_add(&mut self, target: Option<TrackUri>) -> Result<Vec<SessionEffect>> {
        if !self.loaded {
            return Err(SessionError::NotLoaded);
        }

        let uri = match target {
            Some(uri) => {
                if !self.cards.iter().any(|c| c.track_uri == uri) {
                    return Err(SessionError::UnknownTrack(uri));
                }
                uri
            }
            None => self
                .open_card()
                .map(|c| c.track_uri.clone())
                .ok_or(SessionError::NothingOpen)?,
        };

        if self.added_track_uris.contains(&uri) {
            return Err(SessionError::AlreadyAdded(uri));
        }

        Ok(vec![SessionEffect::AddToPlaylist(uri)])
    }

    /// Today's cards in display order
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Index of the committed card, if it is part of the set
    pub fn chosen_index(&self) -> Option<usize> {
        self.chosen_index
    }

    /// Index of the card shown in the detail view
    pub fn open_index(&self) -> Option<usize> {
        self.open_index
    }

    /// Whether today's choice has been made
    pub fn is_committed(&self) -> bool {
        self.committed
    }

    /// Whether a daily set has been applied
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn open_card(&self) -> Option<&Card> {
        self.open_index.and_then(|i| self.cards.get(i))
    }

    pub fn chosen_card(&self) -> Option<&Card> {
        self.chosen_index.and_then(|i| self.cards.get(i))
    }

    /// Whether the track is confirmed in the playlist
    pub fn is_added(&self, uri: &TrackUri) -> bool {
        self.added_track_uris.contains(uri)
    }

    pub fn added_track_uris(&self) -> &HashSet<TrackUri> {
        &self.added_track_uris
    }

    /// Derived state of the card at `index`
    pub fn card_state(&self, index: usize) -> Option<CardState> {
        if index >= self.cards.len() {
            return None;
        }

        let state = if !self.committed {
            CardState::Selectable
        } else if self.chosen_index != Some(index) {
            CardState::Locked
        } else if self.open_index == Some(index) {
            CardState::Open
        } else {
            CardState::Committed
        };

        Some(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn daily_set() -> Vec<Card> {
        vec![
            Card::new("First", "Artist 1", "spotify:track:1"),
            Card::new("Second", "Artist 2", "spotify:track:2"),
            Card::new("Third", "Artist 3", "spotify:track:3"),
        ]
    }

    fn loaded(today: Option<TodayDiscovery>) -> DailySession {
        let mut session = DailySession::new();
        session
            .update(SessionEvent::Loaded {
                cards: daily_set(),
                today,
            })
            .unwrap();
        session
    }

    #[test]
    fn test_fresh_day_select_lock_close() {
        let mut session = loaded(None);
        assert!(!session.is_committed());
        assert_eq!(session.card_state(0), Some(CardState::Selectable));

        let effects = session.update(SessionEvent::CardClicked(1)).unwrap();
        assert_eq!(effects, vec![SessionEffect::PersistChoice(daily_set()[1].clone())]);
        assert_eq!(session.chosen_index(), Some(1));
        assert_eq!(session.open_index(), Some(1));
        assert!(session.is_committed());

        // Locked card: nothing changes, nothing persisted
        let effects = session.update(SessionEvent::CardClicked(0)).unwrap();
        assert!(effects.is_empty());
        assert_eq!(session.chosen_index(), Some(1));
        assert_eq!(session.open_index(), Some(1));
        assert_eq!(session.card_state(0), Some(CardState::Locked));

        session.update(SessionEvent::CloseRequested).unwrap();
        assert_eq!(session.open_index(), None);
        assert_eq!(session.chosen_index(), Some(1));
        assert_eq!(session.card_state(1), Some(CardState::Committed));
    }

    #[test]
    fn test_prior_choice_is_not_auto_opened() {
        let session = loaded(Some(TodayDiscovery::new("spotify:track:3")));

        assert_eq!(session.chosen_index(), Some(2));
        assert!(session.is_committed());
        assert_eq!(session.open_index(), None);
        assert_eq!(session.card_state(2), Some(CardState::Committed));
    }

    #[test]
    fn test_reopen_chosen_card_does_not_persist_again() {
        let mut session = loaded(Some(TodayDiscovery::new("spotify:track:1")));

        for _ in 0..3 {
            let effects = session.update(SessionEvent::CardClicked(0)).unwrap();
            assert!(effects.is_empty());
            assert_eq!(session.open_index(), Some(0));
            session.update(SessionEvent::CloseRequested).unwrap();
        }
    }

    #[test]
    fn test_prior_choice_outside_set_locks_everything() {
        let mut session = loaded(Some(TodayDiscovery::new("spotify:track:gone")));

        assert!(session.is_committed());
        assert_eq!(session.chosen_index(), None);
        for i in 0..3 {
            session.update(SessionEvent::CardClicked(i)).unwrap();
            assert_eq!(session.open_index(), None);
            assert_eq!(session.card_state(i), Some(CardState::Locked));
        }
    }

    #[test]
    fn test_invalid_index_rejected() {
        let mut session = loaded(None);
        let err = session.update(SessionEvent::CardClicked(3)).unwrap_err();
        assert_eq!(err, SessionError::InvalidIndex { index: 3, len: 3 });
        assert!(!session.is_committed());
        assert_eq!(session.card_state(3), None);
    }

    #[test]
    fn test_unloaded_session_rejects_clicks_and_adds() {
        let mut session = DailySession::new();
        assert!(!session.is_loaded());

        let err = session.update(SessionEvent::CardClicked(0)).unwrap_err();
        assert_eq!(err, SessionError::NotLoaded);

        let err = session
            .update(SessionEvent::AddRequested(Some(TrackUri::new("spotify:track:1"))))
            .unwrap_err();
        assert_eq!(err, SessionError::NotLoaded);
        assert!(!session.is_committed());

        // Closing is always allowed
        assert!(session.update(SessionEvent::CloseRequested).unwrap().is_empty());

        let session = loaded(None);
        assert!(session.is_loaded());
    }

    #[test]
    fn test_add_flow() {
        let mut session = loaded(None);
        assert_eq!(
            session.update(SessionEvent::AddRequested(None)).unwrap_err(),
            SessionError::NothingOpen
        );

        session.update(SessionEvent::CardClicked(2)).unwrap();
        let uri = TrackUri::new("spotify:track:3");

        let effects = session.update(SessionEvent::AddRequested(None)).unwrap();
        assert_eq!(effects, vec![SessionEffect::AddToPlaylist(uri.clone())]);

        let effects = session.update(SessionEvent::AddSucceeded(uri.clone())).unwrap();
        assert_eq!(effects, vec![SessionEffect::MarkAsAdded(uri.clone())]);
        assert!(session.is_added(&uri));

        assert_eq!(
            session.update(SessionEvent::AddRequested(None)).unwrap_err(),
            SessionError::AlreadyAdded(uri)
        );
    }

    #[test]
    fn test_failed_add_stays_available() {
        let mut session = loaded(Some(TodayDiscovery::new("spotify:track:2")));
        session.update(SessionEvent::CardClicked(1)).unwrap();
        let uri = TrackUri::new("spotify:track:2");

        session.update(SessionEvent::AddFailed(uri.clone())).unwrap();
        assert!(!session.is_added(&uri));

        let effects = session
            .update(SessionEvent::AddRequested(Some(uri.clone())))
            .unwrap();
        assert_eq!(effects, vec![SessionEffect::AddToPlaylist(uri)]);
    }

    #[test]
    fn test_explicit_target_must_be_in_set() {
        let mut session = loaded(None);
        let err = session
            .update(SessionEvent::AddRequested(Some(TrackUri::new("spotify:track:x"))))
            .unwrap_err();
        assert!(matches!(err, SessionError::UnknownTrack(_)));
    }

    #[test]
    fn test_reload_resets_day() {
        let mut session = loaded(None);
        session.update(SessionEvent::CardClicked(0)).unwrap();
        session
            .update(SessionEvent::AddSucceeded(TrackUri::new("spotify:track:1")))
            .unwrap();

        session
            .update(SessionEvent::Loaded {
                cards: daily_set(),
                today: None,
            })
            .unwrap();

        assert!(!session.is_committed());
        assert_eq!(session.chosen_index(), None);
        assert_eq!(session.open_index(), None);
        assert!(session.added_track_uris().is_empty());
    }

    #[test]
    fn test_prior_added_choice_seeds_added_set() {
        let today = TodayDiscovery {
            track_uri: TrackUri::new("spotify:track:1"),
            added: true,
        };
        let session = loaded(Some(today));
        assert!(session.is_added(&TrackUri::new("spotify:track:1")));
    }
}
