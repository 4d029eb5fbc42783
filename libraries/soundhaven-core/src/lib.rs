//! SoundHaven Core
//!
//! Platform-agnostic state for the SoundHaven daily discovery client.
//!
//! Every view of the application is driven by a small state machine that
//! consumes explicit events and returns the side effects to perform. None of
//! them touch the network directly, which keeps each transition testable
//! without a backend or a playback device.
//!
//! # Architecture
//!
//! - **Domain Types**: `Card`, `DiscoveryLogEntry`, `UserProfile`
//! - **Daily Card Session**: `DailySession` reducer and `SessionController`
//! - **Day Boundary**: `Countdown` to the next 00:00 UTC
//! - **Views**: `GuideCarousel`, `Vault`, route gating
//! - **Playback**: `PlayerState` deciding play/resume/pause commands
//! - **Collaborator seam**: the `DailyCardsApi` trait
//!
//! # Example
//!
//! ```rust
//! use soundhaven_core::{Card, DailySession, SessionEvent, SessionEffect};
//!
//! let cards = vec![
//!     Card::new("Intro", "Artist A", "spotify:track:a"),
//!     Card::new("Outro", "Artist B", "spotify:track:b"),
//! ];
//!
//! let mut session = DailySession::default();
//! session.update(SessionEvent::Loaded { cards, today: None }).unwrap();
//!
//! let effects = session.update(SessionEvent::CardClicked(1)).unwrap();
//! assert!(matches!(effects.as_slice(), [SessionEffect::PersistChoice(_)]));
//! assert_eq!(session.chosen_index(), Some(1));
//! ```

#![forbid(unsafe_code)]

pub mod controller;
pub mod countdown;
pub mod error;
pub mod guide;
pub mod player;
pub mod routes;
pub mod session;
pub mod traits;
pub mod types;
pub mod vault;

pub use controller::SessionController;
pub use countdown::{
    format_countdown, next_utc_midnight, seconds_until_next_utc_midnight, Countdown, CountdownTick,
};
pub use error::{CollaboratorError, Result, SessionError};
pub use guide::{GuideCarousel, GuideSlide, GUIDE_SLIDES};
pub use player::{PlayerCommand, PlayerEvent, PlayerState};
pub use routes::{resolve_route, Route, RouteDecision};
pub use session::{CardState, DailySession, SessionEffect, SessionEvent, DAILY_SET_SIZE};
pub use traits::DailyCardsApi;
pub use types::{
    Card, DiscoveryChoice, DiscoveryLogEntry, MarkAsAdded, TodayDiscovery, TrackUri, UserId,
    UserProfile,
};
pub use vault::{Vault, VaultItem};
