//! Session controller
//!
//! Drives a [`DailySession`] against a [`DailyCardsApi`]: feeds events to the
//! reducer and performs the effects it returns. Every operation takes
//! `&mut self`, so transitions are applied strictly in call order.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::countdown::{Countdown, CountdownTick};
use crate::error::{CollaboratorError, Result, SessionError};
use crate::session::{DailySession, SessionEffect, SessionEvent};
use crate::traits::DailyCardsApi;
use crate::types::{DiscoveryChoice, MarkAsAdded, TrackUri, UserId};

/// Owns the daily session of one user
pub struct SessionController<A> {
    api: A,
    user_id: UserId,
    session: DailySession,
    countdown: Countdown,
}

impl<A: DailyCardsApi> SessionController<A> {
    /// Create a controller; nothing is fetched until `load_daily`
    pub fn new(api: A, user_id: UserId, now: DateTime<Utc>) -> Self {
        Self {
            api,
            user_id,
            session: DailySession::new(),
            countdown: Countdown::starting_at(now),
        }
    }

    pub fn session(&self) -> &DailySession {
        &self.session
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    /// Fetch today's set and the persisted choice.
    ///
    /// On failure the previous state is kept and the error is returned;
    /// retrying is up to the caller.
    pub async fn load_daily(&mut self) -> Result<()> {
        debug!(user_id = %self.user_id, "Loading daily set");

        let cards = self
            .api
            .daily_cards(&self.user_id)
            .await
            .map_err(SessionError::load)?;

        let today = match self.api.today_discovery(&self.user_id).await {
            Ok(today) => today,
            Err(CollaboratorError::NotFound) => None,
            Err(e) => return Err(SessionError::load(e)),
        };

        info!(
            cards = cards.len(),
            has_choice = today.is_some(),
            "Daily set loaded"
        );

        self.dispatch(SessionEvent::Loaded { cards, today }).await
    }

    /// Flip the card at `index`, committing to it if nothing was chosen yet
    pub async fn select_card(&mut self, index: usize) -> Result<()> {
        self.dispatch(SessionEvent::CardClicked(index)).await
    }

    /// Close the detail view
    pub async fn close_card(&mut self) -> Result<()> {
        self.dispatch(SessionEvent::CloseRequested).await
    }

    /// Add the open card's track to the playlist
    pub async fn add_current_to_playlist(&mut self) -> Result<()> {
        self.dispatch(SessionEvent::AddRequested(None)).await
    }

    /// Add a specific track of today's set to the playlist
    pub async fn add_to_playlist(&mut self, uri: TrackUri) -> Result<()> {
        self.dispatch(SessionEvent::AddRequested(Some(uri))).await
    }

    /// Poll the day-boundary countdown, reloading once it expires.
    pub async fn tick(&mut self, now: DateTime<Utc>) -> Result<CountdownTick> {
        let tick = self.countdown.tick(now);
        if tick.expired {
            info!(next = %self.countdown.target(), "Day boundary reached, reloading");
            self.load_daily().await?;
        }
        Ok(tick)
    }

    async fn dispatch(&mut self, event: SessionEvent) -> Result<()> {
        let mut pending: VecDeque<SessionEffect> = self.session.update(event)?.into();
        let mut outcome = Ok(());

        while let Some(effect) = pending.pop_front() {
            match effect {
                SessionEffect::PersistChoice(card) => {
                    let choice = DiscoveryChoice::committed(self.user_id.clone(), &card);
                    // Local commitment stands even if this write is lost
                    if let Err(e) = self.api.save_discovery(&choice).await {
                        warn!(
                            track_uri = %choice.track_uri,
                            error = %e,
                            "Failed to persist today's choice"
                        );
                    }
                }
                SessionEffect::AddToPlaylist(uri) => {
                    match self.api.add_to_playlist(&uri).await {
                        Ok(()) => {
                            info!(track_uri = %uri, "Added to playlist");
                            pending.extend(self.session.update(SessionEvent::AddSucceeded(uri))?);
                        }
                        Err(e) => {
                            warn!(track_uri = %uri, error = %e, "Failed to add to playlist");
                            self.session.update(SessionEvent::AddFailed(uri))?;
                            outcome = Err(SessionError::mutation(e));
                        }
                    }
                }
                SessionEffect::MarkAsAdded(track_uri) => {
                    let request = MarkAsAdded {
                        user_id: self.user_id.clone(),
                        track_uri,
                    };
                    if let Err(e) = self.api.mark_as_added(&request).await {
                        warn!(
                            track_uri = %request.track_uri,
                            error = %e,
                            "Failed to mark discovery as added"
                        );
                    }
                }
            }
        }

        outcome
    }
}
