//! Subcommand implementations
//!
//! Every command resolves its view through the route table first, so a
//! logged-out user is sent back to `login` the same way for all of them.

use crate::config::AppConfig;
use crate::error::{AppError, Result};
use crate::render;
use crate::state::LocalState;
use chrono::Utc;
use soundhaven_client::{ApiHandle, AuthSession, ClientError, SoundHavenClient};
use soundhaven_core::{
    resolve_route, GuideCarousel, MarkAsAdded, PlayerCommand, PlayerEvent, PlayerState, Route,
    RouteDecision, SessionController, SessionError, Vault,
};
use std::io::Write as _;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

/// Loaded configuration plus the persisted local state
pub struct App {
    config: AppConfig,
    state: LocalState,
}

impl App {
    pub fn new(config: AppConfig, state: LocalState) -> Self {
        Self { config, state }
    }

    pub fn load(config: AppConfig) -> Result<Self> {
        let state = LocalState::load(&config.state.path)?;
        Ok(Self::new(config, state))
    }

    pub fn state(&self) -> &LocalState {
        &self.state
    }

    fn save_state(&self) -> Result<()> {
        self.state.save(&self.config.state.path)
    }

    /// Turn a rejected token into the logged-out state.
    ///
    /// The stored token is dropped so the next run starts from login
    /// instead of replaying the same 401.
    fn check_auth<T>(&mut self, result: Result<T>) -> Result<T> {
        match result {
            Err(e) if e.is_auth() => {
                warn!(error = %e, "Access token rejected, logging out");
                self.state.access_token = None;
                self.save_state()?;
                Err(AppError::NotLoggedIn)
            }
            other => other,
        }
    }

    /// Print a failed interactive action, ending the loop on auth failure
    fn report(&mut self, err: impl Into<AppError>) -> Result<()> {
        let err = err.into();
        if err.is_auth() {
            return self.check_auth(Err(err));
        }
        println!("{}", err);
        Ok(())
    }

    /// Bootstrap the auth session and store whatever token it ended with
    async fn start_session(&mut self, callback: Option<&str>) -> Result<AuthSession> {
        let client_config = self
            .config
            .client_config(self.state.access_token.as_deref());
        let client = SoundHavenClient::new(client_config)?;
        let session = AuthSession::start(client, callback).await;

        let token = session.client().access_token().await;
        if token != self.state.access_token {
            self.state.access_token = token;
            self.save_state()?;
        }

        Ok(session)
    }

    /// Session for a view that requires login
    async fn open(&mut self, route: Route) -> Result<AuthSession> {
        let session = self.start_session(None).await?;
        let has_token = session.is_authenticated().await;

        match resolve_route(route.path(), Some(has_token)) {
            RouteDecision::Render(_) => Ok(session),
            RouteDecision::Redirect(Route::Login) | RouteDecision::Pending => {
                Err(AppError::NotLoggedIn)
            }
            RouteDecision::Redirect(other) => Err(AppError::InvalidArgument(format!(
                "{} is not available, go to {}",
                route, other
            ))),
        }
    }

    /// Open the daily set for the logged-in user.
    ///
    /// Until the onboarding guide was completed the cards stay closed.
    async fn open_cards(&mut self) -> Result<SessionController<ApiHandle>> {
        let session = self.open(Route::Cards).await?;
        if !self.state.first_login_done {
            return Err(AppError::GuideNotFinished);
        }

        let api = session.api().await?;
        let me = api.me().await.map_err(AppError::from);
        let me = self.check_auth(me)?;

        let mut controller = SessionController::new(api, me.user_id, Utc::now());
        let loaded = controller.load_daily().await.map_err(AppError::from);
        self.check_auth(loaded)?;
        Ok(controller)
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// Log in, either from a callback URL or by restoring the session
    pub async fn login(&mut self, callback: Option<&str>) -> Result<()> {
        let session = self.start_session(callback).await?;
        let has_token = session.is_authenticated().await && self.verify_token(&session).await?;

        match resolve_route(Route::Login.path(), Some(has_token)) {
            RouteDecision::Render(_) => {
                let url = session.client().login_url().await;
                println!("Open this URL in a browser to log in:\n\n  {}\n", url);
                println!("Then run `soundhaven login --callback <redirected URL>`.");
            }
            _ => {
                info!("Logged in");
                if self.state.first_login_done {
                    println!("Logged in. Run `soundhaven cards` to see today's cards.");
                } else {
                    println!("Logged in. Run `soundhaven guide` to get started.");
                }
            }
        }

        Ok(())
    }

    /// Check the held token against the backend, dropping it if rejected
    async fn verify_token(&mut self, session: &AuthSession) -> Result<bool> {
        match session.api().await?.me().await {
            Ok(me) => {
                debug!(user_id = %me.user_id, "Access token accepted");
                Ok(true)
            }
            Err(ClientError::AuthRequired) => {
                warn!("Stored access token rejected");
                session.client().clear_access_token().await;
                self.state.access_token = None;
                self.save_state()?;
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn logout(&mut self) -> Result<()> {
        let session = self.start_session(None).await?;
        session.end().await;

        self.state = self.state.logged_out();
        self.save_state()?;
        println!("Logged out.");
        Ok(())
    }

    // =========================================================================
    // Guide
    // =========================================================================

    /// Page through the onboarding guide on stdin.
    ///
    /// `n`/Enter moves forward, `p` back, `c` creates the playlist and
    /// continues once every slide was seen, `d` dismisses and logs out.
    pub async fn guide(&mut self) -> Result<()> {
        let session = self.open(Route::Guide).await?;
        let mut carousel = GuideCarousel::default();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        print!("{}", render::guide_slide(&carousel));
        loop {
            prompt(if carousel.is_finished() {
                "[n]ext [p]rev [c]ontinue [d]ismiss > "
            } else {
                "[n]ext [p]rev [d]ismiss > "
            });

            let Some(line) = lines.next_line().await? else {
                return Ok(());
            };

            match line.trim() {
                "" | "n" => {
                    if carousel.next() {
                        println!("That was the last slide. Press c to continue.");
                    }
                }
                "p" => {
                    carousel.prev();
                }
                "c" if carousel.is_finished() => {
                    return self.finish_guide(&session).await;
                }
                "d" => {
                    return self.dismiss_guide(session).await;
                }
                other => {
                    println!("Unknown input {:?}", other);
                    continue;
                }
            }
            print!("{}", render::guide_slide(&carousel));
        }
    }

    async fn finish_guide(&mut self, session: &AuthSession) -> Result<()> {
        let api = session.api().await?;
        match api.playlist().create().await {
            Ok(()) => info!("Playlist created"),
            Err(e) => warn!(error = %e, "Failed to create playlist"),
        }

        self.state.first_login_done = true;
        self.save_state()?;
        println!("All set. Run `soundhaven cards` to see today's cards.");
        Ok(())
    }

    async fn dismiss_guide(&mut self, session: AuthSession) -> Result<()> {
        session.end().await;

        self.state = LocalState::default();
        self.save_state()?;
        println!("Guide dismissed, you have been logged out.");
        Ok(())
    }

    // =========================================================================
    // Daily cards
    // =========================================================================

    pub async fn cards(&mut self) -> Result<()> {
        let controller = self.open_cards().await?;
        let countdown = controller.countdown().display(Utc::now());
        print!("{}", render::cards_view(controller.session(), &countdown));
        Ok(())
    }

    /// Flip card `number` (1-based)
    pub async fn select(&mut self, number: usize) -> Result<()> {
        let index = to_index(number)?;
        let mut controller = self.open_cards().await?;
        let selected = controller.select_card(index).await.map_err(AppError::from);
        self.check_auth(selected)?;
        show_open_card(&controller);
        Ok(())
    }

    pub async fn close(&mut self) -> Result<()> {
        let mut controller = self.open_cards().await?;
        controller.close_card().await?;
        let countdown = controller.countdown().display(Utc::now());
        print!("{}", render::cards_view(controller.session(), &countdown));
        Ok(())
    }

    /// Add today's chosen track to the playlist
    pub async fn add(&mut self) -> Result<()> {
        let mut controller = self.open_cards().await?;
        let Some(index) = controller.session().chosen_index() else {
            println!("No card chosen today. Run `soundhaven select <n>` first.");
            return Ok(());
        };

        controller.select_card(index).await?;
        match controller.add_current_to_playlist().await {
            Ok(()) => println!("Added to your playlist."),
            Err(SessionError::AlreadyAdded(_)) => println!("Already in your playlist."),
            Err(e) => return self.check_auth(Err(e.into())),
        }
        Ok(())
    }

    /// Interactive daily view with a live countdown.
    ///
    /// A card number flips it, `c` closes, `a` adds the open card, `q` quits.
    pub async fn watch(&mut self) -> Result<()> {
        let mut controller = self.open_cards().await?;
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut ticker = tokio::time::interval(Duration::from_secs(1));

        let countdown = controller.countdown().display(Utc::now());
        print!("{}", render::cards_view(controller.session(), &countdown));

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    match controller.tick(Utc::now()).await {
                        Ok(tick) if tick.expired => {
                            println!();
                            print!("{}", render::cards_view(controller.session(), &tick.display));
                        }
                        Ok(tick) => prompt(&format!("\r{} > ", tick.display)),
                        Err(e) if e.is_auth() => return self.check_auth(Err(e.into())),
                        Err(e) => warn!(error = %e, "Reload at day boundary failed"),
                    }
                }
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    match line.trim() {
                        "q" => break,
                        "c" => {
                            controller.close_card().await?;
                            let countdown = controller.countdown().display(Utc::now());
                            print!("{}", render::cards_view(controller.session(), &countdown));
                        }
                        "a" => match controller.add_current_to_playlist().await {
                            Ok(()) => println!("Added to your playlist."),
                            Err(e) => self.report(e)?,
                        },
                        input => match parse_card_number(input) {
                            Some(index) => match controller.select_card(index).await {
                                Ok(()) => show_open_card(&controller),
                                Err(e) => self.report(e)?,
                            },
                            None => println!("Unknown input {:?}", input),
                        },
                    }
                }
                _ = tokio::signal::ctrl_c() => break,
            }
        }

        println!();
        Ok(())
    }

    // =========================================================================
    // Vault
    // =========================================================================

    /// List past discoveries; `add` puts entry `n` (1-based) in the playlist
    pub async fn vault(&mut self, add: Option<usize>) -> Result<()> {
        let session = self.open(Route::Discoveries).await?;
        let api = session.api().await?;
        let result = self.show_vault(&api, add).await;
        self.check_auth(result)
    }

    async fn show_vault(&self, api: &ApiHandle, add: Option<usize>) -> Result<()> {
        let me = api.me().await?;

        let entries = api.discovery().all(&me.user_id).await?;
        let catalog = api.cards().catalog().await?;
        let mut vault = Vault::new(entries, catalog);

        if let Some(number) = add {
            let index = to_index(number)?;
            let card = vault
                .items()
                .get(index)
                .map(|item| item.card.clone())
                .ok_or_else(|| {
                    AppError::InvalidArgument(format!("No vault entry {}", number))
                })?;

            vault.open(&card.track_uri);
            if vault.is_added(&card.track_uri) {
                println!("Already in your playlist.");
            } else {
                api.playlist().add(&card.track_uri).await?;
                let request = MarkAsAdded {
                    user_id: me.user_id.clone(),
                    track_uri: card.track_uri.clone(),
                };
                // The track is in the playlist either way
                if let Err(e) = api.discovery().mark_as_added(&request).await {
                    warn!(
                        track_uri = %request.track_uri,
                        error = %e,
                        "Failed to mark discovery as added"
                    );
                }
                vault.mark_added(&card.track_uri);
                println!("Added {} to your playlist.", card.title);
            }
            vault.close();
        }

        print!("{}", render::vault_view(&vault));
        Ok(())
    }

    // =========================================================================
    // Player
    // =========================================================================

    /// Start today's card `number` on the given device
    pub async fn play(&mut self, number: usize, device_id: &str) -> Result<()> {
        let index = to_index(number)?;
        let controller = self.open_cards().await?;
        let card = controller
            .session()
            .cards()
            .get(index)
            .ok_or_else(|| AppError::InvalidArgument(format!("No card {}", number)))?;

        let mut player = PlayerState::new();
        player.apply(PlayerEvent::Ready {
            device_id: device_id.to_string(),
        });

        let commands = player.toggle(&card.track_uri);
        let title = card.title.clone();
        let played = controller
            .api()
            .player()
            .execute_all(&commands)
            .await
            .map_err(AppError::from);
        self.check_auth(played)?;
        println!("Playing {}.", title);
        Ok(())
    }

    pub async fn pause(&mut self, device_id: &str) -> Result<()> {
        let session = self.open(Route::Cards).await?;
        let api = session.api().await?;
        let paused = api
            .player()
            .execute(&PlayerCommand::Pause {
                device_id: device_id.to_string(),
            })
            .await
            .map_err(AppError::from);
        self.check_auth(paused)?;
        println!("Paused.");
        Ok(())
    }
}

/// Convert a 1-based card number
fn to_index(number: usize) -> Result<usize> {
    number
        .checked_sub(1)
        .ok_or_else(|| AppError::InvalidArgument("numbers start at 1".to_string()))
}

/// Card index typed at the interactive prompt
fn parse_card_number(input: &str) -> Option<usize> {
    input.parse::<usize>().ok().and_then(|n| to_index(n).ok())
}

fn show_open_card(controller: &SessionController<ApiHandle>) {
    let session = controller.session();
    match session.open_card() {
        Some(card) => print!(
            "{}",
            render::card_detail(card, session.is_added(&card.track_uri))
        ),
        None => println!("That card is locked. Come back tomorrow."),
    }
}

fn prompt(text: &str) {
    print!("{}", text);
    if let Err(e) = std::io::stdout().flush() {
        debug!(error = %e, "Failed to flush prompt");
    }
}
