/// SoundHaven - one card a day, one song to discover
use clap::{Parser, Subcommand};
use soundhaven::{commands::App, AppConfig};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "soundhaven")]
#[command(about = "Daily card music discovery from the terminal", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "SOUNDHAVEN_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in, or finish logging in from the redirected URL
    Login {
        /// URL the browser was redirected to after login
        #[arg(long)]
        callback: Option<String>,
    },
    /// Log out and forget the stored token
    Logout,
    /// Walk through the onboarding guide
    Guide,
    /// Show today's cards
    Cards,
    /// Flip a card (1-based); the first flip of the day is your choice
    Select {
        /// Card number
        number: usize,
    },
    /// Close the open card
    Close,
    /// Add today's chosen track to your playlist
    Add,
    /// List past discoveries
    Vault {
        /// Add this entry (1-based) to your playlist
        #[arg(long)]
        add: Option<usize>,
    },
    /// Interactive view with a live countdown to the next cards
    Watch,
    /// Play a card's track on a playback device
    Play {
        /// Card number
        number: usize,
        /// Playback device id
        #[arg(short, long)]
        device: String,
    },
    /// Pause playback on a device
    Pause {
        /// Playback device id
        #[arg(short, long)]
        device: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "soundhaven=info,soundhaven_client=info,soundhaven_core=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    config.validate()?;
    tracing::debug!(api = %config.api.url, "Configuration loaded");

    let mut app = App::load(config)?;

    match cli.command {
        Commands::Login { callback } => app.login(callback.as_deref()).await?,
        Commands::Logout => app.logout().await?,
        Commands::Guide => app.guide().await?,
        Commands::Cards => app.cards().await?,
        Commands::Select { number } => app.select(number).await?,
        Commands::Close => app.close().await?,
        Commands::Add => app.add().await?,
        Commands::Vault { add } => app.vault(add).await?,
        Commands::Watch => app.watch().await?,
        Commands::Play { number, device } => app.play(number, &device).await?,
        Commands::Pause { device } => app.pause(&device).await?,
    }

    Ok(())
}
