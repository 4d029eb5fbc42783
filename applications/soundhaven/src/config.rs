/// Client configuration
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use soundhaven_client::{ClientConfig, DEFAULT_PLAYER_API_URL};
use std::path::{Path, PathBuf};

/// Config file read when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "soundhaven.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default = "default_api")]
    pub api: ApiSettings,

    #[serde(default = "default_player")]
    pub player: PlayerSettings,

    #[serde(default = "default_state")]
    pub state: StateSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Base URL of the SoundHaven backend
    #[serde(default = "default_api_url")]
    pub url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerSettings {
    /// Base URL of the playback control API
    #[serde(default = "default_player_url")]
    pub url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StateSettings {
    /// Where the access token and onboarding flag are kept
    #[serde(default = "default_state_path")]
    pub path: PathBuf,
}

impl AppConfig {
    /// Load configuration from file and environment.
    ///
    /// `path` overrides the default `soundhaven.toml`; a missing default
    /// file is fine, a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(AppError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (e.g. SOUNDHAVEN_API_URL)
        settings = settings.add_source(
            config::Environment::with_prefix("SOUNDHAVEN")
                .separator("_")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        for (name, url) in [("api.url", &self.api.url), ("player.url", &self.player.url)] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(AppError::Config(format!(
                    "{} must start with http:// or https:// (got {:?})",
                    name, url
                )));
            }
        }

        if self.state.path.as_os_str().is_empty() {
            return Err(AppError::Config("state.path cannot be empty".to_string()));
        }

        Ok(())
    }

    /// Client configuration, optionally carrying a stored token
    pub fn client_config(&self, access_token: Option<&str>) -> ClientConfig {
        let config = ClientConfig::new(&self.api.url).with_player_url(&self.player.url);
        match access_token {
            Some(token) => config.with_access_token(token),
            None => config,
        }
    }
}

// Default values
fn default_api() -> ApiSettings {
    ApiSettings {
        url: default_api_url(),
    }
}

fn default_api_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_player() -> PlayerSettings {
    PlayerSettings {
        url: default_player_url(),
    }
}

fn default_player_url() -> String {
    DEFAULT_PLAYER_API_URL.to_string()
}

fn default_state() -> StateSettings {
    StateSettings {
        path: default_state_path(),
    }
}

fn default_state_path() -> PathBuf {
    PathBuf::from("./.soundhaven/state.json")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: default_api(),
            player: default_player(),
            state: default_state(),
        }
    }
}
