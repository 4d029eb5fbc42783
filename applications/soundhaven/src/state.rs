/// Local state kept between invocations
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// What survives between runs of the CLI.
///
/// The refresh cookie lives only as long as the process, so the access
/// token is stored here after login.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalState {
    #[serde(default)]
    pub access_token: Option<String>,

    /// Set once the onboarding guide was completed
    #[serde(default)]
    pub first_login_done: bool,
}

impl LocalState {
    /// Read the state file; a missing file yields the default state
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No state file, starting fresh");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| AppError::State(format!("{}: {}", path.display(), e)))?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Write the state file, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)
            .map_err(|e| AppError::State(format!("{}: {}", path.display(), e)))?;

        debug!(path = %path.display(), "State saved");
        Ok(())
    }

    /// Forget the session, keeping nothing but defaults
    pub fn logged_out(&self) -> Self {
        Self {
            access_token: None,
            first_login_done: self.first_login_done,
        }
    }
}
