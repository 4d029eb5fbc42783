//! SoundHaven terminal client
//!
//! Configuration, persisted local state, and text rendering for the
//! `soundhaven` binary. Exposed as a library for testing.

pub mod commands;
pub mod config;
pub mod error;
pub mod render;
pub mod state;

pub use config::AppConfig;
pub use error::{AppError, Result};
pub use state::LocalState;
