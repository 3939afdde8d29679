//! Game-level errors

use okna::{config::ConfigError, foundation::time::ClockError, OknaError};
use thiserror::Error;

/// Game errors
#[derive(Error, Debug)]
pub enum GameError {
    /// Windowing or graphics failure
    #[error("window system error: {0}")]
    Okna(#[from] OknaError),

    /// Configuration file could not be read
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Frame clock could not be set up
    #[error(transparent)]
    Clock(#[from] ClockError),

    /// Configuration values are unusable
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
