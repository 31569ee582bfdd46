//! Application-level error type.

use crate::config::ConfigError;
use crate::core::TimerError;
use crate::motion::{ScrollError, SimulatorError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Timer(#[from] TimerError),
    #[error(transparent)]
    Simulator(#[from] SimulatorError),
    #[error(transparent)]
    Scroll(#[from] ScrollError),
    #[error("{0}")]
    Usage(String),
}
