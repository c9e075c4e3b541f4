//! Error types for the planner.

use thiserror::Error;

/// Failure to obtain another line of interactive input.
#[derive(Error, Debug)]
pub enum InputError {
    /// The input source ran dry while a prompt still needed a value.
    #[error("input exhausted while waiting for: {0}")]
    Exhausted(String),

    /// Reading from the input source failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Planner error types
#[derive(Error, Debug)]
pub enum Error {
    /// Task collection could not continue
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Writing the schedule failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be loaded or is inconsistent
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, Error>;
