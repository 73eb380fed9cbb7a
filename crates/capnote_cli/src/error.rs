//! CLI error types.

use thiserror::Error;

use capnote_models::pricing::ExpectationError;

/// Result alias used throughout the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// An argument failed command-level validation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The pricing layer rejected the inputs or failed to converge.
    #[error(transparent)]
    Pricing(#[from] ExpectationError),

    /// JSON output could not be produced.
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}
