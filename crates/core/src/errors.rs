//! Core error types for the CleanCity application.
//!
//! Transport failures come from `cleancity-remote` and are wrapped here;
//! validation failures are raised before anything touches the network.

use thiserror::Error;

use crate::issues::IssueError;
use crate::ownership::ResolveError;
use cleancity_remote::RemoteError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the application core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Issue error: {0}")]
    Issue(#[from] IssueError),

    #[error("Owned view resolution failed: {0}")]
    Resolve(#[from] ResolveError),

    #[error("Remote store error: {0}")]
    Remote(#[from] RemoteError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Malformed user input, surfaced immediately and never sent to the network.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
