//! Error types for Sociogram Core

use thiserror::Error;

/// Result type alias using Sociogram's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Sociogram error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Person not found: {0}")]
    PersonNotFound(String),

    #[error("A person cannot befriend themselves: {0}")]
    SelfFriendship(String),
}
