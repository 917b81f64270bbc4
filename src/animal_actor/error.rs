//! Error types for the Animal actor.

use thiserror::Error;

/// Errors that can occur during animal operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnimalError {
    /// The requested animal was not found.
    #[error("Animal not found: {0}")]
    NotFound(String),

    #[error("Please enter an animal name")]
    MissingName,

    #[error("Please select at least one size")]
    NoSizes,

    /// Animals are switched off instead.
    #[error("Animals cannot be deleted: {0}")]
    DeletionNotAllowed(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for AnimalError {
    fn from(msg: String) -> Self {
        AnimalError::ActorCommunicationError(msg)
    }
}
