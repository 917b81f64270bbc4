//! Error types for the CuttingStyle actor.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CuttingStyleError {
    #[error("Cutting style not found: {0}")]
    NotFound(String),

    #[error("Please enter a cutting style name")]
    MissingName,

    #[error("Cutting styles cannot be deleted: {0}")]
    DeletionNotAllowed(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CuttingStyleError {
    fn from(msg: String) -> Self {
        CuttingStyleError::ActorCommunicationError(msg)
    }
}
