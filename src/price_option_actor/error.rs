//! Error types for the PriceOption actor.

use crate::animal_actor::AnimalError;
use crate::model::AnimalId;
use thiserror::Error;

/// Errors that can occur during price option operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PriceOptionError {
    /// The requested price option was not found.
    #[error("Price option not found: {0}")]
    NotFound(String),

    /// Name or size left blank.
    #[error("Please fill in all required fields.")]
    MissingFields,

    /// Price is zero or negative.
    #[error("Please enter a valid price.")]
    InvalidPrice,

    /// The size is not one the animal is sold in.
    #[error("{animal} is not sold in size {size}")]
    UnknownSize { animal: AnimalId, size: String },

    /// Looking up the animal failed (including the animal not existing).
    #[error(transparent)]
    Animal(#[from] AnimalError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for PriceOptionError {
    fn from(msg: String) -> Self {
        PriceOptionError::ActorCommunicationError(msg)
    }
}
