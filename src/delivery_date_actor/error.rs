//! Error types for the DeliveryDate actor.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur during delivery schedule operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DeliveryDateError {
    /// The requested delivery date was not found.
    #[error("Delivery date not found: {0}")]
    NotFound(String),

    /// Slot count of zero.
    #[error("Please enter a valid number of slots")]
    InvalidSlots,

    #[error("This date already exists in the schedule")]
    DuplicateDate(NaiveDate),

    /// More slots booked than the day has.
    #[error("Booked slots ({booked}) cannot exceed total slots ({slots})")]
    Overbooked { booked: u32, slots: u32 },

    #[error("No delivery slots left on {0}")]
    FullyBooked(NaiveDate),

    #[error("Deliveries are not running on {0}")]
    Inactive(NaiveDate),

    /// Dates are switched off instead.
    #[error("Delivery dates cannot be deleted: {0}")]
    DeletionNotAllowed(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for DeliveryDateError {
    fn from(msg: String) -> Self {
        DeliveryDateError::ActorCommunicationError(msg)
    }
}
