//! Error types for the Order actor.

use crate::animal_actor::AnimalError;
use crate::auth::AuthError;
use crate::cutting_style_actor::CuttingStyleError;
use crate::delivery_date_actor::DeliveryDateError;
use crate::model::OrderStatus;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// A required field of the submission is blank.
    #[error("Order is missing {0}")]
    MissingField(&'static str),

    /// The animal or cutting style has been switched off.
    #[error("{0} is not available")]
    Unavailable(String),

    #[error("{size} is not a size of {animal}")]
    UnknownSize { animal: String, size: String },

    /// Looking up the ordered animal failed.
    #[error(transparent)]
    Animal(#[from] AnimalError),

    /// Looking up the chosen cutting style failed.
    #[error(transparent)]
    CuttingStyle(#[from] CuttingStyleError),

    /// The configured transition policy forbids this status change.
    #[error("Cannot change order status from {from} to {to}")]
    TransitionNotAllowed { from: OrderStatus, to: OrderStatus },

    /// Orders are kept for the record; only their status changes.
    #[error("Orders cannot be deleted: {0}")]
    DeletionNotAllowed(String),

    /// Booking or releasing the delivery slot failed.
    #[error(transparent)]
    DeliveryDate(#[from] DeliveryDateError),

    /// Order history needs a signed-in customer.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
