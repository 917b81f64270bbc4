//! # Delivery Date Actor
//!
//! Owns the delivery schedule: which days deliveries run and how many slots
//! each day has left.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`DeliveryDate`]
//! - [`error`] - [`DeliveryDateError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Custom Actions
//!
//! Besides the activation actions shared with the rest of the catalog, the
//! schedule exposes slot booking. The order actor books a slot when an order
//! is placed and releases it when the order is cancelled:
//!
//! ```rust,ignore
//! let date = delivery_dates.book_slot(date_id).await?;   // fails when full or inactive
//! delivery_dates.release_slot(date_id).await?;
//! ```
//!
//! ## Invariants
//!
//! - A calendar day appears at most once in the schedule.
//! - `booked <= slots` for every stored record; edits that would break this
//!   are rejected.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::DeliveryDateClient;
use crate::framework::ResourceActor;
use crate::model::DeliveryDate;

/// Creates a new DeliveryDate actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<DeliveryDate>, DeliveryDateClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, DeliveryDateClient::new(generic_client))
}
