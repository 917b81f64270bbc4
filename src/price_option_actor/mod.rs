//! # Price Option Actor
//!
//! Owns the priced packages offered for each (animal, size) pair.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`PriceOption`]
//! - [`error`] - [`PriceOptionError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Dependencies
//!
//! Every add and edit is checked against the animal catalog, so the actor runs
//! with an [`AnimalClient`](crate::clients::AnimalClient) as its context:
//!
//! ```rust,ignore
//! let (animal_actor, animals) = animal_actor::new(32);
//! let (price_actor, prices) = price_option_actor::new(32);
//! tokio::spawn(animal_actor.run(()));
//! tokio::spawn(price_actor.run(animals.clone()));
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::PriceOptionClient;
use crate::framework::ResourceActor;
use crate::model::PriceOption;

/// Creates a new PriceOption actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<PriceOption>, PriceOptionClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, PriceOptionClient::new(generic_client))
}
