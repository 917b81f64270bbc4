//! # Cutting Style Actor
//!
//! Owns the list of preparation styles offered at checkout. Styles are not
//! tied to an animal or size.
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`CuttingStyle`]
//! - [`error`] - [`CuttingStyleError`]

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CuttingStyleClient;
use crate::framework::ResourceActor;
use crate::model::CuttingStyle;

/// Creates a new CuttingStyle actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<CuttingStyle>, CuttingStyleClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, CuttingStyleClient::new(generic_client))
}
