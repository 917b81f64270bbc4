//! # Animal Actor
//!
//! Owns the animal catalog: which animals are sold and the sizes each comes in.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Animal`]
//! - [`error`] - [`AnimalError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use meat_order::animal_actor;
//! use meat_order::clients::Repository;
//! use meat_order::model::AnimalParams;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = animal_actor::new(32);
//!
//!     // No dependencies, so context is ()
//!     tokio::spawn(actor.run(()));
//!
//!     let lamb = client
//!         .upsert(
//!             None,
//!             AnimalParams {
//!                 name: "Lamb".to_string(),
//!                 description: "Tender and mild".to_string(),
//!                 sizes: vec!["Small".into(), "Medium".into(), "Large".into()],
//!             },
//!         )
//!         .await?;
//!
//!     // Inactive animals drop out of the customer flow
//!     client.toggle_active(lamb.id).await?;
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::AnimalClient;
use crate::framework::ResourceActor;
use crate::model::Animal;

/// Creates a new Animal actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Animal>, AnimalClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, AnimalClient::new(generic_client))
}
