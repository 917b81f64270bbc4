//! Generic resource-actor framework.
//!
//! Every catalog list and the order book is owned by one [`ResourceActor`]. The
//! actor holds the records, processes requests one at a time, and answers
//! through a cloneable [`ResourceClient`].
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns an insertion-ordered store
//! - [`ResourceClient`] - Type-safe handle used by every domain client
//! - [`FrameworkError`] - Common error types (closed channel, missing record)
//!
//! # Testing
//!
//! See [`mock`] for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
