//! # System Lifecycle & Orchestration
//!
//! Starts the five resource actors, wires their dependencies, seeds the
//! catalog and shuts everything down again.
//!
//! ## Dependency Injection via Context
//!
//! Actors are created without dependencies and receive them in `run(context)`:
//!
//! | Actor          | Context                                   |
//! |----------------|-------------------------------------------|
//! | Animal         | `()`                                      |
//! | Cutting style  | `()`                                      |
//! | Delivery date  | `()`                                      |
//! | Price option   | [`AnimalClient`](crate::clients::AnimalClient) |
//! | Order          | [`OrderContext`](crate::order_actor::OrderContext) (animals, cutting styles, delivery dates, policy) |
//!
//! ## Graceful Shutdown
//!
//! [`ShopSystem::shutdown`] drops every client it holds and awaits each actor
//! task. Actors holding another actor's client in their context release it
//! when they stop, so the dependency graph above (which has no cycles) winds
//! down completely.
//!
//! ## Observability
//!
//! See [`setup_tracing`].

pub mod shop_system;
pub mod tracing;

pub use shop_system::*;
pub use tracing::*;
