//! # Order Actor
//!
//! Owns submitted orders. An order is created from a completed
//! [`OrderDraft`](crate::draft::OrderDraft) and afterwards only its status changes.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`]
//! - [`status`] - [`TransitionPolicy`], which status changes are allowed
//! - [`query`] - [`OrderQuery`], the admin listing filter
//!
//! ## Dependencies
//!
//! An order is checked against the animal and cutting-style actors, takes a
//! slot on its delivery date, and gives the slot back when cancelled, so the
//! actor runs with an [`OrderContext`] holding those three clients:
//!
//! ```rust,ignore
//! let (order_actor, orders) = order_actor::new(32);
//! tokio::spawn(order_actor.run(OrderContext::new(
//!     animals.clone(),
//!     cutting_styles.clone(),
//!     delivery_dates.clone(),
//!     TransitionPolicy::Directed,
//! )));
//! ```

pub mod entity;
pub mod error;
pub mod query;
pub mod status;

pub use error::*;
pub use query::*;
pub use status::*;

use crate::clients::{AnimalClient, CuttingStyleClient, DeliveryDateClient, OrderClient};
use crate::framework::ResourceActor;
use crate::model::Order;

/// Dependencies injected into the Order actor at `run` time.
#[derive(Clone)]
pub struct OrderContext {
    pub animals: AnimalClient,
    pub cutting_styles: CuttingStyleClient,
    pub delivery_dates: DeliveryDateClient,
    pub policy: TransitionPolicy,
}

impl OrderContext {
    pub fn new(
        animals: AnimalClient,
        cutting_styles: CuttingStyleClient,
        delivery_dates: DeliveryDateClient,
        policy: TransitionPolicy,
    ) -> Self {
        Self {
            animals,
            cutting_styles,
            delivery_dates,
            policy,
        }
    }
}

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, OrderClient::new(generic_client))
}
