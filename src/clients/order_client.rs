//! # Order Client
//!
//! Provides a high‑level API for interacting with the `Order` actor.
//! Slot booking happens in the actor's hooks; this client only sends requests
//! and filters what comes back.
use crate::auth::SessionGate;
use crate::clients::actor_client::ActorClient;
use crate::date_range::DateRange;
use crate::export::{ExportError, OrderExporter};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Order, OrderAction, OrderCreate, OrderId, OrderStatus};
use crate::order_actor::{OrderError, OrderQuery};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params), fields(delivery_date = %params.delivery_date_id))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!(?params, "create_order called");
        info!("Sending create_order to actor");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Sets the order's status, subject to the actor's transition policy.
    #[instrument(skip(self))]
    pub async fn set_status(&self, id: OrderId, status: OrderStatus) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, OrderAction::SetStatus(status))
            .await
            .map_err(Self::map_error)
    }

    /// Admin listing: orders matching `query`, oldest first.
    #[instrument(skip(self))]
    pub async fn list_orders(&self, query: OrderQuery) -> Result<Vec<Order>, OrderError> {
        let orders = self.list_matching(move |order| query.matches(order)).await?;
        debug!(count = orders.len(), "Orders listed");
        Ok(orders)
    }

    /// Runs the admin listing and passes the result to `exporter`.
    #[instrument(skip(self, exporter))]
    pub async fn export_orders<E>(
        &self,
        query: OrderQuery,
        exporter: &E,
    ) -> Result<E::Artifact, ExportError>
    where
        E: OrderExporter + ?Sized,
    {
        let orders = self.list_orders(query).await?;
        info!(count = orders.len(), "Exporting orders");
        exporter.export(&orders).await
    }

    /// Order history of the signed-in customer, placed within `range`.
    ///
    /// Fails with [`AuthError::SignedOut`](crate::auth::AuthError::SignedOut) when nobody is signed in.
    #[instrument(skip(self, gate))]
    pub async fn track_orders(
        &self,
        gate: &SessionGate,
        range: DateRange,
    ) -> Result<Vec<Order>, OrderError> {
        let session = gate.require()?;
        let user = session.user_id.as_str();
        let mine = self
            .list_matching(|order| order.placed_by.as_deref() == Some(user))
            .await?;
        Ok(range.filter(mine))
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<OrderError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
