//! # Delivery Date Client
//!
//! Repository surface for the schedule plus the slot actions used by the
//! order actor.
use crate::clients::actor_client::ActorClient;
use crate::clients::repository::{CatalogEntity, Repository};
use crate::date_range::DateRange;
use crate::delivery_date_actor::DeliveryDateError;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{DeliveryDate, DeliveryDateAction, DeliveryDateId, DeliveryDateParams};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the DeliveryDate actor.
#[derive(Clone)]
pub struct DeliveryDateClient {
    inner: ResourceClient<DeliveryDate>,
}

impl DeliveryDateClient {
    pub fn new(inner: ResourceClient<DeliveryDate>) -> Self {
        Self { inner }
    }

    /// Takes one slot on the date and returns the updated record.
    #[instrument(skip(self))]
    pub async fn book_slot(&self, id: DeliveryDateId) -> Result<DeliveryDate, DeliveryDateError> {
        debug!("Booking slot on {}", id);
        self.inner
            .perform_action(id, DeliveryDateAction::BookSlot)
            .await
            .map_err(Self::map_error)
    }

    /// Gives one slot back.
    #[instrument(skip(self))]
    pub async fn release_slot(
        &self,
        id: DeliveryDateId,
    ) -> Result<DeliveryDate, DeliveryDateError> {
        debug!("Releasing slot on {}", id);
        self.inner
            .perform_action(id, DeliveryDateAction::ReleaseSlot)
            .await
            .map_err(Self::map_error)
    }

    /// Scheduled dates falling in `range`, active or not.
    #[instrument(skip(self))]
    pub async fn list_within(
        &self,
        range: DateRange,
    ) -> Result<Vec<DeliveryDate>, DeliveryDateError> {
        debug!("Sending request");
        Ok(range.filter(self.list().await?))
    }
}

#[async_trait]
impl ActorClient<DeliveryDate> for DeliveryDateClient {
    type Error = DeliveryDateError;

    fn inner(&self) -> &ResourceClient<DeliveryDate> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<DeliveryDateError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => DeliveryDateError::NotFound(id),
            Err(other) => DeliveryDateError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl CatalogEntity for DeliveryDate {
    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active_action(active: bool) -> DeliveryDateAction {
        DeliveryDateAction::SetActive(active)
    }

    fn toggle_active_action() -> DeliveryDateAction {
        DeliveryDateAction::ToggleActive
    }

    fn update_from(params: DeliveryDateParams) -> DeliveryDateParams {
        params
    }
}

impl Repository<DeliveryDate> for DeliveryDateClient {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use chrono::NaiveDate;

    fn december(day: u32, slots: u32) -> DeliveryDate {
        DeliveryDate::new(
            DeliveryDateId(day),
            NaiveDate::from_ymd_opt(2023, 12, day).unwrap(),
            slots,
        )
    }

    #[tokio::test]
    async fn list_within_filters_by_calendar_day() {
        let mut mock = MockClient::<DeliveryDate>::new();
        mock.expect_list()
            .return_ok(vec![december(15, 5), december(20, 3), december(25, 2)]);
        let client = DeliveryDateClient::new(mock.client());

        let range = DateRange::from_strs(Some("2023-12-16"), Some("2023-12-24")).unwrap();
        let dates = client.list_within(range).await.unwrap();

        assert_eq!(dates, vec![december(20, 3)]);
        mock.verify();
    }

    #[tokio::test]
    async fn booking_full_date_surfaces_typed_error() {
        let day = NaiveDate::from_ymd_opt(2023, 12, 15).unwrap();
        let mut mock = MockClient::<DeliveryDate>::new();
        mock.expect_action(DeliveryDateId(1))
            .return_err(FrameworkError::EntityError(Box::new(
                DeliveryDateError::FullyBooked(day),
            )));
        let client = DeliveryDateClient::new(mock.client());

        assert_eq!(
            client.book_slot(DeliveryDateId(1)).await,
            Err(DeliveryDateError::FullyBooked(day))
        );
        mock.verify();
    }
}
