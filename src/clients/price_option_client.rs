//! # Price Option Client
use crate::clients::actor_client::ActorClient;
use crate::clients::repository::{CatalogEntity, Repository};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{AnimalId, CatalogAction, PriceOption, PriceOptionParams};
use crate::price_option_actor::PriceOptionError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the PriceOption actor.
#[derive(Clone)]
pub struct PriceOptionClient {
    inner: ResourceClient<PriceOption>,
}

impl PriceOptionClient {
    pub fn new(inner: ResourceClient<PriceOption>) -> Self {
        Self { inner }
    }

    /// Active options for one animal in one size, size compared ignoring case.
    #[instrument(skip(self))]
    pub async fn list_for(
        &self,
        animal_id: AnimalId,
        size: &str,
    ) -> Result<Vec<PriceOption>, PriceOptionError> {
        debug!("Sending request");
        let mut options = self.list().await?;
        options.retain(|option| option.active && option.applies_to(animal_id, size));
        Ok(options)
    }
}

#[async_trait]
impl ActorClient<PriceOption> for PriceOptionClient {
    type Error = PriceOptionError;

    fn inner(&self) -> &ResourceClient<PriceOption> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<PriceOptionError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => PriceOptionError::NotFound(id),
            Err(other) => PriceOptionError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl CatalogEntity for PriceOption {
    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active_action(active: bool) -> CatalogAction {
        CatalogAction::SetActive(active)
    }

    fn toggle_active_action() -> CatalogAction {
        CatalogAction::ToggleActive
    }

    fn update_from(params: PriceOptionParams) -> PriceOptionParams {
        params
    }
}

impl Repository<PriceOption> for PriceOptionClient {}
