//! # Animal Client
//!
//! Wraps a `ResourceClient<Animal>`; everything beyond the repository surface
//! is read-side convenience for the customer flow.
use crate::animal_actor::AnimalError;
use crate::clients::actor_client::ActorClient;
use crate::clients::repository::{CatalogEntity, Repository};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Animal, AnimalParams, CatalogAction};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Animal actor.
#[derive(Clone)]
pub struct AnimalClient {
    inner: ResourceClient<Animal>,
}

impl AnimalClient {
    pub fn new(inner: ResourceClient<Animal>) -> Self {
        Self { inner }
    }

    /// Animals currently offered to customers, in catalog order.
    #[instrument(skip(self))]
    pub async fn list_active(&self) -> Result<Vec<Animal>, AnimalError> {
        debug!("Sending request");
        let mut animals = self.list().await?;
        animals.retain(|animal| animal.active);
        Ok(animals)
    }
}

#[async_trait]
impl ActorClient<Animal> for AnimalClient {
    type Error = AnimalError;

    fn inner(&self) -> &ResourceClient<Animal> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<AnimalError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => AnimalError::NotFound(id),
            Err(other) => AnimalError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl CatalogEntity for Animal {
    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active_action(active: bool) -> CatalogAction {
        CatalogAction::SetActive(active)
    }

    fn toggle_active_action() -> CatalogAction {
        CatalogAction::ToggleActive
    }

    fn update_from(params: AnimalParams) -> AnimalParams {
        params
    }
}

impl Repository<Animal> for AnimalClient {}
