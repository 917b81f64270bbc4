//! # Cutting Style Client
use crate::clients::actor_client::ActorClient;
use crate::clients::repository::{CatalogEntity, Repository};
use crate::cutting_style_actor::CuttingStyleError;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{CatalogAction, CuttingStyle, CuttingStyleParams};
use async_trait::async_trait;

/// Client for interacting with the CuttingStyle actor.
#[derive(Clone)]
pub struct CuttingStyleClient {
    inner: ResourceClient<CuttingStyle>,
}

impl CuttingStyleClient {
    pub fn new(inner: ResourceClient<CuttingStyle>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<CuttingStyle> for CuttingStyleClient {
    type Error = CuttingStyleError;

    fn inner(&self) -> &ResourceClient<CuttingStyle> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<CuttingStyleError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => CuttingStyleError::NotFound(id),
            Err(other) => CuttingStyleError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl CatalogEntity for CuttingStyle {
    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active_action(active: bool) -> CatalogAction {
        CatalogAction::SetActive(active)
    }

    fn toggle_active_action() -> CatalogAction {
        CatalogAction::ToggleActive
    }

    fn update_from(params: CuttingStyleParams) -> CuttingStyleParams {
        params
    }
}

impl Repository<CuttingStyle> for CuttingStyleClient {}
