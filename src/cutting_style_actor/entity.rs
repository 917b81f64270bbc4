//! ActorEntity trait implementation for the CuttingStyle domain type.

use super::error::CuttingStyleError;
use crate::framework::ActorEntity;
use crate::model::{CatalogAction, CuttingStyle, CuttingStyleId, CuttingStyleParams};
use async_trait::async_trait;

fn validated_name(params: &CuttingStyleParams) -> Result<String, CuttingStyleError> {
    let name = params.name.trim();
    if name.is_empty() {
        return Err(CuttingStyleError::MissingName);
    }
    Ok(name.to_string())
}

#[async_trait]
impl ActorEntity for CuttingStyle {
    type Id = CuttingStyleId;
    type Create = CuttingStyleParams;
    type Update = CuttingStyleParams;
    type Action = CatalogAction;
    type ActionResult = CuttingStyle;
    type Context = ();
    type Error = CuttingStyleError;

    fn from_create_params(
        id: CuttingStyleId,
        params: CuttingStyleParams,
    ) -> Result<Self, Self::Error> {
        Ok(Self::new(id, validated_name(&params)?))
    }

    async fn on_update(
        &mut self,
        update: CuttingStyleParams,
        _ctx: &(),
    ) -> Result<(), Self::Error> {
        self.name = validated_name(&update)?;
        Ok(())
    }

    async fn on_delete(&self, _ctx: &()) -> Result<(), Self::Error> {
        Err(CuttingStyleError::DeletionNotAllowed(self.id.to_string()))
    }

    async fn handle_action(
        &mut self,
        action: CatalogAction,
        _ctx: &(),
    ) -> Result<CuttingStyle, Self::Error> {
        action.apply(&mut self.active);
        Ok(self.clone())
    }
}
