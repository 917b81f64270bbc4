//! ActorEntity trait implementation for the PriceOption domain type.
//!
//! Field checks run synchronously in [`from_create_params`](ActorEntity::from_create_params);
//! the animal/size check needs the animal actor and runs in the async hooks.
//! The stored size label is the animal's own spelling, so "medium" entered by
//! an admin is stored as "Medium".

use super::error::PriceOptionError;
use crate::clients::{AnimalClient, Repository};
use crate::framework::ActorEntity;
use crate::model::{CatalogAction, PriceOption, PriceOptionId, PriceOptionParams};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::debug;

fn validate(params: PriceOptionParams) -> Result<PriceOptionParams, PriceOptionError> {
    let name = params.name.trim().to_string();
    let animal_size = params.animal_size.trim().to_string();
    if name.is_empty() || animal_size.is_empty() {
        return Err(PriceOptionError::MissingFields);
    }
    if params.price <= Decimal::ZERO {
        return Err(PriceOptionError::InvalidPrice);
    }
    Ok(PriceOptionParams {
        name,
        animal_size,
        description: params.description.trim().to_string(),
        ..params
    })
}

impl PriceOption {
    /// Replaces `animal_size` with the animal's stored label, or fails if the
    /// animal does not come in that size.
    async fn resolve_size(&mut self, animals: &AnimalClient) -> Result<(), PriceOptionError> {
        let animal = animals.get_by_id(self.animal_id).await?;
        let label = animal
            .size_label(&self.animal_size)
            .ok_or_else(|| PriceOptionError::UnknownSize {
                animal: self.animal_id,
                size: self.animal_size.clone(),
            })?;
        debug!(animal = %animal.name, size = label, "Size resolved");
        self.animal_size = label.to_string();
        Ok(())
    }
}

#[async_trait]
impl ActorEntity for PriceOption {
    type Id = PriceOptionId;
    type Create = PriceOptionParams;
    type Update = PriceOptionParams;
    type Action = CatalogAction;
    type ActionResult = PriceOption;
    type Context = AnimalClient;
    type Error = PriceOptionError;

    fn from_create_params(
        id: PriceOptionId,
        params: PriceOptionParams,
    ) -> Result<Self, Self::Error> {
        let params = validate(params)?;
        Ok(Self {
            id,
            animal_id: params.animal_id,
            animal_size: params.animal_size,
            name: params.name,
            price: params.price,
            description: params.description,
            active: true,
        })
    }

    async fn on_create(&mut self, animals: &AnimalClient) -> Result<(), Self::Error> {
        self.resolve_size(animals).await
    }

    async fn on_update(
        &mut self,
        update: PriceOptionParams,
        animals: &AnimalClient,
    ) -> Result<(), Self::Error> {
        let update = validate(update)?;
        self.animal_id = update.animal_id;
        self.animal_size = update.animal_size;
        self.name = update.name;
        self.price = update.price;
        self.description = update.description;
        self.resolve_size(animals).await
    }

    async fn handle_action(
        &mut self,
        action: CatalogAction,
        _animals: &AnimalClient,
    ) -> Result<PriceOption, Self::Error> {
        action.apply(&mut self.active);
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnimalId;
    use rust_decimal_macros::dec;

    fn params(name: &str, size: &str, price: Decimal) -> PriceOptionParams {
        PriceOptionParams {
            animal_id: AnimalId(1),
            animal_size: size.to_string(),
            name: name.to_string(),
            price,
            description: String::new(),
        }
    }

    #[test]
    fn price_must_be_positive() {
        for price in [dec!(0), dec!(-1.50)] {
            assert_eq!(
                PriceOption::from_create_params(PriceOptionId(1), params("Basic", "Small", price)),
                Err(PriceOptionError::InvalidPrice)
            );
        }
    }

    #[test]
    fn blank_fields_are_reported_before_price() {
        let err = PriceOption::from_create_params(PriceOptionId(1), params("", "Small", dec!(0)))
            .unwrap_err();
        assert_eq!(err.to_string(), "Please fill in all required fields.");
    }

    #[test]
    fn valid_params_build_an_active_option() {
        let option =
            PriceOption::from_create_params(PriceOptionId(2), params(" Standard ", "Medium", dec!(480)))
                .unwrap();
        assert_eq!(option.name, "Standard");
        assert_eq!(option.price, dec!(480));
        assert!(option.active);
    }
}
