//! ActorEntity trait implementation for the Animal domain type.
//!
//! Add and edit share one payload ([`AnimalParams`]) and one set of checks:
//! a non-blank name and at least one non-blank size label.

use super::error::AnimalError;
use crate::framework::ActorEntity;
use crate::model::{Animal, AnimalId, AnimalParams, CatalogAction};
use async_trait::async_trait;

/// Trims the payload and rejects what the admin form would reject.
fn validate(params: AnimalParams) -> Result<AnimalParams, AnimalError> {
    let name = params.name.trim().to_string();
    if name.is_empty() {
        return Err(AnimalError::MissingName);
    }
    let sizes: Vec<String> = params
        .sizes
        .iter()
        .map(|size| size.trim())
        .filter(|size| !size.is_empty())
        .map(str::to_string)
        .collect();
    if sizes.is_empty() {
        return Err(AnimalError::NoSizes);
    }
    Ok(AnimalParams {
        name,
        description: params.description.trim().to_string(),
        sizes,
    })
}

#[async_trait]
impl ActorEntity for Animal {
    type Id = AnimalId;
    type Create = AnimalParams;
    type Update = AnimalParams;
    type Action = CatalogAction;
    type ActionResult = Animal;
    type Context = ();
    type Error = AnimalError;

    fn from_create_params(id: AnimalId, params: AnimalParams) -> Result<Self, Self::Error> {
        let params = validate(params)?;
        Ok(Self::new(id, params.name, params.description, params.sizes))
    }

    /// Replaces name, description and sizes. The active flag is left alone.
    async fn on_update(&mut self, update: AnimalParams, _ctx: &()) -> Result<(), Self::Error> {
        let update = validate(update)?;
        self.name = update.name;
        self.description = update.description;
        self.sizes = update.sizes;
        Ok(())
    }

    /// Price options and orders refer to animals, so they are only switched off.
    async fn on_delete(&self, _ctx: &()) -> Result<(), Self::Error> {
        Err(AnimalError::DeletionNotAllowed(self.id.to_string()))
    }

    async fn handle_action(
        &mut self,
        action: CatalogAction,
        _ctx: &(),
    ) -> Result<Animal, Self::Error> {
        action.apply(&mut self.active);
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(name: &str, sizes: &[&str]) -> AnimalParams {
        AnimalParams {
            name: name.to_string(),
            description: String::new(),
            sizes: sizes.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = Animal::from_create_params(AnimalId(1), params("  ", &["Small"])).unwrap_err();
        assert_eq!(err, AnimalError::MissingName);
        assert_eq!(err.to_string(), "Please enter an animal name");
    }

    #[test]
    fn blank_sizes_do_not_count() {
        let err = Animal::from_create_params(AnimalId(1), params("Goat", &["", " "])).unwrap_err();
        assert_eq!(err, AnimalError::NoSizes);
    }

    #[test]
    fn labels_are_trimmed() {
        let goat = Animal::from_create_params(AnimalId(1), params(" Goat ", &[" Small", "Large "]))
            .unwrap();
        assert_eq!(goat.name, "Goat");
        assert_eq!(goat.sizes, vec!["Small", "Large"]);
        assert!(goat.active);
    }

    #[tokio::test]
    async fn toggling_twice_restores_active_flag() {
        let mut lamb = Animal::from_create_params(AnimalId(1), params("Lamb", &["Small"])).unwrap();
        let once = lamb.handle_action(CatalogAction::ToggleActive, &()).await.unwrap();
        assert!(!once.active);
        let twice = lamb.handle_action(CatalogAction::ToggleActive, &()).await.unwrap();
        assert!(twice.active);
    }

    #[tokio::test]
    async fn animals_cannot_be_deleted() {
        let lamb = Animal::from_create_params(AnimalId(1), params("Lamb", &["Small"])).unwrap();
        assert_eq!(
            lamb.on_delete(&()).await,
            Err(AnimalError::DeletionNotAllowed("animal_1".into()))
        );
    }

    #[tokio::test]
    async fn edit_keeps_active_flag() {
        let mut lamb = Animal::from_create_params(AnimalId(1), params("Lamb", &["Small"])).unwrap();
        lamb.handle_action(CatalogAction::SetActive(false), &()).await.unwrap();
        lamb.on_update(params("Spring Lamb", &["Small", "Medium"]), &())
            .await
            .unwrap();
        assert_eq!(lamb.name, "Spring Lamb");
        assert!(!lamb.active);
    }
}
