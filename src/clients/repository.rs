//! # Repository
//!
//! The data-access surface shared by every catalog list (animals, cutting
//! styles, price options, delivery dates): `list`, `get_by_id`, `upsert`,
//! `set_active` and `toggle_active`. `delete` only succeeds for price options;
//! the other lists refuse it in their `on_delete` hook.
//!
//! Callers never see where records live. The in-process backing is a
//! [`ResourceActor`](crate::framework::ResourceActor); another backing only
//! has to provide an [`ActorClient`].

use crate::clients::actor_client::ActorClient;
use crate::framework::{ActorEntity, FrameworkError};
use async_trait::async_trait;

/// A catalog record that can be switched on and off and edited with its create payload.
pub trait CatalogEntity: ActorEntity<ActionResult = Self> {
    fn is_active(&self) -> bool;

    fn set_active_action(active: bool) -> Self::Action;

    fn toggle_active_action() -> Self::Action;

    /// Turns an add payload into an edit payload; edits replace the whole record.
    fn update_from(params: Self::Create) -> Self::Update;
}

#[async_trait]
pub trait Repository<T: CatalogEntity>: ActorClient<T> {
    /// Like [`ActorClient::get`], but a missing record is the resource's `NotFound` error.
    #[tracing::instrument(skip(self))]
    async fn get_by_id(&self, id: T::Id) -> Result<T, Self::Error> {
        let label = id.to_string();
        self.get(id)
            .await?
            .ok_or_else(|| Self::map_error(FrameworkError::NotFound(label)))
    }

    /// Adds a record when `id` is `None`, otherwise replaces the existing one.
    ///
    /// Editing an id that does not exist is `NotFound`, never an insert.
    #[tracing::instrument(skip(self))]
    async fn upsert(&self, id: Option<T::Id>, params: T::Create) -> Result<T, Self::Error> {
        match id {
            Some(id) => self
                .inner()
                .update(id, T::update_from(params))
                .await
                .map_err(Self::map_error),
            None => {
                let id = self.inner().create(params).await.map_err(Self::map_error)?;
                self.get_by_id(id).await
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn set_active(&self, id: T::Id, active: bool) -> Result<T, Self::Error> {
        self.inner()
            .perform_action(id, T::set_active_action(active))
            .await
            .map_err(Self::map_error)
    }

    #[tracing::instrument(skip(self))]
    async fn toggle_active(&self, id: T::Id) -> Result<T, Self::Error> {
        self.inner()
            .perform_action(id, T::toggle_active_action())
            .await
            .map_err(Self::map_error)
    }
}
