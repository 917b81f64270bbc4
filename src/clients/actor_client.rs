//! Operations every resource client gets for free.

use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Shared reads and deletes for the typed clients.
///
/// An implementor names the [`ResourceClient`] it wraps and how a
/// [`FrameworkError`] becomes its own error; `get`, `list`, `list_matching`
/// and `delete` come from here.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    type Error: From<String> + Send + Sync;

    fn inner(&self) -> &ResourceClient<T>;

    /// Turns a transport or entity failure into the resource's error.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// `Ok(None)` when no record has this id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// All records, oldest first.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Records for which `keep` holds, oldest first.
    async fn list_matching<F>(&self, keep: F) -> Result<Vec<T>, Self::Error>
    where
        F: Fn(&T) -> bool + Send,
    {
        let mut records = self.list().await?;
        records.retain(|record| keep(record));
        tracing::debug!(count = records.len(), "Filtered listing");
        Ok(records)
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
