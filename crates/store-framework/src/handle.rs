//! # StoreHandle Trait
//!
//! Provides a common interface for record-specific repository handles, adding
//! default `find` and `remove` methods built on top of a generic
//! [`StoreClient`].
//!
//! Defining the repository surface as a trait keeps production and test
//! implementations interchangeable: a handle backed by a live store and one
//! backed by a scripted [`MockClient`](crate::mock::MockClient) look the same
//! to the code under test.

use crate::{StoreClient, StoreError, StoreRecord};
use async_trait::async_trait;

/// Trait for record-specific repository handles to inherit standard
/// persistence-context operations.
///
/// This trait reduces boilerplate by providing default implementations for
/// the operations whose shape never varies between record types.
///
/// # Example
///
/// ```rust
/// use store_framework::{StoreClient, StoreError, StoreHandle, StoreRecord};
/// use async_trait::async_trait;
///
/// // 1. Define a record
/// #[derive(Clone, Debug)]
/// struct Note {
///     id: u32,
/// }
///
/// impl StoreRecord for Note {
///     type Id = u32;
///     fn id(&self) -> u32 {
///         self.id
///     }
/// }
///
/// // 2. Define a repository handle
/// struct NoteRepository {
///     inner: StoreClient<Note>,
/// }
///
/// // 3. Implement StoreHandle
/// #[async_trait]
/// impl StoreHandle<Note> for NoteRepository {
///     type Error = String;
///
///     fn inner(&self) -> &StoreClient<Note> {
///         &self.inner
///     }
///
///     fn map_error(e: StoreError) -> Self::Error {
///         e.to_string()
///     }
/// }
///
/// // 4. Usage
/// async fn usage(repo: NoteRepository) {
///     // find() and remove() are provided automatically!
///     let _ = repo.find(1).await;
///     let _ = repo.remove(1).await;
/// }
/// ```
#[async_trait]
pub trait StoreHandle<T: StoreRecord>: Send + Sync {
    /// The record-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<T>;

    /// Map framework errors to the specific record error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch a committed record by id.
    #[tracing::instrument(skip(self))]
    async fn find(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().find(id).await.map_err(Self::map_error)
    }

    /// Stage the deletion of a record by id.
    #[tracing::instrument(skip(self))]
    async fn remove(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().remove(id).await.map_err(Self::map_error)
    }
}
