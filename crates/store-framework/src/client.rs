//! # Generic Client
//!
//! This module defines the generic client for communicating with a store.

use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::record::StoreRecord;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `StoreActor`.
///
/// The client holds only the sender half of the store channel, so it is cheap
/// to clone and can be shared across tasks. All methods are async and resolve
/// to `Result<…, StoreError>`; a send failure means the store task has shut
/// down (`StoreClosed`), a receive failure means it dropped the reply
/// (`StoreDropped`).
#[derive(Clone)]
pub struct StoreClient<T: StoreRecord> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: StoreRecord> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    /// Stages an insert. Takes effect at the next [`commit`](Self::commit).
    pub async fn add(&self, record: T) -> Result<(), StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Add { record, respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    /// Returns the committed record for `id`, or `None` if absent.
    pub async fn find(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Find { id, respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    /// Stages a deletion. Takes effect at the next [`commit`](Self::commit).
    pub async fn remove(&self, id: T::Id) -> Result<(), StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Remove { id, respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    /// Returns all committed records in insertion order.
    pub async fn list(&self) -> Result<Vec<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::List { respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    /// Applies staged operations and returns the number that took effect.
    pub async fn commit(&self) -> Result<usize, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Commit { respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    /// Clears committed and staged state. Test collaborators only; production
    /// paths must never call this.
    pub async fn reset(&self) -> Result<(), StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Reset { respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }
}
