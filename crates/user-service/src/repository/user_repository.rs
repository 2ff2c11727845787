//! # User Repository
//!
//! Provides the only path from controller logic to the user store.
//! It wraps a `StoreClient<User>` and maps framework errors into [`UserError`],
//! so the raw store handle never leaks upwards.

use crate::model::User;
use crate::user_store::UserError;
use store_framework::StoreHandle;
use store_framework::{StoreClient, StoreError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Repository handle for the user store.
///
/// Cheap to clone; every clone talks to the same store task. `find` and
/// `remove` are inherited from [`StoreHandle`].
#[derive(Clone)]
pub struct UserRepository {
    inner: StoreClient<User>,
}

impl UserRepository {
    pub fn new(inner: StoreClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl StoreHandle<User> for UserRepository {
    type Error = UserError;

    fn inner(&self) -> &StoreClient<User> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        match e {
            StoreError::DuplicateKey(id) => UserError::AlreadyExists(id),
            other => UserError::StoreCommunication(other.to_string()),
        }
    }
}

impl UserRepository {
    /// Stages an insert of `user`. Takes effect at the next
    /// [`save_changes`](Self::save_changes).
    #[instrument(skip(self, user), fields(id = user.id))]
    pub async fn add_user(&self, user: User) -> Result<(), UserError> {
        debug!("Sending request");
        self.inner.add(user).await.map_err(Self::map_error)
    }

    /// Returns all committed users in insertion order.
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>, UserError> {
        debug!("Sending request");
        self.inner.list().await.map_err(Self::map_error)
    }

    /// Commits staged operations, returning the number that took effect.
    #[instrument(skip(self))]
    pub async fn save_changes(&self) -> Result<usize, UserError> {
        debug!("Sending request");
        self.inner.commit().await.map_err(Self::map_error)
    }

    /// Destructive: clears the store. Test collaborators only.
    #[instrument(skip(self))]
    pub async fn reset(&self) -> Result<(), UserError> {
        debug!("Sending request");
        self.inner.reset().await.map_err(Self::map_error)
    }
}
