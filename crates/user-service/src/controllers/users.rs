//! # Users Resource Controller
//!
//! Translates the five logical user operations (list, get, create, replace,
//! delete) into persistence-context calls and maps each outcome to an
//! [`ApiResponse`].
//!
//! Validation happens here, before the store is touched: a create with an
//! empty name and a replace whose path and body ids disagree are rejected as
//! `BadRequest` without staging anything. Store communication failures are
//! not translated; they bubble up as `Err(UserError)` and end the current
//! request only.

use crate::controllers::response::ApiResponse;
use crate::model::{User, UserId};
use crate::repository::UserRepository;
use crate::user_store::UserError;
use store_framework::StoreHandle;
use tracing::{debug, instrument, warn};

/// Controller for the `/users` resource.
///
/// Request-scoped and stateless: every operation is a single-shot
/// transformation, and all state lives behind the repository.
pub struct UsersController {
    repository: UserRepository,
}

impl UsersController {
    pub fn new(repository: UserRepository) -> Self {
        Self { repository }
    }

    /// `GET /users`: all users.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<ApiResponse<Vec<User>>, UserError> {
        let users = self.repository.list_users().await?;
        debug!(count = users.len(), "Listed users");
        Ok(ApiResponse::Ok(users))
    }

    /// `GET /users/{id}`: one user, or `NotFound`.
    #[instrument(skip(self))]
    pub async fn get(&self, id: UserId) -> Result<ApiResponse<User>, UserError> {
        match self.repository.find(id).await? {
            Some(user) => Ok(ApiResponse::Ok(user)),
            None => Ok(ApiResponse::NotFound),
        }
    }

    /// `POST /users`: create a user with a caller-assigned id.
    ///
    /// The only field-level validation is presence of `name`; email format is
    /// deliberately not checked. A duplicate id surfaces as `Conflict` and
    /// leaves the first record's values in place.
    #[instrument(skip(self, user), fields(id = user.id))]
    pub async fn create(&self, user: User) -> Result<ApiResponse<User>, UserError> {
        if user.name.trim().is_empty() {
            warn!("Rejected create without a name");
            return Ok(ApiResponse::BadRequest("name is required".to_string()));
        }

        self.repository.add_user(user.clone()).await?;
        match self.repository.save_changes().await {
            Ok(_) => Ok(ApiResponse::Created(user)),
            Err(UserError::AlreadyExists(id)) => {
                warn!(%id, "Rejected create with duplicate id");
                Ok(ApiResponse::Conflict(id))
            }
            Err(e) => Err(e),
        }
    }

    /// `PUT /users/{id}`: full replace, no partial/patch semantics.
    ///
    /// Mismatched path and body ids are always rejected with `BadRequest`.
    #[instrument(skip(self, user), fields(body_id = user.id))]
    pub async fn replace(&self, id: UserId, user: User) -> Result<ApiResponse<()>, UserError> {
        if user.id != id {
            warn!(path_id = id, body_id = user.id, "Rejected replace with id mismatch");
            return Ok(ApiResponse::BadRequest("id mismatch".to_string()));
        }
        if self.repository.find(id).await?.is_none() {
            return Ok(ApiResponse::NotFound);
        }

        // Full overwrite: stage the removal and the new record, then commit
        // both as one unit. The store applies them in order, so the rewrite
        // of the same id never trips the duplicate-key check.
        self.repository.remove(id).await?;
        self.repository.add_user(user).await?;
        self.repository.save_changes().await?;
        Ok(ApiResponse::NoContent)
    }

    /// `DELETE /users/{id}`: remove a user, or `NotFound` if absent.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: UserId) -> Result<ApiResponse<()>, UserError> {
        if self.repository.find(id).await?.is_none() {
            return Ok(ApiResponse::NotFound);
        }

        self.repository.remove(id).await?;
        self.repository.save_changes().await?;
        Ok(ApiResponse::NoContent)
    }
}
