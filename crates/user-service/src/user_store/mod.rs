//! # User Store
//!
//! This module wires the `User` record into the generic store framework.
//!
//! ## Structure
//!
//! - [`record`] - [`StoreRecord`](store_framework::StoreRecord) implementation
//!   for [`User`]
//! - [`error`] - [`UserError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the store actor and repository
//!
//! ## Usage
//!
//! ```rust
//! use user_service::model::User;
//! use user_service::user_store;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create the store actor and its repository handle
//!     let (actor, repository) = user_store::new();
//!     tokio::spawn(actor.run());
//!
//!     // Use the repository
//!     repository.add_user(User::new(1, "Alice", "alice@example.com")).await?;
//!     repository.save_changes().await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod record;

pub use error::*;

use crate::model::User;
use crate::repository::UserRepository;
use store_framework::StoreActor;

/// Channel capacity of the user store.
const STORE_BUFFER: usize = 32;

/// Creates a new User store actor and its repository handle.
pub fn new() -> (StoreActor<User>, UserRepository) {
    let (actor, client) = StoreActor::new(STORE_BUFFER);
    let repository = UserRepository::new(client);

    (actor, repository)
}
