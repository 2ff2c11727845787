//! # Resource Controllers
//!
//! Controllers translate logical requests (verb + optional id + optional
//! body) into repository calls and map the outcome to an [`ApiResponse`].
//! They hold no cross-request state of their own; all state lives in the
//! persistence context behind the repository.

pub mod hello;
pub mod response;
pub mod users;

pub use hello::HelloController;
pub use response::ApiResponse;
pub use users::UsersController;
