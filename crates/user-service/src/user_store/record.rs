//! Store contract implementation for the User domain type.
//!
//! This enables [`User`] to be managed by the generic
//! [`StoreActor`](store_framework::StoreActor). Identifiers are caller-assigned
//! and immutable; the store enforces uniqueness at commit time.

use crate::model::{User, UserId};
use store_framework::StoreRecord;

impl StoreRecord for User {
    type Id = UserId;

    fn id(&self) -> UserId {
        self.id
    }
}
