//! # StoreRecord Trait
//!
//! The contract a record type must satisfy to be managed by a [`StoreActor`].
//!
//! # Architecture Note
//! By defining one contract for all record types, the [`StoreActor`] logic is
//! written once and reused for any entity. The associated `Id` type keeps the
//! store type-safe: a store of `User` records can only be asked about
//! `User::Id` values.
//!
//! Identifiers are **caller-assigned**: the record arrives with its id already
//! set, and the store never generates one. Uniqueness is enforced at commit
//! time instead.
//!
//! [`StoreActor`]: crate::actor::StoreActor

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record must implement to be managed by a `StoreActor`.
pub trait StoreRecord: Clone + Send + Sync + 'static {
    /// The unique identifier for this record (e.g., u32, String, Uuid).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Returns the caller-assigned identifier of this record.
    fn id(&self) -> Self::Id;
}
