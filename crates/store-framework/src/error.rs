//! # Framework Errors
//!
//! This module defines the common error types used throughout the store
//! framework. By centralizing error definitions, we ensure consistent error
//! handling across all stores and clients.
//!
//! Note what is *not* here: a missing record is not an error. `find` returns
//! `Option` and enumeration simply omits absent ids, so "not found" is a
//! domain outcome, decided by the caller.

/// Errors that can occur within the store framework itself.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store task has stopped and its request channel is closed.
    #[error("Store closed")]
    StoreClosed,
    /// The store dropped the response channel before answering.
    #[error("Store dropped response channel")]
    StoreDropped,
    /// A commit staged an insert whose id is already committed.
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),
}
