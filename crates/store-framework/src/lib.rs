//! # Store Framework
//!
//! This crate provides the building blocks for a message-driven **persistence
//! context**: a durable mapping from id to record, with staged writes and an
//! explicit commit, owned by a single task and reached through a cloneable
//! async client.
//!
//! ## Why a store actor?
//!
//! The persistence context is process-wide shared mutable state. Instead of
//! wrapping it in locks, the framework gives the store to one task (the
//! [`StoreActor`]) that processes requests sequentially off a channel. Callers
//! hold a [`StoreClient`], which is just the sender half of that channel:
//!
//! - **Exclusive ownership**: only the actor task touches the record map, so
//!   no `Mutex` or `RwLock` is needed.
//! - **Serialized mutation**: concurrent callers interleave at message
//!   granularity; the last commit wins.
//! - **Interchangeable backends**: anything that services the channel looks
//!   like a store to the caller, which is how the [`mock`] module swaps in a
//!   scripted fake for tests.
//!
//! ## Staged writes
//!
//! Writes do not take effect immediately. `add` and `remove` stage an
//! operation; reads (`find`, `list`) observe committed state only. A `commit`
//! applies the staged operations in order as a single best-effort unit.
//! Duplicate-key detection happens at commit time: the first staged insert
//! whose id is already committed aborts the commit with
//! [`StoreError::DuplicateKey`]. There is no rollback of operations already
//! applied within the failed commit.
//!
//! ## Quick start
//!
//! ```rust
//! use store_framework::{StoreActor, StoreRecord};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Note {
//!     id: u32,
//!     body: String,
//! }
//!
//! impl StoreRecord for Note {
//!     type Id = u32;
//!     fn id(&self) -> u32 {
//!         self.id
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, store) = StoreActor::<Note>::new(10);
//!     tokio::spawn(actor.run());
//!
//!     let note = Note { id: 1, body: "hello".into() };
//!     store.add(note).await.unwrap();
//!
//!     // Staged, not yet committed: reads do not see it.
//!     assert_eq!(store.find(1).await.unwrap(), None);
//!
//!     let applied = store.commit().await.unwrap();
//!     assert_eq!(applied, 1);
//!     assert_eq!(store.find(1).await.unwrap().unwrap().body, "hello");
//! }
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module provides a [`MockClient`](mock::MockClient) that
//! implements the same `StoreClient<T>` surface from a queue of scripted
//! expectations, so repository and controller logic can be tested without
//! running a store task at all.

pub mod actor;
pub mod client;
pub mod error;
pub mod handle;
pub mod message;
pub mod mock;
pub mod record;
pub mod tracing;

// Re-export core types for convenience
pub use actor::StoreActor;
pub use client::StoreClient;
pub use error::StoreError;
pub use handle::StoreHandle;
pub use message::{Response, StoreRequest};
pub use record::StoreRecord;
