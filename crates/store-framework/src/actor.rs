//! # Generic Store Actor
//!
//! This module defines the `StoreActor`, the server half of the persistence
//! context. It owns the committed record map and the staging buffer, and
//! processes all requests sequentially off a channel, ensuring exclusive
//! access to the store without locks.

use crate::client::StoreClient;
use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::record::StoreRecord;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// A write staged against the store, applied at the next commit.
#[derive(Debug)]
enum Staged<T: StoreRecord> {
    Add(T),
    Remove(T::Id),
}

/// The generic actor that owns a collection of committed records plus a
/// buffer of staged writes.
///
/// # Architecture Note
/// This struct is the "server" half of the persistence context. It owns the
/// state (`committed`, `staged`) and the receiver end of the channel.
///
/// **Concurrency model**: each store processes its messages *sequentially* in
/// a loop, so the record map needs no `Mutex` or `RwLock`. Concurrent callers
/// interleave at message granularity, and when two of them race on the same
/// id, whichever commit lands last wins.
///
/// # Operations
///
/// * **Add**: pushes the record onto the staging buffer. No duplicate check
///   happens here; that is deferred to commit.
/// * **Find**: looks up the committed map by id and returns a clone, or
///   `None`. Staged writes are invisible to reads.
/// * **Remove**: stages a deletion by id.
/// * **List**: clones all committed records in insertion order. Callers must
///   not rely on that order being stable across commits.
/// * **Commit**: drains the staging buffer and applies each operation in
///   order. The first staged insert whose id is already committed aborts the
///   commit with [`StoreError::DuplicateKey`]; operations applied before the
///   abort stay applied, and the remainder of the buffer is discarded. The
///   response carries the number of operations that took effect.
/// * **Reset**: clears committed and staged state. Test collaborators only.
pub struct StoreActor<T: StoreRecord> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    committed: HashMap<T::Id, T>,
    /// Insertion order of committed ids, kept in lockstep with `committed`.
    order: Vec<T::Id>,
    staged: Vec<Staged<T>>,
}

impl<T: StoreRecord> StoreActor<T> {
    /// Creates a new `StoreActor` and its associated `StoreClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is
    ///   full, calls on the client will wait until there is space.
    ///
    /// # Returns
    ///
    /// A tuple containing:
    /// 1. The `StoreActor` instance (the server), which must be run via `.run()`.
    /// 2. The `StoreClient` instance, which can be cloned and shared to send requests.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            committed: HashMap::new(),
            order: Vec::new(),
            staged: Vec::new(),
        };
        let client = StoreClient::new(sender);
        (actor, client)
    }

    /// Runs the store's event loop, processing requests until every client
    /// has been dropped and the channel closes.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "User" instead of "user_service::model::user::User")
        let record_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(record_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Add { record, respond_to } => {
                    debug!(record_type, id = %record.id(), "Add staged");
                    self.staged.push(Staged::Add(record));
                    let _ = respond_to.send(Ok(()));
                }
                StoreRequest::Find { id, respond_to } => {
                    let item = self.committed.get(&id).cloned();
                    let found = item.is_some();
                    debug!(record_type, %id, found, "Find");
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::Remove { id, respond_to } => {
                    debug!(record_type, %id, "Remove staged");
                    self.staged.push(Staged::Remove(id));
                    let _ = respond_to.send(Ok(()));
                }
                StoreRequest::List { respond_to } => {
                    let items: Vec<T> = self
                        .order
                        .iter()
                        .filter_map(|id| self.committed.get(id).cloned())
                        .collect();
                    debug!(record_type, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                StoreRequest::Commit { respond_to } => {
                    let result = self.apply_staged(record_type);
                    let _ = respond_to.send(result);
                }
                StoreRequest::Reset { respond_to } => {
                    self.committed.clear();
                    self.order.clear();
                    self.staged.clear();
                    info!(record_type, "Reset");
                    let _ = respond_to.send(Ok(()));
                }
            }
        }

        info!(record_type, size = self.committed.len(), "Shutdown");
    }

    /// Drains the staging buffer and applies each operation in order.
    ///
    /// Commit is best-effort, not transactional: on a duplicate key the
    /// operations applied so far stay applied, and the rest of the buffer is
    /// dropped. The staging buffer is empty after every commit attempt.
    fn apply_staged(&mut self, record_type: &str) -> Result<usize, StoreError> {
        let staged = std::mem::take(&mut self.staged);
        let total = staged.len();
        let mut applied = 0;

        for op in staged {
            match op {
                Staged::Add(record) => {
                    let id = record.id();
                    if self.committed.contains_key(&id) {
                        warn!(record_type, %id, applied, "Commit aborted: duplicate key");
                        return Err(StoreError::DuplicateKey(id.to_string()));
                    }
                    self.committed.insert(id.clone(), record);
                    self.order.push(id);
                    applied += 1;
                }
                Staged::Remove(id) => {
                    if self.committed.remove(&id).is_some() {
                        self.order.retain(|o| o != &id);
                        applied += 1;
                    } else {
                        debug!(record_type, %id, "Remove of absent id ignored");
                    }
                }
            }
        }

        info!(
            record_type,
            applied,
            staged = total,
            size = self.committed.len(),
            "Committed"
        );
        Ok(applied)
    }
}
