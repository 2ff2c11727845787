//! # Generic Messages
//!
//! This module defines the generic message types used for communication
//! between the [`StoreClient`](crate::client::StoreClient) and the
//! [`StoreActor`](crate::actor::StoreActor).
//!
//! # The Persistence-Context Pattern
//! The variants map onto the capability set of a persistence context: stage
//! an insert (`Add`), read committed state (`Find`, `List`), stage a deletion
//! (`Remove`), make staged work durable (`Commit`), and wipe everything for a
//! fresh test fixture (`Reset`).
//!
//! Reads answer from committed state only; `Add` and `Remove` take effect at
//! the next `Commit`. `Reset` exists for test collaborators that need a clean
//! store between cases and must never appear on a production path.
//!
//! The enum is generic over `T: StoreRecord`, so a store of one record type
//! cannot be sent another type's ids or payloads.

use crate::error::StoreError;
use crate::record::StoreRecord;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Internal message type sent to the store to request operations.
#[derive(Debug)]
pub enum StoreRequest<T: StoreRecord> {
    /// Stage an insert. Duplicate ids are detected at commit time.
    Add {
        record: T,
        respond_to: Response<()>,
    },
    /// Read one committed record; absence is `None`, never an error.
    Find {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    /// Stage a deletion. Removing an absent id is a no-op at commit time.
    Remove {
        id: T::Id,
        respond_to: Response<()>,
    },
    /// Enumerate all committed records in insertion order.
    List { respond_to: Response<Vec<T>> },
    /// Apply staged operations; responds with the number applied.
    Commit { respond_to: Response<usize> },
    /// Clear committed and staged state. Test collaborators only.
    Reset { respond_to: Response<()> },
}
