//! # Mock Store & Testing Guide
//!
//! The [`MockClient`] type produces the same [`StoreClient`] surface as a
//! real store but answers from a queue of scripted expectations, entirely
//! in-memory. It lets you write fast, deterministic unit tests for repository
//! and controller logic without running a store task.
//!
//! ## When to use Mocks vs a Real Store
//!
//! | Feature | MockClient | Real Store |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **Determinism** | 100% Deterministic | Subject to scheduler |
//! | **State** | No real state (expectations) | Real committed/staged state |
//! | **Use Case** | Unit testing logic *around* the store | Testing the store itself or full system |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Example
//!
//! ```rust
//! use store_framework::mock::MockClient;
//! use store_framework::StoreRecord;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Note {
//!     id: u32,
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
//!     // 1. Setup mock
//!     let mut mock = MockClient::<Note>::new();
//!     mock.expect_find(1).return_ok(Some(Note { id: 1 }));
//!
//!     // 2. Use the client exactly like a real one
//!     let store = mock.client();
//!     let note = store.find(1).await.unwrap();
//!     assert_eq!(note, Some(Note { id: 1 }));
//!
//!     // 3. Ensure all expectations were consumed
//!     mock.verify();
//! }
//! ```
//!
//! ## Testing Failure Scenarios
//!
//! A big advantage of [`MockClient`] is simulating errors that are hard to
//! reproduce with a real store (e.g., the store task going away mid-request):
//!
//! ```rust,ignore
//! mock.expect_find(1).return_err(StoreError::StoreClosed);
//! let result = store.find(1).await;
//! assert!(matches!(result, Err(StoreError::StoreClosed)));
//! ```
//!
//! ## Mocking Utilities
//!
//! Use [`create_mock_client`] to get a client and a raw request receiver, or
//! use the fluent [`MockClient`] API.

use crate::client::StoreClient;
use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::record::StoreRecord;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock client.
///
/// This enum is used internally by `MockClient` to track what requests
/// are expected and what responses should be returned.
enum Expectation<T: StoreRecord> {
    Add {
        response: Result<(), StoreError>,
    },
    Find {
        id: T::Id,
        response: Result<Option<T>, StoreError>,
    },
    Remove {
        id: T::Id,
        response: Result<(), StoreError>,
    },
    List {
        response: Result<Vec<T>, StoreError>,
    },
    Commit {
        response: Result<usize, StoreError>,
    },
}

/// A mock client with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<User>::new();
/// mock.expect_add().return_ok(());
/// mock.expect_commit().return_ok(1);
///
/// let store = mock.client();
/// // Use store in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: StoreRecord> {
    client: StoreClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: StoreRecord> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoreRecord> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut exps = expectations_clone.lock().unwrap();
                let expectation = exps.pop_front();
                drop(exps); // Release lock before answering

                match (request, expectation) {
                    (
                        StoreRequest::Add {
                            record: _,
                            respond_to,
                        },
                        Some(Expectation::Add { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Find { id: _, respond_to },
                        Some(Expectation::Find { id: _, response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Remove { id: _, respond_to },
                        Some(Expectation::Remove { id: _, response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::List { respond_to },
                        Some(Expectation::List { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Commit { respond_to },
                        Some(Expectation::Commit { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    /// Expects an `add` operation.
    pub fn expect_add(&mut self) -> AddExpectationBuilder<T> {
        AddExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `find` operation.
    pub fn expect_find(&mut self, id: T::Id) -> FindExpectationBuilder<T> {
        FindExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `remove` operation.
    pub fn expect_remove(&mut self, id: T::Id) -> RemoveExpectationBuilder<T> {
        RemoveExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ListExpectationBuilder<T> {
        ListExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `commit` operation.
    pub fn expect_commit(&mut self) -> CommitExpectationBuilder<T> {
        CommitExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `add` expectations.
pub struct AddExpectationBuilder<T: StoreRecord> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreRecord> AddExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Add { response: Ok(()) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Add {
            response: Err(error),
        });
    }
}

/// Builder for `find` expectations.
pub struct FindExpectationBuilder<T: StoreRecord> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreRecord> FindExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: Option<T>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Find {
            id: self.id,
            response: Ok(value),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Find {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `remove` expectations.
pub struct RemoveExpectationBuilder<T: StoreRecord> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreRecord> RemoveExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Remove {
            id: self.id,
            response: Ok(()),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Remove {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `list` expectations.
pub struct ListExpectationBuilder<T: StoreRecord> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreRecord> ListExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, records: Vec<T>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::List {
            response: Ok(records),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::List {
            response: Err(error),
        });
    }
}

/// Builder for `commit` expectations.
pub struct CommitExpectationBuilder<T: StoreRecord> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreRecord> CommitExpectationBuilder<T> {
    /// Sets the expectation to return a successful result carrying the number
    /// of applied operations.
    pub fn return_ok(self, applied: usize) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Commit {
            response: Ok(applied),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Commit {
            response: Err(error),
        });
    }
}

// =============================================================================
// CHANNEL-LEVEL HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting raw requests.
///
/// # Testing Strategy
/// In unit tests we don't want to spin up a full `StoreActor` if we are just
/// testing the logic *around* the client.
///
/// Instead, we create a "mock client" whose messages arrive on a channel we
/// control (`receiver`). We can then inspect each request and answer it
/// directly, simulating the store's behavior (success, failure, delays)
/// deterministically.
///
/// **Note**: Consider using [`MockClient`] for a more fluent API.
pub fn create_mock_client<T: StoreRecord>(
    buffer_size: usize,
) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Helper to verify that the next message is an Add request
pub async fn expect_add<T: StoreRecord>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T, tokio::sync::oneshot::Sender<Result<(), StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Add { record, respond_to }) => Some((record, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Find request
pub async fn expect_find<T: StoreRecord>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    T::Id,
    tokio::sync::oneshot::Sender<Result<Option<T>, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Find { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Commit request
pub async fn expect_commit<T: StoreRecord>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<tokio::sync::oneshot::Sender<Result<usize, StoreError>>> {
    match receiver.recv().await {
        Some(StoreRequest::Commit { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct User {
        id: u32,
        name: String,
        email: String,
    }

    impl StoreRecord for User {
        type Id = u32;

        fn id(&self) -> u32 {
            self.id
        }
    }

    impl User {
        fn new(id: u32, email: &str) -> Self {
            Self {
                id,
                name: "Test User".to_string(),
                email: email.to_string(),
            }
        }
    }

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<User>(10);

        // Test Add
        let add_task = tokio::spawn(async move {
            let user = User::new(1, "test@example.com");
            client.add(user).await
        });

        let (record, responder) = expect_add(&mut receiver)
            .await
            .expect("Expected Add request");
        assert_eq!(record.id, 1);
        assert_eq!(record.email, "test@example.com");
        responder.send(Ok(())).unwrap();

        let result = add_task.await.unwrap();
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        // Create mock with fluent expectation API
        let mut mock = MockClient::<User>::new();

        // Set up expectations
        mock.expect_add().return_ok();
        mock.expect_commit().return_ok(1);
        mock.expect_find(1)
            .return_ok(Some(User::new(1, "test@example.com")));

        let store = mock.client();

        // Execute operations
        store.add(User::new(1, "test@example.com")).await.unwrap();
        let applied = store.commit().await.unwrap();
        assert_eq!(applied, 1);

        let fetched = store.find(1).await.unwrap();
        assert!(fetched.is_some());
        assert_eq!(fetched.unwrap().email, "test@example.com");

        // Verify all expectations were met
        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_client_error_injection() {
        let mut mock = MockClient::<User>::new();
        let store = mock.client();

        // Simulate a downstream failure
        mock.expect_find(1).return_err(StoreError::StoreClosed);

        let result = store.find(1).await;
        assert!(matches!(result, Err(StoreError::StoreClosed)));
        mock.verify();
    }
}
