use store_framework::{StoreActor, StoreClient, StoreError, StoreRecord};

// --- Test Record ---

#[derive(Clone, Debug, PartialEq)]
struct Account {
    id: u32,
    owner: String,
}

impl Account {
    fn new(id: u32, owner: &str) -> Self {
        Self {
            id,
            owner: owner.to_string(),
        }
    }
}

impl StoreRecord for Account {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

fn spawn_store() -> StoreClient<Account> {
    let (actor, client) = StoreActor::new(10);
    tokio::spawn(actor.run());
    client
}

// --- Tests ---

#[tokio::test]
async fn test_staged_write_invisible_until_commit() {
    let store = spawn_store();

    store.add(Account::new(1, "Alice")).await.unwrap();

    // Reads answer from committed state only.
    assert_eq!(store.find(1).await.unwrap(), None);
    assert!(store.list().await.unwrap().is_empty());

    let applied = store.commit().await.unwrap();
    assert_eq!(applied, 1);

    let account = store.find(1).await.unwrap().expect("Account not committed");
    assert_eq!(account.owner, "Alice");
}

#[tokio::test]
async fn test_commit_reports_applied_count() {
    let store = spawn_store();

    store.add(Account::new(1, "Alice")).await.unwrap();
    store.add(Account::new(2, "Bob")).await.unwrap();
    assert_eq!(store.commit().await.unwrap(), 2);

    store.remove(1).await.unwrap();
    assert_eq!(store.commit().await.unwrap(), 1);

    // Nothing staged: a commit is a no-op.
    assert_eq!(store.commit().await.unwrap(), 0);
}

#[tokio::test]
async fn test_duplicate_key_aborts_commit_and_keeps_original() {
    let store = spawn_store();

    store.add(Account::new(1, "Alice")).await.unwrap();
    store.commit().await.unwrap();

    store.add(Account::new(1, "Impostor")).await.unwrap();
    let result = store.commit().await;
    assert!(matches!(result, Err(StoreError::DuplicateKey(id)) if id == "1"));

    // The original record's values are retained.
    let account = store.find(1).await.unwrap().unwrap();
    assert_eq!(account.owner, "Alice");
}

#[tokio::test]
async fn test_commit_is_best_effort_on_duplicate() {
    let store = spawn_store();

    store.add(Account::new(1, "Alice")).await.unwrap();
    store.commit().await.unwrap();

    // Stage: a valid insert, a duplicate, then another valid insert.
    store.add(Account::new(2, "Bob")).await.unwrap();
    store.add(Account::new(1, "Impostor")).await.unwrap();
    store.add(Account::new(3, "Carol")).await.unwrap();

    assert!(store.commit().await.is_err());

    // Operations applied before the abort stay applied; the rest of the
    // staging buffer was discarded, not replayed.
    assert!(store.find(2).await.unwrap().is_some());
    assert_eq!(store.find(3).await.unwrap(), None);

    // The buffer is empty after the failed commit.
    assert_eq!(store.commit().await.unwrap(), 0);
    assert_eq!(store.find(3).await.unwrap(), None);
}

#[tokio::test]
async fn test_remove_of_absent_id_is_a_no_op() {
    let store = spawn_store();

    store.remove(99).await.unwrap();
    assert_eq!(store.commit().await.unwrap(), 0);
}

#[tokio::test]
async fn test_remove_then_add_replaces_in_one_commit() {
    let store = spawn_store();

    store.add(Account::new(1, "Alice")).await.unwrap();
    store.commit().await.unwrap();

    // A full replace is staged as remove + add of the same id; applying the
    // operations in order means no duplicate key is seen.
    store.remove(1).await.unwrap();
    store.add(Account::new(1, "Alicia")).await.unwrap();
    assert_eq!(store.commit().await.unwrap(), 2);

    let account = store.find(1).await.unwrap().unwrap();
    assert_eq!(account.owner, "Alicia");
    assert_eq!(store.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_returns_insertion_order() {
    let store = spawn_store();

    for (id, owner) in [(3, "Carol"), (1, "Alice"), (2, "Bob")] {
        store.add(Account::new(id, owner)).await.unwrap();
    }
    store.commit().await.unwrap();

    let ids: Vec<u32> = store.list().await.unwrap().iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);

    // Removal keeps the relative order of the survivors.
    store.remove(1).await.unwrap();
    store.commit().await.unwrap();
    let ids: Vec<u32> = store.list().await.unwrap().iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![3, 2]);
}

#[tokio::test]
async fn test_reset_clears_committed_and_staged_state() {
    let store = spawn_store();

    store.add(Account::new(1, "Alice")).await.unwrap();
    store.commit().await.unwrap();
    store.add(Account::new(2, "Bob")).await.unwrap();

    store.reset().await.unwrap();

    assert_eq!(store.find(1).await.unwrap(), None);
    assert!(store.list().await.unwrap().is_empty());
    // The staged insert of id 2 was wiped along with committed state.
    assert_eq!(store.commit().await.unwrap(), 0);
    assert_eq!(store.find(2).await.unwrap(), None);
}

#[tokio::test]
async fn test_store_shuts_down_when_clients_drop() {
    let (actor, client) = StoreActor::<Account>::new(10);
    let handle = tokio::spawn(actor.run());

    client.add(Account::new(1, "Alice")).await.unwrap();
    client.commit().await.unwrap();

    // Dropping every client closes the channel; the store drains and exits.
    let clone = client.clone();
    drop(client);
    drop(clone);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_client_reports_store_closed_when_task_dies() {
    let (actor, client) = StoreActor::<Account>::new(10);
    let handle = tokio::spawn(actor.run());

    // Kill the store task out from under the client.
    handle.abort();
    let _ = handle.await;

    let result = client.find(1).await;
    assert!(matches!(result, Err(StoreError::StoreClosed)));
}
