use store_framework::mock::MockClient;
use store_framework::StoreError;
use user_service::controllers::{ApiResponse, UsersController};
use user_service::model::User;
use user_service::repository::UserRepository;
use user_service::user_store::UserError;

// Controller tests against a scripted mock store: no store task runs, every
// interaction with the persistence context is an explicit expectation.

fn controller_for(mock: &MockClient<User>) -> UsersController {
    UsersController::new(UserRepository::new(mock.client()))
}

#[tokio::test]
async fn get_returns_ok_with_user() {
    let mut mock = MockClient::<User>::new();
    mock.expect_find(1)
        .return_ok(Some(User::new(1, "John Doe", "john.doe@example.com")));

    let controller = controller_for(&mock);
    let outcome = controller.get(1).await.unwrap();

    match outcome {
        ApiResponse::Ok(user) => {
            assert_eq!(user.id, 1);
            assert_eq!(user.name, "John Doe");
        }
        other => panic!("Expected Ok, got {:?}", other),
    }
    mock.verify();
}

#[tokio::test]
async fn get_returns_not_found_when_store_has_no_record() {
    let mut mock = MockClient::<User>::new();
    mock.expect_find(1).return_ok(None);

    let controller = controller_for(&mock);
    let outcome = controller.get(1).await.unwrap();

    assert_eq!(outcome, ApiResponse::NotFound);
    mock.verify();
}

#[tokio::test]
async fn create_stages_commits_and_returns_created() {
    let mut mock = MockClient::<User>::new();
    mock.expect_add().return_ok();
    mock.expect_commit().return_ok(1);

    let controller = controller_for(&mock);
    let user = User::new(3, "New User", "new.user@example.com");
    let outcome = controller.create(user.clone()).await.unwrap();

    assert_eq!(outcome, ApiResponse::Created(user));
    mock.verify();
}

#[tokio::test]
async fn create_with_empty_name_never_touches_the_store() {
    // No expectations: any store call would panic the mock task and fail the
    // pending request.
    let mock = MockClient::<User>::new();

    let controller = controller_for(&mock);
    let outcome = controller
        .create(User::new(3, "", "new.user@example.com"))
        .await
        .unwrap();

    assert!(matches!(outcome, ApiResponse::BadRequest(_)));
    mock.verify();
}

#[tokio::test]
async fn create_maps_duplicate_key_to_conflict() {
    let mut mock = MockClient::<User>::new();
    mock.expect_add().return_ok();
    mock.expect_commit()
        .return_err(StoreError::DuplicateKey("3".to_string()));

    let controller = controller_for(&mock);
    let outcome = controller
        .create(User::new(3, "New User", "new.user@example.com"))
        .await
        .unwrap();

    assert_eq!(outcome, ApiResponse::Conflict("3".to_string()));
    mock.verify();
}

#[tokio::test]
async fn replace_checks_existence_then_overwrites() {
    let mut mock = MockClient::<User>::new();
    mock.expect_find(1)
        .return_ok(Some(User::new(1, "John Doe", "john.doe@example.com")));
    mock.expect_remove(1).return_ok();
    mock.expect_add().return_ok();
    mock.expect_commit().return_ok(2);

    let controller = controller_for(&mock);
    let outcome = controller
        .replace(1, User::new(1, "Updated User", "updated.user@example.com"))
        .await
        .unwrap();

    assert_eq!(outcome, ApiResponse::NoContent);
    mock.verify();
}

#[tokio::test]
async fn replace_with_id_mismatch_never_touches_the_store() {
    let mock = MockClient::<User>::new();

    let controller = controller_for(&mock);
    let outcome = controller
        .replace(10, User::new(1, "Updated User", "updated.user@example.com"))
        .await
        .unwrap();

    assert!(matches!(outcome, ApiResponse::BadRequest(_)));
    mock.verify();
}

#[tokio::test]
async fn delete_checks_existence_then_removes() {
    let mut mock = MockClient::<User>::new();
    mock.expect_find(4)
        .return_ok(Some(User::new(4, "Short Lived", "")));
    mock.expect_remove(4).return_ok();
    mock.expect_commit().return_ok(1);

    let controller = controller_for(&mock);
    let outcome = controller.delete(4).await.unwrap();

    assert_eq!(outcome, ApiResponse::NoContent);
    mock.verify();
}

#[tokio::test]
async fn store_failures_propagate_as_errors() {
    let mut mock = MockClient::<User>::new();
    mock.expect_find(1).return_err(StoreError::StoreClosed);

    let controller = controller_for(&mock);
    let result = controller.get(1).await;

    assert!(matches!(result, Err(UserError::StoreCommunication(_))));
    mock.verify();
}
