use serde::{Deserialize, Serialize};

/// Caller-assigned user identifier.
pub type UserId = u32;

/// Represents a registered user in the system.
///
/// The external JSON shape is `{ "id": integer, "name": string, "email":
/// string }`; an absent `email` deserializes to the empty string.
///
/// # Store Framework
/// This struct implements the [`StoreRecord`](store_framework::StoreRecord)
/// trait, allowing it to be managed by a
/// [`StoreActor`](store_framework::StoreActor). The `id` is assigned by the
/// caller on create and never changes afterwards; a record is mutated only by
/// a full replace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl User {
    /// Creates a new User instance with a caller-assigned id.
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_fields_are_set_and_retrieved_correctly() {
        let user = User::new(1, "John Doe", "john.doe@example.com");

        assert_eq!(user.id, 1);
        assert_eq!(user.name, "John Doe");
        assert_eq!(user.email, "john.doe@example.com");
    }

    #[test]
    fn user_serializes_to_expected_json_shape() {
        let user = User::new(5, "Test User", "test.user@example.com");
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 5,
                "name": "Test User",
                "email": "test.user@example.com",
            })
        );
    }

    #[test]
    fn user_deserializes_with_absent_email_as_empty_string() {
        let user: User = serde_json::from_str(r#"{"id": 2, "name": "Jane Doe"}"#).unwrap();

        assert_eq!(user.id, 2);
        assert_eq!(user.name, "Jane Doe");
        assert_eq!(user.email, "");
    }

    #[test]
    fn user_deserializes_regardless_of_field_order() {
        let user: User =
            serde_json::from_str(r#"{"email": "a@b.c", "id": 3, "name": "A"}"#).unwrap();

        assert_eq!(user, User::new(3, "A", "a@b.c"));
    }
}
