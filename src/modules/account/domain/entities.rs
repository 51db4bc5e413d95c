/// Domain entities for accounts
///
/// An account owns exactly one avatar image, derived from its email at
/// creation time. The password is stored only as an argon2 hash.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Avatar image owned by one account. Created once, never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub id: i64,
    /// Base64-encoded image bytes
    pub data: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Argon2 hash, never the plaintext
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub avatar: Image,
    pub created_at: DateTime<Utc>,
}

/// Input for account creation. The password is plaintext here; it is hashed
/// before anything is persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Partial update applied to an existing account. Only name and email are
/// mutable after creation; password and avatar are deliberately absent.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountUpdate {
    pub name: String,
    pub email: String,
}

/// Single-entry save input: id present selects the update path, id absent
/// selects the create path. Kept for compatibility with callers that do not
/// distinguish create from update.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveAccount {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_account_omits_the_password_hash() {
        let account = Account {
            id: 1,
            name: "Carol".to_string(),
            email: "carol@example.com".to_string(),
            password_hash: "$argon2id$v=19$secret".to_string(),
            avatar: Image {
                id: 1,
                data: "aWRlbnRpY29u".to_string(),
            },
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&account).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "carol@example.com");
    }
}
