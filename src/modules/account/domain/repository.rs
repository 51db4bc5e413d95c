/// Repository trait for account persistence
use crate::modules::account::domain::entities::Account;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Fully derived account record ready for insertion: the password is already
/// hashed and the avatar already fetched and base64-encoded. The repository
/// persists account and image atomically.
#[derive(Debug, Clone)]
pub struct AccountRecord {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub avatar_data: String,
}

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Account>>;

    /// Exact-match lookup by email
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>>;

    /// Exact-match lookup by name; names are not unique
    async fn find_by_name(&self, name: &str) -> AppResult<Vec<Account>>;

    async fn find_all(&self) -> AppResult<Vec<Account>>;

    /// Insert account and its avatar image in one transaction
    async fn insert(&self, record: AccountRecord) -> AppResult<Account>;

    /// Copy only name and email onto the stored row. Returns NotFound if the
    /// id does not exist.
    async fn update_profile(&self, id: i64, name: &str, email: &str) -> AppResult<Account>;

    /// Delete account and its owned image. Returns false if the id did not
    /// exist.
    async fn delete(&self, id: i64) -> AppResult<bool>;
}
