use crate::modules::account::application::password::PasswordEncoder;
use crate::modules::account::application::ports::AvatarFetcher;
use crate::modules::account::domain::entities::{Account, AccountUpdate, NewAccount, SaveAccount};
use crate::modules::account::domain::repository::{AccountRecord, AccountRepository};
use crate::shared::application::DeleteOutcome;
use crate::shared::errors::{AppError, AppResult};
use crate::{log_debug, log_info};
use std::sync::Arc;

/// Account workflow: creation with its avatar side effect, partial updates,
/// and tolerant deletes.
pub struct AccountService {
    repo: Arc<dyn AccountRepository>,
    avatar_fetcher: Arc<dyn AvatarFetcher>,
    password_encoder: PasswordEncoder,
}

impl AccountService {
    pub fn new(repo: Arc<dyn AccountRepository>, avatar_fetcher: Arc<dyn AvatarFetcher>) -> Self {
        Self {
            repo,
            avatar_fetcher,
            password_encoder: PasswordEncoder::new(),
        }
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Account>> {
        self.repo.find_by_id(id).await
    }

    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        self.repo.find_by_email(email).await
    }

    pub async fn find_by_name(&self, name: &str) -> AppResult<Vec<Account>> {
        self.repo.find_by_name(name).await
    }

    pub async fn find_all(&self) -> AppResult<Vec<Account>> {
        self.repo.find_all().await
    }

    /// Create a new account.
    ///
    /// Resolves the identicon avatar and hashes the password before anything
    /// touches the database; the insert itself is transactional. Either the
    /// account comes back fully populated (id, avatar, hash) or nothing was
    /// persisted.
    pub async fn create(&self, input: NewAccount) -> AppResult<Account> {
        log_debug!("Creating account for {}", input.email);

        // No retry: a fetch failure is fatal for this create
        let avatar_data = self.avatar_fetcher.fetch(&input.email).await?;
        let password_hash = self.password_encoder.hash(&input.password)?;

        let account = self
            .repo
            .insert(AccountRecord {
                name: input.name,
                email: input.email,
                password_hash,
                avatar_data,
            })
            .await?;

        log_info!("Account {} created", account.id);
        Ok(account)
    }

    /// Update an existing account.
    ///
    /// Only name and email are copied onto the stored row; the password hash
    /// and avatar are immutable after creation. Fails with NotFound if the
    /// id does not exist.
    pub async fn update(&self, id: i64, update: AccountUpdate) -> AppResult<Account> {
        self.repo
            .update_profile(id, &update.name, &update.email)
            .await
    }

    /// Single-entry save kept for callers that do not distinguish create
    /// from update: id present selects the update path (password input is
    /// ignored), id absent selects the create path.
    pub async fn save(&self, input: SaveAccount) -> AppResult<Account> {
        match input.id {
            Some(id) => {
                self.update(
                    id,
                    AccountUpdate {
                        name: input.name,
                        email: input.email,
                    },
                )
                .await
            }
            None => {
                let password = input.password.ok_or_else(|| {
                    AppError::InvalidInput("Password is required to create an account".to_string())
                })?;
                self.create(NewAccount {
                    name: input.name,
                    email: input.email,
                    password,
                })
                .await
            }
        }
    }

    /// Delete by id. A missing id is logged and reported as a successful
    /// no-op, never an error.
    pub async fn delete(&self, id: i64) -> AppResult<DeleteOutcome> {
        if self.repo.delete(id).await? {
            Ok(DeleteOutcome::Deleted)
        } else {
            log_info!("Delete of non-existing account with id={}", id);
            Ok(DeleteOutcome::NotFound)
        }
    }
}
