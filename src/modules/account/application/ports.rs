/// Ports consumed by the account workflow
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Resolves an avatar for an email address.
///
/// Implementations return the image payload base64-encoded, ready to store.
/// The fetch is expected to be bounded (timeout) and is never retried; a
/// failure aborts account creation.
#[async_trait]
pub trait AvatarFetcher: Send + Sync {
    async fn fetch(&self, email: &str) -> AppResult<String>;
}
