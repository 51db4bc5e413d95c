/// Gravatar identicon client
///
/// Derives a deterministic avatar for an email address: the lowercase-hex
/// MD5 digest of the email selects an identicon on gravatar.com. MD5 is a
/// weak digest, kept here only because Gravatar's URL contract requires it;
/// it is never used for anything security-relevant.
use crate::modules::account::application::ports::AvatarFetcher;
use crate::shared::errors::{AppError, AppResult};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use md5::{Digest, Md5};
use reqwest::Client;

const GRAVATAR_BASE_URL: &str = "https://www.gravatar.com/avatar";
const AVATAR_SIZE: u32 = 40;

/// Lowercase hex MD5 digest of the raw email bytes.
///
/// Pure and reproducible: the same email always yields the same digest, so
/// the same account always gets the same identicon.
pub fn avatar_digest(email: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(email.as_bytes());
    hex::encode(hasher.finalize())
}

/// Full identicon URL for an email at the fixed avatar size.
pub fn avatar_url(email: &str) -> String {
    format!(
        "{}/{}?d=identicon&s={}",
        GRAVATAR_BASE_URL,
        avatar_digest(email),
        AVATAR_SIZE
    )
}

pub struct GravatarClient {
    client: Client,
}

impl GravatarClient {
    pub fn new() -> AppResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .user_agent("qforum/0.1")
            .build()
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl AvatarFetcher for GravatarClient {
    async fn fetch(&self, email: &str) -> AppResult<String> {
        let url = avatar_url(email);

        let response = self.client.get(&url).send().await.map_err(|e| {
            AppError::ExternalServiceError(format!("Avatar download failed: {}", e))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "Avatar download failed: HTTP {}",
                status
            )));
        }

        let bytes = response.bytes().await.map_err(|e| {
            AppError::ExternalServiceError(format!("Failed to read avatar body: {}", e))
        })?;

        Ok(BASE64.encode(&bytes))
    }
}
