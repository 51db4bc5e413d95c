/// Account module
///
/// Accounts are created with a Gravatar-derived identicon avatar and an
/// argon2 password hash; after creation only name and email are mutable.
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy access
pub use application::{AccountService, AvatarFetcher, PasswordEncoder};
pub use domain::{Account, AccountRecord, AccountRepository, AccountUpdate, Image, NewAccount, SaveAccount};
pub use infrastructure::{AccountRepositoryImpl, GravatarClient};
