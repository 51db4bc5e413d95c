pub mod gravatar;
pub mod models;
pub mod repository;

pub use gravatar::GravatarClient;
pub use repository::AccountRepositoryImpl;
