pub mod password;
pub mod ports;
pub mod service;

pub use password::PasswordEncoder;
pub use ports::AvatarFetcher;
pub use service::AccountService;
