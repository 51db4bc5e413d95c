pub mod entities;
pub mod repository;

pub use entities::{Account, AccountUpdate, Image, NewAccount, SaveAccount};
pub use repository::{AccountRecord, AccountRepository};
