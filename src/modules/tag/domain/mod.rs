pub mod entities;
pub mod repository;

pub use entities::{PopularTag, Tag};
pub use repository::TagRepository;
