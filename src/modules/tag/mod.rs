/// Tag module
///
/// Tags are identified by name: the unique constraint on tag.name is
/// mirrored in-memory by name-based equality and hashing on the entity.
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy access
pub use application::TagService;
pub use domain::{PopularTag, Tag, TagRepository};
pub use infrastructure::TagRepositoryImpl;
