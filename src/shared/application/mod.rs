pub mod delete_outcome;
pub mod pagination;

pub use delete_outcome::DeleteOutcome;
pub use pagination::{PageRequest, PaginatedResult};
