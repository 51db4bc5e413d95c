pub mod application;
pub mod errors;
pub mod infrastructure;
pub mod utils;

// Re-exports for convenience
pub use application::{DeleteOutcome, PageRequest, PaginatedResult};
pub use errors::{AppError, AppResult};
pub use infrastructure::Database;
