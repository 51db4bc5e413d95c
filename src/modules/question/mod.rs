/// Question module
///
/// A question owns its answers (deleted together) and links to tags through
/// the question_tag join table; deleting a question never deletes shared
/// tags or the author account.
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy access
pub use application::QuestionService;
pub use domain::{Answer, NewQuestion, Question, QuestionRepository, QuestionUpdate};
pub use infrastructure::QuestionRepositoryImpl;
