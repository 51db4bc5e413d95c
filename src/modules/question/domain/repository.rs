/// Repository trait for question persistence
use crate::modules::question::domain::entities::{Answer, NewQuestion, Question, QuestionUpdate};
use crate::shared::application::{PageRequest, PaginatedResult};
use crate::shared::errors::AppResult;
use async_trait::async_trait;

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn find_page(&self, page: &PageRequest) -> AppResult<PaginatedResult<Question>>;

    async fn find_all(&self) -> AppResult<Vec<Question>>;

    /// Loads the question together with its answers and tags
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Question>>;

    async fn insert(&self, question: NewQuestion) -> AppResult<Question>;

    /// Returns NotFound if the id does not exist
    async fn update(&self, id: i64, update: QuestionUpdate) -> AppResult<Question>;

    /// Delete the question, its answers, and its tag links in one
    /// transaction. Tags and author are untouched. Returns false if the id
    /// did not exist.
    async fn delete(&self, id: i64) -> AppResult<bool>;

    /// Append an owned answer. Returns NotFound if the question is absent.
    async fn add_answer(&self, question_id: i64, body: &str) -> AppResult<Answer>;

    /// Replace the question's tag link set. Returns NotFound if the
    /// question is absent.
    async fn set_tags(&self, question_id: i64, tag_ids: &[i64]) -> AppResult<()>;
}
