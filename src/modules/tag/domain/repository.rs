/// Repository trait for tag persistence
use crate::modules::tag::domain::entities::{PopularTag, Tag};
use crate::shared::application::{PageRequest, PaginatedResult};
use crate::shared::errors::AppResult;
use async_trait::async_trait;

#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn find_page(&self, page: &PageRequest) -> AppResult<PaginatedResult<Tag>>;

    async fn find_all(&self) -> AppResult<Vec<Tag>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Tag>>;

    /// Exact lookup by name; backed by the unique constraint
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Tag>>;

    /// Tags ordered by associated-question count, descending. Tags with no
    /// questions rank last.
    async fn find_most_popular(&self, page: &PageRequest) -> AppResult<PaginatedResult<PopularTag>>;

    /// Insert a new tag (id absent) or rename an existing one (id present)
    async fn save(&self, tag: Tag) -> AppResult<Tag>;

    /// Lookup by name, inserting the tag if it does not exist yet
    async fn find_or_create(&self, name: &str) -> AppResult<Tag>;

    /// Returns false if the id did not exist
    async fn delete(&self, id: i64) -> AppResult<bool>;
}
