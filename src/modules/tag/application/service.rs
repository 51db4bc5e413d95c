use crate::modules::tag::domain::entities::{PopularTag, Tag};
use crate::modules::tag::domain::repository::TagRepository;
use crate::shared::application::{DeleteOutcome, PageRequest, PaginatedResult};
use crate::shared::errors::AppResult;
use crate::log_info;
use std::sync::Arc;

/// Tag workflow: pass-through CRUD plus the popularity listing.
pub struct TagService {
    repo: Arc<dyn TagRepository>,
}

impl TagService {
    pub fn new(repo: Arc<dyn TagRepository>) -> Self {
        Self { repo }
    }

    pub async fn find_page(&self, page: &PageRequest) -> AppResult<PaginatedResult<Tag>> {
        self.repo.find_page(page).await
    }

    pub async fn find_all(&self) -> AppResult<Vec<Tag>> {
        self.repo.find_all().await
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Tag>> {
        self.repo.find_by_id(id).await
    }

    /// Exact lookup used to deduplicate tags before attaching them
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<Tag>> {
        self.repo.find_by_name(name).await
    }

    /// Tags ordered by associated-question count, descending
    pub async fn find_most_popular(
        &self,
        page: &PageRequest,
    ) -> AppResult<PaginatedResult<PopularTag>> {
        self.repo.find_most_popular(page).await
    }

    pub async fn save(&self, tag: Tag) -> AppResult<Tag> {
        self.repo.save(tag).await
    }

    /// Delete by id. A missing id is logged and reported as a successful
    /// no-op, never an error.
    pub async fn delete(&self, id: i64) -> AppResult<DeleteOutcome> {
        if self.repo.delete(id).await? {
            Ok(DeleteOutcome::Deleted)
        } else {
            log_info!("Delete of non-existing tag with id={}", id);
            Ok(DeleteOutcome::NotFound)
        }
    }
}
