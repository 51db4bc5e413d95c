use crate::modules::question::domain::entities::{
    parse_tag_input, Answer, NewQuestion, Question, QuestionUpdate,
};
use crate::modules::question::domain::repository::QuestionRepository;
use crate::modules::tag::domain::repository::TagRepository;
use crate::shared::application::{DeleteOutcome, PageRequest, PaginatedResult};
use crate::shared::errors::AppResult;
use crate::{log_debug, log_info};
use std::sync::Arc;

/// Question workflow: pass-through CRUD plus answer and tag attachment.
pub struct QuestionService {
    question_repo: Arc<dyn QuestionRepository>,
    tag_repo: Arc<dyn TagRepository>,
}

impl QuestionService {
    pub fn new(
        question_repo: Arc<dyn QuestionRepository>,
        tag_repo: Arc<dyn TagRepository>,
    ) -> Self {
        Self {
            question_repo,
            tag_repo,
        }
    }

    pub async fn find_page(&self, page: &PageRequest) -> AppResult<PaginatedResult<Question>> {
        self.question_repo.find_page(page).await
    }

    pub async fn find_all(&self) -> AppResult<Vec<Question>> {
        self.question_repo.find_all().await
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Question>> {
        self.question_repo.find_by_id(id).await
    }

    pub async fn create(&self, question: NewQuestion) -> AppResult<Question> {
        self.question_repo.insert(question).await
    }

    /// Fails with NotFound if the id does not exist
    pub async fn update(&self, id: i64, update: QuestionUpdate) -> AppResult<Question> {
        self.question_repo.update(id, update).await
    }

    /// Delete by id, cascading to owned answers and tag links. A missing id
    /// is logged and reported as a successful no-op, never an error.
    pub async fn delete(&self, id: i64) -> AppResult<DeleteOutcome> {
        if self.question_repo.delete(id).await? {
            Ok(DeleteOutcome::Deleted)
        } else {
            log_info!("Delete of non-existing question with id={}", id);
            Ok(DeleteOutcome::NotFound)
        }
    }

    pub async fn add_answer(&self, question_id: i64, body: &str) -> AppResult<Answer> {
        self.question_repo.add_answer(question_id, body).await
    }

    /// Attach tags from free-text input: whitespace-delimited names,
    /// deduplicated, each resolved against existing tags by name and created
    /// when missing. Replaces the question's current tag set.
    pub async fn set_tags(&self, question_id: i64, input: &str) -> AppResult<Question> {
        let names = parse_tag_input(input);
        log_debug!(
            "Attaching {} tag(s) to question {}",
            names.len(),
            question_id
        );

        let mut tag_ids = Vec::with_capacity(names.len());
        for name in &names {
            let tag = self.tag_repo.find_or_create(name).await?;
            if let Some(id) = tag.id {
                tag_ids.push(id);
            }
        }

        self.question_repo.set_tags(question_id, &tag_ids).await?;

        self.question_repo
            .find_by_id(question_id)
            .await?
            .ok_or_else(|| {
                crate::shared::errors::AppError::NotFound(format!(
                    "Question with id {} not found",
                    question_id
                ))
            })
    }
}
