/// Diesel-based implementation of QuestionRepository
///
/// Answers and tag links are batch-loaded with diesel associations; deletes
/// run as one transaction so answers and links never outlive their question.
use crate::modules::question::domain::entities::{Answer, NewQuestion, Question, QuestionUpdate};
use crate::modules::question::domain::repository::QuestionRepository;
use crate::modules::question::infrastructure::models::{
    AnswerModel, NewAnswerRow, NewQuestionRow, QuestionModel, QuestionTagModel,
};
use crate::modules::tag::domain::entities::Tag;
use crate::modules::tag::infrastructure::models::TagModel;
use crate::schema::{answer, question, question_tag, tag};
use crate::shared::application::{PageRequest, PaginatedResult};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::database::Database;
use async_trait::async_trait;
use diesel::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::task;

pub struct QuestionRepositoryImpl {
    db: Arc<Database>,
}

impl QuestionRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Batch-load answers and tags for a set of question rows.
    fn load_with_relations(
        conn: &mut PgConnection,
        question_models: Vec<QuestionModel>,
    ) -> AppResult<Vec<Question>> {
        if question_models.is_empty() {
            return Ok(Vec::new());
        }

        let answers: Vec<AnswerModel> = AnswerModel::belonging_to(&question_models)
            .order(answer::created_at.asc())
            .load::<AnswerModel>(conn)?;
        let grouped_answers = answers.grouped_by(&question_models);

        let tag_pairs: Vec<(QuestionTagModel, TagModel)> =
            QuestionTagModel::belonging_to(&question_models)
                .inner_join(tag::table)
                .select((question_tag::all_columns, tag::all_columns))
                .load::<(QuestionTagModel, TagModel)>(conn)?;
        let grouped_tags = tag_pairs.grouped_by(&question_models);

        let mut tags_by_question: HashMap<i64, Vec<Tag>> =
            HashMap::with_capacity(question_models.len());
        for (q, pairs) in question_models.iter().zip(grouped_tags) {
            tags_by_question.insert(
                q.id,
                pairs.into_iter().map(|(_, t)| t.into_entity()).collect(),
            );
        }

        let out = question_models
            .into_iter()
            .zip(grouped_answers)
            .map(|(q, answers)| {
                let tags = tags_by_question.remove(&q.id).unwrap_or_default();
                let answers = answers.into_iter().map(AnswerModel::into_entity).collect();
                q.into_entity(answers, tags)
            })
            .collect();

        Ok(out)
    }
}

#[async_trait]
impl QuestionRepository for QuestionRepositoryImpl {
    async fn find_page(&self, page: &PageRequest) -> AppResult<PaginatedResult<Question>> {
        let db = Arc::clone(&self.db);
        let page = page.clone();

        task::spawn_blocking(move || -> AppResult<PaginatedResult<Question>> {
            let mut conn = db.get_connection()?;

            let total: i64 = question::table.count().get_result(&mut conn)?;
            let rows = question::table
                .order(question::created_at.desc())
                .limit(page.limit())
                .offset(page.offset())
                .load::<QuestionModel>(&mut conn)?;

            let items = Self::load_with_relations(&mut conn, rows)?;
            Ok(PaginatedResult::new(items, total as u64, &page))
        })
        .await?
    }

    async fn find_all(&self) -> AppResult<Vec<Question>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<Question>> {
            let mut conn = db.get_connection()?;
            let rows = question::table
                .order(question::created_at.desc())
                .load::<QuestionModel>(&mut conn)?;
            Self::load_with_relations(&mut conn, rows)
        })
        .await?
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Question>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Option<Question>> {
            let mut conn = db.get_connection()?;
            let row = question::table
                .find(id)
                .first::<QuestionModel>(&mut conn)
                .optional()?;

            match row {
                Some(model) => {
                    let out = Self::load_with_relations(&mut conn, vec![model])?;
                    Ok(out.into_iter().next())
                }
                None => Ok(None),
            }
        })
        .await?
    }

    async fn insert(&self, new: NewQuestion) -> AppResult<Question> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Question> {
            let mut conn = db.get_connection()?;

            let row: QuestionModel = diesel::insert_into(question::table)
                .values(&NewQuestionRow {
                    title: new.title,
                    body: new.body,
                    rating: 0,
                    author_id: new.author_id,
                })
                .get_result(&mut conn)?;

            Ok(row.into_entity(Vec::new(), Vec::new()))
        })
        .await?
    }

    async fn update(&self, id: i64, update: QuestionUpdate) -> AppResult<Question> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Question> {
            let mut conn = db.get_connection()?;

            let updated: Option<QuestionModel> = diesel::update(question::table.find(id))
                .set((
                    question::title.eq(update.title),
                    question::body.eq(update.body),
                    question::rating.eq(update.rating),
                ))
                .get_result(&mut conn)
                .optional()?;

            let model = updated
                .ok_or_else(|| AppError::NotFound(format!("Question with id {} not found", id)))?;

            let out = Self::load_with_relations(&mut conn, vec![model])?;
            out.into_iter()
                .next()
                .ok_or_else(|| AppError::InternalError("Failed to reload question".to_string()))
        })
        .await?
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<bool> {
            let mut conn = db.get_connection()?;

            // Owned rows go with the question; tags and author stay
            conn.transaction::<bool, AppError, _>(|conn| {
                diesel::delete(question_tag::table.filter(question_tag::question_id.eq(id)))
                    .execute(conn)?;
                diesel::delete(answer::table.filter(answer::question_id.eq(id))).execute(conn)?;
                let n = diesel::delete(question::table.find(id)).execute(conn)?;
                Ok(n > 0)
            })
        })
        .await?
    }

    async fn add_answer(&self, question_id: i64, body: &str) -> AppResult<Answer> {
        let db = Arc::clone(&self.db);
        let body = body.to_string();

        task::spawn_blocking(move || -> AppResult<Answer> {
            let mut conn = db.get_connection()?;

            let exists: Option<i64> = question::table
                .find(question_id)
                .select(question::id)
                .first(&mut conn)
                .optional()?;
            if exists.is_none() {
                return Err(AppError::NotFound(format!(
                    "Question with id {} not found",
                    question_id
                )));
            }

            let row: AnswerModel = diesel::insert_into(answer::table)
                .values(&NewAnswerRow { question_id, body })
                .get_result(&mut conn)?;

            Ok(row.into_entity())
        })
        .await?
    }

    async fn set_tags(&self, question_id: i64, tag_ids: &[i64]) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let tag_ids = tag_ids.to_vec();

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;

            conn.transaction::<(), AppError, _>(|conn| {
                let exists: Option<i64> = question::table
                    .find(question_id)
                    .select(question::id)
                    .first(conn)
                    .optional()?;
                if exists.is_none() {
                    return Err(AppError::NotFound(format!(
                        "Question with id {} not found",
                        question_id
                    )));
                }

                diesel::delete(
                    question_tag::table.filter(question_tag::question_id.eq(question_id)),
                )
                .execute(conn)?;

                let links: Vec<QuestionTagModel> = tag_ids
                    .iter()
                    .map(|tag_id| QuestionTagModel {
                        question_id,
                        tag_id: *tag_id,
                    })
                    .collect();

                diesel::insert_into(question_tag::table)
                    .values(&links)
                    .on_conflict((question_tag::question_id, question_tag::tag_id))
                    .do_nothing()
                    .execute(conn)?;

                Ok(())
            })
        })
        .await?
    }
}
