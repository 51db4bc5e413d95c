/// Diesel-based implementation of TagRepository
///
/// The popularity listing is a raw aggregate over the question_tag join
/// table; everything else is plain query-builder work.
use crate::modules::tag::domain::entities::{PopularTag, Tag};
use crate::modules::tag::domain::repository::TagRepository;
use crate::modules::tag::infrastructure::models::{NewTagRow, PopularTagRow, TagModel};
use crate::schema::tag;
use crate::shared::application::{PageRequest, PaginatedResult};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::database::Database;
use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;
use tokio::task;

/// Helper struct for COUNT queries
#[derive(QueryableByName)]
struct CountResult {
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    count: i64,
}

pub struct TagRepositoryImpl {
    db: Arc<Database>,
}

impl TagRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TagRepository for TagRepositoryImpl {
    async fn find_page(&self, page: &PageRequest) -> AppResult<PaginatedResult<Tag>> {
        let db = Arc::clone(&self.db);
        let page = page.clone();

        task::spawn_blocking(move || -> AppResult<PaginatedResult<Tag>> {
            let mut conn = db.get_connection()?;

            let total: i64 = tag::table.count().get_result(&mut conn)?;
            let rows = tag::table
                .order(tag::name.asc())
                .limit(page.limit())
                .offset(page.offset())
                .load::<TagModel>(&mut conn)?;

            let items = rows.into_iter().map(TagModel::into_entity).collect();
            Ok(PaginatedResult::new(items, total as u64, &page))
        })
        .await?
    }

    async fn find_all(&self) -> AppResult<Vec<Tag>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<Tag>> {
            let mut conn = db.get_connection()?;
            let rows = tag::table.order(tag::name.asc()).load::<TagModel>(&mut conn)?;
            Ok(rows.into_iter().map(TagModel::into_entity).collect())
        })
        .await?
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Tag>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Option<Tag>> {
            let mut conn = db.get_connection()?;
            let row = tag::table.find(id).first::<TagModel>(&mut conn).optional()?;
            Ok(row.map(TagModel::into_entity))
        })
        .await?
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Tag>> {
        let db = Arc::clone(&self.db);
        let name = name.to_string();

        task::spawn_blocking(move || -> AppResult<Option<Tag>> {
            let mut conn = db.get_connection()?;
            let row = tag::table
                .filter(tag::name.eq(name))
                .first::<TagModel>(&mut conn)
                .optional()?;
            Ok(row.map(TagModel::into_entity))
        })
        .await?
    }

    async fn find_most_popular(
        &self,
        page: &PageRequest,
    ) -> AppResult<PaginatedResult<PopularTag>> {
        let db = Arc::clone(&self.db);
        let page = page.clone();

        task::spawn_blocking(move || -> AppResult<PaginatedResult<PopularTag>> {
            let mut conn = db.get_connection()?;

            let total: CountResult = diesel::sql_query("SELECT COUNT(*) as count FROM tag")
                .get_result(&mut conn)?;

            // LEFT JOIN keeps zero-question tags at the bottom of the list;
            // name breaks count ties so the ordering is deterministic
            let rows: Vec<PopularTagRow> = diesel::sql_query(
                "SELECT t.id, t.name, COUNT(qt.question_id) AS question_count
                 FROM tag t
                 LEFT JOIN question_tag qt ON qt.tag_id = t.id
                 GROUP BY t.id, t.name
                 ORDER BY question_count DESC, t.name ASC
                 LIMIT $1 OFFSET $2",
            )
            .bind::<diesel::sql_types::BigInt, _>(page.limit())
            .bind::<diesel::sql_types::BigInt, _>(page.offset())
            .load(&mut conn)?;

            let items = rows.into_iter().map(PopularTagRow::into_entity).collect();
            Ok(PaginatedResult::new(items, total.count as u64, &page))
        })
        .await?
    }

    async fn save(&self, tag_entity: Tag) -> AppResult<Tag> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Tag> {
            let mut conn = db.get_connection()?;

            let row: TagModel = match tag_entity.id {
                Some(id) => diesel::update(tag::table.find(id))
                    .set(tag::name.eq(&tag_entity.name))
                    .get_result(&mut conn)
                    .optional()?
                    .ok_or_else(|| AppError::NotFound(format!("Tag with id {} not found", id)))?,
                None => diesel::insert_into(tag::table)
                    .values(&NewTagRow {
                        name: tag_entity.name,
                    })
                    .get_result(&mut conn)?,
            };

            Ok(row.into_entity())
        })
        .await?
    }

    async fn find_or_create(&self, name: &str) -> AppResult<Tag> {
        let db = Arc::clone(&self.db);
        let name = name.to_string();

        task::spawn_blocking(move || -> AppResult<Tag> {
            let mut conn = db.get_connection()?;

            // relies on UNIQUE (name); a concurrent insert wins the conflict
            // and the follow-up select picks it up
            diesel::insert_into(tag::table)
                .values(&NewTagRow { name: name.clone() })
                .on_conflict(tag::name)
                .do_nothing()
                .execute(&mut conn)?;

            let row: TagModel = tag::table.filter(tag::name.eq(&name)).first(&mut conn)?;
            Ok(row.into_entity())
        })
        .await?
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<bool> {
            let mut conn = db.get_connection()?;
            let n = diesel::delete(tag::table.find(id)).execute(&mut conn)?;
            Ok(n > 0)
        })
        .await?
    }
}
