/// Diesel-based implementation of AccountRepository
///
/// Blocking diesel work runs on the tokio blocking pool; the account/image
/// pair is always written and removed inside one transaction.
use crate::modules::account::domain::entities::Account;
use crate::modules::account::domain::repository::{AccountRecord, AccountRepository};
use crate::modules::account::infrastructure::models::{
    AccountModel, ImageModel, NewAccountRow, NewImageRow,
};
use crate::schema::{account, image};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::database::Database;
use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;
use tokio::task;

pub struct AccountRepositoryImpl {
    db: Arc<Database>,
}

impl AccountRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountRepository for AccountRepositoryImpl {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Account>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Option<Account>> {
            let mut conn = db.get_connection()?;
            let row = account::table
                .inner_join(image::table)
                .filter(account::id.eq(id))
                .select((AccountModel::as_select(), ImageModel::as_select()))
                .first::<(AccountModel, ImageModel)>(&mut conn)
                .optional()?;
            Ok(row.map(|(a, img)| a.into_entity(img)))
        })
        .await?
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        let db = Arc::clone(&self.db);
        let email = email.to_string();

        task::spawn_blocking(move || -> AppResult<Option<Account>> {
            let mut conn = db.get_connection()?;
            let row = account::table
                .inner_join(image::table)
                .filter(account::email.eq(email))
                .select((AccountModel::as_select(), ImageModel::as_select()))
                .first::<(AccountModel, ImageModel)>(&mut conn)
                .optional()?;
            Ok(row.map(|(a, img)| a.into_entity(img)))
        })
        .await?
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Vec<Account>> {
        let db = Arc::clone(&self.db);
        let name = name.to_string();

        task::spawn_blocking(move || -> AppResult<Vec<Account>> {
            let mut conn = db.get_connection()?;
            let rows = account::table
                .inner_join(image::table)
                .filter(account::name.eq(name))
                .select((AccountModel::as_select(), ImageModel::as_select()))
                .order(account::id.asc())
                .load::<(AccountModel, ImageModel)>(&mut conn)?;
            Ok(rows
                .into_iter()
                .map(|(a, img)| a.into_entity(img))
                .collect())
        })
        .await?
    }

    async fn find_all(&self) -> AppResult<Vec<Account>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<Account>> {
            let mut conn = db.get_connection()?;
            let rows = account::table
                .inner_join(image::table)
                .select((AccountModel::as_select(), ImageModel::as_select()))
                .order(account::id.asc())
                .load::<(AccountModel, ImageModel)>(&mut conn)?;
            Ok(rows
                .into_iter()
                .map(|(a, img)| a.into_entity(img))
                .collect())
        })
        .await?
    }

    async fn insert(&self, record: AccountRecord) -> AppResult<Account> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Account> {
            let mut conn = db.get_connection()?;

            // All-or-nothing: image and account land together or not at all
            conn.transaction::<Account, AppError, _>(|conn| {
                let avatar: ImageModel = diesel::insert_into(image::table)
                    .values(&NewImageRow {
                        data: record.avatar_data,
                    })
                    .get_result(conn)?;

                let row: AccountModel = diesel::insert_into(account::table)
                    .values(&NewAccountRow {
                        name: record.name,
                        email: record.email,
                        password_hash: record.password_hash,
                        avatar_id: avatar.id,
                    })
                    .get_result(conn)?;

                Ok(row.into_entity(avatar))
            })
        })
        .await?
    }

    async fn update_profile(&self, id: i64, name: &str, email: &str) -> AppResult<Account> {
        let db = Arc::clone(&self.db);
        let name = name.to_string();
        let email = email.to_string();

        task::spawn_blocking(move || -> AppResult<Account> {
            let mut conn = db.get_connection()?;

            let updated: Option<AccountModel> = diesel::update(account::table.find(id))
                .set((account::name.eq(name), account::email.eq(email)))
                .get_result(&mut conn)
                .optional()?;

            let row = updated
                .ok_or_else(|| AppError::NotFound(format!("Account with id {} not found", id)))?;

            let avatar: ImageModel = image::table.find(row.avatar_id).first(&mut conn)?;
            Ok(row.into_entity(avatar))
        })
        .await?
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<bool> {
            let mut conn = db.get_connection()?;

            conn.transaction::<bool, AppError, _>(|conn| {
                let avatar_id: Option<i64> = account::table
                    .find(id)
                    .select(account::avatar_id)
                    .first(conn)
                    .optional()?;

                let Some(avatar_id) = avatar_id else {
                    return Ok(false);
                };

                // Account references its image, so the account row goes first
                diesel::delete(account::table.find(id)).execute(conn)?;
                diesel::delete(image::table.find(avatar_id)).execute(conn)?;
                Ok(true)
            })
        })
        .await?
    }
}
