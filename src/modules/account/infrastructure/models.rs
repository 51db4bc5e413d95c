/// Diesel models for the account and image tables
use crate::modules::account::domain::entities::{Account, Image};
use crate::schema::{account, image};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

#[derive(Queryable, Identifiable, Selectable, Debug, Clone)]
#[diesel(table_name = account)]
pub struct AccountModel {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub avatar_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = account)]
pub struct NewAccountRow {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub avatar_id: i64,
}

#[derive(Queryable, Identifiable, Selectable, Debug, Clone)]
#[diesel(table_name = image)]
pub struct ImageModel {
    pub id: i64,
    pub data: String,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = image)]
pub struct NewImageRow {
    pub data: String,
}

impl AccountModel {
    pub fn into_entity(self, avatar: ImageModel) -> Account {
        Account {
            id: self.id,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            avatar: Image {
                id: avatar.id,
                data: avatar.data,
            },
            created_at: self.created_at,
        }
    }
}
