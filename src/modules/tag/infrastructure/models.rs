/// Diesel models for the tag table
use crate::modules::tag::domain::entities::{PopularTag, Tag};
use crate::schema::tag;
use diesel::prelude::*;

#[derive(Queryable, Identifiable, Selectable, Debug, Clone)]
#[diesel(table_name = tag)]
pub struct TagModel {
    pub id: i64,
    pub name: String,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = tag)]
pub struct NewTagRow {
    pub name: String,
}

/// Row shape of the most-popular aggregate query
#[derive(QueryableByName, Debug)]
pub struct PopularTagRow {
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    pub id: i64,
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub name: String,
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    pub question_count: i64,
}

impl TagModel {
    pub fn into_entity(self) -> Tag {
        Tag {
            id: Some(self.id),
            name: self.name,
        }
    }
}

impl PopularTagRow {
    pub fn into_entity(self) -> PopularTag {
        PopularTag {
            id: self.id,
            name: self.name,
            question_count: self.question_count,
        }
    }
}
