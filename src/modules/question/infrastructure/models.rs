/// Diesel models for the question, answer, and question_tag tables
use crate::modules::question::domain::entities::{Answer, Question};
use crate::modules::tag::domain::entities::Tag;
use crate::schema::{answer, question, question_tag};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

#[derive(Queryable, Identifiable, Selectable, Debug, Clone)]
#[diesel(table_name = question)]
pub struct QuestionModel {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub rating: i32,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = question)]
pub struct NewQuestionRow {
    pub title: String,
    pub body: String,
    pub rating: i32,
    pub author_id: i64,
}

#[derive(Queryable, Identifiable, Selectable, Associations, Debug, Clone)]
#[diesel(table_name = answer, belongs_to(QuestionModel, foreign_key = question_id))]
pub struct AnswerModel {
    pub id: i64,
    pub question_id: i64,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = answer)]
pub struct NewAnswerRow {
    pub question_id: i64,
    pub body: String,
}

#[derive(Queryable, Identifiable, Selectable, Associations, Insertable, Debug, Clone)]
#[diesel(
    table_name = question_tag,
    primary_key(question_id, tag_id),
    belongs_to(QuestionModel, foreign_key = question_id)
)]
pub struct QuestionTagModel {
    pub question_id: i64,
    pub tag_id: i64,
}

impl QuestionModel {
    pub fn into_entity(self, answers: Vec<Answer>, tags: Vec<Tag>) -> Question {
        Question {
            id: self.id,
            title: self.title,
            body: self.body,
            rating: self.rating,
            author_id: self.author_id,
            answers,
            tags,
            created_at: self.created_at,
        }
    }
}

impl AnswerModel {
    pub fn into_entity(self) -> Answer {
        Answer {
            id: self.id,
            question_id: self.question_id,
            body: self.body,
            created_at: self.created_at,
        }
    }
}
