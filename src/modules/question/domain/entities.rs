/// Domain entities for questions and their answers
///
/// A question exclusively owns its answers (they are deleted with it) and
/// holds a name-deduplicated set of tags through the question_tag join
/// table. The author is a weak back-reference by id.
use crate::modules::tag::domain::entities::Tag;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub rating: i32,
    pub author_id: i64,
    pub answers: Vec<Answer>,
    pub tags: Vec<Tag>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    pub id: i64,
    pub question_id: i64,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewQuestion {
    pub title: String,
    pub body: String,
    pub author_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionUpdate {
    pub title: String,
    pub body: String,
    pub rating: i32,
}

/// Split free-text tag input into tag names: whitespace-delimited tokens,
/// deduplicated by name, first occurrence wins.
pub fn parse_tag_input(input: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    input
        .split_whitespace()
        .filter(|token| seen.insert(token.to_string()))
        .map(|token| token.to_string())
        .collect()
}
