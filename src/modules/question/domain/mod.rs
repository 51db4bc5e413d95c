pub mod entities;
pub mod repository;

pub use entities::{parse_tag_input, Answer, NewQuestion, Question, QuestionUpdate};
pub use repository::QuestionRepository;
