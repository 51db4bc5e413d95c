pub mod service;

pub use service::QuestionService;
