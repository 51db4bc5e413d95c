/// In-memory repository fakes for service-level tests
///
/// Behave like the diesel implementations over a scratch store: tolerant
/// deletes report false, updates of missing rows fail with NotFound, and
/// question deletion cascades to answers and tag links but never to tags.
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::Utc;
use qforum::modules::account::application::ports::AvatarFetcher;
use qforum::modules::account::domain::entities::{Account, Image};
use qforum::modules::account::domain::repository::{AccountRecord, AccountRepository};
use qforum::modules::question::domain::entities::{
    Answer, NewQuestion, Question, QuestionUpdate,
};
use qforum::modules::question::domain::repository::QuestionRepository;
use qforum::modules::tag::domain::entities::{PopularTag, Tag};
use qforum::modules::tag::domain::repository::TagRepository;
use qforum::shared::application::{PageRequest, PaginatedResult};
use qforum::shared::errors::{AppError, AppResult};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

/// Avatar fetcher that returns a fixed payload without touching the network
pub struct StubAvatarFetcher {
    data: String,
}

impl StubAvatarFetcher {
    pub fn with_bytes(bytes: &[u8]) -> Self {
        Self {
            data: BASE64.encode(bytes),
        }
    }
}

#[async_trait]
impl AvatarFetcher for StubAvatarFetcher {
    async fn fetch(&self, _email: &str) -> AppResult<String> {
        Ok(self.data.clone())
    }
}

/// Avatar fetcher that always fails, simulating a network outage
pub struct FailingAvatarFetcher;

#[async_trait]
impl AvatarFetcher for FailingAvatarFetcher {
    async fn fetch(&self, _email: &str) -> AppResult<String> {
        Err(AppError::ExternalServiceError(
            "Avatar download failed: connection refused".to_string(),
        ))
    }
}

#[derive(Default)]
pub struct InMemoryAccountRepo {
    next_id: AtomicI64,
    accounts: Mutex<BTreeMap<i64, Account>>,
}

impl InMemoryAccountRepo {
    pub fn account_count(&self) -> usize {
        self.accounts.lock().unwrap().len()
    }

    fn allocate_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepo {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Account>> {
        Ok(self.accounts.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .values()
            .find(|a| a.email == email)
            .cloned())
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Vec<Account>> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .values()
            .filter(|a| a.name == name)
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> AppResult<Vec<Account>> {
        Ok(self.accounts.lock().unwrap().values().cloned().collect())
    }

    async fn insert(&self, record: AccountRecord) -> AppResult<Account> {
        let id = self.allocate_id();
        let account = Account {
            id,
            name: record.name,
            email: record.email,
            password_hash: record.password_hash,
            avatar: Image {
                id,
                data: record.avatar_data,
            },
            created_at: Utc::now(),
        };
        self.accounts.lock().unwrap().insert(id, account.clone());
        Ok(account)
    }

    async fn update_profile(&self, id: i64, name: &str, email: &str) -> AppResult<Account> {
        let mut accounts = self.accounts.lock().unwrap();
        let account = accounts
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Account with id {} not found", id)))?;
        account.name = name.to_string();
        account.email = email.to_string();
        Ok(account.clone())
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        Ok(self.accounts.lock().unwrap().remove(&id).is_some())
    }
}

/// Shared in-memory store implementing both QuestionRepository and
/// TagRepository so link-dependent queries (popularity, cascades) see one
/// consistent dataset.
#[derive(Default)]
pub struct InMemoryForumRepo {
    next_id: AtomicI64,
    questions: Mutex<BTreeMap<i64, Question>>,
    answers: Mutex<BTreeMap<i64, Answer>>,
    tags: Mutex<BTreeMap<i64, String>>,
    links: Mutex<BTreeSet<(i64, i64)>>, // (question_id, tag_id)
}

impl InMemoryForumRepo {
    fn allocate_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn answer_count(&self) -> usize {
        self.answers.lock().unwrap().len()
    }

    pub fn tag_count(&self) -> usize {
        self.tags.lock().unwrap().len()
    }

    /// Assemble a question with its answers and tags, newest answers last,
    /// tags ordered by name.
    fn assemble(&self, question: &Question) -> Question {
        let mut out = question.clone();

        out.answers = self
            .answers
            .lock()
            .unwrap()
            .values()
            .filter(|a| a.question_id == question.id)
            .cloned()
            .collect();

        let tags = self.tags.lock().unwrap();
        let mut attached: Vec<Tag> = self
            .links
            .lock()
            .unwrap()
            .iter()
            .filter(|(qid, _)| *qid == question.id)
            .filter_map(|(_, tid)| {
                tags.get(tid).map(|name| Tag {
                    id: Some(*tid),
                    name: name.clone(),
                })
            })
            .collect();
        attached.sort_by(|a, b| a.name.cmp(&b.name));
        out.tags = attached;

        out
    }

    fn sorted_questions(&self) -> Vec<Question> {
        let questions = self.questions.lock().unwrap();
        let mut rows: Vec<Question> = questions.values().cloned().collect();
        // newest first, as the diesel implementation orders by created_at
        rows.sort_by(|a, b| b.id.cmp(&a.id));
        rows.into_iter().map(|q| self.assemble(&q)).collect()
    }
}

#[async_trait]
impl QuestionRepository for InMemoryForumRepo {
    async fn find_page(&self, page: &PageRequest) -> AppResult<PaginatedResult<Question>> {
        let rows = self.sorted_questions();
        let total = rows.len() as u64;
        let items = rows
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok(PaginatedResult::new(items, total, page))
    }

    async fn find_all(&self) -> AppResult<Vec<Question>> {
        Ok(self.sorted_questions())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Question>> {
        let questions = self.questions.lock().unwrap();
        Ok(questions.get(&id).map(|q| self.assemble(q)))
    }

    async fn insert(&self, new: NewQuestion) -> AppResult<Question> {
        let id = self.allocate_id();
        let question = Question {
            id,
            title: new.title,
            body: new.body,
            rating: 0,
            author_id: new.author_id,
            answers: Vec::new(),
            tags: Vec::new(),
            created_at: Utc::now(),
        };
        self.questions.lock().unwrap().insert(id, question.clone());
        Ok(question)
    }

    async fn update(&self, id: i64, update: QuestionUpdate) -> AppResult<Question> {
        let mut questions = self.questions.lock().unwrap();
        let question = questions
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Question with id {} not found", id)))?;
        question.title = update.title;
        question.body = update.body;
        question.rating = update.rating;
        let snapshot = question.clone();
        drop(questions);
        Ok(self.assemble(&snapshot))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let existed = self.questions.lock().unwrap().remove(&id).is_some();
        if existed {
            self.answers
                .lock()
                .unwrap()
                .retain(|_, a| a.question_id != id);
            self.links.lock().unwrap().retain(|(qid, _)| *qid != id);
        }
        Ok(existed)
    }

    async fn add_answer(&self, question_id: i64, body: &str) -> AppResult<Answer> {
        if !self.questions.lock().unwrap().contains_key(&question_id) {
            return Err(AppError::NotFound(format!(
                "Question with id {} not found",
                question_id
            )));
        }
        let id = self.allocate_id();
        let answer = Answer {
            id,
            question_id,
            body: body.to_string(),
            created_at: Utc::now(),
        };
        self.answers.lock().unwrap().insert(id, answer.clone());
        Ok(answer)
    }

    async fn set_tags(&self, question_id: i64, tag_ids: &[i64]) -> AppResult<()> {
        if !self.questions.lock().unwrap().contains_key(&question_id) {
            return Err(AppError::NotFound(format!(
                "Question with id {} not found",
                question_id
            )));
        }
        let mut links = self.links.lock().unwrap();
        links.retain(|(qid, _)| *qid != question_id);
        for tag_id in tag_ids {
            links.insert((question_id, *tag_id));
        }
        Ok(())
    }
}

#[async_trait]
impl TagRepository for InMemoryForumRepo {
    async fn find_page(&self, page: &PageRequest) -> AppResult<PaginatedResult<Tag>> {
        let tags = self.tags.lock().unwrap();
        let total = tags.len() as u64;
        let mut rows: Vec<Tag> = tags
            .iter()
            .map(|(id, name)| Tag {
                id: Some(*id),
                name: name.clone(),
            })
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        let items = rows
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok(PaginatedResult::new(items, total, page))
    }

    async fn find_all(&self) -> AppResult<Vec<Tag>> {
        let tags = self.tags.lock().unwrap();
        let mut rows: Vec<Tag> = tags
            .iter()
            .map(|(id, name)| Tag {
                id: Some(*id),
                name: name.clone(),
            })
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Tag>> {
        Ok(self.tags.lock().unwrap().get(&id).map(|name| Tag {
            id: Some(id),
            name: name.clone(),
        }))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Tag>> {
        Ok(self
            .tags
            .lock()
            .unwrap()
            .iter()
            .find(|(_, n)| n.as_str() == name)
            .map(|(id, n)| Tag {
                id: Some(*id),
                name: n.clone(),
            }))
    }

    async fn find_most_popular(
        &self,
        page: &PageRequest,
    ) -> AppResult<PaginatedResult<PopularTag>> {
        let tags = self.tags.lock().unwrap();
        let links = self.links.lock().unwrap();
        let total = tags.len() as u64;

        let mut rows: Vec<PopularTag> = tags
            .iter()
            .map(|(id, name)| PopularTag {
                id: *id,
                name: name.clone(),
                question_count: links.iter().filter(|(_, tid)| tid == id).count() as i64,
            })
            .collect();
        rows.sort_by(|a, b| {
            b.question_count
                .cmp(&a.question_count)
                .then_with(|| a.name.cmp(&b.name))
        });

        let items = rows
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok(PaginatedResult::new(items, total, page))
    }

    async fn save(&self, tag: Tag) -> AppResult<Tag> {
        let mut tags = self.tags.lock().unwrap();
        match tag.id {
            Some(id) => {
                if !tags.contains_key(&id) {
                    return Err(AppError::NotFound(format!("Tag with id {} not found", id)));
                }
                tags.insert(id, tag.name.clone());
                Ok(Tag {
                    id: Some(id),
                    name: tag.name,
                })
            }
            None => {
                if tags.values().any(|n| n == &tag.name) {
                    return Err(AppError::DatabaseError(format!(
                        "duplicate key value violates unique constraint: tag.name = {}",
                        tag.name
                    )));
                }
                drop(tags);
                let id = self.allocate_id();
                self.tags.lock().unwrap().insert(id, tag.name.clone());
                Ok(Tag {
                    id: Some(id),
                    name: tag.name,
                })
            }
        }
    }

    async fn find_or_create(&self, name: &str) -> AppResult<Tag> {
        if let Some(existing) = self.find_by_name(name).await? {
            return Ok(existing);
        }
        self.save(Tag::new(name)).await
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        if self.links.lock().unwrap().iter().any(|(_, tid)| *tid == id) {
            return Err(AppError::DatabaseError(
                "update or delete on table \"tag\" violates foreign key constraint".to_string(),
            ));
        }
        Ok(self.tags.lock().unwrap().remove(&id).is_some())
    }
}
