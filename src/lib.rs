pub mod modules;
pub mod schema;
pub mod shared;

use modules::{
    account::{
        application::service::AccountService, infrastructure::gravatar::GravatarClient,
        infrastructure::repository::AccountRepositoryImpl, AccountRepository, AvatarFetcher,
    },
    question::{
        application::service::QuestionService, infrastructure::repository::QuestionRepositoryImpl,
        QuestionRepository,
    },
    tag::{
        application::service::TagService, infrastructure::repository::TagRepositoryImpl,
        TagRepository,
    },
};
use shared::errors::AppResult;
use shared::infrastructure::database::Database;
use std::sync::Arc;

/// Wired-up workflow services, ready for a web layer to consume.
pub struct Services {
    pub accounts: Arc<AccountService>,
    pub questions: Arc<QuestionService>,
    pub tags: Arc<TagService>,
}

/// Build the full service graph on top of an existing database handle.
pub fn build_services(database: Arc<Database>) -> AppResult<Services> {
    let account_repo: Arc<dyn AccountRepository> =
        Arc::new(AccountRepositoryImpl::new(Arc::clone(&database)));
    let question_repo: Arc<dyn QuestionRepository> =
        Arc::new(QuestionRepositoryImpl::new(Arc::clone(&database)));
    let tag_repo: Arc<dyn TagRepository> = Arc::new(TagRepositoryImpl::new(Arc::clone(&database)));

    let avatar_fetcher: Arc<dyn AvatarFetcher> = Arc::new(GravatarClient::new()?);

    Ok(Services {
        accounts: Arc::new(AccountService::new(account_repo, avatar_fetcher)),
        questions: Arc::new(QuestionService::new(
            question_repo,
            Arc::clone(&tag_repo),
        )),
        tags: Arc::new(TagService::new(tag_repo)),
    })
}

/// Convenience bootstrap: environment, logging, pool, migrations, services.
pub fn bootstrap() -> AppResult<Services> {
    dotenvy::dotenv().ok();
    shared::utils::init_logger();

    let database = Arc::new(Database::new()?);
    database.run_migrations()?;

    build_services(database)
}
