use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoQuizRepository, QuizRepository},
    services::{
        fetcher::{HttpFetcher, PageFetcher},
        model_service::{CompletionModel, GeminiModel},
        quiz_generator::QuizGenerator,
        quiz_service::QuizService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let quiz_repository = Arc::new(MongoQuizRepository::new(&db));
        quiz_repository.ensure_indexes().await?;

        let fetcher = Arc::new(HttpFetcher::new(
            config.fetch_timeout(),
            &config.fetch_user_agent,
        )?);
        let model = Arc::new(GeminiModel::new(&config));

        Self::from_parts(config, fetcher, model, quiz_repository)
    }

    /// Wires the quiz pipeline from already-constructed collaborators.
    pub fn from_parts(
        config: Config,
        fetcher: Arc<dyn PageFetcher>,
        model: Arc<dyn CompletionModel>,
        repository: Arc<dyn QuizRepository>,
    ) -> AppResult<Self> {
        let generator = Arc::new(QuizGenerator::new(model)?);
        let quiz_service = Arc::new(QuizService::new(fetcher, generator, repository));

        Ok(Self {
            quiz_service,
            config: Arc::new(config),
        })
    }
}
