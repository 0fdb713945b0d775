use std::sync::Arc;

use serde_json::Value;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{NewQuizRecord, QuizSummary},
        dto::response::QuizResponse,
    },
    repositories::QuizRepository,
    services::{
        content_extractor::ContentExtractor, fetcher::PageFetcher, quiz_generator::QuizGenerator,
    },
};

pub struct QuizService {
    fetcher: Arc<dyn PageFetcher>,
    extractor: ContentExtractor,
    generator: Arc<QuizGenerator>,
    repository: Arc<dyn QuizRepository>,
}

impl QuizService {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        generator: Arc<QuizGenerator>,
        repository: Arc<dyn QuizRepository>,
    ) -> Self {
        Self {
            fetcher,
            extractor: ContentExtractor::new(),
            generator,
            repository,
        }
    }

    /// Fetch, extract, generate and store a quiz for `url`, one stage after another.
    pub async fn generate_quiz(&self, url: &str) -> AppResult<QuizResponse> {
        let html = self.fetcher.fetch(url.to_string()).await?;
        let article = self.extractor.extract(&html)?;
        log::info!(
            "Extracted '{}' from {} ({} chars)",
            article.title,
            url,
            article.content.len()
        );

        let mut quiz = self.generator.generate(&article.content).await?;
        quiz.title = article.title.clone();

        let full_quiz_data = serde_json::to_string(&quiz)
            .map_err(|e| AppError::Storage(format!("Failed to serialize quiz: {}", e)))?;

        let record = self
            .repository
            .insert(NewQuizRecord {
                url: url.to_string(),
                title: article.title,
                full_quiz_data,
                scraped_content: Some(article.content),
            })
            .await?;

        Ok(QuizResponse::new(&record, quiz))
    }

    pub async fn history(&self) -> AppResult<Vec<QuizSummary>> {
        self.repository.list_recent().await
    }

    /// The stored payload with `id`, `url` and `date_generated` merged in.
    pub async fn get_quiz(&self, id: i64) -> AppResult<Value> {
        let record = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", id)))?;

        let mut data = match serde_json::from_str::<Value>(&record.full_quiz_data) {
            Ok(Value::Object(map)) => map,
            Ok(_) => {
                log::error!("Stored quiz {} is not a JSON object", id);
                return Err(AppError::CorruptedRecord(format!(
                    "quiz {} payload is not a JSON object",
                    id
                )));
            }
            Err(e) => {
                log::error!("Stored quiz {} failed to parse: {}", id, e);
                return Err(AppError::CorruptedRecord(format!("quiz {}: {}", id, e)));
            }
        };

        data.insert("id".to_string(), Value::from(record.id));
        data.insert("url".to_string(), Value::from(record.url));
        data.insert(
            "date_generated".to_string(),
            serde_json::to_value(record.date_generated)
                .map_err(|e| AppError::CorruptedRecord(format!("quiz {}: {}", id, e)))?,
        );

        Ok(Value::Object(data))
    }

    pub async fn storage_ready(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
