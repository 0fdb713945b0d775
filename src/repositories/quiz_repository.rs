use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{
    bson::{self, doc},
    options::{IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use serde::{Deserialize, Serialize};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{NewQuizRecord, QuizRecord, QuizSummary},
};

const QUIZ_SEQUENCE: &str = "quizzes";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizRepository: Send + Sync {
    /// Stores a record, assigning its id and generation timestamp.
    async fn insert(&self, record: NewQuizRecord) -> AppResult<QuizRecord>;
    /// History summaries, newest first.
    async fn list_recent(&self) -> AppResult<Vec<QuizSummary>>;
    async fn find_by_id(&self, id: i64) -> AppResult<Option<QuizRecord>>;
    async fn ping(&self) -> AppResult<()>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct QuizDocument {
    id: i64,
    url: String,
    title: String,
    date_generated: bson::DateTime,
    full_quiz_data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    scraped_content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct QuizSummaryDocument {
    id: i64,
    url: String,
    title: String,
    date_generated: bson::DateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Counter {
    #[serde(rename = "_id")]
    name: String,
    seq: i64,
}

impl TryFrom<QuizDocument> for QuizRecord {
    type Error = AppError;

    fn try_from(document: QuizDocument) -> AppResult<Self> {
        Ok(QuizRecord {
            date_generated: to_chrono(document.id, document.date_generated)?,
            id: document.id,
            url: document.url,
            title: document.title,
            full_quiz_data: document.full_quiz_data,
            scraped_content: document.scraped_content,
        })
    }
}

impl TryFrom<QuizSummaryDocument> for QuizSummary {
    type Error = AppError;

    fn try_from(document: QuizSummaryDocument) -> AppResult<Self> {
        Ok(QuizSummary {
            date_generated: to_chrono(document.id, document.date_generated)?,
            id: document.id,
            url: document.url,
            title: document.title,
        })
    }
}

fn to_chrono(id: i64, date: bson::DateTime) -> AppResult<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(date.timestamp_millis()).ok_or_else(|| {
        AppError::CorruptedRecord(format!(
            "quiz {} has an out-of-range date_generated ({} ms)",
            id,
            date.timestamp_millis()
        ))
    })
}

pub struct MongoQuizRepository {
    db: Database,
    collection: Collection<QuizDocument>,
    counters: Collection<Counter>,
}

impl MongoQuizRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            db: db.clone(),
            collection: db.quizzes(),
            counters: db.counters(),
        }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quizzes collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let recency_index = IndexModel::builder()
            .keys(doc! { "date_generated": -1, "id": -1 })
            .options(
                IndexOptions::builder()
                    .name("date_generated_desc".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(recency_index).await?;

        log::info!("Successfully created indexes for quizzes collection");
        Ok(())
    }

    async fn next_id(&self) -> AppResult<i64> {
        let counter = self
            .counters
            .find_one_and_update(
                doc! { "_id": QUIZ_SEQUENCE },
                doc! { "$inc": { "seq": 1_i64 } },
            )
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await?
            .ok_or_else(|| AppError::Storage("quiz id sequence unavailable".to_string()))?;

        Ok(counter.seq)
    }
}

#[async_trait]
impl QuizRepository for MongoQuizRepository {
    async fn insert(&self, record: NewQuizRecord) -> AppResult<QuizRecord> {
        let id = self.next_id().await?;
        let date_generated = bson::DateTime::from_millis(Utc::now().timestamp_millis());

        let document = QuizDocument {
            id,
            url: record.url,
            title: record.title,
            date_generated,
            full_quiz_data: record.full_quiz_data,
            scraped_content: record.scraped_content,
        };

        // Single-document insert: the record is either fully visible or absent.
        self.collection.insert_one(&document).await.map_err(|e| {
            log::error!("Failed to insert quiz {}: {}", id, e);
            AppError::from(e)
        })?;

        log::info!("Stored quiz {} for {}", id, document.url);
        QuizRecord::try_from(document)
    }

    async fn list_recent(&self) -> AppResult<Vec<QuizSummary>> {
        let cursor = self
            .collection
            .clone_with_type::<QuizSummaryDocument>()
            .find(doc! {})
            .projection(doc! { "_id": 0, "id": 1, "url": 1, "title": 1, "date_generated": 1 })
            .sort(doc! { "date_generated": -1, "id": -1 })
            .await?;

        let summaries: Vec<QuizSummaryDocument> = cursor.try_collect().await?;
        summaries.into_iter().map(QuizSummary::try_from).collect()
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<QuizRecord>> {
        self.collection
            .find_one(doc! { "id": id })
            .await?
            .map(QuizRecord::try_from)
            .transpose()
    }

    async fn ping(&self) -> AppResult<()> {
        self.db.health_check().await
    }
}
