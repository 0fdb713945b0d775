use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted quiz. `full_quiz_data` holds the serialized `QuizOutput`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizRecord {
    pub id: i64,                            // Assigned by storage, monotonically increasing
    pub url: String,
    pub title: String,
    pub date_generated: DateTime<Utc>,      // Assigned at write time
    pub full_quiz_data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scraped_content: Option<String>,
}

/// Write-side shape of a record; storage assigns `id` and `date_generated`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewQuizRecord {
    pub url: String,
    pub title: String,
    pub full_quiz_data: String,
    pub scraped_content: Option<String>,
}

/// One row of the history listing.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizSummary {
    pub id: i64,
    pub url: String,
    pub title: String,
    pub date_generated: DateTime<Utc>,
}

impl From<&QuizRecord> for QuizSummary {
    fn from(record: &QuizRecord) -> Self {
        QuizSummary {
            id: record.id,
            url: record.url.clone(),
            title: record.title.clone(),
            date_generated: record.date_generated,
        }
    }
}

impl NewQuizRecord {
    pub fn into_record(self, id: i64, date_generated: DateTime<Utc>) -> QuizRecord {
        QuizRecord {
            id,
            url: self.url,
            title: self.title,
            date_generated,
            full_quiz_data: self.full_quiz_data,
            scraped_content: self.scraped_content,
        }
    }
}
