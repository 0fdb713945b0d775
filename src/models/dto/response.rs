use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::{QuizOutput, QuizRecord};

/// A generated quiz together with the fields storage attached to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResponse {
    pub id: i64,
    pub url: String,
    pub date_generated: DateTime<Utc>,
    #[serde(flatten)]
    pub quiz: QuizOutput,
}

impl QuizResponse {
    pub fn new(record: &QuizRecord, quiz: QuizOutput) -> Self {
        QuizResponse {
            id: record.id,
            url: record.url.clone(),
            date_generated: record.date_generated,
            quiz,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
