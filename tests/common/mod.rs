#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering},
        Arc,
    },
};

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use tokio::sync::RwLock;

use wiki_quiz_server::{
    app_state::AppState,
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{
        Difficulty, KeyEntities, NewQuizRecord, QuizOutput, QuizQuestion, QuizRecord, QuizSummary,
    },
    repositories::QuizRepository,
    services::{fetcher::PageFetcher, model_service::CompletionModel},
};

/// Records kept in memory; ids and timestamps increase with every insert.
pub struct InMemoryQuizRepository {
    records: RwLock<Vec<QuizRecord>>,
    next_id: AtomicI64,
    fail_writes: AtomicBool,
}

impl InMemoryQuizRepository {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
            fail_writes: AtomicBool::new(false),
        }
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn insert(&self, record: NewQuizRecord) -> AppResult<QuizRecord> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::Storage(format!("insert of quiz {} aborted", id)));
        }

        let base = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let stored = record.into_record(id, base + Duration::seconds(id));

        self.records.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn list_recent(&self) -> AppResult<Vec<QuizSummary>> {
        let records = self.records.read().await;
        let mut summaries: Vec<QuizSummary> = records.iter().map(QuizSummary::from).collect();
        summaries.sort_by(|a, b| {
            b.date_generated
                .cmp(&a.date_generated)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(summaries)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<QuizRecord>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

/// Serves canned pages keyed by URL; unknown URLs behave like a 404.
pub struct StubFetcher {
    pages: HashMap<String, String>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
        }
    }

    pub fn with_page(mut self, url: &str, html: String) -> Self {
        self.pages.insert(url.to_string(), html);
        self
    }
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch(&self, url: String) -> AppResult<Vec<u8>> {
        self.pages
            .get(&url)
            .map(|html| html.clone().into_bytes())
            .ok_or_else(|| {
                AppError::Fetch(format!("Failed to fetch URL: 404 Not Found for url ({})", url))
            })
    }
}

/// Returns the same completion for every prompt and counts calls.
pub struct StubModel {
    completion: AppResult<String>,
    calls: AtomicUsize,
}

impl StubModel {
    pub fn returning(completion: AppResult<String>) -> Self {
        Self {
            completion,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionModel for StubModel {
    async fn complete(&self, _prompt: String) -> AppResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.completion.clone()
    }
}

pub fn question(index: usize, difficulty: Difficulty) -> QuizQuestion {
    QuizQuestion {
        question: format!("Question {} about the Turing Award?", index + 1),
        options: vec![
            format!("Option {index}"),
            "1966".to_string(),
            "ACM".to_string(),
            "IEEE".to_string(),
        ],
        answer: format!("Option {index}"),
        difficulty,
        explanation: "See the article text.".to_string(),
    }
}

pub fn quiz_output(questions: usize) -> QuizOutput {
    let levels = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
    QuizOutput {
        title: "Turing Award".to_string(),
        summary: "The Turing Award is given annually by the ACM.".to_string(),
        key_entities: KeyEntities {
            people: vec!["Alan Turing".to_string()],
            organizations: vec!["Association for Computing Machinery".to_string()],
            locations: vec![],
        },
        sections: vec!["History".to_string(), "Recipients".to_string()],
        quiz: (0..questions).map(|i| question(i, levels[i % 3])).collect(),
        related_topics: vec!["ACM".to_string(), "Computer science".to_string()],
    }
}

pub fn wiki_html(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html><head><title>{title} - Wikipedia</title></head><body>
<div id="content"><h1 id="firstHeading" class="firstHeading">{title}</h1>
<div id="bodyContent"><div id="mw-content-text"><div class="mw-parser-output">{body}</div></div></div></div>
</body></html>"#
    )
}

pub fn test_config() -> Config {
    Config::from_env()
}

pub fn app_state(
    fetcher: StubFetcher,
    model: Arc<StubModel>,
    repository: Arc<InMemoryQuizRepository>,
) -> AppState {
    AppState::from_parts(test_config(), Arc::new(fetcher), model, repository)
        .expect("app state should build from stubs")
}
