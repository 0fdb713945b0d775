use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    constants::quiz_prompt::{ARTICLE_PLACEHOLDER, QUIZ_GENERATION_PROMPT, SCHEMA_PLACEHOLDER},
    errors::{AppError, AppResult},
    models::domain::QuizOutput,
    services::model_service::CompletionModel,
};

static CODE_FENCE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^\s*```[a-zA-Z]*\s*(.*?)\s*```\s*$")
        .expect("CODE_FENCE_REGEX is a valid regex pattern")
});

/// Prompt construction, model call and schema validation for one article.
pub struct QuizGenerator {
    model: Arc<dyn CompletionModel>,
    format_instructions: String,
}

impl QuizGenerator {
    pub fn new(model: Arc<dyn CompletionModel>) -> AppResult<Self> {
        let schema = schemars::schema_for!(QuizOutput);
        let format_instructions = serde_json::to_string_pretty(&schema).map_err(|e| {
            AppError::Configuration(format!("Failed to render quiz schema: {}", e))
        })?;

        Ok(Self {
            model,
            format_instructions,
        })
    }

    pub fn build_prompt(&self, article_content: &str) -> String {
        QUIZ_GENERATION_PROMPT
            .replace(SCHEMA_PLACEHOLDER, &self.format_instructions)
            .replace(ARTICLE_PLACEHOLDER, article_content)
    }

    /// Single attempt: a malformed or invalid completion is an error, never repaired.
    pub async fn generate(&self, article_content: &str) -> AppResult<QuizOutput> {
        let prompt = self.build_prompt(article_content);
        let completion = self.model.complete(prompt).await?;

        let output = parse_quiz_output(&completion)?;
        log::info!(
            "Generated quiz '{}' with {} questions",
            output.title,
            output.quiz.len()
        );

        Ok(output)
    }
}

pub fn parse_quiz_output(completion: &str) -> AppResult<QuizOutput> {
    let json_text = strip_code_fence(completion);

    let value: serde_json::Value = serde_json::from_str(json_text).map_err(|e| {
        log::warn!("Model completion is not valid JSON: {}", e);
        AppError::Generation(format!("response is not valid JSON: {}", e))
    })?;

    let output: QuizOutput = serde_json::from_value(value).map_err(|e| {
        log::warn!("Model completion does not match the quiz schema: {}", e);
        AppError::Generation(format!("response does not match the quiz schema: {}", e))
    })?;

    output.check().map_err(|e| {
        log::warn!("Model completion failed quiz validation: {}", e);
        AppError::Generation(format!("quiz validation failed: {}", e))
    })?;

    Ok(output)
}

fn strip_code_fence(completion: &str) -> &str {
    CODE_FENCE_REGEX
        .captures(completion)
        .and_then(|captures| captures.get(1))
        .map(|inner| inner.as_str())
        .unwrap_or_else(|| completion.trim())
}
