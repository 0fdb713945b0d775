use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde_json::{json, Value};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// A text-in, text-out language model.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionModel: Send + Sync {
    async fn complete(&self, prompt: String) -> AppResult<String>;
}

/// Gemini reached through its OpenAI-compatible chat completions endpoint.
pub struct GeminiModel {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: f32,
}

impl GeminiModel {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_base(config.gemini_api_base.clone())
            .with_api_key(config.gemini_api_key.expose_secret().to_string());

        Self {
            client: Client::with_config(openai_config),
            model: config.gemini_model.clone(),
            temperature: config.generation_temperature,
        }
    }

    fn request_body(&self, prompt: &str) -> Value {
        json!({
            "model": self.model,
            "temperature": self.temperature,
            "messages": [
                { "role": "user", "content": prompt }
            ]
        })
    }
}

#[async_trait]
impl CompletionModel for GeminiModel {
    async fn complete(&self, prompt: String) -> AppResult<String> {
        log::info!("Requesting quiz completion from {}", self.model);

        let response: Value = self
            .client
            .chat()
            .create_byot(self.request_body(&prompt))
            .await
            .map_err(|e| {
                log::error!("Model request to {} failed: {}", self.model, e);
                AppError::Generation(format!("model request failed: {}", e))
            })?;

        completion_text(&response)
    }
}

/// Pulls the first choice's message content out of a chat completion.
fn completion_text(response: &Value) -> AppResult<String> {
    response
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| AppError::Generation("model returned no message content".to_string()))
}
