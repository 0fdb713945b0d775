use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::quiz_question::QuizQuestion;

/// The complete structure the model must return for an article.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate, JsonSchema)]
pub struct QuizOutput {
    /// The title of the Wikipedia article.
    pub title: String,
    /// A concise summary of the article (max 3 sentences).
    pub summary: String,
    pub key_entities: KeyEntities,
    /// The main section headings used for content analysis.
    pub sections: Vec<String>,
    /// Between 5 and 10 generated quiz questions.
    #[validate(length(min = 5, max = 10), nested)]
    pub quiz: Vec<QuizQuestion>,
    /// Suggested Wikipedia topics for further reading based on the article.
    pub related_topics: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct KeyEntities {
    /// Important people mentioned.
    pub people: Vec<String>,
    /// Organizations or institutions.
    pub organizations: Vec<String>,
    /// Relevant locations.
    pub locations: Vec<String>,
}

impl QuizOutput {
    /// Field-level validation plus the per-question answer invariants.
    pub fn check(&self) -> Result<(), String> {
        self.validate().map_err(|e| e.to_string())?;
        self.quiz.iter().try_for_each(QuizQuestion::check_answer)
    }
}
