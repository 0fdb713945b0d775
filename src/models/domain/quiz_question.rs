use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate, JsonSchema)]
pub struct QuizQuestion {
    /// The text of the multiple-choice question.
    pub question: String,
    /// Exactly four distinct possible answers.
    #[validate(length(equal = 4))]
    pub options: Vec<String>,
    /// The correct answer, must be one of the options.
    pub answer: String,
    /// The difficulty level of the question.
    pub difficulty: Difficulty,
    /// A short explanation for the correct answer.
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Copy, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl QuizQuestion {
    /// Checks the invariants the length validators cannot express:
    /// options are distinct and the answer is one of them.
    pub fn check_answer(&self) -> Result<(), String> {
        let distinct: HashSet<&str> = self.options.iter().map(String::as_str).collect();
        if distinct.len() != self.options.len() {
            return Err(format!(
                "question '{}' has duplicate options",
                self.question
            ));
        }

        if !self.options.iter().any(|option| option == &self.answer) {
            return Err(format!(
                "answer '{}' of question '{}' is not one of its options",
                self.answer, self.question
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(options: &[&str], answer: &str) -> QuizQuestion {
        QuizQuestion {
            question: "Who proposed the Turing test?".to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            answer: answer.to_string(),
            difficulty: Difficulty::Easy,
            explanation: "Stated in the opening paragraph.".to_string(),
        }
    }

    #[test]
    fn difficulty_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Difficulty::Medium).unwrap(), "\"medium\"");
        let parsed: Difficulty = serde_json::from_str("\"hard\"").unwrap();
        assert_eq!(parsed, Difficulty::Hard);
    }

    #[test]
    fn difficulty_rejects_unknown_level() {
        assert!(serde_json::from_str::<Difficulty>("\"expert\"").is_err());
        assert!(serde_json::from_str::<Difficulty>("\"Easy\"").is_err());
    }

    #[test]
    fn answer_must_be_an_option() {
        let ok = question(&["Turing", "Church", "Gödel", "von Neumann"], "Turing");
        assert!(ok.check_answer().is_ok());
        assert!(ok.validate().is_ok());

        let missing = question(&["Turing", "Church", "Gödel", "von Neumann"], "Babbage");
        assert!(missing.check_answer().is_err());
    }

    #[test]
    fn options_must_be_distinct() {
        let dup = question(&["Turing", "Turing", "Gödel", "von Neumann"], "Turing");
        let err = dup.check_answer().unwrap_err();
        assert!(err.contains("duplicate"));
    }

    #[test]
    fn exactly_four_options_required() {
        let three = question(&["Turing", "Church", "Gödel"], "Turing");
        assert!(three.validate().is_err());

        let five = question(&["Turing", "Church", "Gödel", "von Neumann", "Babbage"], "Turing");
        assert!(five.validate().is_err());
    }
}
