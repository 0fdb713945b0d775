#[cfg(test)]
pub mod fixtures {
    use chrono::{TimeZone, Utc};

    use crate::models::domain::{
        Difficulty, KeyEntities, QuizOutput, QuizQuestion, QuizRecord,
    };

    /// A valid question whose text and answer are tagged with `index`.
    pub fn sample_question(index: usize) -> QuizQuestion {
        let difficulty = match index % 3 {
            0 => Difficulty::Easy,
            1 => Difficulty::Medium,
            _ => Difficulty::Hard,
        };

        QuizQuestion {
            question: format!("Question {} about Alan Turing?", index + 1),
            options: vec![
                format!("Answer {index}"),
                "Cambridge".to_string(),
                "Princeton".to_string(),
                "Bletchley Park".to_string(),
            ],
            answer: format!("Answer {index}"),
            difficulty,
            explanation: "Stated in the article text.".to_string(),
        }
    }

    /// A valid five-question quiz.
    pub fn sample_quiz_output() -> QuizOutput {
        QuizOutput {
            title: "Alan Turing".to_string(),
            summary: "Alan Turing was an English mathematician. He formalised computation."
                .to_string(),
            key_entities: KeyEntities {
                people: vec!["Alan Turing".to_string()],
                organizations: vec!["University of Cambridge".to_string()],
                locations: vec!["Bletchley Park".to_string()],
            },
            sections: vec!["Early life".to_string(), "Career".to_string()],
            quiz: (0..5).map(sample_question).collect(),
            related_topics: vec!["Turing machine".to_string(), "Enigma machine".to_string()],
        }
    }

    pub fn sample_record(id: i64) -> QuizRecord {
        QuizRecord {
            id,
            url: "https://en.wikipedia.org/wiki/Alan_Turing".to_string(),
            title: "Alan Turing".to_string(),
            date_generated: Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap(),
            full_quiz_data: serde_json::to_string(&sample_quiz_output()).unwrap(),
            scraped_content: Some("Alan Turing was a mathematician.".to_string()),
        }
    }

    /// Minimal Wikipedia-shaped article page.
    pub fn wiki_html(title: &str, body: &str) -> String {
        format!(
            r#"<html><head><title>{title} - Wikipedia</title></head><body>
<h1 id="firstHeading"><span class="mw-page-title-main">{title}</span></h1>
<div id="mw-content-text"><div class="mw-parser-output">{body}</div></div>
</body></html>"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_sample_quiz_is_valid() {
        let output = sample_quiz_output();
        assert_eq!(output.quiz.len(), 5);
        assert!(output.check().is_ok());
    }

    #[test]
    fn test_fixtures_sample_record_round_trips_payload() {
        let record = sample_record(3);
        let parsed: crate::models::domain::QuizOutput =
            serde_json::from_str(&record.full_quiz_data).unwrap();
        assert_eq!(parsed, sample_quiz_output());
    }

    #[test]
    fn test_fixtures_wiki_html_contains_regions() {
        let html = wiki_html("Turing Award", "<p>Text.</p>");
        assert!(html.contains("firstHeading"));
        assert!(html.contains("mw-content-text"));
        assert!(html.contains("mw-parser-output"));
    }
}
