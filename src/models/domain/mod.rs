pub mod quiz;
pub mod quiz_question;
pub mod quiz_record;
pub use quiz::{KeyEntities, QuizOutput};
pub use quiz_question::{Difficulty, QuizQuestion};
pub use quiz_record::{NewQuizRecord, QuizRecord, QuizSummary};
