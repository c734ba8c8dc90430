pub mod error;
pub mod generator;
pub mod lexicon;
pub mod record;
pub mod resources;
pub mod segment;
pub mod stopwords;
pub mod tagger;
pub mod tokenize;

use rand::Rng;

pub use generator::{McqGenerator, BLANK, DEFAULT_QUESTION_COUNT};
pub use record::{Difficulty, QuestionRecord, RecordContext};

/// A fill-in-the-blank question built from one sentence.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GeneratedQuestion {
    pub stem: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
}

impl GeneratedQuestion {
    pub fn new(stem: String, options: Vec<String>, correct_answer: String) -> Self {
        let explanation = format!(
            "This tests understanding of the word '{}' in context.",
            correct_answer
        );
        Self {
            stem,
            options,
            correct_answer,
            explanation,
        }
    }

    /// Position of the correct answer among the options.
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|o| *o == self.correct_answer)
    }
}

/// Generates questions with the process-wide linguistic resources.
///
/// Only the first `count` sentences are considered and sentences without
/// keywords are skipped, so fewer than `count` questions may come back.
pub fn generate<R: Rng + ?Sized>(text: &str, count: usize, rng: &mut R) -> Vec<GeneratedQuestion> {
    McqGenerator::new().generate(text, count, rng)
}
