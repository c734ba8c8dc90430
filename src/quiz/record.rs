use serde::{Deserialize, Serialize};

use crate::quiz::error::RecordError;
use crate::quiz::GeneratedQuestion;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionLetter {
    A,
    B,
    C,
    D,
}

impl OptionLetter {
    const ALL: [OptionLetter; 4] = [OptionLetter::A, OptionLetter::B, OptionLetter::C, OptionLetter::D];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Metadata the caller attaches when a generated question is accepted into
/// a question bank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordContext {
    pub subject: Option<String>,
    pub difficulty: Difficulty,
}

/// A question in the four-option layout question banks store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionRecord {
    pub question_text: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub correct_option: OptionLetter,
    pub correct_answer: String,
    pub explanation: String,
    pub difficulty: Difficulty,
    pub subject: Option<String>,
    pub question_type: &'static str,
}

impl QuestionRecord {
    pub fn from_question(
        question: &GeneratedQuestion,
        context: &RecordContext,
    ) -> Result<Self, RecordError> {
        let [a, b, c, d] = <[String; 4]>::try_from(question.options.clone())
            .map_err(|options| RecordError::OptionCount(options.len()))?;
        let correct_option = question
            .correct_index()
            .and_then(OptionLetter::from_index)
            .ok_or_else(|| RecordError::MissingAnswer(question.correct_answer.clone()))?;

        Ok(Self {
            question_text: question.stem.clone(),
            option_a: a,
            option_b: b,
            option_c: c,
            option_d: d,
            correct_option,
            correct_answer: question.correct_answer.clone(),
            explanation: question.explanation.clone(),
            difficulty: context.difficulty,
            subject: context.subject.clone(),
            question_type: "mcq",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(options: &[&str], answer: &str) -> GeneratedQuestion {
        GeneratedQuestion::new(
            "Dogs are ______ animals.".to_string(),
            options.iter().map(|o| o.to_string()).collect(),
            answer.to_string(),
        )
    }

    #[test]
    fn letter_points_at_the_correct_option() {
        let context = RecordContext {
            subject: Some("Biology".to_string()),
            difficulty: Difficulty::Hard,
        };
        let record = QuestionRecord::from_question(
            &question(&["Dogs", "animals", "loyal", "animals"], "loyal"),
            &context,
        )
        .unwrap();

        assert_eq!(record.correct_option, OptionLetter::C);
        assert_eq!(record.option_c, "loyal");
        assert_eq!(record.subject.as_deref(), Some("Biology"));
        assert_eq!(record.question_type, "mcq");
    }

    #[test]
    fn serialises_difficulty_in_lowercase() {
        let record = QuestionRecord::from_question(
            &question(&["loyal", "Dogs", "animals", "Dogs"], "loyal"),
            &RecordContext::default(),
        )
        .unwrap();
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["difficulty"], "medium");
        assert_eq!(json["correct_option"], "A");
        assert_eq!(json["subject"], serde_json::Value::Null);
    }

    #[test]
    fn rejects_malformed_questions() {
        let context = RecordContext::default();
        assert_eq!(
            QuestionRecord::from_question(&question(&["loyal", "Dogs"], "loyal"), &context),
            Err(RecordError::OptionCount(2))
        );
        assert_eq!(
            QuestionRecord::from_question(&question(&["a", "b", "c", "d"], "loyal"), &context),
            Err(RecordError::MissingAnswer("loyal".to_string()))
        );
    }
}
