use std::collections::HashSet;

use thiserror::Error;

use crate::models::{QUESTION_COUNT, Question};

const BUILTIN_QUESTIONS: &str = include_str!("questions.json");

/// Problems found while loading the question table.
///
/// The table ships with the binary, so any of these is a build mistake and
/// is reported before the quiz starts.
#[derive(Debug, Error)]
pub enum BankError {
    #[error("question table is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("expected exactly {expected} questions, found {found}")]
    WrongCount { expected: usize, found: usize },

    #[error("question {id}: correct index {index} is outside its {options} options")]
    CorrectIndexOutOfRange { id: u32, index: usize, options: usize },

    #[error("question id {0} appears more than once")]
    DuplicateId(u32),

    #[error("question {0} has a blank prompt or option")]
    BlankText(u32),
}

/// Immutable, ordered list of quiz questions.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Load the table compiled into the binary.
    pub fn builtin() -> Result<Self, BankError> {
        Self::from_json_str(BUILTIN_QUESTIONS)
    }

    pub fn from_json_str(json: &str) -> Result<Self, BankError> {
        let questions: Vec<Question> = serde_json::from_str(json)?;
        Self::new(questions)
    }

    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        validate(&questions)?;
        Ok(Self { questions })
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

fn validate(questions: &[Question]) -> Result<(), BankError> {
    if questions.len() != QUESTION_COUNT {
        return Err(BankError::WrongCount {
            expected: QUESTION_COUNT,
            found: questions.len(),
        });
    }

    let mut seen = HashSet::with_capacity(questions.len());
    for question in questions {
        if !seen.insert(question.id) {
            return Err(BankError::DuplicateId(question.id));
        }
        if question.correct_index >= question.options.len() {
            return Err(BankError::CorrectIndexOutOfRange {
                id: question.id,
                index: question.correct_index,
                options: question.options.len(),
            });
        }
        let blank = question.prompt.trim().is_empty()
            || question.options.iter().any(|option| option.trim().is_empty());
        if blank {
            return Err(BankError::BlankText(question.id));
        }
    }

    Ok(())
}
