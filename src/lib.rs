//! # quiz-battle
//!
//! Quiz question entities with validation on construction, plus a loader for
//! JSON question banks.
//!
//! ## Usage
//!
//! ```rust
//! use quiz_battle::{Choice, DomainError, Question};
//!
//! let choices = vec![Choice::new("A", "Ownership"), Choice::new("B", "GC")];
//! let question = Question::new(&choices, "A")?;
//! assert_eq!(question.correct_answer_code(), "A");
//!
//! let err = Question::new(&choices, "   ").unwrap_err();
//! assert_eq!(err.to_string(), "CorrectAnswerCode must not be null or whitespace.");
//! # Ok::<(), DomainError>(())
//! ```

mod data;
mod models;
mod ui;

use std::io::{self, Write};
use std::path::Path;

use thiserror::Error;

pub use data::{LoadError, load_questions_from_json, load_questions_from_str};
pub use models::{Choice, DomainError, Question};

/// Error type for quiz operations.
#[derive(Error, Debug)]
pub enum QuizError {
    /// Error loading questions from file.
    #[error("Failed to load questions")]
    Load(#[from] LoadError),
    /// A question failed validation.
    #[error("Invalid question")]
    Domain(#[from] DomainError),
    /// A question number outside the bank was requested.
    #[error("Question {number} is out of range (bank has {len})")]
    IndexOutOfRange { number: usize, len: usize },
    #[error("IO error")]
    Io(#[from] io::Error),
}

/// An ordered, non-empty collection of validated questions.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Create a bank from already validated questions.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(LoadError::Empty.into());
        }
        Ok(Self { questions })
    }

    /// Load a bank from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use quiz_battle::QuestionBank;
    ///
    /// let bank = QuestionBank::from_json("questions.json").expect("Failed to load questions");
    /// println!("{} questions", bank.len());
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let questions = load_questions_from_json(path)?;
        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
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

    /// Write the bank as plain text, or only the 1-based `number` question.
    pub fn render<W: Write>(&self, out: &mut W, number: Option<usize>) -> Result<(), QuizError> {
        match number {
            None => ui::render_all(out, &self.questions)?,
            Some(number) => {
                let question = number
                    .checked_sub(1)
                    .and_then(|index| self.get(index))
                    .ok_or(QuizError::IndexOutOfRange {
                        number,
                        len: self.len(),
                    })?;
                ui::render_question(out, number, question)?;
            }
        }
        Ok(())
    }
}
