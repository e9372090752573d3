use serde::{Deserialize, Serialize};

use super::choice::Choice;
use super::error::DomainError;

/// A quiz question with its answer choices and the code of the correct one.
///
/// Both invariants are checked once, when the question is built:
/// there is at least one choice, and the correct answer code is not blank.
/// The fields are private and there are no mutators, so a `Question` that
/// exists is always valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuestionRecord")]
pub struct Question {
    choices: Vec<Choice>,
    correct_answer_code: String,
}

impl Question {
    /// Build a question, copying `choices` into storage owned by the question.
    pub fn new(
        choices: &[Choice],
        correct_answer_code: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Self::from_owned(Some(choices.to_vec()), Some(correct_answer_code.into()))
    }

    /// Build a question from inputs that may be missing.
    ///
    /// A missing value fails the same way an invalid one does, with
    /// `choices` checked before `correct_answer_code`.
    pub fn try_from_parts(
        choices: Option<&[Choice]>,
        correct_answer_code: Option<&str>,
    ) -> Result<Self, DomainError> {
        Self::from_owned(
            choices.map(<[Choice]>::to_vec),
            correct_answer_code.map(str::to_owned),
        )
    }

    fn from_owned(
        choices: Option<Vec<Choice>>,
        correct_answer_code: Option<String>,
    ) -> Result<Self, DomainError> {
        let choices = choices.ok_or(DomainError::ChoicesNull)?;
        if choices.is_empty() {
            return Err(DomainError::ChoicesEmpty);
        }

        let correct_answer_code = correct_answer_code
            .filter(|code| !code.trim().is_empty())
            .ok_or(DomainError::CorrectAnswerCodeBlank)?;

        Ok(Self {
            choices,
            correct_answer_code,
        })
    }

    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    pub fn correct_answer_code(&self) -> &str {
        &self.correct_answer_code
    }

    /// The first choice whose code equals the correct answer code, if any.
    pub fn correct_choice(&self) -> Option<&Choice> {
        self.choices
            .iter()
            .find(|choice| choice.code == self.correct_answer_code)
    }
}

/// Wire shape of a question before validation.
#[derive(Deserialize)]
struct QuestionRecord {
    choices: Option<Vec<Choice>>,
    correct_answer_code: Option<String>,
}

impl TryFrom<QuestionRecord> for Question {
    type Error = DomainError;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        Self::from_owned(record.choices, record.correct_answer_code)
    }
}
