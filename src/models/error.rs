//! Domain validation errors.

use thiserror::Error;

const CHOICES_NULL: &str = "Choices must not be null";
const CHOICES_EMPTY: &str = "Choices must not be empty.";
const CORRECT_ANSWER_CODE_BLANK: &str = "CorrectAnswerCode must not be null or whitespace.";

/// Raised when a domain entity is constructed from invalid input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    #[error("{}", CHOICES_NULL)]
    ChoicesNull,

    #[error("{}", CHOICES_EMPTY)]
    ChoicesEmpty,

    #[error("{}", CORRECT_ANSWER_CODE_BLANK)]
    CorrectAnswerCodeBlank,
}

impl DomainError {
    /// Human-readable message, identical to the `Display` output.
    pub fn message(&self) -> &'static str {
        match self {
            DomainError::ChoicesNull => CHOICES_NULL,
            DomainError::ChoicesEmpty => CHOICES_EMPTY,
            DomainError::CorrectAnswerCodeBlank => CORRECT_ANSWER_CODE_BLANK,
        }
    }
}
