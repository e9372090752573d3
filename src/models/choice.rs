use serde::{Deserialize, Serialize};

/// A single answer option of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Short identifier referenced by a question's correct answer code.
    pub code: String,
    pub text: String,
}

impl Choice {
    pub fn new(code: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            text: text.into(),
        }
    }
}
