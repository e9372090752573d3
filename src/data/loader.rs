use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::Question;

/// Errors raised while loading a question bank.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Malformed JSON, or a question that fails domain validation.
    #[error("failed to parse questions")]
    Parse(#[from] serde_json::Error),

    #[error("question bank must contain at least one question")]
    Empty,
}

pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading question bank");

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let questions = load_questions_from_str(&json_content).inspect_err(|err| {
        warn!(path = %path.display(), error = ?err, "rejected question bank");
    })?;
    info!(path = %path.display(), count = questions.len(), "loaded question bank");
    Ok(questions)
}

pub fn load_questions_from_str(json: &str) -> Result<Vec<Question>, LoadError> {
    let questions: Vec<Question> = serde_json::from_str(json)?;

    if questions.is_empty() {
        return Err(LoadError::Empty);
    }

    Ok(questions)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const BANK: &str = r#"[
        {
            "choices": [
                {"code": "A", "text": "&str"},
                {"code": "B", "text": "String"}
            ],
            "correct_answer_code": "B"
        },
        {
            "choices": [{"code": "T", "text": "true"}, {"code": "F", "text": "false"}],
            "correct_answer_code": "T"
        }
    ]"#;

    #[test]
    fn test_load_from_str() {
        let questions = load_questions_from_str(BANK).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].correct_answer_code(), "B");
        assert_eq!(questions[1].choices()[1].text, "false");
    }

    #[test]
    fn test_empty_bank_rejected() {
        let err = load_questions_from_str("[]").unwrap_err();
        assert!(matches!(err, LoadError::Empty));
    }

    #[test]
    fn test_invalid_question_fails_whole_bank() {
        let json = r#"[
            {"choices": [{"code": "A", "text": "Yes"}], "correct_answer_code": "A"},
            {"choices": [], "correct_answer_code": "A"}
        ]"#;
        let err = load_questions_from_str(json).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
        assert_eq!(err.to_string(), "failed to parse questions");

        let source = std::error::Error::source(&err).unwrap().to_string();
        assert!(source.starts_with("Choices must not be empty."));
    }

    #[test]
    fn test_malformed_json() {
        let err = load_questions_from_str("{ not json").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(BANK.as_bytes()).unwrap();

        let questions = load_questions_from_json(file.path()).unwrap();
        assert_eq!(questions.len(), 2);
    }

    #[test]
    fn test_bundled_bank_is_valid() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("questions.json");
        let questions = load_questions_from_json(path).unwrap();
        assert!(questions.iter().all(|q| q.correct_choice().is_some()));
    }

    #[test]
    fn test_rejected_file_keeps_domain_message() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"[{"choices": null, "correct_answer_code": "A"}]"#)
            .unwrap();

        let err = load_questions_from_json(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
        let source = std::error::Error::source(&err).unwrap().to_string();
        assert!(source.starts_with("Choices must not be null"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = load_questions_from_json(&path).unwrap_err();
        match err {
            LoadError::Io {
                path: err_path,
                source,
            } => {
                assert_eq!(err_path, path);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
