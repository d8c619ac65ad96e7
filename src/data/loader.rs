use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

use crate::models::QuizConfig;

/// Failure to read a quiz definition from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load a quiz definition from a JSON file.
///
/// Only the file format is checked here; row and answer cardinalities are
/// validated when the quiz is built.
pub fn load_quiz_config<P: AsRef<Path>>(path: P) -> Result<QuizConfig, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config = parse_quiz_config(&json_content, path)?;
    info!(
        "loaded quiz from {}: {} rows",
        path.display(),
        config.options.len()
    );
    Ok(config)
}

/// Parse a quiz definition; `path` is only used in error messages.
pub fn parse_quiz_config(json: &str, path: &Path) -> Result<QuizConfig, LoadError> {
    serde_json::from_str(json).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::process;

    use super::*;

    const SAMPLE: &str = r#"{
        "question": "Pick the vowels",
        "options": [
            [{"label": "A", "value": "a"}, {"label": "B", "value": "b"}],
            [{"label": "C", "value": "c"}, {"label": "E", "value": "e"}]
        ],
        "answers": ["a", "e"]
    }"#;

    #[test]
    fn test_load_from_file() {
        let path = env::temp_dir().join(format!("switch-quiz-{}.json", process::id()));
        fs::write(&path, SAMPLE).unwrap();

        let config = load_quiz_config(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.question, "Pick the vowels");
        assert_eq!(config.options.len(), 2);
        assert_eq!(config.options[1][1].label, "E");
        assert_eq!(config.answers, vec!["a".to_string(), "e".to_string()]);
    }

    #[test]
    fn test_missing_file() {
        let err = load_quiz_config("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn test_parse_error_names_path() {
        let err = parse_quiz_config(r#"{"question": "Q"}"#, Path::new("quiz.json")).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
        assert!(err.to_string().starts_with("Failed to parse quiz.json"));
    }
}
