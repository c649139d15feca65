use std::path::Path;

use lightning_core::StoreError;
use lightning_core::fs::read_json;
use serde_json::Value;

const REQUIRED_KEYS: [&str; 4] = ["version", "metadata", "statistics", "words"];
const REQUIRED_WORD_KEYS: [&str; 3] = ["rank", "pos", "frequency"];

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Missing required key: {0}")]
    MissingKey(&'static str),

    #[error("No words found in dictionary")]
    NoWords,

    #[error("Word {word:?} missing required key: {key}")]
    MissingWordKey { word: String, key: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationSummary {
    pub total_words: usize,
}

/// Structural check of a written dictionary file
pub fn validate_output(path: &Path) -> Result<ValidationSummary, ValidationError> {
    let data: Value = read_json(path)?;

    for key in REQUIRED_KEYS {
        if data.get(key).is_none() {
            return Err(ValidationError::MissingKey(key));
        }
    }

    let words = data["words"]
        .as_object()
        .filter(|w| !w.is_empty())
        .ok_or(ValidationError::NoWords)?;

    if let Some((word, sample)) = words.iter().next() {
        for key in REQUIRED_WORD_KEYS {
            if sample.get(key).is_none() {
                return Err(ValidationError::MissingWordKey {
                    word: word.clone(),
                    key,
                });
            }
        }
    }

    tracing::info!("JSON validation passed: {} words", words.len());
    Ok(ValidationSummary {
        total_words: words.len(),
    })
}
