use crate::grid::Word;
use rustc_hash::FxHashSet;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),
    #[error("word list is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("word list must be a JSON array of strings or an object keyed by word")]
    Format,
}

/// One word per line. Surrounding whitespace is trimmed and blank lines are skipped; duplicates are
/// kept.
pub fn parse_lines(contents: &str) -> Vec<Word> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Word::from)
        .collect()
}

/// Either `["word", ...]` or `{"word": <anything>, ...}`.
pub fn parse_json(contents: &str) -> Result<Vec<Word>, VocabularyError> {
    let json: serde_json::Value = serde_json::from_str(contents)?;

    let words: Vec<&str> = match &json {
        serde_json::Value::Array(values) => values
            .iter()
            .map(|value| value.as_str().ok_or(VocabularyError::Format))
            .collect::<Result<_, _>>()?,
        serde_json::Value::Object(obj) => obj.keys().map(String::as_str).collect(),
        _ => return Err(VocabularyError::Format),
    };

    Ok(words
        .into_iter()
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(Word::from)
        .collect())
}

/// Loads a word list, reading `.json` files as JSON and anything else as plain lines.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, VocabularyError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;

    let words = match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => parse_json(&contents)?,
        _ => parse_lines(&contents),
    };

    let distinct: FxHashSet<&Word> = words.iter().collect();
    info!(
        path = %path.display(),
        words = words.len(),
        distinct = distinct.len(),
        "loaded vocabulary"
    );

    Ok(words)
}
