//! Content loading
//!
//! The [`ContentSource`] trait is the boundary a session is started from. The
//! JSON loader reads either a single wordle file or a directory of
//! `<id>.json` files.

use super::WordleContent;
use crate::error::ContentError;
use std::fs;
use std::path::{Path, PathBuf};

/// Where wordle content comes from
pub trait ContentSource {
    /// Fetch the content for `wordle_id`
    ///
    /// # Errors
    /// Returns a [`ContentError`] if the wordle does not exist or cannot be read.
    fn fetch_wordle_content(&self, wordle_id: u64) -> Result<WordleContent, ContentError>;
}

/// Load a wordle from a JSON file
///
/// The file is parsed but not validated; validation happens when a session
/// starts.
///
/// # Errors
///
/// Returns an I/O or parse error.
///
/// # Examples
/// ```no_run
/// use quizdle::content::load_from_file;
///
/// let content = load_from_file("data/demo_wordle.json").unwrap();
/// println!("Loaded {} words", content.words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordleContent, ContentError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// JSON files on disk
#[derive(Debug, Clone)]
pub struct JsonContentSource {
    root: PathBuf,
}

impl JsonContentSource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, wordle_id: u64) -> PathBuf {
        if self.root.is_dir() {
            self.root.join(format!("{wordle_id}.json"))
        } else {
            self.root.clone()
        }
    }
}

impl ContentSource for JsonContentSource {
    fn fetch_wordle_content(&self, wordle_id: u64) -> Result<WordleContent, ContentError> {
        let path = self.path_for(wordle_id);
        if !path.exists() {
            return Err(ContentError::NotFound(wordle_id));
        }

        tracing::debug!(path = %path.display(), wordle_id, "loading wordle content");
        let mut content = load_from_file(&path)?;

        // A single file may omit its id; it is addressed by path
        if content.id == 0 {
            content.id = wordle_id;
        }
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "name": "Greetings",
        "words": [{"word": "hola"}],
        "questions": [{"prompt": "1+1?", "options": ["1", "2"], "correct_answers": ["2"]}]
    }"#;

    #[test]
    fn loads_single_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let source = JsonContentSource::new(file.path());
        let content = source.fetch_wordle_content(42).unwrap();

        assert_eq!(content.id, 42);
        assert_eq!(content.name, "Greetings");
        assert_eq!(content.words.len(), 1);
    }

    #[test]
    fn loads_by_id_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("3.json"), SAMPLE).unwrap();

        let source = JsonContentSource::new(dir.path());
        assert_eq!(source.fetch_wordle_content(3).unwrap().id, 3);
        assert!(matches!(
            source.fetch_wordle_content(4),
            Err(ContentError::NotFound(4))
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("1.json"), "{ not json").unwrap();

        let source = JsonContentSource::new(dir.path());
        assert!(matches!(
            source.fetch_wordle_content(1),
            Err(ContentError::Parse(_))
        ));
    }
}
