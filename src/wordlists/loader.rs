//! Dictionary loading
//!
//! Reads a fixed-length word list (one word per line) into a [`Dictionary`]: an
//! ordered, de-duplicated, immutable word collection that can be shared cheaply
//! between engines.

use crate::core::{Word, WordError};
use rustc_hash::FxHashSet;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Error type for dictionary loading
#[derive(Debug)]
pub enum LoadError {
    /// The source could not be opened or read
    Io { path: PathBuf, source: io::Error },
    /// A line did not hold a valid 5-letter word
    InvalidWord {
        line: usize,
        text: String,
        source: WordError,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Failed to read dictionary {}: {source}", path.display())
            }
            Self::InvalidWord { line, text, source } => {
                write!(f, "Invalid dictionary word '{text}' on line {line}: {source}")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::InvalidWord { source, .. } => Some(source),
        }
    }
}

/// An ordered set of dictionary words
///
/// Cloning is cheap: the words live behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    words: Arc<[Word]>,
}

impl Dictionary {
    /// Build a dictionary from words, keeping the first occurrence of duplicates
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut seen = FxHashSet::default();
        let words: Vec<Word> = words.into_iter().filter(|w| seen.insert(*w)).collect();
        Self {
            words: words.into(),
        }
    }

    /// Build a dictionary from string slices
    ///
    /// # Errors
    /// Returns `LoadError::InvalidWord` for the first entry that is not a valid
    /// 5-letter word. Line numbers are 1-based positions in `slice`.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_strs(&["crane", "trace", "crane"]).unwrap();
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(Dictionary::from_strs(&["crane", "toolong"]).is_err());
    /// ```
    pub fn from_strs(slice: &[&str]) -> Result<Self, LoadError> {
        let words = slice
            .iter()
            .enumerate()
            .map(|(i, text)| parse_line(i + 1, text))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(words))
    }

    /// Load a dictionary from any line-oriented reader
    ///
    /// Surrounding whitespace is trimmed and blank lines are skipped.
    ///
    /// # Errors
    /// Returns `LoadError::Io` if reading fails (reported against `origin`), or
    /// `LoadError::InvalidWord` for a line that is not a valid 5-letter word.
    pub fn from_reader<R: BufRead>(reader: R, origin: &Path) -> Result<Self, LoadError> {
        let mut words = Vec::new();

        for (i, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| LoadError::Io {
                path: origin.to_path_buf(),
                source,
            })?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            words.push(parse_line(i + 1, trimmed)?);
        }

        Ok(Self::new(words))
    }

    /// The embedded default dictionary
    ///
    /// # Panics
    /// Will not panic - the embedded list is validated by its own tests.
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_strs(super::WORDS).expect("embedded dictionary is valid")
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Shared handle to the word list
    #[must_use]
    pub fn shared(&self) -> Arc<[Word]> {
        Arc::clone(&self.words)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }
}

fn parse_line(line: usize, text: &str) -> Result<Word, LoadError> {
    Word::new(text.trim()).map_err(|source| LoadError::InvalidWord {
        line,
        text: text.to_string(),
        source,
    })
}

/// Load a dictionary from a file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be opened or read, and
/// `LoadError::InvalidWord` if any non-blank line is not a 5-letter word.
///
/// # Examples
/// ```no_run
/// use wordle_helper::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let dictionary = Dictionary::from_reader(BufReader::new(file), path)?;
    log::debug!(
        "loaded {} words from {}",
        dictionary.len(),
        path.display()
    );
    Ok(dictionary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn from_strs_converts_valid_words() {
        let dictionary = Dictionary::from_strs(&["crane", "slate", "irate"]).unwrap();

        assert_eq!(dictionary.len(), 3);
        assert_eq!(dictionary.words()[0].text(), "crane");
        assert_eq!(dictionary.words()[1].text(), "slate");
        assert_eq!(dictionary.words()[2].text(), "irate");
    }

    #[test]
    fn from_strs_rejects_wrong_length() {
        let err = Dictionary::from_strs(&["crane", "toolong", "slate"]).unwrap_err();
        assert!(matches!(
            err,
            LoadError::InvalidWord {
                line: 2,
                source: WordError::InvalidLength(7),
                ..
            }
        ));
    }

    #[test]
    fn duplicates_keep_first_occurrence() {
        let dictionary = Dictionary::from_strs(&["slate", "crane", "slate", "trace"]).unwrap();
        let texts: Vec<&str> = dictionary.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["slate", "crane", "trace"]);
    }

    #[test]
    fn from_reader_trims_and_skips_blank_lines() {
        let input = "crane\n  trace \n\n\treact\ncater\n";
        let dictionary = Dictionary::from_reader(Cursor::new(input), Path::new("test")).unwrap();

        let texts: Vec<&str> = dictionary.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "trace", "react", "cater"]);
    }

    #[test]
    fn from_reader_reports_line_number() {
        let input = "crane\n\nabc\n";
        let err = Dictionary::from_reader(Cursor::new(input), Path::new("test")).unwrap_err();
        assert!(matches!(err, LoadError::InvalidWord { line: 3, .. }));
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_from_file("/definitely/not/here/words.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn empty_dictionary() {
        let dictionary = Dictionary::from_strs(&[]).unwrap();
        assert!(dictionary.is_empty());
    }

    #[test]
    fn shared_handle_points_at_same_words() {
        let dictionary = Dictionary::from_strs(&["crane", "slate"]).unwrap();
        let shared = dictionary.shared();
        assert_eq!(&*shared, dictionary.words());
    }
}
