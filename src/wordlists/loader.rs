//! Word list loading utilities
//!
//! Provides functions to build a [`WordIndex`] from a file or from the embedded list.

use super::WordIndex;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Error type for dictionary loading
#[derive(Debug)]
pub enum LoadError {
    /// No file exists at the given path
    SourceNotFound(PathBuf),
    /// The file exists but could not be read as UTF-8 text
    SourceNotReadable { path: PathBuf, source: io::Error },
    /// Every line is too short or too long to be used
    NoUsableContent,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceNotFound(path) => {
                write!(f, "Unable to locate isogram file: {}", path.display())
            }
            Self::SourceNotReadable { path, source } => {
                write!(
                    f,
                    "Found isogram file but unable to read it: {} ({source})",
                    path.display()
                )
            }
            Self::NoUsableContent => write!(
                f,
                "Isogram list has no usable words: every word is too short or too long"
            ),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SourceNotReadable { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Load an index from a file with one word per line
///
/// # Errors
///
/// - [`LoadError::SourceNotFound`] if nothing exists at `path`
/// - [`LoadError::SourceNotReadable`] if it cannot be opened or is not UTF-8 text
/// - [`LoadError::NoUsableContent`] if no line has a supported length
///
/// # Examples
/// ```no_run
/// use bulls_cows::wordlists::loader::load_from_file;
///
/// let index = load_from_file("data/isograms.txt").unwrap();
/// println!("Loaded {} words", index.total_words());
/// ```
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordIndex, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::SourceNotFound(path.to_path_buf()),
        _ => LoadError::SourceNotReadable {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let index = WordIndex::from_lines(content.lines())?;
    info!(
        words = index.total_words(),
        min = index.bounds().min(),
        max = index.bounds().max(),
        "loaded isogram file"
    );
    Ok(index)
}

/// Build an index from an embedded string slice
///
/// # Errors
///
/// Returns [`LoadError::NoUsableContent`] if no entry has a supported length.
///
/// # Examples
/// ```
/// use bulls_cows::wordlists::loader::index_from_slice;
/// use bulls_cows::wordlists::ISOGRAMS;
///
/// let index = index_from_slice(ISOGRAMS).unwrap();
/// assert_eq!(index.total_words(), ISOGRAMS.len());
/// ```
pub fn index_from_slice(slice: &[&str]) -> Result<WordIndex, LoadError> {
    let index = WordIndex::from_lines(slice)?;
    info!(
        words = index.total_words(),
        min = index.bounds().min(),
        max = index.bounds().max(),
        "loaded embedded isograms"
    );
    Ok(index)
}
