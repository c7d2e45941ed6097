//! Note name parsing: splitting `name[.ext]` into stem and extension.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Default extension for notes created without an explicit one.
pub const DEFAULT_EXTENSION: &str = "txt";

/// A parsed note name: a stem plus a file extension.
///
/// The positional `name` argument to `jot new` may carry an extension
/// (`todo.md`). The split is deliberately conservative: only a name with
/// exactly one interior dot, with non-empty text on both sides, is treated
/// as `stem.ext`. Everything else (no dot, several dots, a leading or
/// trailing dot) keeps the whole argument as the stem and falls back to
/// [`DEFAULT_EXTENSION`]. The fallback is silent by contract; the only hard
/// failure is a path separator in the name, since notes always live directly
/// inside the notes directory.
///
/// # Examples
///
/// ```
/// use jot::domain::NoteName;
///
/// let name: NoteName = "groceries.md".parse().unwrap();
/// assert_eq!(name.filename(), "groceries.md");
///
/// let name: NoteName = "v1.2.plan".parse().unwrap();
/// assert_eq!(name.filename(), "v1.2.plan.txt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteName {
    stem: String,
    extension: String,
}

/// Error returned when parsing an invalid note name.
#[derive(Debug, Clone, Error)]
pub enum ParseNoteNameError {
    #[error("note name cannot be empty")]
    Empty,

    #[error("note name cannot contain path separators: '{0}'")]
    PathSeparator(String),
}

impl NoteName {
    /// Parses a note name from the raw CLI argument.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteNameError` if the name is empty or contains a path
    /// separator. An unrecognized extension split is not an error; see the
    /// type-level docs for the fallback rule.
    pub fn parse(raw: &str) -> Result<Self, ParseNoteNameError> {
        if raw.is_empty() {
            return Err(ParseNoteNameError::Empty);
        }
        if raw.chars().any(std::path::is_separator) {
            return Err(ParseNoteNameError::PathSeparator(raw.to_string()));
        }

        let (stem, extension) = match split_extension(raw) {
            Some((stem, ext)) => (stem.to_string(), ext.to_string()),
            None => (raw.to_string(), DEFAULT_EXTENSION.to_string()),
        };

        Ok(Self { stem, extension })
    }

    /// Returns the stem (the name without its extension).
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Returns the extension (never empty; defaults to `txt`).
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Returns the full filename, `<stem>.<extension>`.
    pub fn filename(&self) -> String {
        format!("{}.{}", self.stem, self.extension)
    }
}

/// Splits `raw` into `(stem, ext)` iff it contains exactly one dot with
/// non-empty text on both sides. Returns `None` otherwise.
fn split_extension(raw: &str) -> Option<(&str, &str)> {
    let mut dots = raw.match_indices('.');
    let (pos, _) = dots.next()?;
    if dots.next().is_some() {
        return None;
    }
    let (stem, ext) = (&raw[..pos], &raw[pos + 1..]);
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some((stem, ext))
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.stem, self.extension)
    }
}

impl FromStr for NoteName {
    type Err = ParseNoteNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
