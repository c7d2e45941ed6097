//! The tag index: a persistent mapping from tag name to note file paths.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::collections::{BTreeMap, HashSet};
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Name of the index file inside the notes directory.
pub const INDEX_FILE_NAME: &str = ".tags";

/// Errors that can occur during index operations.
#[derive(Debug, Error)]
pub enum IndexError {
    /// An I/O error occurred reading or writing the index file.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The index file exists but does not contain a valid JSON mapping.
    #[error("malformed tag index at {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Replacing the index file atomically failed.
    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Encoding the mapping as JSON failed (non-UTF-8 path).
    #[error("failed to encode tag index: {0}")]
    Encode(#[source] serde_json::Error),

    /// One or more queried tags are not present in the index.
    #[error("unknown tag(s): {}", .tags.join(", "))]
    UnknownTags { tags: Vec<String> },
}

/// Result type for index operations.
pub type IndexResult<T> = Result<T, IndexError>;

/// The durable mapping from tag name to the note files carrying that tag.
///
/// Backed by a JSON object file (sorted keys, 4-space indentation) inside
/// the notes directory. Each tag maps to its paths in insertion order;
/// appends do not de-duplicate, so the same path can appear twice under a
/// tag if it was recorded twice.
///
/// Every invocation runs a fresh load/mutate/store cycle: [`TagIndex::load`]
/// reads the file (creating it when absent), prunes entries whose files no
/// longer exist, and persists the reconciled mapping back before returning.
/// Tag names are case-sensitive keys; no normalization is applied.
pub struct TagIndex {
    path: PathBuf,
    tags: BTreeMap<String, Vec<PathBuf>>,
}

impl TagIndex {
    /// Loads and reconciles the index from `path`.
    ///
    /// A missing file is treated as an empty mapping and the file is
    /// created. Every tag's path list is filtered down to the paths that
    /// still exist on disk (preserving relative order); a tag left with no
    /// paths is dropped entirely. The reconciled mapping is written back
    /// before this returns, so the on-disk file is never stale between
    /// runs; a second load with no intervening mutation is a fixed point.
    ///
    /// # Errors
    ///
    /// Returns `IndexError::Malformed` if the file is not a JSON object of
    /// string lists, or `IndexError::Io`/`IndexError::AtomicWrite` on
    /// filesystem failures.
    pub fn load(path: &Path) -> IndexResult<Self> {
        let tags = match std::fs::read_to_string(path) {
            Ok(contents) => {
                serde_json::from_str(&contents).map_err(|e| IndexError::Malformed {
                    path: path.into(),
                    source: e,
                })?
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(IndexError::Io {
                    path: path.into(),
                    source: e,
                });
            }
        };

        let mut index = Self {
            path: path.to_path_buf(),
            tags,
        };
        index.reconcile();
        index.save()?;
        Ok(index)
    }

    /// Returns the path of the backing index file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Drops paths that no longer exist, then tags with no paths left.
    fn reconcile(&mut self) {
        for paths in self.tags.values_mut() {
            paths.retain(|p| p.exists());
        }
        self.tags.retain(|_, paths| !paths.is_empty());
    }

    /// Records `path` under each of the given tags.
    ///
    /// Absent tags get a new singleton list; present tags get the path
    /// appended at the end. No de-duplication and no existence check:
    /// the caller just created the file. The change is in-memory only
    /// until [`TagIndex::save`] is called.
    pub fn append(&mut self, path: &Path, tags: &[String]) {
        for tag in tags {
            self.tags
                .entry(tag.clone())
                .or_default()
                .push(path.to_path_buf());
        }
    }

    /// Serializes the mapping to the index file, replacing it atomically.
    ///
    /// Keys are written in sorted order (structural, since the mapping is
    /// ordered) with 4-space indentation for human readability. The write
    /// goes to a temp file in the same directory followed by a rename, so
    /// a crash mid-write cannot leave a truncated index behind.
    ///
    /// # Errors
    ///
    /// Returns `IndexError::Io` or `IndexError::AtomicWrite` if the
    /// destination is not writable.
    pub fn save(&self) -> IndexResult<()> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.tags.serialize(&mut ser).map_err(IndexError::Encode)?;

        let mut temp = NamedTempFile::new_in(parent).map_err(|e| IndexError::Io {
            path: self.path.clone(),
            source: e,
        })?;
        temp.write_all(&buf).map_err(|e| IndexError::Io {
            path: self.path.clone(),
            source: e,
        })?;
        temp.persist(&self.path)
            .map_err(|e| IndexError::AtomicWrite {
                path: self.path.clone(),
                source: e.error,
            })?;

        Ok(())
    }

    /// Looks up each tag and returns its full path list, in input order.
    ///
    /// Results are intended for sequential per-tag display and are not
    /// merged.
    ///
    /// # Errors
    ///
    /// Returns `IndexError::UnknownTags` naming every tag absent from the
    /// index; no partial result is produced.
    pub fn union<'a>(&'a self, tags: &[String]) -> IndexResult<Vec<(&'a str, &'a [PathBuf])>> {
        self.require_known(tags)?;
        Ok(tags
            .iter()
            .map(|tag| {
                let (name, paths) = self
                    .tags
                    .get_key_value(tag)
                    .expect("tag presence checked above");
                (name.as_str(), paths.as_slice())
            })
            .collect())
    }

    /// Returns the paths present under every one of the given tags.
    ///
    /// Set semantics: duplicates are collapsed. The result keeps the order
    /// of the first tag's list. A single tag degenerates to that tag's
    /// full (de-duplicated) path set.
    ///
    /// # Errors
    ///
    /// Returns `IndexError::UnknownTags` naming every tag absent from the
    /// index; no partial result is produced.
    pub fn intersection(&self, tags: &[String]) -> IndexResult<Vec<PathBuf>> {
        self.require_known(tags)?;
        let Some((first, rest)) = tags.split_first() else {
            return Ok(Vec::new());
        };

        let rest_sets: Vec<HashSet<&PathBuf>> = rest
            .iter()
            .map(|tag| self.tags[tag].iter().collect())
            .collect();

        let mut seen = HashSet::new();
        let mut result = Vec::new();
        for path in &self.tags[first] {
            if seen.insert(path) && rest_sets.iter().all(|set| set.contains(path)) {
                result.push(path.clone());
            }
        }
        Ok(result)
    }

    /// Iterates over all tag names, in sorted order.
    pub fn tag_names(&self) -> impl Iterator<Item = &str> {
        self.tags.keys().map(String::as_str)
    }

    /// Iterates over `(tag, paths)` entries, in sorted tag order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[PathBuf])> {
        self.tags.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Returns the path list for a tag, if present.
    pub fn get(&self, tag: &str) -> Option<&[PathBuf]> {
        self.tags.get(tag).map(Vec::as_slice)
    }

    /// Returns the number of tags in the index.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns true if the index holds no tags.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    fn require_known(&self, tags: &[String]) -> IndexResult<()> {
        let missing: Vec<String> = tags
            .iter()
            .filter(|tag| !self.tags.contains_key(*tag))
            .cloned()
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(IndexError::UnknownTags { tags: missing })
        }
    }
}
