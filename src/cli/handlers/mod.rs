//! Command handlers for the CLI.

mod context;
mod new;
mod search;
mod tags;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::index::{INDEX_FILE_NAME, TagIndex};

// Re-export public items
pub use context::handle_context;
pub use new::{DEFAULT_TAG, NewNoteResult, handle_new, plan_new_note};
pub use search::handle_search;
pub use tags::{handle_query, handle_tags};

// ===========================================
// Shared Utilities
// ===========================================

/// Returns the tag index path for a notes directory.
pub(crate) fn tag_index_path(notes_dir: &Path) -> PathBuf {
    notes_dir.join(INDEX_FILE_NAME)
}

/// Creates the notes directory if it doesn't exist yet.
pub(crate) fn ensure_notes_dir(notes_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(notes_dir).with_context(|| {
        format!(
            "failed to create notes directory: {}",
            notes_dir.display()
        )
    })
}

/// Loads and reconciles the tag index for a notes directory.
pub(crate) fn load_index(notes_dir: &Path) -> Result<TagIndex> {
    let path = tag_index_path(notes_dir);
    TagIndex::load(&path)
        .with_context(|| format!("failed to load tag index at {}", path.display()))
}
