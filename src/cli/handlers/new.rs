//! New note command handler.

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use std::process::Command;

use super::{ensure_notes_dir, load_index, tag_index_path};
use crate::cli::NewArgs;
use crate::cli::config::Config;
use crate::domain::NoteName;
use crate::infra::write_note;

/// Tag applied to notes created without any explicit tags.
pub const DEFAULT_TAG: &str = "misc";

/// Result of planning a new note (for testability).
#[derive(Debug)]
pub struct NewNoteResult {
    pub path: PathBuf,
    pub tags: Vec<String>,
}

/// Computes the note path and effective tag list (pure, no file writes).
///
/// Parses the note name (extension defaults to `txt`), substitutes the
/// default tag when none were given, and resolves the note path to an
/// absolute location inside the notes directory, since the tag index
/// stores absolute paths.
///
/// # Errors
///
/// Returns an error if the name is empty or contains path separators.
pub fn plan_new_note(name: &str, tags: &[String], notes_dir: &Path) -> Result<NewNoteResult> {
    let note_name = NoteName::parse(name)?;

    let tags = if tags.is_empty() {
        vec![DEFAULT_TAG.to_string()]
    } else {
        tags.to_vec()
    };

    let path = std::path::absolute(notes_dir.join(note_name.filename()))
        .with_context(|| format!("failed to resolve note path in {}", notes_dir.display()))?;

    Ok(NewNoteResult { path, tags })
}

/// Opens a file in an editor: the explicit override, or the configured one.
fn open_in_editor(path: &Path, override_cmd: Option<&str>, config: &Config) -> Result<()> {
    let editor = override_cmd
        .map(|s| s.to_string())
        .unwrap_or_else(|| config.editor());

    // Parse editor command (may include args like "code --wait")
    let parts: Vec<&str> = editor.split_whitespace().collect();
    if parts.is_empty() {
        bail!("editor command is empty");
    }

    let (cmd, args) = parts.split_first().unwrap();

    let status = Command::new(cmd)
        .args(args)
        .arg(path)
        .status()
        .with_context(|| format!("failed to launch editor '{}'", editor))?;

    if !status.success() {
        bail!("editor '{}' exited with non-zero status", editor);
    }

    Ok(())
}

pub fn handle_new(args: &NewArgs, notes_dir: &Path, config: &Config, verbose: bool) -> Result<()> {
    ensure_notes_dir(notes_dir)?;

    let planned = plan_new_note(&args.name, &args.tags, notes_dir)?;

    // Load (and reconcile) before writing the note file, so reconciliation
    // cannot prune the path we are about to record.
    let mut index = load_index(notes_dir)?;

    write_note(&planned.path, &planned.tags)
        .with_context(|| format!("failed to write note to {}", planned.path.display()))?;

    index.append(&planned.path, &planned.tags);
    index
        .save()
        .with_context(|| "failed to update tag index")?;

    println!("Created: {}", planned.path.display());
    println!("  tags: {}", planned.tags.join(", "));
    if verbose {
        println!("  index: {}", tag_index_path(notes_dir).display());
    }

    if args.edit {
        open_in_editor(&planned.path, args.editor.as_deref(), config)?;
    }

    Ok(())
}
