//! Filename search command handler.

use anyhow::{Context, Result};
use regex::Regex;
use std::path::Path;

use super::ensure_notes_dir;
use crate::cli::SearchArgs;
use crate::cli::output::{Output, OutputFormat};
use crate::infra::list_entries;

/// Matches a regex against the flat directory listing.
///
/// This is a filename search, not an index query: it never consults the
/// tag index, does not recurse, and matches entry names only (not full
/// paths). Matches are printed with the notes directory prepended.
pub fn handle_search(args: &SearchArgs, notes_dir: &Path) -> Result<()> {
    ensure_notes_dir(notes_dir)?;

    let pattern = Regex::new(&args.pattern)
        .with_context(|| format!("invalid search pattern: {}", args.pattern))?;

    let entries = list_entries(notes_dir)?;
    let matches: Vec<&String> = entries
        .iter()
        .filter(|name| pattern.is_match(name))
        .collect();

    match args.format {
        OutputFormat::Human => {
            if matches.is_empty() {
                println!("No matching notes found.");
            } else {
                for name in &matches {
                    println!("{}", notes_dir.join(name).display());
                }
            }
        }
        OutputFormat::Json => {
            let paths: Vec<String> = matches
                .iter()
                .map(|name| notes_dir.join(name).to_string_lossy().to_string())
                .collect();
            let out = Output::new(paths);
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Paths => {
            for name in &matches {
                println!("{}", notes_dir.join(name).display());
            }
        }
    }

    Ok(())
}
