//! Tag listing and tag query command handlers.

use anyhow::Result;
use std::path::{Path, PathBuf};

use super::{ensure_notes_dir, load_index};
use crate::cli::output::{Output, OutputFormat, TagListing, TagPathsListing};
use crate::cli::{QueryArgs, TagsArgs};
use crate::infra::HEADER_SEPARATOR;

pub fn handle_tags(args: &TagsArgs, notes_dir: &Path) -> Result<()> {
    ensure_notes_dir(notes_dir)?;
    let index = load_index(notes_dir)?;

    match args.format {
        OutputFormat::Human => {
            if index.is_empty() {
                println!("No tags found.");
            } else {
                for (name, paths) in index.iter() {
                    if args.counts {
                        println!("{} ({})", name, paths.len());
                    } else {
                        println!("{}", name);
                    }
                }
            }
        }
        OutputFormat::Json => {
            let listings: Vec<TagListing> = index
                .iter()
                .map(|(name, paths)| TagListing {
                    name: name.to_string(),
                    count: args.counts.then_some(paths.len()),
                })
                .collect();
            let out = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Paths => {
            for name in index.tag_names() {
                println!("{}", name);
            }
        }
    }

    Ok(())
}

pub fn handle_query(args: &QueryArgs, notes_dir: &Path) -> Result<()> {
    ensure_notes_dir(notes_dir)?;
    let index = load_index(notes_dir)?;

    if args.all {
        // Intersection: notes carrying every given tag.
        let paths = index.intersection(&args.tags)?;
        match args.format {
            OutputFormat::Human => {
                let header: Vec<String> = args.tags.iter().map(|t| title_case(t)).collect();
                println!("{}", header.join(", "));
                println!();
                for path in &paths {
                    println!("\t{}", path.display());
                }
                println!();
                println!("{}", HEADER_SEPARATOR);
            }
            OutputFormat::Json => {
                let out = Output::new(path_strings(&paths));
                println!("{}", serde_json::to_string_pretty(&out)?);
            }
            OutputFormat::Paths => {
                for path in &paths {
                    println!("{}", path.display());
                }
            }
        }
    } else {
        // Union: each tag's notes, displayed per tag in input order.
        let results = index.union(&args.tags)?;
        match args.format {
            OutputFormat::Human => {
                for (tag, paths) in &results {
                    println!("{}", title_case(tag));
                    println!();
                    for path in *paths {
                        println!("\t{}", path.display());
                    }
                    println!();
                    println!("{}", HEADER_SEPARATOR);
                }
            }
            OutputFormat::Json => {
                let listings: Vec<TagPathsListing> = results
                    .iter()
                    .map(|(tag, paths)| TagPathsListing {
                        tag: tag.to_string(),
                        paths: path_strings(paths),
                    })
                    .collect();
                let out = Output::new(listings);
                println!("{}", serde_json::to_string_pretty(&out)?);
            }
            OutputFormat::Paths => {
                for (_, paths) in &results {
                    for path in *paths {
                        println!("{}", path.display());
                    }
                }
            }
        }
    }

    Ok(())
}

fn path_strings(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.to_string_lossy().to_string())
        .collect()
}

/// Title-cases a tag for display headers: the first letter of every
/// alphabetic run is uppercased, the rest lowercased. Stored keys are
/// untouched; this is display-only.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
