//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// jot - plain-text notes with a tag index
#[derive(Parser, Debug)]
#[command(name = "jot", version, about, long_about = None)]
pub struct Cli {
    /// Notes directory (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new note
    New(NewArgs),

    /// Search note filenames with a regex
    Search(SearchArgs),

    /// List all tags in the index
    Tags(TagsArgs),

    /// Look up notes by tag
    Query(QueryArgs),

    /// Search note contents (not implemented)
    Context(ContextArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `new` command
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Note name, optionally with an extension (defaults to .txt)
    pub name: String,

    /// Tag for the note (repeatable, or comma-separated; defaults to 'misc')
    #[arg(short, long = "tag", value_delimiter = ',', action = ArgAction::Append)]
    pub tags: Vec<String>,

    /// Open the note in your editor after creation
    #[arg(short, long)]
    pub edit: bool,

    /// Editor command to use with --edit (overrides config and $EDITOR)
    #[arg(long)]
    pub editor: Option<String>,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Regular expression matched against entry names in the notes directory
    pub pattern: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `tags` command
#[derive(Parser, Debug)]
pub struct TagsArgs {
    /// Show note counts for each tag
    #[arg(long)]
    pub counts: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `query` command
#[derive(Parser, Debug)]
pub struct QueryArgs {
    /// Tags to look up
    #[arg(required = true)]
    pub tags: Vec<String>,

    /// Only show notes carrying every given tag (intersection)
    #[arg(short, long)]
    pub all: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `context` command
#[derive(Parser, Debug)]
pub struct ContextArgs {
    /// Search term (unused; context search is not implemented)
    pub query: String,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
