//! jot - plain-text notes with a tag index

pub mod cli;
pub mod domain;
pub mod index;
pub mod infra;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_context, handle_new, handle_query, handle_search, handle_tags},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let notes_dir = config.notes_dir(cli.dir.as_ref());
    let verbose = cli.verbose > 0;

    match &cli.command {
        Command::New(args) => handle_new(args, &notes_dir, &config, verbose),
        Command::Search(args) => handle_search(args, &notes_dir),
        Command::Tags(args) => handle_tags(args, &notes_dir),
        Command::Query(args) => handle_query(args, &notes_dir),
        Command::Context(args) => handle_context(args),
        Command::Completions(args) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "jot", &mut std::io::stdout());
            Ok(())
        }
    }
}
