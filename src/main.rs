//! shopscout - multi-platform product search and recommendation CLI

use clap::Parser;

use shopscout::cli::{Cli, Commands};
use shopscout::error::Result;

mod commands;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        if let Some(hint) = e.hint() {
            eprintln!("\n{}", hint);
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            query,
            max_results,
            prefer,
            platforms,
            json,
        } => commands::cmd_search(&query, max_results, prefer, platforms, json),

        Commands::Rank {
            file,
            prefer,
            top,
            json,
        } => commands::cmd_rank(&file, prefer, top, json),

        Commands::Platforms => commands::cmd_platforms(),

        Commands::Completions { shell } => commands::cmd_completions(shell),
    }
}
