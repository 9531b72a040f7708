use clap::{Parser, Subcommand, ValueEnum};

/// Shell types for completion generation
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

#[derive(Parser)]
#[command(name = "shopscout")]
#[command(author, version, about = "Multi-platform product search with persona-based recommendations", long_about = None)]
#[command(after_help = r#"Examples:
  shopscout search "wireless earbuds"                 Search the default platforms
  shopscout search "running shoes" --prefer quality   Side with the quality persona
  shopscout search "laptop" -n 5 --json               JSON output for scripting
  shopscout rank products.json --prefer price         Re-rank saved results offline
  shopscout platforms                                 List supported platforms
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search platforms and recommend a single product
    #[command(after_help = r#"Examples:
  shopscout search "wireless earbuds"
  shopscout search "running shoes" --prefer quality     # Myntra joins fashion queries
  shopscout search "usb hub" --platforms amazon
  shopscout search "laptop" --max-results 5 --json
"#)]
    Search {
        /// What to look for
        #[arg(value_name = "QUERY")]
        query: String,

        /// Maximum listings to take per platform
        #[arg(long, short = 'n')]
        max_results: Option<usize>,

        /// Persona to side with: quality, price, or neutral
        #[arg(long)]
        prefer: Option<String>,

        /// Platforms to search (amazon, flipkart, myntra; repeatable or
        /// comma-separated)
        #[arg(long, value_delimiter = ',')]
        platforms: Vec<String>,

        /// Output the full outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Re-rank an already-extracted product list from a JSON file
    #[command(after_help = r#"Examples:
  shopscout search "earbuds" --json > results.json
  jq '.products' results.json | shopscout rank - --prefer price
  shopscout rank products.json --top 5
"#)]
    Rank {
        /// JSON file holding an array of product records, or - for stdin
        #[arg(value_name = "FILE")]
        file: String,

        /// Persona to side with: quality, price, or neutral
        #[arg(long)]
        prefer: Option<String>,

        /// How many entries to show per persona
        #[arg(long, default_value_t = 3)]
        top: usize,

        /// Output the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// List supported platforms
    Platforms,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}
