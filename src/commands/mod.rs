//! Command implementations: search, rank, platforms, completions

use std::io::Read;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use colored::Colorize;

use shopscout::cli::{Cli, CompletionShell};
use shopscout::config::Config;
use shopscout::decide::{self, Preference};
use shopscout::error::{Result, ScoutError};
use shopscout::pipeline::{self, SearchOutcome, SearchRequest};
use shopscout::product::{Platform, ProductRecord};
use shopscout::rank;

/// Search platforms and print recommendations
pub fn cmd_search(
    query: &str,
    max_results: Option<usize>,
    prefer: Option<String>,
    platforms: Vec<String>,
    json: bool,
) -> Result<()> {
    let query = query.trim();
    if query.is_empty() {
        return Err(ScoutError::EmptyQuery);
    }

    let config = Config::load()?;
    let preference = match prefer {
        Some(p) => p.parse()?,
        None => config.preference,
    };
    let platforms = if platforms.is_empty() {
        config.platforms.clone()
    } else {
        platforms
            .iter()
            .map(|p| p.parse())
            .collect::<Result<Vec<Platform>>>()?
    };

    let request = SearchRequest {
        query: query.to_string(),
        max_results: max_results.unwrap_or(config.max_results),
        platforms,
        preference,
    };

    if !json {
        let names: Vec<&str> = request.platforms.iter().map(|p| p.label()).collect();
        eprintln!(
            "Searching {} for \"{}\" ...",
            names.join(", "),
            request.query
        );
    }

    let outcome = pipeline::run(&request);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    print_outcome(&outcome, preference);
    Ok(())
}

/// Re-rank an already-extracted product list from a JSON file or stdin
pub fn cmd_rank(file: &str, prefer: Option<String>, top: usize, json: bool) -> Result<()> {
    let input = if file == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(file)?
    };

    let products: Vec<ProductRecord> = serde_json::from_str(&input)
        .map_err(|e| ScoutError::InvalidInput(format!("not a product record array: {}", e)))?;

    let preference: Preference = match prefer {
        Some(p) => p.parse()?,
        None => Config::load()?.preference,
    };

    let outcome = SearchOutcome {
        quality_recommendations: rank::rank_by_quality(&products, top),
        price_recommendations: rank::rank_by_price(&products, top),
        final_recommendation: decide::decide(&products, preference),
        products,
        searched_at: chrono::Utc::now(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    print_outcome(&outcome, preference);
    Ok(())
}

/// List supported platforms and whether config enables them
pub fn cmd_platforms() -> Result<()> {
    let config = Config::load()?;

    println!("\nSupported platforms:\n");
    for platform in Platform::ALL {
        let enabled = if config.platforms.contains(&platform) {
            "enabled".green()
        } else {
            "disabled".dimmed()
        };
        let note = if platform == Platform::Myntra {
            "  (fashion queries only)"
        } else {
            ""
        };
        println!(
            "  {} {:<10} [{}]{}",
            platform.icon(),
            platform.label(),
            enabled,
            note.dimmed()
        );
    }
    println!();
    Ok(())
}

/// Generate shell completions to stdout
pub fn cmd_completions(shell: CompletionShell) -> Result<()> {
    let shell = match shell {
        CompletionShell::Bash => Shell::Bash,
        CompletionShell::Zsh => Shell::Zsh,
        CompletionShell::Fish => Shell::Fish,
        CompletionShell::Powershell => Shell::PowerShell,
    };

    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "shopscout", &mut std::io::stdout());
    Ok(())
}

/// Human-readable dump of one search outcome
fn print_outcome(outcome: &SearchOutcome, preference: Preference) {
    if outcome.products.is_empty() {
        println!("\nNo products found on any platform. Try a different search term.");
        return;
    }

    println!(
        "\nFound {} product(s): {}\n",
        outcome.products.len(),
        platform_stats(&outcome.products).dimmed()
    );
    for (i, product) in outcome.products.iter().enumerate() {
        println!("  {:>2}. {}", i + 1, product_line(product));
    }

    print_persona("Quality picks", "🏆", &outcome.quality_recommendations);
    print_persona("Budget picks", "💰", &outcome.price_recommendations);

    match &outcome.final_recommendation {
        Some(pick) => {
            println!("\n{}", "Final recommendation".bold().green());
            println!("  Preference: {}", preference);
            println!("  Product:  {}", pick.title.bold());
            println!("  Price:    {}", format_price(pick.price));
            println!("  Rating:   {}", format_rating(pick.rating));
            println!("  Platform: {} {}", pick.platform.icon(), pick.platform.label());
            println!("  Link:     {}", pick.url.underline());
        }
        None => println!("\nNo suitable product to recommend."),
    }
}

fn print_persona(label: &str, marker: &str, picks: &[ProductRecord]) {
    println!("\n{} {}", marker, label.bold());
    if picks.is_empty() {
        println!("  (nothing to rank)");
        return;
    }
    for (i, product) in picks.iter().enumerate() {
        println!("  {:>2}. {}", i + 1, product_line(product));
    }
}

fn product_line(product: &ProductRecord) -> String {
    format!(
        "{} {} | {} | {} | {}",
        product.platform.icon(),
        truncate(&product.title, 50),
        format_price(product.price),
        format_rating(product.rating),
        product.platform.label().dimmed()
    )
}

fn format_price(price: f64) -> String {
    if price > 0.0 {
        format!("₹{}", price)
    } else {
        "price n/a".dimmed().to_string()
    }
}

fn format_rating(rating: f64) -> String {
    if rating > 0.0 {
        format!("⭐{}", rating)
    } else {
        "unrated".dimmed().to_string()
    }
}

/// Count records per platform, e.g. "Amazon: 5, Flipkart: 3"
fn platform_stats(products: &[ProductRecord]) -> String {
    Platform::ALL
        .iter()
        .filter_map(|platform| {
            let count = products.iter().filter(|p| p.platform == *platform).count();
            if count > 0 {
                Some(format!("{}: {}", platform.label(), count))
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Truncate text for display, breaking cleanly on a char boundary
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}...", cut)
    }
}
