//! Command-line client for OxiiLink-style paste and link-shortening services.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! oxii shorten https://example.com/some/long/path
//!
//! # Create a paste from a file (or stdin when no file is given)
//! oxii paste new notes.txt --filetype txt
//! cat main.rs | oxii paste new --filetype rs
//!
//! # Fetch a paste back
//! oxii paste get abc.rs
//!
//! # Usage counters for a short link or bare code
//! oxii info https://oxii.link/s/abc
//!
//! # Prompt loop with an append-only results table
//! oxii interactive
//! ```
//!
//! # Environment Variables
//!
//! - `OXII_BASE_URL` (required unless `--base-url` is given): service root
//! - `OXII_TIMEOUT_SECS`, `OXII_PASTE_PATH`, `OXII_SHORTEN_PATH`: optional
//! - `RUST_LOG`: log filter (default: `warn`)
//!
//! A `.env` file in the working directory is honored.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Input, Select};
use tracing_subscriber::EnvFilter;

use oxii::prelude::*;

/// Command-line client for OxiiLink-style services.
#[derive(Parser)]
#[command(name = "oxii")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Service base URL; overrides OXII_BASE_URL and uses default endpoint
    /// paths
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Emit machine-readable JSON instead of formatted output
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Shorten a URL
    Shorten {
        /// The URL to shorten
        url: String,
    },

    /// Create and fetch pastes
    Paste {
        #[command(subcommand)]
        action: PasteAction,
    },

    /// Look up usage counters for a short link or bare code
    Info {
        /// A short link on the configured service, or a bare `code`/`code.ext`
        target: String,
    },

    /// Interactive prompt loop
    Interactive,
}

/// Paste subcommands.
#[derive(Subcommand)]
enum PasteAction {
    /// Create a paste from a file, or stdin when no file is given
    New {
        /// File to paste
        file: Option<PathBuf>,

        /// Display extension appended to the returned link (letters only)
        #[arg(short, long, default_value = "")]
        filetype: String,
    },

    /// Fetch a paste by code (`abc` or `abc.rs`)
    Get {
        /// The paste reference
        reference: String,
    },
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file, ignoring any errors
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    if let Err(err) = run().await {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.base_url {
        Some(base_url) => Config::for_base_url(base_url)?,
        None => Config::from_env()?,
    };
    let client = Arc::new(ApiClient::new(config)?);

    match cli.command {
        Commands::Shorten { url } => shorten(client, &url, cli.json).await,
        Commands::Paste { action } => match action {
            PasteAction::New { file, filetype } => {
                paste_new(client, file, &filetype, cli.json).await
            }
            PasteAction::Get { reference } => paste_get(client, &reference).await,
        },
        Commands::Info { target } => info(client, &target, cli.json).await,
        Commands::Interactive => interactive(client).await,
    }
}

/// Shortens one URL and prints the resulting short link.
async fn shorten(client: Arc<ApiClient>, url: &str, json: bool) -> Result<()> {
    let service = ShortenService::new(client);
    let link = service.shorten(url).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&link)?);
    } else {
        println!("{}", "✅ Link shortened".green().bold());
        println!("  {}", link.short_url.bright_yellow().bold());
    }

    Ok(())
}

/// Creates a paste from a file or stdin and prints its location.
async fn paste_new(
    client: Arc<ApiClient>,
    file: Option<PathBuf>,
    filetype: &str,
    json: bool,
) -> Result<()> {
    let body = match &file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => io::read_to_string(io::stdin()).context("failed to read stdin")?,
    };

    let service = PasteService::new(client);
    let created = service.create(&body, filetype).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&created)?);
    } else {
        println!("{}", "✅ Paste created".green().bold());
        println!("  {}", created.display_value().bright_yellow().bold());
    }

    Ok(())
}

/// Fetches a paste body and writes it to stdout verbatim.
async fn paste_get(client: Arc<ApiClient>, reference: &str) -> Result<()> {
    let service = PasteService::new(client);
    let body = service.read(reference).await?;

    print!("{body}");
    if !body.ends_with('\n') {
        println!();
    }

    Ok(())
}

/// Looks up usage counters for one target and renders a single-row table.
async fn info(client: Arc<ApiClient>, target: &str, json: bool) -> Result<()> {
    let service = AnalyticsService::new(client);
    let report = service.lookup(target).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report_table(std::slice::from_ref(&report));
    }

    Ok(())
}

/// Prompt loop: pick an operation, enter its input, see the result land.
/// Lookups accumulate into an append-only results table.
async fn interactive(client: Arc<ApiClient>) -> Result<()> {
    let shortener = ShortenService::new(Arc::clone(&client));
    let pastes = PasteService::new(Arc::clone(&client));
    let analytics = AnalyticsService::new(client);

    println!("{}", "🔗 Oxii interactive".bright_blue().bold());
    println!();

    let mut reports: Vec<LinkReport> = Vec::new();

    loop {
        let choice = Select::new()
            .with_prompt("Operation")
            .items(&["Shorten a URL", "Look up a link", "Read a paste", "Quit"])
            .default(0)
            .interact()?;

        match choice {
            0 => {
                let url: String = Input::new().with_prompt("Link to shorten").interact_text()?;
                match shortener.shorten(&url).await {
                    Ok(link) => println!("  {}", link.short_url.bright_yellow().bold()),
                    Err(err) => report_error(err),
                }
            }
            1 => {
                let target: String = Input::new()
                    .with_prompt("Link to look up")
                    .interact_text()?;
                match analytics.lookup(&target).await {
                    Ok(report) => {
                        reports.push(report);
                        print_report_table(&reports);
                    }
                    Err(err) => report_error(err),
                }
            }
            2 => {
                let reference: String = Input::new().with_prompt("Paste code").interact_text()?;
                match pastes.read(&reference).await {
                    Ok(body) => println!("{body}"),
                    Err(err) => report_error(err),
                }
            }
            _ => break,
        }

        println!();
    }

    Ok(())
}

/// Dropped submissions stay silent; every other failure is shown and the
/// loop returns to idle.
fn report_error(err: ClientError) {
    match err {
        ClientError::Busy => tracing::debug!("submission dropped: operation in flight"),
        err => println!("  {}", err.to_string().red()),
    }
}

/// Renders lookup rows: link, views, scrapes, creation time.
fn print_report_table(reports: &[LinkReport]) {
    println!(
        "  {:<40} {:>8} {:>8}  {:<16}",
        "Link".bright_white().bold(),
        "Views".bright_white().bold(),
        "Scrapes".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(78).bright_black());

    for report in reports {
        println!(
            "  {:<40} {:>8} {:>8}  {:<16}",
            report.link.cyan(),
            report.analytics.views.to_string().bright_green(),
            report.analytics.scrapes.to_string().bright_green(),
            report.analytics.created_display().bright_black()
        );
    }
}
