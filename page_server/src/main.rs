//! # mindread_server
//!
//! Serves or renders the *Read Your Mind* by Oz deep-dive page.
//!
//! ## Usage
//!
//! ```bash
//! # Serve at http://127.0.0.1:3000/
//! mindread_server serve
//!
//! # Write a standalone HTML file
//! mindread_server render -o read_your_mind.html
//!
//! # Inspect the topic lists
//! mindread_server content --json
//! ```
//!
//! Logs go to stderr; `RUST_LOG` overrides `--log-level`.

mod config;
mod http;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use mindread_page::validate::validate_repository;
use mindread_page::{content, render_page};

use crate::config::ServerConfig;
use crate::http::PageServer;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "mindread_server")]
#[command(about = "Serve or render the Read Your Mind by Oz deep-dive page")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the page over HTTP at `/`
    Serve {
        /// IP address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind (0 picks a free one)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },

    /// Write the HTML document to a file, or stdout for `-`
    Render {
        #[arg(short, long, default_value = "-")]
        output: PathBuf,
    },

    /// Print the topic lists
    Content {
        /// Pretty-printed JSON instead of a text listing
        #[arg(long)]
        json: bool,
    },
}

// ============================================================================
// Commands
// ============================================================================

fn serve(host: &str, port: u16) -> Result<()> {
    let config = ServerConfig::from_args(host, port)?;
    let page = render_page();
    info!("Rendered page ({} bytes)", page.len());

    PageServer::bind(&config, page)?.run()
}

fn render(output: &Path) -> Result<()> {
    let html = render_page();

    if output == Path::new("-") {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(html.as_bytes())
            .context("failed to write page to stdout")?;
        return stdout.flush().context("failed to flush stdout");
    }

    std::fs::write(output, &html)
        .with_context(|| format!("failed to write page to {}", output.display()))?;
    info!("Page written to {} ({} bytes)", output.display(), html.len());
    Ok(())
}

fn print_content(json: bool) -> Result<()> {
    let sections = content::export();

    if json {
        let out = serde_json::to_string_pretty(&sections).context("failed to serialize content")?;
        println!("{out}");
        return Ok(());
    }

    for section in sections {
        println!("## {}", section.heading);
        println!("   {}", section.subtitle);
        for (idx, entry) in section.entries.iter().enumerate() {
            println!("{:>2}. {}", idx + 1, entry.title);
            println!("    {}", entry.description);
        }
        println!();
    }
    Ok(())
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() -> Result<()> {
    let args = Args::parse();

    // Logging goes to stderr, stdout carries rendered output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!("Starting mindread_server v{}", env!("CARGO_PKG_VERSION"));

    validate_repository().context("content tables are invalid")?;

    match args.command {
        Command::Serve { host, port } => serve(&host, port),
        Command::Render { output } => render(&output),
        Command::Content { json } => print_content(json),
    }
}
