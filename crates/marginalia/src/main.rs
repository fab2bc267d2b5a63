use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod cache;
mod commands;
mod extract;
mod fallback;
mod fetch;
mod insight;
mod parser;

use fetch::FetcherConfig;

#[derive(Parser)]
#[command(name = "marginalia")]
#[command(
  about = "Marginalia - Book Insight Extraction\nStructured key and practice points from raw book content"
)]
#[command(version)]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

/// Content service connection options
#[derive(Args)]
struct ServiceOptions {
  /// Base URL of the content service
  #[arg(long, env = "MARGINALIA_CONTENT_URL", default_value = "http://localhost:3000")]
  base_url: String,
  /// Request timeout in seconds
  #[arg(long, default_value_t = 30)]
  timeout: u64,
}

impl ServiceOptions {
  fn config(&self) -> FetcherConfig {
    FetcherConfig { base_url: self.base_url.clone(), timeout_secs: self.timeout }
  }
}

#[derive(Subcommand)]
enum Commands {
  /// Parse a local content file into structured insights
  Parse {
    /// Content file to parse ("-" for stdin)
    file: PathBuf,
    /// Title of the content, used for display and diagnostics
    #[arg(short, long)]
    title: String,
    /// Category selecting the fallback content
    #[arg(short, long)]
    category: String,
    /// Print machine-readable JSON instead of formatted output
    #[arg(long)]
    json: bool,
  },
  /// Fetch one content id from the content service and parse it
  Fetch {
    /// Content identifier
    id: String,
    /// Title of the content, used for display and diagnostics
    #[arg(short, long)]
    title: String,
    /// Category selecting the fallback content
    #[arg(short, long)]
    category: String,
    #[command(flatten)]
    service: ServiceOptions,
    /// Print machine-readable JSON instead of formatted output
    #[arg(long)]
    json: bool,
  },
  /// Resolve a JSON manifest of content items in paced batches
  Batch {
    /// Manifest file: a JSON array of {id, title, category}
    manifest: PathBuf,
    #[command(flatten)]
    service: ServiceOptions,
    /// Print machine-readable JSON instead of formatted output
    #[arg(long)]
    json: bool,
  },
  /// Show the canned fallback content for a category
  Fallback {
    /// Category name (unknown categories resolve to Personal Growth)
    category: String,
    /// Print machine-readable JSON instead of formatted output
    #[arg(long)]
    json: bool,
  },
  /// List all categories with canned fallback content
  Categories,
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  match cli.command {
    Commands::Parse { file, title, category, json } => {
      commands::parse_content(&file, &title, &category, json)
    }
    Commands::Fetch { id, title, category, service, json } => {
      commands::fetch_insights(&id, &title, &category, service.config(), json).await
    }
    Commands::Batch { manifest, service, json } => {
      commands::batch_fetch(&manifest, service.config(), json).await
    }
    Commands::Fallback { category, json } => commands::show_fallback(&category, json),
    Commands::Categories => commands::list_categories(),
  }
}
