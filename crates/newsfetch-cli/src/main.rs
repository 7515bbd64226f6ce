use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use newsfetch_core::{AppConfig, Fetcher};

mod commands;

#[derive(Parser)]
#[command(name = "newsfetch")]
#[command(author, version, about = "News headlines and article text from a fixed set of RSS feeds")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Keep the cache in memory only (do not read or write the cache files)
    #[arg(long = "no-cache-storage", global = true)]
    no_cache_storage: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the latest headlines, newest first
    Headlines {
        /// Reuse (and remember) the headline list for these sources
        #[arg(long)]
        cached: bool,
        /// Only fetch the named built-in source (repeatable)
        #[arg(short = 's', long = "source")]
        sources: Vec<String>,
        /// Maximum number of headlines to print
        #[arg(short = 'l', long)]
        limit: Option<usize>,
    },
    /// Download an article and print its plain text
    Article {
        /// Article URL
        url: String,
        /// Always download, even if the article is cached
        #[arg(long)]
        no_cache: bool,
    },
    /// Print the host of a URL
    Domain {
        url: String,
    },
    /// List the built-in sources
    Sources,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    tracing::debug!("Configuration path: {}", AppConfig::config_path().display());

    match cli.command {
        Commands::Headlines { cached, sources, limit } => {
            let mut fetcher = Fetcher::new(&config, config.cache.persist && !cli.no_cache_storage)?;
            commands::headlines::run(&mut fetcher, &sources, cached, limit).await
        }
        Commands::Article { url, no_cache } => {
            let mut fetcher = Fetcher::new(&config, config.cache.persist && !cli.no_cache_storage)?;
            commands::article::run(&mut fetcher, &url, !no_cache).await
        }
        Commands::Domain { url } => {
            commands::domain::run(&url)
        }
        Commands::Sources => {
            commands::sources::run()
        }
    }
}
