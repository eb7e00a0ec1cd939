//! Pullboard CLI
//!
//! Run with: cargo run -- serve
//!
//! # Configuration
//!
//! Loaded from `config.toml` (or `~/.config/pullboard/config.toml`), with
//! `PULLBOARD_*` environment variable overrides. `RUST_LOG` overrides the
//! configured log level.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pullboard::api::{serve, AppState};
use pullboard::config::{generate_default_config, Config};
use pullboard::render::render_page;
use pullboard::source::DataSource;
use pullboard::{parse_sheet, StatsDocument};

#[derive(Parser)]
#[command(name = "pullboard", version, about = "Personal gacha-progress dashboard")]
struct Cli {
    /// Path to a config file (overrides the default search locations)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the dashboard server (default)
    Serve,
    /// Render the dashboard once to a file or stdout
    Render {
        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print a default config file
    Config,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    init_tracing(&config);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => run_server(config).await,
        Command::Render { output } => render_once(config, output).await,
        Command::Config => {
            print!("{}", generate_default_config());
            Ok(())
        }
    }
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "pullboard={},tower_http=debug",
            config.logging.level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn run_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Starting Pullboard v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Profile source: {}", config.sources.profile);
    tracing::info!("Sheet source: {}", config.sources.sheet);

    serve(AppState::new(config)).await?;
    Ok(())
}

/// One-shot static render, the original deployment shape: regenerate the
/// page whenever the source documents change.
async fn render_once(
    config: Config,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = DataSource::new(std::time::Duration::from_secs(
        config.sources.request_timeout_secs,
    ));

    let profile = match source.fetch_text(&config.sources.profile).await {
        Ok(body) => match StatsDocument::parse(&body) {
            Ok(doc) => Some(doc),
            Err(e) => {
                tracing::error!("Failed to parse profile: {}", e);
                None
            }
        },
        Err(e) => {
            tracing::error!("Failed to load profile: {}", e);
            None
        }
    };

    let timeline = match source.fetch_text(&config.sources.sheet).await {
        Ok(body) => match parse_sheet(&body) {
            Ok(timeline) => Some(timeline),
            Err(e) => {
                tracing::error!("Failed to parse sheet: {}", e);
                None
            }
        },
        Err(e) => {
            tracing::error!("Failed to load sheet: {}", e);
            None
        }
    };

    let html = render_page(
        profile.as_ref(),
        timeline.as_ref(),
        &config.sources.icon_base,
    );

    match output {
        Some(path) => {
            tokio::fs::write(&path, html).await?;
            tracing::info!("Dashboard written to {:?}", path);
        }
        None => print!("{html}"),
    }

    Ok(())
}
