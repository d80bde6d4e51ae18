//! Fetch the earthquake and plate-boundary feeds and write a map document.
//!
//! Run with: cargo run --bin quake_map -- --feed day --output map.json

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::info;

use quake_atlas::{
    build_map,
    infra::{init_logging, LogFormat},
    AppConfig, FeedClient, FeedUrl,
};

#[derive(Parser)]
#[command(name = "quake_map")]
#[command(version, about = "Encode live earthquake data into a renderable map document", long_about = None)]
struct Cli {
    /// Path to config file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "quake_map.toml")]
    config: PathBuf,

    /// Event window: hour, day, week, month, or a GeoJSON URL
    #[arg(long)]
    feed: Option<FeedUrl>,

    /// Override the plate boundaries URL
    #[arg(long)]
    boundaries_url: Option<String>,

    /// Write the document here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Include per-mode encoding reports alongside the document
    #[arg(long)]
    with_report: bool,

    /// Tile provider access token
    #[arg(long, env = "MAPBOX_TOKEN")]
    tile_token: Option<String>,

    /// Log level / filter (overrides config and RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,

    /// Log format: pretty, json, compact
    #[arg(long)]
    log_format: Option<LogFormat>,

    /// Directory for rotated JSON log files
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn apply_overrides(config: &mut AppConfig, cli: &Cli) {
    if let Some(feed) = &cli.feed {
        config.feeds.events = feed.clone();
    }
    if let Some(url) = &cli.boundaries_url {
        config.feeds.boundaries_url = url.clone();
    }
    if cli.tile_token.is_some() {
        config.map.tile_token = cli.tile_token.clone();
    }
    if let Some(format) = cli.log_format {
        config.logging.stdout_format = format;
    }
    if cli.log_dir.is_some() {
        config.logging.log_dir = cli.log_dir.clone();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(&cli.config)?;
    apply_overrides(&mut config, &cli);

    let _guards = init_logging(&config.logging, cli.log_level.as_deref())?;

    let client = FeedClient::with_options(
        config.feeds.events.clone(),
        config.feeds.boundaries_url.clone(),
        Duration::from_secs(config.feeds.timeout_secs),
    )?;
    info!(
        events = client.events_url(),
        boundaries = client.boundaries_url(),
        "Building map"
    );

    let build = build_map(&client, &config.encoding, &config.map).await;

    let json = if cli.with_report {
        serde_json::to_string_pretty(&build)?
    } else {
        serde_json::to_string_pretty(&build.document)?
    };

    match &cli.output {
        Some(path) => {
            std::fs::write(path, json)?;
            info!(path = %path.display(), "Map document written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}
