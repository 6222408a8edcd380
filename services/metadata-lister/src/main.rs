//! Map service metadata lister.
//!
//! Resolves the dataset metadata documents behind each layer of a web map
//! (or a list of map service URLs) through the LayerMetadata extension and
//! prints them as a nested list:
//! - Web map from a local file or a portal item data URL
//! - Concurrent, order-preserving resolution
//! - Text, HTML, or JSON output

mod config;
mod lister;
mod render;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgGroup, Parser};
use metadata_client::{fetch_web_map, parse_web_map, HttpFetcher, LayerSourceResolver};
use metadata_common::WebMap;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use config::{ListerConfig, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "metadata-lister")]
#[command(about = "List dataset metadata documents for map service layers")]
#[command(group(
    ArgGroup::new("input")
        .required(true)
        .args(["layer_urls", "webmap_file", "item_data_url"])
))]
struct Args {
    /// Map service or sublayer URL (repeatable)
    #[arg(long = "layer-url")]
    layer_urls: Vec<String>,

    /// Web map item data JSON file
    #[arg(long)]
    webmap_file: Option<PathBuf>,

    /// Web map item data URL, including any token parameter
    #[arg(long, env = "ITEM_DATA_URL")]
    item_data_url: Option<String>,

    /// Output format (overrides config file)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Configuration file (YAML)
    #[arg(long, env = "LISTER_CONFIG")]
    config: Option<PathBuf>,

    /// Maximum layers resolved at once (overrides config file)
    #[arg(long)]
    max_concurrent: Option<usize>,

    /// Request timeout in seconds (overrides config file)
    #[arg(long)]
    request_timeout_secs: Option<u64>,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // Logs go to stderr; stdout carries the rendered list.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .json()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = ListerConfig::load_or_default(args.config.as_deref())?;
    if let Some(format) = args.format {
        config.format = format;
    }
    if let Some(max_concurrent) = args.max_concurrent {
        config.max_concurrent = max_concurrent;
    }
    if args.request_timeout_secs.is_some() {
        config.request_timeout_secs = args.request_timeout_secs;
    }

    let fetcher =
        HttpFetcher::new(config.fetcher_config()).context("Failed to create HTTP client")?;
    let resolver = LayerSourceResolver::new(fetcher);

    let web_map = load_web_map(&args, &resolver).await?;
    info!(
        layers = web_map.operational_layers.len(),
        format = ?config.format,
        "Resolving layer metadata"
    );

    let reports = lister::resolve_web_map(&resolver, &web_map, config.max_concurrent).await;
    let output = render::render(&reports, config.format).context("Failed to render output")?;
    print!("{}", output);

    Ok(())
}

/// Build the web map from the input the user gave; clap guarantees exactly one.
async fn load_web_map(args: &Args, resolver: &LayerSourceResolver<HttpFetcher>) -> Result<WebMap> {
    if let Some(path) = &args.webmap_file {
        let body = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read web map file: {}", path.display()))?;
        return Ok(parse_web_map(&path.display().to_string(), &body)?);
    }

    if let Some(url) = &args.item_data_url {
        return fetch_web_map(resolver.fetcher(), url)
            .await
            .with_context(|| format!("Failed to load web map from {}", url));
    }

    if args.layer_urls.is_empty() {
        bail!("Nothing to resolve: pass --layer-url, --webmap-file, or --item-data-url");
    }
    Ok(lister::web_map_from_urls(&args.layer_urls))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_repeated_layer_urls_accepted() {
        let args = Args::try_parse_from([
            "metadata-lister",
            "--layer-url",
            "https://h/MapServer/0",
            "--layer-url",
            "https://h/MapServer/1",
        ])
        .unwrap();
        assert_eq!(args.layer_urls.len(), 2);
    }

    #[test]
    fn test_inputs_are_mutually_exclusive() {
        let err = Args::try_parse_from([
            "metadata-lister",
            "--layer-url",
            "https://h/MapServer/0",
            "--webmap-file",
            "webmap.json",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);

        let err = Args::try_parse_from([
            "metadata-lister",
            "--webmap-file",
            "webmap.json",
            "--item-data-url",
            "https://portal/item/data",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_an_input_is_required() {
        let err = Args::try_parse_from(["metadata-lister", "--format", "json"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}
