use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use rustify::ui::panel::{self, ResultPanel};
use rustify::ui::render;
use rustify::{is_valid_spotify_url, ApiConfig, Endpoints, Resource, Rustify};

#[derive(Parser)]
#[command(name = "rustify-cli")]
#[command(about = "CLI for Rustify - Spotify Downloader", long_about = None)]
struct Cli {
    /// Base URL of the resolver service
    #[arg(long, env = "RUSTIFY_API_BASE")]
    api_base: Option<String>,

    /// Use the legacy info endpoint naming (api/download)
    #[arg(long)]
    legacy_endpoints: bool,

    /// Output directory for downloads
    #[arg(short, long, default_value = "downloads")]
    output: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a track, playlist, or album link and show its metadata
    Info {
        /// Spotify link to resolve
        url: String,
    },
    /// Search for tracks by free text
    Search {
        /// Search query
        query: String,
    },
    /// Resolve a direct download link for one track locator
    Link {
        /// Opaque track locator from a previous resolution
        track_url: String,
    },
    /// Resolve a link and download every track it contains
    Download {
        /// Spotify link to resolve and download
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = ApiConfig::new();
    if let Some(base) = &cli.api_base {
        config = config.with_base_url(base);
    }
    if cli.legacy_endpoints {
        config = config.with_endpoints(Endpoints::legacy());
    }

    let rustify = Rustify::with_config(config);

    match &cli.command {
        Commands::Info { url } => {
            let mut result_panel = ResultPanel::new();
            if resolve_and_show(&rustify, &mut result_panel, url).await.is_none() {
                std::process::exit(1);
            }
        }
        Commands::Search { query } => {
            let query = query.trim();
            if query.is_empty() {
                eprintln!("{}", panel::EMPTY_QUERY_MESSAGE);
                std::process::exit(1);
            }

            println!("Searching for \"{}\"...", query);
            match rustify.search(query).await {
                Ok(resource) => print!("{}", render::render_resource(&resource)),
                Err(e) => {
                    eprintln!("{}", panel::search_error_message(&e));
                    std::process::exit(1);
                }
            }
        }
        Commands::Link { track_url } => {
            let download_url = rustify.get_download(track_url).await?;
            println!("{}", download_url);
        }
        Commands::Download { url } => {
            let mut result_panel = ResultPanel::new();
            let Some(resource) = resolve_and_show(&rustify, &mut result_panel, url).await else {
                std::process::exit(1);
            };

            let result = rustify.download_resource_to(&resource, &cli.output).await?;
            println!("Downloaded to: {}", result.directory.display());
            println!("Successful: {}/{}", result.successful.len(), result.total());
            if !result.failed.is_empty() {
                println!("Failed tracks:");
                for (label, reason) in &result.failed {
                    println!("  - {}: {}", label, reason);
                }
            }
        }
    }

    Ok(())
}

/// Drive the result panel through one dispatch and print what it shows.
async fn resolve_and_show(
    rustify: &Rustify,
    result_panel: &mut ResultPanel,
    input: &str,
) -> Option<Resource> {
    let input = input.trim();
    if input.is_empty() {
        result_panel.fail_inline(panel::EMPTY_INPUT_MESSAGE);
        eprintln!("{}", panel::EMPTY_INPUT_MESSAGE);
        return None;
    }

    if !is_valid_spotify_url(input) {
        result_panel.fail_inline(panel::INVALID_LINK_MESSAGE);
        eprintln!("{}", panel::INVALID_LINK_MESSAGE);
        return None;
    }

    result_panel.begin_dispatch();

    match rustify.resolve_link(input).await {
        Ok(resource) => {
            result_panel.show_resource(&resource);
            print!("{}", render::render_resource(&resource));
            Some(resource)
        }
        Err(e) => {
            // Validation passed, so this is a settled dispatch: every failure
            // class lands in the no-result panel.
            let message = panel::no_result_message(&e);
            result_panel.show_empty(&message);
            eprint!("{}", render::render_no_result(&message));
            None
        }
    }
}
