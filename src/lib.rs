//! # Rustify
//!
//! A Rust client for resolving Spotify tracks, playlists, and albums into
//! metadata and direct download links through an external resolver service.
//!
//! ## Quick Start
//!
//! The easiest way to use this library is through the [`Rustify`] struct:
//!
//! ```rust,no_run
//! use rustify::Rustify;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let rustify = Rustify::new();
//!
//!     // Resolve a pasted link into typed metadata
//!     let resource = rustify.resolve_link("https://open.spotify.com/track/abc123").await?;
//!     println!("Resolved a {}", resource.kind().as_str());
//!
//!     // Search by free text
//!     let results = rustify.search("starboy").await?;
//!     println!("Found {} rows", results.track_rows().len());
//!
//!     // Download everything a resource contains
//!     let batch = rustify.download_resource_to(&resource, "downloads").await?;
//!     println!("Downloaded {} tracks", batch.successful.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Link validation** for track/playlist/album links, as a pure predicate
//! - **Metadata resolution** into typed track/playlist/album/search models
//! - **Lazy per-track download links**, resolved only on explicit request
//! - **File downloads** streamed to disk
//!
//! ## Low-Level APIs
//!
//! For more control, you can use the lower-level pieces directly:
//!
//! - [`ResolverApi`] - the HTTP client for the three resolver endpoints
//! - [`ui`] - the result-panel and per-row state machines and text rendering
//! - [`config`] - base origin, endpoint paths, timing constants

pub mod api;
pub mod config;
pub mod error;
pub mod link;
pub mod models;
mod rustify;
pub mod ui;

// Main interface (recommended)
pub use rustify::{BatchDownloadResult, DownloadResult, Rustify};

// Low-level APIs
pub use api::ResolverApi;
pub use config::{ApiConfig, Endpoints, Timings};
pub use error::SpotifyError;
pub use link::{is_valid_spotify_url, LinkKind, SpotifyLink};
pub use models::{AlbumInfo, PlaylistInfo, Resource, ResourceKind, SearchResults, TrackInfo, TrackRef};
