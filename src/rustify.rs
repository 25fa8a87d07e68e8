//! Unified high-level interface.
//!
//! This module ties the link validator, the resolver client, and the row
//! state machines together into one easy-to-use entry point for resolving
//! Spotify content and downloading the resulting files.

use std::path::{Path, PathBuf};

use futures_util::StreamExt;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::api::ResolverApi;
use crate::config::{ApiConfig, Timings};
use crate::error::{Result, SpotifyError};
use crate::link::SpotifyLink;
use crate::models::Resource;
use crate::ui::row::{DownloadRow, RowState};

/// Result of a single track download.
#[derive(Debug)]
pub struct DownloadResult {
    /// Path to the downloaded file.
    pub path: PathBuf,
    /// File size in bytes.
    pub size: u64,
    /// Track display label, `Artist - Title`.
    pub label: String,
    /// The direct URL the file came from.
    pub download_url: String,
}

/// Result of a batch download (playlist/album/search-list).
#[derive(Debug)]
pub struct BatchDownloadResult {
    /// Output directory.
    pub directory: PathBuf,
    /// Successfully downloaded tracks.
    pub successful: Vec<DownloadResult>,
    /// Failed track labels with failure text.
    pub failed: Vec<(String, String)>,
}

impl BatchDownloadResult {
    /// Total number of tracks attempted.
    pub fn total(&self) -> usize {
        self.successful.len() + self.failed.len()
    }

    /// Check if every track downloaded successfully.
    pub fn all_successful(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Main high-level interface.
///
/// # Example
///
/// ```rust,no_run
/// use rustify::Rustify;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let rustify = Rustify::new();
///
///     // Resolve a pasted link
///     let resource = rustify.resolve_link("https://open.spotify.com/track/abc123").await?;
///     println!("Resolved a {}", resource.kind().as_str());
///
///     // Download everything it contains
///     let result = rustify.download_resource_to(&resource, "downloads").await?;
///     println!("Downloaded {}/{} tracks", result.successful.len(), result.total());
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Rustify {
    api: ResolverApi,
}

impl Default for Rustify {
    fn default() -> Self {
        Self::new()
    }
}

impl Rustify {
    /// Create an instance with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ApiConfig::default())
    }

    /// Create an instance from an explicit configuration.
    pub fn with_config(config: ApiConfig) -> Self {
        Self {
            api: ResolverApi::new(config),
        }
    }

    /// The underlying resolver client.
    pub fn api(&self) -> &ResolverApi {
        &self.api
    }

    /// Timing constants in effect.
    pub fn timings(&self) -> Timings {
        self.api.config().timings()
    }

    // ==================
    // METADATA FETCHING
    // ==================

    /// Validate a pasted string and resolve it into a [`Resource`].
    ///
    /// Rejected input yields `InvalidLink` without any network call.
    pub async fn resolve_link(&self, input: &str) -> Result<Resource> {
        let link = SpotifyLink::parse(input)?;
        self.api.get_info(link.url()).await
    }

    /// Resolve a search-list for a free-text query.
    pub async fn search(&self, query: &str) -> Result<Resource> {
        self.api.search(query).await
    }

    /// Resolve a direct download URL for one track locator.
    pub async fn get_download(&self, track_url: &str) -> Result<String> {
        self.api.get_download(track_url).await
    }

    // ==================
    // DOWNLOADING
    // ==================

    /// Download every track of a resolved resource into a directory.
    ///
    /// Each track gets its own row state machine; rows settle independently
    /// and a failed row never aborts the batch.
    pub async fn download_resource_to<P: AsRef<Path>>(
        &self,
        resource: &Resource,
        output_dir: P,
    ) -> Result<BatchDownloadResult> {
        let output_dir = output_dir.as_ref();
        fs::create_dir_all(output_dir).await?;

        let mut result = BatchDownloadResult {
            directory: output_dir.to_path_buf(),
            successful: Vec::new(),
            failed: Vec::new(),
        };

        let mut rows = DownloadRow::rows_for(resource, self.timings());

        for row in &mut rows {
            row.trigger(&self.api).await;

            match row.state() {
                RowState::Ready(url) => {
                    let url = url.clone();
                    match self.download_file(&url, row.label(), output_dir).await {
                        Ok(download) => result.successful.push(download),
                        Err(e) => {
                            warn!("Failed to fetch file for {}: {}", row.label(), e);
                            result.failed.push((row.label().to_string(), e.to_string()));
                        }
                    }
                }
                RowState::Failed { label, .. } => {
                    result.failed.push((row.label().to_string(), label.to_string()));
                }
                // Unreachable after a trigger on a fresh row.
                other => {
                    result
                        .failed
                        .push((row.label().to_string(), format!("{:?}", other)));
                }
            }
        }

        Ok(result)
    }

    /// Resolve one locator and stream the file to a directory.
    pub async fn download_track_to<P: AsRef<Path>>(
        &self,
        track_url: &str,
        label: &str,
        output_dir: P,
    ) -> Result<DownloadResult> {
        let output_dir = output_dir.as_ref();
        fs::create_dir_all(output_dir).await?;

        let download_url = self.api.get_download(track_url).await?;
        self.download_file(&download_url, label, output_dir).await
    }

    /// Stream a resolved URL to `<output_dir>/<label>.mp3`.
    async fn download_file(
        &self,
        download_url: &str,
        label: &str,
        output_dir: &Path,
    ) -> Result<DownloadResult> {
        let filename = format!("{}.mp3", sanitize_filename(label));
        let path = output_dir.join(&filename);

        debug!("Downloading {} to {}", download_url, path.display());

        let response = self.api.client().get(download_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SpotifyError::BadStatus(status.as_u16()));
        }

        let mut file = fs::File::create(&path).await?;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            file.write_all(&chunk?).await?;
        }
        file.flush().await?;

        let size = fs::metadata(&path).await?.len();

        Ok(DownloadResult {
            path,
            size,
            label: label.to_string(),
            download_url: download_url.to_string(),
        })
    }
}

/// Sanitize a string for use as a filename.
fn sanitize_filename(name: &str) -> String {
    name.replace(['/', '\\', ':', '*', '?', '"', '<', '>', '|'], "_")
        .trim()
        .to_string()
}
