//! Resolver API client.
//!
//! This module provides the client for the metadata/download resolver
//! service. All endpoints are unauthenticated HTTP GET and answer with the
//! `{status, result|message}` envelope. The service is a black box: it does
//! the actual metadata resolution and download-link extraction upstream.
//!
//! There is no retry anywhere; a single failure is surfaced immediately and
//! recovery is user-initiated.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, error};

use crate::config::ApiConfig;
use crate::error::{Result, SpotifyError};
use crate::models::Resource;

use super::envelope::Envelope;

/// Payload of a download-link resolution.
#[derive(Debug, Deserialize)]
struct DownloadPayload {
    #[serde(default)]
    download_url: Option<String>,
}

/// Client for the resolver service.
///
/// # Example
///
/// ```rust,no_run
/// use rustify::{ApiConfig, ResolverApi};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let api = ResolverApi::new(ApiConfig::new());
///     let resource = api.get_info("https://open.spotify.com/track/abc123").await?;
///     println!("Resolved a {}", resource.kind().as_str());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ResolverApi {
    client: Client,
    config: ApiConfig,
}

impl Default for ResolverApi {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}

impl ResolverApi {
    /// Create a new resolver client from a configuration.
    pub fn new(config: ApiConfig) -> Self {
        let client = Client::builder()
            .user_agent(concat!("rustify/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// The configuration this client was built from.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// HTTP client handle, shared with file downloads.
    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    /// GET an endpoint and parse the response envelope.
    ///
    /// The three failure classes stay distinct: transport errors surface as
    /// `RequestError`, non-2xx statuses as `BadStatus`, and body parse
    /// failures as `ParseError`.
    async fn get_envelope<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Envelope<T>> {
        let url = format!("{}{}", self.config.base_url(), path);
        debug!("GET {} with params: {:?}", url, params);

        let response = self.client.get(&url).query(params).send().await?;

        let status = response.status();
        if !status.is_success() {
            error!("Resolver API returned HTTP {} for {}", status, url);
            return Err(SpotifyError::BadStatus(status.as_u16()));
        }

        let body = response.text().await?;
        let envelope = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse resolver response: {}", e);
            SpotifyError::ParseError(e)
        })?;

        Ok(envelope)
    }

    /// Resolve a track, playlist, or album by its canonical link.
    ///
    /// The link is forwarded as a query parameter, percent-encoded exactly
    /// once. A truthy envelope yields the typed [`Resource`]; a falsy one
    /// yields `NoResult` carrying the service's message.
    pub async fn get_info(&self, url: &str) -> Result<Resource> {
        let path = &self.config.endpoints().info;
        self.get_envelope(path, &[("url", url)]).await?.into_result()
    }

    /// Resolve a search-list by free-text query.
    pub async fn search(&self, query: &str) -> Result<Resource> {
        let path = &self.config.endpoints().search;
        self.get_envelope(path, &[("query", query)])
            .await?
            .into_result()
    }

    /// Resolve a direct download URL for one track.
    ///
    /// `track_url` is the opaque locator taken verbatim from a resolved
    /// track. Success requires a truthy envelope with `result.download_url`
    /// present; any other outcome is a failure.
    pub async fn get_download(&self, track_url: &str) -> Result<String> {
        let path = &self.config.endpoints().download;
        let envelope: Envelope<DownloadPayload> =
            self.get_envelope(path, &[("track_url", track_url)]).await?;

        envelope
            .into_result()?
            .download_url
            .ok_or(SpotifyError::MissingDownloadUrl)
    }
}
