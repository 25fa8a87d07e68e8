//! Client configuration.
//!
//! Everything the client needs to reach the resolver service lives here:
//! base origin, endpoint paths, and UI timing constants. An [`ApiConfig`] is
//! passed into each component at construction instead of living in globals.

use std::time::Duration;

/// Default base URL for the resolver service.
pub const DEFAULT_API_BASE: &str = "https://api-spotify-rscoders.vercel.app/";

/// Endpoint paths on the resolver service.
///
/// Two naming generations exist for the info endpoint: `api/get-info`
/// (canonical) and `api/download` (legacy). Both carry the identical
/// `{status, result|message}` contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Resolve a track/playlist/album by canonical link.
    pub info: String,
    /// Resolve a search-list by free-text query.
    pub search: String,
    /// Resolve a direct download URL for one track.
    pub download: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            info: "api/get-info".to_string(),
            search: "api/search".to_string(),
            download: "api/get-download".to_string(),
        }
    }
}

impl Endpoints {
    /// Endpoint set using the legacy `api/download` info path.
    pub fn legacy() -> Self {
        Self {
            info: "api/download".to_string(),
            ..Default::default()
        }
    }
}

/// Fixed-delay timing constants for UI state reverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// How long a failed row shows its failure label before re-arming.
    pub failure_revert: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            failure_revert: Duration::from_millis(2000),
        }
    }
}

/// Full client configuration.
#[derive(Debug, Clone, Default)]
pub struct ApiConfig {
    base_url: Option<String>,
    endpoints: Endpoints,
    timings: Timings,
}

impl ApiConfig {
    /// Create a configuration with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the base URL of the resolver service.
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Override the endpoint paths.
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Override the timing constants.
    pub fn with_timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }

    /// Base URL, always terminated by a single slash.
    pub fn base_url(&self) -> String {
        let base = self.base_url.as_deref().unwrap_or(DEFAULT_API_BASE);
        if base.ends_with('/') {
            base.to_string()
        } else {
            format!("{}/", base)
        }
    }

    /// Endpoint paths.
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Timing constants.
    pub fn timings(&self) -> Timings {
        self.timings
    }
}
