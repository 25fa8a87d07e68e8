//! Error types for the resolver API client.

use thiserror::Error;

/// Main error type for all resolver operations.
#[derive(Debug, Error)]
pub enum SpotifyError {
    /// Input is not a recognized Spotify track/playlist/album link.
    #[error("Invalid link: {0}")]
    InvalidLink(String),

    /// The API answered but found nothing resolvable.
    #[error("No result: {0}")]
    NoResult(String),

    /// The API answered a download request without a download URL.
    #[error("No download URL in response")]
    MissingDownloadUrl,

    /// The API responded with a non-success HTTP status.
    #[error("Bad HTTP status: {0}")]
    BadStatus(u16),

    /// HTTP request failed at the transport level.
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    /// I/O operation failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl SpotifyError {
    /// Short label shown on a track row when its download-link fetch fails.
    ///
    /// Transport, parse, and the remaining failure classes keep distinct
    /// wording but share the same recovery path (the row re-arms after the
    /// revert delay).
    pub fn row_label(&self) -> &'static str {
        match self {
            SpotifyError::RequestError(_) => "Network Error",
            SpotifyError::ParseError(_) => "Error",
            _ => "Failed",
        }
    }
}

/// Result type alias for resolver operations.
pub type Result<T> = std::result::Result<T, SpotifyError>;
