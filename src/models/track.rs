//! Track-related models.
//!
//! This module contains the single-track resource payload and the track
//! reference used inside playlist/album/search contexts.

use serde::{Deserialize, Serialize};

/// A fully resolved single track.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TrackInfo {
    /// Track title.
    pub title: String,

    /// Artist name(s) as a display string.
    pub artist: String,

    /// Cover thumbnail URL.
    #[serde(default)]
    pub thumbnail: String,

    /// Preformatted duration, e.g. "03:35".
    #[serde(default)]
    pub duration: String,

    /// Release date as supplied by the service.
    #[serde(default)]
    pub release_date: String,

    /// Opaque upstream locator used to request a download link later.
    ///
    /// Forwarded verbatim to the download endpoint.
    pub track_url: String,
}

/// A track reference inside a playlist, album, or search-list context.
///
/// Immutable once received.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TrackRef {
    /// Track title.
    pub title: String,

    /// Artist name(s) as a display string.
    pub artist: String,

    /// Album name, present in search results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,

    /// Cover thumbnail URL.
    #[serde(default)]
    pub thumbnail: String,

    /// Preformatted duration, e.g. "03:35".
    #[serde(default)]
    pub duration: String,

    /// Release date as supplied by the service, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,

    /// Opaque upstream locator used to request a download link later.
    pub track_url: String,
}

impl TrackRef {
    /// Display label, `Artist - Title`.
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.artist, self.title)
    }
}

impl TrackInfo {
    /// Display label, `Artist - Title`.
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.artist, self.title)
    }
}
