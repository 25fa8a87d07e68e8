//! Spotify link validation and parsing.
//!
//! Accepts canonical `open.spotify.com` links to tracks, playlists, and
//! albums. Validation is a pure predicate: no normalization happens beyond
//! trimming surrounding whitespace, and no I/O is involved.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, SpotifyError};

static LINK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://(open\.)?spotify\.com/(?P<kind>track|playlist|album)/(?P<id>[A-Za-z0-9]+)(\?.*)?$")
        .expect("Invalid regex")
});

/// The resource kind a Spotify link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Track,
    Playlist,
    Album,
}

impl LinkKind {
    /// Path segment used in Spotify links for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkKind::Track => "track",
            LinkKind::Playlist => "playlist",
            LinkKind::Album => "album",
        }
    }
}

/// A validated Spotify resource link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotifyLink {
    kind: LinkKind,
    id: String,
    url: String,
}

impl SpotifyLink {
    /// Parse a pasted string into a validated link.
    ///
    /// Surrounding whitespace is trimmed; anything that does not match the
    /// track/playlist/album pattern is rejected.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();

        let captures = LINK_REGEX
            .captures(trimmed)
            .ok_or_else(|| SpotifyError::InvalidLink(trimmed.to_string()))?;

        let kind = match &captures["kind"] {
            "track" => LinkKind::Track,
            "playlist" => LinkKind::Playlist,
            _ => LinkKind::Album,
        };

        Ok(Self {
            kind,
            id: captures["id"].to_string(),
            url: trimmed.to_string(),
        })
    }

    /// The resource kind this link points at.
    pub fn kind(&self) -> LinkKind {
        self.kind
    }

    /// The resource ID segment of the link.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The trimmed link as pasted, query string included.
    ///
    /// This is what gets forwarded to the resolver service.
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Pure accept/reject predicate over a pasted string.
pub fn is_valid_spotify_url(input: &str) -> bool {
    LINK_REGEX.is_match(input.trim())
}
