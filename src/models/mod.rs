//! Data models for resolver API responses.
//!
//! This module contains the data structures used to represent resolved
//! tracks, playlists, albums, and search-lists.

pub mod resource;
pub mod track;

// Re-exports for convenience
pub use resource::{AlbumInfo, PlaylistInfo, Resource, ResourceKind, SearchResults};
pub use track::{TrackInfo, TrackRef};
