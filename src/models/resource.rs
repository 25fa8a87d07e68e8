//! Resolved resources.
//!
//! A [`Resource`] is whatever the info or search endpoint resolved a request
//! into: a single track, a playlist, an album, or a search-list. The JSON
//! shape is `{"type": "...", "data": {...}}`, mapped onto a tagged enum.

use serde::{Deserialize, Serialize};

use super::track::{TrackInfo, TrackRef};

/// A playlist with its ordered tracks.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlaylistInfo {
    /// Playlist name.
    pub name: String,

    /// Playlist description.
    #[serde(default)]
    pub description: String,

    /// Total number of tracks.
    #[serde(default)]
    pub total_tracks: u32,

    /// Playlist cover thumbnail URL.
    #[serde(default)]
    pub thumbnail: String,

    /// Ordered track references.
    #[serde(default)]
    pub tracks: Vec<TrackRef>,
}

/// An album with its ordered tracks.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AlbumInfo {
    /// Album name.
    pub name: String,

    /// Album artist display string.
    pub artist: String,

    /// Release date as supplied by the service.
    #[serde(default)]
    pub release_date: String,

    /// Total number of tracks.
    #[serde(default)]
    pub total_tracks: u32,

    /// Album cover thumbnail URL.
    #[serde(default)]
    pub thumbnail: String,

    /// Ordered track references.
    #[serde(default)]
    pub tracks: Vec<TrackRef>,
}

/// Tracks matching a free-text search.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchResults {
    /// The query as echoed by the service.
    #[serde(default)]
    pub query: String,

    /// Total number of matching tracks.
    #[serde(default)]
    pub total_tracks: u32,

    /// Ordered track references.
    #[serde(default)]
    pub tracks: Vec<TrackRef>,
}

/// The kind tag of a resolved resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Track,
    Playlist,
    Album,
    Search,
}

impl ResourceKind {
    /// Kind tag as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Track => "track",
            ResourceKind::Playlist => "playlist",
            ResourceKind::Album => "album",
            ResourceKind::Search => "search",
        }
    }
}

/// A resolved resource, discriminated by its kind tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Resource {
    /// A single track.
    Track(TrackInfo),
    /// A playlist with an ordered track sequence.
    Playlist(PlaylistInfo),
    /// An album with an ordered track sequence.
    Album(AlbumInfo),
    /// A search-result list.
    Search(SearchResults),
}

impl Resource {
    /// The kind tag of this resource.
    pub fn kind(&self) -> ResourceKind {
        match self {
            Resource::Track(_) => ResourceKind::Track,
            Resource::Playlist(_) => ResourceKind::Playlist,
            Resource::Album(_) => ResourceKind::Album,
            Resource::Search(_) => ResourceKind::Search,
        }
    }

    /// The track rows of a list-shaped resource, empty for a single track.
    pub fn track_rows(&self) -> &[TrackRef] {
        match self {
            Resource::Track(_) => &[],
            Resource::Playlist(playlist) => &playlist.tracks,
            Resource::Album(album) => &album.tracks,
            Resource::Search(results) => &results.tracks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_resource_parses_from_tagged_json() {
        let json = r#"{
            "type": "track",
            "data": {
                "title": "Starboy",
                "artist": "The Weeknd",
                "duration": "03:50",
                "release_date": "2016-11-25",
                "thumbnail": "https://i.scdn.co/image/abc",
                "track_url": "https://open.spotify.com/track/7MXVkk9YMctZqd1Srtv4MB"
            }
        }"#;

        let resource: Resource = serde_json::from_str(json).unwrap();
        assert_eq!(resource.kind(), ResourceKind::Track);
        assert!(resource.track_rows().is_empty());

        match resource {
            Resource::Track(track) => assert_eq!(track.title, "Starboy"),
            other => panic!("expected track, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_playlist_resource_keeps_track_order() {
        let json = r#"{
            "type": "playlist",
            "data": {
                "name": "Road Trip",
                "description": "Songs for the drive",
                "total_tracks": 2,
                "thumbnail": "",
                "tracks": [
                    {"title": "First", "artist": "A", "track_url": "u1"},
                    {"title": "Second", "artist": "B", "track_url": "u2"}
                ]
            }
        }"#;

        let resource: Resource = serde_json::from_str(json).unwrap();
        assert_eq!(resource.kind(), ResourceKind::Playlist);

        let rows = resource.track_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title, "First");
        assert_eq!(rows[1].title, "Second");
    }

    #[test]
    fn test_album_resource_parses() {
        let json = r#"{
            "type": "album",
            "data": {
                "name": "Starboy",
                "artist": "The Weeknd",
                "release_date": "2016-11-25",
                "total_tracks": 1,
                "thumbnail": "",
                "tracks": [
                    {"title": "Starboy", "artist": "The Weeknd", "track_url": "u1"}
                ]
            }
        }"#;

        let resource: Resource = serde_json::from_str(json).unwrap();
        assert_eq!(resource.kind(), ResourceKind::Album);
        assert_eq!(resource.track_rows().len(), 1);
    }

    #[test]
    fn test_search_resource_parses() {
        let json = r#"{
            "type": "search",
            "data": {
                "query": "starboy",
                "total_tracks": 1,
                "tracks": [
                    {"title": "Starboy", "artist": "The Weeknd", "album": "Starboy", "track_url": "u1"}
                ]
            }
        }"#;

        let resource: Resource = serde_json::from_str(json).unwrap();
        assert_eq!(resource.kind(), ResourceKind::Search);

        match resource {
            Resource::Search(results) => {
                assert_eq!(results.query, "starboy");
                assert_eq!(results.total_tracks, 1);
            }
            other => panic!("expected search, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_unknown_kind_tag_is_a_parse_error() {
        let json = r#"{"type": "artist", "data": {}}"#;
        assert!(serde_json::from_str::<Resource>(json).is_err());
    }
}
