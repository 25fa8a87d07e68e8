//! Text rendering of resolved resources.
//!
//! Rendering is a pure function from a resource to terminal text; the CLI
//! prints whatever comes out. List-shaped resources render one numbered row
//! per track, keyed by position.

use std::fmt::Write;

use crate::models::{AlbumInfo, PlaylistInfo, Resource, SearchResults, TrackInfo, TrackRef};

/// Render whichever panel matches the resource kind.
pub fn render_resource(resource: &Resource) -> String {
    match resource {
        Resource::Track(track) => render_track(track),
        Resource::Playlist(playlist) => render_playlist(playlist),
        Resource::Album(album) => render_album(album),
        Resource::Search(results) => render_search(results),
    }
}

/// Render a single-track panel.
pub fn render_track(track: &TrackInfo) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", track.title);
    let _ = writeln!(out, "  Artist:   {}", track.artist);
    let _ = writeln!(out, "  Duration: {}", track.duration);
    let _ = writeln!(out, "  Released: {}", track.release_date);
    out
}

/// Render a playlist panel with its numbered track rows.
pub fn render_playlist(playlist: &PlaylistInfo) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Playlist: {}", playlist.name);
    if !playlist.description.is_empty() {
        let _ = writeln!(out, "  {}", playlist.description);
    }
    let _ = writeln!(out, "  {} tracks", playlist.total_tracks);
    let _ = writeln!(out);
    render_rows(&mut out, &playlist.tracks);
    out
}

/// Render an album panel with its numbered track rows.
pub fn render_album(album: &AlbumInfo) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Album: {}", album.name);
    let _ = writeln!(out, "  Artist:   {}", album.artist);
    let _ = writeln!(out, "  Released: {}", album.release_date);
    let _ = writeln!(out, "  {} tracks", album.total_tracks);
    let _ = writeln!(out);
    render_rows(&mut out, &album.tracks);
    out
}

/// Render a search-list panel.
pub fn render_search(results: &SearchResults) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Results for \"{}\" ({})",
        results.query, results.total_tracks
    );
    let _ = writeln!(out);
    render_rows(&mut out, &results.tracks);
    out
}

/// Render the no-result panel.
pub fn render_no_result(message: &str) -> String {
    format!("No Result Found\n  {}\n", message)
}

fn render_rows(out: &mut String, tracks: &[TrackRef]) {
    for (index, track) in tracks.iter().enumerate() {
        let _ = write!(out, "{:3}. {} - {}", index + 1, track.artist, track.title);
        if let Some(album) = &track.album {
            let _ = write!(out, " ({})", album);
        }
        if !track.duration.is_empty() {
            let _ = write!(out, " [{}]", track.duration);
        }
        let _ = writeln!(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_track_ref(title: &str) -> TrackRef {
        TrackRef {
            title: title.to_string(),
            artist: "The Weeknd".to_string(),
            duration: "03:50".to_string(),
            track_url: "u1".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_track_panel_carries_all_metadata() {
        let track = TrackInfo {
            title: "Starboy".to_string(),
            artist: "The Weeknd".to_string(),
            duration: "03:50".to_string(),
            release_date: "2016-11-25".to_string(),
            track_url: "u1".to_string(),
            ..Default::default()
        };

        let text = render_track(&track);
        assert!(text.contains("Starboy"));
        assert!(text.contains("The Weeknd"));
        assert!(text.contains("03:50"));
        assert!(text.contains("2016-11-25"));
    }

    #[test]
    fn test_playlist_rows_are_numbered_in_order() {
        let playlist = PlaylistInfo {
            name: "Road Trip".to_string(),
            total_tracks: 2,
            tracks: vec![sample_track_ref("First"), sample_track_ref("Second")],
            ..Default::default()
        };

        let text = render_playlist(&playlist);
        let first = text.find("1. The Weeknd - First").expect("first row");
        let second = text.find("2. The Weeknd - Second").expect("second row");
        assert!(first < second);
    }

    #[test]
    fn test_search_rows_include_album_name() {
        let results = SearchResults {
            query: "starboy".to_string(),
            total_tracks: 1,
            tracks: vec![TrackRef {
                album: Some("Starboy".to_string()),
                ..sample_track_ref("Starboy")
            }],
        };

        let text = render_search(&results);
        assert!(text.contains("Results for \"starboy\" (1)"));
        assert!(text.contains("(Starboy)"));
    }

    #[test]
    fn test_no_result_panel_carries_message() {
        let text = render_no_result("not found");
        assert!(text.contains("No Result Found"));
        assert!(text.contains("not found"));
    }

    #[test]
    fn test_render_resource_dispatches_on_kind() {
        let album = AlbumInfo {
            name: "Starboy".to_string(),
            artist: "The Weeknd".to_string(),
            release_date: "2016-11-25".to_string(),
            total_tracks: 1,
            tracks: vec![sample_track_ref("Starboy")],
            ..Default::default()
        };

        let text = render_resource(&Resource::Album(album));
        assert!(text.starts_with("Album: Starboy"));
    }
}
