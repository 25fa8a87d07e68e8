//! Result panel state machine.
//!
//! One visible region holds the outcome of the latest dispatch. The panel is
//! always in exactly one state, so showing a result panel inherently hides
//! every other panel. Validation and search failures are inline text next to
//! the input rather than a panel swap.

use crate::error::SpotifyError;
use crate::models::{Resource, ResourceKind};

/// Inline message for an empty link input. No dispatch happens.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a Spotify URL!";

/// Inline message for a rejected link. No dispatch happens.
pub const INVALID_LINK_MESSAGE: &str = "Invalid Spotify URL! Please enter a valid Spotify link.";

/// Inline message for an empty search query. No dispatch happens.
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a search query!";

/// State of the result region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    /// Nothing dispatched yet, or cleared by a start-over.
    #[default]
    Idle,
    /// A dispatch is in flight.
    Loading,
    /// A single track is shown.
    ShownTrack,
    /// A playlist is shown.
    ShownPlaylist,
    /// An album is shown.
    ShownAlbum,
    /// A search-list is shown.
    ShownSearch,
    /// The no-result panel is shown.
    ShownEmpty,
}

/// The result region and its inline error slot.
#[derive(Debug, Clone, Default)]
pub struct ResultPanel {
    state: PanelState,
    inline_error: Option<String>,
    empty_message: Option<String>,
}

impl ResultPanel {
    /// A fresh panel in the idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of the region.
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Inline error text, if any.
    pub fn inline_error(&self) -> Option<&str> {
        self.inline_error.as_deref()
    }

    /// Message carried by the no-result panel, if shown.
    pub fn empty_message(&self) -> Option<&str> {
        self.empty_message.as_deref()
    }

    /// A dispatch begins: hide whatever was shown, clear messages.
    pub fn begin_dispatch(&mut self) {
        self.state = PanelState::Loading;
        self.inline_error = None;
        self.empty_message = None;
    }

    /// A dispatch resolved: show the panel matching the resource kind.
    pub fn show_resource(&mut self, resource: &Resource) {
        self.state = match resource.kind() {
            ResourceKind::Track => PanelState::ShownTrack,
            ResourceKind::Playlist => PanelState::ShownPlaylist,
            ResourceKind::Album => PanelState::ShownAlbum,
            ResourceKind::Search => PanelState::ShownSearch,
        };
    }

    /// A dispatch settled without a result: show the no-result panel.
    pub fn show_empty<S: Into<String>>(&mut self, message: S) {
        self.state = PanelState::ShownEmpty;
        self.empty_message = Some(message.into());
    }

    /// Show an inline error next to the input, without a panel swap.
    pub fn fail_inline<S: Into<String>>(&mut self, message: S) {
        self.state = PanelState::Idle;
        self.inline_error = Some(message.into());
    }

    /// Start over: clear the input area, messages, and all panels.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Message for the no-result panel when a link resolution fails.
///
/// Business rejections carry the service's own message; each local failure
/// class keeps its distinct wording.
pub fn no_result_message(err: &SpotifyError) -> String {
    match err {
        SpotifyError::NoResult(message) => message.clone(),
        SpotifyError::ParseError(_) => "Failed to parse response data!".to_string(),
        SpotifyError::RequestError(_) => {
            "Network error occurred. Please check your connection.".to_string()
        }
        _ => "Please check your Spotify link!".to_string(),
    }
}

/// Inline message when a search dispatch fails.
pub fn search_error_message(err: &SpotifyError) -> String {
    match err {
        SpotifyError::NoResult(message) => message.clone(),
        SpotifyError::ParseError(_) => "Failed to parse response data!".to_string(),
        SpotifyError::RequestError(_) => {
            "Network error occurred. Please check your connection.".to_string()
        }
        _ => "Failed to search. Please try again.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SearchResults, TrackInfo};

    fn track_resource() -> Resource {
        Resource::Track(TrackInfo {
            title: "Starboy".to_string(),
            artist: "The Weeknd".to_string(),
            track_url: "u1".to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn test_starts_idle() {
        let panel = ResultPanel::new();
        assert_eq!(panel.state(), PanelState::Idle);
        assert_eq!(panel.inline_error(), None);
    }

    #[test]
    fn test_dispatch_then_show_resource() {
        let mut panel = ResultPanel::new();
        panel.begin_dispatch();
        assert_eq!(panel.state(), PanelState::Loading);

        panel.show_resource(&track_resource());
        assert_eq!(panel.state(), PanelState::ShownTrack);
    }

    #[test]
    fn test_each_kind_maps_to_its_own_shown_state() {
        let mut panel = ResultPanel::new();

        panel.show_resource(&Resource::Search(SearchResults::default()));
        assert_eq!(panel.state(), PanelState::ShownSearch);

        panel.show_resource(&Resource::Playlist(Default::default()));
        assert_eq!(panel.state(), PanelState::ShownPlaylist);

        panel.show_resource(&Resource::Album(Default::default()));
        assert_eq!(panel.state(), PanelState::ShownAlbum);
    }

    #[test]
    fn test_empty_and_shown_are_mutually_exclusive() {
        let mut panel = ResultPanel::new();
        panel.begin_dispatch();
        panel.show_empty("not found");
        assert_eq!(panel.state(), PanelState::ShownEmpty);
        assert_eq!(panel.empty_message(), Some("not found"));

        // A later dispatch clears the no-result panel before resolving.
        panel.begin_dispatch();
        assert_eq!(panel.empty_message(), None);
        panel.show_resource(&track_resource());
        assert_eq!(panel.state(), PanelState::ShownTrack);
        assert_eq!(panel.empty_message(), None);
    }

    #[test]
    fn test_inline_error_does_not_swap_panel() {
        let mut panel = ResultPanel::new();
        panel.fail_inline(INVALID_LINK_MESSAGE);
        assert_eq!(panel.state(), PanelState::Idle);
        assert_eq!(panel.inline_error(), Some(INVALID_LINK_MESSAGE));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut panel = ResultPanel::new();
        panel.begin_dispatch();
        panel.show_empty("not found");
        panel.fail_inline("oops");
        panel.reset();
        assert_eq!(panel.state(), PanelState::Idle);
        assert_eq!(panel.inline_error(), None);
        assert_eq!(panel.empty_message(), None);
    }

    #[test]
    fn test_no_result_message_per_failure_class() {
        assert_eq!(
            no_result_message(&SpotifyError::NoResult("not found".to_string())),
            "not found"
        );
        assert_eq!(
            no_result_message(&SpotifyError::BadStatus(502)),
            "Please check your Spotify link!"
        );

        let parse_err: SpotifyError = serde_json::from_str::<serde_json::Value>("nope")
            .unwrap_err()
            .into();
        assert_eq!(no_result_message(&parse_err), "Failed to parse response data!");
    }

    #[test]
    fn test_search_error_message_http_failure() {
        assert_eq!(
            search_error_message(&SpotifyError::BadStatus(500)),
            "Failed to search. Please try again."
        );
    }
}
