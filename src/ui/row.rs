//! Per-row download-link resolution.
//!
//! Each visible track row owns an independent state machine for resolving
//! its direct download URL. At most one resolution request is outstanding
//! per row, enforced by an explicit in-flight guard. A failed fetch shows a
//! failure label and re-arms the trigger after a fixed delay; a successful
//! fetch is terminal for the row's lifetime.

use std::time::Duration;

use tokio::time::Instant;
use tracing::debug;

use crate::api::ResolverApi;
use crate::config::Timings;
use crate::models::{Resource, TrackInfo, TrackRef};

/// State of a single row's download-link resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowState {
    /// Trigger armed, nothing fetched yet.
    Idle,
    /// A resolution request is in flight; the trigger is disabled.
    Fetching,
    /// The download URL is resolved; terminal for this row.
    Ready(String),
    /// The fetch failed; the trigger re-arms once `until` passes.
    Failed {
        /// Failure-class label shown in place of the trigger text.
        label: &'static str,
        /// When the row reverts to idle.
        until: Instant,
    },
}

/// One track row with its resolution state.
#[derive(Debug, Clone)]
pub struct DownloadRow {
    position: usize,
    label: String,
    track_url: String,
    state: RowState,
    revert_delay: Duration,
}

impl DownloadRow {
    /// Create a row for a track locator.
    pub fn new<S1, S2>(position: usize, label: S1, track_url: S2, revert_delay: Duration) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self {
            position,
            label: label.into(),
            track_url: track_url.into(),
            state: RowState::Idle,
            revert_delay,
        }
    }

    /// Build one row per track of a resolved resource, keyed by position.
    ///
    /// Row state is reset on every rebuild: re-rendering the same list
    /// assigns fresh, unrelated resolver state to each row.
    pub fn rows_for(resource: &Resource, timings: Timings) -> Vec<DownloadRow> {
        match resource {
            Resource::Track(track) => vec![Self::for_track(track, timings)],
            _ => resource
                .track_rows()
                .iter()
                .enumerate()
                .map(|(position, track)| Self::for_track_ref(position, track, timings))
                .collect(),
        }
    }

    /// Row for a track reference inside a list context.
    pub fn for_track_ref(position: usize, track: &TrackRef, timings: Timings) -> Self {
        Self::new(
            position,
            track.display_name(),
            track.track_url.clone(),
            timings.failure_revert,
        )
    }

    /// Row for a single-track resource.
    pub fn for_track(track: &TrackInfo, timings: Timings) -> Self {
        Self::new(
            0,
            track.display_name(),
            track.track_url.clone(),
            timings.failure_revert,
        )
    }

    /// Zero-based position of the row in its list.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Display label of the row's track.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The opaque locator this row resolves.
    pub fn track_url(&self) -> &str {
        &self.track_url
    }

    /// Current state.
    pub fn state(&self) -> &RowState {
        &self.state
    }

    /// Whether the trigger currently accepts a press.
    pub fn trigger_enabled(&self) -> bool {
        self.state == RowState::Idle
    }

    /// The resolved download URL, once ready.
    pub fn download_url(&self) -> Option<&str> {
        match &self.state {
            RowState::Ready(url) => Some(url),
            _ => None,
        }
    }

    /// Text on the row's trigger for the current state.
    pub fn trigger_label(&self) -> &str {
        match &self.state {
            RowState::Idle => "Get Download Link",
            RowState::Fetching => "Getting Download Link...",
            RowState::Ready(_) => "Download MP3",
            RowState::Failed { label, .. } => label,
        }
    }

    /// Press the row's trigger: resolve the download URL.
    ///
    /// A press while fetching, failed-and-not-yet-reverted, or already
    /// resolved is ignored. On failure the row shows the failure-class label
    /// and reverts to idle after the configured delay.
    pub async fn trigger(&mut self, api: &ResolverApi) -> &RowState {
        if self.state != RowState::Idle {
            return &self.state;
        }

        self.state = RowState::Fetching;

        match api.get_download(&self.track_url).await {
            Ok(url) => {
                debug!("Row {} resolved download URL", self.position);
                self.state = RowState::Ready(url);
            }
            Err(e) => {
                debug!("Row {} failed to resolve: {}", self.position, e);
                self.fail(e.row_label());
            }
        }

        &self.state
    }

    /// Advance the revert timer: a failed row whose delay has passed
    /// re-arms to idle.
    pub fn tick(&mut self) {
        if let RowState::Failed { until, .. } = &self.state {
            if Instant::now() >= *until {
                self.state = RowState::Idle;
            }
        }
    }

    fn fail(&mut self, label: &'static str) {
        self.state = RowState::Failed {
            label,
            until: Instant::now() + self.revert_delay,
        };
    }
}
