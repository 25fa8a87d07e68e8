//! UI state machines and text rendering.
//!
//! The user-facing surface is a single result region plus one download
//! trigger per track row. [`panel`] models the region, [`row`]
//! models the per-track resolution lifecycle, and [`render`] turns resolved
//! resources into terminal text.

pub mod panel;
pub mod render;
pub mod row;

pub use panel::{PanelState, ResultPanel};
pub use row::{DownloadRow, RowState};
