use std::path::PathBuf;

use eframe::egui::Color32;

use crate::data::model::TrackDataset;
use crate::mission::writer::write_mission;
use crate::selection::{SelectedPoint, SelectionLog};

// ---------------------------------------------------------------------------
// Status line
// ---------------------------------------------------------------------------

/// Message shown in the top bar.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Info(String),
    Error(String),
}

impl Status {
    pub fn text(&self) -> &str {
        match self {
            Status::Info(text) | Status::Error(text) => text,
        }
    }

    pub fn color(&self) -> Color32 {
        match self {
            Status::Info(_) => Color32::LIGHT_GREEN,
            Status::Error(_) => Color32::RED,
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The click handler appends to `selection` during the interactive phase;
/// the mission writer reads it afterwards. Strictly sequential, no locking.
pub struct AppState {
    /// Primary track (None until a file is loaded).
    pub primary: Option<TrackDataset>,

    /// Optional second dataset, drawn as a blue overlay.
    pub overlay: Option<TrackDataset>,

    /// File name of the primary CSV; the mission file name derives from it.
    pub source_name: Option<String>,

    /// Base directory the dated mission directory is created under.
    pub output_dir: PathBuf,

    /// Points picked so far, in click order.
    pub selection: SelectionLog,

    /// Draw direction arrows between consecutive track points.
    pub show_arrows: bool,

    /// Whether the current selection has been written out already.
    pub mission_saved: bool,

    /// Status / error message shown in the UI.
    pub status: Option<Status>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            primary: None,
            overlay: None,
            source_name: None,
            output_dir: PathBuf::from("."),
            selection: SelectionLog::default(),
            show_arrows: true,
            mission_saved: false,
            status: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded primary track. The selection belongs to the
    /// previous track, so it is discarded.
    pub fn set_primary(&mut self, dataset: TrackDataset, source_name: String) {
        self.primary = Some(dataset);
        self.source_name = Some(source_name);
        self.selection.clear();
        self.mission_saved = false;
        self.status = None;
    }

    pub fn set_overlay(&mut self, dataset: TrackDataset) {
        self.overlay = Some(dataset);
    }

    /// Loaded datasets, primary first.
    pub fn datasets(&self) -> impl Iterator<Item = &TrackDataset> {
        self.primary.iter().chain(self.overlay.iter())
    }

    /// Record a clicked point. Duplicates (by rounded value) are refused and
    /// surfaced in the status line.
    pub fn select(&mut self, latitude: f64, longitude: f64) {
        let point = SelectedPoint::new(latitude, longitude);
        if self.selection.push(point) {
            self.mission_saved = false;
            self.status = None;
            log::info!("Selected point: {:.6}, {:.6}", point.latitude, point.longitude);
        } else {
            self.status = Some(Status::Info(format!(
                "{:.6}, {:.6} is already selected",
                point.latitude, point.longitude
            )));
        }
    }

    pub fn undo_selection(&mut self) {
        if self.selection.undo().is_some() {
            self.mission_saved = false;
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.mission_saved = false;
    }

    /// Write the mission file for the current selection.
    pub fn save_mission(&mut self) {
        let Some(source_name) = self.source_name.clone() else {
            self.status = Some(Status::Error("No track loaded".to_string()));
            return;
        };

        match write_mission(self.selection.points(), &self.output_dir, &source_name) {
            Ok(path) => {
                log::info!("Mission file written to {}", path.display());
                self.status = Some(Status::Info(format!(
                    "Mission written to {}",
                    path.display()
                )));
                self.mission_saved = true;
            }
            Err(err) => {
                let err = anyhow::Error::new(err);
                log::error!("Failed to write mission: {err:#}");
                self.status = Some(Status::Error(format!("Error: {err:#}")));
            }
        }
    }

    /// Closing the window writes the mission, unless there is nothing new
    /// to write.
    pub fn save_on_exit(&mut self) {
        if !self.selection.is_empty() && !self.mission_saved {
            self.save_mission();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{FlightMode, Record};

    fn state_with_track(output_dir: PathBuf) -> AppState {
        let mut state = AppState {
            output_dir,
            ..AppState::default()
        };
        state.set_primary(
            TrackDataset::from_records(vec![Record {
                latitude: 47.641,
                longitude: -122.14,
                mode: FlightMode::Unknown,
            }]),
            "flight.csv".to_string(),
        );
        state
    }

    #[test]
    fn select_refuses_duplicates_and_reports() {
        let mut state = state_with_track(PathBuf::from("."));
        state.select(47.641, -122.14);
        state.select(47.641, -122.14);

        assert_eq!(state.selection.len(), 1);
        assert!(matches!(state.status, Some(Status::Info(_))));
    }

    #[test]
    fn save_mission_writes_and_marks_saved() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut state = state_with_track(dir.path().to_path_buf());
        state.select(47.641, -122.14);

        state.save_mission();
        assert!(state.mission_saved);
        let Some(Status::Info(message)) = &state.status else {
            panic!("expected info status, got {:?}", state.status);
        };
        assert!(message.contains("flight.waypoints"));
    }

    #[test]
    fn save_on_exit_skips_when_already_saved() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut state = state_with_track(dir.path().to_path_buf());
        state.select(47.641, -122.14);
        state.save_mission();

        state.status = None;
        state.save_on_exit();
        // No rewrite happened: the status line was not touched again.
        assert_eq!(state.status, None);
    }

    #[test]
    fn save_on_exit_skips_empty_selection() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut state = state_with_track(dir.path().to_path_buf());

        state.save_on_exit();
        assert!(!state.mission_saved);
        assert_eq!(state.status, None);
    }

    #[test]
    fn new_track_discards_the_old_selection() {
        let mut state = state_with_track(PathBuf::from("."));
        state.select(47.641, -122.14);

        state.set_primary(TrackDataset::default(), "other.csv".to_string());
        assert!(state.selection.is_empty());
    }
}
