use eframe::egui::Ui;
use egui_plot::{Arrows, Legend, MarkerShape, Plot, PlotPoint, PlotPoints, Points};

use crate::color;
use crate::data::model::Record;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Track plot (central panel)
// ---------------------------------------------------------------------------

/// Render the track scatter plot and feed clicks into the selection log.
pub fn track_plot(ui: &mut Ui, state: &mut AppState) {
    let Some(primary) = &state.primary else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a track CSV to start picking waypoints  (File → Open track…)");
        });
        return;
    };

    let mut clicked_at: Option<PlotPoint> = None;

    Plot::new("track_plot")
        .legend(Legend::default())
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            // Direction arrows between consecutive samples, drawn first so
            // the markers stay on top.
            if state.show_arrows && primary.len() >= 2 {
                let origins: PlotPoints = primary.records[..primary.len() - 1]
                    .iter()
                    .map(|r| [r.longitude, r.latitude])
                    .collect();
                let tips: PlotPoints = primary.records[1..]
                    .iter()
                    .map(|r| [r.longitude, r.latitude])
                    .collect();
                plot_ui.arrows(Arrows::new(origins, tips).color(color::ARROW_COLOR));
            }

            // One scatter group per flight mode so the legend lists modes.
            for mode in primary.mode_counts().into_keys() {
                let points: PlotPoints = primary
                    .records
                    .iter()
                    .filter(|r| r.mode == mode)
                    .map(|r| [r.longitude, r.latitude])
                    .collect();
                plot_ui.points(
                    Points::new(points)
                        .color(color::mode_color(&mode))
                        .radius(3.0)
                        .name(mode.to_string()),
                );
            }

            if let Some(overlay) = &state.overlay {
                let points: PlotPoints = overlay
                    .records
                    .iter()
                    .map(|r| [r.longitude, r.latitude])
                    .collect();
                plot_ui.points(
                    Points::new(points)
                        .color(color::OVERLAY_COLOR)
                        .radius(3.0)
                        .name("Overlay"),
                );
            }

            if !state.selection.is_empty() {
                let points: PlotPoints = state
                    .selection
                    .points()
                    .iter()
                    .map(|p| [p.longitude, p.latitude])
                    .collect();
                plot_ui.points(
                    Points::new(points)
                        .color(color::SELECTION_COLOR)
                        .shape(MarkerShape::Diamond)
                        .radius(6.0)
                        .name("Selected"),
                );
            }

            if plot_ui.response().clicked() {
                clicked_at = plot_ui.pointer_coordinate();
            }
        });

    // Selection happens outside the plot closure: the click handler is the
    // only writer of the log.
    let picked = clicked_at
        .and_then(|pointer| nearest_point(state, pointer))
        .map(|r| (r.latitude, r.longitude));
    if let Some((latitude, longitude)) = picked {
        state.select(latitude, longitude);
    }
}

/// Closest sample to the pointer across all loaded datasets, by squared
/// distance in plot coordinates.
fn nearest_point(state: &AppState, pointer: PlotPoint) -> Option<&Record> {
    let mut best: Option<(&Record, f64)> = None;
    for dataset in state.datasets() {
        for rec in &dataset.records {
            let dx = rec.longitude - pointer.x;
            let dy = rec.latitude - pointer.y;
            let dist = dx * dx + dy * dy;
            if best.map(|(_, d)| dist < d).unwrap_or(true) {
                best = Some((rec, dist));
            }
        }
    }
    best.map(|(rec, _)| rec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{FlightMode, TrackDataset};

    fn record(latitude: f64, longitude: f64) -> Record {
        Record {
            latitude,
            longitude,
            mode: FlightMode::Unknown,
        }
    }

    #[test]
    fn nearest_point_picks_the_closest_sample() {
        let mut state = AppState::default();
        state.set_primary(
            TrackDataset::from_records(vec![record(47.641, -122.140), record(47.650, -122.150)]),
            "flight.csv".to_string(),
        );

        let hit = nearest_point(&state, PlotPoint::new(-122.141, 47.642)).expect("some point");
        assert_eq!(hit.latitude, 47.641);
    }

    #[test]
    fn nearest_point_searches_the_overlay_too() {
        let mut state = AppState::default();
        state.set_primary(
            TrackDataset::from_records(vec![record(0.0, 0.0)]),
            "flight.csv".to_string(),
        );
        state.set_overlay(TrackDataset::from_records(vec![record(10.0, 10.0)]));

        let hit = nearest_point(&state, PlotPoint::new(9.0, 9.0)).expect("some point");
        assert_eq!(hit.latitude, 10.0);
    }

    #[test]
    fn nearest_point_is_none_without_data() {
        let state = AppState::default();
        assert!(nearest_point(&state, PlotPoint::new(0.0, 0.0)).is_none());
    }
}
