use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::color;
use crate::data::loader;
use crate::state::{AppState, Status};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open track…").clicked() {
                open_track_dialog(state);
                ui.close_menu();
            }
            if ui.button("Open overlay…").clicked() {
                open_overlay_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(track) = &state.primary {
            ui.label(format!(
                "{} points loaded, {} selected",
                track.len(),
                state.selection.len()
            ));
        }
        if let Some(overlay) = &state.overlay {
            ui.label(format!("overlay: {} points", overlay.len()));
        }

        ui.separator();

        if ui
            .selectable_label(state.show_arrows, "Arrows")
            .clicked()
        {
            state.show_arrows = !state.show_arrows;
        }

        if let Some(status) = &state.status {
            ui.label(RichText::new(status.text()).color(status.color()));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – legend, selection, mission controls
// ---------------------------------------------------------------------------

/// Render the left mission panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Mission");
    ui.separator();

    let Some(track) = &state.primary else {
        ui.label("No track loaded.");
        return;
    };

    // ---- Flight-mode legend ----
    ui.strong("Flight modes");
    for (mode, count) in track.mode_counts() {
        ui.label(
            RichText::new(format!("● {mode}  ({count})")).color(color::mode_color(&mode)),
        );
    }
    ui.separator();

    // ---- Selection list ----
    let points = state.selection.points().to_vec();
    ui.strong(format!("Selected points ({})", points.len()));
    ScrollArea::vertical()
        .auto_shrink([false, true])
        .max_height(220.0)
        .show(ui, |ui: &mut Ui| {
            for (i, point) in points.iter().enumerate() {
                ui.monospace(format!(
                    "{i}: {:.6}, {:.6}",
                    point.latitude, point.longitude
                ));
            }
        });
    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("Undo").clicked() {
            state.undo_selection();
        }
        if ui.small_button("Clear").clicked() {
            state.clear_selection();
        }
    });
    ui.separator();

    // ---- Save ----
    ui.label(format!("Output: {}", state.output_dir.display()));
    if ui.button("Save mission").clicked() {
        state.save_mission();
    }
    if !state.selection.is_empty() && !state.mission_saved {
        ui.label(RichText::new("unsaved selection").weak());
    }
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_track_dialog(state: &mut AppState) {
    let Some(path) = csv_dialog("Open track CSV").pick_file() else {
        return;
    };

    match loader::load_track(&path) {
        Ok(dataset) => {
            log::info!("Loaded {} points from {}", dataset.len(), path.display());
            let source_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "mission.csv".to_string());
            state.set_primary(dataset, source_name);
        }
        Err(err) => {
            log::error!("Failed to load track: {err}");
            state.status = Some(Status::Error(format!("Error: {err}")));
        }
    }
}

pub fn open_overlay_dialog(state: &mut AppState) {
    let Some(path) = csv_dialog("Open overlay CSV").pick_file() else {
        return;
    };

    match loader::load_track(&path) {
        Ok(dataset) => {
            log::info!(
                "Loaded {} overlay points from {}",
                dataset.len(),
                path.display()
            );
            state.set_overlay(dataset);
        }
        Err(err) => {
            log::error!("Failed to load overlay: {err}");
            state.status = Some(Status::Error(format!("Error: {err}")));
        }
    }
}

fn csv_dialog(title: &str) -> rfd::FileDialog {
    rfd::FileDialog::new()
        .set_title(title)
        .add_filter("CSV", &["csv"])
}
