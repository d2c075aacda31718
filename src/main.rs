mod app;
mod color;
mod data;
mod mission;
mod selection;
mod state;
mod ui;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;

use app::PathPickerApp;
use state::AppState;

#[derive(Parser)]
#[command(
    name = "path-picker",
    version,
    about = "Plot lat/lon tracks and export clicked points as a QGC WPL 110 mission"
)]
struct Cli {
    /// Path to the primary CSV file (a file dialog opens when omitted)
    csv_file: Option<PathBuf>,

    /// Optional second CSV file, drawn as a blue overlay
    #[arg(long = "csv_file_second")]
    csv_file_second: Option<PathBuf>,

    /// Directory the dated mission directory is created under
    #[arg(long = "output_dir", default_value = ".")]
    output_dir: PathBuf,
}

fn main() -> eframe::Result {
    env_logger::init();

    // Input problems are fatal before any window is shown.
    let state = match build_state(&Cli::parse()) {
        Ok(state) => state,
        Err(err) => {
            eprintln!("{err:#}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Path Picker – Waypoint Mission Builder",
        options,
        Box::new(move |_cc| Ok(Box::new(PathPickerApp::new(state)))),
    )
}

fn build_state(cli: &Cli) -> Result<AppState> {
    let csv_path = match &cli.csv_file {
        Some(path) => path.clone(),
        None => prompt_for_csv()?,
    };

    let track = data::loader::load_track(&csv_path)
        .with_context(|| format!("loading {}", csv_path.display()))?;
    log::info!("Loaded {} points from {}", track.len(), csv_path.display());

    let mut state = AppState {
        output_dir: cli.output_dir.clone(),
        ..AppState::default()
    };
    state.set_primary(track, file_name(&csv_path));

    if let Some(second) = &cli.csv_file_second {
        let overlay = data::loader::load_track(second)
            .with_context(|| format!("loading {}", second.display()))?;
        log::info!(
            "Loaded {} overlay points from {}",
            overlay.len(),
            second.display()
        );
        state.set_overlay(overlay);
    }

    Ok(state)
}

fn prompt_for_csv() -> Result<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Open track CSV")
        .add_filter("CSV", &["csv"])
        .pick_file()
        .context("no input file selected")
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "mission.csv".to_string())
}
