use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use thiserror::Error;

use super::model::Waypoint;
use crate::selection::SelectedPoint;

/// First line of every mission file.
pub const WPL_HEADER: &str = "QGC WPL 110";

/// Extension of the written mission file.
pub const MISSION_EXTENSION: &str = "waypoints";

#[derive(Debug, Error)]
pub enum MissionError {
    #[error("cannot create mission directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write mission file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

// ---------------------------------------------------------------------------
// Mission writer
// ---------------------------------------------------------------------------

/// Serialize the picked points to `<base_dir>/<today>/<stem>.waypoints` and
/// return the path written.
///
/// The directory chain is created on demand and the file is fully rewritten
/// on each call. An empty selection still produces the header-only file.
pub fn write_mission(
    points: &[SelectedPoint],
    base_dir: &Path,
    source_name: &str,
) -> Result<PathBuf, MissionError> {
    write_mission_dated(points, base_dir, chrono::Local::now().date_naive(), source_name)
}

/// As [`write_mission`], with the day directory fixed by the caller.
pub fn write_mission_dated(
    points: &[SelectedPoint],
    base_dir: &Path,
    date: NaiveDate,
    source_name: &str,
) -> Result<PathBuf, MissionError> {
    let dir = base_dir.join(date.format("%Y-%m-%d").to_string());
    fs::create_dir_all(&dir).map_err(|source| MissionError::CreateDir {
        path: dir.clone(),
        source,
    })?;

    let path = dir.join(format!("{}.{MISSION_EXTENSION}", file_stem(source_name)));
    fs::write(&path, render_mission(points)).map_err(|source| MissionError::Write {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}

/// Render the full file contents: header line, then one WPL line per point,
/// `seq` starting at 0.
fn render_mission(points: &[SelectedPoint]) -> String {
    let mut out = String::new();
    out.push_str(WPL_HEADER);
    out.push('\n');
    for (seq, &point) in points.iter().enumerate() {
        // Infallible for String.
        let _ = writeln!(out, "{}", Waypoint::nav(seq, point));
    }
    out
}

/// Strip directories and the extension from the source file name.
fn file_stem(source_name: &str) -> String {
    Path::new(source_name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "mission".to_string())
}
