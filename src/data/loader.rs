use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::model::{FlightMode, Record, TrackDataset};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Fatal input problems. Raised before any window is shown; rows that merely
/// fail coercion are dropped instead (see [`coerce_row`]).
#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("{} has no latitude/longitude columns", path.display())]
    MissingColumns { path: PathBuf },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a lat/lon track from a CSV file.
///
/// Two layouts are recognized:
/// * a header row naming `latitude`, `longitude` and optionally `mode`
///   (column order free, extra columns ignored);
/// * no header row, with positional columns `latitude, longitude[, mode]` —
///   detected when the first row's first two fields already parse as numbers.
///
/// Rows whose coordinates fail float coercion (or are non-finite) are
/// dropped, non-fatally. A file yielding zero valid rows is an empty
/// dataset, not an error.
pub fn load_track(path: &Path) -> Result<TrackDataset, InputError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)
        .map_err(|source| InputError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let first_row = reader
        .headers()
        .map_err(|source| InputError::Read {
            path: path.to_path_buf(),
            source,
        })?
        .clone();

    let has_named_columns = first_row.iter().any(|h| h == "latitude")
        && first_row.iter().any(|h| h == "longitude");

    if has_named_columns {
        Ok(load_named(reader))
    } else if looks_like_data_row(&first_row) {
        load_positional(path)
    } else {
        Err(InputError::MissingColumns {
            path: path.to_path_buf(),
        })
    }
}

/// A header-less file starts directly with coordinates.
fn looks_like_data_row(row: &csv::StringRecord) -> bool {
    let numeric = |idx: usize| {
        row.get(idx)
            .map(|field| field.parse::<f64>().is_ok())
            .unwrap_or(false)
    };
    numeric(0) && numeric(1)
}

// ---------------------------------------------------------------------------
// Named-header layout
// ---------------------------------------------------------------------------

/// Raw row shape for the named-header layout. Coordinates stay strings so a
/// failed coercion drops the row rather than aborting the read.
#[derive(Debug, Deserialize)]
struct RawRow {
    latitude: String,
    longitude: String,
    #[serde(default)]
    mode: Option<String>,
}

fn load_named(mut reader: csv::Reader<File>) -> TrackDataset {
    let mut records = Vec::new();
    let mut dropped = 0usize;

    for row in reader.deserialize::<RawRow>() {
        match row {
            Ok(raw) => {
                match coerce_row(&raw.latitude, &raw.longitude, raw.mode.as_deref()) {
                    Some(rec) => records.push(rec),
                    None => dropped += 1,
                }
            }
            Err(err) => {
                log::debug!("dropping malformed row: {err}");
                dropped += 1;
            }
        }
    }

    if dropped > 0 {
        log::debug!("dropped {dropped} row(s) with unusable coordinates");
    }
    TrackDataset::from_records(records)
}

// ---------------------------------------------------------------------------
// Positional layout
// ---------------------------------------------------------------------------

fn load_positional(path: &Path) -> Result<TrackDataset, InputError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)
        .map_err(|source| InputError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let mut records = Vec::new();
    let mut dropped = 0usize;

    for row in reader.records() {
        match row {
            Ok(rec) => {
                let lat = rec.get(0).unwrap_or("");
                let lon = rec.get(1).unwrap_or("");
                match coerce_row(lat, lon, rec.get(2)) {
                    Some(parsed) => records.push(parsed),
                    None => dropped += 1,
                }
            }
            Err(err) => {
                log::debug!("dropping malformed row: {err}");
                dropped += 1;
            }
        }
    }

    if dropped > 0 {
        log::debug!("dropped {dropped} row(s) with unusable coordinates");
    }
    Ok(TrackDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Row coercion
// ---------------------------------------------------------------------------

/// Coerce one row. `None` means the row is excluded from the dataset.
fn coerce_row(lat: &str, lon: &str, mode: Option<&str>) -> Option<Record> {
    let latitude = lat.trim().parse::<f64>().ok()?;
    let longitude = lon.trim().parse::<f64>().ok()?;
    if !latitude.is_finite() || !longitude.is_finite() {
        return None;
    }
    Some(Record {
        latitude,
        longitude,
        mode: FlightMode::parse(mode.unwrap_or("")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).expect("create csv");
        file.write_all(contents.as_bytes()).expect("write csv");
        path
    }

    #[test]
    fn loads_named_columns_with_mode() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_csv(
            &dir,
            "track.csv",
            "latitude,longitude,mode\n47.641,-122.140,auto\n47.642,-122.141,manual\n",
        );

        let dataset = load_track(&path).expect("load");
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records[0].latitude, 47.641);
        assert_eq!(dataset.records[0].longitude, -122.140);
        assert_eq!(dataset.records[0].mode, FlightMode::Auto);
        assert_eq!(dataset.records[1].mode, FlightMode::Manual);
    }

    #[test]
    fn missing_mode_column_defaults_to_unknown() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_csv(&dir, "track.csv", "latitude,longitude\n1.5,2.5\n");

        let dataset = load_track(&path).expect("load");
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records[0].mode, FlightMode::Unknown);
    }

    #[test]
    fn empty_mode_cell_defaults_to_unknown() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_csv(
            &dir,
            "track.csv",
            "latitude,longitude,mode\n1.0,2.0,\n3.0,4.0,guided\n",
        );

        let dataset = load_track(&path).expect("load");
        assert_eq!(dataset.records[0].mode, FlightMode::Unknown);
        assert_eq!(dataset.records[1].mode, FlightMode::Guided);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_csv(
            &dir,
            "track.csv",
            "timestamp,latitude,longitude,altitude\n100,1.0,2.0,30\n",
        );

        let dataset = load_track(&path).expect("load");
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records[0].latitude, 1.0);
        assert_eq!(dataset.records[0].longitude, 2.0);
    }

    #[test]
    fn headerless_file_uses_positional_columns() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_csv(
            &dir,
            "track.csv",
            "47.641,-122.140,auto\n47.642,-122.141\n",
        );

        let dataset = load_track(&path).expect("load");
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records[0].mode, FlightMode::Auto);
        assert_eq!(dataset.records[1].mode, FlightMode::Unknown);
    }

    #[test]
    fn rows_with_non_numeric_coordinates_are_dropped() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_csv(
            &dir,
            "track.csv",
            "latitude,longitude\n1.0,2.0\nnorth,west\n3.0,4.0\n,\n",
        );

        let dataset = load_track(&path).expect("load");
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records[1].latitude, 3.0);
    }

    #[test]
    fn non_finite_coordinates_are_dropped() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_csv(
            &dir,
            "track.csv",
            "latitude,longitude\nNaN,2.0\n1.0,inf\n5.0,6.0\n",
        );

        let dataset = load_track(&path).expect("load");
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records[0].latitude, 5.0);
    }

    #[test]
    fn unrecognized_columns_fail() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_csv(&dir, "track.csv", "x,y\n1.0,2.0\n");

        let err = load_track(&path).expect_err("should fail");
        assert!(matches!(err, InputError::MissingColumns { .. }));
    }

    #[test]
    fn missing_file_fails() {
        let err = load_track(Path::new("/nonexistent/track.csv")).expect_err("should fail");
        assert!(matches!(err, InputError::Read { .. }));
    }

    #[test]
    fn all_rows_unusable_yields_empty_dataset() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_csv(&dir, "track.csv", "latitude,longitude\na,b\nc,d\n");

        let dataset = load_track(&path).expect("load");
        assert!(dataset.is_empty());
    }
}
