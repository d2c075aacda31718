use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// FlightMode – the flight-controller operating state of a sample
// ---------------------------------------------------------------------------

/// Flight-controller mode attached to a track sample.
///
/// The known modes mirror the states a typical autopilot reports. Anything
/// else the log contains is kept verbatim (upper-cased) in [`FlightMode::Other`]
/// and rendered with the fallback style.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FlightMode {
    #[default]
    Unknown,
    Manual,
    Guided,
    Auto,
    /// A mode label outside the known set, normalized to uppercase.
    Other(String),
}

impl FlightMode {
    /// Parse a mode cell. Trims, upper-cases, and maps empty input to
    /// [`FlightMode::Unknown`]. Never fails: unrecognized labels become
    /// [`FlightMode::Other`].
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "" | "UNKNOWN" => FlightMode::Unknown,
            "MANUAL" => FlightMode::Manual,
            "GUIDED" => FlightMode::Guided,
            "AUTO" => FlightMode::Auto,
            _ => FlightMode::Other(normalized),
        }
    }
}

impl fmt::Display for FlightMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlightMode::Unknown => write!(f, "UNKNOWN"),
            FlightMode::Manual => write!(f, "MANUAL"),
            FlightMode::Guided => write!(f, "GUIDED"),
            FlightMode::Auto => write!(f, "AUTO"),
            FlightMode::Other(label) => write!(f, "{label}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the source CSV
// ---------------------------------------------------------------------------

/// A single track sample (one CSV row after coercion).
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Latitude in decimal degrees. Always finite.
    pub latitude: f64,
    /// Longitude in decimal degrees. Always finite.
    pub longitude: f64,
    /// Flight mode reported for this sample, [`FlightMode::Unknown`] when
    /// the file carries no mode column.
    pub mode: FlightMode,
}

// ---------------------------------------------------------------------------
// TrackDataset – the complete loaded track
// ---------------------------------------------------------------------------

/// The full parsed track, in file order.
#[derive(Debug, Clone, Default)]
pub struct TrackDataset {
    /// All samples (rows), ordered as they appeared in the file.
    pub records: Vec<Record>,
}

impl TrackDataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        TrackDataset { records }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the track is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sample count per flight mode, for the legend.
    pub fn mode_counts(&self) -> BTreeMap<FlightMode, usize> {
        let mut counts: BTreeMap<FlightMode, usize> = BTreeMap::new();
        for rec in &self.records {
            *counts.entry(rec.mode.clone()).or_default() += 1;
        }
        counts
    }
}
