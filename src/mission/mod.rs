/// Mission layer: QGC WPL 110 waypoint lines and the file writer.
///
/// Architecture:
/// ```text
///     &[SelectedPoint]
///          │
///          ▼
///     ┌──────────┐
///     │  writer   │  Waypoint::nav per point → <base>/<YYYY-MM-DD>/<stem>.waypoints
///     └──────────┘
/// ```

pub mod model;
pub mod writer;
