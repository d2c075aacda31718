/// Data layer: core types and track loading.
///
/// Architecture:
/// ```text
///    .csv (named or positional columns)
///          │
///          ▼
///     ┌──────────┐
///     │  loader   │  parse + coerce rows → TrackDataset
///     └──────────┘
///          │
///          ▼
///     ┌──────────────┐
///     │ TrackDataset  │  Vec<Record>, mode index for the legend
///     └──────────────┘
/// ```

pub mod loader;
pub mod model;
