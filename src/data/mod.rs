/// Data layer: core types, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///  .parquet / .json / .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → PenguinDataset (Arc, read-only)
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐      ┌─────────────┐
///   │ FilteredView  │◀─────│ FilterState  │  mass threshold, species set
///   └──────────────┘      └─────────────┘
///        │  Snapshot (memoized per filter state)
///        ▼
///   ┌───────────┐
///   │ aggregate  │  count, means, scatter, grid
///   └───────────┘
/// ```

pub mod aggregate;
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod session;
pub mod view;
