//! Filtering and summary pipeline behind the penguin dashboard.
//!
//! A [`data::session::Session`] owns the user's [`data::filter::FilterState`]
//! and a memoized [`data::view::FilteredView`] over a shared, immutable
//! [`data::model::PenguinDataset`]. Aggregates in [`data::aggregate`] read
//! the memoized snapshot and never refilter.

pub mod color;
pub mod data;
pub mod error;
pub mod state;

pub use data::filter::{FilterState, MASS_DEFAULT, MASS_MAX, MASS_MIN};
pub use data::model::{PenguinDataset, Record, Species};
pub use data::session::Session;
pub use data::view::{FilteredView, Snapshot};
pub use error::FilterError;
