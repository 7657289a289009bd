use std::collections::BTreeSet;
use std::sync::Arc;

use super::aggregate::{self, GridTable, ScatterProjection, Summary};
use super::filter::FilterState;
use super::model::{PenguinDataset, Species};
use super::view::{FilteredView, Snapshot};
use crate::error::FilterError;

// ---------------------------------------------------------------------------
// Session – one user's filters over the shared dataset
// ---------------------------------------------------------------------------

/// Per-session filter state plus its memoized view.
///
/// The dataset is shared read-only between sessions; everything mutable lives
/// here. To drive one session from several threads, put it behind a `Mutex`:
/// each setter replaces a whole field inside one `&mut self` call, so
/// `current` never sees half of an update.
#[derive(Debug)]
pub struct Session {
    filters: FilterState,
    view: FilteredView,
}

impl Session {
    pub fn new(dataset: Arc<PenguinDataset>) -> Self {
        Self {
            filters: FilterState::default(),
            view: FilteredView::new(dataset),
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn dataset(&self) -> &Arc<PenguinDataset> {
        self.view.dataset()
    }

    pub fn set_mass_threshold(&mut self, value: f64) -> Result<(), FilterError> {
        self.filters.set_mass_threshold(value).inspect_err(|e| {
            log::warn!("rejected mass threshold: {e}");
        })
    }

    pub fn set_species_selection(&mut self, selection: BTreeSet<Species>) -> Result<(), FilterError> {
        self.filters.set_species_selection(selection)
    }

    pub fn toggle_species(&mut self, species: Species) -> Result<(), FilterError> {
        self.filters.toggle_species(species)
    }

    pub fn select_all_species(&mut self) -> Result<(), FilterError> {
        self.filters.select_all_species()
    }

    pub fn select_no_species(&mut self) -> Result<(), FilterError> {
        self.filters.select_no_species()
    }

    /// The filtered rows for the current filters. Cheap after the first call
    /// of an update cycle.
    pub fn current(&mut self) -> Snapshot {
        self.view.current(&self.filters)
    }

    /// Number of filtering passes run by this session.
    pub fn recompute_count(&self) -> u64 {
        self.view.recompute_count()
    }

    // -- Aggregate accessors, one per dashboard consumer --

    pub fn count(&mut self) -> usize {
        aggregate::count(&self.current())
    }

    pub fn mean_bill_length(&mut self) -> Option<f64> {
        aggregate::mean_bill_length(&self.current())
    }

    pub fn mean_bill_depth(&mut self) -> Option<f64> {
        aggregate::mean_bill_depth(&self.current())
    }

    pub fn scatter(&mut self) -> ScatterProjection {
        aggregate::scatter(&self.current())
    }

    pub fn grid(&mut self) -> GridTable {
        aggregate::grid(&self.current())
    }

    pub fn summary(&mut self) -> Summary {
        Summary::of(&self.current())
    }
}
