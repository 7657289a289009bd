use std::sync::Arc;

use super::filter::{filtered_indices, FilterState};
use super::model::{PenguinDataset, Record};

// ---------------------------------------------------------------------------
// Snapshot – one consistent filtered view
// ---------------------------------------------------------------------------

/// The filtered rows for one filter state: the shared dataset plus the indices
/// of the passing rows, in dataset order. Cloning is two refcount bumps.
#[derive(Debug, Clone)]
pub struct Snapshot {
    dataset: Arc<PenguinDataset>,
    indices: Arc<[usize]>,
}

impl Snapshot {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Source indices of the passing rows.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn records(&self) -> impl ExactSizeIterator<Item = &Record> + '_ {
        self.indices.iter().map(|&i| &self.dataset.records[i])
    }

    pub fn dataset(&self) -> &PenguinDataset {
        &self.dataset
    }

    /// True when both snapshots come from the same filtering pass.
    pub fn same_pass(&self, other: &Snapshot) -> bool {
        Arc::ptr_eq(&self.indices, &other.indices)
    }
}

// ---------------------------------------------------------------------------
// FilteredView – memoized filter over an immutable dataset
// ---------------------------------------------------------------------------

/// Memoizes the filtered row set keyed by the last [`FilterState`] it saw.
///
/// `current` only runs the filtering pass when the state differs from the
/// stored key, so any number of consumers reading during one update cycle
/// share a single pass and observe the same snapshot.
#[derive(Debug)]
pub struct FilteredView {
    dataset: Arc<PenguinDataset>,
    cache: Option<(FilterState, Arc<[usize]>)>,
    recompute_count: u64,
}

impl FilteredView {
    pub fn new(dataset: Arc<PenguinDataset>) -> Self {
        Self {
            dataset,
            cache: None,
            recompute_count: 0,
        }
    }

    pub fn dataset(&self) -> &Arc<PenguinDataset> {
        &self.dataset
    }

    /// Snapshot for `filters`, recomputed only if `filters` changed since the
    /// last call.
    pub fn current(&mut self, filters: &FilterState) -> Snapshot {
        let indices = match &self.cache {
            Some((key, indices)) if key == filters => Arc::clone(indices),
            _ => {
                let indices: Arc<[usize]> = filtered_indices(&self.dataset, filters).into();
                self.recompute_count += 1;
                log::debug!(
                    "refiltered: {} of {} rows (mass < {}, species {:?})",
                    indices.len(),
                    self.dataset.len(),
                    filters.mass_threshold(),
                    filters.selected_species()
                );
                self.cache = Some((filters.clone(), Arc::clone(&indices)));
                indices
            }
        };
        Snapshot {
            dataset: Arc::clone(&self.dataset),
            indices,
        }
    }

    /// How many filtering passes have run so far.
    pub fn recompute_count(&self) -> u64 {
        self.recompute_count
    }
}
