use std::collections::BTreeSet;

use super::model::{PenguinDataset, Record, Species};
use crate::error::FilterError;

// ---------------------------------------------------------------------------
// Mass slider bounds
// ---------------------------------------------------------------------------

pub const MASS_MIN: f64 = 2000.0;
pub const MASS_MAX: f64 = 6000.0;
pub const MASS_DEFAULT: f64 = 6000.0;

// ---------------------------------------------------------------------------
// FilterState – the two user-controlled inputs
// ---------------------------------------------------------------------------

/// Current filter inputs. Doubles as the memoization key of the filtered view,
/// hence `PartialEq`.
///
/// Fields are private so every mutation goes through a validating setter.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    mass_threshold: f64,
    selected_species: BTreeSet<Species>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            mass_threshold: MASS_DEFAULT,
            selected_species: Species::all(),
        }
    }
}

impl FilterState {
    pub fn mass_threshold(&self) -> f64 {
        self.mass_threshold
    }

    pub fn selected_species(&self) -> &BTreeSet<Species> {
        &self.selected_species
    }

    pub fn is_selected(&self, species: Species) -> bool {
        self.selected_species.contains(&species)
    }

    /// Set the upper mass bound.
    ///
    /// Precondition: `MASS_MIN <= value <= MASS_MAX`. The slider already
    /// enforces this; anything else (including NaN) is rejected, never clamped.
    pub fn set_mass_threshold(&mut self, value: f64) -> Result<(), FilterError> {
        if !(MASS_MIN..=MASS_MAX).contains(&value) {
            return Err(FilterError::ThresholdOutOfRange {
                value,
                min: MASS_MIN,
                max: MASS_MAX,
            });
        }
        self.mass_threshold = value;
        Ok(())
    }

    /// Replace the species selection. The empty set is valid.
    pub fn set_species_selection(&mut self, selection: BTreeSet<Species>) -> Result<(), FilterError> {
        self.selected_species = selection;
        Ok(())
    }

    /// Flip one species in or out of the selection.
    pub fn toggle_species(&mut self, species: Species) -> Result<(), FilterError> {
        let mut selection = self.selected_species.clone();
        if !selection.remove(&species) {
            selection.insert(species);
        }
        self.set_species_selection(selection)
    }

    pub fn select_all_species(&mut self) -> Result<(), FilterError> {
        self.set_species_selection(Species::all())
    }

    pub fn select_no_species(&mut self) -> Result<(), FilterError> {
        self.set_species_selection(BTreeSet::new())
    }

    /// Membership first, then the strict mass comparison. A missing mass never
    /// passes.
    pub fn matches(&self, record: &Record) -> bool {
        self.selected_species.contains(&record.species)
            && record
                .body_mass_g
                .is_some_and(|mass| mass < self.mass_threshold)
    }
}

/// Return indices of records that pass the filter, in dataset order.
pub fn filtered_indices(dataset: &PenguinDataset, filters: &FilterState) -> Vec<usize> {
    if filters.selected_species.is_empty() {
        return Vec::new();
    }
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| filters.matches(rec))
        .map(|(i, _)| i)
        .collect()
}
