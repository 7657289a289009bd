use std::path::Path;
use std::sync::Arc;

use crate::color::SpeciesColors;
use crate::data::export;
use crate::data::loader;
use crate::data::model::{PenguinDataset, Species};
use crate::data::session::Session;
use crate::error::FilterError;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Filters and memoized view over the loaded dataset (None until a file
    /// is loaded).
    pub session: Option<Session>,

    /// Colour per species for the plot and grid.
    pub colors: SpeciesColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl AppState {
    /// Start a fresh session over a newly loaded dataset. Filters reset to
    /// their defaults.
    pub fn set_dataset(&mut self, dataset: PenguinDataset) {
        self.session = Some(Session::new(Arc::new(dataset)));
        self.status_message = None;
        self.loading = false;
    }

    /// Load the dataset compiled into the binary.
    pub fn load_bundled(&mut self) {
        match loader::bundled() {
            Ok(dataset) => {
                log::info!("Loaded {} bundled penguins", dataset.len());
                self.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load bundled dataset: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Load a dataset from disk, reporting failures in the status line.
    pub fn load_path(&mut self, path: &Path) {
        self.loading = true;
        match loader::load_file(path) {
            Ok(dataset) => self.set_dataset(dataset),
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
                self.loading = false;
            }
        }
    }

    pub fn set_mass_threshold(&mut self, value: f64) {
        let result = match &mut self.session {
            Some(session) => session.set_mass_threshold(value),
            None => return,
        };
        self.report(result);
    }

    pub fn toggle_species(&mut self, species: Species) {
        let result = match &mut self.session {
            Some(session) => session.toggle_species(species),
            None => return,
        };
        self.report(result);
    }

    pub fn select_all_species(&mut self) {
        let result = match &mut self.session {
            Some(session) => session.select_all_species(),
            None => return,
        };
        self.report(result);
    }

    pub fn select_no_species(&mut self) {
        let result = match &mut self.session {
            Some(session) => session.select_no_species(),
            None => return,
        };
        self.report(result);
    }

    /// Write the current grid to `path` as CSV.
    pub fn export_grid(&mut self, path: &Path) {
        let Some(session) = &mut self.session else {
            return;
        };
        let grid = session.grid();
        match export::export_grid(&grid, path) {
            Ok(()) => {
                self.status_message = Some(format!("Exported {} rows", grid.len()));
            }
            Err(e) => {
                log::error!("Failed to export grid: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    fn report(&mut self, result: Result<(), FilterError>) {
        if let Err(e) = result {
            self.status_message = Some(format!("Error: {e}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn dataset() -> PenguinDataset {
        PenguinDataset::from_records(vec![
            Record::new(Species::Adelie, "Torgersen", Some(39.1), Some(18.7), Some(3750.0)),
            Record::new(Species::Gentoo, "Biscoe", Some(46.1), Some(13.2), Some(4500.0)),
        ])
    }

    #[test]
    fn filter_calls_without_dataset_are_noops() {
        let mut state = AppState::default();
        state.set_mass_threshold(3000.0);
        state.toggle_species(Species::Adelie);
        assert!(state.session.is_none());
        assert!(state.status_message.is_none());
    }

    #[test]
    fn new_dataset_resets_filters() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        state.set_mass_threshold(4000.0);
        state.toggle_species(Species::Gentoo);

        state.set_dataset(dataset());
        let session = state.session.as_mut().unwrap();
        assert_eq!(session.filters().mass_threshold(), 6000.0);
        assert_eq!(session.count(), 2);
    }

    #[test]
    fn rejected_threshold_surfaces_in_status() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        state.set_mass_threshold(1000.0);
        assert!(state.status_message.as_deref().unwrap().contains("outside"));
        assert_eq!(state.session.as_ref().unwrap().filters().mass_threshold(), 6000.0);
    }

    #[test]
    fn bundled_load_starts_a_full_session() {
        let mut state = AppState::default();
        state.load_bundled();
        let session = state.session.as_mut().unwrap();
        assert_eq!(session.dataset().len(), 344);
        // Defaults show every penguin with a recorded mass below 6000 g.
        let expected = session
            .dataset()
            .records
            .iter()
            .filter(|r| r.body_mass_g.is_some_and(|m| m < 6000.0))
            .count();
        assert_eq!(session.count(), expected);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn failed_load_keeps_previous_session() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        state.load_path(Path::new("does-not-exist.csv"));
        assert!(state.session.is_some());
        assert!(!state.loading);
        assert!(state.status_message.unwrap().starts_with("Error:"));
    }
}
