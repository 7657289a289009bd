use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FilterError;

// ---------------------------------------------------------------------------
// Species – the fixed categorical universe
// ---------------------------------------------------------------------------

/// Penguin species. The set is closed: anything else is rejected at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Species {
    Adelie,
    Gentoo,
    Chinstrap,
}

impl Species {
    /// All species, in checkbox order.
    pub const ALL: [Species; 3] = [Species::Adelie, Species::Gentoo, Species::Chinstrap];

    pub fn as_str(self) -> &'static str {
        match self {
            Species::Adelie => "Adelie",
            Species::Gentoo => "Gentoo",
            Species::Chinstrap => "Chinstrap",
        }
    }

    /// The whole universe as a set.
    pub fn all() -> BTreeSet<Species> {
        Self::ALL.into_iter().collect()
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Species {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Species::ALL
            .into_iter()
            .find(|sp| sp.as_str() == s.trim())
            .ok_or_else(|| FilterError::UnknownSpecies(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the dataset
// ---------------------------------------------------------------------------

/// One measured specimen. Numeric measurements may be missing in the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub species: Species,
    pub island: String,
    #[serde(default)]
    pub bill_length_mm: Option<f64>,
    #[serde(default)]
    pub bill_depth_mm: Option<f64>,
    #[serde(default)]
    pub flipper_length_mm: Option<f64>,
    #[serde(default)]
    pub body_mass_g: Option<f64>,
    #[serde(default)]
    pub sex: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
}

impl Record {
    /// Row with just the columns the dashboard displays; the rest stay empty.
    pub fn new(
        species: Species,
        island: impl Into<String>,
        bill_length_mm: Option<f64>,
        bill_depth_mm: Option<f64>,
        body_mass_g: Option<f64>,
    ) -> Self {
        Record {
            species,
            island: island.into(),
            bill_length_mm,
            bill_depth_mm,
            flipper_length_mm: None,
            body_mass_g,
            sex: None,
            year: None,
        }
    }
}

// ---------------------------------------------------------------------------
// PenguinDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full, already-validated dataset. Never mutated after construction;
/// sessions share it behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct PenguinDataset {
    pub records: Vec<Record>,
}

impl PenguinDataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        PenguinDataset { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
