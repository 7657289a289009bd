//! Summaries derived from a filtered [`Snapshot`].
//!
//! Every function here is pure over the snapshot it is given; none of them
//! touch the filter or re-run it.

use std::collections::BTreeMap;

use super::model::{Record, Species};
use super::view::Snapshot;

// ---------------------------------------------------------------------------
// Scalars
// ---------------------------------------------------------------------------

/// Number of rows in the view.
pub fn count(snapshot: &Snapshot) -> usize {
    snapshot.len()
}

/// Mean bill length over rows where it is present, rounded to 0.1 mm.
/// `None` when no row carries a value.
pub fn mean_bill_length(snapshot: &Snapshot) -> Option<f64> {
    mean_of(snapshot.records().map(|r| r.bill_length_mm))
}

/// Mean bill depth over rows where it is present, rounded to 0.1 mm.
pub fn mean_bill_depth(snapshot: &Snapshot) -> Option<f64> {
    mean_of(snapshot.records().map(|r| r.bill_depth_mm))
}

/// Arithmetic mean of the present values, rounded to one decimal.
/// Missing values count towards neither the sum nor the denominator.
pub fn mean_of(values: impl Iterator<Item = Option<f64>>) -> Option<f64> {
    let (sum, n) = values
        .flatten()
        .fold((0.0_f64, 0_usize), |(sum, n), v| (sum + v, n + 1));
    if n == 0 {
        return None;
    }
    Some(round1(sum / n as f64))
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Render a mean for a value box: `"42.6 mm"` or `"no data"`.
pub fn format_mean(mean: Option<f64>) -> String {
    match mean {
        Some(v) => format!("{v:.1} mm"),
        None => "no data".to_string(),
    }
}

/// The three value-box numbers, taken from one snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean_bill_length: Option<f64>,
    pub mean_bill_depth: Option<f64>,
}

impl Summary {
    pub fn of(snapshot: &Snapshot) -> Self {
        Summary {
            count: count(snapshot),
            mean_bill_length: mean_bill_length(snapshot),
            mean_bill_depth: mean_bill_depth(snapshot),
        }
    }
}

// ---------------------------------------------------------------------------
// Scatter projection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterPoint {
    pub bill_length_mm: f64,
    pub bill_depth_mm: f64,
    pub species: Species,
}

/// Bill length vs. depth points, in view order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScatterProjection {
    pub points: Vec<ScatterPoint>,
}

impl ScatterProjection {
    /// Points grouped per species, for one legend entry each.
    pub fn by_species(&self) -> BTreeMap<Species, Vec<[f64; 2]>> {
        let mut groups: BTreeMap<Species, Vec<[f64; 2]>> = BTreeMap::new();
        for p in &self.points {
            groups
                .entry(p.species)
                .or_default()
                .push([p.bill_length_mm, p.bill_depth_mm]);
        }
        groups
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Rows with both bill measurements present; the rest cannot be plotted.
pub fn scatter(snapshot: &Snapshot) -> ScatterProjection {
    let points = snapshot
        .records()
        .filter_map(|r| match (r.bill_length_mm, r.bill_depth_mm) {
            (Some(length), Some(depth)) => Some(ScatterPoint {
                bill_length_mm: length,
                bill_depth_mm: depth,
                species: r.species,
            }),
            _ => None,
        })
        .collect();
    ScatterProjection { points }
}

// ---------------------------------------------------------------------------
// Grid projection
// ---------------------------------------------------------------------------

/// One grid row: the displayed subset of a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub struct GridRow {
    pub species: Species,
    pub island: String,
    pub bill_length_mm: Option<f64>,
    pub bill_depth_mm: Option<f64>,
    pub body_mass_g: Option<f64>,
}

impl From<&Record> for GridRow {
    fn from(r: &Record) -> Self {
        GridRow {
            species: r.species,
            island: r.island.clone(),
            bill_length_mm: r.bill_length_mm,
            bill_depth_mm: r.bill_depth_mm,
            body_mass_g: r.body_mass_g,
        }
    }
}

/// The filtered rows restricted to the grid columns. Zero rows is a valid table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridTable {
    rows: Vec<GridRow>,
}

impl GridTable {
    pub const COLUMNS: [&'static str; 5] = [
        "species",
        "island",
        "bill_length_mm",
        "bill_depth_mm",
        "body_mass_g",
    ];

    pub fn rows(&self) -> &[GridRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn grid(snapshot: &Snapshot) -> GridTable {
    GridTable {
        rows: snapshot.records().map(GridRow::from).collect(),
    }
}

/// Cell text for an optional measurement; missing cells show as `NA`.
pub fn format_cell(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v}"),
        None => "NA".to_string(),
    }
}
