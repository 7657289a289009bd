use thiserror::Error;

/// Rejected filter mutations. The filter state is left untouched whenever one
/// of these is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error("mass threshold {value} outside [{min}, {max}]")]
    ThresholdOutOfRange { value: f64, min: f64, max: f64 },

    #[error("unknown species '{0}' (expected Adelie, Gentoo or Chinstrap)")]
    UnknownSpecies(String),
}
