//! In-memory spectral records and search results.

use std::fmt;

/// Physical unit attached to a spectral column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Wavelength in angstrom.
    Angstrom,
    /// Unitless flux/error values (or uncalibrated instrument units).
    Dimensionless,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Angstrom => write!(f, "Angstrom"),
            Unit::Dimensionless => write!(f, ""),
        }
    }
}

/// The columns of a would-be spectrum had different lengths.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("column length mismatch: wave {wave}, flux {flux}, err {err}")]
pub struct LengthMismatch {
    /// Length of the wavelength column.
    pub wave: usize,
    /// Length of the flux column.
    pub flux: usize,
    /// Length of the error column.
    pub err: usize,
}

/// A single spectrum: wavelength, flux and error arrays of equal length.
///
/// Wavelengths are in angstrom; flux and error are dimensionless. The
/// equal-length invariant is enforced at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumRecord {
    wave: Vec<f64>,
    flux: Vec<f64>,
    err: Vec<f64>,
}

impl SpectrumRecord {
    /// Unit of the wavelength column.
    pub const WAVE_UNIT: Unit = Unit::Angstrom;
    /// Unit of the flux and error columns.
    pub const FLUX_UNIT: Unit = Unit::Dimensionless;

    /// Build a record, checking that all three columns have equal length.
    pub fn new(wave: Vec<f64>, flux: Vec<f64>, err: Vec<f64>) -> Result<Self, LengthMismatch> {
        if wave.len() != flux.len() || wave.len() != err.len() {
            return Err(LengthMismatch {
                wave: wave.len(),
                flux: flux.len(),
                err: err.len(),
            });
        }
        Ok(Self { wave, flux, err })
    }

    /// Wavelength column, angstrom.
    pub fn wave(&self) -> &[f64] {
        &self.wave
    }

    /// Flux column.
    pub fn flux(&self) -> &[f64] {
        &self.flux
    }

    /// Error (sigma) column.
    pub fn err(&self) -> &[f64] {
        &self.err
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.wave.len()
    }

    /// True when the spectrum holds no samples.
    pub fn is_empty(&self) -> bool {
        self.wave.is_empty()
    }
}

/// Ordered list of spectra matched by one search.
///
/// A zero-count result is a valid value, distinct from any error: lookup
/// misses are represented here, never raised.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchResult {
    records: Vec<SpectrumRecord>,
}

impl MatchResult {
    /// The zero-count result.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap an ordered list of records.
    pub fn from_records(records: Vec<SpectrumRecord>) -> Self {
        Self { records }
    }

    /// Number of matched spectra.
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// True when nothing matched.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Matched spectra, in match order.
    pub fn records(&self) -> &[SpectrumRecord] {
        &self.records
    }

    /// Consume the result, yielding the records.
    pub fn into_records(self) -> Vec<SpectrumRecord> {
        self.records
    }

    /// Append the records of `other`, preserving order. Used when the
    /// spectra of several matched identifiers are concatenated.
    pub fn extend(&mut self, other: Vec<SpectrumRecord>) {
        self.records.extend(other);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_length_invariant() {
        assert!(SpectrumRecord::new(vec![1.0, 2.0], vec![3.0, 4.0], vec![0.1, 0.2]).is_ok());
        let err = SpectrumRecord::new(vec![1.0, 2.0], vec![3.0], vec![0.1, 0.2]).unwrap_err();
        assert_eq!(err, LengthMismatch { wave: 2, flux: 1, err: 2 });
    }

    #[test]
    fn test_empty_result_is_a_value() {
        let result = MatchResult::empty();
        assert_eq!(result.count(), 0);
        assert!(result.is_empty());
    }

    #[test]
    fn test_extend_preserves_order() {
        let a = SpectrumRecord::new(vec![1.0], vec![2.0], vec![0.1]).unwrap();
        let b = SpectrumRecord::new(vec![3.0], vec![4.0], vec![0.2]).unwrap();
        let mut result = MatchResult::from_records(vec![a.clone()]);
        result.extend(vec![b.clone()]);
        assert_eq!(result.records(), &[a, b]);
    }
}
