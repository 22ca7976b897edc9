//! Search dispatch over the active backend.
//!
//! One request, four fixed routes: the dispatcher matches on two
//! independent flags (query by identifier versus by coordinates, and
//! QUBRICS versus SpecDB store) and runs the corresponding lookup. The
//! result is always a [`MatchResult`]; lookup misses and capability
//! mismatches come back as zero-count results.

use std::path::Path;

use log::{info, warn};

use crate::backend::{Backend, BackendError, DbFlavor, MetaQuery, Session};
use crate::coords::SkyCoord;
use crate::crossmatch::matches_within;
use crate::input::{parse_input, parse_qid, InvalidInput};
use crate::spectrum::MatchResult;

/// The raw search fields, exactly as the user boundary supplies them.
///
/// All fields are strings; validation happens in [`crate::input`] when the
/// search runs, mirroring the original form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    /// Sexagesimal right ascension (hour angle).
    pub ra_hms: String,
    /// Sexagesimal declination (degrees).
    pub dec_dms: String,
    /// Decimal right ascension (degrees).
    pub ra_deg: String,
    /// Decimal declination (degrees).
    pub dec_deg: String,
    /// Object identifier; non-empty switches the search to ID lookup.
    pub qid: String,
    /// Matching radius, arcseconds.
    pub radius: String,
}

impl SearchInput {
    /// True when the identifier field selects an ID lookup.
    pub fn by_identifier(&self) -> bool {
        !self.qid.trim().is_empty()
    }
}

/// A search failed before producing a result.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// User-supplied parameters failed validation; boundary-reportable.
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),

    /// The store could not be opened or read.
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Run one search against the database at `db`, opening (or reusing) the
/// handle owned by `session`.
///
/// Routing:
///
/// | ID present | QUBRICS | action |
/// |---|---|---|
/// | yes | yes | direct identifier lookup in the store |
/// | yes | no  | metadata query submitted to the provider |
/// | no  | yes | linear coordinate scan over the metadata table |
/// | no  | no  | provider-delegated radius search |
pub fn search_spectra(
    session: &mut Session,
    db: &Path,
    flavor: DbFlavor,
    input: &SearchInput,
) -> Result<MatchResult, SearchError> {
    let backend = session.open(db, flavor)?;

    match (input.by_identifier(), backend) {
        (true, Backend::Qubrics(store)) => {
            let qid = parse_qid(&input.qid)?;
            let spectra = store.spectra_for_qid(qid)?;
            info!("qid {qid}: {} spectra", spectra.len());
            Ok(MatchResult::from_records(spectra))
        }

        (true, Backend::SpecDb(provider)) => {
            let qid = parse_qid(&input.qid)?;
            if !provider.capabilities().meta_query {
                // Capability mismatch is a zero-result response, not a fault.
                warn!("provider does not support metadata queries; reporting zero results");
                return Ok(MatchResult::empty());
            }
            let meta = provider.query_meta(&MetaQuery { qid })?;
            if meta.is_empty() {
                info!("qid {qid}: no metadata rows");
                return Ok(MatchResult::empty());
            }
            Ok(MatchResult::from_records(provider.spectra_from_meta(&meta)?))
        }

        (false, Backend::Qubrics(store)) => {
            let (target, tol) = parse_target(input)?;
            let catalog = store.catalog()?;
            let qids = matches_within(&target, &catalog, tol);
            if qids.is_empty() {
                info!("no catalog entry within {tol}\"");
                return Ok(MatchResult::empty());
            }
            let mut result = MatchResult::empty();
            for qid in qids {
                result.extend(store.spectra_for_qid(qid)?);
            }
            info!("{} spectra within {tol}\"", result.count());
            Ok(result)
        }

        (false, Backend::SpecDb(provider)) => {
            let (target, tol) = parse_target(input)?;
            let spectra = provider.spectra_from_coord(&target, tol)?;
            info!("{} spectra within {tol}\"", spectra.len());
            Ok(MatchResult::from_records(spectra))
        }
    }
}

/// Validate the coordinate fields and resolve them to a target position
/// plus tolerance in arcseconds.
fn parse_target(input: &SearchInput) -> Result<(SkyCoord, f64), InvalidInput> {
    let (coords, tol) = parse_input(
        &input.ra_hms,
        &input.dec_dms,
        &input.ra_deg,
        &input.dec_deg,
        &input.radius,
    )?;
    let target =
        SkyCoord::from_parsed(&coords).map_err(|_| InvalidInput::MalformedCoordinates)?;
    Ok((target, tol))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_flag() {
        let mut input = SearchInput::default();
        assert!(!input.by_identifier());
        input.qid = "123".into();
        assert!(input.by_identifier());
        input.qid = "  ".into();
        assert!(!input.by_identifier());
    }

    #[test]
    fn test_parse_target_resolves_sexagesimal() {
        let input = SearchInput {
            ra_hms: "01 30 00".into(),
            dec_dms: "03 30 00".into(),
            radius: "1".into(),
            ..Default::default()
        };
        let (target, tol) = parse_target(&input).unwrap();
        assert!((target.ra_deg() - 22.5).abs() < 1e-10);
        assert!((target.dec_deg() - 3.5).abs() < 1e-10);
        assert_eq!(tol, 1.0);
    }

    #[test]
    fn test_parse_target_rejects_garbage_components() {
        let input = SearchInput {
            ra_hms: "aa:bb:cc".into(),
            dec_dms: "dd:ee:ff".into(),
            radius: "1".into(),
            ..Default::default()
        };
        assert_eq!(
            parse_target(&input).unwrap_err(),
            InvalidInput::MalformedCoordinates
        );
    }
}
