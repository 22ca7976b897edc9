//! Linear angular cross-match over a small catalog.

use crate::coords::SkyCoord;

/// One row of the QUBRICS metadata table: identifier plus position in
/// decimal degrees. These are the candidates of the linear scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEntry {
    /// Object identifier.
    pub qid: u64,
    /// Right ascension, degrees.
    pub ra_deg: f64,
    /// Declination, degrees.
    pub dec_deg: f64,
}

impl CatalogEntry {
    /// Position of this entry as a sky coordinate.
    pub fn coord(&self) -> SkyCoord {
        SkyCoord::from_degrees(self.ra_deg, self.dec_deg)
    }
}

/// Identifiers of every entry strictly closer to `target` than
/// `tol_arcsec`, in table order.
///
/// All qualifying entries are returned, not only the nearest; a separation
/// exactly equal to the tolerance does not match. An empty return means
/// zero matches, which callers report as a zero-count result.
///
/// The scan is O(n) with a full coordinate evaluation per candidate. That
/// is fine at private-catalog scale (thousands of rows); past that the
/// table needs a spatial index.
pub fn matches_within(
    target: &SkyCoord,
    entries: &[CatalogEntry],
    tol_arcsec: f64,
) -> Vec<u64> {
    entries
        .iter()
        .filter(|entry| entry.coord().separation_arcsec(target) < tol_arcsec)
        .map(|entry| entry.qid)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A candidate offset from the target by `arcsec` in declination only,
    /// which makes the great-circle separation exact.
    fn entry_at_offset(qid: u64, target: &SkyCoord, arcsec: f64) -> CatalogEntry {
        CatalogEntry {
            qid,
            ra_deg: target.ra_deg(),
            dec_deg: target.dec_deg() + arcsec / 3600.0,
        }
    }

    #[test]
    fn test_candidate_inside_tolerance_matches() {
        let target = SkyCoord::from_degrees(150.0, 2.0);
        let entries = [entry_at_offset(7, &target, 0.5)];
        assert_eq!(matches_within(&target, &entries, 1.0), vec![7]);
    }

    #[test]
    fn test_candidate_outside_tolerance_is_excluded() {
        let target = SkyCoord::from_degrees(150.0, 2.0);
        let entries = [entry_at_offset(7, &target, 0.5)];
        assert!(matches_within(&target, &entries, 0.3).is_empty());
    }

    #[test]
    fn test_boundary_is_strict() {
        let target = SkyCoord::from_degrees(150.0, 2.0);
        let entries = [entry_at_offset(7, &target, 0.5)];
        // Use the computed separation itself as the tolerance: strictly-less
        // must exclude the entry.
        let sep = entries[0].coord().separation_arcsec(&target);
        assert!(matches_within(&target, &entries, sep).is_empty());
    }

    #[test]
    fn test_all_matches_returned_in_table_order() {
        let target = SkyCoord::from_degrees(150.0, 2.0);
        let entries = [
            entry_at_offset(3, &target, 0.9),
            entry_at_offset(1, &target, 0.2),
            entry_at_offset(9, &target, 5.0),
            entry_at_offset(2, &target, 0.6),
        ];
        // Table order, not distance order; the far entry is dropped.
        assert_eq!(matches_within(&target, &entries, 1.0), vec![3, 1, 2]);
    }
}
