//! External SpecDB provider interface.
//!
//! SpecDB-formatted stores are not read natively (schema management belongs
//! to specdb itself); instead, callers register an implementation of
//! [`SpecDbProvider`] with the session. The trait mirrors the provider
//! surface the dispatcher needs: a spatial radius search, a metadata query
//! by identifier, and spectrum retrieval for a metadata selection.
//!
//! Capabilities are explicit flags. A provider that cannot run metadata
//! queries says so up front, and the dispatcher downgrades such lookups to
//! zero-count results instead of failing.

use crate::coords::SkyCoord;
use crate::spectrum::SpectrumRecord;

use super::BackendError;

/// Capability flags advertised by a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Whether [`SpecDbProvider::query_meta`] is implemented.
    pub meta_query: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self { meta_query: true }
    }
}

/// A metadata query submitted to a provider, keyed by object identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetaQuery {
    /// Identifier to look up.
    pub qid: u64,
}

/// Provider-side metadata selection: the row keys of the matched entries,
/// handed back verbatim to [`SpecDbProvider::spectra_from_meta`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaTable {
    /// Provider row keys of the selection.
    pub rows: Vec<u64>,
}

impl MetaTable {
    /// Number of selected rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the query matched nothing.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A SpecDB-compatible store, supplied by the embedding application.
pub trait SpecDbProvider {
    /// Capability flags of this provider.
    fn capabilities(&self) -> Capabilities {
        Capabilities::default()
    }

    /// All spectra within `tol_arcsec` of `coord`, using the provider's own
    /// spatial index.
    fn spectra_from_coord(
        &self,
        coord: &SkyCoord,
        tol_arcsec: f64,
    ) -> Result<Vec<SpectrumRecord>, BackendError>;

    /// Metadata rows matching the query. An empty table is a lookup miss.
    fn query_meta(&self, query: &MetaQuery) -> Result<MetaTable, BackendError>;

    /// Spectra for a previously returned metadata selection.
    fn spectra_from_meta(&self, meta: &MetaTable) -> Result<Vec<SpectrumRecord>, BackendError>;
}
