//! # specsearch: coordinate and ID search over astronomical spectral stores
//!
//! `specsearch` searches astronomical spectral databases by sky coordinates
//! or object identifier, and exports matched spectra to FITS binary tables
//! for an external viewer. The custom QUBRICS HDF5 layout is read natively;
//! SpecDB-formatted stores are reached through a registered provider.
//!
//! ## Key pieces
//!
//! - **Input parsing** ([`input`]): raw form-style fields (sexagesimal or
//!   decimal coordinate pair, radius, identifier) validated into typed
//!   values, with user-facing error messages.
//!
//! - **Cross-match** ([`coords`], [`crossmatch`]): angular-separation scan
//!   returning every candidate strictly within the tolerance, in table
//!   order.
//!
//! - **Backends** ([`backend`]): a tagged variant over the two store
//!   flavors behind one [`backend::Session`], which owns the active handle
//!   and reopens it only when the configured path changes. SpecDB stores
//!   stay external: register a [`backend::SpecDbProvider`] to reach them.
//!
//! - **Dispatch** ([`search`]): an explicit four-way match over
//!   (identifier vs coordinates) × (QUBRICS vs SpecDB). Lookup misses and
//!   capability mismatches are zero-count results, never errors.
//!
//! - **Export** ([`export`]): one three-column FITS binary table per
//!   spectrum, then an optional external viewer spawn.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use specsearch::backend::{DbFlavor, Session};
//! use specsearch::search::{search_spectra, SearchInput};
//!
//! let mut session = Session::new();
//! let input = SearchInput {
//!     ra_deg: "150.214".into(),
//!     dec_deg: "-2.137".into(),
//!     radius: "1".into(),
//!     ..Default::default()
//! };
//! let result = search_spectra(
//!     &mut session,
//!     Path::new("QUBRICS.hdf5"),
//!     DbFlavor::Qubrics,
//!     &input,
//! )?;
//! println!("Found {} spectra!", result.count());
//! # Ok::<(), specsearch::search::SearchError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod backend;
pub mod coords;
pub mod crossmatch;
pub mod export;
pub mod input;
pub mod search;
pub mod spectrum;

/// Re-export commonly used types for convenience.
pub mod prelude {
    pub use crate::backend::{
        Backend, BackendError, Capabilities, DbFlavor, MetaQuery, MetaTable, QubricsStore,
        Session, SpecDbProvider,
    };
    pub use crate::coords::SkyCoord;
    pub use crate::crossmatch::{matches_within, CatalogEntry};
    pub use crate::export::{export_all, open_viewer, write_and_open, write_spectrum};
    pub use crate::input::{parse_input, parse_qid, InvalidInput, ParsedCoords};
    pub use crate::search::{search_spectra, SearchError, SearchInput};
    pub use crate::spectrum::{MatchResult, SpectrumRecord, Unit};
}
