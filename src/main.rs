//! # specsearch CLI
//!
//! Command-line front end for searching astronomical spectral databases by
//! sky coordinates or object identifier, and exporting matched spectra to
//! FITS files for an external viewer.
//!
//! ## Usage
//!
//! ```bash
//! # Coordinate search in a QUBRICS-formatted database
//! specsearch search QUBRICS.hdf5 --qubrics --ra-hms "01:15:22.14" \
//!     --dec-dms "03:14:03.13" --radius 1
//!
//! # Identifier lookup, exporting the matches to FITS
//! specsearch search QUBRICS.hdf5 --qubrics --qid 123 --export
//!
//! # Catalog summary
//! specsearch info QUBRICS.hdf5 --qubrics
//! ```

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
