//! Native reader for the QUBRICS HDF5 store layout.
//!
//! Layout: root groups are keyed by the decimal object identifier, each
//! holding one or more exposure groups with 1-D float64 `wave`, `flux` and
//! `error` datasets. A root-level `Metadata` dataset is a 2-D float64
//! table whose rows carry the identifier at column 0 and RA/DEC in decimal
//! degrees at columns 4 and 5.

use std::path::{Path, PathBuf};

use log::debug;

use crate::crossmatch::CatalogEntry;
use crate::spectrum::SpectrumRecord;

use super::BackendError;

const METADATA_DATASET: &str = "Metadata";
const WAVE_DATASET: &str = "wave";
const FLUX_DATASET: &str = "flux";
const ERROR_DATASET: &str = "error";

const QID_COLUMN: usize = 0;
const RA_COLUMN: usize = 4;
const DEC_COLUMN: usize = 5;

/// An open QUBRICS-formatted HDF5 store.
pub struct QubricsStore {
    file: hdf5::File,
    path: PathBuf,
}

impl QubricsStore {
    /// Open the store read-only.
    pub fn open(path: &Path) -> Result<Self, BackendError> {
        let file = hdf5::File::open(path)?;
        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    /// Path the store was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the metadata table into catalog entries, in table order. These
    /// are the candidates for the linear cross-match.
    pub fn catalog(&self) -> Result<Vec<CatalogEntry>, BackendError> {
        let dataset = self
            .file
            .dataset(METADATA_DATASET)
            .map_err(|_| BackendError::MissingDataset(METADATA_DATASET.to_string()))?;

        let shape = dataset.shape();
        let (rows, cols) = match shape.as_slice() {
            [rows, cols] => (*rows, *cols),
            _ => return Err(BackendError::MalformedMetadata(0, DEC_COLUMN + 1)),
        };
        if cols <= DEC_COLUMN {
            return Err(BackendError::MalformedMetadata(cols, DEC_COLUMN + 1));
        }

        let flat = dataset.read_raw::<f64>()?;
        let mut entries = Vec::with_capacity(rows);
        for row in flat.chunks_exact(cols) {
            entries.push(CatalogEntry {
                // Identifiers are integral by construction in the catalog.
                qid: row[QID_COLUMN] as u64,
                ra_deg: row[RA_COLUMN],
                dec_deg: row[DEC_COLUMN],
            });
        }
        Ok(entries)
    }

    /// All spectra (sub-exposures) stored under an identifier.
    ///
    /// An identifier absent from the store is a lookup miss: zero spectra,
    /// not an error.
    pub fn spectra_for_qid(&self, qid: u64) -> Result<Vec<SpectrumRecord>, BackendError> {
        let group = match self.file.group(&qid.to_string()) {
            Ok(group) => group,
            Err(_) => {
                debug!("qid {qid} not present in {}", self.path.display());
                return Ok(Vec::new());
            }
        };

        let mut spectra = Vec::new();
        for name in group.member_names()? {
            let exposure = group.group(&name)?;
            let wave = read_column(&exposure, WAVE_DATASET)?;
            let flux = read_column(&exposure, FLUX_DATASET)?;
            let err = read_column(&exposure, ERROR_DATASET)?;
            spectra.push(SpectrumRecord::new(wave, flux, err)?);
        }
        debug!("loaded {} exposure(s) for qid {qid}", spectra.len());
        Ok(spectra)
    }
}

fn read_column(exposure: &hdf5::Group, name: &str) -> Result<Vec<f64>, BackendError> {
    let dataset = exposure
        .dataset(name)
        .map_err(|_| BackendError::MissingDataset(name.to_string()))?;
    Ok(dataset.read_raw::<f64>()?)
}
