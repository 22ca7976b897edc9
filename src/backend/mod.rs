//! Storage backends and the session that owns the active handle.
//!
//! The two store flavors are a tagged variant behind one interface: the
//! QUBRICS HDF5 layout is read natively, while SpecDB-formatted stores are
//! reached through an externally registered [`SpecDbProvider`]. The
//! [`Session`] replaces module-global handle state: it opens the configured
//! store lazily and reopens only when the active path or flavor changes.

mod qubrics;
mod specdb;

pub use qubrics::QubricsStore;
pub use specdb::{Capabilities, MetaQuery, MetaTable, SpecDbProvider};

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::spectrum::LengthMismatch;

/// A backend or store-resource failure.
///
/// Lookup misses are not represented here: an absent identifier or a
/// zero-match search is a zero-count result, not an error.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The database file does not exist.
    #[error("file does not exist, check your path: {0}")]
    Missing(PathBuf),

    /// The database file is not an HDF5 file.
    #[error("wrong file type, please load an hdf5 file: {0}")]
    WrongExtension(PathBuf),

    /// The store could not be read.
    #[error("HDF5 error: {0}")]
    Hdf5(#[from] hdf5::Error),

    /// No SpecDB provider is registered with the session.
    #[error("no SpecDB provider registered; only QUBRICS-formatted databases can be searched")]
    NoProvider,

    /// A required dataset is absent from the store.
    #[error("store is missing dataset {0:?}")]
    MissingDataset(String),

    /// The metadata table does not carry the expected columns.
    #[error("metadata table has {0} columns, expected at least {1}")]
    MalformedMetadata(usize, usize),

    /// A stored spectrum has mismatched column lengths.
    #[error("corrupt spectrum in store: {0}")]
    CorruptSpectrum(#[from] LengthMismatch),

    /// Filesystem error while reaching the store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Provider-side failure, reported by an external SpecDB provider.
    #[error("SpecDB provider error: {0}")]
    Provider(String),
}

/// Which store layout a database file uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbFlavor {
    /// Custom QUBRICS HDF5 layout, read natively.
    Qubrics,
    /// SpecDB-formatted store, reached through a registered provider.
    SpecDb,
}

/// The active backend: a tagged variant, matched explicitly by the
/// dispatcher instead of probing method availability.
pub enum Backend {
    /// Native QUBRICS store.
    Qubrics(QubricsStore),
    /// External SpecDB provider.
    SpecDb(Box<dyn SpecDbProvider>),
}

impl std::fmt::Debug for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::Qubrics(_) => f.write_str("Backend::Qubrics"),
            Backend::SpecDb(_) => f.write_str("Backend::SpecDb"),
        }
    }
}

/// Factory producing a provider for a SpecDB-formatted database file.
pub type ProviderFactory =
    Box<dyn Fn(&Path) -> Result<Box<dyn SpecDbProvider>, BackendError>>;

/// Owner of the active database handle.
///
/// One session, one active store: the handle is opened on first use and
/// reopened only when [`Session::open`] sees a different path or flavor.
#[derive(Default)]
pub struct Session {
    active: Option<(PathBuf, DbFlavor)>,
    backend: Option<Backend>,
    provider_factory: Option<ProviderFactory>,
}

impl Session {
    /// A session with no open store and no SpecDB provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the factory used to open SpecDB-formatted stores. Without
    /// one, only QUBRICS databases can be opened.
    pub fn register_specdb_provider(&mut self, factory: ProviderFactory) {
        self.provider_factory = Some(factory);
    }

    /// Whether a SpecDB provider is registered.
    pub fn specdb_available(&self) -> bool {
        self.provider_factory.is_some()
    }

    /// Open `path` as a store of the given flavor, reusing the current
    /// handle when the path and flavor are unchanged.
    pub fn open(&mut self, path: &Path, flavor: DbFlavor) -> Result<&Backend, BackendError> {
        validate_db_path(path)?;

        let target = (path.to_path_buf(), flavor);
        let reuse = self.backend.is_some() && self.active.as_ref() == Some(&target);
        if reuse {
            debug!("reusing open handle for {}", path.display());
        } else {
            info!("opening {:?} database {}", flavor, path.display());
            let backend = match flavor {
                DbFlavor::Qubrics => Backend::Qubrics(QubricsStore::open(path)?),
                DbFlavor::SpecDb => {
                    let factory =
                        self.provider_factory.as_ref().ok_or(BackendError::NoProvider)?;
                    Backend::SpecDb(factory(path)?)
                }
            };
            self.backend = Some(backend);
            self.active = Some(target);
        }

        match self.backend.as_ref() {
            Some(backend) => Ok(backend),
            // Both arms above leave a backend in place.
            None => unreachable!("open() always leaves a backend behind"),
        }
    }

    /// The currently open backend, if any.
    pub fn backend(&self) -> Option<&Backend> {
        self.backend.as_ref()
    }

    /// Path and flavor of the currently open store, if any.
    pub fn active(&self) -> Option<(&Path, DbFlavor)> {
        self.active.as_ref().map(|(p, f)| (p.as_path(), *f))
    }
}

/// The original enforces these at the file picker: the file must exist and
/// carry the `.hdf5` extension.
fn validate_db_path(path: &Path) -> Result<(), BackendError> {
    if !path.is_file() {
        return Err(BackendError::Missing(path.to_path_buf()));
    }
    if path.extension().map(|e| e == "hdf5").unwrap_or(false) {
        Ok(())
    } else {
        Err(BackendError::WrongExtension(path.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_rejected() {
        let mut session = Session::new();
        let err = session
            .open(Path::new("/no/such/file.hdf5"), DbFlavor::Qubrics)
            .unwrap_err();
        assert!(matches!(err, BackendError::Missing(_)));
    }

    #[test]
    fn test_wrong_extension_is_rejected() {
        let file = tempfile::Builder::new()
            .suffix(".fits")
            .tempfile()
            .unwrap();
        let mut session = Session::new();
        let err = session.open(file.path(), DbFlavor::Qubrics).unwrap_err();
        assert!(matches!(err, BackendError::WrongExtension(_)));
    }

    #[test]
    fn test_specdb_without_provider_is_rejected() {
        let file = tempfile::Builder::new()
            .suffix(".hdf5")
            .tempfile()
            .unwrap();
        let mut session = Session::new();
        assert!(!session.specdb_available());
        let err = session.open(file.path(), DbFlavor::SpecDb).unwrap_err();
        assert!(matches!(err, BackendError::NoProvider));
    }
}
