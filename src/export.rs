//! FITS export of matched spectra and external viewer invocation.
//!
//! Each spectrum becomes one FITS file holding a three-column binary table
//! (`wave`, `flux`, `err`, all double precision). Files land in a freshly
//! created temporary directory by default, or in a caller-supplied
//! directory, where existing files of the same name are overwritten
//! silently. Afterwards an external viewer can be spawned over the
//! written paths.

use std::path::{Path, PathBuf};
use std::process::Command;

use fitsio::tables::{ColumnDataType, ColumnDescription};
use fitsio::FitsFile;
use log::{info, warn};

use crate::spectrum::{MatchResult, SpectrumRecord};

/// Extension HDU name of the spectrum table.
pub const TABLE_NAME: &str = "SPECTRUM";

/// An export or viewer-launch failure.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// FITS write/read failure.
    #[error("FITS error: {0}")]
    Fits(#[from] fitsio::errors::Error),

    /// Filesystem failure around the output directory.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The viewer process could not be spawned.
    #[error("failed to launch viewer {0}: {1}")]
    Viewer(PathBuf, std::io::Error),
}

/// Write one spectrum as a three-column binary table at `path`,
/// overwriting any existing file.
pub fn write_spectrum(record: &SpectrumRecord, path: &Path) -> Result<(), ExportError> {
    let mut fits = FitsFile::create(path).overwrite().open()?;

    let columns = [
        ColumnDescription::new("wave")
            .with_type(ColumnDataType::Double)
            .create()?,
        ColumnDescription::new("flux")
            .with_type(ColumnDataType::Double)
            .create()?,
        ColumnDescription::new("err")
            .with_type(ColumnDataType::Double)
            .create()?,
    ];

    let hdu = fits.create_table(TABLE_NAME, &columns)?;
    let hdu = hdu.write_col(&mut fits, "wave", record.wave())?;
    let hdu = hdu.write_col(&mut fits, "flux", record.flux())?;
    hdu.write_col(&mut fits, "err", record.err())?;
    Ok(())
}

/// Export every spectrum of a result to `dir` (a fresh temporary directory
/// when `None`), as `spec_<n>.fits` in match order. Returns the written
/// paths.
///
/// The default directory is created per export and kept on disk so the
/// viewer can read it; successive exports therefore never collide. A reused
/// caller-supplied directory overwrites on name conflict by design.
pub fn export_all(result: &MatchResult, dir: Option<&Path>) -> Result<Vec<PathBuf>, ExportError> {
    let dir = match dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            dir.to_path_buf()
        }
        None => tempfile::Builder::new()
            .prefix("specsearch-")
            .tempdir()?
            .into_path(),
    };

    let mut paths = Vec::with_capacity(result.count());
    for (n, record) in result.records().iter().enumerate() {
        let path = dir.join(format!("spec_{n}.fits"));
        write_spectrum(record, &path)?;
        paths.push(path);
    }
    info!("wrote {} FITS file(s) to {}", paths.len(), dir.display());
    Ok(paths)
}

/// Spawn the external viewer over the exported FITS files and wait for it.
///
/// Only spawn success/failure is consumed; a non-zero viewer exit is logged
/// and otherwise ignored.
pub fn open_viewer(viewer: &Path, fits_paths: &[PathBuf]) -> Result<(), ExportError> {
    if fits_paths.is_empty() {
        warn!("nothing to open");
        return Ok(());
    }

    info!("launching {} with {} file(s)", viewer.display(), fits_paths.len());
    let status = Command::new(viewer)
        .args(fits_paths)
        .status()
        .map_err(|e| ExportError::Viewer(viewer.to_path_buf(), e))?;
    if !status.success() {
        warn!("viewer exited with {status}");
    }
    Ok(())
}

/// Export to a fresh temporary directory and open the viewer over the
/// result. The original's one-click "export and open" path.
pub fn write_and_open(result: &MatchResult, viewer: &Path) -> Result<Vec<PathBuf>, ExportError> {
    let paths = export_all(result, None)?;
    open_viewer(viewer, &paths)?;
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_viewer_with_no_files_does_not_spawn() {
        let missing = Path::new("/no/such/viewer");
        assert!(open_viewer(missing, &[]).is_ok());
    }

    #[test]
    fn test_missing_viewer_executable_is_reported() {
        let missing = Path::new("/no/such/viewer");
        let paths = vec![PathBuf::from("spec_0.fits")];
        let err = open_viewer(missing, &paths).unwrap_err();
        assert!(matches!(err, ExportError::Viewer(_, _)));
    }
}
