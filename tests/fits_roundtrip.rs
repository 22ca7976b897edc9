//! FITS export round-trip tests.

use std::path::Path;

use fitsio::FitsFile;

use specsearch::export::{export_all, write_spectrum};
use specsearch::spectrum::{MatchResult, SpectrumRecord};

fn sample_record(offset: f64) -> SpectrumRecord {
    SpectrumRecord::new(
        vec![4000.0 + offset, 4500.5 + offset, 5000.25 + offset],
        vec![1.25, 0.75, 1.0],
        vec![0.05, 0.0625, 0.05],
    )
    .expect("equal-length columns")
}

fn read_back(path: &Path) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let mut fits = FitsFile::open(path).expect("open exported file");
    let hdu = fits.hdu("SPECTRUM").expect("spectrum table HDU");
    let wave: Vec<f64> = hdu.read_col(&mut fits, "wave").expect("wave column");
    let flux: Vec<f64> = hdu.read_col(&mut fits, "flux").expect("flux column");
    let err: Vec<f64> = hdu.read_col(&mut fits, "err").expect("err column");
    (wave, flux, err)
}

fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-9, "expected {e}, got {a}");
    }
}

#[test]
fn single_spectrum_round_trips() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("spec.fits");
    let record = sample_record(0.0);

    write_spectrum(&record, &path).expect("write spectrum");
    let (wave, flux, err) = read_back(&path);

    assert_close(&wave, record.wave());
    assert_close(&flux, record.flux());
    assert_close(&err, record.err());
}

#[test]
fn export_overwrites_existing_files_silently() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("spec.fits");

    write_spectrum(&sample_record(0.0), &path).expect("first write");
    write_spectrum(&sample_record(100.0), &path).expect("second write");

    let (wave, _, _) = read_back(&path);
    assert_close(&wave, sample_record(100.0).wave());
}

#[test]
fn export_all_names_files_in_match_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let result =
        MatchResult::from_records(vec![sample_record(0.0), sample_record(10.0)]);

    let paths = export_all(&result, Some(dir.path())).expect("export");
    assert_eq!(paths.len(), 2);
    assert_eq!(paths[0].file_name().unwrap(), "spec_0.fits");
    assert_eq!(paths[1].file_name().unwrap(), "spec_1.fits");

    let (wave0, _, _) = read_back(&paths[0]);
    let (wave1, _, _) = read_back(&paths[1]);
    assert_close(&wave0, sample_record(0.0).wave());
    assert_close(&wave1, sample_record(10.0).wave());
}

#[test]
fn export_all_defaults_to_a_fresh_directory() {
    let result = MatchResult::from_records(vec![sample_record(0.0)]);

    let first = export_all(&result, None).expect("first export");
    let second = export_all(&result, None).expect("second export");

    assert!(first[0].is_file());
    assert!(second[0].is_file());
    // Fresh directory per export: successive exports never collide.
    assert_ne!(first[0].parent(), second[0].parent());

    // The default directories are kept for the viewer; tidy up after.
    for path in first.iter().chain(&second) {
        if let Some(parent) = path.parent() {
            let _ = std::fs::remove_dir_all(parent);
        }
    }
}

#[test]
fn empty_result_exports_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let paths = export_all(&MatchResult::empty(), Some(dir.path())).expect("export");
    assert!(paths.is_empty());
}
