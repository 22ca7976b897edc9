use anyhow::{bail, Context, Result};
use std::path::PathBuf;

use specsearch::backend::Session;
use specsearch::export;
use specsearch::search::{search_spectra, SearchInput};

use super::{Config, DbArgs};

/// Flags of the `search` subcommand.
pub struct SearchOptions {
    pub ra_hms: String,
    pub dec_dms: String,
    pub ra_deg: String,
    pub dec_deg: String,
    pub qid: String,
    pub radius: String,
    pub export: bool,
    pub out_dir: Option<PathBuf>,
    pub open: bool,
}

/// Run one search and optionally export/open the matched spectra.
pub fn run(db: &DbArgs, config: &Config, opts: SearchOptions) -> Result<()> {
    let (path, flavor) = db.resolve(config)?;

    let mut session = Session::new();
    let input = SearchInput {
        ra_hms: opts.ra_hms,
        dec_dms: opts.dec_dms,
        ra_deg: opts.ra_deg,
        dec_deg: opts.dec_deg,
        qid: opts.qid,
        radius: opts.radius,
    };

    let result = search_spectra(&mut session, &path, flavor, &input)
        .with_context(|| format!("Search in {} failed", path.display()))?;
    println!("Found {} spectra!", result.count());

    let wants_export = opts.export || opts.out_dir.is_some() || opts.open;
    if !wants_export {
        return Ok(());
    }
    if result.is_empty() {
        println!("Nothing to export.");
        return Ok(());
    }

    let paths = export::export_all(&result, opts.out_dir.as_deref())
        .context("FITS export failed")?;
    for path in &paths {
        println!("  wrote {}", path.display());
    }

    if opts.open {
        let Some(viewer) = config.ac_path.as_deref() else {
            bail!("--open requires ac_path in the config");
        };
        export::open_viewer(viewer, &paths).context("Failed to launch viewer")?;
    }
    Ok(())
}
