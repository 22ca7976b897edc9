use anyhow::{bail, Result};

use specsearch::backend::{Backend, DbFlavor, Session};

use super::{Config, DbArgs};

/// Display the catalog summary of a QUBRICS-formatted database.
pub fn run(db: &DbArgs, config: &Config) -> Result<()> {
    let (path, flavor) = db.resolve(config)?;
    if flavor != DbFlavor::Qubrics {
        bail!("info is only available for QUBRICS-formatted databases (pass --qubrics)");
    }

    let mut session = Session::new();
    let backend = session.open(&path, flavor)?;
    let Backend::Qubrics(store) = backend else {
        bail!("expected a QUBRICS store");
    };
    let catalog = store.catalog()?;

    println!("QUBRICS Database Information");
    println!("============================");
    println!("File: {}", path.display());
    println!("Catalog entries: {}", catalog.len());
    println!();
    println!("{:>12}  {:>12}  {:>12}", "qid", "RA (deg)", "DEC (deg)");
    for entry in &catalog {
        println!(
            "{:>12}  {:>12.6}  {:>12.6}",
            entry.qid, entry.ra_deg, entry.dec_deg
        );
    }
    Ok(())
}
