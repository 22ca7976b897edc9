use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use specsearch::backend::DbFlavor;

mod config;
mod info;
mod search;

pub use config::Config;

/// specsearch - search spectral databases by coordinates or object ID
#[derive(Parser)]
#[command(name = "specsearch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Load settings from a TOML config file (default: ./specsearch.toml)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Database selection shared by the subcommands.
#[derive(Args)]
struct DbArgs {
    /// Database file (.hdf5); falls back to the configured active_db,
    /// then to the configured default database
    #[arg(value_name = "DB")]
    db: Option<PathBuf>,

    /// Treat the database as QUBRICS-formatted (also settable in config)
    #[arg(long)]
    qubrics: bool,
}

impl DbArgs {
    /// Resolve the database path and flavor against the config, in the
    /// original's precedence: explicit argument, configured active
    /// database, configured default database.
    fn resolve(&self, config: &Config) -> Result<(PathBuf, DbFlavor)> {
        let path = self
            .db
            .clone()
            .or_else(|| config.active_db.clone())
            .or_else(|| config.database.igmspec.clone());
        let Some(path) = path else {
            bail!("no database given: pass a DB argument or set active_db in the config");
        };
        let flavor = if self.qubrics || config.qubrics_db {
            DbFlavor::Qubrics
        } else {
            DbFlavor::SpecDb
        };
        Ok((path, flavor))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Search a database by sky coordinates or object identifier
    Search {
        #[command(flatten)]
        db: DbArgs,

        /// Sexagesimal right ascension, e.g. "01:15:22.14" or "01 15 22.14"
        #[arg(long, value_name = "HMS", default_value = "")]
        ra_hms: String,

        /// Sexagesimal declination, e.g. "03:14:03.13"
        #[arg(long, value_name = "DMS", default_value = "")]
        dec_dms: String,

        /// Decimal right ascension, degrees
        #[arg(long, value_name = "DEG", default_value = "")]
        ra_deg: String,

        /// Decimal declination, degrees
        #[arg(long, value_name = "DEG", default_value = "")]
        dec_deg: String,

        /// Object identifier; when set, coordinates are ignored
        #[arg(long, value_name = "QID", default_value = "")]
        qid: String,

        /// Matching radius in arcseconds
        #[arg(long, value_name = "ARCSEC", default_value = "1")]
        radius: String,

        /// Export matched spectra to FITS files in a fresh temporary
        /// directory
        #[arg(long)]
        export: bool,

        /// Export matched spectra into DIR (existing files are overwritten)
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,

        /// Export and open the configured viewer over the FITS files
        #[arg(long)]
        open: bool,
    },

    /// Print the catalog summary of a QUBRICS-formatted database
    Info {
        #[command(flatten)]
        db: DbArgs,
    },
}

/// Parse arguments, initialize logging and dispatch to a subcommand.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Search {
            db,
            ra_hms,
            dec_dms,
            ra_deg,
            dec_deg,
            qid,
            radius,
            export,
            out_dir,
            open,
        } => search::run(
            &db,
            &config,
            search::SearchOptions {
                ra_hms,
                dec_dms,
                ra_deg,
                dec_deg,
                qid,
                radius,
                export,
                out_dir,
                open,
            },
        ),
        Commands::Info { db } => info::run(&db, &config),
    }
}
