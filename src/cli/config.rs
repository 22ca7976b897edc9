//! TOML configuration file support.
//!
//! Settings mirror the original application's config keys:
//!
//! ```toml
//! # specsearch.toml
//! active_db = "/data/catalogues/QUBRICS.hdf5"
//! qubrics_db = true
//! ac_path = "/opt/astrocook/ac_gui"
//!
//! [database]
//! igmspec = "/data/catalogues/IGMspec_DB_v03.1.hdf5"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Root configuration structure for specsearch.toml files.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Config {
    /// Database file to search when the command line names none.
    pub active_db: Option<PathBuf>,

    /// Whether the active database uses the QUBRICS layout.
    #[serde(default)]
    pub qubrics_db: bool,

    /// External viewer executable invoked over exported FITS files.
    pub ac_path: Option<PathBuf>,

    /// Well-known database locations.
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Default paths of known databases.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Default SpecDB-formatted database (IGMspec).
    pub igmspec: Option<PathBuf>,
}

impl Config {
    /// File looked up in the working directory when `--config` is absent.
    pub const DEFAULT_FILE: &'static str = "specsearch.toml";

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Load from an explicit path, from `specsearch.toml` in the working
    /// directory if present, or fall back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(Self::DEFAULT_FILE);
                if default.is_file() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            active_db = "/data/QUBRICS.hdf5"
            qubrics_db = true
            ac_path = "/opt/astrocook/ac_gui"

            [database]
            igmspec = "/data/IGMspec_DB_v03.1.hdf5"
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.active_db, Some(PathBuf::from("/data/QUBRICS.hdf5")));
        assert!(config.qubrics_db);
        assert_eq!(config.ac_path, Some(PathBuf::from("/opt/astrocook/ac_gui")));
        assert_eq!(
            config.database.igmspec,
            Some(PathBuf::from("/data/IGMspec_DB_v03.1.hdf5"))
        );
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_str("qubrics_db = true").unwrap();
        assert!(config.qubrics_db);
        assert_eq!(config.active_db, None);
        assert_eq!(config.database.igmspec, None);
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert!(!config.qubrics_db);
        assert_eq!(config.active_db, None);
    }
}
