//! Command line configuration for the `catalog-index` binary.

use std::env;
use std::path::PathBuf;

use log::LevelFilter;

use crate::error::{CatalogError, Result};

/// File loaded when neither an argument nor `CATALOG_CSV` names one.
pub const DEFAULT_PATH: &str = "datos.csv";

/// Environment variable consulted for the CSV path when no positional argument is given.
pub const PATH_ENV_VAR: &str = "CATALOG_CSV";

/// Rows printed per price listing unless `--limit` says otherwise.
pub const DEFAULT_LIMIT: usize = 20;

/// Usage text printed for `--help` and after argument errors.
pub const USAGE: &str = "usage: catalog-index [PATH] [--limit N] [--log-level LEVEL]

  PATH               CSV export to load (default: $CATALOG_CSV, then datos.csv)
  --limit N          rows shown per price listing (default: 20)
  --log-level LEVEL  off, error, warn, info, debug or trace (default: warn)";

/// Settings for one run of the program.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// CSV file to load.
    pub path: PathBuf,
    /// Rows shown per price listing.
    pub limit: usize,
    /// Verbosity of the stderr logger.
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
            limit: DEFAULT_LIMIT,
            log_level: LevelFilter::Warn,
        }
    }
}

impl Config {
    /// Parses the process arguments (without the program name), consulting `CATALOG_CSV` for
    /// the path.
    pub fn from_env() -> Result<Self> {
        Self::parse(env::args().skip(1), env::var_os(PATH_ENV_VAR).map(PathBuf::from))
    }

    /// Parses `args` (without the program name), ignoring the environment.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self> {
        Self::parse(args, None)
    }

    fn parse(args: impl IntoIterator<Item = String>, env_path: Option<PathBuf>) -> Result<Self> {
        let mut config = Self::default();
        let mut path = None;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Err(CatalogError::Help),
                "--limit" => {
                    let value = flag_value(&mut args, "--limit")?;
                    config.limit = match value.parse() {
                        Ok(limit) if limit > 0 => limit,
                        _ => return Err(invalid("--limit", &value)),
                    };
                }
                "--log-level" => {
                    let value = flag_value(&mut args, "--log-level")?;
                    config.log_level = value.parse().map_err(|_| invalid("--log-level", &value))?;
                }
                flag if flag.starts_with('-') => {
                    return Err(CatalogError::Config(format!(
                        "unknown option {}\n\n{}",
                        flag, USAGE
                    )));
                }
                _ if path.is_some() => {
                    return Err(CatalogError::Config(format!(
                        "unexpected argument {}\n\n{}",
                        arg, USAGE
                    )));
                }
                _ => path = Some(PathBuf::from(&arg)),
            }
        }

        if let Some(path) = path.or(env_path) {
            config.path = path;
        }
        Ok(config)
    }
}

fn flag_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next()
        .ok_or_else(|| CatalogError::Config(format!("{} needs a value\n\n{}", flag, USAGE)))
}

fn invalid(flag: &str, value: &str) -> CatalogError {
    CatalogError::Config(format!("invalid value for {}: {}", flag, value))
}
