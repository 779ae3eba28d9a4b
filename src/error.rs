//! Error types for loading and configuring a catalog. The tree itself has no failure modes.

use std::fmt;
use std::io;

/// Why a single CSV record couldn't be turned into a [`Product`][crate::product::Product].
/// These are reported and the record is skipped; they never abort a load.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The line had fewer columns than the layout requires.
    MissingFields {
        /// Columns required by the layout.
        expected: usize,
        /// Columns actually present.
        found: usize,
    },
    /// The SKU column was blank.
    EmptySku,
    /// A price column had no parseable number left after cleanup.
    InvalidPrice {
        /// Header name of the offending column.
        column: &'static str,
        /// The raw field as it appeared in the file.
        value: String,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields { expected, found } => {
                write!(f, "expected {} fields, found {}", expected, found)
            }
            Self::EmptySku => write!(f, "SKU is empty"),
            Self::InvalidPrice { column, value } => {
                write!(f, "invalid price in {}: {:?}", column, value)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Errors that stop a catalog operation as a whole.
#[derive(Debug)]
pub enum CatalogError {
    /// The source file couldn't be opened or read.
    Io(io::Error),
    /// Bad command line arguments.
    Config(String),
    /// `--help` was requested. Displays as the usage text.
    Help,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {}", err),
            Self::Config(msg) => write!(f, "{}", msg),
            Self::Help => write!(f, "{}", crate::config::USAGE),
        }
    }
}

impl CatalogError {
    /// Process exit status for a run that ended with this error. `--help` is a success.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Help => 0,
            Self::Io(_) => 1,
            Self::Config(_) => 2,
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Config(_) | Self::Help => None,
        }
    }
}

impl From<io::Error> for CatalogError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn parse_error_messages() {
        let missing = ParseError::MissingFields {
            expected: 20,
            found: 3,
        };
        assert_eq!(missing.to_string(), "expected 20 fields, found 3");

        let price = ParseError::InvalidPrice {
            column: "PRICE_CURRENT",
            value: "n/a".to_string(),
        };
        assert_eq!(price.to_string(), "invalid price in PRICE_CURRENT: \"n/a\"");
    }

    #[test]
    fn io_error_is_the_source() {
        let err = CatalogError::from(io::Error::new(io::ErrorKind::NotFound, "datos.csv"));

        assert!(err.to_string().starts_with("I/O error: "));
        assert!(err.source().is_some());
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn help_exits_successfully() {
        assert_eq!(CatalogError::Help.exit_code(), 0);
        assert_eq!(CatalogError::Config("bad".to_string()).exit_code(), 2);
    }
}
