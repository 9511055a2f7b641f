//! All error types for the localizer crate.
//!
//! These are returned from all fallible operations (loading, import, export, write-back).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid resource directory `{}`: {reason}", path.display())]
    InvalidPath { path: PathBuf, reason: String },

    #[error("XML parse error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    #[error("invalid resource: {0}")]
    InvalidResource(String),

    #[error("failed to parse `{}`: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },

    #[error("CSV parse error: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("invalid csv format: column {column} should be '{expected}', not '{found}'")]
    Format {
        column: usize,
        expected: String,
        found: String,
    },

    #[error("value with name '{0}' from csv is not found in resources file")]
    UnknownKey(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to write locale `{locale}` to `{}`: {source}", path.display())]
    Write {
        locale: String,
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Creates a new invalid path error.
    pub fn invalid_path(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Error::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Wraps a codec error with the file it came from.
    pub fn parse_error(path: impl Into<PathBuf>, source: Error) -> Self {
        Error::Parse {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// Wraps an error raised while persisting one locale's file.
    pub fn write_error(locale: impl Into<String>, path: impl Into<PathBuf>, source: Error) -> Self {
        Error::Write {
            locale: locale.into(),
            path: path.into(),
            source: Box::new(source),
        }
    }
}
