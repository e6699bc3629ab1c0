//! Error types for afmatch.

use thiserror::Error;

/// Fatal conditions that abort a run.
///
/// A record with a missing or unparseable AF is not represented here; the
/// record filter excludes it silently.
#[derive(Error, Debug)]
pub enum AfMatchError {
    /// The input has no line starting with `#CHROM`.
    #[error("{path}: no header line starting with '#CHROM'")]
    MissingHeader { path: String },

    /// A column name appears more than once in the header line.
    #[error("{path}: duplicate column '{column}' in header")]
    DuplicateColumn { path: String, column: String },

    /// A column needed for filtering is absent from the header line.
    #[error("{path}: required column '{column}' not found in header")]
    MissingColumn { path: String, column: &'static str },

    /// A data row does not have one field per header column.
    #[error("{path}:{line}: expected {expected} fields but found {found}")]
    RowShape {
        path: String,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid AF threshold {0}: must be finite and non-negative")]
    InvalidThreshold(f64),

    /// htslib could not open the file for decompression.
    #[error("{path}: {source}")]
    Open {
        path: String,
        #[source]
        source: rust_htslib::errors::Error,
    },

    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
}

impl AfMatchError {
    pub(crate) fn io(path: &str, source: std::io::Error) -> Self {
        AfMatchError::Io {
            path: path.to_string(),
            source,
        }
    }
}

/// Result type alias for afmatch operations.
pub type Result<T> = std::result::Result<T, AfMatchError>;
