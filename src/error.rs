//! Error types for merkov.
//!
//! This module provides exhaustive, strongly-typed errors for all operations
//! in the library, enabling precise error handling and informative messages.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in merkov operations.
#[derive(Debug, Error)]
pub enum MerkovError {
    /// Input file does not exist or could not be opened.
    #[error("failed to open input file '{path}': {source}")]
    MissingInput {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// Failed while reading lines from the input.
    #[error("failed to read sequence data: {source}")]
    Read {
        #[source]
        source: std::io::Error,
    },

    /// K-mer length is not a positive integer.
    #[error(transparent)]
    KmerLength(#[from] KmerLengthError),

    /// Failed to write the report file.
    #[error("failed to write report to '{path}': {source}")]
    WriteReport {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// Failed to serialize the JSON report.
    #[error("failed to serialize JSON report: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

/// Error for an invalid k-mer length.
///
/// The counting core stores k-mers as strings, so there is no upper bound on
/// k; only `k == 0` is rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid k-mer length {k}: must be at least 1")]
pub struct KmerLengthError {
    /// The invalid k value that was provided.
    pub k: usize,
}
