//! Pipeline orchestration.
//!
//! Data flows one way: loader -> counter -> writer. `analyze` stops after
//! the counting passes and hands both tables back by value; `run` carries
//! on and writes the report file.

use std::path::Path;

use crate::{
    cli::OutputFormat,
    counter::{count_kmers, count_transitions, KmerCounts, KmerLength, TransitionCounts},
    error::MerkovError,
    reader::read_sequences,
    report::write_report,
};

/// Loads sequences and builds both tables.
///
/// # Errors
///
/// Returns [`MerkovError::KmerLength`] for `k == 0` and
/// [`MerkovError::MissingInput`] / [`MerkovError::Read`] for input failures.
pub fn analyze<P: AsRef<Path>>(
    input: P,
    k: usize,
) -> Result<(KmerCounts, TransitionCounts), MerkovError> {
    // Validate k upfront to provide a clear error
    let k = KmerLength::new(k)?;

    let sequences = read_sequences(input)?;
    let counts = count_kmers(&sequences, k);
    let transitions = count_transitions(&sequences, k);

    Ok((counts, transitions))
}

/// Runs the full pipeline: load, count, and write the report file.
///
/// # Errors
///
/// Returns [`MerkovError`] on any input, validation, or output failure. The
/// input fails before the output path is touched, so no partial report file
/// is left on error.
pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    k: usize,
    output: Q,
    format: OutputFormat,
) -> Result<(), MerkovError> {
    let (counts, transitions) = analyze(input, k)?;
    write_report(&counts, &transitions, output, format)
}
