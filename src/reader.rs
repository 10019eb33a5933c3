//! Sequence loading.
//!
//! Input is line-oriented plain text: each non-header, non-blank line is one
//! independent sequence. Lines are trimmed and uppercased so downstream
//! counting works on a normalized alphabet.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::error::MerkovError;

/// Reads cleaned sequences from a file.
///
/// Skips blank lines and FASTA/FASTQ-style header lines (first character
/// `>`, `@`, or `+`); every other line is trimmed, uppercased, and kept as
/// one sequence. Lines are never concatenated.
///
/// # Errors
///
/// Returns [`MerkovError::MissingInput`] if the file cannot be opened, and
/// [`MerkovError::Read`] if a line cannot be read.
pub fn read_sequences<P: AsRef<Path>>(path: P) -> Result<Vec<String>, MerkovError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| MerkovError::MissingInput {
        source,
        path: path.to_path_buf(),
    })?;
    read_sequences_from(BufReader::new(file))
}

/// Reads cleaned sequences from any buffered reader.
///
/// Same line handling as [`read_sequences`]; useful for in-memory input.
pub fn read_sequences_from<R: BufRead>(reader: R) -> Result<Vec<String>, MerkovError> {
    let mut sequences = Vec::new();

    for line in reader.lines() {
        let line = line.map_err(|source| MerkovError::Read { source })?;
        let line = line.trim();

        if line.is_empty() || line.starts_with(['>', '@', '+']) {
            continue;
        }

        sequences.push(line.to_uppercase());
    }

    Ok(sequences)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn load(input: &str) -> Vec<String> {
        read_sequences_from(input.as_bytes()).unwrap()
    }

    #[test]
    fn strips_fasta_headers() {
        let sequences = load(">header1\nATGTCTGTCTGAA\n>header2\nTCTGAA\n");
        assert_eq!(sequences, vec!["ATGTCTGTCTGAA", "TCTGAA"]);
    }

    #[test]
    fn strips_fastq_markers() {
        let sequences = load("@read1\nACGT\n+\nIIII\n");
        // '+' separator and '@' header are skipped; quality line survives
        // because the loader does not parse records, only line prefixes.
        assert_eq!(sequences, vec!["ACGT", "IIII"]);
    }

    #[test]
    fn skips_blank_and_whitespace_lines() {
        let sequences = load("ACGT\n\n   \n\tTTGA\n");
        assert_eq!(sequences, vec!["ACGT", "TTGA"]);
    }

    #[test]
    fn uppercases_sequences() {
        let sequences = load("acgt\nAcGt\n");
        assert_eq!(sequences, vec!["ACGT", "ACGT"]);
    }

    #[test]
    fn preserves_input_order() {
        let sequences = load(">a\nTTT\n>b\nAAA\n>c\nGGG\n");
        assert_eq!(sequences, vec!["TTT", "AAA", "GGG"]);
    }

    #[test]
    fn lines_are_independent_sequences() {
        // No multi-line concatenation: two lines stay two sequences.
        let sequences = load(">seq\nACG\nTAC\n");
        assert_eq!(sequences, vec!["ACG", "TAC"]);
    }

    #[test]
    fn empty_input_yields_no_sequences() {
        assert!(load("").is_empty());
        assert!(load(">header only\n").is_empty());
    }

    #[test]
    fn missing_file_is_reported_with_path() {
        let err = read_sequences("/nonexistent/path/to/reads.txt").unwrap_err();
        assert!(matches!(err, MerkovError::MissingInput { .. }));
        assert!(err.to_string().contains("/nonexistent/path/to/reads.txt"));
    }
}
