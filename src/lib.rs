//! merkov: k-mer frequencies and next-character transitions for DNA sequences.
//!
//! Given a plain-text sequence file (one sequence per line, FASTA/FASTQ-style
//! header lines skipped), merkov builds two tables in a single pass each:
//!
//! - a count table mapping every length-k substring to its total number of
//!   occurrences across all sequences (overlapping windows included), and
//! - a transition table mapping every k-mer to the characters that
//!   immediately follow it, with per-character counts.
//!
//! Both tables are written to a sorted, human-readable report file, or to
//! JSON with `--format json`.
//!
//! # Example
//!
//! ```no_run
//! use merkov::{count_kmers, count_transitions, KmerLength};
//!
//! # fn main() -> Result<(), merkov::error::KmerLengthError> {
//! let sequences = vec!["ATGTCTGTCTGAA".to_string(), "TCTGAA".to_string()];
//! let k = KmerLength::new(2)?;
//!
//! let counts = count_kmers(&sequences, k);
//! let transitions = count_transitions(&sequences, k);
//!
//! assert_eq!(counts.get("AT"), Some(&1));
//! assert_eq!(transitions["AT"].get(&'G'), Some(&1));
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod counter;
pub mod error;
pub mod reader;
pub mod report;
pub mod run;

pub use counter::{count_kmers, count_transitions, KmerCounts, KmerLength, TransitionCounts};
pub use error::MerkovError;
