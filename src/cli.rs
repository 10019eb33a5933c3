//! Command-line interface definition.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// A k-mer frequency and next-character transition counter for DNA sequences.
#[derive(Parser, Debug)]
#[command(name = "merkov")]
#[command(version, author, about, long_about = None)]
pub struct Args {
    /// Path to a sequence file (lines starting with '>', '@', or '+' are skipped)
    pub input: PathBuf,

    /// K-mer length (must be at least 1)
    #[arg(value_parser = parse_k)]
    pub k: usize,

    /// Path for the report file
    #[arg(default_value = "kmer_output.txt")]
    pub output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "report")]
    pub format: OutputFormat,

    /// Suppress informational output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output format for the k-mer report.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    /// Plain-text report ({kmer}: {total} total, next {C: N, ...})
    #[default]
    Report,
    /// JSON array format
    Json,
}

fn parse_k(s: &str) -> Result<usize, String> {
    let k: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;
    if k == 0 {
        return Err("k-mer length must be at least 1".to_string());
    }
    Ok(k)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use clap::Parser;

    #[test]
    fn parses_required_args() {
        let args = Args::try_parse_from(["merkov", "reads.txt", "3"]).unwrap();
        assert_eq!(args.input, PathBuf::from("reads.txt"));
        assert_eq!(args.k, 3);
        assert_eq!(args.output, PathBuf::from("kmer_output.txt"));
        assert!(!args.quiet);
    }

    #[test]
    fn parses_explicit_output() {
        let args = Args::try_parse_from(["merkov", "reads.txt", "3", "out.txt"]).unwrap();
        assert_eq!(args.output, PathBuf::from("out.txt"));
    }

    #[test]
    fn rejects_missing_args() {
        assert!(Args::try_parse_from(["merkov", "reads.txt"]).is_err());
        assert!(Args::try_parse_from(["merkov"]).is_err());
    }

    #[test]
    fn rejects_non_integer_k() {
        let err = Args::try_parse_from(["merkov", "reads.txt", "abc"]).unwrap_err();
        assert!(err.to_string().contains("not a valid number"));
    }

    #[test]
    fn rejects_k_zero() {
        let err = Args::try_parse_from(["merkov", "reads.txt", "0"]).unwrap_err();
        assert!(err.to_string().contains("at least 1"));
    }
}
