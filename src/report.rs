//! Report rendering and output.
//!
//! The report is deterministic: one line per k-mer present in the count
//! table, sorted ascending by k-mer, with next-character pairs sorted
//! ascending by character. The whole report is rendered in memory before
//! anything touches the filesystem, so a failed run never leaves a partial
//! report behind.

use std::{collections::BTreeMap, fs, path::Path};

use serde::Serialize;

use crate::{
    cli::OutputFormat,
    counter::{KmerCounts, TransitionCounts},
    error::MerkovError,
};

/// A k-mer with its count and transitions, used for JSON serialization.
#[derive(Serialize)]
struct KmerEntry {
    kmer: String,
    count: u64,
    next: BTreeMap<char, u64>,
}

/// Renders the plain-text report.
///
/// Line shape: `{kmer}: {total} total, next {C: N, ...}`. K-mers with no
/// recorded transitions render as `next {}`.
#[must_use]
pub fn render_report(counts: &KmerCounts, transitions: &TransitionCounts) -> String {
    let mut report = String::new();

    for (kmer, count, next) in sorted_entries(counts, transitions) {
        let pairs: Vec<String> = next.iter().map(|(c, n)| format!("{c}: {n}")).collect();
        report.push_str(&format!("{kmer}: {count} total, next {{{}}}\n", pairs.join(", ")));
    }

    report
}

/// Renders the report as a pretty-printed JSON array, sorted by k-mer.
///
/// # Errors
///
/// Returns [`MerkovError::Json`] if serialization fails.
pub fn render_json(counts: &KmerCounts, transitions: &TransitionCounts) -> Result<String, MerkovError> {
    let entries: Vec<KmerEntry> = sorted_entries(counts, transitions)
        .into_iter()
        .map(|(kmer, count, next)| KmerEntry {
            kmer: kmer.clone(),
            count,
            next,
        })
        .collect();

    let mut json = serde_json::to_string_pretty(&entries)?;
    json.push('\n');
    Ok(json)
}

/// Renders in the requested format and writes the report file in one shot.
///
/// # Errors
///
/// Returns [`MerkovError::WriteReport`] if the file cannot be written.
pub fn write_report<P: AsRef<Path>>(
    counts: &KmerCounts,
    transitions: &TransitionCounts,
    path: P,
    format: OutputFormat,
) -> Result<(), MerkovError> {
    let rendered = match format {
        OutputFormat::Report => render_report(counts, transitions),
        OutputFormat::Json => render_json(counts, transitions)?,
    };

    let path = path.as_ref();
    fs::write(path, rendered).map_err(|source| MerkovError::WriteReport {
        source,
        path: path.to_path_buf(),
    })
}

/// Sorted view over the count table, joined with each k-mer's transitions.
///
/// Every key of the count table appears exactly once, in ascending order;
/// k-mers absent from the transition table get an empty inner map.
fn sorted_entries<'a>(
    counts: &'a KmerCounts,
    transitions: &TransitionCounts,
) -> Vec<(&'a String, u64, BTreeMap<char, u64>)> {
    let mut kmers: Vec<&String> = counts.keys().collect();
    kmers.sort();

    kmers
        .into_iter()
        .map(|kmer| {
            let next: BTreeMap<char, u64> = transitions
                .get(kmer)
                .map(|m| m.iter().map(|(c, n)| (*c, *n)).collect())
                .unwrap_or_default();
            (kmer, counts[kmer], next)
        })
        .collect()
}
