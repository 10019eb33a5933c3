//! K-mer and transition counting.
//!
//! Two independent linear scans over the loaded sequences: one over windows
//! of length k for the count table, one over windows of length k+1 for the
//! transition table. Both are pure functions returning owned tables.

use rustc_hash::FxHashMap;

use crate::error::KmerLengthError;

/// Mapping from k-mer to its total occurrence count across all sequences.
pub type KmerCounts = FxHashMap<String, u64>;

/// Mapping from k-mer to per-character counts of whatever follows it.
pub type TransitionCounts = FxHashMap<String, FxHashMap<char, u64>>;

/// A validated k-mer length.
///
/// K-mers are kept as strings rather than bit-packed integers, so any
/// positive length is valid; only zero is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KmerLength(usize);

impl KmerLength {
    /// Validates a k-mer length.
    ///
    /// # Errors
    ///
    /// Returns [`KmerLengthError`] if `k` is zero.
    pub fn new(k: usize) -> Result<Self, KmerLengthError> {
        if k == 0 {
            return Err(KmerLengthError { k });
        }
        Ok(Self(k))
    }

    /// The underlying length.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

/// Counts every overlapping length-k substring across all sequences.
///
/// A sequence of length `L` contributes `max(L - k + 1, 0)` windows;
/// sequences shorter than k contribute none, and an empty input yields an
/// empty table.
#[must_use]
pub fn count_kmers(sequences: &[String], k: KmerLength) -> KmerCounts {
    let k = k.get();
    let mut counts = KmerCounts::default();

    for seq in sequences {
        let chars: Vec<char> = seq.chars().collect();
        for window in chars.windows(k) {
            *counts.entry(window.iter().collect()).or_insert(0) += 1;
        }
    }

    counts
}

/// Counts, per k-mer, how often each character immediately follows it.
///
/// Walks windows of length k+1, so the trailing k-mer of each sequence
/// (which has no following character) is never recorded here even though
/// [`count_kmers`] counts it. That asymmetry is intentional and load-bearing
/// for the report format.
#[must_use]
pub fn count_transitions(sequences: &[String], k: KmerLength) -> TransitionCounts {
    let k = k.get();
    let mut transitions = TransitionCounts::default();

    for seq in sequences {
        let chars: Vec<char> = seq.chars().collect();
        for window in chars.windows(k + 1) {
            let kmer: String = window[..k].iter().collect();
            let next = window[k];
            *transitions.entry(kmer).or_default().entry(next).or_insert(0) += 1;
        }
    }

    transitions
}
