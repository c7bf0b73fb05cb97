// src/histogram.rs

//! Per-byte-value frequency analysis over raw input.

/// Occurrence counts for every possible byte value.
///
/// Built fresh for each encode or decode and treated as immutable once
/// normalized; counting uses 64-bit width even though the container
/// persists 32 bits per entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; 256],
}

impl Histogram {
    pub fn new() -> Self {
        Histogram { counts: [0; 256] }
    }

    /// Counts byte occurrences in `data`. An empty input yields an
    /// all-zero histogram.
    pub fn scan(data: &[u8]) -> Self {
        let mut counts = [0u64; 256];
        for &b in data {
            counts[b as usize] += 1;
        }
        Histogram { counts }
    }

    pub(crate) fn from_counts(counts: [u64; 256]) -> Self {
        Histogram { counts }
    }

    /// The occurrence count for one byte value.
    pub fn count(&self, byte: u8) -> u64 {
        self.counts[byte as usize]
    }

    pub fn as_counts(&self) -> &[u64; 256] {
        &self.counts
    }

    /// Number of byte values that occur at least once.
    pub fn nonzero_count(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Iterates over `(byte, count)` pairs with nonzero counts in
    /// ascending byte-value order.
    pub fn nonzero(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(i, &c)| (i as u8, c))
    }

    /// Ensures at least two byte values have nonzero counts, so the
    /// tree builder can produce a binary tree whose codes are all at
    /// least one bit long.
    ///
    /// A histogram with a single distinct value gets a phantom count of
    /// one at the next byte value (255 wraps to 0); an empty histogram
    /// gets phantoms at index 0 and then index 1. Phantom entries are
    /// persisted in the container and round-trip harmlessly: their
    /// codes are never emitted unless the value genuinely occurred.
    ///
    /// Applied only on the encode path; decode consumes the stored
    /// histogram as-is.
    pub fn normalize(&mut self) {
        while self.nonzero_count() < 2 {
            let bumped = match self.counts.iter().position(|&c| c > 0) {
                Some(distinct) => (distinct + 1) % 256,
                None => 0,
            };
            self.counts[bumped] += 1;
        }
    }
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_counts_occurrences() {
        let hist = Histogram::scan(b"AAAB");
        assert_eq!(hist.count(b'A'), 3);
        assert_eq!(hist.count(b'B'), 1);
        assert_eq!(hist.count(b'C'), 0);
        assert_eq!(hist.nonzero_count(), 2);
    }

    #[test]
    fn test_scan_empty_input() {
        let hist = Histogram::scan(&[]);
        assert_eq!(hist.nonzero_count(), 0);
    }

    #[test]
    fn test_normalize_leaves_rich_histogram_alone() {
        let mut hist = Histogram::scan(b"AAAB");
        let before = hist.clone();
        hist.normalize();
        assert_eq!(hist, before);
    }

    #[test]
    fn test_normalize_single_distinct_value() {
        let mut hist = Histogram::scan(&[0x05]);
        hist.normalize();
        assert_eq!(hist.count(0x05), 1);
        assert_eq!(hist.count(0x06), 1);
        assert_eq!(hist.nonzero_count(), 2);
    }

    #[test]
    fn test_normalize_wraps_at_255() {
        let mut hist = Histogram::scan(&[0xFF, 0xFF]);
        hist.normalize();
        assert_eq!(hist.count(0xFF), 2);
        assert_eq!(hist.count(0x00), 1);
    }

    #[test]
    fn test_normalize_empty_histogram() {
        let mut hist = Histogram::new();
        hist.normalize();
        assert_eq!(hist.count(0x00), 1);
        assert_eq!(hist.count(0x01), 1);
        assert_eq!(hist.nonzero_count(), 2);
    }
}
