//! Suffix compression
//!
//! The sorted collection contains one entry per (filename, offset) pair, so
//! a suffix shared by many filenames appears many times in a row. A single
//! forward scan merges each run of equal texts into one entry whose owner
//! list is the concatenation, in scan order, of the run's owner lists. This
//! is what makes the index a compressed suffix index rather than a per-file
//! suffix list.

use super::types::SuffixEntry;

/// Collapse adjacent entries with identical text.
///
/// Input must be sorted by `text`; output is strictly ascending and unique
/// by `text`. Owner lists are concatenated, never deduplicated.
pub fn compress(entries: Vec<SuffixEntry>) -> Vec<SuffixEntry> {
    let mut compressed: Vec<SuffixEntry> = Vec::with_capacity(entries.len());
    for entry in entries {
        match compressed.last_mut() {
            Some(last) if last.text == entry.text => last.owners.extend(entry.owners),
            _ => compressed.push(entry),
        }
    }
    compressed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(text: &[u8], owners: &[u32]) -> SuffixEntry {
        SuffixEntry {
            text: text.to_vec(),
            owners: owners.to_vec(),
        }
    }

    #[test]
    fn test_merges_adjacent_runs() {
        let entries = vec![
            entry(b"a", &[0]),
            entry(b"a", &[2]),
            entry(b"a", &[1]),
            entry(b"ab", &[3]),
            entry(b"b", &[0]),
            entry(b"b", &[3]),
        ];
        let compressed = compress(entries);

        assert_eq!(compressed.len(), 3);
        assert_eq!(compressed[0].text, b"a");
        // Concatenation keeps scan order
        assert_eq!(compressed[0].owners, vec![0, 2, 1]);
        assert_eq!(compressed[1].text, b"ab");
        assert_eq!(compressed[1].owners, vec![3]);
        assert_eq!(compressed[2].owners, vec![0, 3]);
    }

    #[test]
    fn test_strictly_ascending_and_unique() {
        let entries = vec![
            entry(b"a", &[0]),
            entry(b"a", &[1]),
            entry(b"b", &[0]),
            entry(b"c", &[2]),
            entry(b"c", &[0]),
            entry(b"c", &[1]),
        ];
        let compressed = compress(entries);

        assert!(compressed.windows(2).all(|w| w[0].text < w[1].text));
    }

    #[test]
    fn test_no_duplicates_is_identity() {
        let entries = vec![entry(b"alpha", &[0]), entry(b"beta", &[1])];
        assert_eq!(compress(entries.clone()), entries);
    }

    #[test]
    fn test_empty() {
        assert!(compress(Vec::new()).is_empty());
    }
}
