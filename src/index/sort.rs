//! Fork-join parallel sort
//!
//! Sorts the flat suffix collection by text with a divide-and-conquer merge
//! sort: split at the midpoint, sort both halves as independent rayon tasks,
//! then merge in place once both have joined. The two halves are disjoint
//! sub-slices, so no synchronization beyond the join is needed.
//!
//! Partitions at or below the cutoff are sorted sequentially in the calling
//! worker with an unstable sort; entries with equal text therefore end up in
//! unspecified relative order. The merge itself is stable (left half wins
//! ties), so the cutoff only bounds task fan-out and never changes which
//! total order comes out.

use super::types::SuffixEntry;

/// Sort `entries` ascending by `text` using byte-wise comparison.
pub fn parallel_sort(entries: &mut [SuffixEntry], cutoff: usize) {
    if entries.len() <= 1 {
        return;
    }
    if entries.len() <= cutoff {
        entries.sort_unstable_by(|a, b| a.text.cmp(&b.text));
        return;
    }

    let mid = entries.len() / 2;
    let (left, right) = entries.split_at_mut(mid);
    rayon::join(
        || parallel_sort(left, cutoff),
        || parallel_sort(right, cutoff),
    );
    merge_halves(entries, mid);
}

/// Merge two sorted halves `entries[..mid]` and `entries[mid..]` in place.
///
/// The left half is moved out into scratch space first; entries are then
/// merged back front to back. The write position never catches up with the
/// unread remainder of the right half, so nothing is overwritten early.
fn merge_halves(entries: &mut [SuffixEntry], mid: usize) {
    if entries[mid - 1].text <= entries[mid].text {
        return; // halves already in order
    }

    let mut left: Vec<SuffixEntry> = entries[..mid].iter_mut().map(std::mem::take).collect();

    let mut li = 0;
    let mut ri = mid;
    let mut out = 0;
    while li < left.len() && ri < entries.len() {
        if entries[ri].text < left[li].text {
            let e = std::mem::take(&mut entries[ri]);
            entries[out] = e;
            ri += 1;
        } else {
            entries[out] = std::mem::take(&mut left[li]);
            li += 1;
        }
        out += 1;
    }
    while li < left.len() {
        entries[out] = std::mem::take(&mut left[li]);
        li += 1;
        out += 1;
    }
    // Any remaining right-half entries are already in their final slots.
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::types::PathId;

    fn entry(text: &[u8], owner: PathId) -> SuffixEntry {
        SuffixEntry::new(text.to_vec(), owner)
    }

    fn texts(entries: &[SuffixEntry]) -> Vec<Vec<u8>> {
        entries.iter().map(|e| e.text.clone()).collect()
    }

    fn is_sorted(entries: &[SuffixEntry]) -> bool {
        entries.windows(2).all(|w| w[0].text <= w[1].text)
    }

    #[test]
    fn test_sequential_path() {
        let mut entries = vec![entry(b"na", 0), entry(b"a", 0), entry(b"banana", 0)];
        // Cutoff above the input length: no tasks spawned
        parallel_sort(&mut entries, 100);
        assert_eq!(
            texts(&entries),
            vec![b"a".to_vec(), b"banana".to_vec(), b"na".to_vec()]
        );
    }

    #[test]
    fn test_parallel_path() {
        let mut entries: Vec<SuffixEntry> = (0..257u32)
            .map(|i| entry(format!("file_{:03}", 256 - i).as_bytes(), i))
            .collect();
        // Cutoff of 1 forces the full recursion depth
        parallel_sort(&mut entries, 1);
        assert!(is_sorted(&entries));
        assert_eq!(entries.len(), 257);
    }

    #[test]
    fn test_cutoff_does_not_change_order() {
        let base: Vec<SuffixEntry> = (0..100u32)
            .map(|i| entry(format!("{}", (i * 37) % 50).as_bytes(), i))
            .collect();

        let mut sequential = base.clone();
        parallel_sort(&mut sequential, usize::MAX);
        let mut forked = base.clone();
        parallel_sort(&mut forked, 3);

        assert_eq!(texts(&sequential), texts(&forked));
        assert!(is_sorted(&sequential));
    }

    #[test]
    fn test_duplicate_texts_survive() {
        let mut entries = vec![
            entry(b"dup", 2),
            entry(b"aaa", 0),
            entry(b"dup", 1),
            entry(b"zzz", 3),
            entry(b"dup", 0),
        ];
        parallel_sort(&mut entries, 2);
        assert!(is_sorted(&entries));

        let dup_owners: Vec<PathId> = entries
            .iter()
            .filter(|e| e.text == b"dup")
            .flat_map(|e| e.owners.iter().copied())
            .collect();
        let mut dup_owners = dup_owners;
        dup_owners.sort_unstable();
        assert_eq!(dup_owners, vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: Vec<SuffixEntry> = Vec::new();
        parallel_sort(&mut empty, 0);
        assert!(empty.is_empty());

        let mut one = vec![entry(b"only", 0)];
        parallel_sort(&mut one, 0);
        assert_eq!(one[0].text, b"only");
    }
}
