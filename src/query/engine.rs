//! Prefix-range query engine
//!
//! A pattern is a substring of some filename exactly when it is a prefix of
//! one of that filename's suffixes. Since the suffix collection is totally
//! ordered by text, every entry with the pattern as a prefix sits in one
//! contiguous block: two binary searches find its bounds, and the block's
//! owner lists name every matching path.

use crate::index::types::{Index, SuffixEntry};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Bounds `[lo, hi)` of the block of entries whose text starts with
/// `pattern`.
///
/// `lo` is the first entry not strictly below the pattern; entries from
/// there on that share the prefix are contiguous, so the second search cuts
/// at the first entry that no longer starts with it. The empty pattern
/// prefixes everything and spans the whole collection.
pub fn prefix_range(entries: &[SuffixEntry], pattern: &[u8]) -> (usize, usize) {
    let lo = entries.partition_point(|e| e.text.as_slice() < pattern);
    let hi = lo + entries[lo..].partition_point(|e| e.text.starts_with(pattern));
    (lo, hi)
}

/// Substring search over a loaded, immutable [`Index`].
pub struct QueryEngine<'a> {
    index: &'a Index,
}

impl<'a> QueryEngine<'a> {
    pub fn new(index: &'a Index) -> Self {
        Self { index }
    }

    /// All indexed paths whose filename contains `pattern`, filtered to
    /// paths that still exist on disk, deduplicated and sorted ascending.
    pub fn search(&self, pattern: &[u8]) -> Vec<PathBuf> {
        self.search_filtered(pattern, |path| path.exists())
    }

    /// Like [`search`](Self::search) with an injectable existence check,
    /// so stale-path behavior is testable without touching the filesystem.
    ///
    /// Paths recorded in the index but rejected by `exists` are silently
    /// dropped; staleness is never an error.
    pub fn search_filtered(
        &self,
        pattern: &[u8],
        mut exists: impl FnMut(&Path) -> bool,
    ) -> Vec<PathBuf> {
        let (lo, hi) = prefix_range(&self.index.entries, pattern);

        let mut found: BTreeSet<PathBuf> = BTreeSet::new();
        for entry in &self.index.entries[lo..hi] {
            for &owner in &entry.owners {
                // The decoder validates owner ranges; an in-memory index is
                // correct by construction
                if let Some(path) = self.index.paths.get(owner as usize) {
                    if !found.contains(path) && exists(path) {
                        found.insert(path.clone());
                    }
                }
            }
        }
        found.into_iter().collect()
    }
}
