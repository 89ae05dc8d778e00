use std::path::PathBuf;

/// Unique identifier for a path: its 0-based position in the path table,
/// assigned once at traversal time and embedded verbatim in owner lists.
pub type PathId = u32;

/// Magic number for index files ("FLDB" in little-endian)
pub const INDEX_MAGIC: u32 = 0x4244_4C46;

/// Current version of the index format
pub const INDEX_VERSION: u32 = 1;

/// One suffix of some filename, together with every path whose filename
/// produced it.
///
/// After the build completes the full collection is strictly ordered by
/// `text` (byte-wise comparison) and unique by `text`. `owners` is a plain
/// concatenation: it is not deduplicated and its order across paths that
/// share a suffix is unspecified, because the underlying sort is unstable
/// for equal texts. Queries normalize by deduplicating and sorting the
/// resolved paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuffixEntry {
    /// Suffix text as raw filename bytes
    pub text: Vec<u8>,
    /// Path identifiers whose filename contains this suffix
    pub owners: Vec<PathId>,
}

impl SuffixEntry {
    pub fn new(text: Vec<u8>, owner: PathId) -> Self {
        Self {
            text,
            owners: vec![owner],
        }
    }
}

/// A complete, immutable index snapshot: the path table plus the sorted,
/// compressed suffix collection. Built once per `updatedb` run, then only
/// ever read.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Index {
    /// Ordered path table; position = [`PathId`]
    pub paths: Vec<PathBuf>,
    /// Sorted by `text`, unique by `text`
    pub entries: Vec<SuffixEntry>,
}

impl Index {
    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    pub fn suffix_count(&self) -> usize {
        self.entries.len()
    }
}

/// Configuration for index building
#[derive(Debug, Clone)]
pub struct IndexConfig {
    /// Partition length at or below which the parallel sorter stops
    /// spawning tasks and sorts sequentially. Bounds fan-out only; has no
    /// effect on the final ordering.
    pub sort_cutoff: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            sort_cutoff: 100_000,
        }
    }
}

/// Fixed-size header at the start of an index file
#[derive(Debug, Clone, Copy)]
pub struct IndexHeader {
    /// Magic number (INDEX_MAGIC)
    pub magic: u32,
    /// Version number
    pub version: u32,
    /// Number of paths in the path table
    pub path_count: u64,
    /// Number of suffix entries
    pub suffix_count: u64,
}

impl IndexHeader {
    /// Size of header in bytes
    pub const SIZE: usize = 4 + 4 + 8 + 8; // 24 bytes

    pub fn new(path_count: u64, suffix_count: u64) -> Self {
        Self {
            magic: INDEX_MAGIC,
            version: INDEX_VERSION,
            path_count,
            suffix_count,
        }
    }
}
