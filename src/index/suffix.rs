//! Suffix generation
//!
//! Every filename of length N contributes exactly N entries, one per start
//! offset. Indexing every suffix is what turns substring search into
//! prefix search over a sorted collection: NEEDLE is a substring of a name
//! exactly when NEEDLE is a prefix of one of its suffixes.

use super::types::{PathId, SuffixEntry};

/// Generate all suffixes of `filename`, each owned by `owner`.
///
/// Filenames are opaque byte strings: no decoding, no case folding, no
/// minimum length. An empty filename yields no entries.
pub fn suffixes_of(filename: &[u8], owner: PathId) -> Vec<SuffixEntry> {
    let mut entries = Vec::with_capacity(filename.len());
    for start in 0..filename.len() {
        entries.push(SuffixEntry::new(filename[start..].to_vec(), owner));
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_entry_per_offset() {
        let entries = suffixes_of(b"banana", 7);

        let texts: Vec<&[u8]> = entries.iter().map(|e| e.text.as_slice()).collect();
        let expected: Vec<&[u8]> = vec![b"banana", b"anana", b"nana", b"ana", b"na", b"a"];
        assert_eq!(texts, expected);
        assert!(entries.iter().all(|e| e.owners == vec![7]));
    }

    #[test]
    fn test_single_byte_name() {
        let entries = suffixes_of(b"x", 0);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, b"x");
    }

    #[test]
    fn test_empty_name_yields_nothing() {
        assert!(suffixes_of(b"", 3).is_empty());
    }

    #[test]
    fn test_non_utf8_bytes_kept_verbatim() {
        let entries = suffixes_of(&[0xFF, 0x00, b'a'], 1);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].text, vec![0xFF, 0x00, b'a']);
        assert_eq!(entries[1].text, vec![0x00, b'a']);
        assert_eq!(entries[2].text, vec![b'a']);
    }
}
