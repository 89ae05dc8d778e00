//! Index writer
//!
//! Serializes an [`Index`] into the on-disk format: a fixed header (magic,
//! version, path count, suffix count) followed by length-prefixed path
//! bytes and length-prefixed suffix entries. Length prefixes are varints,
//! so filenames may contain any byte, including quotes and newlines, with
//! no escaping concerns.

use super::types::{Index, IndexHeader};
use crate::utils::encoding::{encode_varint, encode_varint_u64};
use crate::utils::path_to_bytes;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const WRITE_CHUNK: usize = 64 * 1024;

/// Write the index to a file, creating or truncating it.
pub fn save_index(path: &Path, index: &Index) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot open \"{}\" for writing", path.display()))?;
    let mut out = BufWriter::with_capacity(WRITE_CHUNK, file);
    write_index(&mut out, index)?;
    out.flush()
        .with_context(|| format!("failed to flush \"{}\"", path.display()))?;
    Ok(())
}

/// Encode the index into an arbitrary writer.
pub fn write_index<W: Write>(out: &mut W, index: &Index) -> Result<()> {
    let header = IndexHeader::new(index.paths.len() as u64, index.entries.len() as u64);
    out.write_all(&header.magic.to_le_bytes())?;
    out.write_all(&header.version.to_le_bytes())?;
    out.write_all(&header.path_count.to_le_bytes())?;
    out.write_all(&header.suffix_count.to_le_bytes())?;

    // Encode into a chunk buffer to keep syscall counts down
    let mut buffer = Vec::with_capacity(WRITE_CHUNK);

    for path in &index.paths {
        let bytes = path_to_bytes(path);
        encode_varint_u64(bytes.len() as u64, &mut buffer);
        buffer.extend_from_slice(&bytes);
        if buffer.len() >= WRITE_CHUNK {
            out.write_all(&buffer)?;
            buffer.clear();
        }
    }

    for entry in &index.entries {
        encode_varint_u64(entry.text.len() as u64, &mut buffer);
        buffer.extend_from_slice(&entry.text);
        encode_varint_u64(entry.owners.len() as u64, &mut buffer);
        for &owner in &entry.owners {
            encode_varint(owner, &mut buffer);
        }
        if buffer.len() >= WRITE_CHUNK {
            out.write_all(&buffer)?;
            buffer.clear();
        }
    }

    if !buffer.is_empty() {
        out.write_all(&buffer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::types::{INDEX_MAGIC, INDEX_VERSION, SuffixEntry};
    use std::path::PathBuf;

    #[test]
    fn test_header_layout() {
        let index = Index {
            paths: vec![PathBuf::from("/a"), PathBuf::from("/b")],
            entries: vec![SuffixEntry::new(b"a".to_vec(), 0)],
        };

        let mut encoded = Vec::new();
        write_index(&mut encoded, &index).unwrap();

        assert_eq!(
            u32::from_le_bytes(encoded[0..4].try_into().unwrap()),
            INDEX_MAGIC
        );
        assert_eq!(
            u32::from_le_bytes(encoded[4..8].try_into().unwrap()),
            INDEX_VERSION
        );
        assert_eq!(u64::from_le_bytes(encoded[8..16].try_into().unwrap()), 2);
        assert_eq!(u64::from_le_bytes(encoded[16..24].try_into().unwrap()), 1);
    }

    #[test]
    fn test_empty_index() {
        let mut encoded = Vec::new();
        write_index(&mut encoded, &Index::default()).unwrap();
        assert_eq!(encoded.len(), IndexHeader::SIZE);
    }

    #[test]
    fn test_save_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("index.db");

        save_index(&db, &Index::default()).unwrap();
        assert_eq!(std::fs::read(&db).unwrap().len(), IndexHeader::SIZE);
    }

    #[test]
    fn test_save_unwritable_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("no_such_dir").join("index.db");
        assert!(save_index(&db, &Index::default()).is_err());
    }
}
