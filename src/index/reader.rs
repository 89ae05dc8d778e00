//! Index reader
//!
//! Decodes a persisted index back into memory. Every read is bounds-checked
//! against the buffer: a stream that is truncated, carries a wrong magic or
//! version, declares counts it cannot satisfy, or references owners outside
//! the path table fails with a [`DecodeError`] instead of producing a
//! partially-read index.

use super::types::{INDEX_MAGIC, INDEX_VERSION, Index, IndexHeader, PathId, SuffixEntry};
use crate::utils::encoding::{decode_varint, decode_varint_u64};
use crate::utils::path_from_bytes;
use anyhow::{Context, Result};
use std::path::Path;
use thiserror::Error;

/// Structured failure while decoding an index stream.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Not an index file at all.
    #[error("bad magic number {found:#010x}")]
    BadMagic { found: u32 },

    /// Written by an incompatible format revision.
    #[error("unsupported index version {0}")]
    UnsupportedVersion(u32),

    /// The stream ended before the declared data did.
    #[error("truncated index: ran out of bytes reading {0}")]
    Truncated(&'static str),

    /// A varint was incomplete or overflowed its integer width.
    #[error("malformed varint reading {0}")]
    BadVarint(&'static str),

    /// A declared count or length cannot be addressed on this platform.
    #[error("declared {what} of {len} is too large")]
    LengthOverflow { what: &'static str, len: u64 },

    /// An owner list references a path the path table does not have.
    #[error("owner id {owner} out of range (path count {path_count})")]
    OwnerOutOfRange { owner: PathId, path_count: u64 },

    /// Bytes remain after the last declared suffix entry.
    #[error("{0} trailing bytes after index data")]
    TrailingBytes(usize),
}

/// Read and decode an index file.
pub fn load_index(path: &Path) -> Result<Index> {
    let data = std::fs::read(path)
        .with_context(|| format!("cannot open \"{}\" for reading", path.display()))?;
    let index = decode_index(&data)
        .with_context(|| format!("malformed index file \"{}\"", path.display()))?;
    Ok(index)
}

/// Decode an index from a complete in-memory byte stream.
pub fn decode_index(data: &[u8]) -> Result<Index, DecodeError> {
    let mut cur = Cursor { data, pos: 0 };

    let magic = cur.u32_le("magic")?;
    if magic != INDEX_MAGIC {
        return Err(DecodeError::BadMagic { found: magic });
    }
    let version = cur.u32_le("version")?;
    if version != INDEX_VERSION {
        return Err(DecodeError::UnsupportedVersion(version));
    }
    let path_count = cur.u64_le("path count")?;
    let suffix_count = cur.u64_le("suffix count")?;

    // Each path and entry costs at least one byte, so a count larger than
    // the remaining stream can never be satisfied. Rejecting it up front
    // also keeps the preallocations honest.
    let remaining = (data.len() - IndexHeader::SIZE) as u64;
    let declared = path_count
        .checked_add(suffix_count)
        .ok_or(DecodeError::Truncated("declared counts"))?;
    if declared > remaining {
        return Err(DecodeError::Truncated("declared counts"));
    }
    let path_count = usize::try_from(path_count).map_err(|_| DecodeError::LengthOverflow {
        what: "path count",
        len: path_count,
    })?;
    let suffix_count = usize::try_from(suffix_count).map_err(|_| DecodeError::LengthOverflow {
        what: "suffix count",
        len: suffix_count,
    })?;

    let mut paths = Vec::with_capacity(path_count);
    for _ in 0..path_count {
        let len = cur.varint_len("path length")?;
        let bytes = cur.take(len, "path bytes")?;
        paths.push(path_from_bytes(bytes.to_vec()));
    }

    let mut entries = Vec::with_capacity(suffix_count);
    for _ in 0..suffix_count {
        let text_len = cur.varint_len("suffix length")?;
        let text = cur.take(text_len, "suffix bytes")?.to_vec();

        let owner_count = cur.varint_len("owner count")?;
        // Each owner costs at least one byte, so cap the preallocation
        let mut owners = Vec::with_capacity(owner_count.min(cur.remaining()));
        for _ in 0..owner_count {
            let owner = cur.varint_u32("owner id")?;
            if owner as u64 >= path_count as u64 {
                return Err(DecodeError::OwnerOutOfRange {
                    owner,
                    path_count: path_count as u64,
                });
            }
            owners.push(owner);
        }
        entries.push(SuffixEntry { text, owners });
    }

    if cur.pos != data.len() {
        return Err(DecodeError::TrailingBytes(data.len() - cur.pos));
    }

    Ok(Index { paths, entries })
}

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn take(&mut self, n: usize, what: &'static str) -> Result<&'a [u8], DecodeError> {
        let end = self
            .pos
            .checked_add(n)
            .ok_or(DecodeError::Truncated(what))?;
        if end > self.data.len() {
            return Err(DecodeError::Truncated(what));
        }
        let slice = &self.data[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn u32_le(&mut self, what: &'static str) -> Result<u32, DecodeError> {
        let bytes = self.take(4, what)?;
        Ok(u32::from_le_bytes(bytes.try_into().unwrap()))
    }

    fn u64_le(&mut self, what: &'static str) -> Result<u64, DecodeError> {
        let bytes = self.take(8, what)?;
        Ok(u64::from_le_bytes(bytes.try_into().unwrap()))
    }

    fn varint_u32(&mut self, what: &'static str) -> Result<u32, DecodeError> {
        let (value, consumed) =
            decode_varint(&self.data[self.pos..]).ok_or(DecodeError::BadVarint(what))?;
        self.pos += consumed;
        Ok(value)
    }

    /// Decode a varint length and check it against the remaining stream.
    fn varint_len(&mut self, what: &'static str) -> Result<usize, DecodeError> {
        let (value, consumed) =
            decode_varint_u64(&self.data[self.pos..]).ok_or(DecodeError::BadVarint(what))?;
        self.pos += consumed;
        usize::try_from(value).map_err(|_| DecodeError::LengthOverflow { what, len: value })
    }
}
