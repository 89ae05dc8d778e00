//! Shared utilities.
//!
//! - [`encoding`] - Variable-length integer encoding (varint) used by the
//!   on-disk index format
//! - Path byte conversions: the index treats paths and filenames as opaque
//!   byte strings so names that are not valid UTF-8 still round-trip

pub mod encoding;

use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Full path as raw OS bytes.
#[cfg(unix)]
pub fn path_to_bytes(path: &Path) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(path.as_os_str().as_bytes())
}

/// Full path as raw bytes (lossy outside Unix, where no stable byte view exists).
#[cfg(not(unix))]
pub fn path_to_bytes(path: &Path) -> Cow<'_, [u8]> {
    Cow::Owned(path.to_string_lossy().into_owned().into_bytes())
}

/// Rebuild a path from the bytes produced by [`path_to_bytes`].
#[cfg(unix)]
pub fn path_from_bytes(bytes: Vec<u8>) -> PathBuf {
    use std::os::unix::ffi::OsStringExt;
    PathBuf::from(std::ffi::OsString::from_vec(bytes))
}

/// Rebuild a path from the bytes produced by [`path_to_bytes`].
#[cfg(not(unix))]
pub fn path_from_bytes(bytes: Vec<u8>) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(&bytes).into_owned())
}

/// Final component of a path as raw bytes; empty for paths like `/` or `..`
/// that have no filename.
#[cfg(unix)]
pub fn filename_bytes(path: &Path) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    match path.file_name() {
        Some(name) => Cow::Borrowed(name.as_bytes()),
        None => Cow::Borrowed(&[]),
    }
}

/// Final component of a path as raw bytes; empty when there is no filename.
#[cfg(not(unix))]
pub fn filename_bytes(path: &Path) -> Cow<'_, [u8]> {
    match path.file_name() {
        Some(name) => Cow::Owned(name.to_string_lossy().into_owned().into_bytes()),
        None => Cow::Borrowed(&[]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_round_trip() {
        let path = PathBuf::from("/var/data/index.db");
        let bytes = path_to_bytes(&path).into_owned();
        assert_eq!(path_from_bytes(bytes), path);
    }

    #[test]
    fn test_filename_bytes() {
        assert_eq!(
            filename_bytes(Path::new("/tmp/alpha.txt")).as_ref(),
            b"alpha.txt"
        );
        assert_eq!(filename_bytes(Path::new("/")).as_ref(), b"");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_path_round_trip() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let path = PathBuf::from(OsString::from_vec(vec![b'/', b't', 0xFF, b'x']));
        let bytes = path_to_bytes(&path).into_owned();
        assert_eq!(path_from_bytes(bytes), path);
    }
}
