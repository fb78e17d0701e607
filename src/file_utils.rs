//! Whole-file reading helpers

use std::fs::File;
use std::io::{self, ErrorKind};
use std::path::Path;

use crate::copy::{CopyError, copy_limited};

/// Read a file's entire contents into a string.
pub fn read_file_to_string(path: &Path) -> io::Result<String> {
    std::fs::read_to_string(path)
}

/// Read a file into a string, failing with [`CopyError::LimitExceeded`] if
/// it holds more than `limit` bytes. Non-UTF-8 content reads as an
/// `InvalidData` I/O error.
pub fn read_file_to_string_limited(path: &Path, limit: u64) -> Result<String, CopyError> {
    let mut file = File::open(path)?;
    let mut buf = Vec::new();
    copy_limited(&mut file, &mut buf, Some(limit))?;
    String::from_utf8(buf).map_err(|e| io::Error::new(ErrorKind::InvalidData, e).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_file_to_string() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("note.txt");
        fs::write(&path, "line one\nline two\n").unwrap();

        assert_eq!(read_file_to_string(&path).unwrap(), "line one\nline two\n");
    }

    #[test]
    fn test_read_missing_file_errors() {
        let dir = TempDir::new().unwrap();
        assert!(read_file_to_string(&dir.path().join("missing.txt")).is_err());
    }

    #[test]
    fn test_limited_read_within_limit() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("small.txt");
        fs::write(&path, "tiny").unwrap();

        assert_eq!(read_file_to_string_limited(&path, 100).unwrap(), "tiny");
    }

    #[test]
    fn test_limited_read_over_limit_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("big.txt");
        fs::write(&path, "0123456789").unwrap();

        let err = read_file_to_string_limited(&path, 5).unwrap_err();
        assert!(matches!(err, CopyError::LimitExceeded { limit: 5 }));
    }

    #[test]
    fn test_limited_read_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("binary.bin");
        fs::write(&path, [0xFF, 0xFE, 0x01]).unwrap();

        let err = read_file_to_string_limited(&path, 100).unwrap_err();
        match err {
            CopyError::Io(e) => assert_eq!(e.kind(), ErrorKind::InvalidData),
            other => panic!("expected Io error, got {other}"),
        }
    }
}
