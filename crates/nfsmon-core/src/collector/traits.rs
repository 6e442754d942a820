//! Abstractions for filesystem access to enable testing and mocking.
//!
//! The `FileSystem` trait lets the collector read the real
//! `/proc/self/mountstats` on Linux or an in-memory fixture in tests.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Abstraction for the filesystem operations the collector needs.
pub trait FileSystem: Send + Sync {
    /// Opens a file for line-oriented reading.
    ///
    /// # Arguments
    /// * `path` - Path to the file to open
    fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead + '_>>;

    /// Checks if a path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Real filesystem implementation that delegates to `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFs;

impl RealFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFs {
    fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead + '_>> {
        Ok(Box::new(BufReader::new(File::open(path)?)))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_real_fs_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mountstats");
        std::fs::write(&path, "device a:/x mounted on /mnt/a with fstype nfs\n").unwrap();

        let fs = RealFs::new();
        let mut content = String::new();
        fs.open(&path).unwrap().read_to_string(&mut content).unwrap();
        assert!(content.starts_with("device a:/x"));
    }

    #[test]
    fn test_real_fs_open_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = RealFs::new()
            .open(&dir.path().join("missing"))
            .err()
            .unwrap();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_real_fs_exists() {
        let dir = tempfile::tempdir().unwrap();
        let fs = RealFs::new();
        assert!(fs.exists(dir.path()));
        assert!(!fs.exists(&dir.path().join("nope")));
    }
}
