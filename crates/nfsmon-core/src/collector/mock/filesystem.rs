//! In-memory mock filesystem for testing collectors without real `/proc`.
//!
//! This module provides `MockFs` which simulates a filesystem in memory,
//! allowing tests to run on macOS and in CI environments without Linux.

use crate::collector::traits::FileSystem;
use std::collections::HashMap;
use std::io::{self, BufRead, Cursor};
use std::path::{Path, PathBuf};

/// In-memory filesystem for testing.
#[derive(Debug, Clone, Default)]
pub struct MockFs {
    /// Map from path to file contents.
    files: HashMap<PathBuf, String>,
}

impl MockFs {
    /// Creates a new empty mock filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file with the given content, replacing any previous content.
    pub fn add_file(&mut self, path: impl AsRef<Path>, content: impl Into<String>) {
        self.files.insert(path.as_ref().to_path_buf(), content.into());
    }

    /// Removes a file, e.g. to simulate `/proc` being unavailable.
    pub fn remove_file(&mut self, path: impl AsRef<Path>) {
        self.files.remove(path.as_ref());
    }

    /// Loads a mountstats capture from disk at the given virtual path.
    ///
    /// Useful for regression tests with real `/proc/self/mountstats` snapshots.
    pub fn from_capture(capture: &Path, virtual_path: impl AsRef<Path>) -> io::Result<Self> {
        let mut fs = Self::new();
        fs.add_file(virtual_path, std::fs::read_to_string(capture)?);
        Ok(fs)
    }
}

impl FileSystem for MockFs {
    fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead + '_>> {
        let content = self.files.get(path).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("file not found: {:?}", path),
            )
        })?;
        Ok(Box::new(Cursor::new(content.as_bytes())))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_mock_fs_open() {
        let mut fs = MockFs::new();
        fs.add_file("/proc/self/mountstats", "device a:/x mounted on /mnt/a with fstype nfs\n");

        let mut content = String::new();
        fs.open(Path::new("/proc/self/mountstats"))
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "device a:/x mounted on /mnt/a with fstype nfs\n");
        assert!(fs.exists(Path::new("/proc/self/mountstats")));
    }

    #[test]
    fn test_mock_fs_missing_file() {
        let mut fs = MockFs::new();
        fs.add_file("/proc/self/mountstats", "");
        fs.remove_file("/proc/self/mountstats");

        let err = fs.open(Path::new("/proc/self/mountstats")).err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(!fs.exists(Path::new("/proc/self/mountstats")));
    }

    #[test]
    fn test_from_capture() {
        let dir = tempfile::tempdir().unwrap();
        let capture = dir.path().join("mountstats.txt");
        std::fs::write(&capture, "device x\n").unwrap();

        let fs = MockFs::from_capture(&capture, "/proc/self/mountstats").unwrap();
        assert!(fs.exists(Path::new("/proc/self/mountstats")));
    }
}
