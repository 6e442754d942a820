//! Collector that reads the mountstats file and scans it into a sink.

use std::env;
use std::path::{Path, PathBuf};

use crate::collector::mountstats::{MountStatsParser, ScanSummary};
use crate::collector::traits::FileSystem;
use crate::config::ParserConfig;
use crate::error::CollectError;
use crate::model::MetricSink;

/// Location of the per-mount statistics file.
pub const DEFAULT_MOUNTSTATS_PATH: &str = "/proc/self/mountstats";

/// Environment variable overriding [`DEFAULT_MOUNTSTATS_PATH`].
pub const MOUNTSTATS_PATH_ENV: &str = "MOUNT_PROC";

/// Picks the mountstats path given the value of [`MOUNTSTATS_PATH_ENV`].
///
/// An unset or empty override falls back to the default path.
pub fn resolve_mountstats_path(env_override: Option<&str>) -> PathBuf {
    match env_override {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_MOUNTSTATS_PATH),
    }
}

/// Mountstats path for this process, honouring [`MOUNTSTATS_PATH_ENV`].
pub fn mountstats_path() -> PathBuf {
    resolve_mountstats_path(env::var(MOUNTSTATS_PATH_ENV).ok().as_deref())
}

/// Gathers NFS client metrics from one mountstats file.
///
/// Each [`gather`](Self::gather) opens the file, scans it completely and
/// closes it; nothing is carried over between gathers.
pub struct Collector<F: FileSystem> {
    fs: F,
    path: PathBuf,
    parser: MountStatsParser,
}

impl<F: FileSystem> Collector<F> {
    /// Creates a collector reading from [`mountstats_path`].
    pub fn new(fs: F, config: &ParserConfig) -> Self {
        Self {
            fs,
            path: mountstats_path(),
            parser: MountStatsParser::new(config),
        }
    }

    /// Reads from an explicit path instead.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the mountstats file currently exists.
    pub fn is_available(&self) -> bool {
        self.fs.exists(&self.path)
    }

    /// Reads the mountstats file once, handing every record to `sink`.
    pub fn gather<S: MetricSink + ?Sized>(
        &self,
        sink: &mut S,
    ) -> Result<ScanSummary, CollectError> {
        let reader = self.fs.open(&self.path).map_err(|source| CollectError::Open {
            path: self.path.clone(),
            source,
        })?;
        self.parser.scan(reader, sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::MockFs;
    use crate::collector::mock::scenarios::MOUNTSTATS;
    use crate::model::{Measurement, MetricRecord};

    #[test]
    fn test_resolve_path() {
        assert_eq!(
            resolve_mountstats_path(None),
            PathBuf::from("/proc/self/mountstats")
        );
        assert_eq!(
            resolve_mountstats_path(Some("")),
            PathBuf::from("/proc/self/mountstats")
        );
        assert_eq!(
            resolve_mountstats_path(Some("/host/proc/1/mountstats")),
            PathBuf::from("/host/proc/1/mountstats")
        );
    }

    #[test]
    fn test_gather_nfs_client() {
        let collector = Collector::new(MockFs::nfs_client(), &ParserConfig::default())
            .with_path(DEFAULT_MOUNTSTATS_PATH);
        assert!(collector.is_available());

        let mut records: Vec<MetricRecord> = Vec::new();
        let summary = collector.gather(&mut records).unwrap();
        assert_eq!(summary.mounts, 2);
        assert_eq!(summary.records, 4);
        assert_eq!(records[0].measurement, Measurement::NfsstatRead);
        assert_eq!(records[0].tags.mountpoint, "/mnt/data");
    }

    #[test]
    fn test_gather_no_nfs() {
        let config = ParserConfig::default().with_fullstat(true);
        let collector =
            Collector::new(MockFs::no_nfs(), &config).with_path(DEFAULT_MOUNTSTATS_PATH);
        let mut records: Vec<MetricRecord> = Vec::new();
        let summary = collector.gather(&mut records).unwrap();
        assert_eq!(summary.mounts, 0);
        assert!(records.is_empty());
    }

    #[test]
    fn test_gather_missing_file() {
        let collector = Collector::new(MockFs::new(), &ParserConfig::default())
            .with_path("/proc/self/mountstats");
        assert!(!collector.is_available());

        let mut records: Vec<MetricRecord> = Vec::new();
        let err = collector.gather(&mut records).unwrap_err();
        match err {
            CollectError::Open { path, .. } => {
                assert_eq!(path, PathBuf::from("/proc/self/mountstats"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(records.is_empty());
    }

    #[test]
    fn test_gather_real_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mountstats");
        std::fs::write(&path, MOUNTSTATS).unwrap();

        let config = ParserConfig::default()
            .with_fullstat(true)
            .with_include_mounts(["^/mnt/home$"]);
        let collector = Collector::new(crate::collector::RealFs::new(), &config).with_path(&path);

        let mut records: Vec<MetricRecord> = Vec::new();
        let summary = collector.gather(&mut records).unwrap();
        assert_eq!(summary.skipped_mounts, 1);
        assert!(records.iter().all(|r| r.tags.mountpoint == "/mnt/home"));
        // events, bytes, xprt, READ, WRITE
        assert_eq!(records.len(), 5);
    }

    #[test]
    fn test_gathers_are_independent() {
        let collector = Collector::new(MockFs::nfs_client(), &ParserConfig::default())
            .with_path(DEFAULT_MOUNTSTATS_PATH);
        let mut first: Vec<MetricRecord> = Vec::new();
        let mut second: Vec<MetricRecord> = Vec::new();
        collector.gather(&mut first).unwrap();
        collector.gather(&mut second).unwrap();
        assert_eq!(first, second);
    }
}
