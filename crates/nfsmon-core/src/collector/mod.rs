//! NFS client metrics collector for Linux.
//!
//! Reads `/proc/self/mountstats`, decodes the NFS mounts it lists and hands
//! the resulting records to a [`MetricSink`](crate::model::MetricSink).
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────┐
//! │                     Collector                      │
//! │  ┌──────────────────────────────────────────────┐  │
//! │  │              MountStatsParser                │  │
//! │  │  classify ─► MountFilter ─► decode (fields)  │  │
//! │  └──────────────────────┬───────────────────────┘  │
//! │                  ┌──────▼──────┐                   │
//! │                  │  FileSystem │ (trait)           │
//! │                  └──────┬──────┘                   │
//! └─────────────────────────┼──────────────────────────┘
//!                  ┌────────┴────────┐
//!           ┌──────▼──────┐   ┌──────▼──────┐
//!           │   RealFs    │   │   MockFs    │
//!           │  (Linux)    │   │  (Testing)  │
//!           └─────────────┘   └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use nfsmon_core::collector::{Collector, DEFAULT_MOUNTSTATS_PATH, MockFs};
//! use nfsmon_core::{MetricRecord, ParserConfig};
//!
//! let collector = Collector::new(MockFs::nfs_client(), &ParserConfig::default())
//!     .with_path(DEFAULT_MOUNTSTATS_PATH);
//! let mut records: Vec<MetricRecord> = Vec::new();
//! let summary = collector.gather(&mut records).unwrap();
//! assert_eq!(summary.records, records.len());
//! ```

#[allow(clippy::module_inception)]
mod collector;
pub mod mock;
pub mod mountstats;
pub mod traits;

pub use collector::{
    Collector, DEFAULT_MOUNTSTATS_PATH, MOUNTSTATS_PATH_ENV, mountstats_path,
    resolve_mountstats_path,
};
pub use mock::MockFs;
pub use mountstats::{MountStatsParser, ScanSummary};
pub use traits::{FileSystem, RealFs};
