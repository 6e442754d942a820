//! nfsmon-core — per-mount NFS client statistics for the nfsmon ecosystem.
//!
//! Provides:
//! - `collector` — `/proc/self/mountstats` scanning, field tables, mount filtering
//! - `model` — metric records and the sink they are delivered to
//! - `config` — parser configuration (extended statistics, mount filters)
//! - `error` — collection errors

pub mod collector;
pub mod config;
pub mod error;
pub mod model;

pub use collector::{Collector, FileSystem, MockFs, RealFs};
pub use config::ParserConfig;
pub use error::CollectError;
pub use model::{Measurement, MetricRecord, MetricSink, Tags};
