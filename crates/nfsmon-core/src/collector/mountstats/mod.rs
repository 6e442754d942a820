//! `/proc/self/mountstats` parsing for NFS client mounts.
//!
//! ```text
//! line ──► classify ──► MountContext update ──► MountFilter ──► decode ──► MetricSink
//!                        (boundary / version)     (skip?)        (fields)
//! ```

pub mod classify;
pub mod decode;
pub mod fields;
pub mod filter;
pub mod scanner;

pub use classify::{Category, LineClass, MountBoundary, classify};
pub use decode::{decode_line, parse_value};
pub use fields::{Operation, ProtocolVersion, field_table};
pub use filter::{MountFilter, should_skip};
pub use scanner::{MountContext, MountStatsParser, ScanSummary, StepOutcome};
