//! Stateful scan over `/proc/self/mountstats`.
//!
//! The scanner threads a [`MountContext`] through the lines of one read of
//! the file. Mount-boundary lines reset it; version lines qualify it; every
//! other line is decoded against it unless the mount is filtered out.

use std::io::BufRead;

use tracing::debug;

use super::classify::classify;
use super::decode::decode_line;
use super::fields::ProtocolVersion;
use super::filter::MountFilter;
use crate::config::ParserConfig;
use crate::error::CollectError;
use crate::model::{MetricSink, Tags};

/// Scanner state for the mount currently being read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MountContext {
    /// Local mount point from the last boundary line.
    pub mount_point: String,
    /// Server export from the last boundary line.
    pub export: String,
    /// Protocol version, cleared by every boundary line.
    pub version: Option<ProtocolVersion>,
    /// Discard data lines until the next boundary line.
    pub skip: bool,
}

impl MountContext {
    pub fn tags(&self) -> Tags {
        Tags {
            mountpoint: self.mount_point.clone(),
            serverexport: self.export.clone(),
        }
    }
}

/// What a single line did to the scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// The line started a new NFS mount.
    pub boundary: bool,
    /// Records handed to the sink for this line.
    pub records: usize,
}

/// Counters for one complete scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub lines: usize,
    pub mounts: usize,
    pub skipped_mounts: usize,
    pub records: usize,
}

impl ScanSummary {
    fn record(&mut self, context: &MountContext, outcome: StepOutcome) {
        self.lines += 1;
        self.records += outcome.records;
        if outcome.boundary {
            self.mounts += 1;
            if context.skip {
                self.skipped_mounts += 1;
            }
        }
    }
}

/// Mountstats parser configured with a field-collection mode and mount filters.
///
/// Holds no per-scan state: every call to [`scan`](Self::scan) starts from a
/// fresh [`MountContext`], so repeated scans of the same input produce the
/// same records.
#[derive(Debug, Clone)]
pub struct MountStatsParser {
    fullstat: bool,
    filter: MountFilter,
}

impl MountStatsParser {
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            fullstat: config.fullstat,
            filter: MountFilter::new(
                config.include_mounts.as_slice(),
                config.exclude_mounts.as_slice(),
            ),
        }
    }

    /// Context for the start of a scan. Lines before the first mount are
    /// filtered as if they belonged to a mount with an empty mount point.
    pub fn initial_context(&self) -> MountContext {
        MountContext {
            skip: self.skips(""),
            ..MountContext::default()
        }
    }

    fn skips(&self, mount_point: &str) -> bool {
        !self.filter.is_empty() && self.filter.should_skip(mount_point)
    }

    /// Applies one raw line to `context` and returns the updated context.
    pub fn step<S: MetricSink + ?Sized>(
        &self,
        mut context: MountContext,
        line: &str,
        sink: &mut S,
    ) -> (MountContext, StepOutcome) {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let class = classify(&tokens);
        let mut outcome = StepOutcome::default();

        if let Some(boundary) = class.boundary {
            context.mount_point = boundary.mount_point.to_string();
            context.export = boundary.export.to_string();
            context.version = None;
            context.skip = self.skips(&context.mount_point);
            outcome.boundary = true;
            debug!(
                mount_point = %context.mount_point,
                export = %context.export,
                skip = context.skip,
                "nfs mount"
            );
        }

        if let Some(raw) = class.version {
            context.version = ProtocolVersion::parse(raw);
        }

        if !context.skip
            && let Some(category) = class.category
        {
            outcome.records = decode_line(category, &tokens, &context, self.fullstat, sink);
        }

        (context, outcome)
    }

    /// Scans a complete mountstats stream.
    ///
    /// Records are handed to `sink` as each line is decoded. Bytes that are
    /// not valid UTF-8 are replaced, so only an I/O failure ends the scan;
    /// records already emitted stay emitted.
    pub fn scan<R: BufRead, S: MetricSink + ?Sized>(
        &self,
        mut reader: R,
        sink: &mut S,
    ) -> Result<ScanSummary, CollectError> {
        let mut context = self.initial_context();
        let mut summary = ScanSummary::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let n = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| CollectError::Read {
                    line: summary.lines,
                    source,
                })?;
            if n == 0 {
                break;
            }
            let raw = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
            let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
            let line = String::from_utf8_lossy(raw);
            let (next, outcome) = self.step(context, &line, sink);
            summary.record(&next, outcome);
            context = next;
        }

        debug!(
            lines = summary.lines,
            mounts = summary.mounts,
            skipped = summary.skipped_mounts,
            records = summary.records,
            "mountstats scan complete"
        );
        Ok(summary)
    }

    /// Scans mountstats content already held in memory.
    pub fn scan_str<S: MetricSink + ?Sized>(&self, content: &str, sink: &mut S) -> ScanSummary {
        let mut context = self.initial_context();
        let mut summary = ScanSummary::default();
        for line in content.lines() {
            let (next, outcome) = self.step(context, line, sink);
            summary.record(&next, outcome);
            context = next;
        }
        summary
    }
}
