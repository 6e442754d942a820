//! Metric records produced by the mountstats scanner.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Measurement name of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Measurement {
    NfsEvents,
    NfsBytes,
    NfsXprtTcp,
    NfsXprtUdp,
    NfsstatRead,
    NfsstatWrite,
    NfsOps,
}

impl Measurement {
    pub fn as_str(self) -> &'static str {
        match self {
            Measurement::NfsEvents => "nfs_events",
            Measurement::NfsBytes => "nfs_bytes",
            Measurement::NfsXprtTcp => "nfs_xprt_tcp",
            Measurement::NfsXprtUdp => "nfs_xprt_udp",
            Measurement::NfsstatRead => "nfsstat_read",
            Measurement::NfsstatWrite => "nfsstat_write",
            Measurement::NfsOps => "nfs_ops",
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tags identifying the mount a record belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tags {
    /// Local mount point.
    pub mountpoint: String,
    /// Server-side export (`server:/path`).
    pub serverexport: String,
}

/// One decoded statistics line.
///
/// Fields are kept in a `BTreeMap` so that rendering a record is
/// deterministic regardless of decode order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricRecord {
    pub measurement: Measurement,
    pub tags: Tags,
    pub fields: BTreeMap<String, i64>,
}

impl MetricRecord {
    pub fn new(measurement: Measurement, tags: Tags) -> Self {
        Self {
            measurement,
            tags,
            fields: BTreeMap::new(),
        }
    }

    pub fn field(&self, name: &str) -> Option<i64> {
        self.fields.get(name).copied()
    }
}

/// Destination for records as they are decoded.
///
/// The scanner hands each record over immediately; sinks must not assume
/// any batching.
pub trait MetricSink {
    fn add(&mut self, record: MetricRecord);
}

impl MetricSink for Vec<MetricRecord> {
    fn add(&mut self, record: MetricRecord) {
        self.push(record);
    }
}

impl<S: MetricSink + ?Sized> MetricSink for &mut S {
    fn add(&mut self, record: MetricRecord) {
        (**self).add(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measurement_names() {
        assert_eq!(Measurement::NfsXprtTcp.as_str(), "nfs_xprt_tcp");
        assert_eq!(Measurement::NfsstatWrite.to_string(), "nfsstat_write");
        assert_eq!(
            serde_json::to_string(&Measurement::NfsOps).unwrap(),
            "\"nfs_ops\""
        );
    }

    #[test]
    fn test_vec_sink_keeps_order() {
        let mut sink: Vec<MetricRecord> = Vec::new();
        sink.add(MetricRecord::new(Measurement::NfsBytes, Tags::default()));
        sink.add(MetricRecord::new(Measurement::NfsEvents, Tags::default()));
        assert_eq!(sink[0].measurement, Measurement::NfsBytes);
        assert_eq!(sink[1].measurement, Measurement::NfsEvents);
    }

    #[test]
    fn test_record_serializes_tags_and_fields() {
        let mut record = MetricRecord::new(
            Measurement::NfsstatRead,
            Tags {
                mountpoint: "/mnt/data".into(),
                serverexport: "nas:/export".into(),
            },
        );
        record.fields.insert("read_ops".into(), 10);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["measurement"], "nfsstat_read");
        assert_eq!(json["tags"]["mountpoint"], "/mnt/data");
        assert_eq!(json["fields"]["read_ops"], 10);
        assert_eq!(record.field("read_ops"), Some(10));
        assert_eq!(record.field("read_exe"), None);
    }
}
