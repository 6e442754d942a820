//! Decoding of classified statistics lines into metric records.

use super::classify::Category;
use super::fields::{
    BYTES_FIELDS, EVENTS_FIELDS, OP_FIELDS, Operation, XPRT_TCP_FIELDS, XPRT_UDP_FIELDS,
};
use super::scanner::MountContext;
use crate::model::{Measurement, MetricRecord, MetricSink};

/// Values skipped at the start of an xprt line: transport name and port.
const XPRT_VALUE_OFFSET: usize = 2;

/// Minimum values on a READ/WRITE line for the summary record.
const SUMMARY_MIN_VALUES: usize = 8;

/// Best-effort integer parse.
///
/// Returns the parsed value and whether parsing succeeded. Unparsable
/// tokens count as `0`: the kernel format drifts between versions and a
/// single odd column must not drop the whole line.
pub fn parse_value(token: &str) -> (i64, bool) {
    match token.parse::<i64>() {
        Ok(v) => (v, true),
        Err(_) => (0, false),
    }
}

/// Parses every token after the category token.
pub fn parse_values(tokens: &[&str]) -> Vec<i64> {
    tokens
        .iter()
        .skip(1)
        .map(|t| parse_value(t).0)
        .collect()
}

/// Decodes one data line and hands the resulting records to `sink`.
///
/// `tokens` is the whole line including the category token. Returns the
/// number of records emitted (0, 1 or 2).
pub fn decode_line<S: MetricSink + ?Sized>(
    category: Category,
    tokens: &[&str],
    mount: &MountContext,
    fullstat: bool,
    sink: &mut S,
) -> usize {
    let values = parse_values(tokens);

    match category {
        Category::Events if fullstat => {
            emit_table(Measurement::NfsEvents, &EVENTS_FIELDS, &values, 0, mount, sink)
        }
        Category::Bytes if fullstat => {
            emit_table(Measurement::NfsBytes, &BYTES_FIELDS, &values, 0, mount, sink)
        }
        Category::Xprt if fullstat => match tokens.get(1).copied() {
            Some("tcp") => emit_table(
                Measurement::NfsXprtTcp,
                &XPRT_TCP_FIELDS,
                &values,
                XPRT_VALUE_OFFSET,
                mount,
                sink,
            ),
            Some("udp") => emit_table(
                Measurement::NfsXprtUdp,
                &XPRT_UDP_FIELDS,
                &values,
                XPRT_VALUE_OFFSET,
                mount,
                sink,
            ),
            _ => 0,
        },
        Category::Operation(op) => match mount.version {
            Some(version) if op.in_version(version) => {
                decode_operation(op, &values, mount, fullstat, sink)
            }
            _ => 0,
        },
        _ => 0,
    }
}

/// Fills `table` positionally from `values[offset..]`.
fn emit_table<S: MetricSink + ?Sized>(
    measurement: Measurement,
    table: &[&str],
    values: &[i64],
    offset: usize,
    mount: &MountContext,
    sink: &mut S,
) -> usize {
    if values.len() < table.len() + offset {
        return 0;
    }

    let mut record = MetricRecord::new(measurement, mount.tags());
    for (name, value) in table.iter().zip(&values[offset..]) {
        record.fields.insert((*name).to_string(), *value);
    }
    sink.add(record);
    1
}

fn decode_operation<S: MetricSink + ?Sized>(
    op: Operation,
    values: &[i64],
    mount: &MountContext,
    fullstat: bool,
    sink: &mut S,
) -> usize {
    let mut emitted = 0;

    let summary = match op {
        Operation::Read => Some((Measurement::NfsstatRead, "read")),
        Operation::Write => Some((Measurement::NfsstatWrite, "write")),
        _ => None,
    };
    if let Some((measurement, prefix)) = summary
        && values.len() >= SUMMARY_MIN_VALUES
    {
        let mut record = MetricRecord::new(measurement, mount.tags());
        let fields = &mut record.fields;
        fields.insert(format!("{prefix}_ops"), values[0]);
        fields.insert(
            format!("{prefix}_retrans"),
            values[1].wrapping_sub(values[0]),
        );
        fields.insert(format!("{prefix}_bytes"), values[3].wrapping_add(values[4]));
        fields.insert(format!("{prefix}_rtt"), values[6]);
        fields.insert(format!("{prefix}_exe"), values[7]);
        sink.add(record);
        emitted += 1;
    }

    // Kernels that append an error column (9 values) are not decoded here.
    if fullstat && !values.is_empty() && values.len() <= OP_FIELDS.len() {
        let mut record = MetricRecord::new(Measurement::NfsOps, mount.tags());
        for (field, value) in OP_FIELDS.iter().zip(values) {
            record
                .fields
                .insert(format!("{}_{}", op.as_str(), field), *value);
        }
        sink.add(record);
        emitted += 1;
    }

    emitted
}
