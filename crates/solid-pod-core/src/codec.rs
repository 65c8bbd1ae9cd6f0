//! Line-delimited text encoding of record sequences.
//!
//! A resource stores one value per line, every line terminated by `\n`:
//! `["one", 2, true]` is stored as `"one\n2\ntrue\n"`.
//!
//! Decoding only ever yields strings, so a typed sequence does not survive a
//! round-trip: `2` comes back as `"2"`.

use crate::config::PodConfig;
use std::fmt::Display;

/// Encode values into the stored text form.
///
/// Every value is written with its `Display` form followed by a newline. An empty
/// sequence encodes to an empty string.
pub fn encode<T: Display>(values: &[T]) -> String {
    let mut body = String::new();
    for value in values {
        body.push_str(&value.to_string());
        body.push(PodConfig::RECORD_SEPARATOR);
    }
    body
}

/// Decode a stored body back into its records.
///
/// Splits on `\n` and drops trailing empty segments, so the terminating newline
/// written by [`encode`] does not produce an extra record. An empty body is the
/// exception: it decodes to a single empty record.
pub fn decode(body: &str) -> Vec<String> {
    if body.is_empty() {
        return vec![String::new()];
    }

    let mut records: Vec<String> = body
        .split(PodConfig::RECORD_SEPARATOR)
        .map(str::to_owned)
        .collect();
    while records.last().is_some_and(|r| r.is_empty()) {
        records.pop();
    }
    records
}
