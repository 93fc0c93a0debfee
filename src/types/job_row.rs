// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::Serialize;

/// One CSV record: job name, start time, and run duration
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct JobRow {
    pub name: String,
    pub start_time: String,
    pub duration: String,
}

impl JobRow {
    pub fn new(name: impl Into<String>, started: DateTime<Utc>, completed: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            start_time: format_timestamp(started),
            duration: format_elapsed(completed - started),
        }
    }

    /// Row for a job whose start time the cluster never reported
    pub fn without_start(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start_time: String::new(),
            duration: String::new(),
        }
    }
}

/// RFC 3339 in UTC, whole seconds (`2024-05-01T10:00:00Z`)
pub fn format_timestamp(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Compact elapsed time such as `1h2m3s`, `4m0s` or `45s`
pub fn format_elapsed(elapsed: Duration) -> String {
    let seconds = elapsed.num_seconds();
    let sign = if seconds < 0 { "-" } else { "" };
    let total = seconds.unsigned_abs();
    let (hours, minutes, secs) = (total / 3600, total % 3600 / 60, total % 60);

    if hours > 0 {
        format!("{}{}h{}m{}s", sign, hours, minutes, secs)
    } else if minutes > 0 {
        format!("{}{}m{}s", sign, minutes, secs)
    } else {
        format!("{}{}s", sign, secs)
    }
}
