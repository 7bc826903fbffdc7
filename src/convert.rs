use chrono::{DateTime, SecondsFormat, Utc};
use std::time::SystemTime;
use uuid::Uuid;

/// Renders a millisecond count in the `HH:MM:SS.fff` shape the ingestion
/// endpoint expects for durations. This is a narrow formatting routine, not
/// a general duration codec; hours keep counting past 24.
pub(crate) fn duration_to_string(millis: u64) -> String {
    let ms = millis % 1_000;
    let s = millis / 1_000 % 60;
    let m = millis / 1_000 / 60 % 60;
    let h = millis / 1_000 / 60 / 60;
    format!("{:0>2}:{:0>2}:{:0>2}.{:0>3}", h, m, s, ms)
}

pub(crate) fn time_to_string(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub(crate) fn new_id() -> String {
    Uuid::new_v4().to_string()
}
