use crate::models::{context_tag_keys::Tags, Data, Sanitize};
use serde::Serialize;
use std::fmt;

/// System variables for a telemetry item.
///
/// Every field except the ones marked optional on the payload types is part
/// of the fixed wire contract and serializes even when empty.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    /// Envelope schema version. Always 1.
    pub ver: i32,

    /// Canonical envelope type name, e.g. "Microsoft.ApplicationInsights.Request".
    pub name: String,

    /// UTC timestamp in ISO-8601 with millisecond precision.
    pub time: String,

    /// Sampling rate as a percentage. Default 100.0.
    pub sample_rate: f64,

    /// Instrumentation key. This routes telemetry to a collection account
    /// and is security sensitive; it must never end up in logs.
    pub i_key: String,

    pub flags: i64,

    /// Context tags (device identity, locale, SDK version).
    pub tags: Tags,

    /// The typed payload, tagged with its baseType on the wire.
    pub data: Data,
}

impl Envelope {
    /// Truncate property keys/values and tag values to the limits enforced
    /// by the ingestion schema.
    pub fn sanitize(&mut self) {
        self.tags.sanitize();
        self.data.sanitize();
    }
}

// Hand-written so the instrumentation key never leaks through `{:?}`.
impl fmt::Debug for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Envelope")
            .field("ver", &self.ver)
            .field("name", &self.name)
            .field("time", &self.time)
            .field("sample_rate", &self.sample_rate)
            .field("i_key", &"<redacted>")
            .field("flags", &self.flags)
            .field("tags", &self.tags)
            .field("data", &self.data)
            .finish()
    }
}
