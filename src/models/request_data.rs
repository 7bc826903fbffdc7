use crate::convert::{duration_to_string, new_id};
use serde::Serialize;
use std::collections::BTreeMap;

/// An instance of Request represents completion of an external request to the
/// application to do work and contains a summary of that request execution
/// and the results.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestData {
    pub ver: i32,
    pub id: String,
    pub name: String,
    pub duration: String,
    pub response_code: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub url: String,
    pub properties: BTreeMap<String, String>,
    pub measurements: BTreeMap<String, f64>,
}

impl RequestData {
    /// Build a request record with a fresh unique id and empty
    /// property/measurement maps.
    pub fn new(
        name: impl Into<String>,
        duration_ms: u64,
        response_code: impl Into<String>,
        success: bool,
        url: impl Into<String>,
    ) -> Self {
        Self {
            ver: 2,
            id: new_id(),
            name: name.into(),
            duration: duration_to_string(duration_ms),
            response_code: response_code.into(),
            success,
            source: None,
            url: url.into(),
            properties: BTreeMap::new(),
            measurements: BTreeMap::new(),
        }
    }
}
