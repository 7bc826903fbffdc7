use crate::convert::{duration_to_string, new_id};
use serde::Serialize;
use std::collections::BTreeMap;

/// An instance of Availability represents the result of executing an
/// availability test.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityData {
    pub ver: i32,
    pub id: String,
    pub name: String,
    pub duration: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub properties: BTreeMap<String, String>,
    pub measurements: BTreeMap<String, f64>,
}

impl AvailabilityData {
    /// Build an availability record with a fresh unique id and empty
    /// property/measurement maps.
    pub fn new(name: impl Into<String>, duration_ms: u64, success: bool) -> Self {
        Self {
            ver: 2,
            id: new_id(),
            name: name.into(),
            duration: duration_to_string(duration_ms),
            success,
            run_location: None,
            message: None,
            properties: BTreeMap::new(),
            measurements: BTreeMap::new(),
        }
    }
}
