use crate::models::{ExceptionDetails, SeverityLevel};
use serde::Serialize;
use std::collections::BTreeMap;

/// An instance of Exception represents a handled or unhandled exception that
/// occurred during execution of the monitored application.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExceptionData {
    pub ver: i32,

    /// Exception chain - list of inner exceptions.
    pub exceptions: Vec<ExceptionDetails>,

    pub severity_level: SeverityLevel,

    pub problem_id: String,

    pub properties: BTreeMap<String, String>,
    pub measurements: BTreeMap<String, f64>,
}

impl ExceptionData {
    pub fn new(
        exceptions: Vec<ExceptionDetails>,
        severity_level: SeverityLevel,
        problem_id: impl Into<String>,
    ) -> Self {
        Self {
            ver: 2,
            exceptions,
            severity_level,
            problem_id: problem_id.into(),
            properties: BTreeMap::new(),
            measurements: BTreeMap::new(),
        }
    }
}
