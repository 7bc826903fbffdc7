use crate::models::{AvailabilityData, ExceptionData, RequestData, Sanitize};
use serde::Serialize;

/// Data struct to contain both B and C sections.
///
/// The serde tag/content attributes produce the
/// `{"baseType": ..., "baseData": {...}}` wrapper the ingestion endpoint
/// expects, and make a baseType/payload mismatch unrepresentable.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "baseType", content = "baseData")]
pub enum Data {
    #[serde(rename = "RequestData")]
    Request(RequestData),
    #[serde(rename = "AvailabilityData")]
    Availability(AvailabilityData),
    #[serde(rename = "ExceptionData")]
    Exception(ExceptionData),
}

impl Data {
    /// Canonical envelope type name for this payload kind.
    pub fn envelope_name(&self) -> &'static str {
        match self {
            Data::Request(_) => "Microsoft.ApplicationInsights.Request",
            Data::Availability(_) => "Microsoft.ApplicationInsights.Availability",
            Data::Exception(_) => "Microsoft.ApplicationInsights.Exception",
        }
    }
}

impl Sanitize for Data {
    fn sanitize(&mut self) {
        match self {
            Data::Request(data) => {
                data.properties.sanitize();
                data.measurements.sanitize();
            }
            Data::Availability(data) => {
                data.properties.sanitize();
                data.measurements.sanitize();
            }
            Data::Exception(data) => {
                data.properties.sanitize();
                data.measurements.sanitize();
            }
        }
    }
}
