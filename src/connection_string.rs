use crate::uploader::append_path;
use std::{borrow::Cow, collections::HashMap, str::FromStr};

/// Global public ingestion endpoint.
pub const DEFAULT_INGESTION_ENDPOINT: &str = "https://dc.services.visualstudio.com";

const FIELDS_SEPARATOR: char = ';';
const FIELD_KEY_VALUE_SEPARATOR: char = '=';

/// Parsed Application Insights connection string, e.g.
/// `InstrumentationKey=...;IngestionEndpoint=https://westeurope-5.in.applicationinsights.azure.com`.
///
/// Replaces the hard-coded key/endpoint pair a quick test harness would use.
pub struct ConnectionString {
    ingestion_endpoint: http::Uri,
    instrumentation_key: String,
}

impl ConnectionString {
    /// The account's instrumentation key. Security sensitive; avoid printing
    /// or logging it.
    pub fn instrumentation_key(&self) -> &str {
        &self.instrumentation_key
    }

    /// Base ingestion endpoint, without the track path.
    pub fn ingestion_endpoint(&self) -> &http::Uri {
        &self.ingestion_endpoint
    }

    /// Full URL batches are POSTed to: the ingestion endpoint plus `/v2/track`.
    pub fn track_endpoint(&self) -> http::Uri {
        append_path(&self.ingestion_endpoint, "v2/track")
            .expect("appending v2/track should always work")
    }
}

// Hand-written so the instrumentation key never leaks through `{:?}`.
impl std::fmt::Debug for ConnectionString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionString")
            .field("ingestion_endpoint", &self.ingestion_endpoint)
            .field("instrumentation_key", &"<redacted>")
            .finish()
    }
}

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ParseError {
    #[error("invalid format")]
    InvalidFormat,
    #[error("missing instrumentation key")]
    MissingInstrumentationKey,
    #[error("unsupported authorization; only \"ikey\" is supported")]
    UnsupportedAuthorization,
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(http::uri::InvalidUri),
}

impl FromStr for ConnectionString {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields: HashMap<String, String> = s
            .split(FIELDS_SEPARATOR)
            .map(|kv| {
                let parts: Vec<&str> = kv.split(FIELD_KEY_VALUE_SEPARATOR).collect();
                if parts.len() == 2 {
                    Ok((parts[0].to_lowercase(), parts[1].to_string()))
                } else {
                    Err(ParseError::InvalidFormat)
                }
            })
            .collect::<Result<_, _>>()?;

        if let Some(authorization) = fields.remove("authorization") {
            if !authorization.eq_ignore_ascii_case("ikey") {
                return Err(ParseError::UnsupportedAuthorization);
            }
        }

        let instrumentation_key = fields
            .remove("instrumentationkey")
            .ok_or(ParseError::MissingInstrumentationKey)?;

        let ingestion_endpoint = match fields.remove("ingestionendpoint") {
            Some(endpoint) => sanitize_url(endpoint)?,
            None => http::Uri::from_static(DEFAULT_INGESTION_ENDPOINT),
        };

        Ok(ConnectionString {
            ingestion_endpoint,
            instrumentation_key,
        })
    }
}

fn sanitize_url(url: String) -> Result<http::Uri, ParseError> {
    let mut new_url: Cow<str> = url.trim().into();
    if !new_url.starts_with("https://") {
        new_url = new_url.replace("http://", "https://").into();
    }

    new_url
        .trim_end_matches('/')
        .parse()
        .map_err(ParseError::InvalidEndpoint)
}
