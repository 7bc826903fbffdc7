//! Build and submit raw [Azure Application Insights] telemetry envelopes
//! without going through the vendor SDK.
//!
//! [Azure Application Insights]: https://docs.microsoft.com/en-us/azure/azure-monitor/app/app-insights-overview
//!
//! The ingestion endpoint accepts plain JSON batches, so telemetry can be
//! reported with nothing but a correctly shaped envelope and one HTTP POST.
//! This crate provides the two pieces needed for that:
//!
//! - [`EnvelopeFactory`] builds [`models::Envelope`] values for the
//!   supported telemetry kinds (request, availability, exception), stamping
//!   the UTC timestamp and the fixed context tag set.
//! - [`submit_batch`] serializes an ordered batch of envelopes as a JSON
//!   array and performs a single blocking POST, returning the raw response
//!   body for the caller to interpret.
//!
//! Both pieces are stateless call/return functions: no retries, no
//! batching policy, no background threads. Whatever policy a calling system
//! wants (batch size limits, retry on transport failure) lives in the
//! caller.
//!
//! # Usage
//!
//! ```rust,no_run
//! use appinsights_track::{
//!     models::{Data, RequestData},
//!     ConnectionString, EnvelopeFactory, HostIdentity,
//! };
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let conn: ConnectionString =
//!         std::env::var("APPLICATIONINSIGHTS_CONNECTION_STRING")?.parse()?;
//!     let factory = EnvelopeFactory::new(
//!         conn.instrumentation_key(),
//!         HostIdentity {
//!             machine_name: "MACHINE-01".into(),
//!             locale: "en-US".into(),
//!             os_version: std::env::consts::OS.into(),
//!         },
//!     )?;
//!
//!     let envelope = factory.build_envelope(Data::Request(RequestData::new(
//!         "AddToFavorites",
//!         125,
//!         "200",
//!         true,
//!         "/api/v1/favorites",
//!     )));
//!
//!     let client = reqwest::blocking::Client::new();
//!     let body =
//!         appinsights_track::submit_batch(&client, &conn.track_endpoint(), &[envelope])?;
//!     println!("{body}");
//!     Ok(())
//! }
//! ```
//!
//! # Secret handling
//!
//! The instrumentation key routes telemetry to your account and should be
//! treated like a credential. Nothing in this crate logs it or includes it
//! in `Debug` output; keep your own diagnostics equally quiet.
//!
//! # Batch sizes
//!
//! The ingestion service is reported to reject very large batches, possibly
//! without a useful error in the response. No limit is enforced here;
//! self-limit batch size on the calling side.

mod connection_string;
mod convert;
mod error;
mod factory;
mod http_client;
pub mod models;
mod uploader;

pub use connection_string::{ConnectionString, ParseError, DEFAULT_INGESTION_ENDPOINT};
pub use error::Error;
pub use factory::{EnvelopeFactory, HostIdentity};
pub use http_client::{HttpClient, HttpError};
pub use uploader::submit_batch;
