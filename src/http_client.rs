use bytes::Bytes;
use http::{Request, Response};
use std::fmt::Debug;

pub type HttpError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A synchronous HTTP client.
///
/// The uploader is generic over this seam so callers can plug in their own
/// transport; tests substitute a recording client.
pub trait HttpClient: Debug + Send + Sync {
    fn send(&self, request: Request<Vec<u8>>) -> Result<Response<Bytes>, HttpError>;
}

#[cfg(feature = "reqwest-blocking-client")]
mod reqwest {
    use super::{Bytes, HttpClient, HttpError, Request, Response};

    impl HttpClient for reqwest::blocking::Client {
        fn send(&self, request: Request<Vec<u8>>) -> Result<Response<Bytes>, HttpError> {
            let request = request.try_into()?;
            let response = self.execute(request)?;
            Ok(Response::builder()
                .status(response.status())
                .body(response.bytes()?)?)
        }
    }
}
