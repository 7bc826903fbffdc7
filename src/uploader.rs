use crate::{models::Envelope, Error, HttpClient};
use http::{Request, Uri};
use log::debug;

/// Serializes a batch of envelopes and submits it to the ingestion endpoint
/// in a single blocking POST.
///
/// The batch goes out as one JSON array, uncompressed. The raw response body
/// is returned uninterpreted: the ingestion service encodes partial or full
/// rejection in the body, and judging that is left to the caller. Transport
/// failures surface as [`Error::Transport`] without any retry.
///
/// The service is known to reject overly large batches, sometimes silently;
/// no ceiling is enforced here, so callers should self-limit batch size.
pub fn submit_batch<C: HttpClient>(
    client: &C,
    endpoint: &Uri,
    envelopes: &[Envelope],
) -> Result<String, Error> {
    if envelopes.is_empty() {
        return Err(Error::InvalidInput("batch must not be empty"));
    }

    let body = serde_json::to_vec(envelopes).map_err(Error::SerializeRequest)?;
    let request = Request::post(endpoint)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body)
        .expect("request should be valid");

    let response = client.send(request).map_err(Error::Transport)?;
    debug!(
        "submitted {} envelope(s), response status {}",
        envelopes.len(),
        response.status()
    );
    Ok(String::from_utf8_lossy(response.body()).into_owned())
}

/// Append a path to a URI, e.g. the `/v2/track` suffix of the ingestion
/// endpoint.
pub(crate) fn append_path(
    uri: impl ToString,
    path: &str,
) -> Result<Uri, http::uri::InvalidUri> {
    let mut curr = uri.to_string();
    if !curr.ends_with('/') {
        curr.push('/');
    }
    curr.push_str(path);
    curr.parse()
}
