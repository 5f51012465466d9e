//! Single-attempt GET requests.

use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::error::LookupError;

/// How much of an unparseable body to keep for diagnostics.
const BODY_SNIPPET_CHARS: usize = 500;

/// Issue one GET request and return the raw body of a 200 response.
///
/// There is no retry: each call makes at most one attempt, with whatever
/// timeout and redirect policy the client was built with. Failures are
/// logged where they are classified and returned to the caller.
///
/// Only the URL path is logged, since query strings may carry credentials.
/// For the same reason the URL is stripped from transport errors.
pub async fn get_body(http: &reqwest::Client, url: Url) -> Result<String, LookupError> {
    let path = url.path().to_string();
    debug!(%path, "sending GET request");

    let response = http.get(url).send().await.map_err(|e| {
        let e = e.without_url();
        warn!(%path, error = %e, "request failed before a response arrived");
        LookupError::Transport(e)
    })?;

    let status = response.status();
    if status != StatusCode::OK {
        warn!(%path, status = status.as_u16(), "unexpected HTTP status");
        return Err(LookupError::HttpStatus {
            status: status.as_u16(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| LookupError::Transport(e.without_url()))?;
    debug!(%path, bytes = body.len(), "received response");

    Ok(body)
}

/// Decode a JSON body, keeping a snippet of it if decoding fails.
pub fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T, LookupError> {
    serde_json::from_str(body).map_err(|e| LookupError::Parse {
        message: e.to_string(),
        body: body.chars().take(BODY_SNIPPET_CHARS).collect(),
    })
}
