//! Request URL construction.

use std::fmt;

use reqwest::Url;

use super::error::LookupError;

/// Parse an origin that relative paths will be resolved against.
///
/// A trailing `/` is added to the path when missing, so that
/// `http://host/tfl` keeps its `/tfl` prefix once `StopPoint` is joined on.
pub fn parse_base_url(raw: &str) -> Result<Url, LookupError> {
    let mut url = Url::parse(raw).map_err(|e| LookupError::InvalidUrl(e.to_string()))?;

    if url.cannot_be_a_base() {
        return Err(LookupError::InvalidUrl(format!(
            "{raw} cannot have paths resolved against it"
        )));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

/// Build a request URL from an origin, a relative path and query parameters.
///
/// The path is resolved against the origin with standard URL reference
/// rules, so `"StopPoint"` and `"/StopPoint"` both land at the root of
/// `https://api.tfl.gov.uk`. Parameters are form-encoded and appended in
/// the order given; values are rendered with their `Display` impl and
/// duplicate names are all kept. No `?` is added when there are no
/// parameters.
pub fn build_url(
    origin: &Url,
    path: &str,
    params: &[(&str, &dyn fmt::Display)],
) -> Result<Url, LookupError> {
    let mut url = origin
        .join(path)
        .map_err(|e| LookupError::InvalidUrl(e.to_string()))?;

    if !params.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (name, value) in params {
            pairs.append_pair(name, &value.to_string());
        }
    }

    Ok(url)
}
