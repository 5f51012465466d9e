//! postcodes.io HTTP client.

use reqwest::Url;
use tracing::debug;

use crate::domain::{Coordinate, PostalCode};
use crate::http::{LookupError, build_url, decode_json, get_body, parse_base_url};

use super::types::PostcodeResponse;

/// Default base URL for postcodes.io.
pub const DEFAULT_BASE_URL: &str = "https://api.postcodes.io";

/// Configuration for the postcode client.
#[derive(Debug, Clone)]
pub struct PostcodeClientConfig {
    /// Origin the `postcodes/{code}` path is resolved against
    pub base_url: String,
}

impl PostcodeClientConfig {
    /// Create a config pointing at the public postcodes.io service.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

impl Default for PostcodeClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the postcodes.io lookup API.
#[derive(Debug, Clone)]
pub struct PostcodeClient {
    http: reqwest::Client,
    base_url: Url,
}

impl PostcodeClient {
    /// Create a new postcode client.
    ///
    /// Fails with [`LookupError::InvalidUrl`] if the configured base URL
    /// cannot be parsed.
    pub fn new(config: PostcodeClientConfig) -> Result<Self, LookupError> {
        let base_url = parse_base_url(&config.base_url)?;
        let http = reqwest::Client::builder().build()?;

        Ok(Self { http, base_url })
    }

    /// Look up the centroid of a postcode.
    ///
    /// Unknown postcodes come back from the service as a 404, which surfaces
    /// as [`LookupError::HttpStatus`]. A 200 response without usable
    /// coordinates is [`LookupError::NotFound`].
    pub async fn locate(&self, postcode: &PostalCode) -> Result<Coordinate, LookupError> {
        let url = self.postcode_url(postcode)?;
        let body = get_body(&self.http, url).await?;
        let response: PostcodeResponse = decode_json(&body)?;

        let result = response
            .result
            .ok_or_else(|| LookupError::NotFound(format!("no result for postcode {postcode}")))?;

        match (result.latitude, result.longitude) {
            (Some(latitude), Some(longitude)) => {
                let coordinate = Coordinate::new(latitude, longitude);
                debug!(
                    %postcode,
                    canonical = result.postcode.as_deref(),
                    %coordinate,
                    "geocoded postcode"
                );
                Ok(coordinate)
            }
            _ => Err(LookupError::NotFound(format!(
                "postcode {postcode} has no coordinates"
            ))),
        }
    }

    /// `{base}/postcodes/{code}`, with the code as a single encoded path segment.
    fn postcode_url(&self, postcode: &PostalCode) -> Result<Url, LookupError> {
        let mut url = build_url(&self.base_url, "postcodes/", &[])?;
        url.path_segments_mut()
            .map_err(|_| LookupError::InvalidUrl(format!("{} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .push(postcode.as_str());
        Ok(url)
    }
}
