//! TfL StopPoint HTTP client.

use std::fmt;

use reqwest::Url;
use tracing::debug;

use crate::domain::{Coordinate, StopPoint};
use crate::http::{LookupError, build_url, decode_json, get_body, parse_base_url};

use super::types::StopPointsResponse;

/// Default base URL for the unified TfL API.
pub const DEFAULT_BASE_URL: &str = "https://api.tfl.gov.uk";

/// Default search radius in metres.
pub const DEFAULT_RADIUS: u32 = 1000;

/// Stop types searched for: on-street bus, coach and tram stops.
const STOP_TYPES: &str = "NaptanPublicBusCoachTram";

/// Application credentials issued by the TfL API portal.
#[derive(Clone, PartialEq, Eq)]
pub struct TflCredentials {
    pub app_id: String,
    pub app_key: String,
}

impl TflCredentials {
    pub fn new(app_id: impl Into<String>, app_key: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            app_key: app_key.into(),
        }
    }
}

impl fmt::Debug for TflCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TflCredentials")
            .field("app_id", &self.app_id)
            .field("app_key", &"<redacted>")
            .finish()
    }
}

/// Configuration for the StopPoint client.
#[derive(Debug, Clone)]
pub struct StopPointClientConfig {
    /// Credentials sent as `app_id` and `app_key`
    pub credentials: TflCredentials,
    /// Origin the `StopPoint` path is resolved against
    pub base_url: String,
    /// Search radius in metres
    pub radius: u32,
}

impl StopPointClientConfig {
    /// Create a config for the public TfL API with the given credentials.
    pub fn new(credentials: TflCredentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_string(),
            radius: DEFAULT_RADIUS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the search radius.
    pub fn with_radius(mut self, metres: u32) -> Self {
        self.radius = metres;
        self
    }
}

/// Client for the TfL StopPoint search.
#[derive(Debug, Clone)]
pub struct StopPointClient {
    http: reqwest::Client,
    base_url: Url,
    credentials: TflCredentials,
    radius: u32,
}

impl StopPointClient {
    /// Create a new StopPoint client.
    pub fn new(config: StopPointClientConfig) -> Result<Self, LookupError> {
        let base_url = parse_base_url(&config.base_url)?;
        let http = reqwest::Client::builder().build()?;

        Ok(Self {
            http,
            base_url,
            credentials: config.credentials,
            radius: config.radius,
        })
    }

    /// Find up to `count` stops around a coordinate.
    ///
    /// Stops are returned in the order TfL lists them; no local sorting is
    /// done. A response without a `stopPoints` list is
    /// [`LookupError::NotFound`].
    pub async fn nearest(
        &self,
        at: Coordinate,
        count: usize,
    ) -> Result<Vec<StopPoint>, LookupError> {
        let url = self.search_url(at)?;
        let body = get_body(&self.http, url).await?;
        let response: StopPointsResponse = decode_json(&body)?;

        let dtos = response
            .stop_points
            .ok_or_else(|| LookupError::NotFound(format!("no stopPoints list for {at}")))?;
        debug!(%at, available = dtos.len(), count, "received stop points");

        Ok(dtos.into_iter().take(count).map(StopPoint::from).collect())
    }

    fn search_url(&self, at: Coordinate) -> Result<Url, LookupError> {
        let params: [(&str, &dyn fmt::Display); 6] = [
            ("stopTypes", &STOP_TYPES),
            ("lat", &at.latitude),
            ("lon", &at.longitude),
            ("radius", &self.radius),
            ("app_id", &self.credentials.app_id),
            ("app_key", &self.credentials.app_key),
        ];
        build_url(&self.base_url, "StopPoint", &params)
    }
}
