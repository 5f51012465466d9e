//! postcodes.io response types.
//!
//! Only the fields we read are modelled. Everything is optional so that a
//! well-formed response missing data can be told apart from a malformed one.

use serde::Deserialize;

/// Envelope for `GET /postcodes/{code}`.
#[derive(Debug, Deserialize)]
pub struct PostcodeResponse {
    #[serde(default)]
    pub result: Option<PostcodeResult>,
}

/// Location data for a single postcode.
///
/// Latitude and longitude are null for postcodes without a grid
/// reference (e.g. some Crown Dependencies).
#[derive(Debug, Deserialize)]
pub struct PostcodeResult {
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}
