//! postcodes.io geocoding client.
//!
//! Resolves a UK postcode to the latitude and longitude of its centroid.

mod client;
mod types;

pub use client::{DEFAULT_BASE_URL, PostcodeClient, PostcodeClientConfig};
pub use types::{PostcodeResponse, PostcodeResult};
