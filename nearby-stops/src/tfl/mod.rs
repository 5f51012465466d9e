//! Transport for London StopPoint client.
//!
//! Finds bus, coach and tram stops within a radius of a coordinate using
//! the unified TfL API. Requests carry an application id and key.

mod client;
mod types;

pub use client::{
    DEFAULT_BASE_URL, DEFAULT_RADIUS, StopPointClient, StopPointClientConfig, TflCredentials,
};
pub use types::{StopPointDto, StopPointsResponse};
