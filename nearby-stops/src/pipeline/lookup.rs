//! Lookup orchestration.

use std::fmt;

use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::info;

use crate::domain::{PostalCode, StopPoint};
use crate::http::LookupError;
use crate::postcodes::PostcodeClient;
use crate::settings::Settings;
use crate::tfl::StopPointClient;

use super::display::display_stop_points;
use super::error::PipelineError;
use super::prompt::read_postcode;

/// Where a lookup run is up to.
///
/// Runs only ever move forward through these in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    AwaitingInput,
    Geocoding,
    LookingUpStops,
    Presenting,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::AwaitingInput => "awaiting input",
            Stage::Geocoding => "geocoding",
            Stage::LookingUpStops => "looking up stops",
            Stage::Presenting => "presenting",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

/// Postcode → coordinate → nearest stops.
///
/// Each step awaits the previous one, so at most one request is in flight.
#[derive(Debug, Clone)]
pub struct LookupPipeline {
    postcodes: PostcodeClient,
    stop_points: StopPointClient,
    stop_count: usize,
}

impl LookupPipeline {
    /// Build the pipeline and its HTTP clients from validated settings.
    pub fn new(settings: &Settings) -> Result<Self, LookupError> {
        Ok(Self::from_clients(
            PostcodeClient::new(settings.postcodes.clone())?,
            StopPointClient::new(settings.stop_points.clone())?,
            settings.stop_count,
        ))
    }

    pub fn from_clients(
        postcodes: PostcodeClient,
        stop_points: StopPointClient,
        stop_count: usize,
    ) -> Self {
        Self {
            postcodes,
            stop_points,
            stop_count,
        }
    }

    /// Maximum number of stops a lookup returns.
    pub fn stop_count(&self) -> usize {
        self.stop_count
    }

    /// Geocode a raw postcode and find the stops around it.
    ///
    /// Whitespace is stripped from the input first. If geocoding fails the
    /// stop search is never attempted.
    pub async fn lookup(&self, raw_postcode: &str) -> Result<Vec<StopPoint>, PipelineError> {
        let postcode = PostalCode::normalize(raw_postcode);

        info!(stage = %Stage::Geocoding, %postcode, "geocoding postcode");
        let coordinate = match self.postcodes.locate(&postcode).await {
            Ok(coordinate) => coordinate,
            Err(source) => return Err(PipelineError::Geocoding { postcode, source }),
        };

        info!(stage = %Stage::LookingUpStops, %coordinate, "searching for stops");
        self.stop_points
            .nearest(coordinate, self.stop_count)
            .await
            .map_err(PipelineError::StopSearch)
    }

    /// Run the whole interaction: prompt, look up, print.
    ///
    /// Returns the number of stops printed.
    pub async fn run<R, W>(&self, input: R, output: &mut W) -> Result<usize, PipelineError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!(stage = %Stage::AwaitingInput, "prompting for postcode");
        let line = read_postcode(input, output)
            .await
            .map_err(PipelineError::Input)?;

        let stops = self.lookup(&line).await?;

        info!(stage = %Stage::Presenting, count = stops.len(), "printing stops");
        display_stop_points(output, &stops)
            .await
            .map_err(PipelineError::Output)?;

        info!(stage = %Stage::Done, "lookup complete");
        Ok(stops.len())
    }
}
