//! Pipeline error types.

use crate::domain::PostalCode;
use crate::http::LookupError;

use super::lookup::Stage;

/// A lookup run that halted, with the stage it halted in.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Prompting for or reading the postcode failed
    #[error("reading postcode: {0}")]
    Input(#[source] std::io::Error),

    /// The postcode could not be turned into a coordinate
    #[error("geocoding postcode \"{postcode}\": {source}")]
    Geocoding {
        postcode: PostalCode,
        #[source]
        source: LookupError,
    },

    /// The stop search around the coordinate failed
    #[error("searching for stops: {0}")]
    StopSearch(#[source] LookupError),

    /// Writing stop names failed
    #[error("printing stops: {0}")]
    Output(#[source] std::io::Error),
}

impl PipelineError {
    /// The stage the run was in when it failed.
    pub fn stage(&self) -> Stage {
        match self {
            PipelineError::Input(_) => Stage::AwaitingInput,
            PipelineError::Geocoding { .. } => Stage::Geocoding,
            PipelineError::StopSearch(_) => Stage::LookingUpStops,
            PipelineError::Output(_) => Stage::Presenting,
        }
    }

    /// The upstream failure, if this was a lookup error.
    pub fn lookup_error(&self) -> Option<&LookupError> {
        match self {
            PipelineError::Geocoding { source, .. } => Some(source),
            PipelineError::StopSearch(source) => Some(source),
            _ => None,
        }
    }
}
