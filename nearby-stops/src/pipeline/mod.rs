//! Postcode to nearest stops lookup.
//!
//! A run moves strictly forward through the [`Stage`]s: read a postcode,
//! geocode it, search for stops around the result, print their names.
//! The first failure halts the run and is returned as a [`PipelineError`]
//! naming the stage it happened in; later stages never see partial data.

mod display;
mod error;
mod lookup;
mod prompt;

pub use display::display_stop_points;
pub use error::PipelineError;
pub use lookup::{LookupPipeline, Stage};
pub use prompt::{PROMPT, read_postcode};
