//! Core domain types.
//!
//! All values here are transient: built for a single lookup and dropped
//! once the stop names have been printed.

mod coordinate;
mod postcode;
mod stop_point;

pub use coordinate::Coordinate;
pub use postcode::PostalCode;
pub use stop_point::StopPoint;
