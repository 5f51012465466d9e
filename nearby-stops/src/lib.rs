//! Nearest bus stop finder.
//!
//! A command-line tool that answers: "which bus, coach and tram stops are
//! closest to this UK postcode?"

pub mod domain;
pub mod http;
pub mod pipeline;
pub mod postcodes;
pub mod settings;
pub mod tfl;
