//! Startup configuration.
//!
//! Settings come from an optional `nearby-stops.yml` in the working
//! directory, overridden by environment variables of the same name in any
//! case (`TFL_APP_KEY`, `tfl_app_key`, ...). TfL credentials have no
//! default and must be non-blank.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::Deserialize;

use crate::http::{LookupError, parse_base_url};
use crate::postcodes::{self, PostcodeClientConfig};
use crate::tfl::{self, StopPointClientConfig, TflCredentials};

/// Config file name, without extension.
const CONFIG_FILE: &str = "nearby-stops";

/// Number of stops shown when `STOP_COUNT` is not set.
pub const DEFAULT_STOP_COUNT: usize = 5;

/// Errors raised while loading settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// Sources could not be read or values had the wrong type
    #[error("{0}")]
    Config(#[from] config::ConfigError),

    /// A required credential is unset or blank
    #[error("{0} is not set")]
    MissingCredential(&'static str),

    /// A base URL is malformed or cannot have paths resolved against it
    #[error("{key} is not a usable base URL: {message}")]
    InvalidUrl { key: &'static str, message: String },
}

#[derive(Debug, Deserialize)]
struct RawSettings {
    postcodes_base_url: String,
    tfl_base_url: String,
    tfl_app_id: Option<String>,
    tfl_app_key: Option<String>,
    search_radius: u32,
    stop_count: usize,
}

/// Validated settings for a lookup run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub postcodes: PostcodeClientConfig,
    pub stop_points: StopPointClientConfig,
    /// Maximum number of stops to print
    pub stop_count: usize,
}

impl Settings {
    /// Load settings from the config file and the process environment.
    pub fn new() -> Result<Self, SettingsError> {
        Self::from_builder(
            Config::builder()
                .add_source(File::with_name(CONFIG_FILE).required(false))
                .add_source(Environment::default()),
        )
    }

    /// Apply defaults to the given sources, then deserialize and validate.
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, SettingsError> {
        let raw: RawSettings = builder
            .set_default("postcodes_base_url", postcodes::DEFAULT_BASE_URL)?
            .set_default("tfl_base_url", tfl::DEFAULT_BASE_URL)?
            .set_default("search_radius", i64::from(tfl::DEFAULT_RADIUS))?
            .set_default("stop_count", DEFAULT_STOP_COUNT as i64)?
            .build()?
            .try_deserialize()?;

        let credentials = TflCredentials::new(
            required(raw.tfl_app_id, "TFL_APP_ID")?,
            required(raw.tfl_app_key, "TFL_APP_KEY")?,
        );

        let postcodes = PostcodeClientConfig::new()
            .with_base_url(base_url(&raw.postcodes_base_url, "POSTCODES_BASE_URL")?);
        let stop_points = StopPointClientConfig::new(credentials)
            .with_base_url(base_url(&raw.tfl_base_url, "TFL_BASE_URL")?)
            .with_radius(raw.search_radius);

        Ok(Self {
            postcodes,
            stop_points,
            stop_count: raw.stop_count,
        })
    }
}

fn required(value: Option<String>, key: &'static str) -> Result<String, SettingsError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(SettingsError::MissingCredential(key)),
    }
}

/// Validate a base URL, normalizing it to end in `/`.
fn base_url(raw: &str, key: &'static str) -> Result<String, SettingsError> {
    match parse_base_url(raw) {
        Ok(url) => Ok(url.into()),
        Err(LookupError::InvalidUrl(message)) => Err(SettingsError::InvalidUrl { key, message }),
        Err(e) => Err(SettingsError::InvalidUrl {
            key,
            message: e.to_string(),
        }),
    }
}
