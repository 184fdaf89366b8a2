//! # Config
//!
//! Define and implement config options for the delivery estimation module

use crate::estimator::location::Coordinate;
use config::{ConfigError, Environment};
use dotenv::dotenv;
use serde::Deserialize;

/// struct holding configuration options
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// latitude of the restaurant origin in degrees
    pub origin_latitude: f64,

    /// longitude of the restaurant origin in degrees
    pub origin_longitude: f64,

    /// maximum serviceable straight-line distance in kilometers
    pub radius_km: f64,

    /// flat fee component in currency units
    pub base_fee: u32,

    /// variable fee per kilometer in currency units
    pub per_km_fee: u32,

    /// order amount at or above which the delivery fee is waived
    pub free_threshold: u32,

    /// baseline preparation and transit estimate in minutes
    pub base_eta_minutes: u32,

    /// minutes added to the estimate per kilometer of distance
    pub per_km_eta_minutes: u32,

    /// path to log configuration YAML file
    pub log_config: String,
}

impl Default for Config {
    fn default() -> Self {
        log::warn!("(default) Creating Config object with default values.");
        Self::new()
    }
}

impl Config {
    /// Default values for Config
    pub fn new() -> Self {
        Config {
            origin_latitude: -33.4489,
            origin_longitude: -70.6693,
            radius_km: 10.0,
            base_fee: 2000,
            per_km_fee: 500,
            free_threshold: 25000,
            base_eta_minutes: 30,
            per_km_eta_minutes: 2,
            log_config: String::from("log4rs.yaml"),
        }
    }

    /// Create a new `Config` object using environment variables
    pub fn try_from_env() -> Result<Self, ConfigError> {
        // read .env file if present
        dotenv().ok();
        let default_config = Config::default();

        let config: Config = config::Config::builder()
            .set_default("origin_latitude", default_config.origin_latitude)?
            .set_default("origin_longitude", default_config.origin_longitude)?
            .set_default("radius_km", default_config.radius_km)?
            .set_default("base_fee", default_config.base_fee)?
            .set_default("per_km_fee", default_config.per_km_fee)?
            .set_default("free_threshold", default_config.free_threshold)?
            .set_default("base_eta_minutes", default_config.base_eta_minutes)?
            .set_default("per_km_eta_minutes", default_config.per_km_eta_minutes)?
            .set_default("log_config", default_config.log_config)?
            .add_source(Environment::default().separator("__"))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// The configured restaurant origin as a [`Coordinate`]
    pub fn origin(&self) -> Coordinate {
        Coordinate::new(self.origin_latitude, self.origin_longitude)
    }

    /// Reject out-of-range values at load time, so the estimator never
    /// sees a malformed configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.radius_km.is_finite() || self.radius_km <= 0.0 {
            return Err(ConfigError::Message(format!(
                "radius_km must be a positive number, got [{}]",
                self.radius_km
            )));
        }

        if !self.origin().is_in_range() {
            return Err(ConfigError::Message(format!(
                "origin coordinate out of range: latitude [{}], longitude [{}]",
                self.origin_latitude, self.origin_longitude
            )));
        }

        Ok(())
    }
}
