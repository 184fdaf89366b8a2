//! Delivery estimation module
//!
//! Pure, stateless computations shared by the customer-facing services:
//! given a destination, an order amount and a configuration snapshot,
//! decide whether the address is serviceable and estimate the delivery
//! fee and arrival time. Each call reads only its inputs; concurrent
//! invocations need no coordination.

#[macro_use]
pub mod macros;
pub mod haversine;
pub mod location;
pub mod rush_hour;

use crate::config::Config;
use chrono::{DateTime, TimeZone, Timelike};
use serde::Serialize;

use location::Coordinate;

/// Reason reported when the destination is beyond the serviceable radius
pub const OUT_OF_RADIUS_REASON: &str = "Outside delivery radius";

/// Lower bound no ETA range may fall below, in minutes
pub const ETA_RANGE_FLOOR_MINUTES: u32 = 15;
/// Minutes subtracted from the final estimate for the optimistic bound
pub const ETA_RANGE_SPREAD_BELOW_MINUTES: u32 = 10;
/// Minutes added to the final estimate for the pessimistic bound
pub const ETA_RANGE_SPREAD_ABOVE_MINUTES: u32 = 15;

/// Outcome of a delivery fee estimate. Serialized by the services as the
/// JSON payload of their fee endpoints; fields that do not apply to an
/// unavailable destination are skipped, not null.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeEstimate {
    /// Whether the destination is within the serviceable radius
    pub available: bool,

    /// Reason the destination is not serviceable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Straight-line distance to the destination, rounded to 2 decimals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,

    /// Delivery fee in currency units, 0 when the order qualifies for
    /// free delivery
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<u32>,

    /// Baseline arrival estimate in minutes, not rush-hour adjusted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eta_minutes: Option<u32>,

    /// The free-delivery threshold the estimate was computed against
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_threshold: Option<u32>,

    /// Whether the order amount reached the free-delivery threshold
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualifies_for_free: Option<bool>,
}

impl FeeEstimate {
    fn out_of_radius() -> Self {
        FeeEstimate {
            available: false,
            reason: Some(OUT_OF_RADIUS_REASON.to_string()),
            distance_km: None,
            fee: None,
            eta_minutes: None,
            free_threshold: None,
            qualifies_for_free: None,
        }
    }
}

/// Optimistic/pessimistic bounds around a timing estimate, in minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EtaRange {
    /// Earliest expected arrival in minutes, never below
    /// [`ETA_RANGE_FLOOR_MINUTES`]
    pub min: u32,

    /// Latest expected arrival in minutes
    pub max: u32,
}

/// Outcome of a rush-hour-adjusted timing estimate, independent of the
/// order amount.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingEstimate {
    /// Whether the destination is within the serviceable radius
    pub available: bool,

    /// Reason the destination is not serviceable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Straight-line distance to the destination, rounded to 2 decimals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,

    /// Rush-hour-adjusted arrival estimate in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eta_minutes: Option<u32>,

    /// Bounds around the arrival estimate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eta_range: Option<EtaRange>,

    /// Whether the estimate was inflated by the rush-hour multiplier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_rush_hour: Option<bool>,
}

impl TimingEstimate {
    fn out_of_radius() -> Self {
        TimingEstimate {
            available: false,
            reason: Some(OUT_OF_RADIUS_REASON.to_string()),
            distance_km: None,
            eta_minutes: None,
            eta_range: None,
            is_rush_hour: None,
        }
    }
}

/// Round a distance to 2 decimal places for reporting
fn round_distance_km(distance_km: f64) -> f64 {
    (distance_km * 100.0).round() / 100.0
}

/// Decide delivery availability and compute the fee for a destination
/// and order amount.
///
/// `order_amount` is in the same currency units as the configured fees;
/// callers pass 0 when no amount was supplied. The embedded ETA is the
/// baseline figure and is never rush-hour adjusted; [`estimate_timing`]
/// computes the adjusted one.
///
/// Coordinate ranges are not checked here, validation of request input
/// belongs to the calling service.
pub fn estimate_fee(destination: &Coordinate, order_amount: f64, config: &Config) -> FeeEstimate {
    let origin = config.origin();
    let distance = haversine::distance(&origin, destination);
    estimator_debug!(
        "(estimate_fee) distance_km: {}, order_amount: {}",
        distance,
        order_amount
    );

    if distance > config.radius_km {
        estimator_info!(
            "(estimate_fee) destination out of radius: {} > {} km.",
            distance,
            config.radius_km
        );
        return FeeEstimate::out_of_radius();
    }

    let qualifies_for_free = order_amount >= config.free_threshold as f64;
    let fee: f64 = if qualifies_for_free {
        0.0
    } else {
        config.base_fee as f64 + distance * config.per_km_fee as f64
    };
    let eta_minutes: f64 =
        config.base_eta_minutes as f64 + distance * config.per_km_eta_minutes as f64;

    FeeEstimate {
        available: true,
        reason: None,
        distance_km: Some(round_distance_km(distance)),
        fee: Some(fee.round() as u32),
        eta_minutes: Some(eta_minutes.round() as u32),
        free_threshold: Some(config.free_threshold),
        qualifies_for_free: Some(qualifies_for_free),
    }
}

/// Produce a rush-hour-adjusted timing estimate for the given local hour
/// [0, 23].
pub fn estimate_timing_at_hour(
    destination: &Coordinate,
    config: &Config,
    hour: u32,
) -> TimingEstimate {
    let origin = config.origin();
    let distance = haversine::distance(&origin, destination);
    estimator_debug!(
        "(estimate_timing_at_hour) distance_km: {}, hour: {}",
        distance,
        hour
    );

    if distance > config.radius_km {
        estimator_info!(
            "(estimate_timing_at_hour) destination out of radius: {} > {} km.",
            distance,
            config.radius_km
        );
        return TimingEstimate::out_of_radius();
    }

    let base_estimate: f64 =
        config.base_eta_minutes as f64 + distance * config.per_km_eta_minutes as f64;
    let multiplier = rush_hour::multiplier(hour);
    let final_estimate = (base_estimate * multiplier).round() as u32;

    let eta_range = EtaRange {
        min: final_estimate
            .saturating_sub(ETA_RANGE_SPREAD_BELOW_MINUTES)
            .max(ETA_RANGE_FLOOR_MINUTES),
        max: final_estimate + ETA_RANGE_SPREAD_ABOVE_MINUTES,
    };

    TimingEstimate {
        available: true,
        reason: None,
        distance_km: Some(round_distance_km(distance)),
        eta_minutes: Some(final_estimate),
        eta_range: Some(eta_range),
        is_rush_hour: Some(multiplier > 1.0),
    }
}

/// Produce a rush-hour-adjusted timing estimate for the wall-clock time
/// `now`, using the hour in `now`'s own timezone.
pub fn estimate_timing<Tz: TimeZone>(
    destination: &Coordinate,
    config: &Config,
    now: &DateTime<Tz>,
) -> TimingEstimate {
    estimate_timing_at_hour(destination, config, now.hour())
}
