//! Implementation of the Haversine formula for calculating the distance
//! between two points on a sphere.
//!
//! See [Wikipedia](https://en.wikipedia.org/wiki/Haversine_formula) for
//! more.
//!
//! **Distance is returned in kilometers**.

use crate::estimator::location::Coordinate;

/// Mean radius of the Earth in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the distance between two points on a sphere.
///
/// # Notes
/// The delivery radius check and the per-kilometer fee both consume this
/// straight-line distance; no road network is consulted.
///
/// Float 64 values are used so the symmetry of the formula holds to
/// well below the 2-decimal rounding applied to reported distances.
pub fn distance(start: &Coordinate, end: &Coordinate) -> f64 {
    let d_lat: f64 = (end.latitude.into_inner() - start.latitude.into_inner()).to_radians();
    let d_lon: f64 = (end.longitude.into_inner() - start.longitude.into_inner()).to_radians();
    let lat1: f64 = (start.latitude.into_inner()).to_radians();
    let lat2: f64 = (end.latitude.into_inner()).to_radians();

    let a: f64 = ((d_lat / 2.0).sin()) * ((d_lat / 2.0).sin())
        + ((d_lon / 2.0).sin()) * ((d_lon / 2.0).sin()) * (lat1.cos()) * (lat2.cos());
    let c: f64 = 2.0 * ((a.sqrt()).atan2((1.0 - a).sqrt()));

    EARTH_RADIUS_KM * c
}
