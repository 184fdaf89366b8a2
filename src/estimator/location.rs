//! Struct definitions and implementations for [`Coordinate`].

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// A [`Coordinate`] is an immutable value type representing a geographic
/// position in degrees. The delivery origin and every candidate
/// destination are expressed as `Coordinate`s.
///
/// Float values are stored as [`OrderedFloat`] so positions can be
/// hashed and compared for equality.
#[derive(Debug, PartialEq, Hash, Eq, Copy, Clone, Serialize, Deserialize)]
pub struct Coordinate {
    /// The latitude of the position in degrees.
    pub latitude: OrderedFloat<f64>,

    /// The longitude of the position in degrees.
    pub longitude: OrderedFloat<f64>,
}

impl Coordinate {
    /// Create a coordinate from degree values.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate {
            latitude: OrderedFloat(latitude),
            longitude: OrderedFloat(longitude),
        }
    }

    /// Whether latitude and longitude fall within valid degree ranges
    /// (latitude [-90, 90], longitude [-180, 180]).
    ///
    /// The estimator itself performs no bounds checking; services
    /// validating request input can use this before calling it.
    pub fn is_in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude.into_inner())
            && (-180.0..=180.0).contains(&self.longitude.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_range_check() {
        assert!(Coordinate::new(-33.4489, -70.6693).is_in_range());
        assert!(Coordinate::new(90.0, 180.0).is_in_range());
        assert!(Coordinate::new(-90.0, -180.0).is_in_range());

        assert!(!Coordinate::new(90.1, 0.0).is_in_range());
        assert!(!Coordinate::new(-90.1, 0.0).is_in_range());
        assert!(!Coordinate::new(0.0, 180.1).is_in_range());
        assert!(!Coordinate::new(0.0, -180.1).is_in_range());
    }
}
