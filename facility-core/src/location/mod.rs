//! Geographic coordinates for facilities and reference points.
//!
//! [`Coordinate`] is a plain (latitude, longitude) pair in degrees on the
//! WGS84 ellipsoid. Construction performs no range validation: the finder's
//! contract lets out-of-range values pass through to the distance
//! calculation unchanged. Finiteness IS enforced at the serde boundary,
//! so a catalog with a NaN or infinite coordinate fails at load time
//! instead of inside the geodesic solver.
//!
//! The external serialized form is a two-element array `[lat, lon]`,
//! matching the catalog source format.

mod geodesic;

use serde::{Deserialize, Serialize};

use crate::errors::{FinderError, MathErrorKind};

/// A geodetic position in degrees on the WGS84 ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    /// Latitude in degrees, positive north.
    pub latitude_deg: f64,
    /// Longitude in degrees, positive east.
    pub longitude_deg: f64,
}

impl Coordinate {
    /// Creates a coordinate from degrees. No validation; callers that need
    /// finiteness checks go through the serde form or check explicitly.
    pub const fn from_degrees(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Returns `true` if both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.latitude_deg.is_finite() && self.longitude_deg.is_finite()
    }
}

impl TryFrom<[f64; 2]> for Coordinate {
    type Error = FinderError;

    fn try_from(pair: [f64; 2]) -> Result<Self, Self::Error> {
        let coord = Self::from_degrees(pair[0], pair[1]);
        if !coord.is_finite() {
            return Err(FinderError::math_error(
                "coordinate_parse",
                MathErrorKind::NotFinite,
                "coordinates must be finite numbers",
            ));
        }
        Ok(coord)
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(coord: Coordinate) -> Self {
        [coord.latitude_deg, coord.longitude_deg]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_degrees_is_unvalidated() {
        // Out-of-range passes through; only the serde boundary checks.
        let c = Coordinate::from_degrees(200.0, -500.0);
        assert_eq!(c.latitude_deg, 200.0);
        assert_eq!(c.longitude_deg, -500.0);
        assert!(c.is_finite());
    }

    #[test]
    fn test_deserialize_array_form() {
        let c: Coordinate = serde_json::from_str("[24.8556, 67.0226]").unwrap();
        assert_eq!(c.latitude_deg, 24.8556);
        assert_eq!(c.longitude_deg, 67.0226);
    }

    #[test]
    fn test_serialize_array_form() {
        let c = Coordinate::from_degrees(24.8556, 67.0226);
        assert_eq!(serde_json::to_string(&c).unwrap(), "[24.8556,67.0226]");
    }

    #[test]
    fn test_deserialize_rejects_non_finite() {
        // JSON has no NaN literal, so exercise the TryFrom directly.
        let result = Coordinate::try_from([f64::NAN, 67.0]);
        let msg = result.err().expect("expected error").to_string();
        assert!(msg.contains("finite"), "unexpected error: {}", msg);

        let result = Coordinate::try_from([24.0, f64::INFINITY]);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_wrong_arity() {
        assert!(serde_json::from_str::<Coordinate>("[24.8556]").is_err());
        assert!(serde_json::from_str::<Coordinate>("[1.0, 2.0, 3.0]").is_err());
    }
}
