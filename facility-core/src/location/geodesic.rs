//! Inverse geodesic distance on the WGS84 ellipsoid.
//!
//! # Why an ellipsoidal model
//!
//! Great-circle (spherical) formulas treat the Earth as a sphere and are
//! off by up to ~0.5% — tens of meters over a city, kilometers over a
//! continent. Distance-ranked results only need relative order, but near
//! ties flip under a spherical model, so the finder uses the ellipsoid.
//!
//! # Algorithm
//!
//! [`Coordinate::distance_km`] implements Vincenty's inverse formulae on
//! the WGS84 ellipsoid:
//!
//! 1. Reduce geodetic latitudes to the auxiliary sphere
//!    (`U = atan((1-f)·tan(φ))`).
//! 2. Iterate the longitude difference `λ` on the auxiliary sphere until
//!    it changes by less than 1e-12 rad (~0.006 mm).
//! 3. Expand the ellipsoidal correction series (A, B, Δσ) and scale by the
//!    semi-minor axis.
//!
//! Accuracy is ~0.5 mm on WGS84, well inside the sub-meter requirement.
//!
//! # Failure modes
//!
//! The iteration famously fails to converge for nearly antipodal points
//! (λ oscillates around π). Rather than silently returning a wrong
//! distance, that case is an explicit [`MathErrorKind::PrecisionLoss`]
//! error. Non-finite inputs are rejected up front.

use crate::constants::{
    DEG_TO_RAD, METERS_PER_KILOMETER, WGS84_FLATTENING, WGS84_SEMI_MAJOR_AXIS,
    WGS84_SEMI_MINOR_AXIS,
};
use crate::errors::{FinderError, FinderResult, MathErrorKind};

use super::Coordinate;

/// Convergence threshold for the λ iteration, in radians.
const LAMBDA_TOLERANCE: f64 = 1e-12;

/// Iteration cap; well-conditioned inputs converge in under ten rounds.
const MAX_ITERATIONS: u32 = 200;

impl Coordinate {
    /// Computes the geodesic distance to `other` in kilometers.
    ///
    /// Uses Vincenty's inverse formulae on the WGS84 ellipsoid. Identical
    /// coordinates return exactly `0.0`.
    ///
    /// # Example
    ///
    /// ```
    /// use facility_core::Coordinate;
    ///
    /// let saddar = Coordinate::from_degrees(24.8556, 67.0226);
    /// let clifton = Coordinate::from_degrees(24.8138, 67.0328);
    /// let km = saddar.distance_km(&clifton)?;
    /// assert!(km > 4.0 && km < 5.5);
    /// # Ok::<(), facility_core::FinderError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a math error if either coordinate has a non-finite
    /// component, or if the iteration fails to converge (nearly antipodal
    /// points).
    pub fn distance_km(&self, other: &Coordinate) -> FinderResult<f64> {
        if !self.is_finite() || !other.is_finite() {
            return Err(FinderError::math_error(
                "vincenty_inverse",
                MathErrorKind::NotFinite,
                "coordinate components must be finite numbers",
            ));
        }

        if self.latitude_deg == other.latitude_deg && self.longitude_deg == other.longitude_deg {
            return Ok(0.0);
        }

        let a = WGS84_SEMI_MAJOR_AXIS;
        let b = WGS84_SEMI_MINOR_AXIS;
        let f = WGS84_FLATTENING;

        // Reduced latitudes on the auxiliary sphere.
        let u1 = ((1.0 - f) * (self.latitude_deg * DEG_TO_RAD).tan()).atan();
        let u2 = ((1.0 - f) * (other.latitude_deg * DEG_TO_RAD).tan()).atan();
        let (sin_u1, cos_u1) = u1.sin_cos();
        let (sin_u2, cos_u2) = u2.sin_cos();

        let l = (other.longitude_deg - self.longitude_deg) * DEG_TO_RAD;

        let mut lambda = l;
        let mut iterations = 0u32;

        let (sin_sigma, cos_sigma, sigma, cos_sq_alpha, cos_2sigma_m) = loop {
            let (sin_lambda, cos_lambda) = lambda.sin_cos();

            let sin_sigma = ((cos_u2 * sin_lambda).powi(2)
                + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2))
            .sqrt();

            if sin_sigma == 0.0 {
                // Distinct inputs collapsing onto the same auxiliary-sphere
                // point: the direction is undefined (equatorial antipodes,
                // or a longitude wrapped by a full turn).
                return Err(FinderError::math_error(
                    "vincenty_inverse",
                    MathErrorKind::PrecisionLoss,
                    "geodesic direction is undefined for these points",
                ));
            }

            let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
            let sigma = sin_sigma.atan2(cos_sigma);

            let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
            let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;

            // Equatorial geodesics have cos²α = 0; the 2σₘ term drops out.
            let cos_2sigma_m = if cos_sq_alpha == 0.0 {
                0.0
            } else {
                cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
            };

            let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
            let lambda_prev = lambda;
            lambda = l
                + (1.0 - c)
                    * f
                    * sin_alpha
                    * (sigma
                        + c * sin_sigma
                            * (cos_2sigma_m
                                + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

            if (lambda - lambda_prev).abs() < LAMBDA_TOLERANCE {
                break (sin_sigma, cos_sigma, sigma, cos_sq_alpha, cos_2sigma_m);
            }

            iterations += 1;
            if iterations >= MAX_ITERATIONS {
                return Err(FinderError::math_error(
                    "vincenty_inverse",
                    MathErrorKind::PrecisionLoss,
                    "inverse solution did not converge (nearly antipodal points)",
                ));
            }
        };

        let u_sq = cos_sq_alpha * (a * a - b * b) / (b * b);
        let big_a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
        let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));

        let delta_sigma = big_b
            * sin_sigma
            * (cos_2sigma_m
                + big_b / 4.0
                    * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                        - big_b / 6.0
                            * cos_2sigma_m
                            * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                            * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)));

        let distance_m = b * big_a * (sigma - delta_sigma);
        Ok(distance_m / METERS_PER_KILOMETER)
    }
}
