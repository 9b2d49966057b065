//! Core geometry for the nearest-facility finder.
//!
//! This crate holds the pieces with no I/O: the [`Coordinate`] value type,
//! the WGS-84 ellipsoid [`constants`], the inverse geodesic solver behind
//! [`Coordinate::distance_km`], and the unified [`FinderError`] type.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`location`] | [`Coordinate`] and the Vincenty inverse geodesic |
//! | [`constants`] | WGS-84 ellipsoid parameters, angle conversions |
//! | [`errors`] | [`FinderError`], [`MathErrorKind`], [`FinderResult`] |

pub mod constants;
pub mod errors;
pub mod location;

pub use errors::{FinderError, FinderResult, MathErrorKind};
pub use location::Coordinate;
