//! Facility catalog with distance-ranked nearest search.
//!
//! Loads a small static JSON catalog of facilities (the deployment's blood
//! banks), then answers one question: which facilities stocking a required
//! category are closest to a reference point? Distances are WGS84 geodesic
//! kilometers from `facility-core`.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`catalog`] | [`FacilityRecord`], the [`Catalog`] JSON loader and validation |
//! | [`query::nearest`] | [`nearest_search`](query::nearest_search), [`NearestSearchParams`](query::NearestSearchParams) |
//! | [`karachi`] | Deployment tables: named reference areas, blood-group labels |
//!
//! # Quick Start
//!
//! ```ignore
//! use facility_catalog::catalog::Catalog;
//! use facility_catalog::karachi::area_coordinates;
//! use facility_catalog::query::nearest_with_category;
//!
//! let catalog = Catalog::load("data/facilities.json")?;
//! let saddar = area_coordinates("Saddar").unwrap();
//!
//! for result in nearest_with_category(&catalog, saddar, "O+")? {
//!     println!("{} — {:.2} km", result.facility.name, result.distance_km);
//! }
//! ```
//!
//! The catalog is loaded once and read-only afterwards; every query builds
//! fresh result values, so concurrent queries against a shared catalog need
//! no locking.
//!
//! # Features
//!
//! - **`cli`** — Enables the `find-facility` binary for querying a catalog
//!   from the command line.

pub mod catalog;
pub mod karachi;
pub mod query;

pub use catalog::{Catalog, FacilityRecord};
pub use query::{nearest_search, nearest_with_category, NearestResult, NearestSearchParams};
