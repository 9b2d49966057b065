//! Query interface for the facility catalog.
//!
//! One submodule today:
//!
//! - [`nearest`] — distance-ranked nearest-facility search with category
//!   filtering

pub mod nearest;

pub use nearest::{nearest_search, nearest_with_category, NearestResult, NearestSearchParams};
