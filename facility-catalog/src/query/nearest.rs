//! Distance-ranked nearest-facility search.
//!
//! Given a reference point and a required category, [`nearest_search`]
//! filters the catalog to facilities stocking that category, computes the
//! WGS84 geodesic distance from the reference to each, and returns them
//! sorted ascending by distance.
//!
//! The search never touches the shared catalog: each result owns a copy of
//! its record, and the computed distance lives on the result, so distances
//! from one query can never leak into another.

use facility_core::{Coordinate, FinderError, FinderResult, MathErrorKind};

use crate::catalog::{Catalog, FacilityRecord};

/// Parameters for a nearest-facility query.
#[derive(Debug, Clone)]
pub struct NearestSearchParams {
    /// Reference point the distances are measured from.
    pub reference: Coordinate,
    /// Required category label. Matched by exact, case-sensitive
    /// membership against each record's category list.
    pub category: String,
    /// If set, return at most this many results (closest first).
    pub max_results: Option<usize>,
}

/// A single facility returned from a nearest search.
#[derive(Debug, Clone)]
pub struct NearestResult {
    /// A copy of the matching catalog record.
    pub facility: FacilityRecord,
    /// Geodesic distance from the reference point, in kilometers.
    pub distance_km: f64,
}

/// Convenience wrapper that runs an uncapped nearest search.
///
/// Equivalent to calling [`nearest_search`] with `max_results` unset.
pub fn nearest_with_category(
    catalog: &Catalog,
    reference: Coordinate,
    category: &str,
) -> FinderResult<Vec<NearestResult>> {
    let params = NearestSearchParams {
        reference,
        category: category.to_string(),
        max_results: None,
    };
    nearest_search(catalog, &params)
}

/// Search the catalog for facilities stocking a category, closest first.
///
/// Filters by exact category membership, annotates each match with its
/// geodesic distance from the reference, then sorts ascending by distance.
/// The sort is stable: facilities at equal distance keep their catalog
/// order.
///
/// An empty result is a valid outcome — it means no facility stocks the
/// category — and is distinct from an empty catalog.
///
/// # Errors
///
/// Fails fast if the reference has a non-finite component or if the
/// geodesic solver rejects a pair of points (nearly antipodal). No partial
/// result is returned.
pub fn nearest_search(
    catalog: &Catalog,
    params: &NearestSearchParams,
) -> FinderResult<Vec<NearestResult>> {
    if !params.reference.is_finite() {
        return Err(FinderError::math_error(
            "nearest_search",
            MathErrorKind::InvalidInput,
            "reference coordinates must be finite numbers",
        ));
    }

    let mut results = Vec::new();

    for record in catalog.records() {
        if !record.stocks(&params.category) {
            continue;
        }

        let distance_km = params.reference.distance_km(&record.coordinates)?;

        results.push(NearestResult {
            facility: record.clone(),
            distance_km,
        });
    }

    // Stable sort: equidistant facilities keep catalog order.
    results.sort_by(|a, b| {
        a.distance_km
            .partial_cmp(&b.distance_km)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    if let Some(max_results) = params.max_results {
        results.truncate(max_results);
    }

    Ok(results)
}
