//! Facility catalog: record type, JSON loader, validation.
//!
//! The catalog source is a JSON array of facility objects:
//!
//! ```json
//! [
//!   {
//!     "name": "City Blood Bank",
//!     "location": "Shahrah-e-Faisal, Karachi",
//!     "contact": "+92-21-111-111-111",
//!     "email": "info@citybloodbank.example",
//!     "available_blood_groups": ["A+", "O+"],
//!     "coordinates": [24.8607, 67.0611]
//!   }
//! ]
//! ```
//!
//! The category field is accepted under either its generic name
//! (`available_categories`) or the deployment's historical name
//! (`available_blood_groups`).
//!
//! Loading validates every record up front and fails the whole load on the
//! first malformed one. A catalog that loads successfully is immutable:
//! queries read it, nothing writes it.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use facility_core::{Coordinate, FinderError, FinderResult};

/// One facility in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityRecord {
    /// Display name. Non-empty, not guaranteed unique.
    pub name: String,
    /// Human-readable address or area description.
    pub location: String,
    /// Contact string, typically a phone number. Free text.
    pub contact: String,
    /// Contact email. Free text.
    pub email: String,
    /// Category labels this facility currently stocks. Order irrelevant.
    #[serde(alias = "available_blood_groups")]
    pub available_categories: Vec<String>,
    /// Position on the WGS84 ellipsoid, serialized as `[lat, lon]`.
    pub coordinates: Coordinate,
}

impl FacilityRecord {
    /// Returns `true` if this facility stocks `category`.
    ///
    /// Exact, case-sensitive membership test: `"o+"` does not match `"O+"`.
    pub fn stocks(&self, category: &str) -> bool {
        self.available_categories.iter().any(|c| c == category)
    }
}

/// An immutable, validated, ordered collection of facilities.
///
/// Created once per process by [`Catalog::load`] (or
/// [`Catalog::from_records`] for in-memory construction) and shared
/// read-only with every query afterwards.
pub struct Catalog {
    records: Vec<FacilityRecord>,
}

impl Catalog {
    /// Loads and validates a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened, is not a JSON array
    /// of facility objects, or contains a record that fails validation
    /// (empty name, empty category list, non-finite coordinate). The whole
    /// load fails on the first bad record; a partially loaded catalog is
    /// never returned.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open catalog file: {:?}", path))?;

        let records: Vec<FacilityRecord> = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse catalog file: {:?}", path))?;

        Self::from_records(records)
            .with_context(|| format!("Invalid catalog file: {:?}", path))
    }

    /// Builds a catalog from records already in memory, applying the same
    /// validation as [`Catalog::load`]. Record order is preserved; it is
    /// the tie-break order for equidistant search results.
    pub fn from_records(records: Vec<FacilityRecord>) -> FinderResult<Self> {
        for (index, record) in records.iter().enumerate() {
            validate_record(index, record)?;
        }
        Ok(Self { records })
    }

    /// All records, in catalog order.
    pub fn records(&self) -> &[FacilityRecord] {
        &self.records
    }

    /// Number of facilities in the catalog.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the catalog holds no facilities.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct category labels across the whole catalog, sorted.
    pub fn categories(&self) -> BTreeSet<&str> {
        self.records
            .iter()
            .flat_map(|r| r.available_categories.iter())
            .map(String::as_str)
            .collect()
    }
}

fn validate_record(index: usize, record: &FacilityRecord) -> FinderResult<()> {
    let label = if record.name.is_empty() {
        format!("record #{}", index)
    } else {
        record.name.clone()
    };

    if record.name.is_empty() {
        return Err(FinderError::invalid_record(&label, "empty name"));
    }
    if record.available_categories.is_empty() {
        return Err(FinderError::invalid_record(&label, "empty category list"));
    }
    if !record.coordinates.is_finite() {
        return Err(FinderError::invalid_record(
            &label,
            "non-finite coordinates",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_catalog_file(json: &serde_json::Value) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string_pretty(json).unwrap().as_bytes())
            .unwrap();
        file.flush().unwrap();
        file
    }

    fn make_record(name: &str, categories: &[&str], lat: f64, lon: f64) -> FacilityRecord {
        FacilityRecord {
            name: name.to_string(),
            location: "Test Area, Karachi".to_string(),
            contact: "+92-21-000-000".to_string(),
            email: "test@example.com".to_string(),
            available_categories: categories.iter().map(|s| s.to_string()).collect(),
            coordinates: Coordinate::from_degrees(lat, lon),
        }
    }

    #[test]
    fn test_load_valid_catalog() {
        let file = write_catalog_file(&serde_json::json!([
            {
                "name": "City Blood Bank",
                "location": "Shahrah-e-Faisal",
                "contact": "+92-21-111",
                "email": "city@example.com",
                "available_blood_groups": ["A+", "O+"],
                "coordinates": [24.8607, 67.0611]
            },
            {
                "name": "Central Blood Bank",
                "location": "North Nazimabad",
                "contact": "+92-21-222",
                "email": "central@example.com",
                "available_blood_groups": ["B-"],
                "coordinates": [24.9551, 67.0349]
            }
        ]));

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.records()[0].name, "City Blood Bank");
        assert_eq!(catalog.records()[1].coordinates.latitude_deg, 24.9551);
        assert!(catalog.records()[0].stocks("O+"));
        assert!(!catalog.records()[0].stocks("B-"));
    }

    #[test]
    fn test_generic_category_field_name_accepted() {
        let file = write_catalog_file(&serde_json::json!([
            {
                "name": "X",
                "location": "L",
                "contact": "C",
                "email": "E",
                "available_categories": ["AB+"],
                "coordinates": [24.0, 67.0]
            }
        ]));

        let catalog = Catalog::load(file.path()).unwrap();
        assert!(catalog.records()[0].stocks("AB+"));
    }

    #[test]
    fn test_stocks_is_case_sensitive() {
        let record = make_record("X", &["O+"], 24.0, 67.0);
        assert!(record.stocks("O+"));
        assert!(!record.stocks("o+"));
        assert!(!record.stocks("O"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Catalog::load("/nonexistent/facilities.json");
        let msg = format!("{:#}", result.err().expect("expected error"));
        assert!(msg.contains("Failed to open"), "unexpected error: {}", msg);
    }

    #[test]
    fn test_load_missing_field_fails() {
        // No coordinates: the load must fail, not defer the fault to query
        // time.
        let file = write_catalog_file(&serde_json::json!([
            {
                "name": "X",
                "location": "L",
                "contact": "C",
                "email": "E",
                "available_blood_groups": ["A+"]
            }
        ]));

        let result = Catalog::load(file.path());
        let msg = format!("{:#}", result.err().expect("expected error"));
        assert!(msg.contains("Failed to parse"), "unexpected error: {}", msg);
    }

    #[test]
    fn test_load_not_an_array_fails() {
        let file = write_catalog_file(&serde_json::json!({"name": "X"}));
        assert!(Catalog::load(file.path()).is_err());
    }

    #[test]
    fn test_empty_category_list_rejected() {
        let records = vec![make_record("Empty Shelf Bank", &[], 24.0, 67.0)];
        let msg = Catalog::from_records(records)
            .err()
            .expect("expected error")
            .to_string();
        assert!(
            msg.contains("Empty Shelf Bank") && msg.contains("empty category list"),
            "unexpected error: {}",
            msg
        );
    }

    #[test]
    fn test_empty_name_rejected() {
        let records = vec![
            make_record("Fine", &["A+"], 24.0, 67.0),
            make_record("", &["A+"], 24.1, 67.1),
        ];
        let msg = Catalog::from_records(records)
            .err()
            .expect("expected error")
            .to_string();
        assert!(msg.contains("record #1"), "unexpected error: {}", msg);
    }

    #[test]
    fn test_non_finite_coordinates_rejected() {
        let records = vec![make_record("NaN Bank", &["A+"], f64::NAN, 67.0)];
        let msg = Catalog::from_records(records)
            .err()
            .expect("expected error")
            .to_string();
        assert!(msg.contains("non-finite"), "unexpected error: {}", msg);
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = Catalog::from_records(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.categories().is_empty());
    }

    #[test]
    fn test_categories_are_distinct_and_sorted() {
        let catalog = Catalog::from_records(vec![
            make_record("A", &["O+", "A+"], 24.0, 67.0),
            make_record("B", &["A+", "AB-"], 24.1, 67.1),
        ])
        .unwrap();

        let cats: Vec<&str> = catalog.categories().into_iter().collect();
        assert_eq!(cats, vec!["A+", "AB-", "O+"]);
    }
}
