//! Fixed tables for the Karachi blood-bank deployment.
//!
//! The reference points a user can search from are a closed set of named
//! Karachi areas with literal coordinates, and the category labels are the
//! eight blood groups. Both tables are compiled in; there is no runtime
//! configuration for them.

use facility_core::Coordinate;

/// Named reference areas and their coordinates.
pub const AREAS: [(&str, Coordinate); 10] = [
    ("Saddar", Coordinate::from_degrees(24.8556, 67.0226)),
    ("Gulshan-e-Iqbal", Coordinate::from_degrees(24.9333, 67.0921)),
    ("North Nazimabad", Coordinate::from_degrees(24.9551, 67.0349)),
    ("Korangi", Coordinate::from_degrees(24.8450, 67.1396)),
    ("Clifton", Coordinate::from_degrees(24.8138, 67.0328)),
    ("Gulistan-e-Johar", Coordinate::from_degrees(24.9284, 67.1281)),
    ("Malir", Coordinate::from_degrees(24.9000, 67.1855)),
    ("Nazimabad", Coordinate::from_degrees(24.9129, 67.0363)),
    ("Stadium Road", Coordinate::from_degrees(24.8984, 67.0811)),
    ("Jamshed Town", Coordinate::from_degrees(24.8785, 67.0431)),
];

/// The eight blood-group category labels, as they appear in catalog data.
pub const BLOOD_GROUPS: [&str; 8] = ["A+", "A-", "B+", "B-", "O+", "O-", "AB+", "AB-"];

/// Looks up a reference area by its exact name.
pub fn area_coordinates(name: &str) -> Option<Coordinate> {
    AREAS
        .iter()
        .find(|(area, _)| *area == name)
        .map(|(_, coord)| *coord)
}
