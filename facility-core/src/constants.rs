/// WGS84 semi-major axis in meters.
pub const WGS84_SEMI_MAJOR_AXIS: f64 = 6_378_137.0;

/// WGS84 semi-major axis in kilometers.
pub const WGS84_SEMI_MAJOR_AXIS_KM: f64 = 6378.137;

/// WGS84 flattening: f = (a - b) / a.
pub const WGS84_FLATTENING: f64 = 0.0033528106647474805;

/// WGS84 semi-minor axis in meters: b = a * (1 - f).
pub const WGS84_SEMI_MINOR_AXIS: f64 = 6_356_752.314245179;

/// WGS84 first eccentricity squared: e² = (a² - b²) / a².
pub const WGS84_ECCENTRICITY_SQUARED: f64 = 6.6943799901413165e-3;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

pub const METERS_PER_KILOMETER: f64 = 1000.0;
