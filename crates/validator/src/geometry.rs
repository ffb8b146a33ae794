//! Planar geometry helpers used by the GIS predicates.
//!
//! Distances are computed on a flat plane. Converting between meters and
//! decimal degrees uses a spherical-earth approximation scaled by the cosine
//! of a reference parallel, which is only accurate over short distances.
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::geometry::{degrees_to_meters, distance, meters_to_degrees};
//!
//! assert_eq!(distance([0.0, 0.0], [0.0, 100.0]), 100.0);
//! assert_eq!(degrees_to_meters(1.0, 0.0), 111_320.0);
//! assert_eq!(meters_to_degrees(111_320.0, 0.0), 1.0);
//! ```

use std::f64::consts::PI;

/// Length of one degree along the equator, in meters.
pub const METERS_PER_DEGREE: f64 = 111.32 * 1000.0;

/// A 2D coordinate pair: `[lon, lat]`, `[easting, northing]` or plain `[x, y]`.
pub type Point = [f64; 2];

/// Converts an angle from radians to degrees.
#[inline]
#[must_use]
pub fn to_degrees(radians: f64) -> f64 {
    radians * (180.0 / PI)
}

/// Converts an angle from degrees to radians.
#[inline]
#[must_use]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

/// Euclidean distance between two points.
///
/// The function does not care about the coordinate system; both points must
/// simply share it.
#[must_use]
pub fn distance(p1: Point, p2: Point) -> f64 {
    let dx = p2[0] - p1[0];
    let dy = p2[1] - p1[1];
    (dx * dx + dy * dy).sqrt()
}

/// Meters covered by one degree of longitude at `latitude`.
#[inline]
fn meters_per_degree_at(latitude: f64) -> f64 {
    METERS_PER_DEGREE * to_radians(latitude).cos()
}

/// Converts a distance in decimal degrees to meters along the parallel at
/// `latitude` (pass `0.0` for the equator).
#[must_use]
pub fn degrees_to_meters(degrees: f64, latitude: f64) -> f64 {
    degrees * meters_per_degree_at(latitude)
}

/// Converts a distance in meters to decimal degrees along the parallel at
/// `latitude` (pass `0.0` for the equator).
///
/// Inverse of [`degrees_to_meters`].
#[must_use]
pub fn meters_to_degrees(meters: f64, latitude: f64) -> f64 {
    meters / meters_per_degree_at(latitude)
}
