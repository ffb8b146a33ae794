//! GIS validators
//!
//! Validators for location fixes and coordinate pairs.
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::validators::gis::{max_distance, precision};
//! use serde_json::json;
//!
//! let accurate = precision(&json!(10));
//! assert!(accurate.test(&json!({ "coords": { "accuracy": 4 } })));
//!
//! let near = max_distance(&json!(100));
//! assert!(near.test_args(&[json!([0, 0]), json!([0, 100])]));
//! assert!(near.test_args(&[json!([42.678748, 23.338703]), json!([42.678803, 23.338928]), json!(true)]));
//! ```

use serde_json::Value;

use crate::foundation::coerce;
use crate::geometry::{self, Point};

/// Reads the accuracy of a location fix: `coords.accuracy` when `coords` is
/// an object, otherwise `accuracy`.
fn accuracy(fix: &Value) -> f64 {
    let source = match fix.get("coords") {
        Some(coords) if coords.is_object() => coords,
        _ => fix,
    };
    source.get("accuracy").map_or(f64::NAN, coerce::to_number)
}

/// Reads a `[x, y]` pair. Missing or unparsable coordinates are `NaN`.
fn point(value: Option<&Value>) -> Point {
    let coord = |i: usize| {
        value
            .and_then(|v| v.get(i))
            .map_or(f64::NAN, coerce::to_number)
    };
    [coord(0), coord(1)]
}

/// Distance in meters between two points.
///
/// With `use_degrees` the points are `[lon, lat]` in decimal degrees and the
/// planar distance is converted to meters along the mean latitude.
#[must_use]
pub fn distance_in_meters(p1: Point, p2: Point, use_degrees: bool) -> f64 {
    let distance = geometry::distance(p1, p2);
    if use_degrees {
        let mid_latitude = (p1[1] + p2[1]) / 2.0;
        geometry::degrees_to_meters(distance, mid_latitude)
    } else {
        distance
    }
}

crate::predicate! {
    /// `precision`: the location fix is at least as accurate as `config`
    /// meters.
    pub fn precision(config);
    setup { let max_accuracy = coerce::to_number(config); }
    test(input) { accuracy(input) <= max_accuracy }
}

crate::predicate! {
    /// `maxDistance`: arguments `(p1, p2, use_degrees)`; the two points are
    /// at most `config` meters apart.
    ///
    /// `use_degrees` is only enabled by a literal `true`.
    pub fn max_distance(config);
    setup { let max_meters = coerce::to_number(config); }
    test_args(args) {
        let use_degrees = matches!(args.get(2), Some(Value::Bool(true)));
        distance_in_meters(point(args.first()), point(args.get(1)), use_degrees) <= max_meters
    }
}
