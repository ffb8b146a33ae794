//! Numeric comparison validators
//!
//! Inputs and configuration are compared after numeric coercion; anything
//! that coerces to `NaN` fails every comparison (and therefore satisfies the
//! negated forms).

use serde_json::Value;

use crate::foundation::coerce;

/// Reads a `[low, high]` configuration. Missing bounds are `NaN`.
fn bounds(config: &Value) -> (f64, f64) {
    match config {
        Value::Array(items) => {
            let bound = |i: usize| items.get(i).map_or(f64::NAN, coerce::to_number);
            (bound(0), bound(1))
        }
        _ => (f64::NAN, f64::NAN),
    }
}

fn within(value: f64, (low, high): (f64, f64)) -> bool {
    low <= value && value <= high
}

crate::predicate! {
    /// `equal`: numeric coercions of input and configuration are equal.
    pub fn equal(config);
    setup { let expected = coerce::to_number(config); }
    test(input) { coerce::to_number(input) == expected }
}

crate::predicate! {
    /// `notEqual`: negation of [`equal`].
    pub fn not_equal(config);
    setup { let expected = coerce::to_number(config); }
    test(input) { coerce::to_number(input) != expected }
}

crate::predicate! {
    /// `between`: `low <= input <= high` for a `[low, high]` configuration.
    pub fn between(config);
    setup { let range = bounds(config); }
    test(input) { within(coerce::to_number(input), range) }
}

crate::predicate! {
    /// `notBetween`: negation of [`between`].
    pub fn not_between(config);
    setup { let range = bounds(config); }
    test(input) { !within(coerce::to_number(input), range) }
}

crate::predicate! {
    /// `greaterThan`
    pub fn greater_than(config);
    setup { let bound = coerce::to_number(config); }
    test(input) { coerce::to_number(input) > bound }
}

crate::predicate! {
    /// `greaterThanOrEqual`
    pub fn greater_than_or_equal(config);
    setup { let bound = coerce::to_number(config); }
    test(input) { coerce::to_number(input) >= bound }
}

crate::predicate! {
    /// `lessThan`
    pub fn less_than(config);
    setup { let bound = coerce::to_number(config); }
    test(input) { coerce::to_number(input) < bound }
}

crate::predicate! {
    /// `lessThanOrEqual`
    pub fn less_than_or_equal(config);
    setup { let bound = coerce::to_number(config); }
    test(input) { coerce::to_number(input) <= bound }
}
