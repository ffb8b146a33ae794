//! Set membership validators
//!
//! Membership compares string forms, so `1` and `"1"` match. The allowed set
//! is read from an array configuration; a scalar configuration is a
//! one-element set and `null` the empty set.

use serde_json::Value;

use crate::foundation::coerce;

fn string_forms(config: &Value) -> Vec<String> {
    match config {
        Value::Null => Vec::new(),
        Value::Array(items) => items.iter().map(coerce::to_string_form).collect(),
        other => vec![coerce::to_string_form(other)],
    }
}

fn is_member(input: &Value, allowed: &[String]) -> bool {
    let needle = coerce::to_string_form(input);
    allowed.iter().any(|candidate| *candidate == needle)
}

crate::predicate! {
    /// `inValues`: a present input matches one of the configured values.
    pub fn in_values(config);
    setup { let allowed = string_forms(config); }
    test(input) { coerce::is_present(input) && is_member(input, &allowed) }
}

crate::predicate! {
    /// `notInValues`: a present input matches none of the configured values.
    pub fn not_in_values(config);
    setup { let forbidden = string_forms(config); }
    test(input) { coerce::is_present(input) && !is_member(input, &forbidden) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_in_values() {
        let p = in_values(&json!([1, 2, 3]));
        assert!(p.test(&json!(1)));
        assert!(p.test(&json!(2)));
        assert!(p.test(&json!(3)));
        assert!(p.test(&json!("3")));
        assert!(!p.test(&json!(4)));
    }

    #[test]
    fn test_not_in_values() {
        let p = not_in_values(&json!([1, 2, 3]));
        assert!(p.test(&json!(4)));
        assert!(!p.test(&json!(3)));
        assert!(!p.test(&json!(2)));
        assert!(!p.test(&json!(1)));
    }

    #[test]
    fn test_absent_input_fails_both() {
        let allowed = json!(["", "a"]);
        assert!(!in_values(&allowed).test(&Value::Null));
        assert!(!in_values(&allowed).test(&json!("")));
        assert!(!not_in_values(&allowed).test(&Value::Null));
        assert!(!not_in_values(&allowed).test(&json!("")));
    }

    #[test]
    fn test_zero_and_false_are_members() {
        assert!(in_values(&json!([0, false])).test(&json!(0)));
        assert!(in_values(&json!([0, false])).test(&json!(false)));
        assert!(not_in_values(&json!([1])).test(&json!(0)));
    }

    #[test]
    fn test_exponent_string_forms() {
        assert!(in_values(&json!(["1e-7"])).test(&json!(1e-7)));
        assert!(in_values(&json!([1e21])).test(&json!("1e+21")));
    }

    #[test]
    fn test_scalar_and_null_config() {
        assert!(in_values(&json!("a")).test(&json!("a")));
        assert!(!in_values(&Value::Null).test(&json!("a")));
        assert!(not_in_values(&Value::Null).test(&json!("a")));
    }
}
