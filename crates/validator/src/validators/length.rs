//! Length validators
//!
//! Length is measured in Unicode scalar values for strings and in elements
//! for arrays. Inputs without a length satisfy neither `min` nor `max`.

use crate::foundation::coerce;

crate::predicate! {
    /// `min`: the input is at least `config` long.
    pub fn min(config);
    setup { let min = coerce::to_number(config); }
    test(input) { coerce::length(input).is_some_and(|len| len as f64 >= min) }
}

crate::predicate! {
    /// `max`: the input is at most `config` long.
    pub fn max(config);
    setup { let max = coerce::to_number(config); }
    test(input) { coerce::length(input).is_some_and(|len| len as f64 <= max) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_min() {
        let p = min(&json!(3));
        assert!(!p.test(&json!("as")));
        assert!(p.test(&json!("asd")));
        assert!(p.test(&json!("asdf")));

        assert!(!p.test(&json!([1, 2])));
        assert!(p.test(&json!([1, 2, 3])));
        assert!(p.test(&json!([1, 2, 3, 4])));
    }

    #[test]
    fn test_max() {
        let p = max(&json!(3));
        assert!(p.test(&json!("as")));
        assert!(p.test(&json!("asd")));
        assert!(!p.test(&json!("asdf")));

        assert!(p.test(&json!([1, 2])));
        assert!(p.test(&json!([1, 2, 3])));
        assert!(!p.test(&json!([1, 2, 3, 4])));
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert!(max(&json!(4)).test(&json!("ñáéí")));
    }

    #[test]
    fn test_without_length() {
        assert!(!min(&json!(0)).test(&json!(12)));
        assert!(!max(&json!(10)).test(&Value::Null));
        assert!(!max(&json!(10)).test(&json!({"length": 1})));
    }

    #[test]
    fn test_unusable_config() {
        assert!(!min(&json!("lots")).test(&json!("abc")));
        assert!(max(&json!("3")).test(&json!("abc")));
    }
}
