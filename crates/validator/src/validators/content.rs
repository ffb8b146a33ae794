//! Containment and textual equality validators

use serde_json::Value;

use crate::foundation::coerce;

/// Containment test shared by `contain` and `notContain`.
///
/// `None` when the input cannot contain anything (absent, number, boolean,
/// object).
fn containment(input: &Value, needle: &Value, needle_text: &str) -> Option<bool> {
    if coerce::is_absent(input) {
        return None;
    }
    match input {
        Value::String(s) => Some(s.contains(needle_text)),
        Value::Array(items) => Some(items.iter().any(|item| coerce::strict_equals(item, needle))),
        _ => None,
    }
}

crate::predicate! {
    /// `contain`: a string input contains the needle as a substring, or an
    /// array input contains it as an element.
    pub fn contain(config);
    setup {
        let needle = config.clone();
        let needle_text = coerce::to_string_form(config);
    }
    test(input) { containment(input, &needle, &needle_text) == Some(true) }
}

crate::predicate! {
    /// `notContain`: a present string or array input does not contain the
    /// needle. Absent or non-containable inputs fail.
    pub fn not_contain(config);
    setup {
        let needle = config.clone();
        let needle_text = coerce::to_string_form(config);
    }
    test(input) { containment(input, &needle, &needle_text) == Some(false) }
}

/// Comparison shared by `like` and `notLike`.
///
/// Two absent values are alike; an absent and a present value are not.
fn alike(input: &Value, expected: Option<&str>) -> bool {
    match (coerce::is_present(input), expected) {
        (false, None) => true,
        (true, Some(expected)) => coerce::to_string_form(input) == expected,
        _ => false,
    }
}

fn expected_text(config: &Value) -> Option<String> {
    coerce::is_present(config).then(|| coerce::to_string_form(config))
}

crate::predicate! {
    /// `like`: the string forms of input and configuration are equal
    /// (case-sensitive).
    pub fn like(config);
    setup { let expected = expected_text(config); }
    test(input) { alike(input, expected.as_deref()) }
}

crate::predicate! {
    /// `notLike`: negation of [`like`].
    pub fn not_like(config);
    setup { let expected = expected_text(config); }
    test(input) { !alike(input, expected.as_deref()) }
}
