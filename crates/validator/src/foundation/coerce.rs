//! Coercions over dynamic input values.
//!
//! Predicates receive untyped [`Value`]s, so every comparison first goes
//! through one of the conversions below. They follow the loose rules of
//! scripting hosts (`Number(x)`, `String(x)`) so that configurations written
//! for those hosts keep their meaning.
//!
//! # Presence
//!
//! A value is *absent* iff it is `null` or the empty string. Everything else,
//! including `0`, `false`, `[]` and `{}`, is present.

use serde_json::Value;

/// Returns `true` when `value` is `null` or the empty string.
#[inline]
#[must_use]
pub fn is_absent(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Returns `true` when `value` is neither `null` nor the empty string.
#[inline]
#[must_use]
pub fn is_present(value: &Value) -> bool {
    !is_absent(value)
}

/// Numeric coercion.
///
/// - `null` → `0`, booleans → `0`/`1`
/// - strings are trimmed and parsed; the empty string is `0`
/// - arrays coerce through their [string form](to_string_form)
/// - objects, and anything unparsable, are `NaN`
#[must_use]
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_number(s),
        Value::Array(_) => parse_number(&to_string_form(value)),
        Value::Object(_) => f64::NAN,
    }
}

fn parse_number(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0.0;
    }

    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&s[2..], radix).map_or(f64::NAN, |n| n as f64);
    }

    match s {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        // Rust accepts "inf"/"nan" spellings the host rejects.
        _ if s.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') => f64::NAN,
        _ => s.parse::<f64>().unwrap_or(f64::NAN),
    }
}

/// String form of a value.
///
/// Integral numbers print without a fractional part. Magnitudes below `1e-6`
/// or from `1e21` up use exponent form (`1e-7`, `1e+21`). Arrays join their
/// elements with `,` (rendering `null` elements as empty), objects print as
/// `[object Object]`.
#[must_use]
pub fn to_string_form(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if n.is_f64() {
                format_f64(n.as_f64().unwrap_or(f64::NAN))
            } else {
                n.to_string()
            }
        }
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => to_string_form(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_owned(),
    }
}

fn format_f64(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_owned()
    } else if n.is_infinite() {
        let s = if n > 0.0 { "Infinity" } else { "-Infinity" };
        s.to_owned()
    } else if n == 0.0 {
        // covers -0.0
        "0".to_owned()
    } else if (1e-6..1e21).contains(&n.abs()) {
        n.to_string()
    } else {
        // Exponent form, with an explicit sign on positive exponents: `1e+21`.
        let s = format!("{n:e}");
        match s.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => s,
        }
    }
}

/// Equality without cross-type coercion.
///
/// Numbers compare by value (`1` equals `1.0`); other values compare
/// structurally.
#[must_use]
pub fn strict_equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        _ => a == b,
    }
}

/// Length of a string (in chars) or an array. Other values have no length.
#[must_use]
pub fn length(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}
