//! Built-in validators
//!
//! Every built-in is a predicate factory `fn(&Value) -> Predicate`, listed in
//! [`BUILTINS`] under the name it is registered with.
//!
//! # Categories
//!
//! - **Presence**: `isDefined`
//! - **Length**: `min`, `max`
//! - **Content**: `contain`, `notContain`, `like`, `notLike`
//! - **Numeric**: `equal`, `notEqual`, `between`, `notBetween`, `greaterThan`,
//!   `greaterThanOrEqual`, `lessThan`, `lessThanOrEqual`
//! - **Sets**: `inValues`, `notInValues`
//! - **Types**: `isString`, `isArray`, `isNumber`, `isInteger`, `isBoolean`, `isFunction`
//! - **Domains**: `codeInDomain`, `valueInDomain`
//! - **GIS**: `precision`, `maxDistance`
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::validators::{between, in_values};
//! use serde_json::json;
//!
//! assert!(between(&json!([1, 4])).test(&json!(3)));
//! assert!(in_values(&json!(["a", "b"])).test(&json!("b")));
//! ```

use serde_json::Value;

use crate::foundation::Predicate;

pub mod content;
pub mod domain;
pub mod gis;
pub mod length;
pub mod presence;
pub mod range;
pub mod sets;
pub mod types;

pub use content::{contain, like, not_contain, not_like};
pub use domain::{DomainEntry, code_in_domain, value_in_domain};
pub use gis::{max_distance, precision};
pub use length::{max, min};
pub use presence::is_defined;
pub use range::{
    between, equal, greater_than, greater_than_or_equal, less_than, less_than_or_equal,
    not_between, not_equal,
};
pub use sets::{in_values, not_in_values};
pub use types::{is_array, is_boolean, is_function, is_integer, is_number, is_string};

/// Signature shared by every built-in factory.
pub type BuiltinFactory = fn(&Value) -> Predicate;

/// The built-in catalog, by registered name.
pub const BUILTINS: &[(&str, BuiltinFactory)] = &[
    ("isDefined", is_defined),
    ("precision", precision),
    ("min", min),
    ("max", max),
    ("contain", contain),
    ("notContain", not_contain),
    ("like", like),
    ("notLike", not_like),
    ("equal", equal),
    ("notEqual", not_equal),
    ("between", between),
    ("notBetween", not_between),
    ("inValues", in_values),
    ("notInValues", not_in_values),
    ("greaterThan", greater_than),
    ("greaterThanOrEqual", greater_than_or_equal),
    ("lessThan", less_than),
    ("lessThanOrEqual", less_than_or_equal),
    ("isString", is_string),
    ("isArray", is_array),
    ("isNumber", is_number),
    ("isInteger", is_integer),
    ("isBoolean", is_boolean),
    ("isFunction", is_function),
    ("maxDistance", max_distance),
    ("codeInDomain", code_in_domain),
    ("valueInDomain", value_in_domain),
];

/// Looks up a built-in factory by name.
#[must_use]
pub fn builtin(name: &str) -> Option<BuiltinFactory> {
    BUILTINS
        .iter()
        .find(|(builtin_name, _)| *builtin_name == name)
        .map(|(_, factory)| *factory)
}
