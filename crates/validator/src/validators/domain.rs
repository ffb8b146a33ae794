//! Coded-domain validators
//!
//! A domain is an ordered list of `{ code, name }` records, such as the
//! allowed voltage levels of a power line. `value` is accepted as an alias of
//! `name`. Codes and names are not required to be unique; lookup stops at
//! the first match.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::foundation::coerce;

/// One entry of a coded domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainEntry {
    /// Stored identifier.
    pub code: Value,
    /// Display label.
    #[serde(alias = "value")]
    pub name: Value,
}

impl DomainEntry {
    /// Creates a domain entry.
    pub fn new(code: impl Into<Value>, name: impl Into<Value>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// Reads a domain list from configuration, skipping elements that are not
/// `{ code, name }` records.
#[must_use]
pub fn parse_domain(config: &Value) -> Vec<DomainEntry> {
    match config {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| DomainEntry::deserialize(item).ok())
            .collect(),
        _ => Vec::new(),
    }
}

/// First entry whose code equals `code`.
#[must_use]
pub fn find_by_code<'a>(domain: &'a [DomainEntry], code: &Value) -> Option<&'a DomainEntry> {
    domain.iter().find(|entry| coerce::strict_equals(&entry.code, code))
}

/// First entry whose name equals `name`.
#[must_use]
pub fn find_by_name<'a>(domain: &'a [DomainEntry], name: &Value) -> Option<&'a DomainEntry> {
    domain.iter().find(|entry| coerce::strict_equals(&entry.name, name))
}

crate::predicate! {
    /// `codeInDomain`: a present input equals the `code` of some entry.
    pub fn code_in_domain(config);
    setup { let domain = parse_domain(config); }
    test(input) { coerce::is_present(input) && find_by_code(&domain, input).is_some() }
}

crate::predicate! {
    /// `valueInDomain`: a present input equals the `name` of some entry.
    pub fn value_in_domain(config);
    setup { let domain = parse_domain(config); }
    test(input) { coerce::is_present(input) && find_by_name(&domain, input).is_some() }
}
