//! # fieldcheck-validator
//!
//! A registry of named, configurable validation predicates for field data.
//!
//! A validator is a factory applied to a configuration value (a threshold, a
//! range, a domain list). The result is a pure boolean test over one or more
//! input values. Validators are looked up by name in a [`ValidatorRegistry`],
//! which ships with a built-in catalog and accepts new entries at runtime.
//!
//! ## Quick Start
//!
//! ```
//! use fieldcheck_validator::prelude::*;
//! use serde_json::json;
//!
//! let registry = ValidatorRegistry::with_builtins();
//!
//! let voltage = registry
//!     .get_validator_json(&json!({
//!         "name": "codeInDomain",
//!         "validValue": [{ "code": 1, "name": "0.4 kV" }, { "code": 2, "name": "10 kV" }],
//!         "errorMessage": "unknown voltage level"
//!     }))
//!     .unwrap();
//!
//! assert!(voltage.validate(&json!(2)));
//! assert_eq!(voltage.check(&json!(7)).unwrap_err().message, "unknown voltage level");
//! ```
//!
//! ## Values
//!
//! Inputs and configurations are [`serde_json::Value`]s. A value is absent
//! when it is `null` or the empty string; every other value, including `0`
//! and `false`, is present. Numeric and string coercions live in
//! [`foundation::coerce`].
//!
//! ## Built-in Validators
//!
//! See [`validators`] for the catalog, and [`predicate!`] for declaring new
//! factories in the same style.

pub mod config;
pub mod descriptor;
pub mod foundation;
pub mod geometry;
mod macros;
pub mod prelude;
pub mod registry;
pub mod validators;

pub use config::RegistryConfig;
pub use descriptor::{Validator, ValidatorDefinition, ValidatorDescriptor};
pub use foundation::{Predicate, PredicateFactory, RegistryError, ValidationError};
pub use registry::{RegistryBuilder, ValidatorRegistry};
pub use serde_json::Value;
