//! Core validation types
//!
//! This module contains the building blocks every validator is made of:
//!
//! - **Predicates**: [`Predicate`], [`PredicateFactory`]
//! - **Errors**: [`RegistryError`], [`ValidationError`]
//! - **Coercions**: [`coerce`]: presence, numeric and string forms of dynamic values
//!
//! # Architecture
//!
//! ## 1. Configuration in, predicate out
//!
//! A validator is a factory applied to its configuration. The result is a
//! plain boolean test that closes over nothing but that configuration:
//!
//! ```
//! use fieldcheck_validator::foundation::{Predicate, PredicateFactory};
//! use serde_json::{Value, json};
//!
//! let at_least = |config: &Value| {
//!     let min = config.as_f64().unwrap_or(f64::NAN);
//!     Predicate::unary(move |v| v.as_f64().is_some_and(|n| n >= min))
//! };
//!
//! let adult = at_least.make(&json!(18));
//! assert!(adult.test(&json!(21)));
//! assert!(!adult.test(&json!(12)));
//! ```
//!
//! ## 2. Predicates never fail
//!
//! An input the predicate cannot interpret simply does not satisfy it.
//! Errors only exist at the registry boundary ([`RegistryError`]) and when a
//! caller asks a validator to explain a rejection ([`ValidationError`]).

pub mod coerce;
pub mod error;
pub mod predicate;

pub use error::{RegistryError, RegistryResult, ValidationError};
pub use predicate::{Predicate, PredicateFactory, PredicateFn};
