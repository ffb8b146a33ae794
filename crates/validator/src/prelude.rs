//! Prelude module for convenient imports.
//!
//! Provides a single `use fieldcheck_validator::prelude::*;` import that
//! brings in the registry, descriptors, predicates and errors.
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::prelude::*;
//! use serde_json::json;
//!
//! let registry = ValidatorRegistry::with_builtins();
//! let short = registry
//!     .get_validator(&ValidatorDescriptor::new("max").with_valid_value(3))
//!     .unwrap();
//! assert!(short.validate(&json!("abc")));
//! ```

// ============================================================================
// REGISTRY
// ============================================================================

pub use crate::config::RegistryConfig;
pub use crate::descriptor::{Validator, ValidatorDefinition, ValidatorDescriptor};
pub use crate::registry::{RegistryBuilder, ValidatorRegistry};

// ============================================================================
// FOUNDATION
// ============================================================================

pub use crate::foundation::{
    Predicate, PredicateFactory, RegistryError, RegistryResult, ValidationError,
};
pub use crate::geometry::Point;
