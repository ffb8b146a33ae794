//! Error types
//!
//! Two kinds of failure exist:
//!
//! - [`RegistryError`]: a lookup or registration was rejected. These are
//!   caller-input errors and are never retriable.
//! - [`ValidationError`]: a configured validator rejected an input. Only
//!   produced by [`Validator::check`](crate::Validator::check); predicates
//!   themselves never fail.
//!
//! All string fields of [`ValidationError`] use `Cow<'static, str>` so that
//! static codes and messages do not allocate.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// REGISTRY ERROR
// ============================================================================

/// Errors raised by [`ValidatorRegistry`](crate::ValidatorRegistry) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The descriptor is missing or is not a record.
    #[error(
        "descriptor must be an object, got {found}. For example: \
         {{\"name\": \"precision\", \"validValue\": 4}}, \
         {{\"name\": \"between\", \"validValue\": [1, 4]}}"
    )]
    InvalidDescriptor {
        /// Kind of value that was supplied instead.
        found: &'static str,
    },

    /// The descriptor does not name a validator.
    #[error("descriptor name is required and should be one of: {}", .available.join(", "))]
    MissingName {
        /// Names registered at the time of the lookup.
        available: Vec<String>,
    },

    /// No validator is registered under the name.
    #[error(
        "validator '{name}' could not be found; register it first with \
         `add_validator(ValidatorDefinition::new(\"{name}\").with_predicate(..))`"
    )]
    UnknownValidator {
        /// The requested name.
        name: String,
    },

    /// The definition passed to `add_validator` is incomplete.
    #[error("invalid validator definition: {reason}")]
    InvalidDefinition {
        /// What is wrong with the definition.
        reason: Cow<'static, str>,
    },

    /// A validator with the same name is already registered.
    #[error(
        "validator '{name}' already exists; use it with \
         `get_validator(&ValidatorDescriptor::new(\"{name}\"))`"
    )]
    DuplicateValidator {
        /// The conflicting name.
        name: String,
    },
}

impl RegistryError {
    /// Stable, machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidDescriptor { .. } => "invalid_descriptor",
            Self::MissingName { .. } => "missing_name",
            Self::UnknownValidator { .. } => "unknown_validator",
            Self::InvalidDefinition { .. } => "invalid_definition",
            Self::DuplicateValidator { .. } => "duplicate_validator",
        }
    }

    pub(crate) fn invalid_definition(reason: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidDefinition {
            reason: reason.into(),
        }
    }
}

/// Result alias for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation failure.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("max", "Too many items")
///     .with_param("valid_value", "3")
///     .with_param("actual", "5");
/// assert_eq!(error.param("actual"), Some("5"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code, the name of the failing validator.
    pub code: Cow<'static, str>,

    /// Human-readable message.
    pub message: Cow<'static, str>,

    /// Ordered key-value parameters (typically 0-3).
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,

    /// Optional hint for fixing the input.
    pub help: Option<Cow<'static, str>>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: Vec::new(),
            help: None,
        }
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Adds help text.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_help(mut self, help: impl Into<Cow<'static, str>>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        if let Some(help) = &self.help {
            write!(f, "\n  Help: {help}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}
