//! Descriptors, definitions and validator instances
//!
//! - [`ValidatorDescriptor`] names a registered validator and carries its
//!   configuration. Canonical shape: `{ "name", "validValue"?, "errorMessage"? }`.
//! - [`ValidatorDefinition`] registers a new validator from a predicate.
//! - [`Validator`] is what a lookup returns: the name, the configuration and
//!   the ready-to-use predicate.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::foundation::{Predicate, RegistryError, ValidationError};

// ============================================================================
// DESCRIPTOR
// ============================================================================

/// Names a validator and its configuration.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::ValidatorDescriptor;
/// use serde_json::json;
///
/// let descriptor = ValidatorDescriptor::new("between")
///     .with_valid_value(json!([1, 4]))
///     .with_error_message("must be between 1 and 4");
///
/// let parsed = ValidatorDescriptor::from_json(&json!({
///     "name": "between",
///     "validValue": [1, 4],
///     "errorMessage": "must be between 1 and 4"
/// }))
/// .unwrap();
/// assert_eq!(parsed, descriptor);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatorDescriptor {
    /// Registered name of the validator.
    pub name: String,
    /// Configuration handed to the validator's factory.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub valid_value: Value,
    /// Message reported when the validator rejects an input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ValidatorDescriptor {
    /// Creates a descriptor with no configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            valid_value: Value::Null,
            error_message: None,
        }
    }

    /// Sets the configuration.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_valid_value(mut self, valid_value: impl Into<Value>) -> Self {
        self.valid_value = valid_value.into();
        self
    }

    /// Sets the error message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// Parses a descriptor from a JSON value.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::InvalidDescriptor`] if `value` is not an object
    /// - [`RegistryError::MissingName`] if `name` is missing, empty or not a
    ///   string (`available` is left empty; the registry fills it in)
    pub fn from_json(value: &Value) -> Result<Self, RegistryError> {
        let Value::Object(record) = value else {
            return Err(RegistryError::InvalidDescriptor {
                found: kind_of(value),
            });
        };

        let name = match record.get("name") {
            Some(Value::String(name)) if !name.is_empty() => name.clone(),
            _ => {
                return Err(RegistryError::MissingName {
                    available: Vec::new(),
                });
            }
        };

        Ok(Self {
            name,
            valid_value: record.get("validValue").cloned().unwrap_or(Value::Null),
            error_message: match record.get("errorMessage") {
                Some(Value::String(message)) => Some(message.clone()),
                Some(Value::Null) | None => None,
                Some(other) => Some(other.to_string()),
            },
        })
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ============================================================================
// DEFINITION
// ============================================================================

/// A validator supplied by the caller, for
/// [`ValidatorRegistry::add_validator`](crate::ValidatorRegistry::add_validator).
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::{Predicate, ValidatorDefinition};
/// use serde_json::json;
///
/// let exact = ValidatorDefinition::new("exact")
///     .with_valid_value(1)
///     .with_error_message("value must be equal to 1")
///     .with_predicate(Predicate::unary(|v| *v == json!(1)));
/// assert!(exact.predicate.is_some());
/// ```
#[derive(Debug, Clone)]
pub struct ValidatorDefinition {
    /// Name to register under; must be unique in the registry.
    pub name: String,
    /// Default configuration reported by instances of this validator.
    pub valid_value: Value,
    /// Default error message.
    pub error_message: Option<String>,
    /// The test itself. Registration fails without one.
    pub predicate: Option<Predicate>,
}

impl ValidatorDefinition {
    /// Starts a definition with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            valid_value: Value::Null,
            error_message: None,
            predicate: None,
        }
    }

    /// Sets the default configuration.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_valid_value(mut self, valid_value: impl Into<Value>) -> Self {
        self.valid_value = valid_value.into();
        self
    }

    /// Sets the default error message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// Sets the predicate.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_predicate(mut self, predicate: Predicate) -> Self {
        self.predicate = Some(predicate);
        self
    }

    /// Sets the predicate from a single-input closure.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_test<F>(self, test: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.with_predicate(Predicate::unary(test))
    }
}

// ============================================================================
// VALIDATOR INSTANCE
// ============================================================================

/// A resolved, ready-to-use validator.
///
/// Immutable once created. Cloning shares the predicate.
#[derive(Debug, Clone)]
pub struct Validator {
    name: String,
    valid_value: Value,
    error_message: Option<String>,
    predicate: Predicate,
}

impl Validator {
    pub(crate) fn new(
        name: String,
        valid_value: Value,
        error_message: Option<String>,
        predicate: Predicate,
    ) -> Self {
        Self {
            name,
            valid_value,
            error_message,
            predicate,
        }
    }

    /// Registered name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Configuration the predicate was built from.
    #[must_use]
    pub fn valid_value(&self) -> &Value {
        &self.valid_value
    }

    /// Caller-supplied error message, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// The underlying predicate.
    #[must_use]
    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    /// Tests a single input.
    #[must_use]
    pub fn validate(&self, input: &Value) -> bool {
        self.predicate.test(input)
    }

    /// Tests an argument list, for validators such as `maxDistance`.
    #[must_use]
    pub fn validate_args(&self, args: &[Value]) -> bool {
        self.predicate.test_args(args)
    }

    /// Tests a single input, explaining a rejection.
    ///
    /// # Errors
    ///
    /// A [`ValidationError`] whose code is the validator name and whose
    /// message is the configured error message.
    pub fn check(&self, input: &Value) -> Result<(), ValidationError> {
        if self.validate(input) {
            Ok(())
        } else {
            Err(self.rejection().with_param("actual", input.to_string()))
        }
    }

    /// Tests an argument list, explaining a rejection.
    ///
    /// # Errors
    ///
    /// See [`check`](Self::check).
    pub fn check_args(&self, args: &[Value]) -> Result<(), ValidationError> {
        if self.validate_args(args) {
            Ok(())
        } else {
            Err(self.rejection())
        }
    }

    fn rejection(&self) -> ValidationError {
        let message: Cow<'static, str> = match &self.error_message {
            Some(message) => Cow::Owned(message.clone()),
            None => Cow::Owned(format!("Value does not satisfy '{}'", self.name)),
        };
        let error = ValidationError::new(self.name.clone(), message);
        if self.valid_value.is_null() {
            error
        } else {
            error.with_param("valid_value", self.valid_value.to_string())
        }
    }
}
