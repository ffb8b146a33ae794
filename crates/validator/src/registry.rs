//! Validator registry
//!
//! The catalog of named predicate factories, plus the lookup and registration
//! facade over it. A registry is an ordinary value: build one at startup and
//! share it with `Arc` wherever validators are resolved.
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::{ValidatorDefinition, ValidatorDescriptor, ValidatorRegistry};
//! use serde_json::json;
//!
//! let registry = ValidatorRegistry::with_builtins();
//!
//! let between = registry
//!     .get_validator(&ValidatorDescriptor::new("between").with_valid_value(json!([1, 4])))
//!     .unwrap();
//! assert!(between.validate(&json!(3)));
//!
//! registry
//!     .add_validator(ValidatorDefinition::new("exact").with_test(|v| *v == json!(1)))
//!     .unwrap();
//! let exact = registry.get_validator_json(&json!({ "name": "exact" })).unwrap();
//! assert!(exact.validate(&json!(1)));
//! ```

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::RegistryConfig;
use crate::descriptor::{Validator, ValidatorDefinition, ValidatorDescriptor};
use crate::foundation::{Predicate, PredicateFactory, RegistryError, RegistryResult};
use crate::validators::BUILTINS;

// ============================================================================
// CATALOG ENTRY
// ============================================================================

/// A registered factory and the defaults applied when a descriptor omits
/// them.
#[derive(Clone)]
struct CatalogEntry {
    factory: Arc<dyn PredicateFactory>,
    valid_value: Value,
    error_message: Option<String>,
}

impl CatalogEntry {
    fn from_factory(factory: Arc<dyn PredicateFactory>) -> Self {
        Self {
            factory,
            valid_value: Value::Null,
            error_message: None,
        }
    }
}

impl fmt::Debug for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogEntry")
            .field("valid_value", &self.valid_value)
            .field("error_message", &self.error_message)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// REGISTRY
// ============================================================================

/// Name-keyed catalog of validators.
///
/// Lookups take a read lock; registrations take a write lock. Validators
/// returned by a lookup hold no reference to the registry.
#[derive(Debug)]
pub struct ValidatorRegistry {
    catalog: RwLock<HashMap<String, CatalogEntry>>,
}

impl ValidatorRegistry {
    /// Creates a registry with no validators.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            catalog: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a registry holding the full built-in catalog.
    #[must_use]
    pub fn with_builtins() -> Self {
        Self::from_config(&RegistryConfig::default())
    }

    /// Creates a registry as described by `config`.
    #[must_use]
    pub fn from_config(config: &RegistryConfig) -> Self {
        for excluded in &config.exclude {
            if !BUILTINS.iter().any(|(name, _)| name == excluded) {
                warn!(name = %excluded, "excluded validator is not a built-in");
            }
        }

        let catalog = BUILTINS
            .iter()
            .filter(|(name, _)| config.loads(name))
            .map(|&(name, factory)| {
                let factory: Arc<dyn PredicateFactory> = Arc::new(factory);
                (name.to_owned(), CatalogEntry::from_factory(factory))
            })
            .collect::<HashMap<_, _>>();

        info!(validators = catalog.len(), "created validator registry");

        Self {
            catalog: RwLock::new(catalog),
        }
    }

    /// Starts a [`RegistryBuilder`].
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Resolves a descriptor to a ready-to-use validator.
    ///
    /// A descriptor without `validValue` or `errorMessage` takes the
    /// defaults the validator was registered with.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::MissingName`] if the descriptor name is empty
    /// - [`RegistryError::UnknownValidator`] if nothing is registered under it
    pub fn get_validator(&self, descriptor: &ValidatorDescriptor) -> RegistryResult<Validator> {
        if descriptor.name.is_empty() {
            return Err(self.missing_name());
        }

        debug!(name = %descriptor.name, "resolving validator");

        let entry = self
            .catalog
            .read()
            .get(&descriptor.name)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownValidator {
                name: descriptor.name.clone(),
            })?;

        let valid_value = if descriptor.valid_value.is_null() {
            entry.valid_value
        } else {
            descriptor.valid_value.clone()
        };
        let error_message = descriptor
            .error_message
            .clone()
            .or(entry.error_message);

        let predicate = entry.factory.make(&valid_value);
        debug!(name = %descriptor.name, valid_value = %valid_value, "instantiated validator");

        Ok(Validator::new(
            descriptor.name.clone(),
            valid_value,
            error_message,
            predicate,
        ))
    }

    /// Resolves a descriptor given as JSON, in the shape
    /// `{ "name", "validValue"?, "errorMessage"? }`.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::InvalidDescriptor`] if `descriptor` is not an object
    /// - [`RegistryError::MissingName`] if it has no usable `name`
    /// - [`RegistryError::UnknownValidator`] if nothing is registered under it
    pub fn get_validator_json(&self, descriptor: &Value) -> RegistryResult<Validator> {
        match ValidatorDescriptor::from_json(descriptor) {
            Ok(descriptor) => self.get_validator(&descriptor),
            Err(RegistryError::MissingName { .. }) => Err(self.missing_name()),
            Err(err) => Err(err),
        }
    }

    /// Registers a caller-supplied validator.
    ///
    /// The entry resolves to `definition.predicate` whatever the lookup's
    /// configuration; the definition's `valid_value` and `error_message`
    /// become the defaults of later lookups.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::InvalidDefinition`] if the name is empty
    /// - [`RegistryError::DuplicateValidator`] if the name is taken, whether
    ///   or not the definition has a predicate
    /// - [`RegistryError::InvalidDefinition`] if there is no predicate
    pub fn add_validator(&self, definition: ValidatorDefinition) -> RegistryResult<Validator> {
        let ValidatorDefinition {
            name,
            valid_value,
            error_message,
            predicate,
        } = definition;

        if name.is_empty() {
            warn!("rejected validator definition without a name");
            return Err(RegistryError::invalid_definition(
                "name is required and must not be empty",
            ));
        }
        let mut catalog = self.catalog.write();
        let slot = match catalog.entry(name.clone()) {
            Entry::Occupied(_) => {
                warn!(name = %name, "rejected duplicate validator");
                return Err(RegistryError::DuplicateValidator { name });
            }
            Entry::Vacant(slot) => slot,
        };
        let Some(predicate) = predicate else {
            warn!(name = %name, "rejected validator definition without a predicate");
            return Err(RegistryError::invalid_definition(format!(
                "validator '{name}' has no predicate; supply one with `with_predicate` or `with_test`"
            )));
        };

        let shared = predicate.clone();
        let factory: Arc<dyn PredicateFactory> =
            Arc::new(move |_config: &Value| -> Predicate { shared.clone() });
        slot.insert(CatalogEntry {
            factory,
            valid_value: valid_value.clone(),
            error_message: error_message.clone(),
        });
        drop(catalog);
        info!(name = %name, "registered validator");

        Ok(Validator::new(name, valid_value, error_message, predicate))
    }

    /// Registers a factory that builds a predicate from each lookup's
    /// configuration.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::InvalidDefinition`] if `name` is empty
    /// - [`RegistryError::DuplicateValidator`] if `name` is taken
    pub fn register_factory<F>(&self, name: impl Into<String>, factory: F) -> RegistryResult<()>
    where
        F: PredicateFactory + 'static,
    {
        let name = name.into();
        if name.is_empty() {
            warn!("rejected factory without a name");
            return Err(RegistryError::invalid_definition(
                "name is required and must not be empty",
            ));
        }
        self.insert(&name, CatalogEntry::from_factory(Arc::new(factory)))
    }

    fn insert(&self, name: &str, entry: CatalogEntry) -> RegistryResult<()> {
        match self.catalog.write().entry(name.to_owned()) {
            Entry::Occupied(_) => {
                warn!(name = %name, "rejected duplicate validator");
                Err(RegistryError::DuplicateValidator {
                    name: name.to_owned(),
                })
            }
            Entry::Vacant(slot) => {
                slot.insert(entry);
                info!(name = %name, "registered validator");
                Ok(())
            }
        }
    }

    fn missing_name(&self) -> RegistryError {
        RegistryError::MissingName {
            available: self.names(),
        }
    }

    /// Whether a validator is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.catalog.read().contains_key(name)
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.catalog.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered validators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.catalog.read().len()
    }

    /// Whether no validators are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.catalog.read().is_empty()
    }
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builder for registries that combine built-ins with caller validators.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::{Predicate, ValidatorDefinition, ValidatorRegistry};
/// use fieldcheck_validator::foundation::coerce;
/// use serde_json::{Value, json};
///
/// let registry = ValidatorRegistry::builder()
///     .exclude("isFunction")
///     .with_validator(ValidatorDefinition::new("isNull").with_test(Value::is_null))
///     .with_factory("multipleOf", |config: &Value| {
///         let step = coerce::to_number(config);
///         Predicate::unary(move |v| coerce::to_number(v) % step == 0.0)
///     })
///     .build()
///     .unwrap();
///
/// assert!(registry.contains("isNull"));
/// assert!(!registry.contains("isFunction"));
/// let even = registry.get_validator_json(&json!({ "name": "multipleOf", "validValue": 2 })).unwrap();
/// assert!(even.validate(&json!(4)));
/// ```
#[derive(Default)]
pub struct RegistryBuilder {
    config: RegistryConfig,
    definitions: Vec<ValidatorDefinition>,
    factories: Vec<(String, Arc<dyn PredicateFactory>)>,
}

impl RegistryBuilder {
    /// Creates a builder that loads every built-in.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the configuration.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_config(mut self, config: RegistryConfig) -> Self {
        self.config = config;
        self
    }

    /// Skips the built-in catalog.
    #[must_use = "builder methods must be chained or built"]
    pub fn without_builtins(mut self) -> Self {
        self.config.builtins = false;
        self
    }

    /// Leaves out one built-in.
    #[must_use = "builder methods must be chained or built"]
    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.config.exclude.push(name.into());
        self
    }

    /// Adds a caller validator, registered on [`build`](Self::build).
    #[must_use = "builder methods must be chained or built"]
    pub fn with_validator(mut self, definition: ValidatorDefinition) -> Self {
        self.definitions.push(definition);
        self
    }

    /// Adds a factory, registered on [`build`](Self::build).
    #[must_use = "builder methods must be chained or built"]
    pub fn with_factory<F>(mut self, name: impl Into<String>, factory: F) -> Self
    where
        F: PredicateFactory + 'static,
    {
        self.factories.push((name.into(), Arc::new(factory)));
        self
    }

    /// Builds the registry.
    ///
    /// # Errors
    ///
    /// The first error raised while registering the added validators and
    /// factories, in the order they were added (factories after validators).
    pub fn build(self) -> RegistryResult<ValidatorRegistry> {
        let registry = ValidatorRegistry::from_config(&self.config);
        for definition in self.definitions {
            registry.add_validator(definition)?;
        }
        for (name, factory) in self.factories {
            registry.register_factory(name, move |config: &Value| factory.make(config))?;
        }
        Ok(registry)
    }
}

impl fmt::Debug for RegistryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field("config", &self.config)
            .field("definitions", &self.definitions)
            .field(
                "factories",
                &self.factories.iter().map(|(name, _)| name).collect::<Vec<_>>(),
            )
            .finish()
    }
}
