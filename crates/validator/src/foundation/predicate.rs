//! Predicates and the factories that build them.
//!
//! A [`Predicate`] is an immutable, shareable boolean test over one or more
//! input values. A [`PredicateFactory`] turns a configuration value into a
//! predicate; every catalog entry in the registry is a factory.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

static NULL: Value = Value::Null;

/// Boxed signature of a predicate body.
pub type PredicateFn = dyn Fn(&[Value]) -> bool + Send + Sync;

// ============================================================================
// PREDICATE
// ============================================================================

/// A configured boolean test.
///
/// Predicates close only over their configuration, so they are cheap to clone
/// and safe to share between threads.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::foundation::Predicate;
/// use serde_json::json;
///
/// let positive = Predicate::unary(|v| v.as_f64().is_some_and(|n| n > 0.0));
/// assert!(positive.test(&json!(3)));
/// assert!(!positive.test(&json!(-3)));
/// assert!((!positive).test(&json!(-3)));
/// ```
#[derive(Clone)]
pub struct Predicate {
    inner: Arc<PredicateFn>,
}

impl Predicate {
    /// Creates a predicate over the full argument list.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> bool + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    /// Creates a predicate over a single input.
    ///
    /// The input is the first argument; a call without arguments tests `null`.
    pub fn unary<F>(f: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self::new(move |args: &[Value]| f(args.first().unwrap_or(&NULL)))
    }

    /// Creates a predicate that ignores its input and returns `result`.
    pub fn constant(result: bool) -> Self {
        Self::new(move |_: &[Value]| result)
    }

    /// Tests a single input.
    #[inline]
    pub fn test(&self, input: &Value) -> bool {
        (self.inner)(std::slice::from_ref(input))
    }

    /// Tests an argument list, for predicates that take several inputs.
    #[inline]
    pub fn test_args(&self, args: &[Value]) -> bool {
        (self.inner)(args)
    }
}

impl std::ops::Not for Predicate {
    type Output = Self;

    /// Inverts the predicate.
    fn not(self) -> Self {
        let inner = self.inner;
        Self::new(move |args: &[Value]| !inner(args))
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate").finish_non_exhaustive()
    }
}

// ============================================================================
// FACTORY
// ============================================================================

/// Builds a [`Predicate`] from a configuration value.
///
/// Implemented for every `Fn(&Value) -> Predicate`, so plain functions and
/// closures can be registered directly.
pub trait PredicateFactory: Send + Sync {
    /// Instantiates the predicate for `config`.
    fn make(&self, config: &Value) -> Predicate;
}

impl<F> PredicateFactory for F
where
    F: Fn(&Value) -> Predicate + Send + Sync,
{
    fn make(&self, config: &Value) -> Predicate {
        self(config)
    }
}
