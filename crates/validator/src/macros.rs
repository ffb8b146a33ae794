//! Macros for declaring catalog predicates with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`predicate!`]: declare a predicate factory `fn(&Value) -> Predicate`
//!
//! # Examples
//!
//! ```rust,ignore
//! use fieldcheck_validator::predicate;
//! use fieldcheck_validator::foundation::coerce;
//!
//! // No configuration
//! predicate! {
//!     pub fn is_null();
//!     test(input) { input.is_null() }
//! }
//!
//! // Configuration prepared once, captured by the predicate
//! predicate! {
//!     pub fn at_least(config);
//!     setup { let bound = coerce::to_number(config); }
//!     test(input) { coerce::to_number(input) >= bound }
//! }
//! ```

// ============================================================================
// PREDICATE MACRO
// ============================================================================

/// Declares a predicate factory: a function taking the configuration value
/// and returning a [`Predicate`](crate::foundation::Predicate).
///
/// The generated function always has the signature
/// `fn(&Value) -> Predicate`, so it can be stored in the registry catalog
/// whether or not it reads its configuration.
///
/// # Variants
///
/// **Unary, unconfigured**:
/// ```rust,ignore
/// predicate! {
///     pub fn is_string();
///     test(input) { input.is_string() }
/// }
/// ```
///
/// **Unary, configured**: `setup` runs once per instantiation, `test` once
/// per input:
/// ```rust,ignore
/// predicate! {
///     pub fn max(config);
///     setup { let max = coerce::to_number(config); }
///     test(input) { coerce::length(input).is_some_and(|len| len as f64 <= max) }
/// }
/// ```
///
/// **Multi-argument, configured**: `test_args` receives the full argument slice:
/// ```rust,ignore
/// predicate! {
///     pub fn max_distance(config);
///     setup { let max = coerce::to_number(config); }
///     test_args(args) { distance_of(args) <= max }
/// }
/// ```
#[macro_export]
macro_rules! predicate {
    // ── Variant 1: Unary, no configuration ──────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis fn $name:ident();
        test($inp:ident) $rule:block
    ) => {
        $(#[$meta])*
        #[must_use]
        $vis fn $name(_config: &$crate::Value) -> $crate::foundation::Predicate {
            $crate::foundation::Predicate::unary(|$inp: &$crate::Value| $rule)
        }
    };

    // ── Variant 2: Unary, configured ────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis fn $name:ident($cfg:ident);
        setup { $($setup:tt)* }
        test($inp:ident) $rule:block
    ) => {
        $(#[$meta])*
        #[must_use]
        $vis fn $name($cfg: &$crate::Value) -> $crate::foundation::Predicate {
            $($setup)*
            $crate::foundation::Predicate::unary(move |$inp: &$crate::Value| $rule)
        }
    };

    // ── Variant 3: Multi-argument, configured ───────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis fn $name:ident($cfg:ident);
        setup { $($setup:tt)* }
        test_args($args:ident) $rule:block
    ) => {
        $(#[$meta])*
        #[must_use]
        $vis fn $name($cfg: &$crate::Value) -> $crate::foundation::Predicate {
            $($setup)*
            $crate::foundation::Predicate::new(move |$args: &[$crate::Value]| $rule)
        }
    };
}
